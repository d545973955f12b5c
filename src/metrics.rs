//! Process-local answer counters.
//! Read by the CLI at the end of a game; nothing is exported or persisted.
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock};

static TOTAL_SUBMISSIONS: AtomicU64 = AtomicU64::new(0);
static TOTAL_SOLVES: AtomicU64 = AtomicU64::new(0);

static ROOM_COUNTERS: OnceLock<Mutex<HashMap<String, RoomCounter>>> = OnceLock::new();

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RoomCounter {
    pub submissions: u64,
    pub solves: u64,
    pub misses: u64,
}

fn room_counter_lock() -> MutexGuard<'static, HashMap<String, RoomCounter>> {
    let lock = ROOM_COUNTERS.get_or_init(|| Mutex::new(HashMap::new()));
    // Counters stay usable even if a holder panicked mid-update.
    lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn record_solve(room_id: &str) -> RoomCounter {
    TOTAL_SUBMISSIONS.fetch_add(1, Ordering::Relaxed);
    TOTAL_SOLVES.fetch_add(1, Ordering::Relaxed);
    let mut guard = room_counter_lock();
    let counter = guard.entry(room_id.to_string()).or_default();
    counter.submissions = counter.submissions.saturating_add(1);
    counter.solves = counter.solves.saturating_add(1);
    *counter
}

pub fn record_miss(room_id: &str) -> RoomCounter {
    TOTAL_SUBMISSIONS.fetch_add(1, Ordering::Relaxed);
    let mut guard = room_counter_lock();
    let counter = guard.entry(room_id.to_string()).or_default();
    counter.submissions = counter.submissions.saturating_add(1);
    counter.misses = counter.misses.saturating_add(1);
    *counter
}

pub fn room_counters_snapshot() -> HashMap<String, RoomCounter> {
    room_counter_lock().clone()
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Snapshot {
    pub submissions: u64,
    pub solves: u64,
    /// Share of submissions accepted; `None` before the first one.
    pub solve_rate: Option<f64>,
}

pub fn snapshot() -> Snapshot {
    let submissions = TOTAL_SUBMISSIONS.load(Ordering::Relaxed);
    let solves = TOTAL_SOLVES.load(Ordering::Relaxed);
    Snapshot {
        submissions,
        solves,
        solve_rate: if submissions > 0 {
            Some(solves as f64 / submissions as f64)
        } else {
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Other tests in this crate record into the same globals, so only use
    // room ids nothing else touches and compare deltas for the totals.
    #[test]
    fn solve_and_miss_update_room_counter() {
        let before = snapshot();

        let first = record_miss("metrics-test-room");
        assert_eq!(first.submissions, 1);
        assert_eq!(first.misses, 1);
        assert_eq!(first.solves, 0);

        let second = record_solve("metrics-test-room");
        assert_eq!(second.submissions, 2);
        assert_eq!(second.solves, 1);

        let snap = room_counters_snapshot();
        let room = snap.get("metrics-test-room").expect("room counter");
        assert_eq!(room.misses, 1);
        assert_eq!(room.solves, 1);

        let after = snapshot();
        assert!(after.submissions >= before.submissions + 2);
        assert!(after.solves >= before.solves + 1);
        assert!(after.solve_rate.is_some());
    }
}
