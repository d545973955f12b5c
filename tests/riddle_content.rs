//! The shipped riddle table against the answer checker.

use riddlereef::answer::AnswerMatcher;
use riddlereef::game::seed_loader::builtin_rooms;
use riddlereef::game::RiddleTable;

#[test]
fn every_canonical_answer_accepts_itself_with_noise() {
    let table = RiddleTable::builtin().expect("builtin riddles");
    let matcher = AnswerMatcher::default();
    for room in table.room_ids() {
        for riddle in table.riddles_for(room) {
            let shouted = format!("  {}?!  ", riddle.answer.to_uppercase());
            assert!(matcher.matches(&shouted, &riddle.answer), "{}: {:?}", room, shouted);
            let with_article = format!("The {}", riddle.answer);
            assert!(
                matcher.matches(&with_article, &riddle.answer),
                "{}: {:?}",
                room,
                with_article
            );
        }
    }
}

#[test]
fn every_question_is_present() {
    let table = RiddleTable::builtin().expect("builtin riddles");
    for room in table.room_ids() {
        for riddle in table.riddles_for(room) {
            assert!(!riddle.question.trim().is_empty(), "blank question in {}", room);
        }
    }
}

#[test]
fn open_up_shop_is_mini_game_only() {
    let table = RiddleTable::builtin().expect("builtin riddles");
    let rooms = builtin_rooms().expect("rooms");
    let without: Vec<&str> = rooms
        .iter()
        .filter(|r| !table.has_riddles(&r.id))
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(without, vec!["open-up-shop"]);
}

#[test]
fn load_from_disk_matches_builtin_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("riddles.json");
    std::fs::write(
        &path,
        r#"{"tide-pool": [{"question": "Salty and still?", "answer": "a rock pool"}]}"#,
    )
    .expect("write");
    let table = RiddleTable::load(&path).expect("load");
    assert_eq!(table.len(), 1);
    assert!(AnswerMatcher::default().matches("rock pool", &table.riddles_for("tide-pool")[0].answer));
}

#[test]
fn missing_file_is_io_error() {
    let err = RiddleTable::load("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().starts_with("io error"));
}
