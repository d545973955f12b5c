use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_riddlereef"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("spawn riddlereef")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// A config path inside a fresh directory; the file itself does not exist.
fn scratch_config() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("config.toml");
    (dir, path)
}

#[test]
fn check_accepts_noisy_answer() {
    let (_dir, config) = scratch_config();
    let output = run(&config, &["check", "Beer!!", "beer"]);
    assert!(output.status.success(), "{:?}", output);
    assert!(stdout(&output).starts_with("correct"), "{}", stdout(&output));
}

#[test]
fn check_rejects_wrong_answer_with_exit_one() {
    let (_dir, config) = scratch_config();
    let output = run(&config, &["check", "dice", "roulette"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("incorrect"), "{}", stdout(&output));
}

#[test]
fn check_threshold_override_is_validated() {
    let (_dir, config) = scratch_config();
    let output = run(&config, &["check", "--threshold", "1.5", "beer", "beer"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty(), "{}", stdout(&output));

    let lenient = run(&config, &["check", "-t", "0.4", "mackerel", "makarel"]);
    assert!(lenient.status.success(), "{:?}", lenient);
}

#[test]
fn best_reports_original_target() {
    let (_dir, config) = scratch_config();
    let output = run(
        &config,
        &["best", "slot machne", "The Roulette!", "A Slot Machine", "Poker"],
    );
    assert!(output.status.success(), "{:?}", output);
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 4, "{}", text);
    assert!(text.contains("  The Roulette!"), "{}", text);
    assert!(text.ends_with("best: A Slot Machine\n"), "{}", text);
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let (_dir, config) = scratch_config();

    let first = run(&config, &["init"]);
    assert!(first.status.success(), "{:?}", first);
    let written = std::fs::read_to_string(&config).expect("config written");
    assert!(written.contains("[matcher]"), "{}", written);

    std::fs::write(&config, format!("{}\n# local edit\n", written)).expect("edit");
    let second = run(&config, &["init"]);
    assert_eq!(second.status.code(), Some(1));
    let kept = std::fs::read_to_string(&config).expect("config kept");
    assert!(kept.contains("# local edit"));

    let forced = run(&config, &["init", "--force"]);
    assert!(forced.status.success(), "{:?}", forced);
    let rewritten = std::fs::read_to_string(&config).expect("config rewritten");
    assert!(!rewritten.contains("# local edit"));
}

#[test]
fn configured_threshold_applies_to_check() {
    let (_dir, config) = scratch_config();
    std::fs::write(&config, "[matcher]\nthreshold = 0.95\n").expect("write config");
    let output = run(&config, &["check", "slot machne", "slot machine"]);
    assert_eq!(output.status.code(), Some(1));
}
