//! Binary-level tests driving the CLI against a temp store.

use assert_cmd::Command;
use tempfile::TempDir;

fn copilot(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("decision-copilot").unwrap();
    cmd.env("DECISION_COPILOT_STORE", dir.path().join("decisions.json"));
    cmd
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn list_on_a_fresh_store_reports_no_records() {
    let dir = TempDir::new().unwrap();
    let assert = copilot(&dir).arg("list").assert().success();
    assert!(stdout_of(assert).contains("尚無決策記錄"));
}

#[test]
fn stats_on_a_fresh_store_shows_zero_totals() {
    let dir = TempDir::new().unwrap();
    let assert = copilot(&dir).arg("stats").assert().success();

    let out = stdout_of(assert);
    assert!(out.contains("決策統計"));
    assert!(out.contains("總決策數"));
}

#[test]
fn status_update_on_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    copilot(&dir).args(["status", "42", "done"]).assert().failure();
}

#[test]
fn start_with_empty_question_warns_and_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let assert = copilot(&dir)
        .arg("start")
        .write_stdin("\n")
        .assert()
        .success();
    assert!(stdout_of(assert).contains("問題不能為空"));
}

#[test]
fn scripted_session_is_analyzed_and_persisted() {
    let dir = TempDir::new().unwrap();

    // question + the five work-script answers, in template order
    let script = "我要不要接受這份新工作？\n30%\n是\n了解\n不變\n很有前景\n";
    let assert = copilot(&dir)
        .arg("start")
        .write_stdin(script)
        .assert()
        .success();

    let out = stdout_of(assert);
    assert!(out.contains("偵測到決策類型：工作"));
    assert!(out.contains("最終建議"));
    assert!(out.contains("積極考慮"));
    assert!(out.contains("決策已儲存"));

    let assert = copilot(&dir).arg("list").assert().success();
    let out = stdout_of(assert);
    assert!(out.contains("我要不要接受這份新工作？"));
    assert!(out.contains("積極考慮"));
    assert!(out.contains("待執行"));

    // transition it and watch the statistics follow
    copilot(&dir).args(["status", "1", "done"]).assert().success();
    let assert = copilot(&dir).arg("stats").assert().success();
    assert!(stdout_of(assert).contains("已完成"));
}
