//! 命令行入口的集成测试

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn file_search() -> Command {
    Command::cargo_bin("file-search").unwrap()
}

fn permutations() -> Command {
    Command::cargo_bin("permutations").unwrap()
}

#[test]
fn search_reports_counts_and_matches() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
    fs::write(dir.path().join("report.txt"), "").unwrap();
    fs::write(dir.path().join("sub/deeper/report.txt"), "").unwrap();
    fs::write(dir.path().join("sub/Notes.txt"), "").unwrap();

    file_search()
        .arg(dir.path())
        .args(["report.txt", "notes.txt", "false", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found: "))
        .stdout(predicate::str::contains("report.txt 找到 2 次"))
        .stdout(predicate::str::contains("notes.txt 找到 1 次"));
}

#[test]
fn search_case_sensitive_flag() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Notes.txt"), "").unwrap();

    file_search()
        .arg(dir.path())
        .args(["notes.txt", "true", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt 找到 0 次"));
}

#[test]
fn search_invalid_directory_reports_zero() {
    let dir = tempdir().unwrap();

    file_search()
        .arg(dir.path().join("FakeFolderXYZ"))
        .args(["sample.txt", "true", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("警告: 无效的目录路径"))
        .stdout(predicate::str::contains("sample.txt 找到 0 次"));
}

#[test]
fn search_too_few_arguments_prints_usage() {
    file_search()
        .args(["some_dir", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn search_writes_log_files_when_enabled() {
    let dir = tempdir().unwrap();
    let logs = tempdir().unwrap();
    let config_path = logs.path().join("config.toml");
    fs::write(
        &config_path,
        format!("[logging]\nlog_dir = {:?}\n", logs.path().display().to_string()),
    )
    .unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();

    file_search()
        .arg(dir.path())
        .args(["a.txt", "true", "--no-progress", "--log", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("完整日志已保存到"));

    let has_debug_log = fs::read_dir(logs.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .any(|e| e.file_name().to_string_lossy().starts_with("debug_"));
    assert!(has_debug_log);
}

#[test]
fn permutations_from_stdin_without_duplicates() {
    permutations()
        .write_stdin("ABA\nfalse\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("递归排列 (3):"))
        .stdout(predicate::str::contains("[ABA, AAB, BAA]"))
        .stdout(predicate::str::contains("迭代 (Heap)排列 (3):"))
        .stdout(predicate::str::contains("递归用时: "))
        .stdout(predicate::str::contains(" ms"));
}

#[test]
fn permutations_from_arguments_with_duplicates() {
    permutations()
        .args(["ABA", "--include-duplicates", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("递归排列 (6):"))
        .stdout(predicate::str::contains("迭代 (Heap)排列 (6):"))
        .stdout(predicate::str::contains("预期数量: 6"));
}

#[test]
fn permutations_empty_input_is_rejected() {
    permutations()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("错误: 输入字符串不能为空"))
        .stdout(predicate::str::contains("排列 (").not());
}

#[test]
fn permutations_long_input_is_rejected() {
    permutations()
        .args(["ABCDEFGHIJKL", "--include-duplicates", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("输入过长: 12 个字符"));
}

#[test]
fn permutations_invalid_boolean_fails() {
    permutations()
        .write_stdin("AB\nmaybe\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("无效的布尔值"));
}
