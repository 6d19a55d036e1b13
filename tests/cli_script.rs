use std::fs;

use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use predicates::prelude::*;
use predicates::str::contains;

struct Harness {
    templates: TempDir,
    work: TempDir,
}

impl Harness {
    fn new() -> Self {
        Self {
            templates: TempDir::new().expect("template dir"),
            work: TempDir::new().expect("work dir"),
        }
    }

    fn with_templates(files: &[(&str, &str)]) -> Self {
        let harness = Self::new();
        for (name, body) in files {
            harness
                .templates
                .child(name)
                .write_str(body)
                .expect("write template");
        }
        harness
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("templet").expect("binary exists");
        cmd.current_dir(self.work.path())
            .env("TEMPLET_HOME", self.templates.path())
            .env("NO_COLOR", "1")
            .env_remove("TEMPLET_TEST_KEYS")
            .env_remove("TEMPLET_INPUT");
        cmd
    }

    fn created(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.work.path())
            .expect("list work dir")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

#[test]
fn typed_copy_writes_selected_template() {
    let harness = Harness::with_templates(&[("a.md", "alpha"), ("b.json", "{}")]);
    harness
        .command()
        .write_stdin("down\ncopy\n")
        .assert()
        .success()
        .stdout(contains("templet [not-fancy]"))
        .stdout(contains("Created: b.json"));

    assert_eq!(harness.created(), vec!["b.json"]);
    harness.work.child("b.json").assert("{}");
}

#[test]
fn typed_enter_creates_dated_file() {
    let harness = Harness::with_templates(&[("notes.md", "body\n")]);
    harness
        .command()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Created:"));

    let created = harness.created();
    assert_eq!(created.len(), 1);
    let dated = regex::Regex::new(r"^\d{4}-\d{2}-\d{2}-notes\.md$").expect("valid regex");
    assert!(dated.is_match(&created[0]), "unexpected name {created:?}");
    let body = fs::read_to_string(harness.work.path().join(&created[0])).expect("read");
    assert!(body.starts_with("# ✦ Template: notes.md\n"));
    assert!(body.ends_with("---\n\nbody\n"));
}

#[test]
fn quit_leaves_directory_untouched() {
    let harness = Harness::with_templates(&[("a.txt", "a")]);
    harness
        .command()
        .write_stdin("3\nup\nquit\n")
        .assert()
        .success()
        .stdout(contains("Created").not());
    assert!(harness.created().is_empty());
}

#[test]
fn closed_input_exits_cleanly() {
    let harness = Harness::with_templates(&[("a.txt", "a")]);
    harness.command().write_stdin("").assert().success();
    assert!(harness.created().is_empty());
}

#[test]
fn empty_catalog_only_accepts_quit() {
    let harness = Harness::new();
    harness
        .command()
        .write_stdin("enter\n\ncopy\n\nq\n")
        .assert()
        .success()
        .stdout(contains("No templates found!"))
        .stdout(contains("Unknown command. Try: quit"));
    assert!(harness.created().is_empty());
}

#[test]
fn missing_template_directory_is_created() {
    let harness = Harness::new();
    let nested = harness.templates.child("Documents").child("templet");
    let mut cmd = harness.command();
    cmd.env("TEMPLET_HOME", nested.path())
        .write_stdin("q\n")
        .assert()
        .success();
    nested.assert(predicate::path::is_dir());
}

#[test]
fn unusable_template_directory_fails_startup() {
    let harness = Harness::new();
    let blocker = harness.templates.child("not-a-dir");
    blocker.write_str("").expect("write blocker");
    let mut cmd = harness.command();
    cmd.env("TEMPLET_HOME", blocker.path())
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(contains("Error: cannot use template directory"));
}

#[test]
fn scripted_keys_navigate_and_copy() {
    let harness = Harness::with_templates(&[("a.txt", "a"), ("b.txt", "b"), ("c.txt", "c")]);
    harness
        .command()
        .env("TEMPLET_TEST_KEYS", "DOWN,DOWN,DOWN,UP,x,c")
        .assert()
        .success()
        .stdout(contains("templet [fancy]"))
        .stdout(contains("Created: b.txt"));
    harness.work.child("b.txt").assert("b");
}

#[test]
fn scripted_keys_quit_without_writing() {
    let harness = Harness::with_templates(&[("a.txt", "a")]);
    harness
        .command()
        .env("TEMPLET_TEST_KEYS", "DOWN,q")
        .assert()
        .success();
    assert!(harness.created().is_empty());
}

#[test]
fn scripted_interrupt_is_graceful() {
    let harness = Harness::with_templates(&[("a.txt", "a")]);
    harness
        .command()
        .env("TEMPLET_TEST_KEYS", "DOWN,^C,ENTER")
        .assert()
        .success();
    assert!(harness.created().is_empty());
}

#[test]
fn read_failure_is_reported_without_crashing() {
    let harness = Harness::with_templates(&[("bytes.txt", "")]);
    fs::write(harness.templates.path().join("bytes.txt"), [0xff, 0xfe]).expect("write bytes");
    harness
        .command()
        .write_stdin("copy\n")
        .assert()
        .success()
        .stdout(contains("Could not create file: cannot read template `bytes.txt`"));
    assert!(harness.created().is_empty());
}

#[cfg(unix)]
#[test]
fn line_mode_interrupt_exits_cleanly() {
    use std::io::Read;
    use std::process::Stdio;

    let harness = Harness::with_templates(&[("a.txt", "a")]);
    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_templet"))
        .current_dir(harness.work.path())
        .env("TEMPLET_HOME", harness.templates.path())
        .env("NO_COLOR", "1")
        .env_remove("TEMPLET_TEST_KEYS")
        .env_remove("TEMPLET_INPUT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn templet");
    let _stdin = child.stdin.take().expect("stdin handle");
    let mut stdout = child.stdout.take().expect("stdout handle");

    // The prompt is only written once the interrupt handler is installed.
    let mut seen = Vec::new();
    let mut chunk = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains("Command [") {
        let read = stdout.read(&mut chunk).expect("read stdout");
        assert!(read > 0, "templet exited before prompting");
        seen.extend_from_slice(&chunk[..read]);
    }

    let sent = std::process::Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("run kill");
    assert!(sent.success());

    let status = child.wait().expect("wait for templet");
    assert_eq!(status.code(), Some(0));
    assert!(harness.created().is_empty());
}

#[cfg(unix)]
#[test]
fn vanished_working_directory_fails_startup() {
    let harness = Harness::with_templates(&[("a.txt", "a")]);
    let gone = harness.work.child("gone");
    gone.create_dir_all().expect("create work subdir");

    let output = std::process::Command::new("sh")
        .args(["-c", r#"cd "$1" && rmdir "$1" && exec "$2""#, "sh"])
        .arg(gone.path())
        .arg(env!("CARGO_BIN_EXE_templet"))
        .env("TEMPLET_HOME", harness.templates.path())
        .env("NO_COLOR", "1")
        .env_remove("TEMPLET_TEST_KEYS")
        .env_remove("TEMPLET_INPUT")
        .stdin(std::process::Stdio::null())
        .output()
        .expect("run templet");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: cannot determine working directory"),
        "stderr: {stderr}"
    );
    assert!(!stderr.contains("template directory"));
}
