//! End-to-end sessions against the real binary and a real database file.

use std::{
  io::Write,
  path::Path,
  process::{Command, Stdio},
};

fn cmd() -> Command {
  let exe = env!("CARGO_BIN_EXE_roster");
  Command::new(exe)
}

/// Run one interactive session: feed `script` on stdin, return stdout.
fn drive(db: &Path, script: &str) -> String {
  let mut child = cmd()
    .args(["--db", db.to_str().expect("utf8 path")])
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .spawn()
    .expect("spawn");
  child
    .stdin
    .take()
    .expect("stdin handle")
    .write_all(script.as_bytes())
    .expect("write script");
  let output = child.wait_with_output().expect("wait");
  assert!(output.status.success());
  String::from_utf8(output.stdout).expect("utf8 transcript")
}

#[test]
fn create_read_update_delete_round_trip() {
  let temp = tempfile::tempdir().expect("tempdir");
  let db = temp.path().join("roster.db");

  let transcript = drive(
    &db,
    "1\n7\nAda\nLovelace\n5551234\n\
     2\n\
     3\n7\nGrace\nHopper\n5559999\n\
     2\n\
     4\n7\n\
     2\n\
     5\n",
  );

  assert!(transcript.contains("7: Ada Lovelace (5551234)"));
  assert!(transcript.contains("7: Grace Hopper (5559999)"));
  assert!(transcript.contains("User has been deleted."));
  assert!(transcript.contains("Database connection closed."));

  // After the delete, the final read lists nothing for that ID.
  let after_delete = transcript
    .rsplit("User has been deleted.")
    .next()
    .expect("tail of transcript");
  assert!(!after_delete.contains("7: "));
}

#[test]
fn duplicate_create_keeps_the_first_record() {
  let temp = tempfile::tempdir().expect("tempdir");
  let db = temp.path().join("roster.db");

  let transcript = drive(
    &db,
    "1\n7\nAda\nLovelace\n5551234\n\
     1\n7\nGrace\nHopper\n5559999\n\
     2\n\
     5\n",
  );

  assert!(transcript.contains("user with ID 7 already exists"));
  assert!(transcript.contains("7: Ada Lovelace (5551234)"));
  assert!(!transcript.contains("Grace Hopper"));
}

#[test]
fn unknown_update_and_delete_are_reported() {
  let temp = tempfile::tempdir().expect("tempdir");
  let db = temp.path().join("roster.db");

  let transcript = drive(
    &db,
    "3\n999\nGrace\nHopper\n5559999\n\
     4\n999\n\
     5\n",
  );

  assert_eq!(transcript.matches("no user with ID 999 exists").count(), 2);
  assert!(!transcript.contains("User has been deleted."));
}

#[test]
fn malformed_menu_input_reprompts() {
  let temp = tempfile::tempdir().expect("tempdir");
  let db = temp.path().join("roster.db");

  let transcript = drive(&db, "banana\n9\n5\n");

  assert!(transcript
    .contains("Invalid input! Please enter a valid number between 1 and 5."));
  assert!(transcript
    .contains("Invalid choice, please select a number between 1 and 5."));
  // Both bad selections looped back to the menu before the exit.
  assert_eq!(transcript.matches("5: Exit & close database").count(), 3);
}

#[test]
fn records_survive_between_invocations() {
  let temp = tempfile::tempdir().expect("tempdir");
  let db = temp.path().join("roster.db");

  drive(&db, "1\n7\nAda\nLovelace\n5551234\n5\n");
  let second = drive(&db, "2\n5\n");

  assert!(second.contains("7: Ada Lovelace (5551234)"));
}

#[test]
fn config_file_names_the_database() {
  let temp = tempfile::tempdir().expect("tempdir");
  let db = temp.path().join("from-config.db");
  let config = temp.path().join("roster.toml");
  std::fs::write(&config, format!("db_path = \"{}\"\n", db.display()))
    .expect("write config");

  let mut child = cmd()
    .args(["--config", config.to_str().expect("utf8 path")])
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .spawn()
    .expect("spawn");
  child
    .stdin
    .take()
    .expect("stdin handle")
    .write_all(b"5\n")
    .expect("write script");
  let output = child.wait_with_output().expect("wait");

  assert!(output.status.success());
  assert!(db.exists());
}
