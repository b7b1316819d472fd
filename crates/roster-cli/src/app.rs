//! The interactive menu loop and one flow per CRUD operation.
//!
//! This layer is a thin wrapper: each flow gathers its inputs first, then
//! calls the store exactly once. Store rejections are printed and the loop
//! continues; only failures on the CLI's own streams abort.

use std::io::{BufRead, Write};

use anyhow::Result;
use roster_core::{record::UserRecord, store::RecordStore};

use crate::prompt;

// ─── Menu ─────────────────────────────────────────────────────────────────────

const MENU: &str = "1: Create user
2: Read users
3: Update user
4: Delete user
5: Exit & close database";

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
  Create,
  Read,
  Update,
  Delete,
  Exit,
}

impl MenuChoice {
  /// Map a parsed selection number onto a choice; `None` if out of range.
  pub fn from_number(n: i64) -> Option<Self> {
    match n {
      1 => Some(Self::Create),
      2 => Some(Self::Read),
      3 => Some(Self::Update),
      4 => Some(Self::Delete),
      5 => Some(Self::Exit),
      _ => None,
    }
  }
}

// ─── Loop ─────────────────────────────────────────────────────────────────────

/// Run the read-eval loop until the operator exits or input ends.
pub fn run<S, R, W>(store: &mut S, input: &mut R, output: &mut W) -> Result<()>
where
  S: RecordStore,
  R: BufRead,
  W: Write,
{
  loop {
    writeln!(output, "\n{MENU}\n")?;

    let Some(selection) =
      prompt::line(input, output, "Enter your choice (1-5): ")?
    else {
      break; // end of input: exit and close
    };

    match selection.trim().parse::<i64>() {
      Err(_) => writeln!(
        output,
        "Invalid input! Please enter a valid number between 1 and 5."
      )?,
      Ok(n) => match MenuChoice::from_number(n) {
        None => writeln!(
          output,
          "Invalid choice, please select a number between 1 and 5."
        )?,
        Some(MenuChoice::Create) => create_user(store, input, output)?,
        Some(MenuChoice::Read) => read_users(store, output)?,
        Some(MenuChoice::Update) => update_user(store, input, output)?,
        Some(MenuChoice::Delete) => delete_user(store, input, output)?,
        Some(MenuChoice::Exit) => break,
      },
    }
  }

  Ok(())
}

// ─── Operations ───────────────────────────────────────────────────────────────

/// Menu option 1: gather all four fields, then insert the pair of rows.
fn create_user<S, R, W>(
  store: &mut S,
  input: &mut R,
  output: &mut W,
) -> Result<()>
where
  S: RecordStore,
  R: BufRead,
  W: Write,
{
  tracing::debug!("create flow");
  let Some(user_id) =
    prompt::integer(input, output, "Enter new user ID: ")?
  else {
    return Ok(());
  };
  let Some(first_name) =
    prompt::line(input, output, "Enter first name: ")?
  else {
    return Ok(());
  };
  let Some(last_name) = prompt::line(input, output, "Enter last name: ")? else {
    return Ok(());
  };
  let Some(phone_number) =
    prompt::integer(input, output, "Enter phone number: ")?
  else {
    return Ok(());
  };

  let record = UserRecord { user_id, first_name, last_name, phone_number };
  if let Err(e) = store.create(&record) {
    writeln!(output, "{e}")?;
  }
  Ok(())
}

/// Menu option 2: print the equi-join, one record per line.
fn read_users<S, W>(store: &S, output: &mut W) -> Result<()>
where
  S: RecordStore,
  W: Write,
{
  tracing::debug!("read flow");
  match store.read_all() {
    Ok(records) => {
      for r in &records {
        writeln!(
          output,
          "{}: {} {} ({})",
          r.user_id, r.first_name, r.last_name, r.phone_number
        )?;
      }
    }
    Err(e) => writeln!(output, "{e}")?,
  }
  Ok(())
}

/// Menu option 3: gather the identifier and all replacement fields, then
/// overwrite both rows.
fn update_user<S, R, W>(
  store: &mut S,
  input: &mut R,
  output: &mut W,
) -> Result<()>
where
  S: RecordStore,
  R: BufRead,
  W: Write,
{
  tracing::debug!("update flow");
  let Some(user_id) =
    prompt::integer(input, output, "Enter user ID to update: ")?
  else {
    return Ok(());
  };
  let Some(first_name) =
    prompt::line(input, output, "Enter new first name: ")?
  else {
    return Ok(());
  };
  let Some(last_name) =
    prompt::line(input, output, "Enter new last name: ")?
  else {
    return Ok(());
  };
  let Some(phone_number) =
    prompt::integer(input, output, "Enter new phone number: ")?
  else {
    return Ok(());
  };

  let record = UserRecord { user_id, first_name, last_name, phone_number };
  if let Err(e) = store.update(&record) {
    writeln!(output, "{e}")?;
  }
  Ok(())
}

/// Menu option 4: remove both rows for the identifier.
fn delete_user<S, R, W>(
  store: &mut S,
  input: &mut R,
  output: &mut W,
) -> Result<()>
where
  S: RecordStore,
  R: BufRead,
  W: Write,
{
  tracing::debug!("delete flow");
  let Some(user_id) =
    prompt::integer(input, output, "Enter user ID to delete: ")?
  else {
    return Ok(());
  };

  match store.delete(user_id) {
    Ok(()) => writeln!(output, "User has been deleted.")?,
    Err(e) => writeln!(output, "{e}")?,
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use roster_store_sqlite::SqliteStore;

  use super::*;

  fn run_session(script: &str) -> String {
    let mut store = SqliteStore::open_in_memory().expect("in-memory store");
    let mut input = Cursor::new(script.as_bytes());
    let mut output = Vec::new();
    run(&mut store, &mut input, &mut output).expect("session");
    String::from_utf8(output).expect("utf8 transcript")
  }

  #[test]
  fn menu_choice_mapping() {
    assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Create));
    assert_eq!(MenuChoice::from_number(5), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::from_number(0), None);
    assert_eq!(MenuChoice::from_number(6), None);
  }

  #[test]
  fn create_then_read_shows_the_record() {
    let transcript = run_session("1\n7\nAda\nLovelace\n5551234\n2\n5\n");
    assert!(transcript.contains("7: Ada Lovelace (5551234)"));
  }

  #[test]
  fn malformed_field_abandons_the_operation() {
    let transcript = run_session("1\n7\nAda\nLovelace\nnot-a-number\n2\n5\n");

    assert!(transcript.contains("Invalid input! Please enter a whole number."));
    // The half-gathered record never reached the store.
    assert!(!transcript.contains("7: Ada Lovelace"));
  }

  #[test]
  fn end_of_input_exits_cleanly() {
    let transcript = run_session("");
    assert!(transcript.contains("Enter your choice (1-5): "));
  }
}
