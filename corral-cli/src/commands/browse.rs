//! Interactive browse session
//!
//! A single-threaded line loop over the paged table: each command is
//! handled to completion before the next line is read, so the store is
//! only ever mutated between prompts.

use std::io::{Write, stdout};

use anyhow::Result;
use colored::*;
use corral_client::{ClientError, Registry, RegistryClient};
use corral_core::{PAGE_SIZES, Record, RecordDraft};

use crate::commands::records::print_field_errors;
use crate::config::Config;
use crate::view::{ListView, SubmitError};

type StdinLines = tokio::io::Lines<tokio::io::BufReader<tokio::io::Stdin>>;

/// Run the interactive browse loop
pub async fn run(config: &Config) -> Result<()> {
    use tokio::io::AsyncBufReadExt;

    let client = RegistryClient::new(&config.api_url);
    let mut view = ListView::new();

    if let Err(e) = view.load(&client).await {
        eprintln!("{}", format!("Could not reach the registry: {}", e).red());
        println!("{}", "Showing the built-in seed list.".yellow());
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    view.render();
    print_help();

    loop {
        print!("{} ", ">".cyan());
        stdout().flush()?;

        let Some(input) = lines.next_line().await? else {
            println!();
            break;
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let arg = parts.next();

        match command {
            "q" | "quit" => break,
            "h" | "help" => print_help(),
            "n" | "next" => {
                view.next_page();
                view.render();
            }
            "p" | "prev" => {
                view.prev_page();
                view.render();
            }
            "r" | "reload" => match view.load(&client).await {
                Ok(()) => view.render(),
                Err(e) => eprintln!("{}", format!("Reload failed: {}", e).red()),
            },
            "size" => match arg.and_then(|a| a.parse::<usize>().ok()) {
                Some(size) if PAGE_SIZES.contains(&size) => {
                    view.set_page_size(size);
                    view.render();
                }
                _ => eprintln!("{}", format!("size must be one of {:?}", PAGE_SIZES).red()),
            },
            "add" => add_record(&client, &mut view, &mut lines).await?,
            "edit" => match row_record(&view, arg) {
                Some(record) => edit_record(&client, &mut view, &mut lines, &record).await?,
                None => eprintln!("{}", "edit needs a row number from the table".red()),
            },
            "delete" => match row_record(&view, arg) {
                Some(record) => delete_record(&client, &mut view, &mut lines, &record).await?,
                None => eprintln!("{}", "delete needs a row number from the table".red()),
            },
            _ => eprintln!("{}", format!("unknown command: {} (try `help`)", command).red()),
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "{}",
        "commands: n(ext), p(rev), size <5|10|25>, add, edit <row>, delete <row>, r(eload), q(uit)"
            .dimmed()
    );
}

/// Resolve a 1-based row number (as rendered) to its record
fn row_record(view: &ListView, arg: Option<&str>) -> Option<Record> {
    let row: usize = arg?.parse().ok()?;
    view.store().records().get(row.checked_sub(1)?).cloned()
}

/// Prompt for a draft and create it
async fn add_record(
    client: &RegistryClient,
    view: &mut ListView,
    lines: &mut StdinLines,
) -> Result<()> {
    let Some(draft) = prompt_draft(lines, None).await? else {
        return Ok(());
    };

    match view.submit_new(client, &draft).await {
        Ok(record) => {
            println!(
                "{}",
                format!("✓ Added {} (id {})", record.name, record.id).green()
            );
            view.render();
        }
        Err(SubmitError::Invalid(errors)) => print_field_errors(&errors),
        Err(SubmitError::Remote(e)) => print_remote_error("Save failed", &e),
    }

    Ok(())
}

/// Re-fetch the record, prompt with its fields as defaults, and update
async fn edit_record(
    client: &RegistryClient,
    view: &mut ListView,
    lines: &mut StdinLines,
    record: &Record,
) -> Result<()> {
    // The form is populated from the server, not from the local copy
    let current = match client.get(&record.id).await {
        Ok(current) => current,
        Err(e) => {
            print_remote_error("Could not fetch the unicorn", &e);
            return Ok(());
        }
    };

    let Some(draft) = prompt_draft(lines, Some(&current)).await? else {
        return Ok(());
    };

    match view.submit_edit(client, &current.id, &draft).await {
        Ok(updated) => {
            println!("{}", format!("✓ Updated {}", updated.name).green());
            view.render();
        }
        Err(SubmitError::Invalid(errors)) => print_field_errors(&errors),
        Err(SubmitError::Remote(e)) => print_remote_error("Save failed", &e),
    }

    Ok(())
}

/// Confirm, then delete on the registry and drop the row locally
async fn delete_record(
    client: &RegistryClient,
    view: &mut ListView,
    lines: &mut StdinLines,
    record: &Record,
) -> Result<()> {
    print!(
        "Delete {} ({})? [y/N] ",
        record.name.bold(),
        record.id.dimmed()
    );
    stdout().flush()?;

    let Some(answer) = lines.next_line().await? else {
        return Ok(());
    };
    if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        println!("{}", "Delete cancelled.".yellow());
        return Ok(());
    }

    match view.delete(client, &record.id).await {
        Ok(()) => {
            println!("{}", format!("✓ Deleted {}", record.name).green());
            view.render();
        }
        Err(e) => print_remote_error("Delete failed", &e),
    }

    Ok(())
}

/// Prompt for the three record fields
///
/// With a current record, empty input keeps the existing value. An
/// unparseable age becomes 0 so validation reports it as a field error
/// on submit. Returns None on end of input.
async fn prompt_draft(lines: &mut StdinLines, current: Option<&Record>) -> Result<Option<RecordDraft>> {
    let Some(name) = prompt_field(lines, "Name", current.map(|r| r.name.clone())).await? else {
        return Ok(None);
    };
    let Some(age) = prompt_field(lines, "Age", current.map(|r| r.age.to_string())).await? else {
        return Ok(None);
    };
    let Some(colour) = prompt_field(lines, "Colour", current.map(|r| r.colour.clone())).await?
    else {
        return Ok(None);
    };

    Ok(Some(RecordDraft {
        name,
        age: age.parse().unwrap_or(0),
        colour,
    }))
}

async fn prompt_field(
    lines: &mut StdinLines,
    label: &str,
    current: Option<String>,
) -> Result<Option<String>> {
    match &current {
        Some(value) => print!("  {} [{}]: ", label, value.dimmed()),
        None => print!("  {}: ", label),
    }
    stdout().flush()?;

    let Some(input) = lines.next_line().await? else {
        return Ok(None);
    };

    let input = input.trim();
    if input.is_empty() {
        if let Some(value) = current {
            return Ok(Some(value));
        }
    }
    Ok(Some(input.to_string()))
}

fn print_remote_error(what: &str, error: &ClientError) {
    eprintln!("{}", format!("{}: {}", what, error).red());
}
