//! One-shot record command handlers
//!
//! Each handler performs a single CRUD round trip: validate locally,
//! call the registry, report the confirmed result.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use colored::*;
use corral_client::{Registry, RegistryClient};
use corral_core::{Record, RecordDraft, ValidationErrors, validate};

use crate::config::Config;
use crate::view::ListView;

/// Fetch the list and print one page of it
pub async fn list(config: &Config, page: usize, page_size: usize) -> Result<()> {
    let client = RegistryClient::new(&config.api_url);

    let mut view = ListView::new();
    view.load(&client)
        .await
        .context("Failed to fetch the record list")?;
    view.set_page_size(page_size);
    view.set_page(page);
    view.render();

    Ok(())
}

/// Fetch and display a single record
pub async fn get(config: &Config, id: &str) -> Result<()> {
    let client = RegistryClient::new(&config.api_url);

    let record = client
        .get(id)
        .await
        .with_context(|| format!("Failed to fetch unicorn {}", id))?;

    print_record_details(&record);

    Ok(())
}

/// Validate a draft and create it on the registry
pub async fn add(config: &Config, name: String, age: u32, colour: String) -> Result<()> {
    let client = RegistryClient::new(&config.api_url);

    let draft = RecordDraft::new(name, age, colour);
    if let Err(errors) = validate(&draft) {
        print_field_errors(&errors);
        bail!("draft is invalid");
    }

    let record = client
        .create(&draft)
        .await
        .context("Failed to create the unicorn")?;

    println!("{}", "✓ Unicorn created successfully!".green().bold());
    print_record_details(&record);

    Ok(())
}

/// Update a record, keeping unspecified fields at their server values
///
/// The current record is fetched first so the submitted draft is built
/// from server-authoritative data, as the edit form requires.
pub async fn edit(
    config: &Config,
    id: &str,
    name: Option<String>,
    age: Option<u32>,
    colour: Option<String>,
) -> Result<()> {
    let client = RegistryClient::new(&config.api_url);

    let current = client
        .get(id)
        .await
        .with_context(|| format!("Failed to fetch unicorn {}", id))?;

    let mut draft = RecordDraft::from_record(&current);
    if let Some(name) = name {
        draft.name = name;
    }
    if let Some(age) = age {
        draft.age = age;
    }
    if let Some(colour) = colour {
        draft.colour = colour;
    }

    if let Err(errors) = validate(&draft) {
        print_field_errors(&errors);
        bail!("draft is invalid");
    }

    let updated = client
        .update(id, &draft)
        .await
        .with_context(|| format!("Failed to update unicorn {}", id))?;

    println!("{}", "✓ Unicorn updated successfully!".green().bold());
    print_record_details(&updated);

    Ok(())
}

/// Delete a record, asking for confirmation unless `--yes` was given
pub async fn delete(config: &Config, id: &str, yes: bool) -> Result<()> {
    let client = RegistryClient::new(&config.api_url);

    if !yes {
        let record = client
            .get(id)
            .await
            .with_context(|| format!("Failed to fetch unicorn {}", id))?;

        print!(
            "Delete {} ({})? [y/N] ",
            record.name.bold(),
            record.id.dimmed()
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("{}", "Delete cancelled.".yellow());
            return Ok(());
        }
    }

    client
        .delete(id)
        .await
        .with_context(|| format!("Failed to delete unicorn {}", id))?;

    println!(
        "{}",
        format!("✓ Unicorn {} deleted successfully!", id)
            .green()
            .bold()
    );

    Ok(())
}

/// Print detailed record information
pub(crate) fn print_record_details(record: &Record) {
    println!("  ID:     {}", record.id.cyan());
    println!("  Name:   {}", record.name.bold());
    println!("  Age:    {}", record.age);
    println!("  Colour: {}", record.colour);
}

/// Print one line per failing field
pub(crate) fn print_field_errors(errors: &ValidationErrors) {
    for (field, message) in errors.messages() {
        eprintln!("  {}: {}", field.red(), message);
    }
}
