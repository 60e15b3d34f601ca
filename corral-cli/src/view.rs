//! List view
//!
//! Owns the record store and the pagination state, and applies the
//! store-synchronization rules: the first successful list fetch replaces
//! the seed wholesale, and every mutation touches the store only after
//! the registry has confirmed it. A failed request leaves the store
//! exactly as it was.

use colored::*;
use corral_core::{Column, PageState, Record, RecordDraft, RecordStore, ValidationErrors, validate};
use corral_client::{ClientError, Registry};
use thiserror::Error;
use tracing::error;

/// Why a create/update submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft failed field validation; no request was made
    #[error("invalid draft: {0}")]
    Invalid(#[from] ValidationErrors),

    /// The registry rejected or never received the request
    #[error(transparent)]
    Remote(#[from] ClientError),
}

/// Paged table over the in-memory record store
pub struct ListView {
    store: RecordStore,
    page: PageState,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    /// Create a view over the seed list
    ///
    /// The seed is only ever on screen between startup and the first
    /// successful [`load`](Self::load).
    pub fn new() -> Self {
        Self {
            store: RecordStore::seeded(),
            page: PageState::new(),
        }
    }

    /// Fetch the full list and replace the store contents
    pub async fn load(&mut self, registry: &dyn Registry) -> Result<(), ClientError> {
        let records = registry
            .list()
            .await
            .inspect_err(|e| error!("failed to fetch records: {}", e))?;
        self.store.replace_all(records);
        Ok(())
    }

    /// Validate a draft, create it remotely, and append the stored record
    pub async fn submit_new(
        &mut self,
        registry: &dyn Registry,
        draft: &RecordDraft,
    ) -> Result<Record, SubmitError> {
        validate(draft)?;

        let created = registry
            .create(draft)
            .await
            .inspect_err(|e| error!("failed to create record: {}", e))?;
        self.store.add(created.clone());
        Ok(created)
    }

    /// Validate a draft, update the record remotely, and replace it locally
    pub async fn submit_edit(
        &mut self,
        registry: &dyn Registry,
        id: &str,
        draft: &RecordDraft,
    ) -> Result<Record, SubmitError> {
        validate(draft)?;

        let updated = registry
            .update(id, draft)
            .await
            .inspect_err(|e| error!("failed to update record {}: {}", id, e))?;
        self.store.edit(id, updated.clone());
        Ok(updated)
    }

    /// Delete the record remotely, then drop it from the store
    pub async fn delete(&mut self, registry: &dyn Registry, id: &str) -> Result<(), ClientError> {
        registry
            .delete(id)
            .await
            .inspect_err(|e| error!("failed to delete record {}: {}", id, e))?;
        self.store.remove(id);
        Ok(())
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// The rows visible on the current page
    pub fn page_rows(&self) -> &[Record] {
        self.page.slice(self.store.records())
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.set_page(page, self.store.len());
    }

    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        self.page.set_page_size(page_size)
    }

    pub fn next_page(&mut self) {
        self.page.next_page(self.store.len());
    }

    pub fn prev_page(&mut self) {
        self.page.prev_page();
    }

    /// Print the current page as a fixed-width table with a footer
    pub fn render(&self) {
        let rows = self.page_rows();

        if self.store.is_empty() {
            println!("{}", "No unicorns found.".yellow());
            return;
        }

        let widths = column_widths(rows);

        let row_digits = self.store.len().to_string().len().max(1);

        let mut header = format!("  {:>row_digits$} ", "#");
        for (col, width) in Column::ALL.iter().zip(widths.iter().copied()) {
            header.push_str(&format!(" {:<width$} ", col.label()));
        }
        println!("{}", header.bold());

        let first = self.page.page() * self.page.page_size();
        for (offset, record) in rows.iter().enumerate() {
            let mut line = format!("  {:>row_digits$} ", first + offset + 1);
            for (col, width) in Column::ALL.iter().zip(widths.iter().copied()) {
                line.push_str(&format!(" {:<width$} ", col.cell(record)));
            }
            println!("{}", line);
        }

        println!(
            "{}",
            format!(
                "  page {} of {} ({} unicorn(s), {} per page)",
                self.page.page() + 1,
                self.page.page_count(self.store.len()),
                self.store.len(),
                self.page.page_size()
            )
            .dimmed()
        );
    }
}

/// Width of each column, fitting the widest cell among `rows`
///
/// Measured in characters, not bytes, to match the padding rules of the
/// formatting machinery; byte lengths would misalign non-ASCII names.
fn column_widths(rows: &[Record]) -> Vec<usize> {
    Column::ALL
        .iter()
        .map(|col| {
            rows.iter()
                .map(|r| col.cell(r).chars().count())
                .chain(std::iter::once(col.label().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}
