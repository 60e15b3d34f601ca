//! Corral Core
//!
//! Domain types and pure logic for the corral unicorn-registry client.
//!
//! This crate contains:
//! - Record types: the registry entity and its unsaved draft form
//! - Record store: the in-memory list mirroring the server
//! - Validation: field-level draft checks run before submission
//! - Pagination: page/size state for table rendering
//!
//! Note: all of this is synchronous and I/O-free. HTTP lives in
//! corral-client, rendering and prompts in corral-cli.

pub mod page;
pub mod record;
pub mod store;
pub mod validate;

pub use page::{DEFAULT_PAGE_SIZE, PAGE_SIZES, PageState};
pub use record::{Column, Record, RecordDraft};
pub use store::RecordStore;
pub use validate::{ValidationErrors, validate};
