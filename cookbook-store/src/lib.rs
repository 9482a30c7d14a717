//! In-memory receipt book with flat-file persistence.
//!
//! The book keeps receipts sorted by title (case-insensitive, stable for
//! ties) and mirrors every change to a plain-text backing file: creating a
//! receipt appends its two-line record, while updating or deleting
//! rewrites the file from the book. Front ends drive it through the
//! operations in [`ops`]; the interactive menu lives in the `cookbook`
//! binary.

pub mod book;
pub mod error;
pub mod file;
pub mod ops;
pub mod types;

pub use book::Cookbook;
pub use error::StoreError;
pub use file::{append_receipt, load_receipts, read_receipts, rewrite_receipts};
pub use ops::{
    create_receipt, delete_receipt, update_receipt, CreateOutcome, DeleteOutcome, UpdateOutcome,
};
pub use types::{title_cmp, Receipt, BODY_MAX, TITLE_MAX};
