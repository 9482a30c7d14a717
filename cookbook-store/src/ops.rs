//! Session operations: each pairs a book mutation with the file write that
//! keeps the backing file in step.
//!
//! Creating appends the one new record; updating and deleting rewrite the
//! whole file from the book. A failed write is logged and reported through
//! the outcome, but the in-memory change stands. The book is the source of
//! truth for the rest of the session and the file catches up on the next
//! successful rewrite.

use std::path::Path;

use crate::book::Cookbook;
use crate::file;
use crate::types::Receipt;

/// Result of [`create_receipt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateOutcome {
    /// Id assigned to the new receipt.
    pub id: u16,
    /// False when the append failed and the file is now behind the book.
    pub persisted: bool,
}

/// Result of [`update_receipt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Neither field was provided; nothing to look up, nothing written.
    NoChanges,
    /// No receipt carries the requested id. The file is left alone.
    NotFound,
    /// The receipt was found and the file rewritten. `resorted` is true
    /// when a title change moved the receipt to a new position.
    Updated { resorted: bool, persisted: bool },
}

/// Result of [`delete_receipt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The book had nothing in it to begin with.
    Empty,
    /// No receipt carries the requested id. The file is left alone.
    NotFound,
    Deleted { persisted: bool },
}

/// Create a receipt from `title` and `body` and append its record to the
/// backing file.
///
/// Callers are expected to reject an empty title before reaching this
/// point; `body` may be empty. Both fields are capped at their stored
/// maximums. The receipt keeps its place in the book even when the append
/// fails.
pub fn create_receipt(book: &mut Cookbook, path: &Path, title: &str, body: &str) -> CreateOutcome {
    let id = book.allocate_id();
    let receipt = Receipt::new(id, title, body);

    let persisted = match file::append_receipt(path, &receipt) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Could not save receipt '{}': {e}", receipt.title);
            false
        }
    };
    book.insert(receipt);

    CreateOutcome { id, persisted }
}

/// Apply replacement fields to the receipt with `id`, then rewrite the
/// backing file.
///
/// A field is skipped when it is `None` or empty; with both absent the
/// whole call is a no-op and the file is not touched. The title check is
/// byte-exact, so a case-only edit counts as a change and re-sorts the
/// receipt even though it usually lands back in the same place. When the
/// id is found the file is rewritten whether or not a field actually
/// changed value.
pub fn update_receipt(
    book: &mut Cookbook,
    path: &Path,
    id: u16,
    new_title: Option<&str>,
    new_body: Option<&str>,
) -> UpdateOutcome {
    if new_title.is_none() && new_body.is_none() {
        log::info!("No changes were made");
        return UpdateOutcome::NoChanges;
    }

    log::debug!("Searching for receipt id {id}");
    let resorted = match book.update(id, new_title, new_body) {
        Some(resorted) => resorted,
        None => {
            log::warn!("Receipt id {id} not found");
            return UpdateOutcome::NotFound;
        }
    };

    if resorted {
        log::info!("Receipt updated and re-sorted");
    } else {
        log::info!("Receipt updated (order unchanged)");
    }

    UpdateOutcome::Updated {
        resorted,
        persisted: rewrite_book(book, path),
    }
}

/// Remove the receipt with `id` from the book, then rewrite the backing
/// file without it.
pub fn delete_receipt(book: &mut Cookbook, path: &Path, id: u16) -> DeleteOutcome {
    if book.is_empty() {
        log::warn!("The book is empty, nothing to delete");
        return DeleteOutcome::Empty;
    }

    if book.detach(id).is_none() {
        log::warn!("Receipt id {id} not found");
        return DeleteOutcome::NotFound;
    }

    DeleteOutcome::Deleted {
        persisted: rewrite_book(book, path),
    }
}

fn rewrite_book(book: &Cookbook, path: &Path) -> bool {
    match file::rewrite_receipts(path, book) {
        Ok(()) => true,
        Err(e) => {
            log::error!("{e}");
            false
        }
    }
}
