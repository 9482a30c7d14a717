//! The in-memory receipt collection.

use std::cmp::Ordering;

use crate::types::{title_cmp, truncated, Receipt, BODY_MAX, TITLE_MAX};

/// An always-sorted collection of receipts.
///
/// Receipts are kept in case-insensitive title order at every moment;
/// receipts with equal titles keep the order they were inserted in. The
/// book also owns the counter that hands out ids for new receipts.
#[derive(Debug, Default)]
pub struct Cookbook {
    receipts: Vec<Receipt>,
    /// Next id to hand out. Stays `None` until the first allocation, which
    /// seeds it from whatever ids are in the book at that moment.
    next_id: Option<u16>,
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    /// Receipts in title order.
    pub fn iter(&self) -> impl Iterator<Item = &Receipt> {
        self.receipts.iter()
    }

    /// Linear scan for the receipt with `id`. Ids are unique, so at most
    /// one receipt can match.
    pub fn find(&self, id: u16) -> Option<&Receipt> {
        self.receipts.iter().find(|r| r.id == id)
    }

    /// Insert `receipt` at the position that keeps the book sorted.
    ///
    /// The slot chosen is just before the first strictly greater title, so
    /// a receipt whose title ties an existing run lands after that run and
    /// insertion order among equals is preserved.
    pub fn insert(&mut self, receipt: Receipt) {
        let pos = self
            .receipts
            .iter()
            .position(|r| title_cmp(&r.title, &receipt.title) == Ordering::Greater)
            .unwrap_or(self.receipts.len());
        self.receipts.insert(pos, receipt);
    }

    /// Remove and return the receipt with `id`, leaving the rest in order.
    /// Returns `None` and changes nothing when no receipt matches.
    pub fn detach(&mut self, id: u16) -> Option<Receipt> {
        let pos = self.receipts.iter().position(|r| r.id == id)?;
        Some(self.receipts.remove(pos))
    }

    /// Apply replacement field values to the receipt with `id`, or return
    /// `None` when there is no such receipt.
    ///
    /// A field is applied only when it is `Some` and non-empty, and both
    /// are capped at their stored maximums before use. The title
    /// comparison is byte-exact: a changed title (case-only changes
    /// included) moves the receipt out and re-inserts it at its new sorted
    /// position, while a body-only change happens in place and cannot
    /// disturb the order, even inside a run of equal titles. Returns
    /// `Some(true)` when the receipt was re-inserted.
    pub fn update(
        &mut self,
        id: u16,
        new_title: Option<&str>,
        new_body: Option<&str>,
    ) -> Option<bool> {
        let pos = self.receipts.iter().position(|r| r.id == id)?;

        let title_change = new_title
            .filter(|t| !t.is_empty())
            .map(|t| truncated(t, TITLE_MAX))
            .filter(|t| *t != self.receipts[pos].title);

        if let Some(body) = new_body.filter(|b| !b.is_empty()) {
            self.receipts[pos].body = truncated(body, BODY_MAX);
        }

        match title_change {
            Some(title) => {
                let mut receipt = self.receipts.remove(pos);
                receipt.title = title;
                self.insert(receipt);
                Some(true)
            }
            None => Some(false),
        }
    }

    /// Hand out the next free id.
    ///
    /// The counter seeds itself on first use to one past the highest id
    /// currently in the book (zero when the book is empty) and only counts
    /// up from there. Deleting receipts later never lowers it, so an id is
    /// never reused within a session. The arithmetic saturates at
    /// `u16::MAX` rather than wrapping back onto live low ids.
    pub fn allocate_id(&mut self) -> u16 {
        let next = self.next_id.unwrap_or_else(|| {
            self.receipts
                .iter()
                .map(|r| r.id.saturating_add(1))
                .max()
                .unwrap_or(0)
        });
        self.next_id = Some(next.saturating_add(1));
        next
    }
}
