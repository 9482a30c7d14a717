//! Core data model for the receipt book.

use std::cmp::Ordering;

/// Longest stored receipt title, in bytes. Longer input is truncated.
pub const TITLE_MAX: usize = 29;

/// Longest stored receipt body, in bytes. Longer input is truncated.
pub const BODY_MAX: usize = 999;

/// A single receipt: a titled block of free text with a session-stable id.
///
/// Ids are handed out by [`crate::Cookbook`] and stay fixed for the life of
/// the session, but are not stored in the backing file; a fresh load
/// assigns fresh ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub id: u16,
    pub title: String,
    pub body: String,
}

impl Receipt {
    /// Build a receipt, capping `title` and `body` at their stored
    /// maximums. Oversized input is cut short, never rejected.
    pub fn new(id: u16, title: &str, body: &str) -> Self {
        Self {
            id,
            title: truncated(title, TITLE_MAX),
            body: truncated(body, BODY_MAX),
        }
    }
}

/// Copy of `s` capped at `max` bytes, backed off to the nearest character
/// boundary so a multi-byte character is never split.
pub(crate) fn truncated(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}

/// Ordering used for the book: titles compare case-insensitively, byte by
/// byte, with each byte ASCII-folded first. Non-ASCII bytes compare as-is.
pub fn title_cmp(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}
