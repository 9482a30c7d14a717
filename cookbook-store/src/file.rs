//! Flat-file codec for the receipt book.
//!
//! The backing file is plain line-oriented text, two lines per record:
//!
//! ```text
//! Name: Pancakes
//! Receipt: Mix the batter, rest it, fry.
//! ```
//!
//! A `Name:` line opens a record and a `Receipt:` line completes it.
//! Anything else is skipped, so a damaged file degrades to fewer records
//! rather than a failed load.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::book::Cookbook;
use crate::error::StoreError;
use crate::types::Receipt;

/// Line prefix that opens a record and carries its title.
pub const TITLE_PREFIX: &str = "Name: ";

/// Line prefix that completes a record and carries its body.
pub const BODY_PREFIX: &str = "Receipt: ";

/// Read the backing file at `path` into a new book.
///
/// A missing or unopenable file is not an error: it means no data yet, and
/// an empty book is returned.
pub fn load_receipts(path: &Path) -> Cookbook {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::warn!(
                "Receipts file {} could not be opened ({e}); starting empty",
                path.display()
            );
            return Cookbook::new();
        }
    };

    read_receipts(BufReader::new(file))
}

/// Scan `reader` line by line and build a book from the records found.
///
/// Records are inserted as they complete, so equal titles keep their file
/// order, and ids are assigned sequentially from zero in file order. A
/// title line while another title is still waiting for its body discards
/// the waiting one, as does a title left open at end of input; a body line
/// with no open record is skipped like any other unrecognized line.
pub fn read_receipts<R: BufRead>(reader: R) -> Cookbook {
    let mut book = Cookbook::new();
    let mut pending: Option<String> = None;
    let mut loaded: u16 = 0;

    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::warn!("Stopped reading receipts: {e}");
                break;
            }
        };
        let line = line.strip_suffix('\r').unwrap_or(&line);

        if let Some(title) = line.strip_prefix(TITLE_PREFIX) {
            if pending.is_some() {
                log::warn!("Partial receipt data discarded");
            }
            pending = Some(title.to_string());
        } else if let Some(body) = line.strip_prefix(BODY_PREFIX) {
            if let Some(title) = pending.take() {
                book.insert(Receipt::new(loaded, &title, body));
                loaded = loaded.saturating_add(1);
            }
        }
    }

    if pending.is_some() {
        log::warn!("Partial receipt data discarded");
    }

    log::info!("Loaded {loaded} receipt(s)");
    book
}

/// Append one record to the end of the backing file, creating the file if
/// it does not exist yet.
pub fn append_receipt(path: &Path, receipt: &Receipt) -> Result<(), StoreError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StoreError::open(path, e))?;

    write_record(&mut file, receipt).map_err(|e| StoreError::write(path, e))
}

/// Rewrite the backing file from scratch so it mirrors `book` exactly,
/// record order matching book order.
pub fn rewrite_receipts(path: &Path, book: &Cookbook) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|e| StoreError::open(path, e))?;
    let mut out = BufWriter::new(file);

    for receipt in book.iter() {
        write_record(&mut out, receipt).map_err(|e| StoreError::write(path, e))?;
    }
    out.flush().map_err(|e| StoreError::write(path, e))?;

    log::info!("Receipts file updated");
    Ok(())
}

fn write_record(out: &mut impl Write, receipt: &Receipt) -> std::io::Result<()> {
    writeln!(out, "{TITLE_PREFIX}{}", receipt.title)?;
    writeln!(out, "{BODY_PREFIX}{}", receipt.body)
}
