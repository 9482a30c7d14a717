//! Interactive menu front end for the receipt book.
//!
//! All data lives in `receipts.txt` in the working directory. Every menu
//! action that changes the book writes the file before the menu comes
//! back, so quitting never loses work. Set `RUST_LOG` to adjust the log
//! threshold (default `info`).

use std::io::{self, Write};
use std::path::Path;

use cookbook_store::{
    create_receipt, delete_receipt, update_receipt, Cookbook, DeleteOutcome, UpdateOutcome,
};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Backing file, fixed relative to the working directory.
const RECEIPTS_FILE: &str = "receipts.txt";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = Path::new(RECEIPTS_FILE);
    let mut book = cookbook_store::load_receipts(path);

    println!("===== Cookbook =====");
    run_menu(&mut book, path);
    println!("Goodbye!");
}

/// Drive the menu until the user quits or input runs out.
fn run_menu(book: &mut Cookbook, path: &Path) {
    loop {
        print_menu();
        let Some(choice) = prompt("Choice: ") else { break };
        println!();

        if choice.starts_with(['q', 'Q']) {
            break;
        }

        match choice.trim().parse::<u8>().unwrap_or(0) {
            1 => {
                log::info!("Displaying all receipts");
                run_display_all(book);
            }
            2 => {
                log::info!("Adding a new receipt");
                run_add(book, path);
            }
            3 => run_view(book),
            4 => {
                log::info!("Update receipt");
                run_update(book, path);
            }
            5 => {
                log::info!("Delete receipt");
                run_delete(book, path);
            }
            _ => println!("Invalid option."),
        }
    }
}

fn print_menu() {
    println!();
    println!("{}", "--- MENU ---".if_supports_color(Stdout, |t| t.bold()));
    println!("1. Display all");
    println!("2. Add receipt");
    println!("3. View receipt");
    println!("4. Update receipt");
    println!("5. Delete receipt");
    println!("Q. Exit");
}

/// Print `label` without a newline and read one line of input. Returns
/// `None` once stdin is closed.
fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input).ok()? == 0 {
        return None;
    }
    Some(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt for a receipt id. Unparseable input is reported and abandons
/// the operation before any lookup happens.
fn prompt_receipt_id() -> Option<u16> {
    let input = prompt("ID of the receipt (int): ")?;
    match input.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            log::warn!("Invalid input");
            None
        }
    }
}

/// Print the id and title of every receipt, in book order.
fn run_display_all(book: &Cookbook) {
    if book.is_empty() {
        log::info!("The cookbook is empty!");
        return;
    }

    println!(
        "{}",
        "[ID] Receipt name".if_supports_color(Stdout, |t| t.bold())
    );
    for receipt in book.iter() {
        println!(
            "- [{}] {}",
            receipt.id.if_supports_color(Stdout, |t| t.cyan()),
            receipt.title
        );
    }
}

/// Prompt for the two fields of a new receipt and create it. An empty
/// name abandons the add.
fn run_add(book: &mut Cookbook, path: &Path) {
    let Some(title) = prompt("Name: ") else { return };
    let Some(body) = prompt("Receipt: ") else { return };

    if title.is_empty() {
        log::warn!("A receipt needs a name, nothing added");
        return;
    }

    let outcome = create_receipt(book, path, &title, &body);
    if outcome.persisted {
        log::info!("New receipt saved!");
    }
}

/// Show the listing, ask for an id, and print that receipt in full.
fn run_view(book: &Cookbook) {
    run_display_all(book);
    let Some(id) = prompt_receipt_id() else { return };

    if book.is_empty() {
        log::warn!("Receipt list is empty, nothing to view");
        return;
    }

    match book.find(id) {
        Some(receipt) => {
            println!();
            println!(
                "\t[{}] {}",
                receipt.id,
                receipt.title.if_supports_color(Stdout, |t| t.bold())
            );
            println!();
            println!("\t{}", receipt.body);
        }
        None => log::error!("Receipt id {id} not found"),
    }
}

/// Show the listing, ask for an id and replacement fields, and apply
/// them. Empty input keeps the current value of a field.
fn run_update(book: &mut Cookbook, path: &Path) {
    run_display_all(book);
    let Some(id) = prompt_receipt_id() else { return };

    let Some(title) = prompt("Name (Press 'Enter' to keep current): ") else {
        return;
    };
    let Some(body) = prompt("Receipt (Press 'Enter' to keep current): ") else {
        return;
    };

    match update_receipt(book, path, id, Some(&title), Some(&body)) {
        UpdateOutcome::Updated { .. } => log::info!("Receipt '{id}' is updated"),
        UpdateOutcome::NotFound | UpdateOutcome::NoChanges => {}
    }
}

/// Show the listing, ask for an id, and delete that receipt.
fn run_delete(book: &mut Cookbook, path: &Path) {
    run_display_all(book);
    let Some(id) = prompt_receipt_id() else { return };

    match delete_receipt(book, path, id) {
        DeleteOutcome::Deleted { .. } => log::info!("Receipt '{id}' is deleted"),
        DeleteOutcome::Empty | DeleteOutcome::NotFound => {}
    }
}
