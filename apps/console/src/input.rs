//! # Console Input Prompts
//!
//! Line-oriented prompt helpers: each prompt prints a label, reads one
//! line and re-prompts until the input parses. Reading end-of-file exits
//! the program cleanly - there is no sane way to keep an interactive menu
//! alive without stdin.

use std::io::{self, Write};

use chrono::NaiveDate;
use stockroom_core::{BarcodeKind, Money, ProductCategory, Weight};

/// Prints a label and reads one trimmed line.
pub fn prompt(label: &str) -> String {
    print!("{label}: ");
    io::stdout().flush().ok();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => {
            // EOF: the operator is gone
            println!();
            std::process::exit(0);
        }
        Ok(_) => line.trim().to_string(),
        Err(err) => {
            eprintln!("✗ Could not read input: {err}");
            std::process::exit(1);
        }
    }
}

/// Prompts until a non-empty line is entered.
pub fn prompt_nonempty(label: &str) -> String {
    loop {
        let value = prompt(label);
        if !value.is_empty() {
            return value;
        }
        println!("✗ A value is required.");
    }
}

/// Prompts once; an empty line means "none".
pub fn prompt_optional(label: &str) -> Option<String> {
    let value = prompt(&format!("{label} (empty for none)"));
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Prompts until a whole number is entered.
pub fn prompt_i64(label: &str) -> i64 {
    loop {
        match prompt(label).parse() {
            Ok(value) => return value,
            Err(_) => println!("✗ Enter a whole number."),
        }
    }
}

/// Prompts until a money amount (up to 2 decimals) is entered.
pub fn prompt_money(label: &str) -> Money {
    loop {
        match prompt(label).parse() {
            Ok(value) => return value,
            Err(err) => println!("✗ {err}"),
        }
    }
}

/// Prompts until a weight (up to 3 decimals) is entered.
pub fn prompt_weight(label: &str) -> Weight {
    loop {
        match prompt(label).parse() {
            Ok(value) => return value,
            Err(err) => println!("✗ {err}"),
        }
    }
}

/// Prompts until a date in YYYY-MM-DD form is entered.
pub fn prompt_date(label: &str) -> NaiveDate {
    loop {
        let raw = prompt(&format!("{label} (YYYY-MM-DD)"));
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => return date,
            Err(_) => println!("✗ Enter a date like 2025-10-01."),
        }
    }
}

/// Prompts for yes/no; empty defaults to no.
pub fn confirm(label: &str) -> bool {
    let answer = prompt(&format!("{label} [y/N]"));
    matches!(answer.as_str(), "y" | "Y" | "yes" | "YES")
}

/// Lists the barcode kinds and prompts until one is chosen.
pub fn prompt_kind() -> BarcodeKind {
    println!("Barcode kind:");
    for (index, kind) in BarcodeKind::ALL.iter().enumerate() {
        println!("  {}. {}", index + 1, kind);
    }
    loop {
        let choice = prompt_i64("Choose kind");
        if choice >= 1 && (choice as usize) <= BarcodeKind::ALL.len() {
            return BarcodeKind::ALL[choice as usize - 1];
        }
        println!("✗ Pick a number from the list.");
    }
}

/// Lists the categories and prompts for one; 0 means "no category".
pub fn prompt_category() -> Option<ProductCategory> {
    println!("Category:");
    println!("  0. (none)");
    for (index, category) in ProductCategory::ALL.iter().enumerate() {
        println!("  {}. {} - {}", index + 1, category, category.description());
    }
    loop {
        let choice = prompt_i64("Choose category");
        if choice == 0 {
            return None;
        }
        if choice >= 1 && (choice as usize) <= ProductCategory::ALL.len() {
            return Some(ProductCategory::ALL[choice as usize - 1]);
        }
        println!("✗ Pick a number from the list.");
    }
}
