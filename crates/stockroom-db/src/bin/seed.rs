//! # Seed Data Generator
//!
//! Populates the database with the sample catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p stockroom-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```
//!
//! ## Generated Data
//! Three products, each created atomically with its own barcode:
//! - Whole Milk (La Serenisima, EAN-13)
//! - Sliced Bread (Bimbo, EAN-8)
//! - Long Grain Rice (Gallo, UPC)
//!
//! Seeding is skipped when the database already has products, so it is
//! safe to run on every dev setup.

use std::env;

use chrono::NaiveDate;
use stockroom_core::{Barcode, BarcodeKind, Money, Product, ProductCategory, Weight};
use stockroom_db::{Database, DbConfig};

/// The sample catalog: (name, brand, category, price, weight, stock,
/// barcode kind, barcode value, assigned date, notes).
const CATALOG: &[(
    &str,
    &str,
    ProductCategory,
    &str,
    &str,
    i64,
    BarcodeKind,
    &str,
    (i32, u32, u32),
    &str,
)] = &[
    (
        "Whole Milk",
        "La Serenisima",
        ProductCategory::Food,
        "1937.50",
        "1.000",
        45,
        BarcodeKind::Ean13,
        "7791234567890",
        (2025, 10, 1),
        "Lot L123 - premium whole milk",
    ),
    (
        "Sliced Bread",
        "Bimbo",
        ProductCategory::Food,
        "1519.75",
        "0.500",
        32,
        BarcodeKind::Ean8,
        "7791234567891",
        (2025, 10, 2),
        "Wholegrain, no preservatives",
    ),
    (
        "Long Grain Rice",
        "Gallo",
        ProductCategory::Food,
        "2867.50",
        "1.000",
        67,
        BarcodeKind::Upc,
        "7791234567892",
        (2025, 10, 3),
        "Export grade long grain",
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./stockroom_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stockroom Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().get_all().await?;
    if !existing.is_empty() {
        println!("⚠ Database already has {} products", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    let products = db.products();
    for (name, brand, category, price, weight, stock, kind, value, (y, m, d), notes) in CATALOG {
        let mut product = Product::new(
            *name,
            Some((*brand).to_string()),
            price.parse::<Money>()?,
            weight.parse::<Weight>()?,
            *stock,
        );
        product.category = Some(*category);

        let assigned = NaiveDate::from_ymd_opt(*y, *m, *d).expect("catalog dates are valid");
        let mut barcode = Barcode::new(*kind, *value, assigned);
        barcode.notes = Some((*notes).to_string());

        products.insert_with_barcode(&mut product, barcode).await?;
        println!(
            "  ✓ {} (id {}, barcode {})",
            product.name,
            product.id,
            product.barcode.as_ref().map(|b| b.value.as_str()).unwrap_or("-")
        );
    }

    println!();
    println!("✓ Seed complete: {} products inserted.", CATALOG.len());

    Ok(())
}
