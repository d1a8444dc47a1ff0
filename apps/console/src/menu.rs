//! # Menu Screens
//!
//! The interactive menu loop: renders screens, gathers input through
//! [`crate::input`], calls the services and prints the outcome. Every rule
//! lives in the services - a failure printed here is exactly the error the
//! service returned, and the loop simply continues.

use stockroom_core::{Barcode, Money, Product};
use stockroom_db::{Database, DbResult};

use crate::input;

const RULE: &str = "========================================";
const DOTS: &str = "........................................";

/// Runs the top-level menu until the user exits.
pub async fn run(db: &Database) {
    println!();
    println!("{RULE}");
    println!(" STOCKROOM - inventory manager");
    println!("{RULE}");

    loop {
        println!();
        println!(" 1. Products");
        println!(" 2. Barcodes");
        println!(" 0. Exit");

        match input::prompt("Choose").as_str() {
            "1" => product_menu(db).await,
            "2" => barcode_menu(db).await,
            "0" => {
                println!("Goodbye.");
                return;
            }
            _ => println!("✗ Pick an option from the menu."),
        }
    }
}

/// Prints the outcome of an operation; returns the value on success.
fn report<T>(result: DbResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            println!("✗ {err}");
            None
        }
    }
}

// =============================================================================
// Product Screens
// =============================================================================

async fn product_menu(db: &Database) {
    loop {
        println!();
        println!("{RULE}");
        println!(" PRODUCTS");
        println!("{RULE}");
        println!(" 1. List all");
        println!(" 2. Show by id");
        println!(" 3. Find by name");
        println!(" 4. Add");
        println!(" 5. Add with new barcode");
        println!(" 6. Update");
        println!(" 7. Assign barcode");
        println!(" 8. Delete");
        println!(" 9. Restore");
        println!(" 0. Back");

        match input::prompt("Choose").as_str() {
            "1" => list_products(db).await,
            "2" => show_product(db).await,
            "3" => find_product(db).await,
            "4" => add_product(db, false).await,
            "5" => add_product(db, true).await,
            "6" => update_product(db).await,
            "7" => assign_barcode(db).await,
            "8" => delete_product(db).await,
            "9" => restore_product(db).await,
            "0" => return,
            _ => println!("✗ Pick an option from the menu."),
        }
    }
}

async fn list_products(db: &Database) {
    let Some(products) = report(db.products().get_all().await) else {
        return;
    };

    if products.is_empty() {
        println!("No active products.");
        return;
    }

    let mut inventory_value = Money::zero();
    for product in &products {
        print_product(product);
        inventory_value += product.stock_value();
    }
    println!("{DOTS}");
    println!(
        "{} active products, inventory value {}",
        products.len(),
        inventory_value
    );
}

async fn show_product(db: &Database) {
    let id = input::prompt_i64("Product id");
    match report(db.products().get_by_id(id).await) {
        Some(Some(product)) => print_product(&product),
        Some(None) => println!("No active product with id {id}."),
        None => {}
    }
}

async fn find_product(db: &Database) {
    let name = input::prompt_nonempty("Exact name");
    match report(db.products().get_by_name(&name).await) {
        Some(Some(product)) => print_product(&product),
        Some(None) => println!("No active product named '{name}'."),
        None => {}
    }
}

/// Gathers a product from prompts. Shared by add and update.
fn gather_product() -> Product {
    let name = input::prompt_nonempty("Name");
    let brand = input::prompt_optional("Brand");
    let price = input::prompt_money("Price");
    let weight = input::prompt_weight("Weight (kg)");
    let stock = input::prompt_i64("Stock");

    let mut product = Product::new(name, brand, price, weight, stock);
    product.category = input::prompt_category();
    product
}

/// Gathers a barcode from prompts. Shared by add and update.
fn gather_barcode() -> Barcode {
    let kind = input::prompt_kind();
    let value = input::prompt_nonempty("Value");
    let assigned = input::prompt_date("Assigned date");

    let mut barcode = Barcode::new(kind, value, assigned);
    barcode.notes = input::prompt_optional("Notes");
    barcode
}

async fn add_product(db: &Database, with_barcode: bool) {
    let mut product = gather_product();

    let result = if with_barcode {
        println!("-- New barcode for this product --");
        let barcode = gather_barcode();
        db.products().insert_with_barcode(&mut product, barcode).await
    } else {
        db.products().insert(&mut product).await
    };

    if report(result).is_some() {
        println!("✓ Product created with id {}.", product.id);
    }
}

async fn update_product(db: &Database) {
    let id = input::prompt_i64("Product id");
    let current = match report(db.products().get_by_id(id).await) {
        Some(Some(product)) => product,
        Some(None) => {
            println!("No active product with id {id}.");
            return;
        }
        None => return,
    };

    println!("Current state:");
    print_product(&current);
    println!("Re-enter the product:");

    let mut updated = gather_product();
    updated.id = current.id;
    updated.barcode = current.barcode; // the link is managed separately

    if report(db.products().update(&updated).await).is_some() {
        println!("✓ Product {id} updated.");
    }
}

async fn assign_barcode(db: &Database) {
    let id = input::prompt_i64("Product id");
    let mut product = match report(db.products().get_by_id(id).await) {
        Some(Some(product)) => product,
        Some(None) => {
            println!("No active product with id {id}.");
            return;
        }
        None => return,
    };

    let barcode_id = input::prompt_i64("Barcode id (0 clears the link)");
    if barcode_id == 0 {
        product.barcode = None;
    } else {
        match report(db.barcodes().get_by_id(barcode_id).await) {
            Some(Some(barcode)) => product.barcode = Some(barcode),
            Some(None) => {
                println!("No active barcode with id {barcode_id}.");
                return;
            }
            None => return,
        }
    }

    if report(db.products().assign_barcode(&product).await).is_some() {
        println!("✓ Barcode link updated.");
    }
}

async fn delete_product(db: &Database) {
    let id = input::prompt_i64("Product id");
    if !input::confirm(&format!("Soft-delete product {id}?")) {
        return;
    }
    match report(db.products().soft_delete(id).await) {
        Some(true) => println!("✓ Product {id} deactivated."),
        Some(false) => println!("Nothing to do: no active product with id {id}."),
        None => {}
    }
}

async fn restore_product(db: &Database) {
    let id = input::prompt_i64("Product id");
    match report(db.products().restore(id).await) {
        Some(true) => println!("✓ Product {id} restored."),
        Some(false) => println!("Nothing to do: no deleted product with id {id}."),
        None => {}
    }
}

// =============================================================================
// Barcode Screens
// =============================================================================

async fn barcode_menu(db: &Database) {
    loop {
        println!();
        println!("{RULE}");
        println!(" BARCODES");
        println!("{RULE}");
        println!(" 1. List all");
        println!(" 2. Show by id");
        println!(" 3. Find by value");
        println!(" 4. Add");
        println!(" 5. Update");
        println!(" 6. Delete");
        println!(" 7. Restore");
        println!(" 0. Back");

        match input::prompt("Choose").as_str() {
            "1" => list_barcodes(db).await,
            "2" => show_barcode(db).await,
            "3" => find_barcode(db).await,
            "4" => add_barcode(db).await,
            "5" => update_barcode(db).await,
            "6" => delete_barcode(db).await,
            "7" => restore_barcode(db).await,
            "0" => return,
            _ => println!("✗ Pick an option from the menu."),
        }
    }
}

async fn list_barcodes(db: &Database) {
    let Some(barcodes) = report(db.barcodes().get_all().await) else {
        return;
    };

    if barcodes.is_empty() {
        println!("No active barcodes.");
        return;
    }

    for barcode in &barcodes {
        print_barcode(barcode);
    }
    println!("{DOTS}");
    println!("{} active barcodes", barcodes.len());
}

async fn show_barcode(db: &Database) {
    let id = input::prompt_i64("Barcode id");
    match report(db.barcodes().get_by_id(id).await) {
        Some(Some(barcode)) => print_barcode(&barcode),
        Some(None) => println!("No active barcode with id {id}."),
        None => {}
    }
}

async fn find_barcode(db: &Database) {
    let value = input::prompt_nonempty("Exact value");
    match report(db.barcodes().get_by_value(&value).await) {
        Some(Some(barcode)) => print_barcode(&barcode),
        Some(None) => println!("No active barcode with value '{value}'."),
        None => {}
    }
}

async fn add_barcode(db: &Database) {
    let mut barcode = gather_barcode();
    if report(db.barcodes().insert(&mut barcode).await).is_some() {
        println!("✓ Barcode created with id {}.", barcode.id);
    }
}

async fn update_barcode(db: &Database) {
    let id = input::prompt_i64("Barcode id");
    let current = match report(db.barcodes().get_by_id(id).await) {
        Some(Some(barcode)) => barcode,
        Some(None) => {
            println!("No active barcode with id {id}.");
            return;
        }
        None => return,
    };

    println!("Current state:");
    print_barcode(&current);
    println!("Re-enter the barcode:");

    let mut updated = gather_barcode();
    updated.id = current.id;

    if report(db.barcodes().update(&updated).await).is_some() {
        println!("✓ Barcode {id} updated.");
    }
}

async fn delete_barcode(db: &Database) {
    let id = input::prompt_i64("Barcode id");
    if !input::confirm(&format!("Soft-delete barcode {id}?")) {
        return;
    }
    match report(db.barcodes().soft_delete(id).await) {
        Some(true) => println!("✓ Barcode {id} deactivated."),
        Some(false) => println!("Nothing to do: no active barcode with id {id}."),
        None => {}
    }
}

async fn restore_barcode(db: &Database) {
    let id = input::prompt_i64("Barcode id");
    match report(db.barcodes().restore(id).await) {
        Some(true) => println!("✓ Barcode {id} restored."),
        Some(false) => println!("Nothing to do: no deleted barcode with id {id}."),
        None => {}
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn print_product(product: &Product) {
    println!("{DOTS}");
    println!("PRODUCT #{}  {}", product.id, product.name);
    println!("  Brand:    {}", product.brand.as_deref().unwrap_or("-"));
    println!(
        "  Category: {}",
        product
            .category
            .map(|c| c.as_str())
            .unwrap_or("-")
    );
    println!("  Price:    {}", product.price);
    println!("  Weight:   {} kg", product.weight);
    println!("  Stock:    {}", product.stock);

    match &product.barcode {
        Some(barcode) => {
            println!(
                "  Barcode:  {} {} (id {}, assigned {})",
                barcode
                    .kind
                    .map(|k| k.as_str())
                    .unwrap_or("(unrecognized)"),
                barcode.value,
                barcode.id,
                barcode
                    .assigned_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            );
            if let Some(notes) = &barcode.notes {
                println!("            {notes}");
            }
        }
        None => println!("  Barcode:  (none)"),
    }
}

fn print_barcode(barcode: &Barcode) {
    println!("{DOTS}");
    println!("BARCODE #{}  {}", barcode.id, barcode.value);
    println!(
        "  Kind:     {}",
        barcode
            .kind
            .map(|k| k.as_str())
            .unwrap_or("(unrecognized)")
    );
    println!(
        "  Assigned: {}",
        barcode
            .assigned_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "  Notes:    {}",
        barcode.notes.as_deref().unwrap_or("(no notes)")
    );
}
