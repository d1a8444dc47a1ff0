//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐        ┌─────────────────┐                     │
//! │  │    Product      │  0..1  │     Barcode     │                     │
//! │  │  ─────────────  │ ─────► │  ─────────────  │                     │
//! │  │  id (rowid)     │        │  id (rowid)     │                     │
//! │  │  name, brand    │        │  kind           │                     │
//! │  │  category       │        │  value (unique) │                     │
//! │  │  price, weight  │        │  assigned_date  │                     │
//! │  │  stock, deleted │        │  notes, deleted │                     │
//! │  └─────────────────┘        └─────────────────┘                     │
//! │                                                                     │
//! │  ┌─────────────────┐        ┌─────────────────┐                     │
//! │  │ ProductCategory │        │  BarcodeKind    │                     │
//! │  │  Food           │        │  Ean13          │                     │
//! │  │  Beverages      │        │  Ean8           │                     │
//! │  │  Appliances     │        │  Upc            │                     │
//! │  │  Hardware       │        └─────────────────┘                     │
//! │  │  Cleaning       │                                                │
//! │  └─────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Entities carry an `id` assigned by the store on first insert; `id == 0`
//! means "not yet persisted". Equality follows the id once both sides have
//! one, and falls back to business fields for transient values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::money::{Money, Weight};

// =============================================================================
// Barcode Kind
// =============================================================================

/// The symbology of a barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarcodeKind {
    /// 13-digit European Article Number.
    #[serde(rename = "EAN13")]
    Ean13,
    /// 8-digit European Article Number (small packages).
    #[serde(rename = "EAN8")]
    Ean8,
    /// 12-digit Universal Product Code.
    #[serde(rename = "UPC")]
    Upc,
}

impl BarcodeKind {
    /// Every kind, in menu order.
    pub const ALL: [BarcodeKind; 3] = [BarcodeKind::Ean13, BarcodeKind::Ean8, BarcodeKind::Upc];

    /// The canonical stored name of this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BarcodeKind::Ean13 => "EAN13",
            BarcodeKind::Ean8 => "EAN8",
            BarcodeKind::Upc => "UPC",
        }
    }

    /// Parses a stored kind name leniently: trimmed, case-insensitive.
    ///
    /// Returns `None` for anything unrecognized. Readers treat that as an
    /// absent kind rather than a hard failure, since the column is free-form
    /// text and may hold values written by other tools.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "EAN13" => Some(BarcodeKind::Ean13),
            "EAN8" => Some(BarcodeKind::Ean8),
            "UPC" => Some(BarcodeKind::Upc),
            _ => None,
        }
    }
}

impl fmt::Display for BarcodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product Category
// =============================================================================

/// The category a product is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Food,
    Beverages,
    Appliances,
    Hardware,
    Cleaning,
}

impl ProductCategory {
    /// Every category, in menu order.
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::Food,
        ProductCategory::Beverages,
        ProductCategory::Appliances,
        ProductCategory::Hardware,
        ProductCategory::Cleaning,
    ];

    /// The canonical stored name of this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Food => "FOOD",
            ProductCategory::Beverages => "BEVERAGES",
            ProductCategory::Appliances => "APPLIANCES",
            ProductCategory::Hardware => "HARDWARE",
            ProductCategory::Cleaning => "CLEANING",
        }
    }

    /// A short human description, shown beside the name in menus.
    pub const fn description(&self) -> &'static str {
        match self {
            ProductCategory::Food => "Edible goods",
            ProductCategory::Beverages => "Drinks and liquids",
            ProductCategory::Appliances => "Electrical appliances",
            ProductCategory::Hardware => "Hardware and building materials",
            ProductCategory::Cleaning => "Cleaning and household products",
        }
    }

    /// Parses a stored category name leniently: trimmed, case-insensitive.
    ///
    /// Returns `None` for anything unrecognized; see [`BarcodeKind::parse`]
    /// for why readers tolerate that.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "FOOD" => Some(ProductCategory::Food),
            "BEVERAGES" => Some(ProductCategory::Beverages),
            "APPLIANCES" => Some(ProductCategory::Appliances),
            "HARDWARE" => Some(ProductCategory::Hardware),
            "CLEANING" => Some(ProductCategory::Cleaning),
            _ => None,
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Barcode
// =============================================================================

/// A barcode that can be assigned to a product.
///
/// `kind` and `assigned_date` are optional on the struct so a half-entered
/// barcode can exist in memory; the service rejects `None` before any write
/// and the corresponding columns are NOT NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Barcode {
    /// Store-assigned identifier; 0 until persisted.
    pub id: i64,

    /// Symbology of the code.
    pub kind: Option<BarcodeKind>,

    /// The printed digits. Unique among active barcodes.
    pub value: String,

    /// The date the code was assigned to the catalog.
    pub assigned_date: Option<NaiveDate>,

    /// Optional free-text notes (lot number, provenance, ...).
    pub notes: Option<String>,

    /// Soft-delete flag.
    pub deleted: bool,
}

impl Barcode {
    /// Creates a new, unpersisted barcode.
    pub fn new(kind: BarcodeKind, value: impl Into<String>, assigned_date: NaiveDate) -> Self {
        Barcode {
            id: 0,
            kind: Some(kind),
            value: value.into(),
            assigned_date: Some(assigned_date),
            notes: None,
            deleted: false,
        }
    }

    /// Whether the store has assigned this barcode an identifier.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

/// Identity-first equality: two persisted barcodes compare by id alone;
/// otherwise by (value, kind).
impl PartialEq for Barcode {
    fn eq(&self, other: &Self) -> bool {
        if self.id > 0 && other.id > 0 {
            return self.id == other.id;
        }
        self.value == other.value && self.kind == other.kind
    }
}

impl Eq for Barcode {}

/// Hash mirrors `PartialEq`: id when persisted, (value, kind) otherwise.
impl Hash for Barcode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.id > 0 {
            self.id.hash(state);
        } else {
            self.value.hash(state);
            self.kind.hash(state);
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the warehouse catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier; 0 until persisted.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Optional brand.
    pub brand: Option<String>,

    /// Optional category. Absent when unset or when the stored string is
    /// not a recognized category name.
    pub category: Option<ProductCategory>,

    /// Unit price.
    pub price: Money,

    /// Unit weight. Zero when the row has no weight recorded.
    pub weight: Weight,

    /// Units on hand.
    pub stock: i64,

    /// Soft-delete flag.
    pub deleted: bool,

    /// The linked barcode, populated by reads when an active one exists.
    /// One-way association: the barcode knows nothing about the product.
    pub barcode: Option<Barcode>,
}

impl Product {
    /// Creates a new, unpersisted product.
    pub fn new(
        name: impl Into<String>,
        brand: Option<String>,
        price: Money,
        weight: Weight,
        stock: i64,
    ) -> Self {
        Product {
            id: 0,
            name: name.into(),
            brand,
            category: None,
            price,
            weight,
            stock,
            deleted: false,
            barcode: None,
        }
    }

    /// Whether the store has assigned this product an identifier.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Value of the units on hand (price × stock).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price.multiply_quantity(self.stock)
    }
}

/// Identity-first equality: two persisted products compare by id alone;
/// otherwise by (name, brand, category, price, stock).
///
/// Weight and the barcode link are deliberately not part of equality:
/// re-weighing a product or re-labelling it does not make it a different
/// product.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        if self.id > 0 && other.id > 0 {
            return self.id == other.id;
        }
        self.name == other.name
            && self.brand == other.brand
            && self.category == other.category
            && self.price == other.price
            && self.stock == other.stock
    }
}

impl Eq for Product {}

/// Hash mirrors `PartialEq`: id when persisted, business fields otherwise.
impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.id > 0 {
            self.id.hash(state);
        } else {
            self.name.hash(state);
            self.brand.hash(state);
            self.category.hash(state);
            self.price.hash(state);
            self.stock.hash(state);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in BarcodeKind::ALL {
            assert_eq!(BarcodeKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_kind_parse_lenient() {
        assert_eq!(BarcodeKind::parse("  ean13 "), Some(BarcodeKind::Ean13));
        assert_eq!(BarcodeKind::parse("upc"), Some(BarcodeKind::Upc));
        assert_eq!(BarcodeKind::parse("QR"), None);
        assert_eq!(BarcodeKind::parse(""), None);
    }

    #[test]
    fn test_category_parse_lenient() {
        assert_eq!(
            ProductCategory::parse(" beverages "),
            Some(ProductCategory::Beverages)
        );
        assert_eq!(ProductCategory::parse("FOOD"), Some(ProductCategory::Food));
        assert_eq!(ProductCategory::parse("GROCERIES"), None);
    }

    #[test]
    fn test_barcode_equality_by_id() {
        let mut a = Barcode::new(BarcodeKind::Ean13, "779123", date(2025, 10, 1));
        let mut b = Barcode::new(BarcodeKind::Upc, "000000", date(2024, 1, 1));
        a.id = 7;
        b.id = 7;

        // Same id wins even though every field differs
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_barcode_equality_by_fields_when_transient() {
        let a = Barcode::new(BarcodeKind::Ean13, "779123", date(2025, 10, 1));
        let mut b = Barcode::new(BarcodeKind::Ean13, "779123", date(2023, 3, 3));
        b.notes = Some("different notes".to_string());

        assert_eq!(a, b); // only (value, kind) matter
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = Barcode::new(BarcodeKind::Ean8, "779123", date(2025, 10, 1));
        assert_ne!(a, c);
    }

    #[test]
    fn test_product_equality_excludes_weight_and_barcode() {
        let mut a = Product::new(
            "Whole Milk",
            Some("La Serenisima".to_string()),
            Money::from_cents(193750),
            Weight::from_grams(1000),
            45,
        );
        let mut b = a.clone();
        b.weight = Weight::from_grams(900);
        b.barcode = Some(Barcode::new(BarcodeKind::Ean13, "779", date(2025, 10, 1)));

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.stock = 44;
        assert_ne!(a, b);

        a.id = 1;
        b.id = 1;
        assert_eq!(a, b); // persisted: id wins again
    }

    #[test]
    fn test_stock_value() {
        let product = Product::new(
            "Rice",
            None,
            Money::from_cents(286750),
            Weight::from_grams(1000),
            3,
        );
        assert_eq!(product.stock_value(), Money::from_cents(860250));
    }
}
