//! The product catalog.

use listpane_export::Column;
use listpane_seeker::{Bucket, Number, Seekable, Value};
use serde::{Deserialize, Serialize};

use crate::error::ViewError;
use crate::view::{FilterField, ViewSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub sales: u32,
}

impl Product {
    pub fn new(id: u32, name: &str, category: &str, price: f64, stock: u32, sales: u32) -> Self {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
            sales,
        }
    }
}

impl Seekable for Product {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::from(self.id)),
            "name" => Value::String(&self.name),
            "category" => Value::String(&self.category),
            "price" => Value::Number(Number::F64(self.price)),
            "stock" => Value::Number(Number::from(self.stock)),
            "sales" => Value::Number(Number::from(self.sales)),
            _ => Value::None,
        }
    }
}

/// Categories offered by the category select, in display order.
pub const CATEGORIES: [&str; 9] = [
    "Electronics",
    "Accessories",
    "Fitness",
    "Home",
    "Footwear",
    "Musical Instruments",
    "Kitchen",
    "Office",
    "Books",
];

/// The "Product List" view: search over name and category, a fixed category
/// select, and a price range select.
pub fn schema() -> Result<ViewSchema<Product>, ViewError> {
    ViewSchema::builder("Product List")
        .search_fields(["name", "category"])
        .filter(FilterField::fixed("category", "All Categories", CATEGORIES))
        .range(
            "price",
            "All Price Ranges",
            vec![
                Bucket::under("Under $50", 50.0),
                Bucket::within("$50 - $100", 50.0, 100.0),
                Bucket::over("Over $100", 100.0),
            ],
        )
        .column(Column::field("Name", "name"))
        .column(Column::field("Category", "category"))
        .column(Column::field("Price", "price").display_with(two_decimals))
        .column(Column::field("Stock", "stock"))
        .column(Column::field("Sales", "sales"))
        .export_filename("products.csv")
        .build()
}

/// Prices on screen always show cents: `80.00`, not `80`.
fn two_decimals(value: &Value<'_>) -> String {
    match value.as_number() {
        Some(n) => format!("{:.2}", n.to_f64()),
        None => value.to_string(),
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Wireless Earbuds", "Electronics", 59.99, 143, 1200),
        Product::new(2, "Leather Wallet", "Accessories", 39.99, 89, 800),
        Product::new(3, "Smart Watch", "Electronics", 199.99, 56, 650),
        Product::new(4, "Yoga Mat", "Fitness", 29.99, 210, 950),
        Product::new(5, "Coffee Maker", "Home", 79.99, 78, 720),
        Product::new(6, "Bluetooth Speaker", "Electronics", 49.99, 120, 400),
        Product::new(7, "Running Shoes", "Footwear", 89.99, 60, 300),
        Product::new(8, "Insulated Water Bottle", "Fitness", 19.99, 180, 200),
        Product::new(9, "Smartphone Stand", "Accessories", 25.99, 150, 350),
        Product::new(10, "Gaming Headset", "Electronics", 79.99, 45, 250),
        Product::new(11, "Fitness Tracker", "Electronics", 99.99, 90, 600),
        Product::new(12, "Wall Art", "Home", 39.99, 70, 150),
        Product::new(13, "Portable Charger", "Electronics", 29.99, 150, 500),
        Product::new(14, "Leather Backpack", "Accessories", 149.99, 30, 80),
        Product::new(15, "Guitar", "Musical Instruments", 299.99, 20, 25),
        Product::new(16, "Wireless Mouse", "Electronics", 29.99, 110, 600),
        Product::new(17, "Desk Organizer", "Office", 19.99, 140, 200),
        Product::new(18, "Novel Book", "Books", 15.99, 80, 500),
        Product::new(19, "Chef's Knife", "Kitchen", 49.99, 50, 150),
        Product::new(20, "Air Purifier", "Home", 199.99, 25, 40),
    ]
}
