//! Cart collaborator
//!
//! The storefront does not own a cart. The detail screen reports what the
//! user added through the [`Cart`] trait and shows the receipt it gets back.

use crate::catalog::Product;
use crate::round_cents;

/// Acknowledgment returned by a cart after an add
#[derive(Debug, Clone, PartialEq)]
pub struct CartReceipt {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    /// Price times quantity, rounded to cents
    pub line_total: f64,
}

/// Something that accepts (product, quantity) pairs
pub trait Cart {
    /// Add a quantity of a product
    fn add(&mut self, product: &Product, quantity: u32) -> CartReceipt;
}

/// A line recorded by [`MockCart`]
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// In-memory cart that records additions for the life of the process
#[derive(Debug, Default)]
pub struct MockCart {
    lines: Vec<CartLine>,
}

impl MockCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

impl Cart for MockCart {
    fn add(&mut self, product: &Product, quantity: u32) -> CartReceipt {
        let line_total = round_cents(product.price * f64::from(quantity));
        tracing::info!(
            product = %product.name,
            quantity,
            line_total,
            "added to cart"
        );
        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });
        CartReceipt {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            line_total,
        }
    }
}
