//! Product detail screen controller
//!
//! A detail screen is built fresh for every visit. Quantity, size and the
//! favorite flag live only as long as the screen does.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartReceipt};
use crate::catalog::{Category, Product};
use crate::error::{Error, Result};
use crate::nav::Navigation;
use crate::round_cents;

/// Long-form description shown for every product
pub const DESCRIPTION: &str = "This is a high-quality product that offers excellent value for \
money. It features premium materials and craftsmanship, ensuring durability and long-lasting \
performance. Perfect for everyday use and designed with user comfort in mind.";

/// Product shown when the detail screen is entered without one
pub fn fallback_product() -> Product {
    Product::new(
        "1",
        "Wireless Headphones",
        99.99,
        "headphones",
        Category::Electronics,
        4.5,
    )
}

/// Garment size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Size {
    XS,
    S,
    #[default]
    M,
    L,
    XL,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::XS, Size::S, Size::M, Size::L, Size::XL];

    pub fn label(&self) -> &'static str {
        match self {
            Size::XS => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(2)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSize(s.to_string()))
    }
}

/// Customer review (display only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub user: String,
    /// Whole stars, 0 to 5
    pub rating: u8,
    pub comment: String,
    pub relative_date: String,
}

impl Review {
    fn new(id: u32, user: &str, rating: u8, comment: &str, relative_date: &str) -> Self {
        Self {
            id,
            user: user.to_string(),
            rating,
            comment: comment.to_string(),
            relative_date: relative_date.to_string(),
        }
    }
}

/// The built-in review set
pub fn sample_reviews() -> Vec<Review> {
    vec![
        Review::new(1, "John D.", 5, "Great product! Exactly what I was looking for.", "2 days ago"),
        Review::new(2, "Sarah M.", 4, "Good quality, fast delivery. Would recommend!", "1 week ago"),
        Review::new(3, "Mike R.", 5, "Excellent product and customer service.", "2 weeks ago"),
    ]
}

/// Per-visit purchase intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSelection {
    quantity: u32,
    size: Size,
    favorite: bool,
}

impl Default for DetailSelection {
    fn default() -> Self {
        Self {
            quantity: 1,
            size: Size::default(),
            favorite: false,
        }
    }
}

impl DetailSelection {
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Decrease quantity; a no-op at 1
    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    pub fn select_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }
}

/// Choices offered after adding to the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChoice {
    /// Dismiss and stay on the detail screen
    ContinueShopping,
    /// Go back to the catalog
    ViewCart,
}

impl CartChoice {
    pub fn label(&self) -> &'static str {
        match self {
            CartChoice::ContinueShopping => "Continue Shopping",
            CartChoice::ViewCart => "View Cart",
        }
    }
}

/// Pending add-to-cart acknowledgment
#[derive(Debug, Clone, PartialEq)]
pub struct CartConfirmation {
    pub title: &'static str,
    pub message: String,
    pub receipt: CartReceipt,
}

/// Detail screen controller
#[derive(Debug, Clone)]
pub struct DetailScreen {
    product: Product,
    selection: DetailSelection,
    reviews: Vec<Review>,
    confirmation: Option<CartConfirmation>,
}

impl DetailScreen {
    /// Enter the screen for a product, falling back to the mock product
    pub fn new(product: Option<Product>) -> Self {
        let product = product.unwrap_or_else(|| {
            tracing::warn!("detail screen opened without a product, using fallback");
            fallback_product()
        });
        Self {
            product,
            selection: DetailSelection::default(),
            reviews: sample_reviews(),
            confirmation: None,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn selection(&self) -> &DetailSelection {
        &self.selection
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn quantity(&self) -> u32 {
        self.selection.quantity()
    }

    /// Price times quantity, rounded to cents
    pub fn total(&self) -> f64 {
        round_cents(self.product.price * f64::from(self.selection.quantity()))
    }

    pub fn increment_quantity(&mut self) {
        self.selection.increment_quantity();
    }

    pub fn decrement_quantity(&mut self) {
        self.selection.decrement_quantity();
    }

    pub fn select_size(&mut self, size: Size) {
        self.selection.select_size(size);
    }

    /// Step to the next larger size, stopping at XL
    pub fn next_size(&mut self) {
        let index = (self.selection.size().index() + 1).min(Size::ALL.len() - 1);
        self.selection.select_size(Size::ALL[index]);
    }

    /// Step to the next smaller size, stopping at XS
    pub fn previous_size(&mut self) {
        let index = self.selection.size().index().saturating_sub(1);
        self.selection.select_size(Size::ALL[index]);
    }

    pub fn toggle_favorite(&mut self) {
        self.selection.toggle_favorite();
    }

    /// Report the current quantity to the cart and hold its acknowledgment
    pub fn add_to_cart(&mut self, cart: &mut dyn Cart) -> &CartConfirmation {
        let quantity = self.selection.quantity();
        let receipt = cart.add(&self.product, quantity);
        self.confirmation.insert(CartConfirmation {
            title: "Success",
            message: format!("{} {} added to cart!", quantity, self.product.name),
            receipt,
        })
    }

    pub fn confirmation(&self) -> Option<&CartConfirmation> {
        self.confirmation.as_ref()
    }

    /// Resolve the pending confirmation
    pub fn resolve_confirmation(&mut self, choice: CartChoice) -> Option<Navigation> {
        self.confirmation.take()?;
        match choice {
            CartChoice::ContinueShopping => None,
            CartChoice::ViewCart => Some(Navigation::Back),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::MockCart;
    use crate::catalog::sample_products;

    fn smart_watch() -> DetailScreen {
        DetailScreen::new(Some(sample_products().remove(1)))
    }

    #[test]
    fn test_fresh_selection_defaults() {
        let screen = smart_watch();
        assert_eq!(screen.quantity(), 1);
        assert_eq!(screen.selection().size(), Size::M);
        assert!(!screen.selection().is_favorite());
        assert!(screen.confirmation().is_none());
    }

    #[test]
    fn test_missing_product_uses_fallback() {
        let screen = DetailScreen::new(None);
        assert_eq!(screen.product(), &fallback_product());
    }

    #[test]
    fn test_decrement_floor() {
        let mut screen = smart_watch();
        for _ in 0..3 {
            screen.decrement_quantity();
        }
        assert_eq!(screen.quantity(), 1);
    }

    #[test]
    fn test_increment_then_decrement_roundtrips() {
        let mut screen = smart_watch();
        screen.increment_quantity();
        screen.increment_quantity();
        assert_eq!(screen.quantity(), 3);
        screen.decrement_quantity();
        assert_eq!(screen.quantity(), 2);
    }

    #[test]
    fn test_total_tracks_quantity() {
        let mut screen = smart_watch();
        assert_eq!(screen.total(), 199.99);
        screen.increment_quantity();
        assert_eq!(screen.total(), 399.98);
        screen.increment_quantity();
        assert_eq!(screen.total(), 599.97);
    }

    #[test]
    fn test_size_selection_is_exclusive() {
        let mut screen = smart_watch();
        screen.select_size(Size::XS);
        screen.select_size(Size::XL);
        assert_eq!(screen.selection().size(), Size::XL);
        screen.next_size();
        assert_eq!(screen.selection().size(), Size::XL);
        screen.previous_size();
        assert_eq!(screen.selection().size(), Size::L);
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!("xl".parse::<Size>(), Ok(Size::XL));
        assert_eq!(
            "XXL".parse::<Size>(),
            Err(Error::UnknownSize("XXL".to_string()))
        );
    }

    #[test]
    fn test_favorite_toggle() {
        let mut screen = smart_watch();
        screen.toggle_favorite();
        assert!(screen.selection().is_favorite());
        screen.toggle_favorite();
        assert!(!screen.selection().is_favorite());
    }

    #[test]
    fn test_add_to_cart_reports_quantity() {
        let mut screen = smart_watch();
        let mut cart = MockCart::new();
        screen.increment_quantity();

        let confirmation = screen.add_to_cart(&mut cart);
        assert_eq!(confirmation.message, "2 Smart Watch added to cart!");
        assert_eq!(confirmation.receipt.line_total, 399.98);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[0].product.name, "Smart Watch");
    }

    #[test]
    fn test_confirmation_choices() {
        let mut screen = smart_watch();
        let mut cart = MockCart::new();

        screen.add_to_cart(&mut cart);
        assert_eq!(screen.resolve_confirmation(CartChoice::ContinueShopping), None);
        assert!(screen.confirmation().is_none());

        screen.add_to_cart(&mut cart);
        assert_eq!(
            screen.resolve_confirmation(CartChoice::ViewCart),
            Some(Navigation::Back)
        );

        // nothing pending
        assert_eq!(screen.resolve_confirmation(CartChoice::ViewCart), None);
    }

    #[test]
    fn test_reviews_are_static() {
        let screen = smart_watch();
        assert_eq!(screen.reviews().len(), 3);
        assert_eq!(screen.reviews()[1].user, "Sarah M.");
    }
}
