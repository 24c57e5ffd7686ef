//! Product catalog and the browse screen controller
//!
//! The catalog owns the product list for the lifetime of the screen. The
//! displayed list is derived from the search text and the selected category
//! and is recomputed synchronously after every change.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::nav::{Navigation, Route};
use crate::GRID_COLUMNS;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Electronics,
    Fashion,
    Sports,
    Home,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Electronics,
        Category::Fashion,
        Category::Sports,
        Category::Home,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Sports => "Sports",
            Category::Home => "Home",
        }
    }

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Next category, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price in USD
    pub price: f64,
    /// Icon key for the product image
    pub image_key: String,
    /// Concrete category, never [`Category::All`]
    #[serde(deserialize_with = "product_category")]
    pub category: Category,
    /// Average rating, 0.0 to 5.0
    pub rating: f64,
}

impl Product {
    pub fn new(
        id: &str,
        name: &str,
        price: f64,
        image_key: &str,
        category: Category,
        rating: f64,
    ) -> Self {
        debug_assert_ne!(category, Category::All, "product {} has no concrete category", id);
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image_key: image_key.to_string(),
            category,
            rating,
        }
    }
}

fn product_category<'de, D>(deserializer: D) -> std::result::Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    match Category::deserialize(deserializer)? {
        Category::All => Err(de::Error::custom(Error::UnknownCategory(
            Category::All.to_string(),
        ))),
        category => Ok(category),
    }
}

/// The built-in sample catalog
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("1", "Wireless Headphones", 99.99, "headphones", Category::Electronics, 4.5),
        Product::new("2", "Smart Watch", 199.99, "watch", Category::Electronics, 4.3),
        Product::new("3", "Running Shoes", 79.99, "football", Category::Sports, 4.7),
        Product::new("4", "Coffee Maker", 149.99, "cafe", Category::Home, 4.2),
        Product::new("5", "Laptop Backpack", 59.99, "briefcase", Category::Fashion, 4.6),
        Product::new("6", "Bluetooth Speaker", 89.99, "musical-notes", Category::Electronics, 4.4),
    ]
}

/// Search text and category selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search_text: String,
    pub category: Category,
}

impl CatalogFilter {
    /// Check whether a product passes both the search and category predicates
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = product
            .name
            .to_lowercase()
            .contains(&self.search_text.to_lowercase());
        let matches_category = self.category == Category::All || product.category == self.category;
        matches_search && matches_category
    }
}

/// Products passing the filter, in catalog order
pub fn filter_products<'a>(products: &'a [Product], filter: &CatalogFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Which part of the catalog screen receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFocus {
    Search,
    Categories,
    #[default]
    Grid,
    NavBar,
}

impl CatalogFocus {
    const ORDER: [CatalogFocus; 4] = [
        CatalogFocus::Search,
        CatalogFocus::Categories,
        CatalogFocus::Grid,
        CatalogFocus::NavBar,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Bottom navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavTab {
    #[default]
    Home,
    Search,
    Cart,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 4] = [NavTab::Home, NavTab::Search, NavTab::Cart, NavTab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Search => "Search",
            NavTab::Cart => "Cart",
            NavTab::Profile => "Profile",
        }
    }
}

/// Cursor movement within the product grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
}

/// Catalog (browse) screen controller
#[derive(Debug, Clone)]
pub struct CatalogScreen {
    products: Vec<Product>,
    filter: CatalogFilter,
    /// Indices into `products` that pass the filter
    displayed: Vec<usize>,
    cursor: usize,
    focus: CatalogFocus,
    nav_cursor: usize,
    active_tab: NavTab,
}

impl Default for CatalogScreen {
    fn default() -> Self {
        Self::new(sample_products())
    }
}

impl CatalogScreen {
    /// Create a catalog over a fixed product list
    pub fn new(products: Vec<Product>) -> Self {
        let mut screen = Self {
            products,
            filter: CatalogFilter::default(),
            displayed: Vec::new(),
            cursor: 0,
            focus: CatalogFocus::default(),
            nav_cursor: 0,
            active_tab: NavTab::default(),
        };
        screen.refresh();
        screen
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn search_text(&self) -> &str {
        &self.filter.search_text
    }

    pub fn category(&self) -> Category {
        self.filter.category
    }

    /// Products currently displayed, in catalog order
    pub fn displayed(&self) -> Vec<&Product> {
        self.displayed.iter().map(|&i| &self.products[i]).collect()
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    /// Grid cursor position within the displayed list
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Product under the grid cursor
    pub fn selected_product(&self) -> Option<&Product> {
        self.displayed.get(self.cursor).map(|&i| &self.products[i])
    }

    pub fn focus(&self) -> CatalogFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: CatalogFocus) {
        self.focus = focus;
    }

    /// Move focus to the next input region
    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % CatalogFocus::ORDER.len();
        self.focus = CatalogFocus::ORDER[next];
    }

    /// Move focus to the previous input region
    pub fn focus_previous(&mut self) {
        let len = CatalogFocus::ORDER.len();
        self.focus = CatalogFocus::ORDER[(self.focus.index() + len - 1) % len];
    }

    /// Replace the search text
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
        self.refresh();
    }

    /// Append a typed character to the search text
    pub fn push_search_char(&mut self, c: char) {
        self.filter.search_text.push(c);
        self.refresh();
    }

    /// Remove the last character of the search text
    pub fn pop_search_char(&mut self) {
        if self.filter.search_text.pop().is_some() {
            self.refresh();
        }
    }

    pub fn clear_search(&mut self) {
        self.set_search_text(String::new());
    }

    /// Select a category (single select)
    pub fn select_category(&mut self, category: Category) {
        self.filter.category = category;
        self.refresh();
    }

    pub fn next_category(&mut self) {
        self.select_category(self.filter.category.next());
    }

    pub fn previous_category(&mut self) {
        self.select_category(self.filter.category.previous());
    }

    /// Move the grid cursor, staying inside the displayed list
    pub fn move_cursor(&mut self, direction: GridMove) {
        let len = self.displayed.len();
        if len == 0 {
            return;
        }
        let column = self.cursor % GRID_COLUMNS;
        self.cursor = match direction {
            GridMove::Left if column > 0 => self.cursor - 1,
            GridMove::Right if column + 1 < GRID_COLUMNS && self.cursor + 1 < len => {
                self.cursor + 1
            }
            GridMove::Up if self.cursor >= GRID_COLUMNS => self.cursor - GRID_COLUMNS,
            GridMove::Down if self.cursor + GRID_COLUMNS < len => self.cursor + GRID_COLUMNS,
            _ => self.cursor,
        };
    }

    /// Open the product under the cursor
    pub fn open_selected(&self) -> Option<Navigation> {
        let product = self.selected_product()?;
        tracing::info!(product = %product.name, "opening product details");
        Some(Navigation::Push(Route::detail(product.clone())))
    }

    /// Highlighted (not necessarily active) nav tab
    pub fn nav_cursor(&self) -> NavTab {
        NavTab::ALL[self.nav_cursor]
    }

    pub fn active_tab(&self) -> NavTab {
        self.active_tab
    }

    pub fn move_nav(&mut self, forward: bool) {
        let len = NavTab::ALL.len();
        self.nav_cursor = if forward {
            (self.nav_cursor + 1) % len
        } else {
            (self.nav_cursor + len - 1) % len
        };
    }

    /// Activate a nav tab
    pub fn activate_tab(&mut self, tab: NavTab) -> Option<Navigation> {
        self.active_tab = tab;
        self.nav_cursor = NavTab::ALL.iter().position(|t| *t == tab).unwrap_or(0);
        match tab {
            NavTab::Search => {
                self.focus = CatalogFocus::Search;
                None
            }
            NavTab::Profile => Some(Navigation::Push(Route::Profile)),
            NavTab::Home | NavTab::Cart => None,
        }
    }

    /// Activate the highlighted nav tab
    pub fn activate_nav(&mut self) -> Option<Navigation> {
        self.activate_tab(self.nav_cursor())
    }

    fn refresh(&mut self) {
        self.displayed = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| self.filter.matches(p))
            .map(|(i, _)| i)
            .collect();
        self.cursor = self.cursor.min(self.displayed.len().saturating_sub(1));
        tracing::trace!(
            search = %self.filter.search_text,
            category = %self.filter.category,
            shown = self.displayed.len(),
            "catalog filter updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn names(screen: &CatalogScreen) -> Vec<&str> {
        screen.displayed().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_defaults_show_everything() {
        let screen = CatalogScreen::default();
        assert_eq!(screen.category(), Category::All);
        assert_eq!(screen.search_text(), "");
        assert_eq!(screen.displayed_len(), 6);
    }

    #[test]
    fn test_search_watch() {
        let mut screen = CatalogScreen::default();
        screen.set_search_text("watch");
        assert_eq!(names(&screen), vec!["Smart Watch"]);
    }

    #[test]
    fn test_electronics_in_catalog_order() {
        let mut screen = CatalogScreen::default();
        screen.select_category(Category::Electronics);
        assert_eq!(
            names(&screen),
            vec!["Wireless Headphones", "Smart Watch", "Bluetooth Speaker"]
        );
    }

    #[rstest]
    #[case("SPEAKER", Category::All, &["Bluetooth Speaker"])]
    #[case("e", Category::Sports, &["Running Shoes"])]
    #[case("watch", Category::Home, &[])]
    #[case("", Category::Fashion, &["Laptop Backpack"])]
    #[case("co", Category::All, &["Coffee Maker"])]
    fn test_filter_cases(
        #[case] search: &str,
        #[case] category: Category,
        #[case] expected: &[&str],
    ) {
        let mut screen = CatalogScreen::default();
        screen.set_search_text(search);
        screen.select_category(category);
        assert_eq!(names(&screen), expected);
    }

    #[test]
    fn test_typing_updates_each_keystroke() {
        let mut screen = CatalogScreen::default();
        screen.push_search_char('s');
        assert_eq!(screen.displayed_len(), 4);
        screen.push_search_char('m');
        assert_eq!(names(&screen), vec!["Smart Watch"]);
        screen.pop_search_char();
        assert_eq!(screen.displayed_len(), 4);
    }

    #[test]
    fn test_cursor_clamped_when_list_shrinks() {
        let mut screen = CatalogScreen::default();
        screen.move_cursor(GridMove::Down);
        screen.move_cursor(GridMove::Down);
        screen.move_cursor(GridMove::Right);
        assert_eq!(screen.cursor(), 5);
        screen.select_category(Category::Electronics);
        assert_eq!(screen.cursor(), 2);
        screen.set_search_text("nothing matches this");
        assert_eq!(screen.cursor(), 0);
        assert!(screen.selected_product().is_none());
        assert!(screen.open_selected().is_none());
    }

    #[test]
    fn test_grid_movement() {
        let mut screen = CatalogScreen::default();
        screen.move_cursor(GridMove::Left);
        assert_eq!(screen.cursor(), 0);
        screen.move_cursor(GridMove::Right);
        assert_eq!(screen.cursor(), 1);
        screen.move_cursor(GridMove::Right);
        assert_eq!(screen.cursor(), 1);
        screen.move_cursor(GridMove::Down);
        assert_eq!(screen.cursor(), 3);
        screen.move_cursor(GridMove::Up);
        assert_eq!(screen.cursor(), 1);
    }

    #[test]
    fn test_open_selected_carries_full_product() {
        let mut screen = CatalogScreen::default();
        screen.set_search_text("watch");
        let nav = screen.open_selected().unwrap();
        let expected = sample_products()
            .into_iter()
            .find(|p| p.name == "Smart Watch")
            .unwrap();
        assert_eq!(nav, Navigation::Push(Route::detail(expected)));
    }

    #[test]
    fn test_product_rejects_all_category() {
        let json = r#"{"id":"9","name":"Mystery Box","price":9.99,"image_key":"box","category":"All","rating":3.0}"#;
        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown category: All"));

        let json = json.replace("\"All\"", "\"Home\"");
        let product: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product.category, Category::Home);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no concrete category")]
    fn test_new_product_needs_concrete_category() {
        Product::new("9", "Mystery Box", 9.99, "box", Category::All, 3.0);
    }

    #[test]
    fn test_category_parsing_and_cycling() {
        assert_eq!("electronics".parse::<Category>(), Ok(Category::Electronics));
        assert_eq!(" Home ".parse::<Category>(), Ok(Category::Home));
        assert!("Toys".parse::<Category>().is_err());
        assert_eq!(Category::Home.next(), Category::All);
        assert_eq!(Category::All.previous(), Category::Home);
    }

    #[test]
    fn test_nav_tabs() {
        let mut screen = CatalogScreen::default();
        assert_eq!(screen.activate_tab(NavTab::Cart), None);
        assert_eq!(screen.active_tab(), NavTab::Cart);
        assert_eq!(screen.activate_tab(NavTab::Search), None);
        assert_eq!(screen.focus(), CatalogFocus::Search);
        screen.move_nav(true);
        assert_eq!(screen.nav_cursor(), NavTab::Cart);
        screen.move_nav(true);
        assert_eq!(
            screen.activate_nav(),
            Some(Navigation::Push(Route::Profile))
        );
        assert_eq!(screen.active_tab(), NavTab::Profile);
    }

    #[test]
    fn test_focus_cycle() {
        let mut screen = CatalogScreen::default();
        assert_eq!(screen.focus(), CatalogFocus::Grid);
        screen.focus_next();
        assert_eq!(screen.focus(), CatalogFocus::NavBar);
        screen.focus_next();
        assert_eq!(screen.focus(), CatalogFocus::Search);
        screen.focus_previous();
        assert_eq!(screen.focus(), CatalogFocus::NavBar);
    }

    #[test]
    fn test_category_serializes_as_variant_name() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"Electronics\"");
    }
}
