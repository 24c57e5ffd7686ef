//! Star rating projection
//!
//! Ratings are shown as a fixed row of five stars. Only whole stars are
//! filled: star `i` (1-based) is filled when `i <= rating`, so 4.5 shows four
//! filled stars and one outline.

/// Number of star cells in a rating row
pub const STAR_COUNT: usize = 5;

/// Number of filled stars for a rating
pub fn filled_stars(rating: f64) -> usize {
    if !rating.is_finite() || rating < 1.0 {
        return 0;
    }
    (rating.floor() as usize).min(STAR_COUNT)
}

/// Filled/outline state of each of the five star cells
pub fn star_cells(rating: f64) -> [bool; STAR_COUNT] {
    let filled = filled_stars(rating);
    let mut cells = [false; STAR_COUNT];
    for cell in cells.iter_mut().take(filled) {
        *cell = true;
    }
    cells
}
