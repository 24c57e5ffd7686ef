//! Entry screen
//!
//! Stand-in for the authentication collaborator. It collects nothing and
//! only decides whether to start browsing or leave.

use crate::nav::{Navigation, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthChoice {
    #[default]
    Continue,
    Quit,
}

impl AuthChoice {
    pub fn label(&self) -> &'static str {
        match self {
            AuthChoice::Continue => "Continue Shopping",
            AuthChoice::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthScreen {
    selected: AuthChoice,
}

impl AuthScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> AuthChoice {
        self.selected
    }

    pub fn toggle(&mut self) {
        self.selected = match self.selected {
            AuthChoice::Continue => AuthChoice::Quit,
            AuthChoice::Quit => AuthChoice::Continue,
        };
    }

    /// Act on the selected choice; browsing always starts from a fresh history
    pub fn submit(&self) -> Navigation {
        match self.selected {
            AuthChoice::Continue => Navigation::Reset(Route::Catalog),
            AuthChoice::Quit => Navigation::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit() {
        let mut screen = AuthScreen::new();
        assert_eq!(screen.submit(), Navigation::Reset(Route::Catalog));
        screen.toggle();
        assert_eq!(screen.selected(), AuthChoice::Quit);
        assert_eq!(screen.submit(), Navigation::Quit);
    }
}
