//! Key bindings for each screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use storefront_core::{
    AuthScreen, Cart, CartChoice, CatalogFocus, CatalogScreen, DetailScreen, GridMove, NavTab,
    Navigation, ProfileScreen, Size,
};

use crate::ui::components::notification::{Notification, NotificationManager};

/// Check for the global quit chord
pub(super) fn is_force_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Esc steps back to whatever is under the auth page, or quits when it is the root
pub(super) fn auth(
    screen: &mut AuthScreen,
    can_go_back: bool,
    key: KeyEvent,
) -> Option<Navigation> {
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            screen.toggle();
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(screen.submit()),
        KeyCode::Esc if can_go_back => Some(Navigation::Back),
        KeyCode::Esc | KeyCode::Char('q') => Some(Navigation::Quit),
        _ => None,
    }
}

pub(super) fn catalog(screen: &mut CatalogScreen, key: KeyEvent) -> Option<Navigation> {
    match key.code {
        KeyCode::Tab => {
            screen.focus_next();
            return None;
        }
        KeyCode::BackTab => {
            screen.focus_previous();
            return None;
        }
        _ => {}
    }

    if screen.focus() == CatalogFocus::Search {
        return catalog_search(screen, key);
    }

    // Shortcuts available whenever the search field is not taking text
    match key.code {
        KeyCode::Char('q') => return Some(Navigation::Quit),
        KeyCode::Char('p') => return screen.activate_tab(NavTab::Profile),
        KeyCode::Char('/') => {
            screen.set_focus(CatalogFocus::Search);
            return None;
        }
        _ => {}
    }

    match screen.focus() {
        CatalogFocus::Categories => {
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => screen.previous_category(),
                KeyCode::Right | KeyCode::Char('l') => screen.next_category(),
                KeyCode::Enter | KeyCode::Down | KeyCode::Char('j') => {
                    screen.set_focus(CatalogFocus::Grid)
                }
                KeyCode::Up | KeyCode::Char('k') => screen.set_focus(CatalogFocus::Search),
                _ => {}
            }
            None
        }
        CatalogFocus::Grid => match key.code {
            KeyCode::Enter => screen.open_selected(),
            KeyCode::Up | KeyCode::Char('k') => {
                if screen.cursor() < storefront_core::GRID_COLUMNS {
                    screen.set_focus(CatalogFocus::Categories);
                } else {
                    screen.move_cursor(GridMove::Up);
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                screen.move_cursor(GridMove::Down);
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                screen.move_cursor(GridMove::Left);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                screen.move_cursor(GridMove::Right);
                None
            }
            _ => None,
        },
        CatalogFocus::NavBar => match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                screen.move_nav(false);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                screen.move_nav(true);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                screen.set_focus(CatalogFocus::Grid);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => screen.activate_nav(),
            _ => None,
        },
        CatalogFocus::Search => None,
    }
}

fn catalog_search(screen: &mut CatalogScreen, key: KeyEvent) -> Option<Navigation> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            screen.push_search_char(c)
        }
        KeyCode::Backspace => screen.pop_search_char(),
        KeyCode::Esc => screen.clear_search(),
        KeyCode::Enter | KeyCode::Down => screen.set_focus(CatalogFocus::Grid),
        _ => {}
    }
    None
}

pub(super) fn detail(
    screen: &mut DetailScreen,
    cart: &mut dyn Cart,
    key: KeyEvent,
) -> Option<Navigation> {
    if screen.confirmation().is_some() {
        return match key.code {
            KeyCode::Char('v') | KeyCode::Char('V') => {
                screen.resolve_confirmation(CartChoice::ViewCart)
            }
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Enter | KeyCode::Esc => {
                screen.resolve_confirmation(CartChoice::ContinueShopping)
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Char('k') => {
            screen.increment_quantity()
        }
        KeyCode::Char('-') | KeyCode::Down | KeyCode::Char('j') => screen.decrement_quantity(),
        KeyCode::Left | KeyCode::Char('h') => screen.previous_size(),
        KeyCode::Right | KeyCode::Char('l') => screen.next_size(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            screen.select_size(Size::ALL[index]);
        }
        KeyCode::Char('f') => screen.toggle_favorite(),
        KeyCode::Enter | KeyCode::Char('a') => {
            screen.add_to_cart(cart);
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => return Some(Navigation::Back),
        _ => {}
    }
    None
}

pub(super) fn profile(
    screen: &mut ProfileScreen,
    notifications: &mut NotificationManager,
    key: KeyEvent,
) -> Option<Navigation> {
    if screen.logout_pending() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => return screen.confirm_logout(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Enter => {
                screen.cancel_logout()
            }
            _ => {}
        }
        return None;
    }

    let acknowledgment = match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            screen.move_up();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            screen.move_down();
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => screen.activate(),
        KeyCode::Char('e') => Some(screen.edit_profile()),
        KeyCode::Char('L') => {
            screen.request_logout();
            None
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => return Some(Navigation::Back),
        _ => None,
    };

    if let Some(ack) = acknowledgment {
        notifications.push(Notification::info(ack.message));
    }
    None
}
