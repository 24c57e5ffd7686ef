//! Profile screen controller
//!
//! Identity fields and the menu are static. The three settings switches reset
//! to their defaults every launch; nothing here is persisted.

use crate::nav::{Navigation, Route};

/// Signed-in user shown at the top of the profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub avatar_key: &'static str,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Doe",
            email: "john.doe@example.com",
            phone: "+1 (555) 123-4567",
            avatar_key: "person-circle",
        }
    }
}

/// Informational acknowledgment surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: &'static str,
    pub message: &'static str,
}

impl Acknowledgment {
    pub const fn info(message: &'static str) -> Self {
        Self {
            title: "Info",
            message,
        }
    }
}

/// Profile menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon_key: &'static str,
    /// Placeholder action: acknowledge and stay
    pub action: Acknowledgment,
}

/// Profile menu, in display order
pub const MENU: [MenuItem; 7] = [
    MenuItem {
        label: "Personal Information",
        icon_key: "person",
        action: Acknowledgment::info("Edit personal information"),
    },
    MenuItem {
        label: "Order History",
        icon_key: "receipt",
        action: Acknowledgment::info("View order history"),
    },
    MenuItem {
        label: "Wishlist",
        icon_key: "heart",
        action: Acknowledgment::info("View wishlist"),
    },
    MenuItem {
        label: "Addresses",
        icon_key: "location",
        action: Acknowledgment::info("Manage addresses"),
    },
    MenuItem {
        label: "Payment Methods",
        icon_key: "card",
        action: Acknowledgment::info("Manage payment methods"),
    },
    MenuItem {
        label: "Help & Support",
        icon_key: "help-circle",
        action: Acknowledgment::info("Contact support"),
    },
    MenuItem {
        label: "About Us",
        icon_key: "information-circle",
        action: Acknowledgment::info("About E-Commerce App"),
    },
];

/// Header "edit" action
pub const EDIT_PROFILE: Acknowledgment = Acknowledgment::info("Edit profile");

/// Settings switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Notifications,
    DarkMode,
    Location,
}

impl Setting {
    pub const ALL: [Setting; 3] = [Setting::Notifications, Setting::DarkMode, Setting::Location];

    pub fn label(&self) -> &'static str {
        match self {
            Setting::Notifications => "Push Notifications",
            Setting::DarkMode => "Dark Mode",
            Setting::Location => "Location Services",
        }
    }
}

/// Local settings switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSettings {
    pub notifications: bool,
    pub dark_mode: bool,
    pub location: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
            location: true,
        }
    }
}

impl ProfileSettings {
    pub fn get(&self, setting: Setting) -> bool {
        match setting {
            Setting::Notifications => self.notifications,
            Setting::DarkMode => self.dark_mode,
            Setting::Location => self.location,
        }
    }

    /// Flip one switch and return its new value
    pub fn toggle(&mut self, setting: Setting) -> bool {
        let slot = match setting {
            Setting::Notifications => &mut self.notifications,
            Setting::DarkMode => &mut self.dark_mode,
            Setting::Location => &mut self.location,
        };
        *slot = !*slot;
        *slot
    }
}

/// A selectable row on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRow {
    Menu(usize),
    Setting(Setting),
    Logout,
}

impl ProfileRow {
    /// All rows top to bottom
    pub fn all() -> Vec<ProfileRow> {
        (0..MENU.len())
            .map(ProfileRow::Menu)
            .chain(Setting::ALL.iter().copied().map(ProfileRow::Setting))
            .chain(std::iter::once(ProfileRow::Logout))
            .collect()
    }
}

/// Profile screen controller
#[derive(Debug, Clone)]
pub struct ProfileScreen {
    user: UserProfile,
    settings: ProfileSettings,
    rows: Vec<ProfileRow>,
    cursor: usize,
    logout_pending: bool,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            user: UserProfile::default(),
            settings: ProfileSettings::default(),
            rows: ProfileRow::all(),
            cursor: 0,
            logout_pending: false,
        }
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn settings(&self) -> &ProfileSettings {
        &self.settings
    }

    pub fn rows(&self) -> &[ProfileRow] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_row(&self) -> ProfileRow {
        self.rows[self.cursor]
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    pub fn toggle(&mut self, setting: Setting) -> bool {
        let value = self.settings.toggle(setting);
        tracing::debug!(setting = setting.label(), value, "setting toggled");
        value
    }

    /// Activate a menu entry
    pub fn open_menu(&self, index: usize) -> Option<Acknowledgment> {
        MENU.get(index).map(|item| item.action)
    }

    pub fn edit_profile(&self) -> Acknowledgment {
        EDIT_PROFILE
    }

    /// Activate the row under the cursor
    ///
    /// Menu rows produce an acknowledgment, setting rows flip their switch,
    /// and the logout row opens the logout confirmation.
    pub fn activate(&mut self) -> Option<Acknowledgment> {
        match self.selected_row() {
            ProfileRow::Menu(index) => self.open_menu(index),
            ProfileRow::Setting(setting) => {
                self.toggle(setting);
                None
            }
            ProfileRow::Logout => {
                self.request_logout();
                None
            }
        }
    }

    pub fn request_logout(&mut self) {
        self.logout_pending = true;
    }

    pub fn logout_pending(&self) -> bool {
        self.logout_pending
    }

    pub fn cancel_logout(&mut self) {
        self.logout_pending = false;
    }

    /// Confirm a pending logout, handing control back to the entry screen
    pub fn confirm_logout(&mut self) -> Option<Navigation> {
        if !self.logout_pending {
            return None;
        }
        self.logout_pending = false;
        tracing::info!(user = self.user.name, "logging out");
        Some(Navigation::Replace(Route::Auth))
    }
}
