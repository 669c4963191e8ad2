use serde::{Deserialize, Serialize};

/// Presentation-level permission flag. Admin enables row actions, User is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Admin,
    #[default]
    User,
}

impl Mode {
    /// Anything other than exactly `"admin"` (including absence) is User.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("admin") => Mode::Admin,
            _ => Mode::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Admin => "admin",
            Mode::User => "user",
        }
    }

    /// The header switch is checked in User mode.
    pub fn from_switch(checked: bool) -> Self {
        if checked {
            Mode::User
        } else {
            Mode::Admin
        }
    }

    pub fn switch_checked(&self) -> bool {
        matches!(self, Mode::User)
    }

    pub fn permits(&self, _action: RowAction) -> bool {
        matches!(self, Mode::Admin)
    }
}

/// Per-row actions offered by the grid's action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 3] = [RowAction::View, RowAction::Edit, RowAction::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_default_to_user() {
        assert_eq!(Mode::from_stored(Some("admin")), Mode::Admin);
        assert_eq!(Mode::from_stored(Some("user")), Mode::User);
        assert_eq!(Mode::from_stored(Some("Admin")), Mode::User);
        assert_eq!(Mode::from_stored(Some("")), Mode::User);
        assert_eq!(Mode::from_stored(None), Mode::User);
    }

    #[test]
    fn switch_is_inverted() {
        assert_eq!(Mode::from_switch(true), Mode::User);
        assert_eq!(Mode::from_switch(false), Mode::Admin);
        assert!(Mode::User.switch_checked());
        assert!(!Mode::Admin.switch_checked());
    }

    #[test]
    fn user_mode_blocks_every_row_action() {
        for action in RowAction::ALL {
            assert!(!Mode::User.permits(action));
            assert!(Mode::Admin.permits(action));
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Admin).unwrap(), "\"admin\"");
        assert_eq!(Mode::Admin.as_str(), "admin");
    }
}
