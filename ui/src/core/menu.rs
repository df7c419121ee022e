//! Mobile menu visibility owned by the navbar.

/// Two states, flipped only by the navbar's toggle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuVisibility {
    #[default]
    Closed,
    Open,
}

impl MenuVisibility {
    pub fn toggled(self) -> Self {
        match self {
            MenuVisibility::Closed => MenuVisibility::Open,
            MenuVisibility::Open => MenuVisibility::Closed,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_open(self) -> bool {
        self == MenuVisibility::Open
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MenuVisibility::Closed => "closed",
            MenuVisibility::Open => "open",
        }
    }

    /// The overlay needs both an open menu and something to list.
    pub fn shows_overlay(self, item_count: usize) -> bool {
        self.is_open() && item_count > 0
    }
}
