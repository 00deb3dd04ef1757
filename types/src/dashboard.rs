//! Local UI state of the admin dashboard.
//!
//! Nothing here is persisted. A fresh dashboard starts on the overview tab with
//! the admin panel locked.

/// Placeholder passcode for the admin panel.
///
/// This is not a security boundary: it is compiled into the client and compared
/// in plain text. Real access control belongs in front of the server functions.
pub const ADMIN_PASSCODE: &str = "1234";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Orders,
    Reviews,
    Admin,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Orders, Tab::Reviews, Tab::Admin];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Orders => "Orders",
            Tab::Reviews => "Reviews",
            Tab::Admin => "Admin 🔒",
        }
    }
}

/// Selects which panel is shown. Selecting the current tab changes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabSelector {
    active: Tab,
}

impl TabSelector {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }
}

/// Passcode gate in front of the admin panel.
///
/// Once unlocked it stays unlocked for the life of the dashboard, including
/// across tab switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminGate {
    authenticated: bool,
    password_error: bool,
}

impl AdminGate {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn has_error(&self) -> bool {
        self.password_error
    }

    /// Check a submitted passcode against `expected`.
    ///
    /// A match unlocks the gate and clears any previous error. Anything else
    /// raises the error flag and leaves the gate as it was.
    pub fn submit(&mut self, candidate: &str, expected: &str) {
        if candidate == expected {
            self.authenticated = true;
            self.password_error = false;
        } else {
            self.password_error = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_overview() {
        let tabs = TabSelector::default();
        assert_eq!(tabs.active(), Tab::Overview);
    }

    #[test]
    fn exactly_one_tab_is_active() {
        let mut tabs = TabSelector::default();
        for tab in Tab::ALL {
            tabs.select(tab);
            let active: Vec<_> = Tab::ALL.into_iter().filter(|t| tabs.is_active(*t)).collect();
            assert_eq!(active, [tab]);
        }
    }

    #[test]
    fn selecting_same_tab_twice_is_idempotent() {
        let mut tabs = TabSelector::default();
        tabs.select(Tab::Orders);
        let once = tabs;
        tabs.select(Tab::Orders);
        assert_eq!(tabs, once);
    }

    #[test]
    fn correct_passcode_unlocks_and_clears_error() {
        let mut gate = AdminGate::default();
        gate.submit("0000", ADMIN_PASSCODE);
        assert!(gate.has_error());

        gate.submit("1234", ADMIN_PASSCODE);
        assert!(gate.is_authenticated());
        assert!(!gate.has_error());
    }

    #[test]
    fn wrong_passcode_stays_locked() {
        let mut gate = AdminGate::default();
        for attempt in ["", "12345", "abcd", " 1234"] {
            gate.submit(attempt, ADMIN_PASSCODE);
            assert!(!gate.is_authenticated());
            assert!(gate.has_error());
        }
    }

    #[test]
    fn unlock_survives_tab_switches() {
        let mut tabs = TabSelector::default();
        let mut gate = AdminGate::default();

        tabs.select(Tab::Admin);
        gate.submit(ADMIN_PASSCODE, ADMIN_PASSCODE);
        tabs.select(Tab::Orders);
        tabs.select(Tab::Admin);

        assert!(tabs.is_active(Tab::Admin));
        assert!(gate.is_authenticated());
    }
}
