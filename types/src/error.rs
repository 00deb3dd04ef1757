use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// What went wrong, in terms the restaurant's staff can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Orders arrived while the store was closed.
    StoreClosed,
    UnknownMenuItem,
    DuplicateMenuItem,
    /// A price, rating or order failed validation.
    InvalidInput,
    /// Storage or configuration failures. The message carries the full chain.
    Internal,
}

/// A serializable error for client rendering.
///
/// Domain errors carry a message meant for the person at the dashboard.
/// Internal errors carry anyhow's Debug output, including the cause chain and,
/// with `RUST_BACKTRACE=1`, the backtrace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn store_closed() -> Self {
        Self {
            kind: ErrorKind::StoreClosed,
            message: "The store is closed. Open it from the admin panel to accept orders.".into(),
        }
    }

    pub fn unknown_menu_item(id: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownMenuItem,
            message: format!("Menu item '{id}' no longer exists. Reload to see the current menu."),
        }
    }

    pub fn duplicate_menu_item(id: &str) -> Self {
        Self {
            kind: ErrorKind::DuplicateMenuItem,
            message: format!("A menu item with id '{id}' already exists."),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidInput,
            message: message.into(),
        }
    }

    pub fn is_internal(&self) -> bool {
        self.kind == ErrorKind::Internal
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(report: anyhow::Error) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: format!("{:?}", report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn err_macro_converts_into_internal_error() {
        let error: Error = crate::err!("storage has not been initialised").into();
        assert!(error.is_internal());
        assert!(error.message.starts_with("storage has not been initialised"));
    }

    #[test]
    fn store_closed_reads_as_an_instruction() {
        let error = Error::store_closed();
        assert_eq!(error.kind, ErrorKind::StoreClosed);
        assert!(!error.is_internal());
        assert!(error.to_string().contains("admin panel"));
    }

    #[test]
    fn unknown_item_names_the_id() {
        let error = Error::unknown_menu_item("kabsa");
        assert_eq!(error.kind, ErrorKind::UnknownMenuItem);
        assert!(error.to_string().contains("'kabsa'"));
    }
}
