pub mod dashboard;
mod error;
pub mod format;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod review;
mod snapshot;
pub mod stats;

pub use error::{Error, ErrorKind, Result};
pub use menu::MenuItem;
pub use order::{CustomerInfo, OrderLine, OrderPayload, OrderType};
pub use restaurant::RestaurantConfig;
pub use review::Review;
pub use snapshot::DashboardSnapshot;
pub use stats::ItemWithStats;

#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;

/// Build a [`Error`]-compatible `anyhow::Error` from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::internal_anyhow_dont_use!($($arg)*)
    };
}
