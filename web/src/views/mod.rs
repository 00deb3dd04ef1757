mod home;
pub use home::Home;

mod dashboard;
pub use dashboard::AdminDashboard;
