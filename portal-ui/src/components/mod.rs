//! UI Components
//!
//! Reusable Leptos components shared by the dashboards.

pub mod loading;
pub mod toast;
pub mod topbar;

pub use loading::Loading;
pub use toast::Toast;
pub use topbar::Topbar;
