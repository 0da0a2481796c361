//! TUI (Text User Interface) module for Synapsis
//!
//! The landing page rendered with ratatui/crossterm: navbar, hero section
//! with the animated editor, page sections and footer.

pub mod app;
pub mod landing;
pub mod sections;
pub mod theme;
pub mod ui;

pub use app::App;
pub use landing::{KeyResult, LandingApp};
pub use sections::Section;
pub use theme::Theme;
