//! Pure, platform-agnostic navigation logic shared by the components.

pub mod classes;
pub mod location;
pub mod menu;
