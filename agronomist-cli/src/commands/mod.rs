//! Command implementations for the agronomist CLI

pub mod pages;
pub mod render;
#[cfg(feature = "server")]
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use pages::run_pages;
pub use render::run_render;
#[cfg(feature = "server")]
pub use serve::run_serve;
