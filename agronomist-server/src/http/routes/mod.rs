//! Route handlers organized by surface

pub mod api;
pub mod health;
pub mod pages;
