//! The five content panels
//!
//! Each panel is a pure function from its own inputs to a [`DisplayTree`](crate::display::DisplayTree).
//! Panels share no state and never call each other.

pub mod about;
pub mod crop;
pub mod home;
pub mod pest;
pub mod weather;
