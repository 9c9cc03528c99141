//! HTML rendering with maud.
//!
//! Renderers are pure: handlers build the view-state and pass it in, so the
//! same state always produces the same markup.

pub mod city;
pub mod error;
pub mod home;
pub mod layout;

pub use layout::page;
