//! Sticky Core Library
//!
//! Note storage and display synchronization for the sticky notes widget.

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod note;
pub mod presentation;
pub mod store;
