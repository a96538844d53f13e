//! CLI commands for sticky

pub mod add;
pub mod config;
pub mod delete;
pub mod dispatch;
pub mod list;
pub mod widget;
