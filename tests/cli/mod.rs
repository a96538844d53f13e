mod add;
mod config;
mod delete;
mod help;
mod list;
mod support;
mod widget;
