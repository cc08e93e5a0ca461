pub mod app;
pub mod backend;
pub mod config;
pub mod install;
pub mod layout;
pub mod shared;
pub mod tui;
