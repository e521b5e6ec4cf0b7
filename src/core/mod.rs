pub mod app;
pub mod config;
pub mod content;
pub mod mode_store;
pub mod timer;
pub mod types;
