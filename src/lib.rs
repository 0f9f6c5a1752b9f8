pub mod api;
pub mod core;
pub mod scanner;
pub mod server;
pub mod strategy;
