// Library entry so integration tests and external tools can reference
// internal modules. The binary (`main.rs`) builds on top of these.
pub mod commands;
pub mod config;
pub mod constants;
pub mod docs;
pub mod handler;
pub mod health;
pub mod model;

pub use model::AppState;
