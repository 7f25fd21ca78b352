mod app;
mod console;
mod input;
pub mod plain;
mod report;
pub mod view;

pub use app::{run, App};
