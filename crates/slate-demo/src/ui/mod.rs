//! User interface modules for slate-demo

pub mod app;
pub mod message;

pub use app::DemoApp;
