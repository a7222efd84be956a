pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod search;
pub mod selection;
pub mod session;
pub mod ui;

pub use app::{AppAction, QuizApp};
