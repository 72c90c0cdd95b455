pub mod export;
pub mod history;
pub use history::{SessionHistory, Turn};
