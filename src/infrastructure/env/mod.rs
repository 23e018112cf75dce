//! Environment sources

mod dotenv;
mod process;

pub use dotenv::DotenvFile;
pub use process::{LayeredEnv, ProcessEnv};
