pub mod classifier;
pub mod config;
pub mod error;
pub mod io;
pub mod notify;
pub mod policy;
pub mod progress;
pub mod score;
pub mod snapshot;
pub mod storage;
pub mod summary;
pub mod types;

pub use error::{PostureError, Result};
