pub mod badge;
pub mod billing;
pub mod frameworks;
pub mod health;
pub mod storage;
pub mod summaries;
