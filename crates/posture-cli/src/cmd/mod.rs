pub mod badge;
pub mod controls;
pub mod key;
pub mod serve;
pub mod summarize;
