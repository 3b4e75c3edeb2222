// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

pub mod progress;
pub mod runner;

pub use progress::{DownloadProgress, RunStats};
pub use runner::{DEMO_SENTENCES, ParseRunner, provision_assets};
