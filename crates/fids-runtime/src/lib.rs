pub mod client;
pub mod config;
pub mod error;
pub mod poller;
pub mod runtime;

pub use client::{FeedClient, HttpFeedClient};
pub use config::{BoardConfig, DisplayConfig, PollSettings, PollingConfig, TimingConfig};
pub use error::{Error, Result};
pub use poller::{Feed, FetchOutcome, FetchScheduler, PollEvent};
pub use runtime::{BoardRuntime, RuntimeEvent, fetch, spawn_fetches};
