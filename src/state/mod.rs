//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: lifecycle of one crawl run (idle, running, completed, exhausted)

mod crawl_state;

pub use crawl_state::CrawlState;
