//! Content loading and configuration for the portfolio stats engine.
//!
//! This module loads portfolio content and statistics settings from YAML
//! files, and reads server settings from the environment.
//!
//! # Example
//!
//! ```no_run
//! use portfolio_stats::config::ContentLoader;
//!
//! let loader = ContentLoader::load("./content").unwrap();
//! println!("Companies: {}", loader.content().companies().len());
//! ```

mod loader;
mod server;
mod types;

pub use loader::ContentLoader;
pub use server::{DEFAULT_CONTENT_DIR, DEFAULT_LOG_FILTER, DEFAULT_PORT, ServerConfig};
pub use types::{PortfolioContent, StatsConfig};
