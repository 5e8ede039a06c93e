//! Beat District CLI Library
//!
//! Command-line client for the Beat District music platform: configuration,
//! login persistence and the application store that composes session,
//! catalog and playback state.
//!
//! This library exposes the core components for testing purposes.

pub mod config;
pub mod error;
pub mod output;
pub mod session_file;
pub mod store;

// Re-export commonly used types for convenience
pub use self::config::BeatConfig;
pub use error::{ClientError, Result};
pub use output::TracingOutput;
pub use session_file::StoredSession;
pub use store::{AppStore, Notice, NoticeLevel};
