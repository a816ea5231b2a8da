//! nameguard End-to-End Test Infrastructure
//!
//! - `fixtures`: a sample engine-like class hierarchy and naming config
//! - `harness`: a temporary project directory with config and manifest
//!   files, driven through the CLI library
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p nameguard-tests
//! ```

pub mod fixtures;
pub mod harness;

pub use fixtures::{sample_config, sample_validator};
pub use harness::TestProject;
