//! Runtime environment detection
//!
//! This module provides:
//! - Package manager detection from the `npm_config_user_agent` variable

pub mod package_manager;

pub use package_manager::{PackageManager, USER_AGENT_ENV};
