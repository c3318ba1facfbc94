//! Configuration module for sdsm
//!
//! This module provides configuration management including:
//! - Tool and game-data path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{GamePaths, SdsmPaths};
pub use settings::{DefaultRestore, Settings};
