//! Input/output operations and user-facing plumbing
//!
//! This module contains I/O-related functionality including:
//! - Command-line interface and run orchestration
//! - Pipeline constants and runtime defaults
//! - Error types shared across the crate
//! - Progress reporting for panel generation and training

/// Command-line interface and pipeline orchestration
pub mod cli;
/// Pipeline constants and runtime configuration defaults
pub mod configuration;
/// Error types and context management for pipeline operations
pub mod error;
/// Progress display for panel batches and the simulated training loop
pub mod progress;
