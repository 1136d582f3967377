//! CLI infrastructure for the qttt binary
//!
//! This module provides the command-line surface: argument parsing for the
//! train-then-play entry point and console output helpers.

pub mod output;
pub mod run;
