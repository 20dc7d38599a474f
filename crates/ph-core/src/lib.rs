//! Core types, traits, and errors for the Phosphor Astro icon generator.
//!
//! This crate provides the foundational types and abstractions shared by
//! every other crate in the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`Weight`, `WeightMap`, `IconEntry`)
//! - Error hierarchy with icon and weight context
//! - Seams for the icon catalog and the output writer
//! - Build configuration and CLI exit codes

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
mod config;
mod error;
mod types;

pub mod traits;

pub use config::{BuildConfig, LOG_LEVELS};
pub use error::{Error, Result};
pub use types::{IconEntry, Weight, WeightMap, WeightMapBuilder};
