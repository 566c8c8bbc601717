//! Stoicwise library
//!
//! This module exposes the data-plane modules for use in integration tests.

pub mod api;
pub mod cache;
pub mod cli;
pub mod data;
pub mod filter;
pub mod surprise;
