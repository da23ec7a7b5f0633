//! Core library components.
//!
//! This module contains the reusable logic: store handles, the inventory
//! fetcher, the comparison engine, and value formatting.

pub mod config;
pub mod constants;
pub mod diff;
pub mod domain;
pub mod fetch;
pub mod format;
pub mod store;
