//! Core domain + application logic for the homework status watcher bot.
//!
//! This crate is intentionally framework-agnostic. The Practicum HTTP API
//! and Telegram live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod homework;
pub mod logging;
pub mod ports;
pub mod watcher;

pub use errors::{Error, Result};
