// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod extract;

pub mod csv;
pub mod file;
pub mod log;
pub mod progress;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
