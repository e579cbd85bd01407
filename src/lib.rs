// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod params;
pub mod progress;
pub mod report;
pub mod runner;
