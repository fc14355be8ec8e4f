//! Launch tracker library
//!
//! Exposes the service, its HTTP routes and configuration for the binary and
//! for integration tests.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod service;
pub mod startup;
