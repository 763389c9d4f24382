//! Backend API
//!
//! HTTP functions for the portal REST endpoints.

pub mod client;

pub use client::*;
