//! Pizza Fixture Core - Shared types library.
//!
//! This crate provides common types used across the fixture service
//! components:
//! - `server` - The mock JWT Pizza API served to the UI under test
//! - `integration-tests` - End-to-end tests driving the mock over HTTP
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no routing. Every
//! struct here mirrors a JSON shape the JWT Pizza UI sends or expects, so
//! serialization attributes are part of the contract, not decoration.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, the role model, and the wire-shape structs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
