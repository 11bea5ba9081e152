//! Core types for the JWT Pizza fixture.
//!
//! This module provides type-safe wrappers and wire-shape structs shared by
//! the fixture server and its tests.

pub mod franchise;
pub mod id;
pub mod menu;
pub mod order;
pub mod role;
pub mod user;

pub use franchise::{AdminSummary, Franchise, FranchiseList, Store};
pub use id::*;
pub use menu::MenuItem;
pub use order::{Order, OrderHistory, OrderItem};
pub use role::Role;
pub use user::{Credentialed, User};
