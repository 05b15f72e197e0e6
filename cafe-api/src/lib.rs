//! cafe-api — HTTP CRUD service over a table of cafes
//!
//! Layering:
//! - `db`: SQLite record store (schema + row-level query functions)
//! - `services`: query/mutation semantics on top of the store
//! - `api`: axum routes and JSON envelopes
//! - `state`: shared handle (pool + secret key) passed to every handler

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod state;
