//! Query and mutation semantics on top of the record store

pub mod cafes;
