// File: providers/mod.rs
// Resource-specific modules built on `core`.

pub mod catalog;
pub mod registration;
