// File: providers/catalog/mod.rs

pub mod models;
