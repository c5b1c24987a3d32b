// File: providers/registration/mod.rs
// Registration models, the service submitting them, and the form driving it.

pub mod form;
pub mod models;
pub mod requests;
