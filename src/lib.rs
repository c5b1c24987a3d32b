//! HTTP client core and registration flow for the academy sign-up page.
//!
//! `core` holds the generic request wrapper (base URL, JSON defaults,
//! timeout, normalized errors). `providers` builds the registration
//! service, the form state machine and the course catalog on top of it.

pub mod core;
pub mod providers;

pub use crate::core::{ApiError, ClientConfig, CoreError, HttpClient, RequestOptions};
pub use crate::providers::catalog::models::{Catalog, CatalogError, Course, Session};
pub use crate::providers::registration::form::{FormState, RegistrationForm, SubmitOutcome};
pub use crate::providers::registration::models::{
    RegistrationInput, RegistrationPayload, RegistrationResponse,
};
pub use crate::providers::registration::requests::{RegistrationApi, RegistrationService};

/// Installs `env_logger`. Safe to call more than once.
pub fn init_logger() {
    let _ = env_logger::try_init();
}
