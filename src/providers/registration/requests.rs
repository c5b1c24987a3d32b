// File: providers/registration/requests.rs
// The registration resource: one POST, no retries, errors passed through.

#![allow(async_fn_in_trait)]

use super::models::{RegistrationPayload, RegistrationResponse, REGISTRATIONS_PATH};
use crate::core::{ClientConfig, CoreError, HttpClient, RequestOptions};
use log::debug;

/// Anything that can submit a registration. The form is written against
/// this trait so it can run over a stub in tests.
pub trait RegistrationApi {
    async fn create_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationResponse, CoreError>;
}

#[derive(Debug, Clone)]
pub struct RegistrationService {
    http: HttpClient,
}

impl RegistrationService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, CoreError> {
        Ok(Self::new(HttpClient::new(config)?))
    }
}

impl RegistrationApi for RegistrationService {
    /// Every call is a separate POST. Submitting the same payload twice
    /// creates two records server-side.
    async fn create_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationResponse, CoreError> {
        // Course id only; the rest of the payload is personal data.
        debug!("Creating registration for course {}", payload.course_id);

        self.http
            .post(REGISTRATIONS_PATH, payload, RequestOptions::new())
            .await
    }
}
