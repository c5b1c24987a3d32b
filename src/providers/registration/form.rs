// File: providers/registration/form.rs
// Registration modal state machine: Closed -> Idle -> Submitting -> Idle,
// closing only after a successful submission.

use super::models::{RegistrationInput, RegistrationResponse};
use super::requests::RegistrationApi;
use crate::core::CoreError;
use crate::providers::catalog::models::{Catalog, CatalogError, Session};
use chrono::Utc;
use log::{debug, error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub const SUCCESS_NOTICE: &str = "Registration successful! We will contact you soon.";
pub const FAILURE_NOTICE: &str = "Registration failed. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Idle,
    Submitting,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Form closed, or another submission is still in flight. No request was made.
    Ignored,
    Registered(RegistrationResponse),
    Failed(CoreError),
}

impl SubmitOutcome {
    /// Text shown to the user, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Ignored => None,
            SubmitOutcome::Registered(_) => Some(SUCCESS_NOTICE),
            SubmitOutcome::Failed(_) => Some(FAILURE_NOTICE),
        }
    }
}

/// Clears the in-flight flag however `submit` exits.
struct SubmitGuard<'a>(&'a AtomicBool);

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct RegistrationForm<A> {
    api: A,
    open: AtomicBool,
    submitting: AtomicBool,
    input: Mutex<RegistrationInput>,
}

impl<A: RegistrationApi> RegistrationForm<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            open: AtomicBool::new(false),
            submitting: AtomicBool::new(false),
            input: Mutex::new(RegistrationInput::default()),
        }
    }

    fn lock_input(&self) -> MutexGuard<'_, RegistrationInput> {
        // The input is plain data, a poisoned lock still holds usable values.
        self.input.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Shows the form with blank fields and the contextual default course.
    pub fn open(&self, catalog: &Catalog, session: Option<&Session>) -> Result<(), CatalogError> {
        let course_id = catalog
            .default_course_id(session)
            .ok_or(CatalogError::NoCourses)?;

        debug!("Opening registration form for course {}", course_id);
        *self.lock_input() = RegistrationInput::for_course(course_id);
        self.open.store(true, Ordering::Release);
        Ok(())
    }

    /// Hides the form. A pending submission keeps running.
    pub fn close(&self) {
        self.open.store(false, Ordering::Release);
    }

    pub fn state(&self) -> FormState {
        if !self.open.load(Ordering::Acquire) {
            FormState::Closed
        } else if self.submitting.load(Ordering::Acquire) {
            FormState::Submitting
        } else {
            FormState::Idle
        }
    }

    pub fn input(&self) -> RegistrationInput {
        self.lock_input().clone()
    }

    pub fn edit<F: FnOnce(&mut RegistrationInput)>(&self, f: F) {
        f(&mut self.lock_input());
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if !self.open.load(Ordering::Acquire) {
            debug!("Submit ignored, form is closed");
            return SubmitOutcome::Ignored;
        }
        let Some(_guard) = SubmitGuard::acquire(&self.submitting) else {
            debug!("Submit ignored, a submission is already in flight");
            return SubmitOutcome::Ignored;
        };

        let payload = self.input().to_payload(Utc::now());

        match self.api.create_registration(&payload).await {
            Ok(response) => {
                info!("Registration {} created for course {}", response.id, response.payload.course_id);
                self.close();
                SubmitOutcome::Registered(response)
            }
            Err(e) => {
                match e.as_api() {
                    Some(api) => error!(
                        "Registration failed: {} (status {:?}, details {:?})",
                        api.message, api.status, api.details
                    ),
                    None => error!("Registration failed: {}", e),
                }
                SubmitOutcome::Failed(e)
            }
        }
    }
}
