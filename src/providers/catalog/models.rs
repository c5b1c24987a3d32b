// File: providers/catalog/models.rs
// Read-only course and free-session catalog supplied alongside the page.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

pub const MAX_COURSE_POINTS: usize = 4;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog has no courses")]
    NoCourses,
    #[error("Duplicate id in catalog: {0}")]
    DuplicateId(String),
    #[error("Course {course} lists {count} points, at most 4 are allowed")]
    TooManyPoints { course: String, count: usize },
    #[error("Session {session} references unknown course {course}")]
    UnknownCourse { session: String, course: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    /// Display token, not interpreted here.
    pub color: String,
    pub price: u32,
    #[serde(default)]
    pub points: Vec<String>,
}

/// A free session. Date and time are display strings and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub course_id: String,
    pub date_text: String,
    pub time_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub courses: Vec<Course>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl Catalog {
    /// Parses and validates a catalog document.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.courses.is_empty() {
            return Err(CatalogError::NoCourses);
        }

        let mut course_ids = HashSet::new();
        for course in &self.courses {
            if !course_ids.insert(course.id.as_str()) {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
            if course.points.len() > MAX_COURSE_POINTS {
                return Err(CatalogError::TooManyPoints {
                    course: course.id.clone(),
                    count: course.points.len(),
                });
            }
        }

        let mut session_ids = HashSet::new();
        for session in &self.sessions {
            if !session_ids.insert(session.id.as_str()) {
                return Err(CatalogError::DuplicateId(session.id.clone()));
            }
            if !course_ids.contains(session.course_id.as_str()) {
                return Err(CatalogError::UnknownCourse {
                    session: session.id.clone(),
                    course: session.course_id.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn sessions_for<'a>(&'a self, course_id: &'a str) -> impl Iterator<Item = &'a Session> + 'a {
        self.sessions.iter().filter(move |s| s.course_id == course_id)
    }

    /// Course preselected when the form opens: the session's course when the
    /// form was opened from a known session, otherwise the first course.
    pub fn default_course_id(&self, session: Option<&Session>) -> Option<&str> {
        session
            .and_then(|s| self.course(&s.course_id))
            .or_else(|| self.courses.first())
            .map(|c| c.id.as_str())
    }
}
