// ABOUTME: User route handlers for reading and updating the single user profile
// ABOUTME: Validates profile form input and reports failures per field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! User routes
//!
//! The system has exactly one user. `GET /user/single` and
//! `GET /user-data/current` both return it; `PUT /user-data/update`
//! replaces its values after validation.

use crate::database::UserUpdate;
use crate::resources::ServerResources;
use aminotrack_core::constants::profile_limits::{
    AGE_MAX_YEARS, AGE_MIN_YEARS, NAME_MAX_CHARS, NAME_MIN_CHARS, WEIGHT_MAX_KG, WEIGHT_MIN_KG,
};
use aminotrack_core::errors::{AppError, ErrorCode};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Profile form submitted by the frontend
///
/// Every field is optional at the wire level so missing values are reported
/// by [`UserDataRequest::validate`] instead of a generic body rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataRequest {
    /// Ignored; the single user is always the one updated
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Age in years
    #[serde(default)]
    pub age: Option<i64>,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// Athlete flag, false when absent
    #[serde(default)]
    pub is_athlete: Option<bool>,
    /// Vegan flag, false when absent
    #[serde(default)]
    pub is_vegan: Option<bool>,
    /// Longevity-focus flag, false when absent
    #[serde(default)]
    pub is_longevity_focused: Option<bool>,
}

/// Why a single profile field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldFailure {
    Missing,
    OutOfRange,
    Invalid,
}

/// Field messages collected while checking a profile form
#[derive(Default)]
struct FieldErrors(BTreeMap<&'static str, (FieldFailure, &'static str)>);

impl FieldErrors {
    fn reject(&mut self, field: &'static str, failure: FieldFailure, message: &'static str) {
        self.0.insert(field, (failure, message));
    }

    /// One shared code when every field failed the same way, otherwise `InvalidInput`
    fn code(&self) -> ErrorCode {
        let mut failures = self.0.values().map(|(failure, _)| *failure);
        let Some(first) = failures.next() else {
            return ErrorCode::InvalidInput;
        };
        if !failures.all(|failure| failure == first) {
            return ErrorCode::InvalidInput;
        }
        match first {
            FieldFailure::Missing => ErrorCode::MissingRequiredField,
            FieldFailure::OutOfRange => ErrorCode::ValueOutOfRange,
            FieldFailure::Invalid => ErrorCode::InvalidInput,
        }
    }

    fn into_result(self) -> Result<(), AppError> {
        if self.0.is_empty() {
            return Ok(());
        }
        let code = self.code();
        let messages: BTreeMap<&str, &str> = self
            .0
            .into_iter()
            .map(|(field, (_, message))| (field, message))
            .collect();
        debug!(?messages, ?code, "Rejected user profile update");
        let details = serde_json::to_value(&messages)?;
        Err(AppError::new(code, "User profile validation failed").with_details(details))
    }
}

impl UserDataRequest {
    /// Check the form and turn it into an update
    ///
    /// # Errors
    ///
    /// A 400 error with a field to message map in `details` when any field is
    /// missing or outside its bounds. The code is `MissingRequiredField` or
    /// `ValueOutOfRange` when all failures are of that kind, and
    /// `InvalidInput` otherwise.
    pub fn validate(self) -> Result<UserUpdate, AppError> {
        let mut errors = FieldErrors::default();

        let name = self.name.unwrap_or_default();
        let name_chars = name.chars().count();
        if name.trim().is_empty() {
            errors.reject("name", FieldFailure::Missing, "Der Name darf nicht leer sein");
        } else if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_chars) {
            errors.reject(
                "name",
                FieldFailure::Invalid,
                "Der Name muss zwischen 3 und 15 Zeichen lang sein",
            );
        }

        let age = match self.age {
            None => {
                errors.reject("age", FieldFailure::Missing, "Das Alter ist erforderlich");
                None
            }
            Some(age) if age < i64::from(AGE_MIN_YEARS) => {
                errors.reject(
                    "age",
                    FieldFailure::OutOfRange,
                    "Das Alter muss mindestens 18 Jahre betragen",
                );
                None
            }
            Some(age) if age > i64::from(AGE_MAX_YEARS) => {
                errors.reject(
                    "age",
                    FieldFailure::OutOfRange,
                    "Das Alter darf maximal 120 Jahre sein",
                );
                None
            }
            Some(age) => u32::try_from(age).ok(),
        };

        let weight_kg = match self.weight {
            None => {
                errors.reject("weight", FieldFailure::Missing, "Das Gewicht ist erforderlich");
                0.0
            }
            Some(weight) if weight.is_nan() || weight < WEIGHT_MIN_KG => {
                errors.reject(
                    "weight",
                    FieldFailure::OutOfRange,
                    "Das Gewicht muss mindestens 36 kg betragen",
                );
                0.0
            }
            Some(weight) if weight > WEIGHT_MAX_KG => {
                errors.reject(
                    "weight",
                    FieldFailure::OutOfRange,
                    "Das Gewicht darf maximal 150 kg betragen",
                );
                0.0
            }
            Some(weight) => weight,
        };

        errors.into_result()?;

        Ok(UserUpdate {
            name,
            age,
            weight_kg,
            is_athlete: self.is_athlete.unwrap_or(false),
            is_vegan: self.is_vegan.unwrap_or(false),
            is_longevity_focused: self.is_longevity_focused.unwrap_or(false),
        })
    }
}

/// User routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/user/single", get(Self::handle_get_user))
            .route("/user-data/current", get(Self::handle_get_user))
            .route("/user-data/update", put(Self::handle_update_user))
            .with_state(resources)
    }

    /// Handle fetching the single user
    async fn handle_get_user(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let user = resources
            .database
            .get_user()
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Handle a profile form submission
    async fn handle_update_user(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<UserDataRequest>,
    ) -> Result<Response, AppError> {
        let update = request.validate()?;
        let user = resources.database.update_user(&update).await?;

        Ok((StatusCode::OK, Json(user)).into_response())
    }
}
