// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step-wise construction of immutable account-holder profiles
//!
//! Required fields are constructor parameters, so a profile can never be
//! half-built. Optional contact details accumulate through chained
//! setters; `build` snapshots the current state, so one builder can
//! produce several independent profiles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from profile construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("profile name must not be blank")]
    BlankName,
}

/// An immutable account-holder profile.
///
/// Created only through [`ProfileBuilder`]; there are no update
/// operations after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dash = |field: &Option<String>| match field {
            Some(value) => value.clone(),
            None => "-".to_string(),
        };
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.name,
            self.age,
            dash(&self.email),
            dash(&self.phone),
            dash(&self.address)
        )
    }
}

/// Builder for [`Profile`].
///
/// Not thread-safe by design: it is a transient accumulator owned by the
/// calling code. Setting the same field twice overwrites silently.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    name: String,
    age: u32,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
}

impl ProfileBuilder {
    /// Start a builder from the two required fields
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            email: None,
            phone: None,
            address: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Produce a profile from the current builder state.
    ///
    /// May be called more than once; each call yields an independent
    /// snapshot. Unset optional fields stay `None`. The only validation
    /// is the non-empty name invariant; optional values are stored
    /// verbatim with no format checking.
    pub fn build(&self) -> Result<Profile, ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::BlankName);
        }
        Ok(Profile {
            name: self.name.clone(),
            age: self.age,
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        })
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
