//! Recommendation types
//!
//! Defines the form input sent to the recommendation service and the
//! candidate items it returns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Qualifications offered by the form.
pub const QUALIFICATIONS: [&str; 6] = ["12th", "ITI", "Diploma", "BA", "B.Tech", "MBA"];

/// Branches offered by the form.
pub const BRANCHES: [&str; 6] = [
    "Mechanical",
    "Electrical",
    "Civil",
    "Computer Science",
    "Commerce",
    "Arts",
];

/// Form values that cannot be submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Pincode must be a whole number")]
    Pincode,
    #[error("Qualification must be one of the offered options")]
    Qualification,
    #[error("Branch must be one of the offered options")]
    Branch,
}

/// One submission's worth of form values.
///
/// Serializes 1:1 into the request body; `interest` travels as
/// `interest_emoji` on the wire. The branch string passes through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormInput {
    pub qualification: String,
    pub branch: String,
    pub pincode: u32,
    #[serde(rename = "interest_emoji")]
    pub interest: String,
}

impl FormInput {
    /// Validate raw form values into a submittable input.
    pub fn new(
        qualification: &str,
        branch: &str,
        pincode: &str,
        interest: &str,
    ) -> Result<Self, InvalidInput> {
        if !QUALIFICATIONS.contains(&qualification) {
            return Err(InvalidInput::Qualification);
        }
        if !BRANCHES.contains(&branch) {
            return Err(InvalidInput::Branch);
        }
        let pincode = pincode
            .trim()
            .parse::<u32>()
            .map_err(|_| InvalidInput::Pincode)?;
        Ok(Self {
            qualification: qualification.to_string(),
            branch: branch.to_string(),
            pincode,
            interest: interest.to_string(),
        })
    }
}

/// A candidate returned by the recommendation service.
///
/// The service orders items by score; that order is authoritative and is
/// preserved through rendering. `distance_km` is absent when the service
/// could not locate one of the pincodes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationItem {
    pub title: String,
    pub required_qualification: String,
    pub required_branch: String,
    pub pincode: u32,
    pub stipend: f64,
    #[serde(default)]
    pub distance_km: Option<f64>,
    pub score: f64,
}
