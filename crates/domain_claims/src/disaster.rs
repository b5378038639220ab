//! Declared disasters

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use core_kernel::{DisasterId, MonthOfYear};
use crate::error::ClaimError;

/// A declared disaster with a circular impact area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disaster {
    pub id: DisasterId,
    #[serde(rename = "type")]
    pub disaster_type: String,
    pub state: String,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub declared_date: NaiveDate,
    pub lat: f64,
    pub long: f64,
    pub radius_miles: f64,
}

impl Disaster {
    /// Declared strictly after the disaster ended
    pub fn declared_after_end(&self) -> bool {
        self.declared_date > self.end_date
    }

    /// Area of the impact circle in square miles
    pub fn impact_area_sq_miles(&self) -> f64 {
        PI * self.radius_miles * self.radius_miles
    }

    pub fn declared_month(&self) -> MonthOfYear {
        MonthOfYear::of(self.declared_date)
    }

    pub fn validate(&self) -> Result<(), ClaimError> {
        let invalid = |reason: String| ClaimError::InvalidDisaster {
            id: self.id.get(),
            reason,
        };

        if !self.radius_miles.is_finite() || self.radius_miles <= 0.0 {
            return Err(invalid(format!("radius must be positive, got {}", self.radius_miles)));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(invalid(format!("latitude {} out of range", self.lat)));
        }
        if !(-180.0..=180.0).contains(&self.long) {
            return Err(invalid(format!("longitude {} out of range", self.long)));
        }
        Ok(())
    }
}
