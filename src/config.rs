use anyhow::Result;
use chrono::NaiveDate;
use std::env;

use crate::dates;
use crate::services::sprint::SprintAnchor;

#[derive(Debug, Clone)]
pub struct Config {
    pub sprint_reference_date: NaiveDate,
    pub sprint_reference_number: u32,
    pub sprint_reference_quarter: u32,
    pub sprint_reference_year: i32,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Config {
            sprint_reference_date: date_var("SPRINT_REFERENCE_DATE", default_reference_date()),
            sprint_reference_number: env::var("SPRINT_REFERENCE_NUMBER")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            sprint_reference_quarter: env::var("SPRINT_REFERENCE_QUARTER")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            sprint_reference_year: env::var("SPRINT_REFERENCE_YEAR")
                .unwrap_or_else(|_| "2025".to_string())
                .parse()
                .unwrap_or(2025),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        Ok(Config {
            sprint_reference_date: date_var("SPRINT_REFERENCE_DATE", default_reference_date()),
            sprint_reference_number: env::var("SPRINT_REFERENCE_NUMBER")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            sprint_reference_quarter: env::var("SPRINT_REFERENCE_QUARTER")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            sprint_reference_year: env::var("SPRINT_REFERENCE_YEAR")
                .unwrap_or_else(|_| "2025".to_string())
                .parse()
                .unwrap_or(2025),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn sprint_anchor(&self) -> SprintAnchor {
        SprintAnchor {
            reference_date: self.sprint_reference_date,
            number: self.sprint_reference_number,
            quarter: self.sprint_reference_quarter,
            year: self.sprint_reference_year,
        }
    }
}

fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 10).unwrap_or_default()
}

fn date_var(key: &str, default: NaiveDate) -> NaiveDate {
    match env::var(key) {
        Ok(raw) => match dates::parse_local_date(&raw) {
            Ok(date) => date,
            Err(err) => {
                log::warn!("{}: {}, falling back to {}", key, err, default);
                default
            }
        },
        Err(_) => default,
    }
}
