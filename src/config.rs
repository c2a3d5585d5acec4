use crate::error::{config_error, env_error, CanvasResult};
use chrono::NaiveDate;
use dotenvy::dotenv;
use std::env;

/// API version segment used when `API_VERSION` is not set
pub const DEFAULT_API_VERSION: &str = "v1";

/// Immutable per-process configuration for the Canvas client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Canvas institution, e.g. `https://canvas.example.edu`
    pub institution_url: String,
    /// Canvas REST API version segment (e.g. `v1`)
    pub api_version: String,
    /// Canvas API token sent as the bearer credential on every request
    pub api_token: String,
    /// ID of the Canvas course being managed
    pub course_id: String,
    /// Start of the date window for event management
    pub start_date: NaiveDate,
    /// End of the date window for event management
    pub end_date: NaiveDate,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> CanvasResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let institution_url =
            env::var("INSTITUTION_URL").map_err(|_| env_error("INSTITUTION_URL"))?;
        let api_token = env::var("API_TOKEN")
            .or_else(|_| env::var("CANVAS_API_TOKEN"))
            .map_err(|_| env_error("API_TOKEN"))?;
        let course_id = env::var("COURSE_ID").map_err(|_| env_error("COURSE_ID"))?;

        // Optional version override
        let api_version =
            env::var("API_VERSION").unwrap_or_else(|_| String::from(DEFAULT_API_VERSION));

        let start_date = date_var("START_DATE")?;
        let end_date = date_var("END_DATE")?;
        if end_date < start_date {
            return Err(config_error("END_DATE must not be before START_DATE"));
        }

        Ok(Config {
            institution_url: institution_url.trim_end_matches('/').to_string(),
            api_version,
            api_token,
            course_id,
            start_date,
            end_date,
        })
    }

    /// Canvas context code tying requests to the configured course
    pub fn context_code(&self) -> String {
        format!("course_{}", self.course_id)
    }
}

/// Read and parse a `YYYY-MM-DD` date variable
fn date_var(var: &str) -> CanvasResult<NaiveDate> {
    let raw = env::var(var).map_err(|_| env_error(var))?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
        config_error(&format!(
            "Invalid {} format, expected YYYY-MM-DD: {}",
            var, raw
        ))
    })
}
