//! Kiosk configuration from the environment.
//!
//! `.env` is loaded first when present. Variables:
//! - `JIGGLY_SUPABASE_URL` / `JIGGLY_SUPABASE_ANON_KEY`: remote order store (both or neither)
//! - `JIGGLY_UTC_OFFSET_HOURS`: offset used for order times, default 7 (WIB)

use std::env;

use chrono::FixedOffset;

use crate::error::{KioskError, Result};

pub const ENV_SUPABASE_URL: &str = "JIGGLY_SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "JIGGLY_SUPABASE_ANON_KEY";
pub const ENV_UTC_OFFSET_HOURS: &str = "JIGGLY_UTC_OFFSET_HOURS";

pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

/// Where orders live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Supabase { url: String, anon_key: String },
    /// Local JSON file; the path comes from the command line.
    LocalFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    pub store: StoreConfig,
    /// Offset used to label order times.
    pub offset: FixedOffset,
}

impl KioskConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let store = match (get(ENV_SUPABASE_URL), get(ENV_SUPABASE_ANON_KEY)) {
            (Some(url), Some(anon_key)) => StoreConfig::Supabase { url, anon_key },
            (None, None) => StoreConfig::LocalFile,
            (Some(_), None) => {
                return Err(KioskError::Config(format!(
                    "{} is set but {} is missing",
                    ENV_SUPABASE_URL, ENV_SUPABASE_ANON_KEY
                )));
            }
            (None, Some(_)) => {
                return Err(KioskError::Config(format!(
                    "{} is set but {} is missing",
                    ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL
                )));
            }
        };

        let hours = match get(ENV_UTC_OFFSET_HOURS) {
            Some(raw) => raw.parse::<i32>().map_err(|_| {
                KioskError::Config(format!(
                    "{} must be a whole hour offset, got '{}'",
                    ENV_UTC_OFFSET_HOURS, raw
                ))
            })?,
            None => DEFAULT_UTC_OFFSET_HOURS,
        };

        let offset = hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                KioskError::Config(format!("{} out of range: {}", ENV_UTC_OFFSET_HOURS, hours))
            })?;

        Ok(Self { store, offset })
    }
}
