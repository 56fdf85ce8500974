//! Run settings, layered with the `config` crate:
//! built-in defaults, then an optional config file, then `PANTRY_*` environment variables.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use config::{Config, ConfigError, Environment, File};

use pantry_engine::EngineConfig;

/// Looked up in the working directory when `PANTRY_CONFIG` is unset
/// (`pantry.json`, `pantry.toml`, ...).
const DEFAULT_CONFIG_FILE: &str = "pantry";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub engine: EngineConfig,
    pub reference_date: NaiveDate,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::load(
            std::env::var("PANTRY_CONFIG").ok().as_deref(),
            Environment::with_prefix("PANTRY"),
        )
    }

    /// An explicit `config_file` must exist; the default one is optional.
    fn load(config_file: Option<&str>, env: Environment) -> Result<Self> {
        let defaults = EngineConfig::default();
        let file = match config_file {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let layered = Config::builder()
            .set_default("days_ahead", i64::from(defaults.days_ahead))?
            .set_default("days_threshold", i64::from(defaults.days_threshold))?
            .set_default("weekend_factor", defaults.weekend_factor)?
            .set_default("include_expired", defaults.include_expired)?
            .set_default("strict", false)?
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()
            .context("loading pantry settings")?;

        let strict = layered.get_bool("strict").context("PANTRY_STRICT")?;
        let reference_date = match layered.get_string("reference_date") {
            Ok(v) => NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
                .context("PANTRY_REFERENCE_DATE must be YYYY-MM-DD")?,
            Err(ConfigError::NotFound(_)) => Utc::now().date_naive(),
            Err(e) => return Err(e).context("PANTRY_REFERENCE_DATE"),
        };

        let mut engine: EngineConfig = layered
            .try_deserialize()
            .context("invalid engine settings")?;
        if strict {
            engine = engine.strict();
        }
        engine.validate()?;

        Ok(Self {
            engine,
            reference_date,
        })
    }
}
