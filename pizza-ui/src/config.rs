//! Optional TOML price list.
//!
//! ```toml
//! topping_price = "1.00"
//! tax_rate = "0.07"
//!
//! [size_prices]
//! small = "8.00"
//! medium = "12.00"
//! large = "16.00"
//! super = "20.00"
//! ```
//!
//! Every key is optional; missing ones keep the default price list.
//! Unknown keys are rejected.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use pizza_core::{PricingConfig, PricingConfigError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid prices: {0}")]
    Pricing(#[from] PricingConfigError),
}

/// Parses and validates a price list from TOML text.
pub fn parse_pricing(text: &str) -> Result<PricingConfig, ConfigError> {
    let config: PricingConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Reads and validates a price list from a TOML file.
pub fn load_pricing(path: &Path) -> Result<PricingConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_pricing(&text)?;
    debug!(path = %path.display(), "loaded price list");
    Ok(config)
}
