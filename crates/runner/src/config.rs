//! Runner configuration loaded from environment variables.

use thiserror::Error;

/// Provider status id meaning "shipped", as configured in the store's
/// order workflow.
const DEFAULT_DELIVERED_STATUS_ID: i64 = 20507;
const DEFAULT_LOOKBACK_HOURS: i64 = 48;
const DEFAULT_LEDGER_PATH: &str = "orders.txt";
const DEFAULT_INVOICE_DIR: &str = ".";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

/// Process-wide configuration, loaded once at start and passed down
/// explicitly; no component reads the environment on its own.
///
/// Credentials have no safe default and must be present. Everything else
/// falls back:
/// - `LEDGER_PATH` — processed-order ledger file (default `orders.txt`)
/// - `INVOICE_DIR` — where invoice artifacts are written (default `.`)
/// - `DELIVERED_STATUS_ID` — shipped-status gate (default `20507`)
/// - `LOOKBACK_HOURS` — order polling window (default `48`)
/// - `DRY_RUN` — `true`/`false`; defaults to `true` so a misconfigured
///   deployment messages the operator, not customers
#[derive(Debug, Clone)]
pub struct Config {
    pub baselinker_token: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from_number: String,
    pub operator_phone_number: String,
    pub drive_access_token: String,
    pub drive_folder_id: String,
    pub ledger_path: String,
    pub invoice_dir: String,
    pub delivered_status_id: i64,
    pub lookback_hours: i64,
    pub dry_run: bool,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration from an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| get(name).ok_or(ConfigError::MissingVar(name));

        let parsed = |name: &'static str, default: i64| -> Result<i64, ConfigError> {
            match get(name) {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidVar { name, value }),
                None => Ok(default),
            }
        };

        let dry_run = match get("DRY_RUN") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidVar {
                    name: "DRY_RUN",
                    value,
                })?,
            None => true,
        };

        Ok(Self {
            baselinker_token: required("BASELINKER_TOKEN")?,
            twilio_account_sid: required("TWILIO_ACCOUNT_SID")?,
            twilio_auth_token: required("TWILIO_AUTH_TOKEN")?,
            twilio_from_number: required("TWILIO_FROM_NUMBER")?,
            operator_phone_number: required("OPERATOR_PHONE_NUMBER")?,
            drive_access_token: required("DRIVE_ACCESS_TOKEN")?,
            drive_folder_id: required("DRIVE_FOLDER_ID")?,
            ledger_path: get("LEDGER_PATH").unwrap_or_else(|| DEFAULT_LEDGER_PATH.to_string()),
            invoice_dir: get("INVOICE_DIR").unwrap_or_else(|| DEFAULT_INVOICE_DIR.to_string()),
            delivered_status_id: parsed("DELIVERED_STATUS_ID", DEFAULT_DELIVERED_STATUS_ID)?,
            lookback_hours: parsed("LOOKBACK_HOURS", DEFAULT_LOOKBACK_HOURS)?,
            dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("BASELINKER_TOKEN", "bl-token"),
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "tw-secret"),
            ("TWILIO_FROM_NUMBER", "+15550001111"),
            ("OPERATOR_PHONE_NUMBER", "+40799000111"),
            ("DRIVE_ACCESS_TOKEN", "drive-token"),
            ("DRIVE_FOLDER_ID", "folder-abc"),
        ])
    }

    fn lookup<'a>(env: &'a HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> + 'a {
        |name| env.get(name).map(|v| v.to_string())
    }

    #[test]
    fn defaults_applied_when_optional_vars_absent() {
        let env = full_env();
        let config = Config::from_lookup(lookup(&env)).unwrap();

        assert_eq!(config.ledger_path, "orders.txt");
        assert_eq!(config.invoice_dir, ".");
        assert_eq!(config.delivered_status_id, 20507);
        assert_eq!(config.lookback_hours, 48);
        assert!(config.dry_run);
    }

    #[test]
    fn missing_required_var_is_named() {
        let mut env = full_env();
        env.remove("TWILIO_AUTH_TOKEN");

        let result = Config::from_lookup(lookup(&env));
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar("TWILIO_AUTH_TOKEN"))
        ));
    }

    #[test]
    fn overrides_are_parsed() {
        let mut env = full_env();
        env.insert("DELIVERED_STATUS_ID", "31000");
        env.insert("LOOKBACK_HOURS", "24");
        env.insert("DRY_RUN", "false");
        env.insert("LEDGER_PATH", "/var/lib/notifier/orders.txt");

        let config = Config::from_lookup(lookup(&env)).unwrap();
        assert_eq!(config.delivered_status_id, 31000);
        assert_eq!(config.lookback_hours, 24);
        assert!(!config.dry_run);
        assert_eq!(config.ledger_path, "/var/lib/notifier/orders.txt");
    }

    #[test]
    fn unparseable_override_is_rejected() {
        let mut env = full_env();
        env.insert("LOOKBACK_HOURS", "two days");

        let result = Config::from_lookup(lookup(&env));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidVar {
                name: "LOOKBACK_HOURS",
                ..
            })
        ));
    }

    #[test]
    fn invalid_dry_run_is_rejected() {
        let mut env = full_env();
        env.insert("DRY_RUN", "yes");

        let result = Config::from_lookup(lookup(&env));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidVar { name: "DRY_RUN", .. })
        ));
    }
}
