//! Runtime configuration for the `cellar-fulfill` binary, read from the
//! environment once at startup.

use cellar_observability::LogFormat;

use crate::audit::{NoopOrderLog, OrderLog, TracingOrderLog};

pub const LOG_FORMAT_VAR: &str = "CELLAR_LOG_FORMAT";
pub const AUDIT_LOG_VAR: &str = "CELLAR_AUDIT_LOG";

/// Where fulfilled orders are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuditMode {
    #[default]
    Tracing,
    Off,
}

impl AuditMode {
    pub fn order_log(self) -> Box<dyn OrderLog> {
        match self {
            AuditMode::Tracing => Box::new(TracingOrderLog),
            AuditMode::Off => Box::new(NoopOrderLog),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FulfillConfig {
    pub log_format: LogFormat,
    pub audit: AuditMode,
    /// Problems found while reading the environment. Tracing is not set up
    /// yet at that point, so the caller logs these after `init`.
    pub warnings: Vec<String>,
}

impl FulfillConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unknown values fall back to the
    /// defaults and leave a warning behind.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = FulfillConfig::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(err) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}: {err}; using json")),
            }
        }

        if let Some(raw) = lookup(AUDIT_LOG_VAR) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "tracing" => config.audit = AuditMode::Tracing,
                "off" => config.audit = AuditMode::Off,
                other => config.warnings.push(format!(
                    "{AUDIT_LOG_VAR}: unknown audit mode `{other}`; using tracing"
                )),
            }
        }

        config
    }
}
