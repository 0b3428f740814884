//! Service configuration.
//!
//! Configuration is loaded once at process start from environment variables
//! and treated as read-only for the lifetime of the pipeline; there is no
//! reload path and no ambient global state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default cutoff date applied when `CUTOFF_DATE` is unset.
const DEFAULT_CUTOFF: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(d) => d,
    None => unreachable!(),
};

/// Pubstack service configuration.
///
/// All fields have defaults; [`PublishConfig::from_env`] overrides them from
/// the environment.
///
/// # Examples
///
/// ```
/// use pubstack_core::PublishConfig;
///
/// let config = PublishConfig::default();
/// assert_eq!(config.listen_addr, "0.0.0.0:8080");
/// assert_eq!(config.person_group.name, "Analytical Contacts");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct PublishConfig {
    /// Bind address for the HTTP server (e.g. `"0.0.0.0:8080"`).
    #[builder(default = String::from("0.0.0.0:8080"))]
    pub listen_addr: String,

    /// Minimum acceptable publish date, inclusive.
    #[builder(default = DEFAULT_CUTOFF)]
    pub cutoff_date: NaiveDate,

    /// Person-group metadata written into every output document.
    #[builder(default)]
    pub person_group: PersonGroupConfig,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

/// Sequence and display name of the single person group in the output.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct PersonGroupConfig {
    /// Group sequence number rendered as an XML attribute.
    #[builder(default = 1)]
    pub sequence: i32,

    /// Group display name.
    #[builder(default = String::from("Analytical Contacts"))]
    pub name: String,
}

impl Default for PersonGroupConfig {
    fn default() -> Self {
        Self {
            sequence: 1,
            name: String::from("Analytical Contacts"),
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            listen_addr: String::from("0.0.0.0:8080"),
            cutoff_date: DEFAULT_CUTOFF,
            person_group: PersonGroupConfig::default(),
            log_level: String::from("info"),
        }
    }
}

impl PublishConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LISTEN_ADDR` | `0.0.0.0:8080` |
    /// | `CUTOFF_DATE` | `2024-01-01` |
    /// | `PERSON_GROUP_SEQUENCE` | `1` |
    /// | `PERSON_GROUP_NAME` | `Analytical Contacts` |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// Unparseable values are ignored in favor of the default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("LISTEN_ADDR") {
            config.listen_addr = v;
        }
        if let Ok(v) = std::env::var("CUTOFF_DATE") {
            if let Ok(d) = v.parse::<NaiveDate>() {
                config.cutoff_date = d;
            }
        }
        if let Ok(v) = std::env::var("PERSON_GROUP_SEQUENCE") {
            if let Ok(n) = v.parse::<i32>() {
                config.person_group.sequence = n;
            }
        }
        if let Ok(v) = std::env::var("PERSON_GROUP_NAME") {
            config.person_group.name = v;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = PublishConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.cutoff_date, NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"));
        assert_eq!(config.person_group.sequence, 1);
        assert_eq!(config.person_group.name, "Analytical Contacts");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = PublishConfig::builder()
            .listen_addr("127.0.0.1:9999".into())
            .cutoff_date(NaiveDate::from_ymd_opt(2023, 7, 1).expect("valid date"))
            .person_group(PersonGroupConfig::builder().sequence(4).name("Desk Contacts".into()).build())
            .log_level("debug".into())
            .build();

        assert_eq!(config.listen_addr, "127.0.0.1:9999");
        assert_eq!(config.cutoff_date, NaiveDate::from_ymd_opt(2023, 7, 1).expect("valid date"));
        assert_eq!(config.person_group.sequence, 4);
        assert_eq!(config.person_group.name, "Desk Contacts");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let config = PublishConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("listenAddr"));
        assert!(json.contains("cutoffDate"));
        assert!(json.contains("personGroup"));
    }

    #[test]
    fn test_should_load_from_env() {
        let config = PublishConfig::from_env();
        assert!(!config.listen_addr.is_empty());
        assert!(!config.person_group.name.is_empty());
    }
}
