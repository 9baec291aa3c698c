//! Environment-sourced configuration.
//!
//! Credentials are externalized: nothing here carries a default password, and
//! configuration values are constructed explicitly at startup and passed into
//! the components that need them. A missing `DB_PASSWORD` is not an error at
//! load time; the connection attempt reports it instead.

use std::env;

/// Relational database connection settings.
///
/// Defaults: host "localhost", user "admin", database "secure_db". The
/// password has no default and must come from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
}

impl DbConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            user: lookup("DB_USER").unwrap_or_else(|| "admin".to_string()),
            password: lookup("DB_PASSWORD"),
            database: lookup("DB_NAME").unwrap_or_else(|| "secure_db".to_string()),
        }
    }
}

/// Outbound mail settings for the implicit-TLS SMTP session.
///
/// Defaults: host "smtp.example.com", sender "noreply@example.com". The
/// account credentials have no defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SmtpConfig {
    pub host: String,
    pub sender: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl SmtpConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("SMTP_HOST").unwrap_or_else(|| "smtp.example.com".to_string()),
            sender: lookup("EMAIL_SENDER").unwrap_or_else(|| "noreply@example.com".to_string()),
            user: lookup("EMAIL_USER"),
            password: lookup("EMAIL_PASSWORD"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_db_config_defaults() {
        let empty = HashMap::new();
        let config = DbConfig::from_lookup(lookup_from(&empty));
        assert_eq!(config.host, "localhost");
        assert_eq!(config.user, "admin");
        assert_eq!(config.password, None);
        assert_eq!(config.database, "secure_db");
    }

    #[test]
    fn test_db_config_from_environment_values() {
        let vars = HashMap::from([
            ("DB_HOST", "db.internal"),
            ("DB_USER", "frontdesk"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_NAME", "visitors"),
        ]);
        let config = DbConfig::from_lookup(lookup_from(&vars));
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.user, "frontdesk");
        assert_eq!(config.password.as_deref(), Some("s3cret"));
        assert_eq!(config.database, "visitors");
    }

    #[test]
    fn test_smtp_config_defaults() {
        let empty = HashMap::new();
        let config = SmtpConfig::from_lookup(lookup_from(&empty));
        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.sender, "noreply@example.com");
        assert_eq!(config.user, None);
        assert_eq!(config.password, None);
    }

    #[test]
    fn test_smtp_config_from_environment_values() {
        let vars = HashMap::from([
            ("SMTP_HOST", "mail.internal"),
            ("EMAIL_SENDER", "desk@example.org"),
            ("EMAIL_USER", "desk"),
            ("EMAIL_PASSWORD", "hunter2hunter2"),
        ]);
        let config = SmtpConfig::from_lookup(lookup_from(&vars));
        assert_eq!(config.host, "mail.internal");
        assert_eq!(config.sender, "desk@example.org");
        assert_eq!(config.user.as_deref(), Some("desk"));
        assert_eq!(config.password.as_deref(), Some("hunter2hunter2"));
    }
}
