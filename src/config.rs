use std::env;

/// Database used when neither `MONGO_DB` nor the connection string names one
pub const DEFAULT_DATABASE: &str = "test";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub app_env: String,
    pub graphiql: bool,

    // MongoDB
    pub mongo_uri: String,
    pub mongo_db: Option<String>,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env(default_port: u16) -> Self {
        Self::from_source(default_port, |key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_source<F>(default_port: u16, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            // Server
            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default_port),
            app_env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            graphiql: lookup("GRAPHIQL")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),

            // MongoDB - MONGO_URL is what some hosting platforms inject
            mongo_uri: lookup("MONGO_URI")
                .or_else(|| lookup("MONGO_URL"))
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            mongo_db: lookup("MONGO_DB").filter(|v| !v.trim().is_empty()),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(4003, |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, 4003);
        assert_eq!(config.app_env, "development");
        assert!(config.graphiql);
        assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(config.mongo_db, None);
    }

    #[test]
    fn test_mongo_url_fallback() {
        let config = config_from(&[("MONGO_URL", "mongodb://db:27017/shop")]);
        assert_eq!(config.mongo_uri, "mongodb://db:27017/shop");

        let config = config_from(&[
            ("MONGO_URI", "mongodb://primary:27017"),
            ("MONGO_URL", "mongodb://secondary:27017"),
        ]);
        assert_eq!(config.mongo_uri, "mongodb://primary:27017");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("GRAPHIQL", "maybe")]);
        assert_eq!(config.port, 4003);
        assert!(config.graphiql);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("GRAPHIQL", "off"),
            ("MONGO_DB", "library"),
            ("APP_ENV", "production"),
        ]);
        assert_eq!(config.port, 8080);
        assert!(!config.graphiql);
        assert_eq!(config.mongo_db.as_deref(), Some("library"));
        assert_eq!(config.app_env, "production");
    }
}
