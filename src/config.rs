//! Submitter configuration
//!
//! Handles the backend location, route scheme and registration payload
//! shape.

use std::str::FromStr;
use thiserror::Error;

pub const BASE_URL_ENV: &str = "CREDENTIAL_FORMS_BASE_URL";
pub const ROUTE_SCHEME_ENV: &str = "CREDENTIAL_FORMS_ROUTE_SCHEME";
pub const REGISTRATION_SCHEMA_ENV: &str = "CREDENTIAL_FORMS_REGISTRATION_SCHEMA";
pub const LOGIN_REDIRECT_ENV: &str = "CREDENTIAL_FORMS_LOGIN_REDIRECT";
pub const REGISTER_REDIRECT_ENV: &str = "CREDENTIAL_FORMS_REGISTER_REDIRECT";

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid base URL: {0:?} (expected an absolute http(s) URL)")]
    InvalidBaseUrl(String),
    #[error("Unknown route scheme: {0} (expected \"root\" or \"api\")")]
    InvalidRouteScheme(String),
    #[error("Unknown registration schema: {0} (expected \"username\" or \"split-name\")")]
    InvalidRegistrationSchema(String),
}

/// Where the backend mounts its auth endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteScheme {
    /// `/login`, `/register`
    #[default]
    Root,
    /// `/api/login`, `/api/register`
    Api,
}

impl RouteScheme {
    pub fn login_path(self) -> &'static str {
        match self {
            RouteScheme::Root => "/login",
            RouteScheme::Api => "/api/login",
        }
    }

    pub fn register_path(self) -> &'static str {
        match self {
            RouteScheme::Root => "/register",
            RouteScheme::Api => "/api/register",
        }
    }
}

impl FromStr for RouteScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "root" => Ok(RouteScheme::Root),
            "api" => Ok(RouteScheme::Api),
            _ => Err(ConfigError::InvalidRouteScheme(s.to_string())),
        }
    }
}

/// Shape of the registration request body the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationSchema {
    /// `{ username, email, password }`
    #[default]
    Username,
    /// `{ firstname, lastname, email, password }`
    SplitName,
}

impl FromStr for RegistrationSchema {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "username" => Ok(RegistrationSchema::Username),
            "split-name" | "split_name" | "splitname" => Ok(RegistrationSchema::SplitName),
            _ => Err(ConfigError::InvalidRegistrationSchema(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    pub routes: RouteScheme,
    pub registration_schema: RegistrationSchema,
    /// Route opened after a successful login.
    pub login_redirect: String,
    /// Route opened after a successful registration.
    pub register_redirect: String,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            routes: RouteScheme::default(),
            registration_schema: RegistrationSchema::default(),
            login_redirect: "/dashboard".to_string(),
            register_redirect: "/".to_string(),
        }
    }
}

impl SubmitterConfig {
    /// Builds the configuration from environment variables.
    ///
    /// Priority:
    /// 1. Environment variables (`CREDENTIAL_FORMS_*`)
    /// 2. Defaults from [`SubmitterConfig::default`]
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an absolute http(s) URL, or if
    /// the route scheme or registration schema variable holds an unknown
    /// value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = parse_base_url(&base_url)?;
        }
        if let Ok(scheme) = std::env::var(ROUTE_SCHEME_ENV) {
            config.routes = scheme.parse()?;
        }
        if let Ok(schema) = std::env::var(REGISTRATION_SCHEMA_ENV) {
            config.registration_schema = schema.parse()?;
        }
        if let Ok(route) = std::env::var(LOGIN_REDIRECT_ENV) {
            config.login_redirect = route;
        }
        if let Ok(route) = std::env::var(REGISTER_REDIRECT_ENV) {
            config.register_redirect = route;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Submitter configured: base_url={} routes={:?} schema={:?}",
            config.base_url,
            config.routes,
            config.registration_schema
        );

        Ok(config)
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url, self.routes.login_path())
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url, self.routes.register_path())
    }
}

/// Accepts `http`/`https` origins, stripping any trailing slash.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    match reqwest::Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(trimmed.to_string())
        }
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 5] = [
        BASE_URL_ENV,
        ROUTE_SCHEME_ENV,
        REGISTRATION_SCHEMA_ENV,
        LOGIN_REDIRECT_ENV,
        REGISTER_REDIRECT_ENV,
    ];

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: serialized tests, no other thread reads the environment
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: serialized tests, no other thread reads the environment
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        for key in ALL_VARS {
            remove_env(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = SubmitterConfig::from_env().unwrap();
        assert_eq!(config, SubmitterConfig::default());
        assert_eq!(config.login_url(), "http://localhost:5000/login");
        assert_eq!(config.register_url(), "http://localhost:5000/register");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env(BASE_URL_ENV, "https://auth.example.com/");
        set_env(ROUTE_SCHEME_ENV, "api");
        set_env(REGISTRATION_SCHEMA_ENV, "split-name");
        set_env(LOGIN_REDIRECT_ENV, "/home");
        set_env(REGISTER_REDIRECT_ENV, "/welcome");

        let config = SubmitterConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://auth.example.com");
        assert_eq!(config.routes, RouteScheme::Api);
        assert_eq!(config.registration_schema, RegistrationSchema::SplitName);
        assert_eq!(config.login_redirect, "/home");
        assert_eq!(config.register_redirect, "/welcome");
        assert_eq!(config.login_url(), "https://auth.example.com/api/login");
        assert_eq!(config.register_url(), "https://auth.example.com/api/register");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_route_scheme() {
        clear_env();
        set_env(ROUTE_SCHEME_ENV, "graphql");

        let result = SubmitterConfig::from_env();
        assert_eq!(result, Err(ConfigError::InvalidRouteScheme("graphql".to_string())));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_registration_schema() {
        clear_env();
        set_env(REGISTRATION_SCHEMA_ENV, "nickname");

        let result = SubmitterConfig::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidRegistrationSchema(_))));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_empty_base_url() {
        clear_env();
        set_env(BASE_URL_ENV, "");

        let result = SubmitterConfig::from_env();
        assert_eq!(result, Err(ConfigError::InvalidBaseUrl(String::new())));

        clear_env();
    }

    #[test]
    fn test_parse_base_url() {
        assert_eq!(parse_base_url("http://localhost:5000/"), Ok("http://localhost:5000".to_string()));
        assert_eq!(parse_base_url(" https://auth.example.com "), Ok("https://auth.example.com".to_string()));
        assert!(matches!(parse_base_url("localhost:5000"), Err(ConfigError::InvalidBaseUrl(_))));
        assert!(matches!(parse_base_url("auth.example.com"), Err(ConfigError::InvalidBaseUrl(_))));
        assert!(matches!(parse_base_url("ftp://files.example.com"), Err(ConfigError::InvalidBaseUrl(_))));
        assert!(matches!(parse_base_url("/"), Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("API".parse::<RouteScheme>(), Ok(RouteScheme::Api));
        assert_eq!(" Root ".parse::<RouteScheme>(), Ok(RouteScheme::Root));
        assert_eq!("SplitName".parse::<RegistrationSchema>(), Ok(RegistrationSchema::SplitName));
    }
}
