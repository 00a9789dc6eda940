//! EmailJS configuration.
//!
//! The browser build has no process environment, so values are baked in at
//! compile time with `option_env!` and fed through [`EmailJsConfig::from_lookup`].
//! A missing value does not stop the page from loading; it is reported when
//! a send is attempted.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const TO_EMAIL_VAR: &str = "EMAILJS_TO_EMAIL";

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required setting was absent or blank at build time.
    #[error("missing EmailJS setting: {var} not set")]
    Missing { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_email: Option<String>,
    pub endpoint: String,
}

impl EmailJsConfig {
    /// Build typed config from values captured at compile time.
    ///
    /// Required:
    /// - `EMAILJS_SERVICE_ID`
    /// - `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_PUBLIC_KEY`
    ///
    /// Optional:
    /// - `EMAILJS_TO_EMAIL`: passed to the template as `to_email`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent setting.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            let value = match var {
                SERVICE_ID_VAR => option_env!("EMAILJS_SERVICE_ID"),
                TEMPLATE_ID_VAR => option_env!("EMAILJS_TEMPLATE_ID"),
                PUBLIC_KEY_VAR => option_env!("EMAILJS_PUBLIC_KEY"),
                TO_EMAIL_VAR => option_env!("EMAILJS_TO_EMAIL"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from any key/value source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent setting.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| non_blank(lookup(var)).ok_or(ConfigError::Missing { var });

        Ok(Self {
            service_id: required(SERVICE_ID_VAR)?,
            template_id: required(TEMPLATE_ID_VAR)?,
            public_key: required(PUBLIC_KEY_VAR)?,
            to_email: non_blank(lookup(TO_EMAIL_VAR)),
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_owned(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
