use thiserror::Error;

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Hard failures: the configuration cannot be used as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("TMDB_API_KEY is not set")]
    MissingApiKey,
    #[error("carousel page size must be at least 1")]
    ZeroPageSize,
    #[error("invalid {field} URL '{value}': {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("unknown image size '{value}' for {field}")]
    InvalidImageSize { field: &'static str, value: String },
    #[error("invalid timeout '{value}': {reason}")]
    InvalidTimeout { value: String, reason: String },
}

/// Validate an http(s) base URL.
pub fn check_base_url(
    field: &'static str,
    value: &str,
) -> Result<(), ConfigGuardRailError> {
    let parsed = url::Url::parse(value).map_err(|err| {
        ConfigGuardRailError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: err.to_string(),
        }
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigGuardRailError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
