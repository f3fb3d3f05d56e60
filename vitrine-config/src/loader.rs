use std::env;

use thiserror::Error;

use crate::models::{Config, ConfigMetadata, MailConfig, ServerConfig};
use crate::secret::SecretString;
use crate::validation::ConfigWarnings;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Result of a successful load: the composed config plus any non-fatal
/// findings the caller should log.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load `.env` (when present), gather the process environment, and
    /// compose the runtime configuration.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded =
            dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                // A missing .env file is the common case, not an error.
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(ConfigLoadError::EnvFile(err)),
            })?;

        compose(EnvConfig::gather(), env_file_loaded)
    }
}

/// Raw environment snapshot, separated from composition so the pure part
/// is testable without touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub host: Option<String>,
    pub port: Option<String>,
    pub email_user: Option<String>,
    pub email_pass: Option<String>,
    pub smtp_host: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            host: read_var("SERVER_HOST"),
            port: read_var("SERVER_PORT"),
            email_user: read_var("EMAIL_USER"),
            email_pass: read_var("EMAIL_PASS"),
            smtp_host: read_var("SMTP_HOST"),
        }
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn compose(
    env: EnvConfig,
    env_file_loaded: bool,
) -> Result<ConfigLoad, ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    let email_user = env
        .email_user
        .ok_or(ConfigLoadError::MissingVar { name: "EMAIL_USER" })?;
    let email_pass = env
        .email_pass
        .ok_or(ConfigLoadError::MissingVar { name: "EMAIL_PASS" })?;

    if !email_user.contains('@') {
        warnings.push_with_hint(
            format!("EMAIL_USER `{email_user}` does not look like a mail address"),
            "The relay sends from this account; most SMTP providers expect a full address",
        );
    }

    let port = match env.port {
        Some(raw) => {
            raw.parse::<u16>()
                .map_err(|source| ConfigLoadError::InvalidPort {
                    value: raw,
                    source,
                })?
        }
        None => DEFAULT_PORT,
    };

    let smtp_host = match env.smtp_host {
        Some(host) => host,
        None => {
            warnings.push_with_hint(
                "SMTP_HOST not set; defaulting to the Gmail relay",
                "Set SMTP_HOST if the sending account lives elsewhere",
            );
            DEFAULT_SMTP_HOST.to_owned()
        }
    };

    let config = Config {
        server: ServerConfig {
            host: env.host.unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
        },
        mail: MailConfig {
            username: email_user,
            password: SecretString::new(email_pass),
            smtp_host,
        },
        metadata: ConfigMetadata { env_file_loaded },
    };

    Ok(ConfigLoad { config, warnings })
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("required environment variable {name} is not set")]
    MissingVar { name: &'static str },
    #[error("invalid SERVER_PORT `{value}`")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to load .env file")]
    EnvFile(#[source] dotenvy::Error),
}
