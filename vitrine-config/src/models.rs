use crate::secret::SecretString;

/// Fully composed runtime configuration, injected at startup.
///
/// The relay's destination address is intentionally absent: it is a
/// hardcoded constant in the server, not a tunable.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub mail: MailConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// SMTP account used to relay contact submissions.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Sending account identity (also the `from` mailbox).
    pub username: String,
    /// Account secret; zeroized on drop.
    pub password: SecretString,
    /// SMTP relay host.
    pub smtp_host: String,
}

/// Provenance details recorded during loading, for startup logging.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub env_file_loaded: bool,
}
