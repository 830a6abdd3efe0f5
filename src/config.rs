use std::{env, path::PathBuf};

use anyhow::Context;
use secrecy::SecretString;

const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub smtp: SmtpConfig,
    pub mail: MailConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
}

impl SmtpConfig {
    /// Port 465 speaks TLS from the first byte; everything else upgrades with STARTTLS.
    pub fn implicit_tls(&self) -> bool {
        self.port == 465
    }
}

/// Sender and recipient identities for the two order notifications.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub from_email: String,
    pub from_name: String,
    pub order_from_name: String,
    pub order_to_email: String,
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub enabled: bool,
    pub directory: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let smtp = SmtpConfig {
            host: required("SMTP_HOST")?,
            port: env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            username: required("SMTP_USERNAME")?,
            password: SecretString::from(required("SMTP_PASSWORD")?),
        };

        let mail = MailConfig {
            from_email: required("SMTP_FROM_EMAIL")?,
            from_name: env::var("SMTP_FROM_NAME").unwrap_or_else(|_| "HER XV".to_string()),
            order_from_name: env::var("ORDER_FROM_NAME")
                .unwrap_or_else(|_| "HER XV Orders".to_string()),
            order_to_email: required("ORDER_TO_EMAIL")?,
        };

        let log = LogConfig {
            enabled: env::var("ENABLE_LOGGING")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            directory: env::var("LOG_DIRECTORY")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
        };

        Ok(Self {
            host,
            port,
            smtp,
            mail,
            log,
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("{key} is not set"))
}
