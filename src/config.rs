use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_url: String,
    pub db_name: String,
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    /// Recipient of contact-form notifications.
    pub notify_to: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let mongo_url = env_required("MONGO_URL")?;
        let db_name = env_required("DB_NAME")?;

        let host: IpAddr = env_or("HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HOST: {e}"))?;

        let port: u16 = env_or("PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let log_level = env_or("LOG_LEVEL", "info");

        let smtp = match (
            std::env::var("SMTP_HOST").ok(),
            std::env::var("SMTP_USER").ok(),
            std::env::var("SMTP_PASSWORD").ok(),
            std::env::var("NOTIFICATION_EMAIL").ok(),
        ) {
            (Some(host), Some(user), Some(pass), Some(notify_to)) => Some(SmtpConfig {
                host,
                port: env_or("SMTP_PORT", "587")
                    .parse()
                    .map_err(|e| format!("Invalid SMTP_PORT: {e}"))?,
                user,
                pass,
                notify_to,
            }),
            _ => None,
        };

        Ok(Config {
            mongo_url,
            db_name,
            host,
            port,
            cors_origins,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
