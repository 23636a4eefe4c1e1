use std::collections::HashSet;
use std::env;

/// Environment configuration
/// Loaded once at startup and injected into the application state
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub access_token_minutes: i64,
    pub refresh_token_days: i64,
    pub mathematician_secrets: HashSet<String>,
    pub developer_codes: HashSet<u32>,
    pub sendgrid_api_key: Option<String>,
    pub sendgrid_sender: Option<String>,
    pub scheduler_interval_secs: u64,
    pub auth_rate_limit_burst: u32,
    pub cookie_secure: bool,
    pub bind_addr: String,
}

const DEFAULT_DEVELOPER_CODES: [u32; 4] = [20005, 30005, 40005, 50005];

impl Config {
    /// Configuration with every optional setting at its default.
    pub fn with_defaults(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            jwt_secret: jwt_secret.into(),
            access_token_minutes: 60,
            refresh_token_days: 7,
            mathematician_secrets: HashSet::new(),
            developer_codes: DEFAULT_DEVELOPER_CODES.into_iter().collect(),
            sendgrid_api_key: None,
            sendgrid_sender: None,
            scheduler_interval_secs: 60,
            auth_rate_limit_burst: 10,
            cookie_secure: false,
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }

    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://three_dimensions.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set".to_string())?;

        let mut config = Self::with_defaults(database_url, jwt_secret);

        if let Some(minutes) = parse_var::<i64>("ACCESS_TOKEN_EXPIRE_MINUTES")? {
            config.access_token_minutes = minutes;
        }
        if let Some(days) = parse_var::<i64>("REFRESH_TOKEN_EXPIRE_DAYS")? {
            config.refresh_token_days = days;
        }

        config.mathematician_secrets = env::var("MATHEMATICIAN_SECRETS")
            .map(|raw| parse_secrets(&raw))
            .unwrap_or_default();
        if config.mathematician_secrets.is_empty() {
            return Err("MATHEMATICIAN_SECRETS must list at least one secret".to_string());
        }

        if let Ok(raw) = env::var("DEVELOPER_CODES") {
            config.developer_codes = parse_codes(&raw)?;
        }

        config.sendgrid_api_key = env::var("SENDGRID_API_KEY").ok().filter(|v| !v.is_empty());
        config.sendgrid_sender = env::var("SENDGRID_SENDER").ok().filter(|v| !v.is_empty());

        if let Some(secs) = parse_var::<u64>("SCHEDULER_INTERVAL_SECS")? {
            config.scheduler_interval_secs = secs;
        }
        if let Some(burst) = parse_var::<u32>("AUTH_RATE_LIMIT_BURST")? {
            config.auth_rate_limit_burst = burst;
        }
        if let Some(secure) = parse_var::<bool>("COOKIE_SECURE")? {
            config.cookie_secure = secure;
        }
        if let Ok(addr) = env::var("BIND_ADDR") {
            config.bind_addr = addr;
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, String> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("{} has an invalid value: {}", name, raw)),
        Err(_) => Ok(None),
    }
}

pub fn parse_secrets(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_codes(raw: &str) -> Result<HashSet<u32>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| format!("DEVELOPER_CODES contains a non-numeric code: {}", s))
        })
        .collect()
}
