use std::{env, fmt::Display, str::FromStr};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub video_api: VideoApiConfig,
}

#[derive(Debug, Clone)]
pub struct VideoApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET is not set"))?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_or("APP_PORT", 3000)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", 20)?;
        let jwt_ttl_hours = parse_or("JWT_TTL_HOURS", 24)?;

        let video_api = VideoApiConfig {
            base_url: env::var("VIDEO_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.heygen.com".to_string()),
            api_key: env::var("VIDEO_API_KEY").unwrap_or_default(),
            timeout_secs: parse_or("VIDEO_API_TIMEOUT_SECS", 30)?,
        };

        Ok(Self {
            port,
            database_url,
            db_max_connections,
            host,
            jwt_secret,
            jwt_ttl_hours,
            video_api,
        })
    }
}

/// Unset falls back to `default`; set but unparsable is an error.
fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    parse_value(key, env::var(key).ok(), default)
}

fn parse_value<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|err| anyhow::anyhow!("{key} is invalid ({raw:?}): {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_value_uses_default() {
        assert_eq!(parse_value::<u16>("APP_PORT", None, 3000).unwrap(), 3000);
    }

    #[test]
    fn set_value_is_parsed() {
        assert_eq!(parse_value::<u16>("APP_PORT", Some(" 8080 ".into()), 3000).unwrap(), 8080);
    }

    #[test]
    fn malformed_value_is_rejected() {
        let err = parse_value::<u16>("APP_PORT", Some("80a0".into()), 3000).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));

        let err = parse_value::<u64>("VIDEO_API_TIMEOUT_SECS", Some("-1".into()), 30).unwrap_err();
        assert!(err.to_string().contains("VIDEO_API_TIMEOUT_SECS"));
    }
}
