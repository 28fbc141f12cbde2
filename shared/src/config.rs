use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub http: HttpConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        // .env が無い環境（本番のコンテナなど）ではそのまま環境変数を使う
        let _ = dotenvy::dotenv();

        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST").context("DATABASE_HOST is not set")?,
            port: std::env::var("DATABASE_PORT")
                .context("DATABASE_PORT is not set")?
                .parse::<u16>()
                .context("DATABASE_PORT must be a port number")?,
            username: std::env::var("DATABASE_USERNAME")
                .context("DATABASE_USERNAME is not set")?,
            password: std::env::var("DATABASE_PASSWORD")
                .context("DATABASE_PASSWORD is not set")?,
            database: std::env::var("DATABASE_NAME").context("DATABASE_NAME is not set")?,
        };
        let redis = RedisConfig {
            host: std::env::var("REDIS_HOST").context("REDIS_HOST is not set")?,
            port: std::env::var("REDIS_PORT")
                .context("REDIS_PORT is not set")?
                .parse::<u16>()
                .context("REDIS_PORT must be a port number")?,
        };
        let http = HttpConfig {
            port: match std::env::var("HTTP_PORT") {
                Ok(v) => v.parse::<u16>().context("HTTP_PORT must be a port number")?,
                Err(_) => HttpConfig::DEFAULT_PORT,
            },
        };

        Ok(Self {
            database,
            redis,
            http,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct HttpConfig {
    pub port: u16,
}

impl HttpConfig {
    pub const DEFAULT_PORT: u16 = 8080;
}
