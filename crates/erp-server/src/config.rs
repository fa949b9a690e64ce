use clap::Parser;
use clap::ValueEnum;
use erp_auth::DEFAULT_SECRET;
use erp_auth::Secret;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

/// Startup configuration. Every flag falls back to an environment
/// variable, then to a development default.
#[derive(Clone, Parser)]
#[command(name = "backend", about = "erp backend server")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: String,
    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL", default_value = "postgres://localhost/erp")]
    pub database_url: String,
    #[arg(long, env = "ENVIRONMENT", value_enum, default_value_t = Environment::Development)]
    pub environment: Environment,
    /// HS256 signing secret for session tokens.
    #[arg(long, env = "JWT_SECRET", default_value = DEFAULT_SECRET, hide_env_values = true)]
    pub jwt_secret: String,
    /// HTTP worker threads; defaults to the number of physical cores.
    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,
}

impl Config {
    pub fn production(&self) -> bool {
        self.environment == Environment::Production
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.environment {
            Environment::Production => log::LevelFilter::Info,
            Environment::Development => log::LevelFilter::Debug,
        }
    }
    /// The signing secret. A weak secret is fatal in production and a
    /// warning anywhere else.
    pub fn secret(&self) -> anyhow::Result<Secret> {
        let secret = Secret::new(self.jwt_secret.clone());
        match secret.check() {
            Ok(()) => Ok(secret),
            Err(weak) if self.production() => {
                Err(anyhow::anyhow!("refusing to start in production: {}", weak))
            }
            Err(weak) => {
                log::warn!("{}; set JWT_SECRET before deploying", weak);
                Ok(secret)
            }
        }
    }
}
