//! Server configuration from the process environment.

use anyhow::Context;

/// The runtime profile the server was launched under, selected by the `ENV` environment
/// variable.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Env {
    /// Local development. Configuration is loaded from a `.env` file, and the client is expected
    /// to run on its own dev server.
    Development,

    /// Production. The client's static asset bundle is served alongside the API.
    Production,
}

impl Env {
    /// Reads the profile from the `ENV` environment variable. Anything other than `production`
    /// (including the variable being unset) selects development.
    fn from_os() -> Self {
        match std::env::var("ENV") {
            Ok(value) if value == "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

/// The server's startup configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// The runtime profile.
    pub env: Env,

    /// The store's connection string, from the `MONGO_URI` environment variable.
    pub store_uri: String,
}

impl Config {
    /// Loads configuration from the process environment. In development, variables are first
    /// loaded from a local `.env` file, and the file being missing is an error.
    ///
    /// # Errors
    ///
    /// Fails if the `.env` file can't be loaded in development, or if `MONGO_URI` isn't set.
    pub fn load() -> anyhow::Result<Self> {
        let env = Env::from_os();

        if env == Env::Development {
            dotenvy::dotenv().context("failed to load .env file")?;
        }

        let store_uri = dotenvy::var("MONGO_URI")
            .context("environment variable `MONGO_URI` should be set")?;

        Ok(Self { env, store_uri })
    }
}
