use serde::Deserialize;
use std::collections::HashMap;

/// Extract typed settings from environment variables.
///
/// Intended to run after the bootstrap, so that values seeded from the
/// project's `.env` file are already visible. Nested structures use `__`
/// (double underscore) as a delimiter.
///
/// ```
/// use report_setup::core::config::ConfigFromEnv;
///
/// #[derive(serde::Deserialize)]
/// struct RenderConfig {
///     database: Database,
///     output_format: String,
/// }
///
/// #[derive(serde::Deserialize)]
/// struct Database {
///     url: String,
///     #[serde(default)]
///     read_only: bool,
/// }
///
/// fn run() -> anyhow::Result<()> {
///     /*
///     Assume the following env-vars are set:
///         OUTPUT_FORMAT = html
///         DATABASE__URL = postgres://localhost/reports
///     */
///     let config = RenderConfig::from_env()?;
///
///     /* The struct would be: {
///         output_format: "html",
///         database: {
///             url: "postgres://localhost/reports",
///             read_only: false,
///         }
///     } */
///
///     Ok(())
/// }
/// ```
pub trait ConfigFromEnv<'de>: Sized + Deserialize<'de> {
    /// Get a configuration from the env-vars.
    fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::default())
    }

    /// Get a configuration from the env-vars, prefixing all with the provided
    /// prefix **plus** the separator.
    fn from_env_prefix<S: AsRef<str>>(prefix: S) -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix(prefix.as_ref()))
    }

    fn from_environment(env: config::Environment) -> Result<Self, config::ConfigError>;

    /// Get a configuration from an explicit variable set, for tests.
    fn from_map(set: HashMap<String, String>) -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::default().source(Some(set)))
    }
}

impl<'de, T: Deserialize<'de> + Sized> ConfigFromEnv<'de> for T {
    fn from_environment(env: config::Environment) -> Result<T, config::ConfigError> {
        let env = env.try_parsing(true).separator("__");

        let cfg = config::Config::builder().add_source(env);
        cfg.build()?.try_deserialize()
    }
}
