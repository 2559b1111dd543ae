pub mod errors;
pub mod logging;
pub mod query;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query::{QueryConfig, Transport};
pub use root::{CliOverrides, Config};
