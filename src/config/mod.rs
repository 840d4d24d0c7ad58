use crate::utils::error::{GreetingError, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "greeting")]
#[command(about = "Prints the greeting")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| GreetingError::ConfigError {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_quiet() {
        let config = CliConfig::from_args(["greeting"]).unwrap();
        assert!(!config.verbose);
    }

    #[test]
    fn test_verbose_flag() {
        let config = CliConfig::from_args(["greeting", "--verbose"]).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_unknown_flag_is_config_error() {
        let err = CliConfig::from_args(["greeting", "--name", "bob"]).unwrap_err();
        assert!(matches!(err, GreetingError::ConfigError { .. }));
    }
}
