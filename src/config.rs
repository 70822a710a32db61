//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "study-cat")]
#[command(about = "A state-managed HTTP server for a Pomodoro study timer")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20874")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Focus session length in minutes
    #[arg(short, long, default_value = "25", value_parser = clap::value_parser!(u64).range(1..))]
    pub focus: u64,

    /// Break length in minutes
    #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..))]
    pub r#break: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Focus session length in seconds
    pub fn focus_seconds(&self) -> u64 {
        self.focus * 60
    }

    /// Break length in seconds
    pub fn break_seconds(&self) -> u64 {
        self.r#break * 60
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_pomodoro() {
        let config = Config::parse_from(["study-cat"]);
        assert_eq!(config.focus_seconds(), 25 * 60);
        assert_eq!(config.break_seconds(), 5 * 60);
        assert_eq!(config.address(), "127.0.0.1:20874");
    }

    #[test]
    fn zero_minute_sessions_are_rejected() {
        assert!(Config::try_parse_from(["study-cat", "--focus", "0"]).is_err());
        assert!(Config::try_parse_from(["study-cat", "--break", "0"]).is_err());
    }

    #[test]
    fn custom_durations_convert_to_seconds() {
        let config = Config::parse_from(["study-cat", "--focus", "10", "--break", "2"]);
        assert_eq!(config.focus_seconds(), 600);
        assert_eq!(config.break_seconds(), 120);
    }
}
