use std::path::PathBuf;

use clap::Parser;

/// Wayfarer: a vertical-tab web browser.
#[derive(Parser, Debug)]
#[command(name = "wayfarer", version, about)]
pub struct Args {
    /// Address or search terms to open instead of the home page.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// `tracing` filter directive.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["wayfarer"]).unwrap();
        assert!(args.url.is_none());
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn url_and_flags() {
        let args = Args::try_parse_from([
            "wayfarer",
            "github.com",
            "--config",
            "/tmp/wayfarer.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.url.as_deref(), Some("github.com"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/wayfarer.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Args::try_parse_from(["wayfarer", "--bogus"]).is_err());
    }
}
