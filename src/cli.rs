//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::application::Page;

/// Page selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageArg {
    Counter,
    Layout,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Counter => Page::Counter,
            PageArg::Layout => Page::Layout,
        }
    }
}

/// tcounter - Terminal Counter
#[derive(Debug, Parser)]
#[command(name = "tcounter", about = "Interactive counter with history in the terminal", version)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Log file path
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Page shown at startup
    #[arg(short, long, value_enum)]
    pub page: Option<PageArg>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "tcounter",
            "--config",
            "cfg.json",
            "-l",
            "debug",
            "--log-file",
            "out.log",
            "--page",
            "layout",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
        assert_eq!(cli.page.map(Page::from), Some(Page::Layout));
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["tcounter"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.page.is_none());
    }
}
