//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// AI Job Matcher: a human-in-the-loop job application wizard
#[derive(Debug, Parser)]
#[command(name = "jobmatch", version, about)]
pub struct Cli {
    /// Matching service base URL (overrides config and JOBMATCH_API_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Resume to preselect on the upload step
    #[arg(long, value_name = "PATH")]
    pub resume: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_all_flags() {
        let cli = Cli::parse_from([
            "jobmatch",
            "--base-url",
            "http://localhost:9000",
            "--resume",
            "cv.pdf",
            "--debug",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cli.resume, Some(PathBuf::from("cv.pdf")));
        assert!(cli.debug);
    }

    #[test]
    fn parse_no_flags() {
        let cli = Cli::parse_from(["jobmatch"]);
        assert!(cli.base_url.is_none());
        assert!(cli.resume.is_none());
        assert!(!cli.debug);
    }
}
