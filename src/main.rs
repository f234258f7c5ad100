use clap::Parser;
use jobmatch::{
    app::{App, ScreenContext},
    cli::Cli,
    config::AppConfig,
    logging, Result,
};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.base_url.clone())?;

    // Guard flushes the log file on exit
    let logging = logging::init_logging(&config, cli.debug)?;
    if let Some(path) = &logging.log_file_path {
        tracing::info!(log_file = %path.display(), "logging initialized");
    }

    let context = ScreenContext {
        preselected_resume: cli.resume,
    };
    let mut app = App::new(&config, context)?;
    app.init()?;

    if let Err(e) = app.run().await {
        let _ = app.restore();
        error!(error = %e, "application error");
        drop(logging);
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
