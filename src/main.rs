//! Binary entry point: read the environment, open the log file, build the
//! session and hand it to the Ratatui event loop.
use anyhow::Context;
use fretboard_trainer::{init_logging, run_app, App, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    init_logging(&config.log_file()?)?;

    let session = config.build_session();
    log::info!(
        "starting {} practice, target {}",
        session.mode(),
        session.target()
    );

    let mut app = App::new(session);
    run_app(&mut app)
}
