use std::{error::Error as _, process::ExitCode};

use clap::Parser;
use pathview_core::TrajectoryLog;
use pathview_dashboard::{Args, Config, Dashboard, DashboardServer, Error, init_logger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    let config = Config::from(Args::parse());

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let log = TrajectoryLog::read(&config.input)?;
    info!(
        input = %config.input.display(),
        steps = log.len(),
        values = log.objective_values.len(),
        "read optimizer log"
    );

    let dashboard = Dashboard::from_log(&log)?;

    if let Some(path) = &config.export {
        return dashboard.export(path);
    }

    DashboardServer::new(&dashboard, config.addr)?.run().await
}
