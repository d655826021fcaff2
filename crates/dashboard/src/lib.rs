//! A local web dashboard for an optimization trajectory.
//!
//! Startup is an explicit sequence with no hidden global state:
//!
//! ```no_run
//! use pathview_core::TrajectoryLog;
//! use pathview_dashboard::{Dashboard, DashboardServer};
//!
//! # async fn run() -> Result<(), pathview_dashboard::Error> {
//! let log = TrajectoryLog::read("data/output.txt")?;
//! let dashboard = Dashboard::from_log(&log)?;
//! DashboardServer::new(&dashboard, ([127, 0, 0, 1], 8050).into())?
//!     .run()
//!     .await
//! # }
//! ```

mod config;
mod error;
mod logger;
mod page;
mod server;

pub use config::{Args, Config};
pub use error::Error;
pub use logger::{init_logger, init_logger_with_level};
pub use page::{CONTOUR_GRAPH_ID, Dashboard, Panel, SURFACE_GRAPH_ID};
pub use server::DashboardServer;
