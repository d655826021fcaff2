use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

/// Command-line arguments of the `pathview` binary.
#[derive(Debug, Parser)]
#[command(name = "pathview")]
#[command(about = "Plot an optimization trajectory over its objective function")]
pub struct Args {
    /// Optimizer log to read
    #[arg(short, long, default_value = "data/output.txt")]
    pub input: PathBuf,

    /// Address to serve the dashboard on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to serve the dashboard on
    #[arg(short, long, default_value_t = 8050)]
    pub port: u16,

    /// Write the page to this file and exit instead of serving it
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Where to read the log from and what to do with the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub addr: SocketAddr,
    pub export: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            addr: SocketAddr::new(args.host, args.port),
            export: args.export,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/output.txt"),
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8050),
            export: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_default() {
        let args = Args::try_parse_from(["pathview"]).unwrap();

        assert_eq!(Config::from(args), Config::default());
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "pathview",
            "--input",
            "runs/rastrigin.txt",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--export",
            "out.html",
        ])
        .unwrap();

        let config = Config::from(args);

        assert_eq!(config.input, PathBuf::from("runs/rastrigin.txt"));
        assert_eq!(config.addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.export, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Args::try_parse_from(["pathview", "--port", "70000"]).is_err());
    }
}
