use clap::Parser;
use std::sync::Arc;

use weather_ingest::app::AppState;
use weather_ingest::config::{CliOverrides, WeatherCfg};
use weather_ingest::store::InfluxClient;
use weather_ingest::{http, logging};

#[derive(Parser, Debug)]
#[command(name = "weather-ingest")]
#[command(about = "Writes weather readings posted over HTTP to InfluxDB")]
#[command(version)]
struct Args {
    /// Extra configuration file, layered over ./weather.toml
    #[arg(long)]
    config: Option<String>,

    /// Bind address, overrides config and environment
    #[arg(long)]
    http_bind: Option<String>,

    /// Print the resolved bind address and exit
    #[arg(long)]
    print_bind: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = WeatherCfg::load(
        args.config,
        CliOverrides {
            http_bind: args.http_bind,
        },
    )?;

    if args.print_bind {
        println!("{}", cfg.http.bind);
        return Ok(());
    }

    logging::init()?;
    tracing::info!(influx = ?cfg.influx, "starting");

    let store = InfluxClient::from_cfg(&cfg.influx)?;
    let state = AppState::new(cfg, Arc::new(store));
    http::serve(state).await
}
