mod api;
mod app;
mod board;
mod config;
mod error;
mod events;
mod state;
mod ui;
mod utils;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as ClapApp, Arg};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new("homedash-tui")
        .version(crate_version!())
        .about("A terminal dashboard for your self-hosted services")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml, defaults to ~/.config/homedash-tui")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("api-url")
                .short("u")
                .long("api-url")
                .value_name("URL")
                .help("Dashboard API base URL, overrides the configured one")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(api_url) = matches.value_of("api-url") {
        config.api_url = api_url.to_string();
    }

    App::start(config).await
}
