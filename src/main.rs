use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use coop_tui::app::App;
use coop_tui::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("coop-tui")
        .version(crate_version!())
        .about("A terminal user interface for poultry farm management")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    App::start(config).await?;
    Ok(())
}
