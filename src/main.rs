use std::fs::File;
use std::sync::Arc;

use atlas::core::config::{self, EnvOverrides};
use atlas::core::store::CountryStore;
use atlas::core::theme::Theme;
use atlas::report;
use atlas::source::{CountrySource, RestCountriesSource};
use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "atlas", about = "Browse country data from the REST Countries API")]
struct Args {
    /// Base URL of the REST Countries API
    #[arg(long)]
    base_url: Option<String>,

    /// Colour theme for the terminal UI
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print every country as `CODE  Name`, sorted by name
    List {
        /// Only show countries whose name or code matches
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Print the details of one country
    Show {
        /// Two-letter country code, e.g. FR
        code: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger so stdout stays clean for the TUI and CLI output
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(config::log_path()) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {}", e);
            config::AtlasConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &EnvOverrides::from_env(),
        args.base_url.as_deref(),
        args.theme,
    );
    log::info!("Atlas starting up against {}", resolved.base_url);
    log::debug!("Resolved config: {:?}", resolved);

    let source: Arc<dyn CountrySource> = match resolved.timeout {
        Some(timeout) => match RestCountriesSource::with_timeout(Some(resolved.base_url.clone()), timeout) {
            Ok(source) => Arc::new(source),
            Err(e) => {
                eprintln!("atlas: {e}");
                std::process::exit(1);
            }
        },
        None => Arc::new(RestCountriesSource::new(Some(resolved.base_url.clone()))),
    };
    let store = Arc::new(CountryStore::new(source));

    let output = match args.command {
        None => return atlas::tui::run(resolved, store),
        Some(Command::List { filter }) => report::list_countries(&store, filter.as_deref()).await,
        Some(Command::Show { code, json }) => report::show_country(&store, &code, json).await,
    };

    match output {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(message) => {
            eprintln!("atlas: {message}");
            std::process::exit(1);
        }
    }
}
