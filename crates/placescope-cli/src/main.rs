mod commands;
mod wiring;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "placescope")]
#[command(about = "Find a venue across map providers and score its online visibility")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every provider for a venue by free text
    Search {
        /// Venue name or free-text query
        query: String,
    },
    /// List competitors near a point
    Competitors {
        #[command(flatten)]
        origin: OriginArgs,
        /// Search radius in meters (defaults to PLACESCOPE_COMPETITOR_RADIUS_M)
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Score a venue's online visibility
    Analyze {
        /// Provider-scoped location id (as returned by `search`)
        #[arg(long)]
        id: String,
        #[command(flatten)]
        origin: OriginArgs,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long)]
        city: Option<String>,
        /// Seed for the simulated website and search-presence data
        #[arg(long)]
        seed: Option<u64>,
        /// Also discover nearby competitors
        #[arg(long)]
        competitors: bool,
        #[arg(long)]
        radius: Option<f64>,
        #[command(flatten)]
        contact: ContactArgs,
    },
    /// Report which providers are live and which serve demo data
    Status,
}

#[derive(Debug, Args)]
struct OriginArgs {
    /// Venue name
    #[arg(long)]
    name: String,
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    lng: f64,
}

/// When a contact is given and `PLACESCOPE_RELAY_URL` is set, the analysis
/// is handed to the notification relay.
#[derive(Debug, Args)]
struct ContactArgs {
    #[arg(long)]
    contact_name: Option<String>,
    #[arg(long)]
    contact_phone: Option<String>,
    #[arg(long)]
    contact_position: Option<String>,
    #[arg(long)]
    privacy_consent: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = placescope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Search { query } => commands::run_search(&config, &query).await,
        Commands::Competitors { origin, radius } => {
            let location = origin.into_location(&config, "origin", None);
            commands::run_competitors(&config, &location, radius).await
        }
        Commands::Analyze {
            id,
            origin,
            address,
            city,
            seed,
            competitors,
            radius,
            contact,
        } => {
            let mut location = origin.into_location(&config, &id, city);
            location.address = address;
            commands::run_analyze(
                &config,
                &location,
                commands::AnalyzeOptions {
                    seed,
                    competitors,
                    radius,
                    contact: contact.into_contact(),
                },
            )
            .await
        }
        Commands::Status => commands::run_status(&config),
    }
}

impl OriginArgs {
    fn into_location(
        self,
        config: &placescope_core::AppConfig,
        id: &str,
        city: Option<String>,
    ) -> placescope_core::LocationResult {
        placescope_core::LocationResult::new(
            id,
            self.name,
            "",
            city.unwrap_or_else(|| config.default_city.clone()),
            placescope_core::Coordinates::new(self.lat, self.lng),
            placescope_core::SourceTag::Catalog,
        )
    }
}

impl ContactArgs {
    fn into_contact(self) -> Option<placescope_engine::ContactInfo> {
        match (self.contact_name, self.contact_phone) {
            (Some(name), Some(phone)) => Some(placescope_engine::ContactInfo {
                name,
                phone,
                position: self.contact_position,
                privacy_consent: self.privacy_consent,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
