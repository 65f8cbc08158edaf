//! Subcommand handlers. Each prints one pretty JSON document to stdout;
//! logs go to stderr.

use chrono::Utc;
use placescope_core::{AppConfig, LocationResult};
use placescope_engine::{build_notification, AnalysisKind, AnalysisResult, ContactInfo};
use placescope_providers::RelayClient;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::wiring::Clients;

/// Relay hand-off timeout.
const RELAY_TIMEOUT_SECS: u64 = 10;

pub(crate) struct AnalyzeOptions {
    pub(crate) seed: Option<u64>,
    pub(crate) competitors: bool,
    pub(crate) radius: Option<f64>,
    pub(crate) contact: Option<ContactInfo>,
}

pub(crate) async fn run_search(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let clients = Clients::from_config(config)?;
    let results = clients.aggregator(config).search_locations(query).await?;
    print_json(&results)
}

pub(crate) async fn run_competitors(
    config: &AppConfig,
    origin: &LocationResult,
    radius: Option<f64>,
) -> anyhow::Result<()> {
    let radius = validated_radius(radius, config)?;
    let clients = Clients::from_config(config)?;
    let competitors = clients
        .competitor_finder(config)
        .search_competitors(origin, radius)
        .await;
    print_json(&competitors)
}

pub(crate) async fn run_analyze(
    config: &AppConfig,
    location: &LocationResult,
    options: AnalyzeOptions,
) -> anyhow::Result<()> {
    let clients = Clients::from_config(config)?;
    let analyzer = clients.analyzer(config, options.seed.map(|s| s.wrapping_add(1)));
    let mut rng = options
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let analysis: AnalysisResult = if options.competitors {
        let radius = validated_radius(options.radius, config)?;
        let finder = clients.competitor_finder(config);
        let bundle = analyzer
            .analyze_with_competitors(location, &finder, radius, &mut rng)
            .await;
        print_json(&bundle)?;
        bundle.analysis
    } else {
        let analysis = analyzer.analyze(location, &mut rng).await;
        print_json(&analysis)?;
        analysis
    };

    if let Some(contact) = options.contact {
        notify_relay(config, contact, location, analysis).await?;
    }
    Ok(())
}

pub(crate) fn run_status(config: &AppConfig) -> anyhow::Result<()> {
    let clients = Clients::from_config(config)?;
    print_json(&clients.aggregator(config).status_summary())
}

async fn notify_relay(
    config: &AppConfig,
    contact: ContactInfo,
    location: &LocationResult,
    analysis: AnalysisResult,
) -> anyhow::Result<()> {
    let Some(relay_url) = config.relay_url.as_deref() else {
        tracing::warn!(
            "contact supplied but PLACESCOPE_RELAY_URL is not set; skipping notification"
        );
        return Ok(());
    };

    let payload = build_notification(
        AnalysisKind::FullAnalysis,
        contact,
        location.clone(),
        Some(analysis),
        Utc::now(),
    )?;
    let relay = RelayClient::new(relay_url, RELAY_TIMEOUT_SECS, &config.user_agent)?;
    relay.send(&payload).await?;
    tracing::info!(location = %location.name, "analysis handed to notification relay");
    Ok(())
}

fn validated_radius(radius: Option<f64>, config: &AppConfig) -> anyhow::Result<f64> {
    let radius = radius.unwrap_or(config.competitor_radius_m);
    if !radius.is_finite() || radius <= 0.0 {
        anyhow::bail!("radius must be a positive number of meters, got {radius}");
    }
    Ok(radius)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
