//! In-memory provider doubles shared by unit tests.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use placescope_core::{
    BusinessDetailRecord, Coordinates, KeyType, LocationResult, SearchParams, ServiceStatus,
    SourceTag,
};
use placescope_providers::{DetailProvider, LocationProvider, ProviderError};

pub(crate) fn location(id: &str, name: &str, coordinates: Coordinates) -> LocationResult {
    LocationResult::new(
        id,
        name,
        format!("{name} street 1"),
        "Almaty",
        coordinates,
        SourceTag::Catalog,
    )
}

/// Answers every search with the same fixed list.
pub(crate) struct FixedProvider {
    pub(crate) source: SourceTag,
    pub(crate) results: Vec<LocationResult>,
    pub(crate) calls: AtomicUsize,
}

impl FixedProvider {
    pub(crate) fn new(source: SourceTag, results: Vec<LocationResult>) -> Self {
        Self {
            source,
            results,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LocationProvider for FixedProvider {
    fn source(&self) -> SourceTag {
        self.source
    }

    async fn search(&self, _params: &SearchParams) -> Result<Vec<LocationResult>, ProviderError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.results.clone())
    }

    fn status(&self) -> ServiceStatus {
        ServiceStatus {
            working: true,
            key_type: KeyType::Catalog,
            message: "fixed".to_string(),
        }
    }
}

/// Fails every search.
pub(crate) struct FailingProvider(pub(crate) SourceTag);

#[async_trait]
impl LocationProvider for FailingProvider {
    fn source(&self) -> SourceTag {
        self.0
    }

    async fn search(&self, _params: &SearchParams) -> Result<Vec<LocationResult>, ProviderError> {
        Err(ProviderError::Unavailable("provider is down".to_string()))
    }

    fn status(&self) -> ServiceStatus {
        ServiceStatus {
            working: false,
            key_type: KeyType::None,
            message: "down".to_string(),
        }
    }
}

/// Never answers within any reasonable timeout.
pub(crate) struct StalledProvider(pub(crate) SourceTag);

#[async_trait]
impl LocationProvider for StalledProvider {
    fn source(&self) -> SourceTag {
        self.0
    }

    async fn search(&self, _params: &SearchParams) -> Result<Vec<LocationResult>, ProviderError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }

    fn status(&self) -> ServiceStatus {
        ServiceStatus {
            working: true,
            key_type: KeyType::Search,
            message: "slow".to_string(),
        }
    }
}

/// Answers per query term; records every query it sees.
pub(crate) struct ScriptedProvider {
    pub(crate) script: Vec<(String, Result<Vec<LocationResult>, String>)>,
    pub(crate) seen: Mutex<Vec<SearchParams>>,
}

impl ScriptedProvider {
    pub(crate) fn new(script: Vec<(&str, Result<Vec<LocationResult>, &str>)>) -> Self {
        Self {
            script: script
                .into_iter()
                .map(|(term, outcome)| (term.to_string(), outcome.map_err(str::to_string)))
                .collect(),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LocationProvider for ScriptedProvider {
    fn source(&self) -> SourceTag {
        SourceTag::Catalog
    }

    async fn search(&self, params: &SearchParams) -> Result<Vec<LocationResult>, ProviderError> {
        self.seen
            .lock()
            .expect("lock not poisoned")
            .push(params.clone());
        match self.script.iter().find(|(term, _)| *term == params.query) {
            Some((_, Ok(results))) => Ok(results.clone()),
            Some((_, Err(message))) => Err(ProviderError::Unavailable(message.clone())),
            None => Ok(Vec::new()),
        }
    }

    fn status(&self) -> ServiceStatus {
        ServiceStatus {
            working: true,
            key_type: KeyType::Catalog,
            message: "scripted".to_string(),
        }
    }
}

/// Detail provider returning a fixed record, or failing when `None`.
pub(crate) struct FixedDetails(pub(crate) Option<BusinessDetailRecord>);

#[async_trait]
impl DetailProvider for FixedDetails {
    fn source(&self) -> SourceTag {
        SourceTag::Catalog
    }

    async fn fetch_details(
        &self,
        location_id: &str,
    ) -> Result<BusinessDetailRecord, ProviderError> {
        self.0
            .clone()
            .ok_or_else(|| ProviderError::NotFound(location_id.to_string()))
    }
}

/// Log sink for a scoped `tracing` subscriber.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Routes `INFO` and above on the current thread into this sink until
    /// the guard drops.
    pub(crate) fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log sink lock");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log sink lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
