use std::{fmt, sync::Arc};

use godavaii_config::Config;
use godavaii_core::ui::{Clock, SystemClock};
use godavaii_model::{ModelResult, SiteCatalog};
use tracing::warn;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<SiteCatalog>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Build the catalog from `config` and a system clock at the configured
    /// display offset.
    pub fn new(config: Config) -> ModelResult<Self> {
        let catalog = config.catalog()?;
        let offset = config.ui.display_utc_offset_minutes;
        let clock = SystemClock::with_offset_minutes(offset).unwrap_or_else(|| {
            warn!(offset, "display offset out of range, falling back to IST");
            SystemClock::default()
        });
        Ok(Self::from_parts(config, catalog, Arc::new(clock)))
    }

    pub fn from_parts(
        config: Config,
        catalog: SiteCatalog,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            clock,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("cities", &self.catalog.cities.len())
            .finish_non_exhaustive()
    }
}
