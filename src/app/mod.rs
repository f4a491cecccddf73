// SPDX-License-Identifier: MPL-2.0
//! Application root: builds the store from configuration and runs the
//! session-start sequence.
//!
//! `App` is the single owner of the [`ContentStore`]. Consumers borrow it
//! through [`App::store`]; there is no global store.

mod flags;
pub mod paths;

pub use flags::{Flags, USAGE};

use crate::application::{ContentStore, PersistenceLayer, SwitchOutcome};
use crate::config::{self, Config, DEFAULT_PERSIST_SNAPSHOTS, DEFAULT_RESTORE_SNAPSHOT};
use crate::error::Result;
use crate::i18n::{LanguageCatalog, LanguageResolver};
use crate::infrastructure::{
    ContentSource, DirectoryLoader, EmbeddedLoader, FileStorage, MemoryStorage, StorageBackend,
};
use std::fmt;
use std::path::PathBuf;

/// Store type used by the application.
pub type Store = ContentStore<ContentSource, StorageBackend>;

/// What happened during [`App::start`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartReport {
    /// Switch triggered by the stored language preference, if any.
    pub restored: Option<SwitchOutcome>,
    /// Whether a stored snapshot replaced the loaded document.
    pub snapshot_applied: bool,
    /// Switch to the language requested by flag or config, if any.
    pub requested: Option<SwitchOutcome>,
}

pub struct App {
    config: Config,
    catalog: LanguageCatalog,
    store: Store,
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("catalog", &self.catalog)
            .field("language", &self.store.current_language_code())
            .field("warnings", &self.warnings)
            .finish()
    }
}

impl App {
    /// Builds the application from `settings.toml`, the resolved data
    /// directory and command-line flags.
    ///
    /// Call [`paths::init_cli_overrides`] first so `--data-dir` and
    /// `--config-dir` are honored.
    ///
    /// # Errors
    ///
    /// Fails if the catalog or the baseline document cannot be loaded.
    pub async fn new(flags: &Flags) -> Result<Self> {
        Self::new_with_override(flags, None, None).await
    }

    /// Like [`App::new`], with explicit config and data directories.
    ///
    /// # Errors
    ///
    /// Fails if the catalog or the baseline document cannot be loaded.
    pub async fn new_with_override(
        flags: &Flags,
        config_dir: Option<PathBuf>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let (mut config, warning) = config::load_with_override(config_dir);
        if let Some(dir) = &flags.content_dir {
            config.content.dir = Some(PathBuf::from(dir));
        }
        if flags.lang.is_some() {
            config.general.language.clone_from(&flags.lang);
        }

        let storage = match FileStorage::open_with_override(data_dir) {
            Some(storage) => StorageBackend::File(storage),
            None => {
                log::warn!("event=data_dir_missing status=memory_only");
                StorageBackend::Memory(MemoryStorage::new())
            }
        };

        let mut app = Self::build(config, storage).await?;
        app.warnings.extend(warning);
        Ok(app)
    }

    /// Builds the application from explicit parts.
    ///
    /// # Errors
    ///
    /// Fails if the catalog or the baseline document cannot be loaded.
    pub async fn build(config: Config, storage: StorageBackend) -> Result<Self> {
        let loader = match &config.content.dir {
            Some(dir) => ContentSource::Directory(DirectoryLoader::new(dir)),
            None => ContentSource::Embedded(EmbeddedLoader),
        };

        let catalog = LanguageCatalog::load(&loader).await?;
        let resolver = LanguageResolver::new(&catalog, config.content.baseline_language());
        let store = ContentStore::open(resolver, loader, PersistenceLayer::new(storage)).await?;

        Ok(Self {
            config,
            catalog,
            store,
            warnings: Vec::new(),
        })
    }

    /// Session start: restore the language preference, optionally apply the
    /// stored snapshot, register the snapshot observer, then switch to the
    /// configured language if one is set.
    pub async fn start(&self) -> StartReport {
        let mut report = StartReport {
            restored: self.store.restore_language_preference().await,
            ..StartReport::default()
        };

        let storage = &self.config.storage;
        if storage.restore_snapshot.unwrap_or(DEFAULT_RESTORE_SNAPSHOT) {
            report.snapshot_applied = self.store.load_from_storage();
        }
        if storage.persist_snapshots.unwrap_or(DEFAULT_PERSIST_SNAPSHOTS) {
            self.store.initialize_watchers();
        }

        if let Some(code) = &self.config.general.language {
            if *code != self.store.current_language_code() {
                report.requested = Some(self.store.switch_language(code).await);
            }
        }
        report
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Warning keys collected while loading configuration.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// User-facing text for a warning key from [`App::warnings`].
#[must_use]
pub fn describe_warning(key: &str) -> String {
    match key {
        config::WARNING_CONFIG_LOAD => {
            "settings.toml could not be read; using default settings".to_string()
        }
        other => other.to_string(),
    }
}
