// SPDX-License-Identifier: MPL-2.0
//! The content store: current document, active language, and the
//! resolve → load → fallback → persist sequence that changes them.
//!
//! # State
//!
//! [`StoreState`] holds the document and the active language code. The code
//! is always the baseline code or a catalog code whose last load succeeded.
//!
//! # Ordering
//!
//! Each [`ContentStore::switch_language`] call takes a request token when it
//! is called, before the returned future is first polled. A finished load is
//! applied only if its token is still the newest; otherwise it is dropped.
//! The most recently issued switch therefore always wins, whatever order the
//! loads complete in.
//!
//! # Persistence
//!
//! Every settled switch records the resulting code as the language
//! preference. Once [`ContentStore::initialize_watchers`] has run, every
//! document change also writes the full snapshot. Persistence failures are
//! logged and never reach the caller; in-memory state is authoritative.
//!
//! Writes go through the synchronous [`KeyValueStorage`] port and finish
//! before `switch_language` resolves. A settled switch costs at most two
//! writes (snapshot, then preference); a superseded one costs none. With
//! [`FileStorage`](crate::infrastructure::storage::FileStorage) each write
//! rewrites the state file on the executor thread, so the store suits small
//! documents on a local disk.

use super::persistence::PersistenceLayer;
use super::port::{KeyValueStorage, LoadError, ResourceLoader};
use crate::domain::content::{ContentDocument, Locator};
use crate::error::{Error, Result};
use crate::i18n::LanguageResolver;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::future::Future;

// =============================================================================
// StoreState
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    pub document: ContentDocument,
    pub current_language_code: String,
}

// =============================================================================
// SwitchOutcome
// =============================================================================

/// What a language switch did. Informational only; a switch never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchOutcome {
    /// The requested document was loaded and is now current.
    Applied { code: String },

    /// The requested language was unknown or failed to load; the baseline
    /// document is now current.
    FellBack { requested: String, reason: Error },

    /// Neither the requested nor the baseline document could be loaded.
    /// The document is unchanged and the code is the baseline code.
    BaselineUnavailable { requested: String, reason: LoadError },

    /// A newer switch was issued before this one finished; nothing changed.
    Superseded,
}

impl SwitchOutcome {
    /// True if the store state was touched.
    #[must_use]
    pub fn settled(&self) -> bool {
        !matches!(self, SwitchOutcome::Superseded)
    }
}

// =============================================================================
// ContentStore
// =============================================================================

/// Owner of the current document and language.
///
/// The store is meant for a single-threaded executor: operations take
/// `&self`, use `Cell`/`RefCell` internally, and never hold a borrow across
/// an `.await`.
pub struct ContentStore<L, S> {
    resolver: LanguageResolver,
    loader: L,
    persistence: PersistenceLayer<S>,
    state: RefCell<StoreState>,
    latest_request: Cell<u64>,
    watching: Cell<bool>,
}

impl<L, S> ContentStore<L, S>
where
    L: ResourceLoader,
    S: KeyValueStorage,
{
    /// Creates a store on the baseline language with an already loaded
    /// baseline document.
    pub fn new(
        resolver: LanguageResolver,
        loader: L,
        persistence: PersistenceLayer<S>,
        baseline_document: ContentDocument,
    ) -> Self {
        let state = StoreState {
            document: baseline_document,
            current_language_code: resolver.baseline_code().to_string(),
        };
        Self {
            resolver,
            loader,
            persistence,
            state: RefCell::new(state),
            latest_request: Cell::new(0),
            watching: Cell::new(false),
        }
    }

    /// Loads the baseline document and creates the store on it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceLoad`] if the baseline document cannot be
    /// loaded. The deployment must always ship a loadable baseline.
    pub async fn open(
        resolver: LanguageResolver,
        loader: L,
        persistence: PersistenceLayer<S>,
    ) -> Result<Self> {
        let baseline = loader.load(resolver.baseline_locator()).await?;
        Ok(Self::new(resolver, loader, persistence, baseline))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Copy of the current document.
    #[must_use]
    pub fn current_document(&self) -> ContentDocument {
        self.state.borrow().document.clone()
    }

    #[must_use]
    pub fn current_language_code(&self) -> String {
        self.state.borrow().current_language_code.clone()
    }

    /// Copy of one section of the current document.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<Value> {
        self.state.borrow().document.section(name).cloned()
    }

    #[must_use]
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn resolver(&self) -> &LanguageResolver {
        &self.resolver
    }

    #[must_use]
    pub fn persistence(&self) -> &PersistenceLayer<S> {
        &self.persistence
    }

    // =========================================================================
    // Language switching
    // =========================================================================

    /// Switches to `code`, falling back to the baseline on any failure.
    ///
    /// The request token is taken here, synchronously, so call order decides
    /// which switch wins even if the futures are polled in another order.
    pub fn switch_language<'a>(
        &'a self,
        code: &'a str,
    ) -> impl Future<Output = SwitchOutcome> + 'a {
        let token = self.issue_token();
        async move {
            let outcome = self.run_switch(token, code).await;
            if outcome.settled() {
                let current = self.current_language_code();
                self.persistence.set_preference(&current);
            }
            outcome
        }
    }

    async fn run_switch(&self, token: u64, code: &str) -> SwitchOutcome {
        let baseline_code = self.resolver.baseline_code();

        let reason = match self.resolver.resolve(code) {
            Ok(locator) => match self.loader.load(locator).await {
                Ok(document) => {
                    if !self.is_latest(token) {
                        log::debug!("event=switch_superseded code={code} token={token}");
                        return SwitchOutcome::Superseded;
                    }
                    self.replace(document, code);
                    return SwitchOutcome::Applied {
                        code: code.to_string(),
                    };
                }
                // The baseline is the last resort; do not try it twice.
                Err(err) if code == baseline_code => {
                    return self.baseline_unavailable(token, code, err);
                }
                Err(err) => Error::ResourceLoad(err),
            },
            Err(err) => err,
        };

        if !self.is_latest(token) {
            log::debug!("event=switch_superseded code={code} token={token}");
            return SwitchOutcome::Superseded;
        }

        log::warn!("event=language_fallback requested={code} reason=\"{reason}\"");
        let baseline_locator: &Locator = self.resolver.baseline_locator();
        match self.loader.load(baseline_locator).await {
            Ok(document) => {
                if !self.is_latest(token) {
                    log::debug!("event=switch_superseded code={code} token={token}");
                    return SwitchOutcome::Superseded;
                }
                self.replace(document, baseline_code);
                SwitchOutcome::FellBack {
                    requested: code.to_string(),
                    reason,
                }
            }
            Err(err) => self.baseline_unavailable(token, code, err),
        }
    }

    /// Keeps the last good document but reports the baseline code.
    fn baseline_unavailable(&self, token: u64, requested: &str, err: LoadError) -> SwitchOutcome {
        if !self.is_latest(token) {
            return SwitchOutcome::Superseded;
        }
        log::error!("event=baseline_unavailable requested={requested} error=\"{err}\"");
        self.state.borrow_mut().current_language_code = self.resolver.baseline_code().to_string();
        SwitchOutcome::BaselineUnavailable {
            requested: requested.to_string(),
            reason: err,
        }
    }

    /// Re-applies the persisted language if it differs from the current one.
    ///
    /// Meant to run once at session start. An absent or unreadable
    /// preference means the baseline. Returns `None` when no switch was
    /// needed.
    pub async fn restore_language_preference(&self) -> Option<SwitchOutcome> {
        let preferred = self
            .persistence
            .get_preference()
            .unwrap_or_else(|| self.resolver.baseline_code().to_string());

        if preferred == self.current_language_code() {
            return None;
        }
        log::debug!("event=preference_restore code={preferred}");
        Some(self.switch_language(&preferred).await)
    }

    // =========================================================================
    // Direct updates
    // =========================================================================

    /// Replaces one top-level section. The language code is untouched.
    pub fn update_section(&self, name: &str, data: Value) {
        self.state.borrow_mut().document.set_section(name, data);
        self.notify_changed();
    }

    /// Shallow-merges `partial` into the current document.
    pub fn update_data(&self, partial: ContentDocument) {
        self.state.borrow_mut().document.merge(partial);
        self.notify_changed();
    }

    /// Replaces the document with the persisted snapshot, if one is stored
    /// and well formed. Returns whether a snapshot was applied.
    ///
    /// This does not notify the change observer: the snapshot came from
    /// storage, writing it back would be a no-op.
    pub fn load_from_storage(&self) -> bool {
        match self.persistence.get_snapshot() {
            Some(document) => {
                self.state.borrow_mut().document = document;
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Change observer
    // =========================================================================

    /// Starts writing a snapshot on every document change.
    ///
    /// Registering again has no effect. Returns `true` on first registration.
    pub fn initialize_watchers(&self) -> bool {
        !self.watching.replace(true)
    }

    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.watching.get()
    }

    fn notify_changed(&self) {
        if !self.watching.get() {
            return;
        }
        let state = self.state.borrow();
        if self.persistence.set_snapshot(&state.document) {
            log::debug!("event=snapshot_saved sections={}", state.document.len());
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn issue_token(&self) -> u64 {
        let token = self.latest_request.get() + 1;
        self.latest_request.set(token);
        token
    }

    fn is_latest(&self, token: u64) -> bool {
        self.latest_request.get() == token
    }

    fn replace(&self, document: ContentDocument, code: &str) {
        {
            let mut state = self.state.borrow_mut();
            state.document = document;
            state.current_language_code = code.to_string();
        }
        self.notify_changed();
    }
}
