//! View-state synchronizer.
//!
//! [`Synchronizer`] owns the in-memory mirror of the backend the admin screen
//! renders from: the rabbi list, the selected rabbi, and that rabbi's series.
//! Every mutation is followed by a reload of the collection it touched:
//!
//! | Action                   | Reload                                        |
//! |--------------------------|-----------------------------------------------|
//! | create/update/delete rabbi | rabbi list (+ selected rabbi on update)     |
//! | delete selected rabbi    | selection and series cleared, rabbi list     |
//! | create/update/delete series | series of the selected rabbi, if any      |
//!
//! Loads are tagged with a generation number. A response whose generation
//! has since been superseded is discarded, so the last *issued* load wins
//! regardless of the order responses arrive in.
//!
//! Failures never propagate: they are logged and stored as a single
//! human-readable message that stays until [`Synchronizer::dismiss_error`]
//! or the next failure replaces it. State is left untouched on failure.
//!
//! State is published through a [`tokio::sync::watch`] channel; a
//! presentation layer can [`subscribe`](Synchronizer::subscribe) to redraw
//! on every change.

use kol_torah_core::types::DbId;
use tokio::sync::watch;

use crate::api::ApiError;
use crate::confirm::{delete_rabbi_prompt, delete_series_prompt, Confirm};
use crate::forms::{RabbiForm, SeriesForm};
use crate::models::{Rabbi, RabbiCreate, RabbiUpdate, Series, SeriesCreate, SeriesUpdate};
use crate::panel::SeriesPanel;
use crate::store::RecordStore;

pub const LOAD_RABBIS_FAILED: &str = "Failed to load rabbis";
pub const LOAD_SERIES_FAILED: &str = "Failed to load series";
pub const CREATE_RABBI_FAILED: &str = "Failed to create rabbi";
pub const UPDATE_RABBI_FAILED: &str = "Failed to update rabbi";
pub const DELETE_RABBI_FAILED: &str = "Failed to delete rabbi";
pub const CREATE_SERIES_FAILED: &str = "Failed to create series";
pub const UPDATE_SERIES_FAILED: &str = "Failed to update series";
pub const DELETE_SERIES_FAILED: &str = "Failed to delete series";
pub const NO_RABBI_SELECTED: &str = "Select a rabbi before adding a series";

/// Snapshot of everything the admin screen shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    rabbis: Vec<Rabbi>,
    selected: Option<Rabbi>,
    series: Vec<Series>,
    error: Option<String>,
    in_flight: usize,
    rabbis_generation: u64,
    series_generation: u64,
}

impl ViewState {
    pub fn rabbis(&self) -> &[Rabbi] {
        &self.rabbis
    }

    pub fn selected(&self) -> Option<&Rabbi> {
        self.selected.as_ref()
    }

    /// Series of the selected rabbi. Always empty when nothing is selected.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while any fetch is outstanding.
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    /// True while the first rabbi list is still being fetched.
    pub fn rabbi_list_loading(&self) -> bool {
        self.loading() && self.rabbis.is_empty()
    }

    pub fn is_selected(&self, id: DbId) -> bool {
        self.selected.as_ref().is_some_and(|r| r.id == id)
    }

    pub fn can_add_series(&self) -> bool {
        self.selected.is_some()
    }

    pub fn series_heading(&self) -> String {
        match &self.selected {
            Some(rabbi) => format!("Series by {}", rabbi.name_english),
            None => "Series".to_string(),
        }
    }

    pub fn series_panel(&self) -> SeriesPanel<'_> {
        if self.selected.is_none() {
            SeriesPanel::NoSelection
        } else if self.loading() {
            SeriesPanel::Loading
        } else if self.series.is_empty() {
            SeriesPanel::Empty
        } else {
            SeriesPanel::Populated(&self.series)
        }
    }
}

/// The two independently sequenced loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Load {
    Rabbis,
    Series,
}

impl ViewState {
    fn generation(&self, load: Load) -> u64 {
        match load {
            Load::Rabbis => self.rabbis_generation,
            Load::Series => self.series_generation,
        }
    }

    fn generation_mut(&mut self, load: Load) -> &mut u64 {
        match load {
            Load::Rabbis => &mut self.rabbis_generation,
            Load::Series => &mut self.series_generation,
        }
    }
}

/// How an action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The action ran and its result was applied.
    Applied,
    /// The response arrived after a newer load was issued and was dropped.
    Stale,
    /// The operator declined the confirmation; nothing was sent.
    Cancelled,
    /// Refused locally before any request; the error message is set.
    Rejected,
    /// The backend call failed; the error message is set.
    Failed,
}

/// Decrements the in-flight counter when dropped.
struct InFlight<'a> {
    state: &'a watch::Sender<ViewState>,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a watch::Sender<ViewState>) -> Self {
        state.send_modify(|s| s.in_flight += 1);
        Self { state }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state
            .send_modify(|s| s.in_flight = s.in_flight.saturating_sub(1));
    }
}

/// Keeps [`ViewState`] consistent with the backend.
pub struct Synchronizer<S, C> {
    store: S,
    confirm: C,
    state: watch::Sender<ViewState>,
}

impl<S: RecordStore, C: Confirm> Synchronizer<S, C> {
    pub fn new(store: S, confirm: C) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            store,
            confirm,
            state,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receive every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn dismiss_error(&self) {
        self.state.send_if_modified(|s| s.error.take().is_some());
    }

    /// Initial load of the rabbi list.
    pub async fn mount(&self) -> Outcome {
        self.load_rabbis().await
    }

    // ---- loads ----

    pub async fn load_rabbis(&self) -> Outcome {
        let generation = self.next_generation(Load::Rabbis);
        let result = {
            let _in_flight = InFlight::start(&self.state);
            self.store.list_rabbis().await
        };

        match result {
            Ok(rabbis) => self.apply_if_current(Load::Rabbis, generation, |s| s.rabbis = rabbis),
            Err(err) if self.is_current(Load::Rabbis, generation) => {
                self.fail(LOAD_RABBIS_FAILED, &err)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Dropping failure of superseded rabbi load");
                Outcome::Stale
            }
        }
    }

    /// Change the selection. Clearing it empties the series list without a
    /// request; selecting a rabbi loads its series.
    pub async fn select_rabbi(&self, rabbi: Option<Rabbi>) -> Outcome {
        let rabbi_id = rabbi.as_ref().map(|r| r.id);
        self.state.send_modify(|s| {
            s.selected = rabbi;
            s.series.clear();
            s.series_generation += 1;
        });

        match rabbi_id {
            Some(id) => self.fetch_series(id).await,
            None => Outcome::Applied,
        }
    }

    /// Reload the series of the selected rabbi. No-op without a selection.
    pub async fn reload_series(&self) -> Outcome {
        let selected = self.state.borrow().selected.as_ref().map(|r| r.id);
        match selected {
            Some(id) => {
                self.next_generation(Load::Series);
                self.fetch_series(id).await
            }
            None => Outcome::Applied,
        }
    }

    async fn fetch_series(&self, rabbi_id: DbId) -> Outcome {
        let generation = self.state.borrow().generation(Load::Series);
        let result = {
            let _in_flight = InFlight::start(&self.state);
            self.store.list_series_by_rabbi(rabbi_id).await
        };

        match result {
            Ok(series) => self.apply_if_current(Load::Series, generation, |s| s.series = series),
            Err(err) if self.is_current(Load::Series, generation) => {
                self.fail(LOAD_SERIES_FAILED, &err)
            }
            Err(err) => {
                tracing::debug!(rabbi_id, error = %err, "Dropping failure of superseded series load");
                Outcome::Stale
            }
        }
    }

    // ---- rabbi mutations ----

    pub async fn create_rabbi(&self, payload: &RabbiCreate) -> Outcome {
        match self.store.create_rabbi(payload).await {
            Ok(rabbi) => {
                tracing::info!(rabbi_id = rabbi.id, slug = %rabbi.slug, "Rabbi created");
                let _ = self.load_rabbis().await;
                Outcome::Applied
            }
            Err(err) => self.fail(CREATE_RABBI_FAILED, &err),
        }
    }

    /// Update a rabbi. If it is the selected one, the selection is refreshed
    /// from the backend so the header shows the new values.
    pub async fn update_rabbi(&self, id: DbId, payload: &RabbiUpdate) -> Outcome {
        if let Err(err) = self.store.update_rabbi(id, payload).await {
            return self.fail(UPDATE_RABBI_FAILED, &err);
        }
        tracing::info!(rabbi_id = id, "Rabbi updated");
        let _ = self.load_rabbis().await;

        if !self.state.borrow().is_selected(id) {
            return Outcome::Applied;
        }
        let result = {
            let _in_flight = InFlight::start(&self.state);
            self.store.get_rabbi(id).await
        };
        match result {
            Ok(rabbi) => {
                self.state.send_if_modified(|s| {
                    if !s.is_selected(id) {
                        return false;
                    }
                    s.selected = Some(rabbi);
                    true
                });
                Outcome::Applied
            }
            Err(err) => self.fail(UPDATE_RABBI_FAILED, &err),
        }
    }

    /// Delete a rabbi and, on the backend, all of its series. Asks for
    /// confirmation first.
    pub async fn delete_rabbi(&self, rabbi: &Rabbi) -> Outcome {
        if !self.confirm.confirm(&delete_rabbi_prompt(rabbi)).await {
            return Outcome::Cancelled;
        }
        if let Err(err) = self.store.delete_rabbi(rabbi.id).await {
            return self.fail(DELETE_RABBI_FAILED, &err);
        }
        tracing::info!(rabbi_id = rabbi.id, "Rabbi deleted");

        if self.state.borrow().is_selected(rabbi.id) {
            let _ = self.select_rabbi(None).await;
        }
        let _ = self.load_rabbis().await;
        Outcome::Applied
    }

    // ---- series mutations ----

    /// Create a series. Refused without a selected rabbi.
    pub async fn create_series(&self, payload: &SeriesCreate) -> Outcome {
        if !self.state.borrow().can_add_series() {
            return self.reject(NO_RABBI_SELECTED);
        }
        match self.store.create_series(payload).await {
            Ok(series) => {
                tracing::info!(series_id = series.id, rabbi_id = series.rabbi_id, "Series created");
                let _ = self.reload_series().await;
                Outcome::Applied
            }
            Err(err) => self.fail(CREATE_SERIES_FAILED, &err),
        }
    }

    pub async fn update_series(&self, id: DbId, payload: &SeriesUpdate) -> Outcome {
        if let Err(err) = self.store.update_series(id, payload).await {
            return self.fail(UPDATE_SERIES_FAILED, &err);
        }
        tracing::info!(series_id = id, "Series updated");
        let _ = self.reload_series().await;
        Outcome::Applied
    }

    pub async fn delete_series(&self, series: &Series) -> Outcome {
        if !self.confirm.confirm(&delete_series_prompt(series)).await {
            return Outcome::Cancelled;
        }
        if let Err(err) = self.store.delete_series(series.id).await {
            return self.fail(DELETE_SERIES_FAILED, &err);
        }
        tracing::info!(series_id = series.id, "Series deleted");
        let _ = self.reload_series().await;
        Outcome::Applied
    }

    // ---- forms ----

    /// Submit a rabbi dialog: update when editing, create otherwise.
    pub async fn submit_rabbi(&self, form: &RabbiForm) -> Outcome {
        match form.editing() {
            Some(id) => match form.to_update() {
                Ok(payload) => self.update_rabbi(id, &payload).await,
                Err(err) => self.reject(&err.to_string()),
            },
            None => match form.to_create() {
                Ok(payload) => self.create_rabbi(&payload).await,
                Err(err) => self.reject(&err.to_string()),
            },
        }
    }

    pub async fn submit_series(&self, form: &SeriesForm) -> Outcome {
        match form.editing() {
            Some(id) => match form.to_update() {
                Ok(payload) => self.update_series(id, &payload).await,
                Err(err) => self.reject(&err.to_string()),
            },
            None => match form.to_create() {
                Ok(payload) => self.create_series(&payload).await,
                Err(err) => self.reject(&err.to_string()),
            },
        }
    }

    /// Blank series dialog bound to the selected rabbi.
    pub fn new_series_form(&self) -> Option<SeriesForm> {
        self.state
            .borrow()
            .selected
            .as_ref()
            .map(|r| SeriesForm::new(r.id))
    }

    // ---- private helpers ----

    fn next_generation(&self, load: Load) -> u64 {
        let mut generation = 0;
        self.state.send_if_modified(|s| {
            let counter = s.generation_mut(load);
            *counter += 1;
            generation = *counter;
            false
        });
        generation
    }

    fn is_current(&self, load: Load, generation: u64) -> bool {
        self.state.borrow().generation(load) == generation
    }

    fn apply_if_current(
        &self,
        load: Load,
        generation: u64,
        apply: impl FnOnce(&mut ViewState),
    ) -> Outcome {
        let applied = self.state.send_if_modified(|s| {
            if s.generation(load) != generation {
                return false;
            }
            apply(s);
            true
        });
        if applied {
            Outcome::Applied
        } else {
            tracing::debug!(?load, generation, "Dropping superseded load result");
            Outcome::Stale
        }
    }

    fn fail(&self, message: &'static str, err: &ApiError) -> Outcome {
        tracing::error!(error = %err, "{message}");
        self.set_error(message);
        Outcome::Failed
    }

    fn reject(&self, message: &str) -> Outcome {
        tracing::warn!("{message}");
        self.set_error(message);
        Outcome::Rejected
    }

    fn set_error(&self, message: &str) {
        self.state.send_modify(|s| s.error = Some(message.to_string()));
    }
}
