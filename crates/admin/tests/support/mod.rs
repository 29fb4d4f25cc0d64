#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use kol_torah_admin::api::ApiError;
use kol_torah_admin::confirm::Confirm;
use kol_torah_admin::models::{
    Rabbi, RabbiCreate, RabbiUpdate, Series, SeriesCreate, SeriesUpdate,
};
use kol_torah_admin::store::RecordStore;
use kol_torah_admin::sync::Synchronizer;
use tokio::sync::Notify;

/// Store operations, for call recording and failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ListRabbis,
    GetRabbi,
    CreateRabbi,
    UpdateRabbi,
    DeleteRabbi,
    ListSeries,
    CreateSeries,
    UpdateSeries,
    DeleteSeries,
}

#[derive(Default)]
struct Tables {
    rabbis: Vec<Rabbi>,
    series: Vec<Series>,
    next_id: i64,
}

/// Backend stand-in with the same cascade and not-found behavior.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    failing: Mutex<HashSet<Op>>,
    calls: Mutex<Vec<Op>>,
    series_gates: Mutex<HashMap<i64, Arc<Notify>>>,
    rabbi_list_gate: Mutex<Option<Arc<Notify>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call to `op` fail with a 500 until [`heal`](Self::heal).
    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn heal(&self, op: Op) {
        self.failing.lock().unwrap().remove(&op);
    }

    pub fn calls(&self) -> Vec<Op> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls().iter().filter(|c| **c == op).count()
    }

    /// Hold series loads for `rabbi_id` until the returned handle is notified.
    pub fn gate_series(&self, rabbi_id: i64) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.series_gates
            .lock()
            .unwrap()
            .insert(rabbi_id, gate.clone());
        gate
    }

    /// Hold the next rabbi-list load until the returned handle is notified.
    /// That load answers with the rows present when it was issued.
    pub fn gate_rabbi_list(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.rabbi_list_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Insert a rabbi directly, bypassing call recording.
    pub fn seed_rabbi(&self, name_english: &str, slug: &str) -> Rabbi {
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let now = Utc::now();
        let rabbi = Rabbi {
            id: tables.next_id,
            name_hebrew: "הרב".into(),
            name_english: name_english.into(),
            slug: slug.into(),
            website_url: None,
            created_at: now,
            updated_at: now,
        };
        tables.rabbis.push(rabbi.clone());
        rabbi
    }

    pub fn seed_series(&self, rabbi_id: i64, name_english: &str, slug: &str) -> Series {
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let now = Utc::now();
        let series = Series {
            id: tables.next_id,
            rabbi_id,
            name_hebrew: "שיעור".into(),
            name_english: name_english.into(),
            slug: slug.into(),
            description_hebrew: None,
            description_english: None,
            website_url: None,
            series_type: "Parsha".into(),
            created_at: now,
            updated_at: now,
        };
        tables.series.push(series.clone());
        series
    }

    pub fn series_count(&self) -> usize {
        self.tables.lock().unwrap().series.len()
    }

    fn enter(&self, op: Op) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(op);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(ApiError::Api {
                status: 500,
                body: "injected failure".into(),
            });
        }
        Ok(())
    }
}

fn rabbi_not_found(id: i64) -> ApiError {
    ApiError::NotFound {
        resource: "Rabbi",
        id,
    }
}

fn series_not_found(id: i64) -> ApiError {
    ApiError::NotFound {
        resource: "Series",
        id,
    }
}

fn duplicate_slug(entity: &str, slug: &str) -> ApiError {
    ApiError::Api {
        status: 400,
        body: format!(r#"{{"detail":"{entity} with slug '{slug}' already exists"}}"#),
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn list_rabbis(&self) -> Result<Vec<Rabbi>, ApiError> {
        self.enter(Op::ListRabbis)?;
        let rabbis = self.tables.lock().unwrap().rabbis.clone();
        let gate = self.rabbi_list_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(rabbis)
    }

    async fn get_rabbi(&self, id: i64) -> Result<Rabbi, ApiError> {
        self.enter(Op::GetRabbi)?;
        let tables = self.tables.lock().unwrap();
        tables
            .rabbis
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| rabbi_not_found(id))
    }

    async fn create_rabbi(&self, payload: &RabbiCreate) -> Result<Rabbi, ApiError> {
        self.enter(Op::CreateRabbi)?;
        let mut tables = self.tables.lock().unwrap();
        if tables.rabbis.iter().any(|r| r.slug == payload.slug) {
            return Err(duplicate_slug("Rabbi", &payload.slug));
        }
        tables.next_id += 1;
        let now = Utc::now();
        let rabbi = Rabbi {
            id: tables.next_id,
            name_hebrew: payload.name_hebrew.clone(),
            name_english: payload.name_english.clone(),
            slug: payload.slug.clone(),
            website_url: payload.website_url.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.rabbis.push(rabbi.clone());
        Ok(rabbi)
    }

    async fn update_rabbi(&self, id: i64, payload: &RabbiUpdate) -> Result<Rabbi, ApiError> {
        self.enter(Op::UpdateRabbi)?;
        let mut tables = self.tables.lock().unwrap();
        let rabbi = tables
            .rabbis
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| rabbi_not_found(id))?;
        if let Some(v) = &payload.name_hebrew {
            rabbi.name_hebrew = v.clone();
        }
        if let Some(v) = &payload.name_english {
            rabbi.name_english = v.clone();
        }
        if let Some(v) = &payload.slug {
            rabbi.slug = v.clone();
        }
        if let Some(v) = &payload.website_url {
            rabbi.website_url = Some(v.clone());
        }
        rabbi.updated_at = Utc::now();
        Ok(rabbi.clone())
    }

    async fn delete_rabbi(&self, id: i64) -> Result<(), ApiError> {
        self.enter(Op::DeleteRabbi)?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.rabbis.len();
        tables.rabbis.retain(|r| r.id != id);
        if tables.rabbis.len() == before {
            return Err(rabbi_not_found(id));
        }
        tables.series.retain(|s| s.rabbi_id != id);
        Ok(())
    }

    async fn list_series_by_rabbi(&self, rabbi_id: i64) -> Result<Vec<Series>, ApiError> {
        self.enter(Op::ListSeries)?;
        let gate = self.series_gates.lock().unwrap().get(&rabbi_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let tables = self.tables.lock().unwrap();
        if !tables.rabbis.iter().any(|r| r.id == rabbi_id) {
            return Err(rabbi_not_found(rabbi_id));
        }
        Ok(tables
            .series
            .iter()
            .filter(|s| s.rabbi_id == rabbi_id)
            .cloned()
            .collect())
    }

    async fn create_series(&self, payload: &SeriesCreate) -> Result<Series, ApiError> {
        self.enter(Op::CreateSeries)?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.rabbis.iter().any(|r| r.id == payload.rabbi_id) {
            return Err(rabbi_not_found(payload.rabbi_id));
        }
        if tables.series.iter().any(|s| s.slug == payload.slug) {
            return Err(duplicate_slug("Series", &payload.slug));
        }
        tables.next_id += 1;
        let now = Utc::now();
        let series = Series {
            id: tables.next_id,
            rabbi_id: payload.rabbi_id,
            name_hebrew: payload.name_hebrew.clone(),
            name_english: payload.name_english.clone(),
            slug: payload.slug.clone(),
            description_hebrew: payload.description_hebrew.clone(),
            description_english: payload.description_english.clone(),
            website_url: payload.website_url.clone(),
            series_type: payload.series_type.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.series.push(series.clone());
        Ok(series)
    }

    async fn update_series(&self, id: i64, payload: &SeriesUpdate) -> Result<Series, ApiError> {
        self.enter(Op::UpdateSeries)?;
        let mut tables = self.tables.lock().unwrap();
        let series = tables
            .series
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| series_not_found(id))?;
        if let Some(v) = payload.rabbi_id {
            series.rabbi_id = v;
        }
        if let Some(v) = &payload.name_hebrew {
            series.name_hebrew = v.clone();
        }
        if let Some(v) = &payload.name_english {
            series.name_english = v.clone();
        }
        if let Some(v) = &payload.slug {
            series.slug = v.clone();
        }
        if let Some(v) = &payload.series_type {
            series.series_type = v.clone();
        }
        series.updated_at = Utc::now();
        Ok(series.clone())
    }

    async fn delete_series(&self, id: i64) -> Result<(), ApiError> {
        self.enter(Op::DeleteSeries)?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.series.len();
        tables.series.retain(|s| s.id != id);
        if tables.series.len() == before {
            return Err(series_not_found(id));
        }
        Ok(())
    }
}

/// Confirmation stub with a fixed answer. Clones share the prompt log.
#[derive(Clone)]
pub struct ScriptedConfirm {
    answer: bool,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConfirm {
    pub fn yes() -> Self {
        Self {
            answer: true,
            prompts: Arc::default(),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            prompts: Arc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}

pub type TestSync = Synchronizer<InMemoryStore, ScriptedConfirm>;

pub fn synchronizer(store: InMemoryStore) -> TestSync {
    Synchronizer::new(store, ScriptedConfirm::yes())
}

pub fn rabbi_create(name_english: &str, slug: &str) -> RabbiCreate {
    RabbiCreate {
        name_hebrew: "א".into(),
        name_english: name_english.into(),
        slug: slug.into(),
        website_url: None,
    }
}

pub fn series_create(rabbi_id: i64, name_english: &str, slug: &str) -> SeriesCreate {
    SeriesCreate {
        rabbi_id,
        name_hebrew: "שיחות".into(),
        name_english: name_english.into(),
        slug: slug.into(),
        description_hebrew: None,
        description_english: None,
        website_url: None,
        series_type: "Parsha".into(),
    }
}
