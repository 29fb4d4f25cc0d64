//! Create/edit dialog state for both entity types.
//!
//! A form is blank for create or pre-filled from a record for edit. It only
//! checks that required fields are non-blank; everything else is left to
//! the backend. Blank optional fields are sent as absent.

use kol_torah_core::slug::slugify;
use kol_torah_core::types::DbId;

use crate::models::{Rabbi, RabbiCreate, RabbiUpdate, Series, SeriesCreate, SeriesUpdate};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Rabbi
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RabbiForm {
    editing: Option<DbId>,
    pub name_hebrew: String,
    pub name_english: String,
    pub slug: String,
    pub website_url: String,
}

impl RabbiForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(rabbi: &Rabbi) -> Self {
        Self {
            editing: Some(rabbi.id),
            name_hebrew: rabbi.name_hebrew.clone(),
            name_english: rabbi.name_english.clone(),
            slug: rabbi.slug.clone(),
            website_url: rabbi.website_url.clone().unwrap_or_default(),
        }
    }

    /// Id of the record being edited, `None` when creating.
    pub fn editing(&self) -> Option<DbId> {
        self.editing
    }

    pub fn title(&self) -> &'static str {
        match self.editing {
            Some(_) => "Edit Rabbi",
            None => "Create New Rabbi",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.editing {
            Some(_) => "Update",
            None => "Create",
        }
    }

    /// Slug derived from the English name.
    pub fn suggest_slug(&self) -> String {
        slugify(&self.name_english)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        require("name_hebrew", &self.name_hebrew)?;
        require("name_english", &self.name_english)?;
        require("slug", &self.slug)
    }

    pub fn to_create(&self) -> Result<RabbiCreate, FormError> {
        self.validate()?;
        Ok(RabbiCreate {
            name_hebrew: self.name_hebrew.trim().to_string(),
            name_english: self.name_english.trim().to_string(),
            slug: self.slug.trim().to_string(),
            website_url: optional(&self.website_url),
        })
    }

    /// Every field the dialog shows is sent; blank optional fields are omitted.
    pub fn to_update(&self) -> Result<RabbiUpdate, FormError> {
        let create = self.to_create()?;
        Ok(RabbiUpdate {
            name_hebrew: Some(create.name_hebrew),
            name_english: Some(create.name_english),
            slug: Some(create.slug),
            website_url: create.website_url,
        })
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// Series dialog state. Always bound to the rabbi that owns the series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesForm {
    editing: Option<DbId>,
    pub rabbi_id: DbId,
    pub name_hebrew: String,
    pub name_english: String,
    /// Left blank, the slug is derived from `name_english` on submit.
    pub slug: String,
    pub description_hebrew: String,
    pub description_english: String,
    pub website_url: String,
    pub series_type: String,
}

impl SeriesForm {
    pub fn new(rabbi_id: DbId) -> Self {
        Self {
            editing: None,
            rabbi_id,
            name_hebrew: String::new(),
            name_english: String::new(),
            slug: String::new(),
            description_hebrew: String::new(),
            description_english: String::new(),
            website_url: String::new(),
            series_type: String::new(),
        }
    }

    pub fn edit(series: &Series) -> Self {
        Self {
            editing: Some(series.id),
            rabbi_id: series.rabbi_id,
            name_hebrew: series.name_hebrew.clone(),
            name_english: series.name_english.clone(),
            slug: series.slug.clone(),
            description_hebrew: series.description_hebrew.clone().unwrap_or_default(),
            description_english: series.description_english.clone().unwrap_or_default(),
            website_url: series.website_url.clone().unwrap_or_default(),
            series_type: series.series_type.clone(),
        }
    }

    pub fn editing(&self) -> Option<DbId> {
        self.editing
    }

    pub fn title(&self) -> &'static str {
        match self.editing {
            Some(_) => "Edit Series",
            None => "Create New Series",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.editing {
            Some(_) => "Update",
            None => "Create",
        }
    }

    pub fn suggest_slug(&self) -> String {
        slugify(&self.name_english)
    }

    fn effective_slug(&self) -> String {
        match optional(&self.slug) {
            Some(slug) => slug,
            None => self.suggest_slug(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        require("name_hebrew", &self.name_hebrew)?;
        require("name_english", &self.name_english)?;
        require("type", &self.series_type)?;
        require("slug", &self.effective_slug())
    }

    pub fn to_create(&self) -> Result<SeriesCreate, FormError> {
        self.validate()?;
        Ok(SeriesCreate {
            rabbi_id: self.rabbi_id,
            name_hebrew: self.name_hebrew.trim().to_string(),
            name_english: self.name_english.trim().to_string(),
            slug: self.effective_slug(),
            description_hebrew: optional(&self.description_hebrew),
            description_english: optional(&self.description_english),
            website_url: optional(&self.website_url),
            series_type: self.series_type.trim().to_string(),
        })
    }

    pub fn to_update(&self) -> Result<SeriesUpdate, FormError> {
        let create = self.to_create()?;
        Ok(SeriesUpdate {
            rabbi_id: Some(create.rabbi_id),
            name_hebrew: Some(create.name_hebrew),
            name_english: Some(create.name_english),
            slug: Some(create.slug),
            description_hebrew: create.description_hebrew,
            description_english: create.description_english,
            website_url: create.website_url,
            series_type: Some(create.series_type),
        })
    }
}
