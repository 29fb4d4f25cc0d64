use async_trait::async_trait;

use crate::models::{Rabbi, Series};

/// Asks the operator to confirm a destructive action.
///
/// Provided by the presentation layer. Returning `false` aborts the action
/// before any request is sent.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

pub fn delete_rabbi_prompt(rabbi: &Rabbi) -> String {
    format!(
        "Delete rabbi \"{}\" and all their series?",
        rabbi.name_english
    )
}

pub fn delete_series_prompt(series: &Series) -> String {
    format!("Delete series \"{}\"?", series.name_english)
}
