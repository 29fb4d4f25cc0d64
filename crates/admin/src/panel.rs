use crate::models::Series;

/// What the series side of the screen shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesPanel<'a> {
    /// No rabbi is selected.
    NoSelection,
    /// A fetch is outstanding.
    Loading,
    /// The selected rabbi has no series.
    Empty,
    Populated(&'a [Series]),
}

impl SeriesPanel<'_> {
    /// Placeholder text for the non-list states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SeriesPanel::NoSelection => Some("Select a rabbi to view their series"),
            SeriesPanel::Loading => Some("Loading..."),
            SeriesPanel::Empty => Some("No series yet for this rabbi"),
            SeriesPanel::Populated(_) => None,
        }
    }
}
