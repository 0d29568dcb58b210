//! Project selection and series-visibility state.
//!
//! [`SelectionManager`] owns the currently selected project id and the two
//! series-visibility flags, and computes the [`RenderableDataset`] handed to
//! the chart renderer. Visibility is global rather than per-project, so it
//! carries over unchanged when the selected project changes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{FolioError, Result};
use crate::project::ProjectSeries;
use crate::store::DatasetStore;

/// Series name for model predictions.
pub const SERIES_PREDICTED: &str = "predicted";
/// Series name for observed values.
pub const SERIES_ACTUAL: &str = "actual";

/// The two data series every project carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Predicted,
    Actual,
}

impl Series {
    /// Both series, in render order.
    pub const ALL: [Series; 2] = [Series::Predicted, Series::Actual];

    pub const fn as_str(self) -> &'static str {
        match self {
            Series::Predicted => SERIES_PREDICTED,
            Series::Actual => SERIES_ACTUAL,
        }
    }
}

impl FromStr for Series {
    type Err = FolioError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            SERIES_PREDICTED => Ok(Series::Predicted),
            SERIES_ACTUAL => Ok(Series::Actual),
            other => Err(FolioError::UnknownSeries(other.to_string())),
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility flags for the two series. Both start visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityState {
    pub predicted: bool,
    pub actual: bool,
}

impl Default for VisibilityState {
    fn default() -> Self {
        VisibilityState {
            predicted: true,
            actual: true,
        }
    }
}

impl VisibilityState {
    pub fn is_visible(&self, series: Series) -> bool {
        match series {
            Series::Predicted => self.predicted,
            Series::Actual => self.actual,
        }
    }

    /// Flip one flag and return its new value.
    fn toggle(&mut self, series: Series) -> bool {
        match series {
            Series::Predicted => {
                self.predicted = !self.predicted;
                self.predicted
            }
            Series::Actual => {
                self.actual = !self.actual;
                self.actual
            }
        }
    }
}

/// One named series as the chart renderer consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesView {
    pub name: &'static str,
    pub values: Vec<f64>,
    pub visible: bool,
}

/// Everything the chart renderer needs to draw one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderableDataset {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<SeriesView>,
}

impl RenderableDataset {
    fn for_project(project: &ProjectSeries, visibility: VisibilityState) -> Self {
        RenderableDataset {
            title: project.title.clone(),
            labels: project.labels.clone(),
            series: vec![
                SeriesView {
                    name: Series::Predicted.as_str(),
                    values: project.predicted.clone(),
                    visible: visibility.predicted,
                },
                SeriesView {
                    name: Series::Actual.as_str(),
                    values: project.actual.clone(),
                    visible: visibility.actual,
                },
            ],
        }
    }

    /// Look up a series view by name.
    pub fn series_named(&self, name: &str) -> Option<&SeriesView> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Owns the selected project id and the series visibility flags.
///
/// The selected id always refers to a project present in the store: the
/// constructor and [`select_project`](Self::select_project) both validate
/// before mutating, and the store itself is read-only.
#[derive(Debug, Clone)]
pub struct SelectionManager {
    store: DatasetStore,
    current_project_id: String,
    visibility: VisibilityState,
}

impl SelectionManager {
    /// Create a manager selecting `default_project_id`, with both series
    /// visible.
    pub fn new(store: DatasetStore, default_project_id: &str) -> Result<Self> {
        if !store.contains(default_project_id) {
            return Err(FolioError::UnknownProject(default_project_id.to_string()));
        }
        Ok(SelectionManager {
            store,
            current_project_id: default_project_id.to_string(),
            visibility: VisibilityState::default(),
        })
    }

    /// Switch the selection to `project_id` and return its renderable view.
    ///
    /// Unknown ids fail with [`FolioError::UnknownProject`] and leave the
    /// selection untouched. Reselecting the current project is not an error
    /// and still returns a fresh view.
    pub fn select_project(&mut self, project_id: &str) -> Result<RenderableDataset> {
        let project = self
            .store
            .get(project_id)
            .ok_or_else(|| FolioError::UnknownProject(project_id.to_string()))?;
        let view = RenderableDataset::for_project(project, self.visibility);
        self.current_project_id = project_id.to_string();
        Ok(view)
    }

    /// Flip visibility for the named series and return its new value.
    ///
    /// Names other than `"predicted"` or `"actual"` fail with
    /// [`FolioError::UnknownSeries`] and leave both flags untouched.
    pub fn toggle_series(&mut self, series_name: &str) -> Result<bool> {
        let series: Series = series_name.parse()?;
        Ok(self.toggle(series))
    }

    /// Typed variant of [`toggle_series`](Self::toggle_series).
    pub fn toggle(&mut self, series: Series) -> bool {
        self.visibility.toggle(series)
    }

    /// Recompute the renderable view for the current selection. Pure read.
    pub fn current_view(&self) -> RenderableDataset {
        let project = self
            .store
            .get(&self.current_project_id)
            .expect("current project id always exists in the store");
        RenderableDataset::for_project(project, self.visibility)
    }

    pub fn current_project_id(&self) -> &str {
        &self.current_project_id
    }

    pub fn visibility(&self) -> VisibilityState {
        self.visibility
    }

    /// All projects in the backing store, for selector controls.
    pub fn projects(&self) -> &[ProjectSeries] {
        self.store.projects()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SelectionManager {
        let store = DatasetStore::embedded().unwrap();
        SelectionManager::new(store, "biodiversity").unwrap()
    }

    #[test]
    fn initial_view_matches_store_record() {
        let m = manager();
        let view = m.current_view();
        assert_eq!(view.title, "Species Conservation Accuracy (%)");
        assert_eq!(view.labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);

        let predicted = view.series_named("predicted").unwrap();
        assert_eq!(predicted.values, [85.0, 87.0, 89.0, 91.0, 88.0, 92.0]);
        assert!(predicted.visible);

        let actual = view.series_named("actual").unwrap();
        assert_eq!(actual.values, [82.0, 85.0, 87.0, 89.0, 86.0, 90.0]);
        assert!(actual.visible);
    }

    #[test]
    fn select_returns_exact_record_for_every_project() {
        let mut m = manager();
        let ids: Vec<String> = m.projects().iter().map(|p| p.id.clone()).collect();
        for id in ids {
            let view = m.select_project(&id).unwrap();
            assert_eq!(m.current_project_id(), id);
            assert_eq!(view, m.current_view());

            let store = DatasetStore::embedded().unwrap();
            let record = store.get(&id).unwrap();
            assert_eq!(view.title, record.title);
            assert_eq!(view.labels, record.labels);
            assert_eq!(view.series_named("predicted").unwrap().values, record.predicted);
            assert_eq!(view.series_named("actual").unwrap().values, record.actual);
        }
    }

    #[test]
    fn select_unknown_project_leaves_state_unchanged() {
        let mut m = manager();
        let err = m.select_project("snowpack").unwrap_err();
        assert_eq!(err, FolioError::UnknownProject("snowpack".to_string()));
        assert_eq!(m.current_project_id(), "biodiversity");
    }

    #[test]
    fn reselecting_current_project_is_not_an_error() {
        let mut m = manager();
        let view = m.select_project("biodiversity").unwrap();
        assert_eq!(view.title, "Species Conservation Accuracy (%)");
        assert_eq!(m.current_project_id(), "biodiversity");
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut m = manager();
        assert!(!m.toggle_series("predicted").unwrap());
        assert!(m.toggle_series("predicted").unwrap());
        assert_eq!(m.visibility(), VisibilityState::default());
    }

    #[test]
    fn toggle_result_matches_current_view() {
        let mut m = manager();
        let v = m.toggle_series("actual").unwrap();
        assert_eq!(m.current_view().series_named("actual").unwrap().visible, v);
        assert!(
            m.current_view().series_named("predicted").unwrap().visible,
            "Toggling one series must not affect the other"
        );
    }

    #[test]
    fn visibility_survives_project_switch() {
        let mut m = manager();
        m.toggle_series("actual").unwrap();
        m.select_project("forest-fires").unwrap();
        let view = m.current_view();
        assert!(!view.series_named("actual").unwrap().visible);
        assert!(view.series_named("predicted").unwrap().visible);
    }

    #[test]
    fn toggle_unknown_series_is_rejected() {
        let mut m = manager();
        let err = m.toggle_series("residuals").unwrap_err();
        assert_eq!(err, FolioError::UnknownSeries("residuals".to_string()));
        assert_eq!(m.visibility(), VisibilityState::default());
    }

    #[test]
    fn new_rejects_unknown_default_project() {
        let store = DatasetStore::embedded().unwrap();
        assert!(SelectionManager::new(store, "snowpack").is_err());
    }

    #[test]
    fn series_names_parse_round_trip() {
        assert_eq!("predicted".parse::<Series>().unwrap(), Series::Predicted);
        assert_eq!("actual".parse::<Series>().unwrap(), Series::Actual);
        assert_eq!(Series::Predicted.to_string(), "predicted");
        assert!("Predicted".parse::<Series>().is_err(), "Names are case sensitive");
    }

    #[test]
    fn renderable_dataset_serializes_for_the_renderer() {
        let m = manager();
        let json = serde_json::to_value(m.current_view()).unwrap();
        assert_eq!(json["title"], "Species Conservation Accuracy (%)");
        assert_eq!(json["labels"][0], "Jan");
        assert_eq!(json["series"][0]["name"], "predicted");
        assert_eq!(json["series"][0]["visible"], true);
        assert_eq!(json["series"][1]["name"], "actual");
        assert_eq!(json["series"][1]["values"][5], 90.0);
    }
}
