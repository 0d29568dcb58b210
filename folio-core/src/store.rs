//! Dataset store backed by an embedded CSV fixture.
//!
//! The CSV is in long format, one row per project-month, and the loader
//! groups rows into [`ProjectSeries`] records. Project order follows first
//! appearance in the file; point order follows row order.
//!
//! # CSV Format
//!
//! With headers: `ID,TITLE,MONTH,PREDICTED,ACTUAL`
//!
//! ```text
//! ID,TITLE,MONTH,PREDICTED,ACTUAL
//! biodiversity,Species Conservation Accuracy (%),Jan,85,82
//! ```

use crate::project::ProjectSeries;

/// Embedded CSV data for all portfolio projects.
pub static PROJECTS_CSV: &str = include_str!("../../fixtures/projects.csv");

/// Read-only collection of project prediction series.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    projects: Vec<ProjectSeries>,
}

impl DatasetStore {
    /// Build the store from the embedded fixture CSV.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_csv(PROJECTS_CSV)
    }

    /// Parse long-format CSV data into a store.
    ///
    /// Rows with an empty id or month, or with non-numeric PREDICTED or
    /// ACTUAL values, are skipped. An empty result or a project whose
    /// series lengths disagree is an error.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut projects: Vec<ProjectSeries> = Vec::new();
        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let id = r.get(0).unwrap_or("").trim();
            let title = r.get(1).unwrap_or("").trim();
            let month = r.get(2).unwrap_or("").trim();
            let predicted_str = r.get(3).unwrap_or("").trim();
            let actual_str = r.get(4).unwrap_or("").trim();

            if id.is_empty() || month.is_empty() {
                skipped += 1;
                continue;
            }

            // Skip non-numeric values
            let predicted: f64 = match predicted_str.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let actual: f64 = match actual_str.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };

            match projects.iter_mut().find(|p| p.id == id) {
                Some(project) => {
                    project.labels.push(month.to_string());
                    project.predicted.push(predicted);
                    project.actual.push(actual);
                }
                None => projects.push(ProjectSeries {
                    id: id.to_string(),
                    title: title.to_string(),
                    labels: vec![month.to_string()],
                    predicted: vec![predicted],
                    actual: vec![actual],
                }),
            }
            count += 1;
        }

        if projects.is_empty() {
            anyhow::bail!("no projects parsed from csv data");
        }
        for project in &projects {
            if !project.is_aligned() {
                anyhow::bail!("project '{}' has misaligned series lengths", project.id);
            }
        }

        log::info!(
            "[Folio Debug] store: Loaded {} projects from {} rows, skipped {} invalid",
            projects.len(),
            count,
            skipped
        );
        Ok(DatasetStore { projects })
    }

    /// Look up a project by id.
    pub fn get(&self, id: &str) -> Option<&ProjectSeries> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// True when the store holds a project with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All projects, in CSV first-appearance order.
    pub fn projects(&self) -> &[ProjectSeries] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixture_loads_all_projects() {
        let store = DatasetStore::embedded().unwrap();
        assert_eq!(store.len(), 5);

        let ids: Vec<&str> = store.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "biodiversity",
                "forest-fires",
                "trader-sentiment",
                "analytics-case",
                "car-price"
            ],
            "Projects should keep CSV first-appearance order"
        );
    }

    #[test]
    fn embedded_biodiversity_matches_fixture() {
        let store = DatasetStore::embedded().unwrap();
        let p = store.get("biodiversity").unwrap();
        assert_eq!(p.title, "Species Conservation Accuracy (%)");
        assert_eq!(p.labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(p.predicted, [85.0, 87.0, 89.0, 91.0, 88.0, 92.0]);
        assert_eq!(p.actual, [82.0, 85.0, 87.0, 89.0, 86.0, 90.0]);
        assert!(p.is_aligned());
    }

    #[test]
    fn from_csv_skips_invalid_rows() {
        let csv = "\
ID,TITLE,MONTH,PREDICTED,ACTUAL
demo,Demo (%),Jan,80,78
demo,Demo (%),Feb,n/a,79
demo,Demo (%),,81,79
demo,Demo (%),Mar,82,80
";
        let store = DatasetStore::from_csv(csv).unwrap();
        let p = store.get("demo").unwrap();
        assert_eq!(
            p.labels,
            ["Jan", "Mar"],
            "Rows with non-numeric values or empty months should be skipped"
        );
        assert_eq!(p.predicted, [80.0, 82.0]);
        assert_eq!(p.actual, [78.0, 80.0]);
    }

    #[test]
    fn from_csv_rejects_empty_data() {
        let csv = "ID,TITLE,MONTH,PREDICTED,ACTUAL\n";
        assert!(DatasetStore::from_csv(csv).is_err());
    }

    #[test]
    fn contains_and_get_agree() {
        let store = DatasetStore::embedded().unwrap();
        assert!(store.contains("car-price"));
        assert!(!store.contains("snow-depth"));
        assert!(store.get("snow-depth").is_none());
        assert!(!store.is_empty());
    }
}
