//! Project time-series records.

/// One portfolio project with its monthly predicted/actual metric series.
///
/// `labels`, `predicted`, and `actual` are index-aligned: position `i` of
/// each describes the same month. The dataset loader rejects records where
/// the three lengths disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSeries {
    /// Unique key into the dataset store, e.g. `"forest-fires"`
    pub id: String,
    /// Chart title shown while this project is selected
    pub title: String,
    /// Category axis labels (month names)
    pub labels: Vec<String>,
    /// Model-predicted metric values, one per label
    pub predicted: Vec<f64>,
    /// Observed metric values, one per label
    pub actual: Vec<f64>,
}

impl ProjectSeries {
    /// True when all three sequences have the same length.
    pub fn is_aligned(&self) -> bool {
        self.predicted.len() == self.labels.len() && self.actual.len() == self.labels.len()
    }

    /// Number of points per series.
    pub fn point_count(&self) -> usize {
        self.labels.len()
    }

    /// Human-readable name derived from the id: `"forest-fires"` becomes
    /// `"Forest Fires"`. Used for the project selector buttons.
    pub fn display_name(&self) -> String {
        self.id
            .split('-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str) -> ProjectSeries {
        ProjectSeries {
            id: id.to_string(),
            title: String::new(),
            labels: vec!["Jan".to_string(), "Feb".to_string()],
            predicted: vec![1.0, 2.0],
            actual: vec![3.0, 4.0],
        }
    }

    #[test]
    fn display_name_cleans_up_hyphenated_ids() {
        assert_eq!(project("forest-fires").display_name(), "Forest Fires");
        assert_eq!(project("biodiversity").display_name(), "Biodiversity");
        assert_eq!(project("analytics-case").display_name(), "Analytics Case");
    }

    #[test]
    fn alignment_checks_all_three_lengths() {
        let mut p = project("x");
        assert!(p.is_aligned());
        assert_eq!(p.point_count(), 2);

        p.actual.push(5.0);
        assert!(!p.is_aligned(), "extra actual value must break alignment");

        p.actual.pop();
        p.labels.pop();
        assert!(!p.is_aligned(), "missing label must break alignment");
    }
}
