use chrono::NaiveDate;
use serde::Serialize;
use crate::models::report::NewReport;
use super::options::field;

/// Problem found in a submission before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Checks a submission the way the form would: required selections made,
/// selections among the offered options, dates and measurements readable.
pub fn validate_report(report: &NewReport) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    for (column, value) in report.categorical_selections() {
        let Some(spec) = field(column) else { continue };
        match value {
            None if spec.required => issues.push(FieldIssue {
                field: spec.column,
                message: format!("a selection is required for {}", spec.title),
            }),
            None => {}
            Some(v) if !spec.accepts(v) => {
                let offered: Vec<&str> = spec.options.iter().map(|o| o.value).collect();
                issues.push(FieldIssue {
                    field: spec.column,
                    message: format!("'{}' is not one of: {}", v, offered.join(", ")),
                });
            }
            Some(_) => {}
        }
    }

    if let Some(dob) = non_empty(&report.patient.dob) {
        if NaiveDate::parse_from_str(dob, "%d/%m/%Y").is_err() {
            issues.push(FieldIssue {
                field: "dob",
                message: format!("'{}' is not a dd/mm/yyyy date", dob),
            });
        }
    }

    for (column, value) in [("lvidd", &report.ventricles.lvidd), ("tapse", &report.ventricles.tapse)] {
        if let Some(v) = non_empty(value) {
            if v.parse::<f64>().map_or(true, |n| !n.is_finite() || n < 0.0) {
                issues.push(FieldIssue {
                    field: column,
                    message: format!("'{}' is not a measurement", v),
                });
            }
        }
    }

    issues
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
