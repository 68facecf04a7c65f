/// Default schema, applied when no schema file is configured.
pub const BUNDLED_SCHEMA: &str = include_str!("../../schema.sql");

/// Report columns in insertion order, excluding `id` and `date_created`.
pub const REPORT_COLUMNS: [&str; 34] = [
    "patient_name",
    "mrn",
    "dob",
    "gender",
    "scan_indication",
    "scan_quality",
    "quality_comments",
    "view_psax",
    "view_plax",
    "view_a4c",
    "view_a5c",
    "view_subx",
    "lv_size",
    "lvidd",
    "lv_function",
    "wall_motion_abnormality",
    "rv_size",
    "rv_function",
    "tapse",
    "septum_shape",
    "av_status",
    "mv_status",
    "tv_status",
    "aortic_root",
    "ivc",
    "pericardial_fluid",
    "pleural_effusion",
    "additional_observations",
    "clinical_conclusion",
    "training_approval",
    "requires_level2",
    "physician_informed",
    "reporter_name",
    "training_status",
];

/// Columns the bundled schema declares `NOT NULL` without a default. A
/// custom schema file may declare a different set.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "scan_quality",
    "lv_size",
    "lv_function",
    "rv_size",
    "septum_shape",
    "av_status",
    "mv_status",
    "tv_status",
    "aortic_root",
    "ivc",
    "pericardial_fluid",
    "pleural_effusion",
];

/// Storage format of `date_created`, matching SQLite's `CURRENT_TIMESTAMP`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_schema_declares_every_column() {
        for column in REPORT_COLUMNS {
            assert!(
                BUNDLED_SCHEMA.contains(&format!("    {} ", column)),
                "column {} missing from schema.sql",
                column
            );
        }
    }

    #[test]
    fn test_required_columns_are_report_columns() {
        for column in REQUIRED_COLUMNS {
            assert!(REPORT_COLUMNS.contains(&column));
            assert!(BUNDLED_SCHEMA.contains(&format!("    {} TEXT NOT NULL,", column)));
        }
    }
}
