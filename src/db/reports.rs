use chrono::{NaiveDateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{ErrorCode, Row};
use std::sync::LazyLock;
use tracing::{debug, info};
use crate::errors::EchoError;
use crate::models::report::{
    Conclusion, NewReport, OtherFindings, PatientDetails, Report, ScanDetails, ValveAssessment,
    VentricularAssessment, ViewsObtained,
};
use super::schema::{REPORT_COLUMNS, TIMESTAMP_FORMAT};
use super::ReportStore;

static INSERT_SQL: LazyLock<String> = LazyLock::new(|| {
    let placeholders: Vec<String> = (1..=REPORT_COLUMNS.len() + 1).map(|i| format!("?{}", i)).collect();
    format!(
        "INSERT INTO reports (date_created, {}) VALUES ({})",
        REPORT_COLUMNS.join(", "),
        placeholders.join(", ")
    )
});

static SELECT_SQL: LazyLock<String> = LazyLock::new(|| {
    format!("SELECT id, date_created, {} FROM reports", REPORT_COLUMNS.join(", "))
});

impl ReportStore {
    /// Inserts a report stamped with the current time and returns its id.
    pub fn insert(&self, report: &NewReport) -> Result<i64, EchoError> {
        self.insert_at(report, Utc::now().naive_utc())
    }

    /// Inserts a report with an explicit creation time (truncated to seconds).
    ///
    /// A `None` in a column the schema declares `NOT NULL` fails with
    /// [`EchoError::Insert`] and nothing is written.
    pub fn insert_at(&self, report: &NewReport, created_at: NaiveDateTime) -> Result<i64, EchoError> {
        let columns = column_values(report);
        let mut params = Vec::with_capacity(columns.len() + 1);
        params.push(Value::Text(created_at.format(TIMESTAMP_FORMAT).to_string()));
        params.extend(columns.into_iter().map(|(_, value)| value));

        // Required columns are whatever the applied schema declares NOT NULL.
        let conn = self.connect()?;
        conn.execute(INSERT_SQL.as_str(), rusqlite::params_from_iter(params.iter()))
            .map_err(|e| match e.sqlite_error_code() {
                Some(ErrorCode::ConstraintViolation) => {
                    EchoError::Insert(format!("Report rejected by schema: {}", e))
                }
                _ => EchoError::Storage(format!("Failed to insert report: {}", e)),
            })?;

        let id = conn.last_insert_rowid();
        info!(report_id = id, quality = ?report.scan.quality, "Report saved");
        Ok(id)
    }

    /// Number of reports stored so far.
    pub fn count(&self) -> Result<u64, EchoError> {
        let conn = self.connect()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))
            .map_err(|e| EchoError::Storage(format!("Count failed: {}", e)))?;
        Ok(count.max(0) as u64)
    }

    pub fn get(&self, id: i64) -> Result<Option<Report>, EchoError> {
        let conn = self.connect()?;
        let sql = format!("{} WHERE id = ?1", SELECT_SQL.as_str());
        let result = conn.query_row(&sql, rusqlite::params![id], report_from_row);

        match result {
            Ok(report) => Ok(Some(report)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(EchoError::Storage(format!("Query error: {}", e))),
        }
    }

    /// Stored reports, newest first.
    pub fn list(&self, limit: usize, offset: usize) -> Result<Vec<Report>, EchoError> {
        let conn = self.connect()?;
        let sql = format!("{} ORDER BY id DESC LIMIT ?1 OFFSET ?2", SELECT_SQL.as_str());
        let mut stmt = conn.prepare(&sql)
            .map_err(|e| EchoError::Storage(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map(rusqlite::params![limit as i64, offset as i64], report_from_row)
            .map_err(|e| EchoError::Storage(format!("Query error: {}", e)))?;

        let mut reports = Vec::new();
        for row in rows {
            reports.push(row.map_err(|e| EchoError::Storage(format!("Row error: {}", e)))?);
        }
        debug!(count = reports.len(), limit, offset, "Listed reports");
        Ok(reports)
    }
}

fn text(value: &Option<String>) -> Value {
    value.clone().map(Value::Text).unwrap_or(Value::Null)
}

fn flag(value: bool) -> Value {
    Value::Integer(i64::from(value))
}

/// Flattens a report into `(column, value)` pairs in `REPORT_COLUMNS` order.
fn column_values(report: &NewReport) -> Vec<(&'static str, Value)> {
    let NewReport { patient, scan, ventricles, valves, other, conclusion } = report;
    vec![
        ("patient_name", text(&patient.name)),
        ("mrn", text(&patient.mrn)),
        ("dob", text(&patient.dob)),
        ("gender", text(&patient.gender)),
        ("scan_indication", text(&scan.indication)),
        ("scan_quality", text(&scan.quality)),
        ("quality_comments", text(&scan.quality_comments)),
        ("view_psax", flag(scan.views.psax)),
        ("view_plax", flag(scan.views.plax)),
        ("view_a4c", flag(scan.views.a4c)),
        ("view_a5c", flag(scan.views.a5c)),
        ("view_subx", flag(scan.views.subx)),
        ("lv_size", text(&ventricles.lv_size)),
        ("lvidd", text(&ventricles.lvidd)),
        ("lv_function", text(&ventricles.lv_function)),
        ("wall_motion_abnormality", flag(ventricles.wall_motion_abnormality)),
        ("rv_size", text(&ventricles.rv_size)),
        ("rv_function", text(&ventricles.rv_function)),
        ("tapse", text(&ventricles.tapse)),
        ("septum_shape", text(&ventricles.septum_shape)),
        ("av_status", text(&valves.aortic)),
        ("mv_status", text(&valves.mitral)),
        ("tv_status", text(&valves.tricuspid)),
        ("aortic_root", text(&other.aortic_root)),
        ("ivc", text(&other.ivc)),
        ("pericardial_fluid", text(&other.pericardial_fluid)),
        ("pleural_effusion", text(&other.pleural_effusion)),
        ("additional_observations", text(&other.additional_observations)),
        ("clinical_conclusion", text(&conclusion.clinical_conclusion)),
        ("training_approval", text(&conclusion.training_approval)),
        ("requires_level2", flag(conclusion.requires_level2)),
        ("physician_informed", flag(conclusion.physician_informed)),
        ("reporter_name", text(&conclusion.reporter_name)),
        ("training_status", text(&conclusion.training_status)),
    ]
}

fn report_from_row(row: &Row) -> rusqlite::Result<Report> {
    let flag = |column: &str| -> rusqlite::Result<bool> {
        Ok(row.get::<_, Option<i64>>(column)?.unwrap_or(0) != 0)
    };

    Ok(Report {
        id: row.get("id")?,
        date_created: row.get("date_created")?,
        details: NewReport {
            patient: PatientDetails {
                name: row.get("patient_name")?,
                mrn: row.get("mrn")?,
                dob: row.get("dob")?,
                gender: row.get("gender")?,
            },
            scan: ScanDetails {
                indication: row.get("scan_indication")?,
                quality: row.get("scan_quality")?,
                quality_comments: row.get("quality_comments")?,
                views: ViewsObtained {
                    psax: flag("view_psax")?,
                    plax: flag("view_plax")?,
                    a4c: flag("view_a4c")?,
                    a5c: flag("view_a5c")?,
                    subx: flag("view_subx")?,
                },
            },
            ventricles: VentricularAssessment {
                lv_size: row.get("lv_size")?,
                lvidd: row.get("lvidd")?,
                lv_function: row.get("lv_function")?,
                wall_motion_abnormality: flag("wall_motion_abnormality")?,
                rv_size: row.get("rv_size")?,
                rv_function: row.get("rv_function")?,
                tapse: row.get("tapse")?,
                septum_shape: row.get("septum_shape")?,
            },
            valves: ValveAssessment {
                aortic: row.get("av_status")?,
                mitral: row.get("mv_status")?,
                tricuspid: row.get("tv_status")?,
            },
            other: OtherFindings {
                aortic_root: row.get("aortic_root")?,
                ivc: row.get("ivc")?,
                pericardial_fluid: row.get("pericardial_fluid")?,
                pleural_effusion: row.get("pleural_effusion")?,
                additional_observations: row.get("additional_observations")?,
            },
            conclusion: Conclusion {
                clinical_conclusion: row.get("clinical_conclusion")?,
                training_approval: row.get("training_approval")?,
                requires_level2: flag("requires_level2")?,
                physician_informed: flag("physician_informed")?,
                reporter_name: row.get("reporter_name")?,
                training_status: row.get("training_status")?,
            },
        },
    })
}
