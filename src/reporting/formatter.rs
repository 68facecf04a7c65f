use crate::form::{display_label, VIEWS};
use crate::models::report::Report;
use super::summary::{Dashboard, PathologySummary, QualityTrend};

pub fn format_pathology_summary(summary: &PathologySummary) -> String {
    let mut out = String::from("## Pathology Summary\n\n| Finding | Count |\n|---|---|\n");
    for entry in summary.iter() {
        out.push_str(&format!("| {} | {} |\n", entry.label, entry.count));
    }
    out
}

pub fn format_quality_trends(trends: &[QualityTrend]) -> String {
    let mut out = String::from("## Scan Quality by Month\n\n");
    if trends.is_empty() {
        out.push_str("No reports recorded yet.\n");
        return out;
    }
    out.push_str("| Month | Quality | Count |\n|---|---|---|\n");
    for trend in trends {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            trend.month,
            trend.quality.as_deref().unwrap_or("-"),
            trend.count
        ));
    }
    out
}

pub fn format_progress(completed: u64, target: u64, remaining: u64) -> String {
    format!(
        "## Training Progress\n\n- Scans completed: {}\n- Target: {}\n- Scans remaining: {}\n",
        completed, target, remaining
    )
}

pub fn format_dashboard(dashboard: &Dashboard) -> String {
    [
        "# Echo Training Dashboard\n".to_string(),
        format_progress(dashboard.completed, dashboard.target, dashboard.remaining),
        format_pathology_summary(&dashboard.pathology),
        format_quality_trends(&dashboard.quality_trends),
    ]
    .join("\n")
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or("-")
}

fn choice<'a>(column: &str, value: &'a Option<String>) -> &'a str {
    match value.as_deref() {
        Some(v) => display_label(column, v),
        None => "-",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Renders one stored report the way it reads on the paper form.
pub fn format_report_markdown(report: &Report) -> String {
    let d = &report.details;
    let views = d.scan.views;
    let ticked = [views.psax, views.plax, views.a4c, views.a5c, views.subx];
    let obtained: Vec<&str> = VIEWS
        .iter()
        .zip(ticked)
        .filter(|(_, on)| *on)
        .map(|((_, label), _)| *label)
        .collect();

    let mut out = format!(
        "# Level 1 Echo Report #{}\n\n*Created {}*\n\n",
        report.id,
        report.date_created.format("%d/%m/%Y %H:%M")
    );

    out.push_str(&format!(
        "## Patient\n\n- Name: {}\n- MRN/NHS No: {}\n- Date of Birth: {}\n- Gender: {}\n\n",
        text(&d.patient.name),
        text(&d.patient.mrn),
        text(&d.patient.dob),
        text(&d.patient.gender),
    ));

    out.push_str(&format!(
        "## Scan Details\n\n- Indication: {}\n- Quality: {}\n- Quality comments: {}\n- Views obtained: {}\n\n",
        text(&d.scan.indication),
        choice("scan_quality", &d.scan.quality),
        text(&d.scan.quality_comments),
        if obtained.is_empty() { "-".to_string() } else { obtained.join(", ") },
    ));

    out.push_str(&format!(
        "## Ventricles\n\n- LV size: {} (LVIDD {} cm)\n- LV function: {}\n- Major regional wall motion abnormality: {}\n- RV size: {}\n- RV function: {} (TAPSE {} mm)\n- Inter-atrial septum: {}\n\n",
        choice("lv_size", &d.ventricles.lv_size),
        text(&d.ventricles.lvidd),
        choice("lv_function", &d.ventricles.lv_function),
        yes_no(d.ventricles.wall_motion_abnormality),
        choice("rv_size", &d.ventricles.rv_size),
        choice("rv_function", &d.ventricles.rv_function),
        text(&d.ventricles.tapse),
        choice("septum_shape", &d.ventricles.septum_shape),
    ));

    out.push_str(&format!(
        "## Valves\n\n- Aortic: {}\n- Mitral: {}\n- Tricuspid: {}\n\n",
        choice("av_status", &d.valves.aortic),
        choice("mv_status", &d.valves.mitral),
        choice("tv_status", &d.valves.tricuspid),
    ));

    out.push_str(&format!(
        "## Other Findings\n\n- Aortic root: {}\n- IVC: {}\n- Pericardial fluid: {}\n- Pleural effusion: {}\n- Additional observations: {}\n\n",
        choice("aortic_root", &d.other.aortic_root),
        choice("ivc", &d.other.ivc),
        choice("pericardial_fluid", &d.other.pericardial_fluid),
        choice("pleural_effusion", &d.other.pleural_effusion),
        text(&d.other.additional_observations),
    ));

    out.push_str(&format!(
        "## Conclusion\n\n{}\n\n- Checked and approved by: {}\n- Level 2 study required: {}\n- Referring physician informed: {}\n- Reporter: {} ({})\n",
        text(&d.conclusion.clinical_conclusion),
        text(&d.conclusion.training_approval),
        yes_no(d.conclusion.requires_level2),
        yes_no(d.conclusion.physician_informed),
        text(&d.conclusion.reporter_name),
        text(&d.conclusion.training_status),
    ));

    out
}

/// One line per report for listings.
pub fn format_report_line(report: &Report) -> String {
    format!(
        "{:>5}  {}  {:<9}  {}",
        report.id,
        report.date_created.format("%Y-%m-%d %H:%M"),
        report.details.scan.quality.as_deref().unwrap_or("-"),
        text(&report.details.conclusion.reporter_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::default_report;
    use crate::reporting::summary::PathologyCount;
    use chrono::NaiveDate;

    fn sample_report() -> Report {
        let mut details = default_report();
        details.patient.mrn = Some("ANON-0042".into());
        details.scan.views.a4c = true;
        details.scan.views.subx = true;
        details.ventricles.lv_size = Some("small".into());
        details.conclusion.reporter_name = Some("R. Okafor".into());
        Report {
            id: 42,
            date_created: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap().and_hms_opt(14, 5, 0).unwrap(),
            details,
        }
    }

    #[test]
    fn test_report_markdown_uses_form_labels() {
        let md = format_report_markdown(&sample_report());
        assert!(md.starts_with("# Level 1 Echo Report #42"));
        assert!(md.contains("Created 06/05/2024 14:05"));
        assert!(md.contains("- LV size: Small cavity"));
        assert!(md.contains("- Views obtained: Apical 4 chamber, Subxiphoid"));
        assert!(md.contains("- Pleural effusion: Not Present"));
        assert!(md.contains("- RV function: -"));
        assert!(md.contains("- Name: -"));
    }

    #[test]
    fn test_report_line() {
        let line = format_report_line(&sample_report());
        assert!(line.contains("2024-05-06 14:05"));
        assert!(line.contains("adequate"));
        assert!(line.ends_with("R. Okafor"));
    }

    #[test]
    fn test_quality_trends_table() {
        let trends = vec![
            QualityTrend { month: "2024-01".into(), quality: Some("good".into()), count: 3 },
            QualityTrend { month: "2024-02".into(), quality: Some("poor".into()), count: 1 },
        ];
        let md = format_quality_trends(&trends);
        assert!(md.contains("| 2024-01 | good | 3 |"));
        assert!(md.contains("| 2024-02 | poor | 1 |"));
        assert!(format_quality_trends(&[]).contains("No reports recorded yet."));
    }

    #[test]
    fn test_dashboard_sections() {
        let pathology = PathologySummary::from_counts(vec![PathologyCount { label: "LV abnormality", count: 2 }]);
        let dashboard = Dashboard {
            completed: 10,
            target: 75,
            remaining: 65,
            pathology,
            quality_trends: Vec::new(),
        };
        let md = format_dashboard(&dashboard);
        assert!(md.contains("- Scans remaining: 65"));
        assert!(md.contains("| LV abnormality | 2 |"));
        assert!(md.contains("## Scan Quality by Month"));
    }
}
