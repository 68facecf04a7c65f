use crate::models::report::Report;

/// One abnormality counted by the pathology summary.
///
/// `condition` is the SQL form used against the `reports` table; `matches`
/// evaluates the same test on a loaded report. Both compare exact stored
/// strings and never match a missing value.
#[derive(Debug, Clone, Copy)]
pub struct PathologyPredicate {
    pub label: &'static str,
    pub condition: &'static str,
    matcher: fn(&Report) -> bool,
}

impl PathologyPredicate {
    pub fn matches(&self, report: &Report) -> bool {
        (self.matcher)(report)
    }
}

fn differs(value: &Option<String>, expected: &str) -> bool {
    value.as_deref().is_some_and(|v| v != expected)
}

fn equals(value: &Option<String>, expected: &str) -> bool {
    value.as_deref() == Some(expected)
}

fn lv_abnormal(r: &Report) -> bool {
    differs(&r.details.ventricles.lv_size, "normal") || differs(&r.details.ventricles.lv_function, "normal")
}

fn rv_abnormal(r: &Report) -> bool {
    differs(&r.details.ventricles.rv_size, "normal") || differs(&r.details.ventricles.rv_function, "normal")
}

fn av_abnormal(r: &Report) -> bool {
    differs(&r.details.valves.aortic, "normal")
}

fn mv_abnormal(r: &Report) -> bool {
    differs(&r.details.valves.mitral, "normal")
}

fn tv_abnormal(r: &Report) -> bool {
    differs(&r.details.valves.tricuspid, "normal")
}

fn aortic_root_dilated(r: &Report) -> bool {
    equals(&r.details.other.aortic_root, "dilated")
}

// Trivial fluid counts as an effusion alongside significant.
fn pericardial_effusion(r: &Report) -> bool {
    equals(&r.details.other.pericardial_fluid, "significant")
        || equals(&r.details.other.pericardial_fluid, "trivial")
}

fn pleural_effusion(r: &Report) -> bool {
    equals(&r.details.other.pleural_effusion, "Present")
}

pub const PATHOLOGY_PREDICATES: [PathologyPredicate; 8] = [
    PathologyPredicate {
        label: "LV abnormality",
        condition: "lv_size != 'normal' OR lv_function != 'normal'",
        matcher: lv_abnormal,
    },
    PathologyPredicate {
        label: "RV abnormality",
        condition: "rv_size != 'normal' OR rv_function != 'normal'",
        matcher: rv_abnormal,
    },
    PathologyPredicate {
        label: "AV abnormality",
        condition: "av_status != 'normal'",
        matcher: av_abnormal,
    },
    PathologyPredicate {
        label: "MV abnormality",
        condition: "mv_status != 'normal'",
        matcher: mv_abnormal,
    },
    PathologyPredicate {
        label: "TV abnormality",
        condition: "tv_status != 'normal'",
        matcher: tv_abnormal,
    },
    PathologyPredicate {
        label: "Dilated aortic root",
        condition: "aortic_root = 'dilated'",
        matcher: aortic_root_dilated,
    },
    PathologyPredicate {
        label: "Pericardial effusion",
        condition: "pericardial_fluid IN ('significant', 'trivial')",
        matcher: pericardial_effusion,
    },
    PathologyPredicate {
        label: "Pleural effusion",
        condition: "pleural_effusion = 'Present'",
        matcher: pleural_effusion,
    },
];

/// Single-row query counting every predicate over the whole table.
pub fn summary_sql() -> String {
    let counts: Vec<String> = PATHOLOGY_PREDICATES
        .iter()
        .map(|p| format!("COUNT(CASE WHEN {} THEN 1 END)", p.condition))
        .collect();
    format!("SELECT {} FROM reports", counts.join(", "))
}
