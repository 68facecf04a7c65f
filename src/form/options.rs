use serde::Serialize;
use crate::models::report::NewReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    /// Value written to the store.
    pub value: &'static str,
    /// Text shown on the form.
    pub label: &'static str,
}

/// A single-choice field of the report form.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoricalField {
    pub column: &'static str,
    pub title: &'static str,
    pub options: &'static [FieldOption],
    /// Pre-selected value, if the form pre-selects one.
    pub default: Option<&'static str>,
    /// Whether the report cannot be stored without a selection.
    pub required: bool,
}

impl CategoricalField {
    pub fn accepts(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn label_for(&self, value: &str) -> Option<&'static str> {
        self.options.iter().find(|o| o.value == value).map(|o| o.label)
    }
}

const fn opt(value: &'static str, label: &'static str) -> FieldOption {
    FieldOption { value, label }
}

const VALVE_OPTIONS_AV: &[FieldOption] = &[
    opt("normal", "Normal"),
    opt("calcified", "Heavily calcified/restricted opening"),
    opt("significant", "Significant AR/valve prolapse"),
    opt("unable", "Unable to assess"),
];

const VALVE_OPTIONS_MV: &[FieldOption] = &[
    opt("normal", "Normal"),
    opt("calcified", "Heavily calcified/restricted opening"),
    opt("significant", "Significant MR/valve prolapse"),
    opt("unable", "Unable to assess"),
];

const VALVE_OPTIONS_TV: &[FieldOption] = &[
    opt("normal", "Normal"),
    opt("calcified", "Heavily calcified/restricted opening"),
    opt("significant", "Significant TR/valve prolapse"),
    opt("unable", "Unable to assess"),
];

pub const CATEGORICAL_FIELDS: &[CategoricalField] = &[
    CategoricalField {
        column: "scan_quality",
        title: "Scan Quality Assessment",
        options: &[
            opt("teaching", "Teaching case - Excellent image quality"),
            opt("good", "Good - Complete study with good views"),
            opt("adequate", "Adequate - Key findings visible but some limitations"),
            opt("poor", "Poor - Significant technical limitations"),
        ],
        default: Some("adequate"),
        required: true,
    },
    CategoricalField {
        column: "lv_size",
        title: "Left Ventricular Size",
        options: &[
            opt("normal", "Normal size"),
            opt("small", "Small cavity"),
            opt("large", "Large cavity"),
            opt("unable", "Unable to assess"),
        ],
        default: Some("normal"),
        required: true,
    },
    CategoricalField {
        column: "lv_function",
        title: "Left Ventricular Function",
        options: &[
            opt("normal", "Normal movement"),
            opt("impaired", "Impaired (more than mild)"),
            opt("unable", "Unable to assess"),
        ],
        default: Some("normal"),
        required: true,
    },
    CategoricalField {
        column: "septum_shape",
        title: "Inter-atrial Septum Shape and Movement",
        options: &[
            opt("normal", "Mid-systolic reversal (normal)"),
            opt("right", "Fixed curvature towards the right atrium"),
            opt("left", "Fixed curvature towards the left atrium"),
            opt("unable", "Unable to assess"),
        ],
        default: Some("normal"),
        required: true,
    },
    CategoricalField {
        column: "rv_size",
        title: "Right Ventricular Size",
        options: &[
            opt("normal", "Normal"),
            opt("small", "Small cavity"),
            opt("enlarged", "Enlarged"),
            opt("unable", "Unable to assess"),
        ],
        default: Some("normal"),
        required: true,
    },
    // Schema-only column: the paper form has no RV function selector, so the
    // choices mirror LV function and nothing is pre-selected.
    CategoricalField {
        column: "rv_function",
        title: "Right Ventricular Function",
        options: &[
            opt("normal", "Normal movement"),
            opt("impaired", "Impaired (more than mild)"),
            opt("unable", "Unable to assess"),
        ],
        default: None,
        required: false,
    },
    CategoricalField {
        column: "av_status",
        title: "Aortic Valve Structure & Function",
        options: VALVE_OPTIONS_AV,
        default: Some("normal"),
        required: true,
    },
    CategoricalField {
        column: "mv_status",
        title: "Mitral Valve Structure & Function",
        options: VALVE_OPTIONS_MV,
        default: Some("normal"),
        required: true,
    },
    CategoricalField {
        column: "tv_status",
        title: "Tricuspid Valve Structure & Function",
        options: VALVE_OPTIONS_TV,
        default: Some("normal"),
        required: true,
    },
    CategoricalField {
        column: "aortic_root",
        title: "Aortic Root",
        options: &[
            opt("normal", "Visually normal size"),
            opt("dilated", "Dilated"),
            opt("unable", "Unable to assess"),
        ],
        default: Some("normal"),
        required: true,
    },
    CategoricalField {
        column: "ivc",
        title: "IVC",
        options: &[
            opt("small", "Small and/or collapsing"),
            opt("normal", "Normal movement with respiration"),
            opt("large", "Large and/or non-collapsing"),
            opt("unable", "Unable to assess"),
        ],
        default: Some("normal"),
        required: true,
    },
    CategoricalField {
        column: "pericardial_fluid",
        title: "Pericardial Fluid",
        options: &[
            opt("none", "No pericardial fluid seen"),
            opt("trivial", "Trivial"),
            opt("significant", "Significant, +/- signs of tamponade"),
            opt("unable", "Unable to assess"),
        ],
        default: Some("none"),
        required: true,
    },
    CategoricalField {
        column: "pleural_effusion",
        title: "Pleural Effusion",
        options: &[opt("Present", "Present"), opt("Not Present", "Not Present")],
        default: Some("Not Present"),
        required: true,
    },
];

/// Echo views that can be ticked as obtained: `(column, label)`.
pub const VIEWS: [(&str, &str); 5] = [
    ("view_psax", "Parasternal short axis"),
    ("view_plax", "Parasternal long axis"),
    ("view_a4c", "Apical 4 chamber"),
    ("view_a5c", "Apical 5 chamber"),
    ("view_subx", "Subxiphoid"),
];

pub fn field(column: &str) -> Option<&'static CategoricalField> {
    CATEGORICAL_FIELDS.iter().find(|f| f.column == column)
}

/// Display label for a stored value, falling back to the value itself.
pub fn display_label<'a>(column: &str, value: &'a str) -> &'a str {
    field(column).and_then(|f| f.label_for(value)).unwrap_or(value)
}

fn default_for(column: &str) -> Option<String> {
    field(column).and_then(|f| f.default).map(str::to_string)
}

/// A blank submission with the form's default selections filled in.
pub fn default_report() -> NewReport {
    let mut report = NewReport::default();
    report.scan.quality = default_for("scan_quality");
    report.ventricles.lv_size = default_for("lv_size");
    report.ventricles.lv_function = default_for("lv_function");
    report.ventricles.rv_size = default_for("rv_size");
    report.ventricles.rv_function = default_for("rv_function");
    report.ventricles.septum_shape = default_for("septum_shape");
    report.valves.aortic = default_for("av_status");
    report.valves.mitral = default_for("mv_status");
    report.valves.tricuspid = default_for("tv_status");
    report.other.aortic_root = default_for("aortic_root");
    report.other.ivc = default_for("ivc");
    report.other.pericardial_fluid = default_for("pericardial_fluid");
    report.other.pleural_effusion = default_for("pleural_effusion");
    report
}
