use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Patient identification. Reports are expected to be anonymised before
/// they are submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatientDetails {
    pub name: Option<String>,
    /// MRN or NHS number.
    pub mrn: Option<String>,
    /// Date of birth as entered on the form, `dd/mm/yyyy`.
    pub dob: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewsObtained {
    pub psax: bool,
    pub plax: bool,
    pub a4c: bool,
    pub a5c: bool,
    pub subx: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanDetails {
    pub indication: Option<String>,
    pub quality: Option<String>,
    pub quality_comments: Option<String>,
    pub views: ViewsObtained,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VentricularAssessment {
    pub lv_size: Option<String>,
    /// LVIDD in cm, kept as entered.
    pub lvidd: Option<String>,
    pub lv_function: Option<String>,
    pub wall_motion_abnormality: bool,
    pub rv_size: Option<String>,
    pub rv_function: Option<String>,
    /// TAPSE in mm, kept as entered.
    pub tapse: Option<String>,
    pub septum_shape: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValveAssessment {
    pub aortic: Option<String>,
    pub mitral: Option<String>,
    pub tricuspid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OtherFindings {
    pub aortic_root: Option<String>,
    pub ivc: Option<String>,
    pub pericardial_fluid: Option<String>,
    pub pleural_effusion: Option<String>,
    pub additional_observations: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Conclusion {
    /// Conclusion referenced to the clinical question.
    pub clinical_conclusion: Option<String>,
    /// Who checked and approved a training report.
    pub training_approval: Option<String>,
    pub requires_level2: bool,
    pub physician_informed: bool,
    pub reporter_name: Option<String>,
    pub training_status: Option<String>,
}

/// A report as submitted by the form, before it has an id.
///
/// Categorical selections are `None` when nothing was selected; the store
/// refuses those that the schema requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewReport {
    pub patient: PatientDetails,
    pub scan: ScanDetails,
    pub ventricles: VentricularAssessment,
    pub valves: ValveAssessment,
    pub other: OtherFindings,
    pub conclusion: Conclusion,
}

impl NewReport {
    /// Every categorical selection, keyed by its column name.
    pub fn categorical_selections(&self) -> [(&'static str, Option<&str>); 13] {
        [
            ("scan_quality", self.scan.quality.as_deref()),
            ("lv_size", self.ventricles.lv_size.as_deref()),
            ("lv_function", self.ventricles.lv_function.as_deref()),
            ("rv_size", self.ventricles.rv_size.as_deref()),
            ("rv_function", self.ventricles.rv_function.as_deref()),
            ("septum_shape", self.ventricles.septum_shape.as_deref()),
            ("av_status", self.valves.aortic.as_deref()),
            ("mv_status", self.valves.mitral.as_deref()),
            ("tv_status", self.valves.tricuspid.as_deref()),
            ("aortic_root", self.other.aortic_root.as_deref()),
            ("ivc", self.other.ivc.as_deref()),
            ("pericardial_fluid", self.other.pericardial_fluid.as_deref()),
            ("pleural_effusion", self.other.pleural_effusion.as_deref()),
        ]
    }
}

/// A stored report. Only written out; submissions are read as [`NewReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub id: i64,
    /// Creation time in UTC, second precision.
    pub date_created: NaiveDateTime,
    #[serde(flatten)]
    pub details: NewReport,
}
