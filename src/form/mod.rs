//! The report form: which categorical fields exist, what each may hold,
//! and what the form pre-selects.

pub mod options;
pub mod validation;

pub use options::{default_report, display_label, CategoricalField, FieldOption, CATEGORICAL_FIELDS, VIEWS};
pub use validation::{validate_report, FieldIssue};
