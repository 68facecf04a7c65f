use console::style;
use std::path::Path;
use crate::cli::commands::{OutputArgs, TemplateArgs, TemplateFormat, ValidateArgs};
use crate::errors::EchoError;
use crate::form::{default_report, validate_report, CATEGORICAL_FIELDS, VIEWS};
use super::submit::load_submission;

pub fn handle_template(args: TemplateArgs) -> Result<(), EchoError> {
    let report = default_report();
    let rendered = match args.format {
        TemplateFormat::Yaml => serde_yaml::to_string(&report)?,
        TemplateFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

pub fn handle_options(args: OutputArgs) -> Result<(), EchoError> {
    if args.json {
        let json = serde_json::json!({
            "categorical": CATEGORICAL_FIELDS,
            "views": VIEWS.iter().map(|(column, label)| serde_json::json!({ "column": column, "label": label })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    for field in CATEGORICAL_FIELDS {
        let required = if field.required { "" } else { " (optional)" };
        println!("{} [{}]{}", style(field.title).bold(), field.column, required);
        for option in field.options {
            let marker = if field.default == Some(option.value) { "*" } else { " " };
            println!("  {} {:<12} {}", marker, option.value, option.label);
        }
        println!();
    }
    println!("{}", style("Views Obtained").bold());
    for (column, label) in VIEWS {
        println!("    {:<12} {}", column, label);
    }
    Ok(())
}

pub fn handle_validate(args: ValidateArgs) -> Result<(), EchoError> {
    let report = load_submission(Path::new(&args.file))?;
    let issues = validate_report(&report);

    if issues.is_empty() {
        println!("{} {} is a complete report", style("✔").green().bold(), args.file);
        return Ok(());
    }

    for issue in &issues {
        eprintln!("{} {}", style("✘").red().bold(), issue);
    }
    Err(EchoError::Validation(format!("{} problem(s) in {}", issues.len(), args.file)))
}
