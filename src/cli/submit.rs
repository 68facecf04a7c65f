use console::style;
use std::path::Path;
use tracing::{error, info, warn};
use crate::cli::commands::SubmitArgs;
use crate::db::ReportStore;
use crate::errors::EchoError;
use crate::form::validate_report;
use crate::models::report::NewReport;
use super::AppContext;

/// Reads a submission file. `.json` files are parsed as JSON, anything else
/// as YAML.
pub fn load_submission(path: &Path) -> Result<NewReport, EchoError> {
    if !path.exists() {
        return Err(EchoError::NotFound(format!("Submission file {}", path.display())));
    }

    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let report = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(report)
}

fn submit_one(store: &ReportStore, path: &Path, force: bool) -> Result<i64, EchoError> {
    let report = load_submission(path)?;

    let issues = validate_report(&report);
    if !issues.is_empty() {
        if !force {
            let listed: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
            return Err(EchoError::Validation(listed.join("; ")));
        }
        for issue in &issues {
            warn!(field = issue.field, problem = %issue.message, "Saving despite form problem");
        }
    }

    store.insert(&report)
}

pub fn handle_submit(ctx: &AppContext, args: SubmitArgs) -> Result<(), EchoError> {
    let store = ctx.open_store()?;

    let mut saved = 0usize;
    let mut first_error = None;
    for file in &args.files {
        let path = Path::new(file);
        match submit_one(&store, path, args.force) {
            Ok(id) => {
                saved += 1;
                if !ctx.quiet {
                    println!("{} {} saved as report #{}", style("✔").green().bold(), file, id);
                }
            }
            Err(e) => {
                error!(file = %file, error = %e, "Error saving report");
                eprintln!("{} {}: {}", style("✘").red().bold(), file, e);
                first_error.get_or_insert(e);
            }
        }
    }

    let failed = args.files.len() - saved;
    info!(saved, failed, "Submission finished");

    match first_error {
        Some(e) => {
            if !ctx.quiet && saved > 0 {
                println!("{} saved, {} failed", saved, failed);
            }
            Err(e)
        }
        None => Ok(()),
    }
}
