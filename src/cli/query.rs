use crate::cli::commands::{ListArgs, OutputArgs, ShowArgs};
use crate::errors::EchoError;
use crate::reporting::formatter::{format_report_line, format_report_markdown};
use super::AppContext;
use tracing::info;

pub fn handle_show(ctx: &AppContext, args: ShowArgs) -> Result<(), EchoError> {
    info!(report_id = args.id, "Showing report");
    let store = ctx.open_store()?;
    let report = store
        .get(args.id)?
        .ok_or_else(|| EchoError::NotFound(format!("Report #{}", args.id)))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report_markdown(&report));
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: ListArgs) -> Result<(), EchoError> {
    let store = ctx.open_store()?;
    let reports = store.list(args.limit, args.offset)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        if !ctx.quiet {
            println!("No reports found.");
        }
        return Ok(());
    }
    for report in &reports {
        println!("{}", format_report_line(report));
    }
    Ok(())
}

pub fn handle_count(ctx: &AppContext, args: OutputArgs) -> Result<(), EchoError> {
    let count = ctx.open_store()?.count()?;
    if args.json {
        println!("{}", serde_json::json!({ "completed": count }));
    } else {
        println!("{}", count);
    }
    Ok(())
}
