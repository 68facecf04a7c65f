use crate::cli::commands::{OutputArgs, RemainingArgs};
use crate::errors::EchoError;
use crate::reporting::formatter::{
    format_dashboard, format_pathology_summary, format_progress, format_quality_trends,
};
use crate::reporting::{remaining_scans, SummaryReporter};
use super::AppContext;

pub fn handle_remaining(ctx: &AppContext, args: RemainingArgs) -> Result<(), EchoError> {
    let store = ctx.open_store()?;
    let target = ctx.target(args.target);
    let completed = store.count()?;
    let remaining = remaining_scans(completed, target);

    if args.json {
        println!(
            "{}",
            serde_json::json!({ "completed": completed, "target": target, "remaining": remaining })
        );
    } else if ctx.quiet {
        println!("{}", remaining);
    } else {
        print!("{}", format_progress(completed, target, remaining));
    }
    Ok(())
}

pub fn handle_summary(ctx: &AppContext, args: OutputArgs) -> Result<(), EchoError> {
    let store = ctx.open_store()?;
    let summary = SummaryReporter::new(&store).pathology_summary()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_pathology_summary(&summary));
    }
    Ok(())
}

pub fn handle_trends(ctx: &AppContext, args: OutputArgs) -> Result<(), EchoError> {
    let store = ctx.open_store()?;
    let trends = SummaryReporter::new(&store).quality_trends()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trends)?);
    } else {
        print!("{}", format_quality_trends(&trends));
    }
    Ok(())
}

pub fn handle_dashboard(ctx: &AppContext, args: RemainingArgs) -> Result<(), EchoError> {
    let store = ctx.open_store()?;
    let dashboard = SummaryReporter::new(&store).dashboard(ctx.target(args.target))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", format_dashboard(&dashboard));
    }
    Ok(())
}
