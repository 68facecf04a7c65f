use console::style;
use tracing::info;
use crate::errors::EchoError;
use super::AppContext;

pub fn handle_init(ctx: &AppContext) -> Result<(), EchoError> {
    let store = ctx.open_store()?;
    let count = store.count()?;
    info!(path = %store.path().display(), reports = count, "Database initialised");

    if !ctx.quiet {
        println!(
            "{} Database ready at {} ({} reports)",
            style("✔").green().bold(),
            store.path().display(),
            count
        );
    }
    Ok(())
}
