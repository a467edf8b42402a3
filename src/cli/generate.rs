use super::ProjectContext;
use crate::services::feed_service;
use crate::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::path::Path;

pub fn run(
    ctx: &ProjectContext,
    input: Option<&Path>,
    output: Option<&Path>,
    build_time: DateTime<Utc>,
) -> Result<()> {
    let source = ctx.source_path(input);
    let output = ctx.output_path(output);

    let report = feed_service::generate_feed(&source, &output, &ctx.config, build_time)?;

    println!("{} {}", "Wrote".green(), report.output.display());
    if report.fallback_dates > 0 {
        println!(
            "{}",
            format!(
                "⚠️  {} of {} items have no parseable date; used build time",
                report.fallback_dates, report.items
            )
            .yellow()
        );
    }

    Ok(())
}
