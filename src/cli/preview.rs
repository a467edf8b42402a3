//! Preview command - show what the feed would contain without writing it

use super::ProjectContext;
use crate::parser::date::PubDate;
use crate::services::feed_service;
use crate::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;

pub fn run(ctx: &ProjectContext, json: bool, build_time: DateTime<Utc>) -> Result<()> {
    let source = ctx.source_path(None);
    let items = feed_service::preview_items(&source, &ctx.config, build_time)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("{}", format!("No patch blocks found in {}", source.display()).yellow());
        return Ok(());
    }

    println!("{}", format!("📋 {} patch notes in {}", items.len(), source.display()).cyan());
    for item in &items {
        println!();
        println!("{}", item.title.green().bold());
        println!("   Link: {}", item.link);
        match item.pub_date {
            PubDate::Parsed(_) => println!("   Date: {}", item.pub_date.to_rfc2822()),
            PubDate::BuildTime(_) => println!(
                "   Date: {} {}",
                item.pub_date.to_rfc2822(),
                "(no date, build time)".yellow()
            ),
        }
        for line in item.description.lines() {
            println!("   {}", line);
        }
    }

    Ok(())
}
