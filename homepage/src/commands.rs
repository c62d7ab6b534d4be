//! Subcommand handlers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use home_render::people::{Person, sort_people};
use home_render::{LoadOutcome, MountSet, RenderReport, load_home, render_preview};
use tracing::{info, warn};

use crate::cli::ContentArgs;
use crate::config::{self, Resolved};

fn resolve(content: &ContentArgs) -> Result<Resolved> {
    let file = config::load_for(content.config.as_deref())?;
    Ok(config::resolve(&content.overrides(), file))
}

/// Render a preview page. A load failure still produces a page (showing the
/// error message) and then fails the command.
pub async fn render(content: &ContentArgs, out: Option<&Path>) -> Result<()> {
    let resolved = resolve(content)?;
    let mut mounts = MountSet::in_memory();
    let loaded = load_home(
        &reqwest::Client::new(),
        &resolved.source,
        &mut mounts,
        &resolved.render,
    )
    .await;

    let html = render_preview(mounts);
    match out {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("failed to write preview: {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "preview written");
        }
        None => print!("{html}"),
    }

    loaded.with_context(|| format!("failed to load {}", resolved.source))?;
    Ok(())
}

/// Load the content and summarize what the renderer had to drop or degrade.
pub async fn check(content: &ContentArgs, json: bool) -> Result<()> {
    let resolved = resolve(content)?;
    let mut mounts = MountSet::in_memory();
    let outcome = load_home(
        &reqwest::Client::new(),
        &resolved.source,
        &mut mounts,
        &resolved.render,
    )
    .await
    .with_context(|| format!("failed to load {}", resolved.source))?;

    let LoadOutcome::Rendered(report) = outcome else {
        bail!("renderer inactive: no mount points");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&resolved.source.to_string(), &report);
    }
    Ok(())
}

fn print_report(source: &str, report: &RenderReport) {
    println!("{source}");
    println!(
        "  hero:     {}",
        if report.hero_rendered { "present" } else { "absent" }
    );
    println!(
        "  buttons:  {} rendered, {} dropped (missing label or href)",
        report.buttons_rendered, report.buttons_dropped
    );
    println!(
        "  sections: {} rendered, {} fallback, {} skipped",
        report.sections_rendered, report.fallback_sections, report.skipped_sections
    );
}

/// Validate and list people in display order.
pub fn people(file: &Path, json: bool) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("failed to read people file: {}", file.display()))?;
    let mut people: Vec<Person> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid people file: {}", file.display()))?;

    let invalid: Vec<usize> = people
        .iter()
        .enumerate()
        .filter_map(|(idx, person)| person.validate().err().map(|_| idx))
        .collect();
    if !invalid.is_empty() {
        for idx in &invalid {
            warn!(index = idx, "person record has no name");
        }
        bail!("{} person record(s) without a name at index {:?}", invalid.len(), invalid);
    }

    sort_people(&mut people);

    if json {
        println!("{}", serde_json::to_string_pretty(&people)?);
        return Ok(());
    }
    for person in &people {
        println!(
            "{:>4}  {:<28} {:<24} {}",
            person.priority_order,
            person.name,
            person.position.as_deref().unwrap_or("-"),
            person.category.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
