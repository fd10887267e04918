use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use draft_release::config;
use draft_release::context::Inputs;
use draft_release::notes::render_notes;
use draft_release::sections::{ordered_sections, split_sections};
use draft_release::ui;
use draft_release::version::version_increase;

#[derive(clap::Parser)]
#[command(
    name = "draft-release",
    about = "Classify a generated changelog into a version bump and render release notes"
)]
struct Args {
    #[arg(
        short,
        long,
        default_value = ".github/release.yml",
        help = "Path to the release configuration with changelog categories"
    )]
    config: PathBuf,

    #[arg(
        short,
        long,
        help = "File with the generated changelog body (stdin when omitted)"
    )]
    notes_file: Option<PathBuf>,

    #[arg(short, long, help = "Latest released version, e.g. v1.2.3")]
    base_version: String,

    #[arg(long, default_value = "", help = "Label marking a major release")]
    major_label: String,

    #[arg(long, default_value = "", help = "Label marking a minor release")]
    minor_label: String,

    #[arg(long, default_value = "", help = "Header template for the notes body")]
    header: String,

    #[arg(long, default_value = "", help = "Footer template for the notes body")]
    footer: String,

    #[arg(
        long = "variable",
        value_name = "KEY=VALUE",
        help = "Extra template variable, repeatable"
    )]
    variables: Vec<String>,

    #[arg(
        long,
        default_value_t = 0,
        help = "Collapse sections with more than this many entries (0 disables)"
    )]
    collapse_after: usize,

    #[arg(long, help = "Write the rendered notes here instead of stdout")]
    output: Option<PathBuf>,

    #[arg(long, help = "Print the section map as JSON to stderr")]
    sections_json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let categories = match config::load_categories(&args.config) {
        Ok(categories) => categories,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let raw_body = match &args.notes_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read notes from {}", path.display()))?,
        None => {
            ui::display_status("Reading changelog body from stdin");
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("cannot read notes from stdin")?;
            body
        }
    };

    let inputs = Inputs {
        major_label: args.major_label,
        minor_label: args.minor_label,
        header: args.header,
        footer: args.footer,
        variables: args.variables,
        collapse_after: args.collapse_after,
    };

    let next_version = match version_increase(&args.base_version, &inputs, &categories, &raw_body)
    {
        Ok(version) => format!("v{}", version),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let sections = split_sections(&raw_body, &categories);
    let notes = render_notes(
        &raw_body,
        &sections,
        &categories,
        &inputs,
        &next_version,
        &args.base_version,
    );
    if let Some(warning) = &notes.warning {
        ui::display_warning(warning);
    }

    ui::display_version_change(&args.base_version, &next_version);
    ui::display_sections_summary(&sections, &categories);

    if args.sections_json {
        let map: serde_json::Map<String, serde_json::Value> =
            ordered_sections(&sections, &categories)
                .into_iter()
                .map(|(label, bullets)| {
                    (
                        label.to_string(),
                        serde_json::Value::from(bullets.to_vec()),
                    )
                })
                .collect();
        eprintln!("{}", serde_json::to_string_pretty(&map)?);
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &notes.body)
                .with_context(|| format!("cannot write notes to {}", path.display()))?;
            ui::display_success(&format!("Wrote release notes to {}", path.display()));
        }
        None => println!("{}", notes.body),
    }

    Ok(())
}
