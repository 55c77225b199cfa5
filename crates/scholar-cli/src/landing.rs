//! Landing page commands: validate override content and render the page.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use clap::Subcommand;
use scholar_core::AppConfig;

/// Sub-commands available under `landing`.
#[derive(Debug, Subcommand)]
pub enum LandingCommands {
    /// Render the landing page to stdout or a file
    Render {
        /// Content override file (defaults to `SCHOLAR_LANDING_PATH`)
        #[arg(long)]
        content: Option<PathBuf>,
        /// Write the HTML here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Validate a content override file without rendering
    Check {
        /// Content override file (defaults to `SCHOLAR_LANDING_PATH`)
        #[arg(long)]
        content: Option<PathBuf>,
    },
}

/// # Errors
///
/// Returns an error if the content cannot be loaded or validated, rendering
/// fails, or the output file cannot be written.
pub(crate) fn run_landing(config: &AppConfig, command: LandingCommands) -> anyhow::Result<()> {
    let brand = scholar_core::brand();
    match command {
        LandingCommands::Render { content, output } => {
            let path = content.as_deref().or(config.landing_path.as_deref());
            let landing = scholar_landing::load_landing(path, brand)?;
            let html = scholar_landing::render_landing(brand, &landing, Utc::now().year())?;
            match output {
                Some(out) => {
                    std::fs::write(&out, html)?;
                    println!("landing page written to {}", out.display());
                }
                None => println!("{html}"),
            }
        }
        LandingCommands::Check { content } => {
            let path = content.as_deref().or(config.landing_path.as_deref());
            let landing = scholar_landing::load_landing(path, brand)?;
            println!(
                "{}: {} stats, {} testimonials, {} process steps",
                path.map_or_else(|| "built-in content".to_string(), describe),
                landing.stats.items.len(),
                landing.testimonials.items.len(),
                landing.process.steps.len(),
            );
        }
    }
    Ok(())
}

fn describe(path: &Path) -> String {
    format!("{} is valid", path.display())
}
