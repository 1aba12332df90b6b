//! Review command - review a PDF contract in the terminal

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use counsel_core::{Config, DisplayBlock, ReviewOutcome};

use super::build_pipeline;

/// Arguments for the review command
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Path to the contract PDF
    #[arg(required = true)]
    pub file: PathBuf,

    /// Do not send the WhatsApp notification
    #[arg(long)]
    pub no_notify: bool,

    /// Print the consolidated markdown instead of the formatted report
    #[arg(long)]
    pub raw: bool,
}

impl ReviewArgs {
    /// Execute the review command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let pipeline = build_pipeline(config, !self.no_notify)?;

        let pdf = tokio::fs::read(&self.file)
            .await
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        tracing::info!(file = %self.file.display(), bytes = pdf.len(), "Reviewing contract");
        eprintln!("Analysing contract, this can take a few moments...");

        let outcome = pipeline
            .run(Some(pdf))
            .await
            .context("Error during analysis")?;

        if self.raw {
            println!("{}", outcome.report);
        } else {
            print!("{}", render_terminal(&outcome.blocks));
        }

        print_status(&outcome);
        Ok(())
    }
}

/// Render display blocks as plain terminal text
fn render_terminal(blocks: &[DisplayBlock]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            DisplayBlock::Header(title) => {
                out.push_str(title);
                out.push('\n');
                out.push_str(&"=".repeat(title.chars().count()));
                out.push_str("\n\n");
            }
            DisplayBlock::Markdown(text) => {
                out.push_str(text);
                out.push_str("\n\n");
            }
            DisplayBlock::Separator => out.push_str("---\n\n"),
        }
    }

    out
}

fn print_status(outcome: &ReviewOutcome) {
    if outcome.notification.is_failure() {
        eprintln!("{}", outcome.notification.message());
    } else {
        println!("{}", outcome.notification.message());
    }
}
