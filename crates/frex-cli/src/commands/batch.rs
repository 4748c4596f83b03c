//! Batch processing command for multiple invoice files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use frex_core::{extract_record, invoice_id, InvoiceRecord, TemplateProfile, HEADERS};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file JSON records
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path of the summary spreadsheet (default: from config)
    #[arg(short, long)]
    summary: Option<PathBuf>,

    /// Template profile override (template-a or template-b)
    #[arg(short, long)]
    template: Option<TemplateProfile>,
}

/// Result of processing a single file.
///
/// Either a record or a failure, never both; the source identifier is kept
/// either way so failures are reportable.
struct ProcessResult {
    path: PathBuf,
    source_id: String,
    record: Option<InvoiceRecord>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if let Some(template) = args.template {
        config.template = template;
    }

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Documents are independent; a failure is recorded against its source
    // identifier and the batch moves on.
    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("invoice.pdf");
        let source_id = invoice_id(filename, config.template.identifier_policy());

        let result = fs::read(&path)
            .map_err(frex_core::FrexError::from)
            .and_then(|data| extract_record(&data, &source_id, &config));

        match result {
            Ok(record) => {
                results.push(ProcessResult {
                    path: path.clone(),
                    source_id,
                    record: Some(record),
                    error: None,
                });
            }
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                results.push(ProcessResult {
                    path: path.clone(),
                    source_id,
                    record: None,
                    error: Some(e.to_string()),
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let successful: Vec<_> = results.iter().filter(|r| r.record.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    // Per-file JSON outputs
    if let Some(ref output_dir) = args.output_dir {
        for result in &successful {
            if let Some(record) = &result.record {
                let output_path = output_dir.join(format!("{}.json", result.source_id));
                fs::write(&output_path, serde_json::to_string_pretty(record)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    // The summary is always written, header-only when nothing succeeded.
    let summary_path = args.summary.unwrap_or_else(|| {
        args.output_dir
            .as_deref()
            .unwrap_or(Path::new("."))
            .join(&config.export.summary_name)
    });

    write_summary(&summary_path, &results)?;
    println!(
        "{} Summary written to {}",
        style("✓").green(),
        summary_path.display()
    );

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed invoices:").red());
        for result in &failed {
            println!(
                "  - {} ({}): {}",
                result.source_id,
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Write the batch summary: the fixed header row, then one row per
/// successfully extracted record, in input order. Failed documents get no
/// row.
fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(HEADERS)?;

    for result in results {
        if let Some(record) = &result.record {
            wtr.write_record(record.to_row())?;
        }
    }

    wtr.flush()?;
    Ok(())
}
