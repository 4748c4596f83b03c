//! Process command - extract data from a single invoice file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use frex_core::{extract_record, invoice_id, InvoiceRecord, TemplateProfile, HEADERS};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Template profile override (template-a or template-b)
    #[arg(short, long)]
    template: Option<TemplateProfile>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (header row plus one record row)
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if let Some(template) = args.template {
        config.template = template;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let filename = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("invoice.pdf");
    let source_id = invoice_id(filename, config.template.identifier_policy());

    let data = fs::read(&args.input)?;
    let record = extract_record(&data, &source_id, &config)
        .map_err(|e| anyhow::anyhow!("{}: {}", source_id, e))?;

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_record(record: &InvoiceRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &InvoiceRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(HEADERS)?;
    wtr.write_record(record.to_row())?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &InvoiceRecord) -> String {
    let row = record.to_row();
    let mut output = String::new();

    for (header, value) in HEADERS.iter().zip(row.iter()) {
        let shown = if value.is_empty() { "-" } else { value };
        output.push_str(&format!("{:<14} {}\n", header, shown));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> InvoiceRecord {
        InvoiceRecord {
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            filename: "DN26693A".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2024, 3, 10),
            currency: Some(frex_core::Currency::Usd),
            shipper: None,
            weight_kg: None,
            volume_m3: None,
            chargeable_kg: None,
            chargeable_cbm: None,
            pieces: Some(5),
            subtotal: None,
            freight_mode: None,
            freight_rate: None,
        }
    }

    #[test]
    fn test_csv_output_has_header_and_one_row() {
        let csv = format_csv(&sample_record()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Timestamp,Filename,"));
        assert!(lines[1].contains("DN26693A"));
    }

    #[test]
    fn test_text_output_marks_absent_fields() {
        let text = format_text(&sample_record());
        assert!(text.contains("Shipper"));
        assert!(text.contains("-"));
        assert!(text.contains("DN26693A"));
    }
}
