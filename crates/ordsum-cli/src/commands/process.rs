//! Process command - summarize a single order-confirmation PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use async_trait::async_trait;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use ordsum_core::enrich::{enrich_items, QuantityLookup, RetailQuantityLookup};
use ordsum_core::models::config::OrdsumConfig;
use ordsum_core::models::order::{OrderRecord, QuantityOutcome};
use ordsum_core::order::{OrderParser, RuleOrderParser};
use ordsum_core::pdf::{PdfExtractor, PdfProcessor};
use ordsum_core::render::render_order_html;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input order-confirmation PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: OutputFormat,

    /// Look up pack quantities for each item on the retail site
    #[arg(long)]
    enrich: bool,

    /// Show parser warnings
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// HTML summary fragment
    Html,
    /// JSON record
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        OrdsumConfig::from_file(std::path::Path::new(path))?
    } else {
        OrdsumConfig::default()
    };

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;
    debug!("PDF has {} pages", extractor.page_count());

    let text = extractor.extract_text()?;
    if text.trim().len() < config.pdf.min_text_length {
        anyhow::bail!("No text could be extracted from the PDF");
    }

    let outcome = RuleOrderParser::new().parse(&text);
    let mut record = outcome.record;

    if args.show_warnings && !outcome.warnings.is_empty() {
        eprintln!("{}", style("Parser warnings:").yellow());
        for warning in &outcome.warnings {
            eprintln!("  - {}", warning);
        }
    }

    if args.enrich || config.enrichment.enabled {
        enrich(&mut record, &config).await;
    }

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

/// Run the live lookups with a per-item progress bar.
async fn enrich(record: &mut OrderRecord, config: &OrdsumConfig) {
    let pb = ProgressBar::new(record.items.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb.set_message("Looking up pack quantities");

    let lookup = ProgressLookup {
        inner: RetailQuantityLookup::new(&config.enrichment),
        bar: &pb,
    };
    enrich_items(record, &lookup).await;

    pb.finish_with_message("Done");
}

/// Ticks the progress bar after each sequential lookup.
struct ProgressLookup<'a> {
    inner: RetailQuantityLookup,
    bar: &'a ProgressBar,
}

#[async_trait]
impl QuantityLookup for ProgressLookup<'_> {
    async fn lookup(&self, item_name: &str) -> QuantityOutcome {
        let outcome = self.inner.lookup(item_name).await;
        self.bar.inc(1);
        outcome
    }
}

fn format_record(record: &OrderRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Html => Ok(render_order_html(record)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_text(record: &OrderRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Order: {}\n", record.order_number));
    output.push_str(&format!("Placed: {}\n", record.order_date));
    output.push_str(&format!("Status: {}\n", record.status));
    output.push_str(&format!("Total: {}\n", record.order_total));
    output.push('\n');

    output.push_str("Items:\n");
    for item in &record.items {
        match &item.exact_quantity {
            Some(outcome) => output.push_str(&format!(
                "  {} x {} @ ${} (package quantity: {})\n",
                item.quantity, item.name, item.unit_price, outcome
            )),
            None => output.push_str(&format!(
                "  {} x {} @ ${}\n",
                item.quantity, item.name, item.unit_price
            )),
        }
    }
    output.push('\n');

    output.push_str("Charges:\n");
    for (key, value) in record.charges.entries() {
        output.push_str(&format!("  {}: {}\n", key, value));
    }
    output.push('\n');

    let address = &record.shipping_address;
    output.push_str("Ship to:\n");
    output.push_str(&format!("  {}\n", address.name));
    output.push_str(&format!("  {}\n", address.line1));
    output.push_str(&format!("  {}\n", address.line2));
    output.push_str(&format!("  {}\n", address.country));
    output.push('\n');

    let payment = &record.payment_information;
    output.push_str(&format!("Payment: {}\n", payment.method));
    output.push_str(&format!(
        "Billed to: {}, {}, {}\n",
        payment.billing.name, payment.billing.line1, payment.billing.country
    ));

    output
}
