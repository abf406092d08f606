//! `igem-dist` assembles every construct in a parts catalog and writes the
//! resulting SBOL3 document.
//!
//! **Outputs** (`<stem>` is the catalog file name without extension):
//! - `<out>/<stem>.ttl` (Turtle)
//! - `<out>/<stem>.nt` (N-Triples)
//! - `<out>/<stem>.jsonld` (JSON-LD)
//!
//! **Usage:**
//! ```text
//! igem-dist --catalog <toml> [--out <path>] [--format all|turtle|ntriples|jsonld]
//!           [--no-validate] [--report <json>]
//! ```
//!
//! Exits non-zero if validation finds a failure. Set `RUST_LOG` to adjust
//! logging (default `info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use igem_assembly::Catalog;
use igem_conformance::{Severity, ValidationReport};
use igem_sbol::serializer::{jsonld, ntriples, turtle};
use igem_sbol::Document;
use tracing_subscriber::EnvFilter;

/// Which serializations to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    All,
    Turtle,
    Ntriples,
    Jsonld,
}

impl Format {
    fn includes(self, other: Format) -> bool {
        self == Format::All || self == other
    }
}

/// Assemble the constructs of an iGEM parts catalog.
#[derive(Parser)]
#[command(name = "igem-dist", about = "Assemble part-in-backbone constructs into SBOL3")]
struct Args {
    /// Parts catalog (TOML).
    #[arg(long)]
    catalog: PathBuf,

    /// Output directory for generated documents.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Serialization to write.
    #[arg(long, value_enum, default_value_t = Format::All)]
    format: Format,

    /// Skip SBOL3 validation of the assembled document.
    #[arg(long)]
    no_validate: bool,

    /// Also write the validation report as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;
    let doc = catalog.build().context("Failed to assemble catalog constructs")?;

    println!(
        "{}: {} components, {} sequences, {} constructs",
        catalog.namespace,
        doc.components().count(),
        doc.sequences().count(),
        catalog.constructs.len()
    );

    if !args.no_validate {
        let report = igem_conformance::validate(&doc);
        print_report(&report);
        if let Some(path) = &args.report {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize validation report")?;
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        if !report.all_passed() {
            eprintln!(
                "Validation FAILED: {} check(s) did not pass.",
                report.failure_count()
            );
            process::exit(1);
        }
    }

    let stem = args
        .catalog
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("distribution");
    write_outputs(&doc, &args.out, stem, args.format)?;

    println!("Build complete.");
    Ok(())
}

fn print_report(report: &ValidationReport) {
    for finding in &report.findings {
        let status = match finding.severity {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        println!("[{status}] {}: {}", finding.validator, finding.message);
        for detail in &finding.details {
            println!("       {detail}");
        }
    }
    println!(
        "Summary: {} findings, {} warnings, {} failed",
        report.findings.len(),
        report.warning_count(),
        report.failure_count()
    );
}

fn write_outputs(doc: &Document, out: &Path, stem: &str, format: Format) -> Result<()> {
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    if format.includes(Format::Turtle) {
        write(&out.join(format!("{stem}.ttl")), &turtle::to_turtle(doc))?;
    }
    if format.includes(Format::Ntriples) {
        write(&out.join(format!("{stem}.nt")), &ntriples::to_ntriples(doc))?;
    }
    if format.includes(Format::Jsonld) {
        let json = serde_json::to_string_pretty(&jsonld::to_json_ld(doc))
            .context("Failed to serialize document to JSON-LD")?;
        write(&out.join(format!("{stem}.jsonld")), &json)?;
    }
    Ok(())
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "written");
    Ok(())
}
