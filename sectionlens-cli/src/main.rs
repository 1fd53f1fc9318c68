use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use sectionlens::{render_text_report, section_clean_html, sections_to_json};
use sectionlens_core::{DetectionConfig, ElementRecord, SectionDetector};

#[derive(Parser)]
#[command(name = "sectionlens")]
#[command(about = "Detect visual sections in web pages from rendered element geometry")]
struct Args {
    /// Path to an element-record JSON file produced by the page renderer
    /// (use "-" to read from stdin)
    #[arg(short, long)]
    input: String,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Output format: text or json
    #[arg(short = 'f', long, default_value = "text")]
    output_format: String,

    /// Save each section's HTML to the specified directory
    #[arg(long)]
    save_html: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("🔎 Sectionlens Section Detector");

    let config = DetectionConfig::load_with_fallback(args.config.as_deref());
    if let Some(config_path) = &args.config {
        println!("📋 Loaded config from: {}", config_path);
    } else {
        println!("📋 Using default config");
    }

    let elements = read_elements(&args.input)?;
    println!("📄 Analyzing {} element records", elements.len());

    let detector = SectionDetector::with_config(config);
    let sections = match detector.detect_sections(elements) {
        Ok(sections) => sections,
        Err(e) => {
            eprintln!("❌ Detection failed: {e}");
            std::process::exit(1);
        }
    };

    match args.output_format.as_str() {
        "json" => {
            let report = sections_to_json(&sections);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            println!("{}", render_text_report(&sections));
        }
        other => {
            println!("⚠️  Unknown output format '{other}', using text");
            println!("{}", render_text_report(&sections));
        }
    }

    if let Some(save_dir) = &args.save_html {
        save_section_html(&sections, save_dir)?;
    }

    Ok(())
}

fn read_elements(input: &str) -> Result<Vec<ElementRecord>> {
    let contents = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read element records from stdin")?;
        buffer
    } else {
        if !Path::new(input).exists() {
            anyhow::bail!("Input file not found: {input}");
        }
        fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))?
    };

    serde_json::from_str(&contents).context("Invalid element-record JSON")
}

fn save_section_html(sections: &[sectionlens_core::Section], save_dir: &str) -> Result<()> {
    let dir = PathBuf::from(save_dir);
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {save_dir}"))?;

    println!("\n💾 Saving section HTML to: {}", dir.display());
    for section in sections {
        let filename = dir.join(format!(
            "section_{}_{}.html",
            section.id, section.section_type
        ));
        fs::write(&filename, section_clean_html(section))
            .with_context(|| format!("Failed to write {}", filename.display()))?;
        println!("   Saved: {}", filename.display());
    }

    Ok(())
}
