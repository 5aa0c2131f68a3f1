//! Command-line interface for xmlmap

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::Read;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use xmlmap::{ConverterConfig, JsonToXmlConverter, MappingSchema};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "xmlmap")]
#[command(author, version, about = "Schema-driven JSON to XML conversion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a JSON document to XML
    Convert {
        /// Path to the JSON mapping schema
        #[arg(short, long, value_name = "SCHEMA")]
        map: PathBuf,

        /// Path to the JSON input (defaults to stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,

        /// Emit an XML declaration
        #[arg(short, long)]
        declaration: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a mapping schema, check it is complete and summarize it
    Check {
        /// Path to the JSON mapping schema
        #[arg(short, long, value_name = "SCHEMA")]
        map: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            map,
            input,
            pretty,
            declaration,
            output,
        } => cmd_convert(map, input, pretty, declaration, output),
        Commands::Check { map, json } => cmd_check(map, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn cmd_convert(
    map: PathBuf,
    input: Option<PathBuf>,
    pretty: bool,
    declaration: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConverterConfig::new()
        .with_pretty(pretty)
        .with_xml_declaration(declaration);
    let converter = JsonToXmlConverter::from_schema_file_with_config(&map, config)?;

    let json = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let xml = converter.convert_str(&json)?;

    if let Some(output_path) = output {
        fs::write(output_path, &xml)?;
    } else {
        println!("{}", xml);
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_check(map: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let schema = MappingSchema::from_file(&map)?;
    let root = schema.validate()?;
    let summary = schema.summary();

    if json_output {
        let json = serde_json::json!({
            "root": root.xml_node_name,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("xmlmap v{}", xmlmap::VERSION);
        println!();
        println!("Mapping schema is complete.");
        println!("  Root Element: {}", root.xml_node_name);
        println!("  Elements: {}", summary.elements);
        println!("  Attributes: {}", summary.attributes);
        println!("  Max Depth: {}", summary.max_depth);
        println!();
        println!("Elements by type:");
        for (tag, count) in &summary.by_type {
            println!("  {}: {}", tag, count);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
