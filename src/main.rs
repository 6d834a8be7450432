use clap::Parser;
use std::path::{Path, PathBuf};

use unitgen::config::GeneratorConfig;
use unitgen::render::{default_template_dir, UnitRenderer};
use unitgen::unit::{check_identifier, OutputLayout, Unit, UnitLiteral};

// Token injected before generated declarations when --exportMacro is set.
// The trailing space separates it from the declaration that follows.
const EXPORT_MACRO_TOKEN: &str = "UNIT_SYSTEM_EXPORT_MACRO ";

const CONFIG_FILE: &str = "unitgen.toml";

#[derive(Parser)]
#[command(name = "unitgen")]
#[command(about = "A code generator for the unit system library.", long_about = None)]
struct Cli {
    /// Name of the unit
    #[arg(short = 'n', long)]
    name: String,

    /// Id of the unit
    #[arg(short = 'i', long = "unit_identifier", alias = "id")]
    unit_id: i64,

    /// Namespace of the unit
    #[arg(short = 's', long = "namespace", alias = "ns", default_value = "common")]
    namespace: String,

    /// A literal of the unit in json format. One literal per argument.
    #[arg(short = 'l', long = "literal")]
    literals: Vec<String>,

    /// The base directory to output to
    #[arg(long = "baseDir")]
    base_dir: Option<String>,

    /// Use the export macro for the generated types
    #[arg(long = "exportMacro")]
    export_macro: bool,

    /// Put all files in the same given directory. This overwrites the baseDir.
    #[arg(long = "outDir")]
    out_dir: Option<PathBuf>,

    /// Directory containing header.template and source.template
    #[arg(long = "templateDir")]
    template_dir: Option<PathBuf>,

    /// Path to a generator config file
    #[arg(long = "config")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;

    // Parse every literal argument before anything is written
    let mut literals = Vec::new();
    for data in &cli.literals {
        literals.push(UnitLiteral::from_json(data)?);
    }

    check_identifier("unit name", &cli.name)?;
    check_identifier("namespace", &cli.namespace)?;

    let export_macro = if cli.export_macro || config.export_macro {
        EXPORT_MACRO_TOKEN.to_string()
    } else {
        String::new()
    };

    let unit = Unit {
        name: cli.name,
        namespace: cli.namespace,
        unit_id: cli.unit_id,
        literals,
        export_macro,
        out_dir: cli.out_dir,
    };

    let base_dir = cli.base_dir.unwrap_or(config.base_dir);
    let layout = OutputLayout::new(&base_dir);

    let template_dir = cli
        .template_dir
        .or_else(|| config.template_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(default_template_dir);
    let renderer = UnitRenderer::from_directory(&template_dir)?;

    let header_text = renderer.render_header(&unit)?;
    let source_text = renderer.render_source(&unit)?;

    let header_path = layout.header_path(&unit)?;
    std::fs::write(&header_path, header_text)
        .map_err(|e| format!("failed to write {}: {}", header_path.display(), e))?;

    let source_path = layout.source_path(&unit)?;
    std::fs::write(&source_path, source_text)
        .map_err(|e| format!("failed to write {}: {}", source_path.display(), e))?;

    println!(
        "Generated {} and {}",
        header_path.display(),
        source_path.display()
    );

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => GeneratorConfig::load_from_file(path),
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                GeneratorConfig::load_from_file(default_path)
            } else {
                Ok(GeneratorConfig::empty())
            }
        }
    }
}
