use clap::Parser;
use jefit_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jefit2hevy")]
#[command(about = "Convert a JeFit workout export into the Hevy CSV import format", long_about = None)]
struct Cli {
    /// Input (JeFit) export filepath
    #[arg(short, long, default_value = "jefit.csv")]
    input: PathBuf,

    /// Output (Hevy) CSV filepath
    #[arg(short, long, default_value = "Hevy.csv")]
    output: PathBuf,

    /// Timezone offset ('+01:00', '-0500', 'UTC')
    #[arg(short, long, allow_hyphen_values = true)]
    timezone: Option<String>,

    /// Exercise name mapping JSON file
    #[arg(short, long)]
    mapping: Option<PathBuf>,

    /// Use an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    jefit_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Timezone problems are fatal before any processing begins
    let tz_spec = cli
        .timezone
        .unwrap_or_else(|| config.convert.timezone.clone());
    let tz = parse_offset(&tz_spec)?;

    let map = match cli.mapping.or(config.convert.mapping_file) {
        Some(path) => NameMap::load(&path)?,
        None => {
            tracing::info!("No mapping file configured; exercise names pass through unchanged");
            NameMap::default()
        }
    };

    let report = convert_file(&cli.input, &cli.output, &map, tz)?;

    println!(
        "✓ Converted {} sessions / {} exercise logs into {} sets",
        report.sessions, report.log_entries, report.sets
    );
    println!("  Output: {}", cli.output.display());

    if !report.unmapped.is_empty() {
        eprintln!("Warning: the following exercises are not in the mapping:");
        for name in &report.unmapped {
            eprintln!("- {:?}", name);
        }
    }

    Ok(())
}
