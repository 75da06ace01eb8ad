use clap::{ArgAction, Parser};
use silhouette_counter::{CounterConfig, count_silhouettes_in_file};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "silhouette_counter",
    about = "Count dark silhouettes on a light background",
    version
)]
struct Cli {
    /// Image file to analyze
    image: PathBuf,

    /// Channels at or below this value (0-255) are dark
    #[arg(short = 't', long = "threshold", default_value_t = CounterConfig::default().dark_threshold)]
    threshold: u8,

    /// Also print component sizes and the size threshold
    #[arg(short = 'r', long = "report")]
    report: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CounterConfig {
        dark_threshold: cli.threshold,
    };

    match count_silhouettes_in_file(&cli.image, config) {
        Ok(report) => {
            println!("{}", report.silhouettes);
            if cli.report {
                println!("image: {}x{}", report.width, report.height);
                println!("components: {:?}", report.component_sizes);
                match report.size_threshold {
                    Some(threshold) => println!("size threshold: {threshold}"),
                    None => println!("size threshold: n/a"),
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to count silhouettes in {}: {}", cli.image.display(), e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
