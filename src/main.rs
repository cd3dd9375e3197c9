use clap::Parser;
use small_katas::utils::{logger, validation::Validate};
use small_katas::{CliConfig, Command, PairSumReport, VersionCompareReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-katas CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Input validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    match &config.command {
        Command::PairSum { nums, target } => {
            let report = PairSumReport {
                target: *target,
                indices: small_katas::find_index_pair(nums, *target),
            };

            if config.json {
                println!("{}", report.to_json()?);
            } else {
                match report.indices {
                    Some(pair) => println!(
                        "Positions {} and {} sum to {}",
                        pair.first, pair.second, report.target
                    ),
                    None => println!("No pair of values sums to {}", report.target),
                }
            }
        }
        Command::CompareVersions { v1, v2 } => {
            let ordering = match small_katas::compare_versions(v1, v2) {
                Ok(ordering) => ordering,
                Err(e) => {
                    tracing::error!("Version comparison failed: {}", e);
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            let report = VersionCompareReport {
                v1: v1.clone(),
                v2: v2.clone(),
                ordering: ordering as i32,
            };

            if config.json {
                println!("{}", report.to_json()?);
            } else {
                let symbol = match report.ordering {
                    -1 => "<",
                    1 => ">",
                    _ => "==",
                };
                println!("{} {} {}", report.v1, symbol, report.v2);
            }
        }
    }

    Ok(())
}
