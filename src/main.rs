//! Export cost simulator
//!
//! Breaks down the cost of an export operation under each Incoterm,
//! recommends a trade term for the exporter's profile and compares what the
//! seller ends up paying under the main terms.

mod analysis;
mod error;
mod models;
mod pricing;
mod report;

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use crate::analysis::OperationSummary;
use crate::models::{countries, find_product, products, trade_terms, Experience, Incoterm, ShipmentRequest};
use crate::pricing::{SimulatorConfig, TermComparison};
use crate::report::{pct, write_comparison, write_costs, write_term_info, Simulator, TermChoice};

/// Export cost and Incoterm simulator CLI.
#[derive(Parser)]
#[command(name = "incoterm-sim")]
#[command(about = "Simulate export costs and pick a trade term", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "INCOTERM_SIM_LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// JSON file overriding rates, fees and thresholds
    #[arg(short, long, env = "INCOTERM_SIM_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Shipment options shared by the pricing commands.
#[derive(Args)]
struct ShipmentArgs {
    /// Product to export (see `products`)
    #[arg(short, long)]
    product: String,

    /// Destination country (see `countries`)
    #[arg(short, long)]
    destination: String,

    /// FOB value in USD (defaults to the product's average value)
    #[arg(short, long)]
    fob: Option<Decimal>,

    /// Shipment weight in tons (defaults to the product's reference volume)
    #[arg(short, long)]
    weight: Option<Decimal>,
}

impl ShipmentArgs {
    fn into_request(self) -> Result<ShipmentRequest> {
        let product = find_product(&self.product)?;
        let mut request = ShipmentRequest::for_product(product, self.destination);
        if let Some(fob) = self.fob {
            request.fob_value = fob;
        }
        if let Some(weight) = self.weight {
            request.weight_tons = weight;
        }
        request.validate()?;
        Ok(request)
    }
}

/// Term selection for commands that price a single term.
#[derive(Args)]
struct TermArgs {
    /// Incoterm to use (defaults to the recommendation)
    #[arg(short, long)]
    term: Option<String>,

    /// Exporter experience, drives the recommendation (beginner, intermediate, expert)
    #[arg(short, long, default_value = "intermediate")]
    experience: String,
}

impl TermArgs {
    fn apply(self, mut request: ShipmentRequest) -> Result<ShipmentRequest> {
        request.experience = Experience::from_str(&self.experience);
        request.trade_term = self.term.as_deref().map(Incoterm::parse).transpose()?;
        Ok(request)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List destination markets
    Countries,

    /// List export products
    Products,

    /// List all Incoterms
    Terms,

    /// Show who does what under one Incoterm
    Term {
        /// Incoterm code, e.g. FOB
        code: String,
    },

    /// Recommend a trade term for an exporter profile
    Recommend {
        /// Destination country
        #[arg(short, long)]
        destination: String,

        /// Exporter experience (beginner, intermediate, expert)
        #[arg(short, long, default_value = "intermediate")]
        experience: String,

        /// Operation value in USD
        #[arg(short, long)]
        value: Decimal,
    },

    /// Itemized costs under one term
    Costs {
        #[command(flatten)]
        shipment: ShipmentArgs,

        #[command(flatten)]
        selection: TermArgs,
    },

    /// Compare seller and buyer costs across the main terms
    Compare {
        #[command(flatten)]
        shipment: ShipmentArgs,

        /// Comma-separated terms (defaults to EXW,FOB,CFR,CIF,DAP)
        #[arg(short, long, value_delimiter = ',')]
        terms: Vec<String>,
    },

    /// Full report: recommendation, costs, market analysis and comparison
    Simulate {
        #[command(flatten)]
        shipment: ShipmentArgs,

        #[command(flatten)]
        selection: TermArgs,
    },

    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &cli.config {
        Some(path) => SimulatorConfig::from_file(path)?,
        None => SimulatorConfig::default(),
    };
    debug!(config = ?config, "Loaded configuration");

    let simulator = Simulator::new(config);
    let json = cli.json;

    match cli.command {
        Commands::Countries => {
            if json {
                return print_json(countries());
            }
            println!(
                "\n{:<16} {:>7} {:<22} {:>7}",
                "COUNTRY", "SHARE", "AGREEMENT", "TARIFF"
            );
            println!("{}", "-".repeat(56));
            for c in countries() {
                println!(
                    "{:<16} {:>6}% {:<22} {:>6}%",
                    c.name, c.export_share_pct, c.trade_agreement, c.base_tariff_pct
                );
            }
        }

        Commands::Products => {
            if json {
                return print_json(products());
            }
            println!(
                "\n{:<22} {:<26} {:>10} {:>10}",
                "PRODUCT", "CATEGORY", "USD/TON", "REF TONS"
            );
            println!("{}", "-".repeat(71));
            for p in products() {
                println!(
                    "{:<22} {:<26} {:>10} {:>10}",
                    p.name, p.category, p.average_value_per_ton, p.reference_volume_tons
                );
            }
        }

        Commands::Terms => {
            if json {
                return print_json(trade_terms());
            }
            println!("\n{:<5} {:<32} {}", "CODE", "NAME", "SELLER RISK");
            println!("{}", "-".repeat(64));
            for t in trade_terms() {
                println!("{:<5} {:<32} {}", t.code, t.full_name, t.risk_level);
            }
        }

        Commands::Term { code } => {
            let term = Incoterm::parse(&code)?;
            if json {
                return print_json(term.info());
            }
            println!();
            print!("{}", render(|f| write_term_info(f, term.info())));
        }

        Commands::Recommend {
            destination,
            experience,
            value,
        } => {
            let experience = Experience::from_str(&experience);
            let rec = simulator
                .advisor()
                .recommend_term(&destination, experience, value);
            if json {
                return print_json(&rec);
            }
            println!("\nRecommended: {} ({})", rec.term, rec.rationale);
            print!("{}", render(|f| write_term_info(f, rec.term.info())));
        }

        Commands::Costs { shipment, selection } => {
            let request = selection.apply(shipment.into_request()?)?;
            let (choice, costs) = simulator.costs(&request)?;
            let summary = OperationSummary::from_breakdown(&costs, simulator.config().margin_pct)?;

            if json {
                #[derive(Serialize)]
                struct CostsOutput<'a> {
                    choice: &'a TermChoice,
                    costs: &'a crate::models::CostBreakdown,
                    summary: &'a OperationSummary,
                }
                return print_json(&CostsOutput {
                    choice: &choice,
                    costs: &costs,
                    summary: &summary,
                });
            }

            println!(
                "\n{} to {} | ${:.2} | {} t",
                request.product.name,
                request.destination,
                request.fob_value,
                request.weight_tons.normalize()
            );
            match &choice {
                TermChoice::Manual { term } => println!("Term: {term} (manual)"),
                TermChoice::Recommended(rec) => {
                    println!("Term: {} (recommended: {})", rec.term, rec.rationale)
                }
            }
            println!();
            print!("{}", render(|f| write_costs(f, &summary)));
        }

        Commands::Compare { shipment, terms } => {
            let request = shipment.into_request()?;
            let rows: Vec<TermComparison> = if terms.is_empty() {
                simulator.comparison().compare_reference(&request)?
            } else {
                let terms = terms
                    .iter()
                    .map(|t| Incoterm::parse(t))
                    .collect::<Result<Vec<_>, _>>()?;
                simulator.comparison().compare_terms(&terms, &request)?
            };

            if json {
                return print_json(&rows);
            }
            println!(
                "\n{} to {} | ${:.2} | {} t\n",
                request.product.name,
                request.destination,
                request.fob_value,
                request.weight_tons.normalize()
            );
            print!("{}", render(|f| write_comparison(f, &rows)));
        }

        Commands::Simulate { shipment, selection } => {
            let request = selection.apply(shipment.into_request()?)?;
            let report = simulator
                .simulate(request)
                .context("simulation failed")?;
            if json {
                return print_json(&report);
            }
            println!("{}", report);
        }

        Commands::Config => {
            let config = simulator.config();
            if json {
                return print_json(config);
            }
            let p = &config.pricing;
            println!("\n=== Pricing ===\n");
            println!("  Insurance:             {}% of CIF", pct(p.insurance_rate));
            println!("  Banking fee:           {}% of FOB", pct(p.banking_rate));
            println!("  Certification:         ${}", p.certification_fee);
            println!("  Export clearance:      ${}", p.export_clearance_fee);
            println!("  Import clearance:      ${}", p.import_clearance_fee);
            println!("  Import clearance (DDP): ${}", p.delivered_import_clearance_fee);
            println!("  Fallback freight:      ${}/t", p.fallback_freight_rate);

            println!("\n=== Advisor ===\n");
            println!("  Small operation below: ${}", config.advisor.small_operation_limit);
            println!("  Large operation above: ${}", config.advisor.large_operation_limit);

            println!("\n=== Summary ===\n");
            println!("  Suggested margin:      {}%", pct(config.margin_pct));
            println!("  High value above:      ${}/t", config.high_value_per_ton);
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}

/// Adapts a formatter callback to `Display` so table writers can go to stdout.
struct Render<F>(F);

fn render<F>(write: F) -> Render<F>
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    Render(write)
}

impl<F> fmt::Display for Render<F>
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("incoterm-sim").chain(args.iter().copied()))
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "simulate", "-p", "Beef", "-d", "China", "--log-level", "debug", "--config", "sim.json",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.config, Some(PathBuf::from("sim.json")));
        assert!(matches!(cli.command, Commands::Simulate { .. }));

        let cli = parse(&["--log-level", "info", "countries"]).unwrap();
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_costs_term_and_experience() {
        let cli = parse(&["costs", "-p", "Wheat", "-d", "Chile", "-e", "beginner", "-t", "fob"]).unwrap();
        let Commands::Costs { shipment, selection } = cli.command else {
            panic!("expected costs command");
        };
        let request = selection.apply(shipment.into_request().unwrap()).unwrap();
        assert_eq!(request.experience, Experience::Beginner);
        assert_eq!(request.trade_term, Some(Incoterm::Fob));
    }

    #[test]
    fn test_unknown_term_is_rejected() {
        let cli = parse(&["simulate", "-p", "Beef", "-d", "China", "-t", "XYZ"]).unwrap();
        let Commands::Simulate { shipment, selection } = cli.command else {
            panic!("expected simulate command");
        };
        assert!(selection.apply(shipment.into_request().unwrap()).is_err());
    }

    #[test]
    fn test_compare_does_not_take_experience() {
        assert!(parse(&["compare", "-p", "Beef", "-d", "China", "--experience", "expert"]).is_err());
        assert!(parse(&["compare", "-p", "Beef", "-d", "China", "-t", "fob,cif"]).is_ok());
    }
}
