//! Optionscope CLI - Command Line Operations for European Option Pricing
//!
//! This is the operational entry point for the optionscope pricing library.
//!
//! # Commands
//!
//! - `optionscope price --spot 100 --strike 105 --type call` - Price a single option
//! - `optionscope curve --spot 100 --type put --format table` - Price a curve of
//!   underlying prices around the reference spot
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate is a thin caller of
//! `pricer_analytic`: it resolves parameters from flags and the configuration
//! file, invokes the pure pricing core, and renders the result.

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pricer_analytic::OptionType;

mod commands;
mod config;
mod error;

pub use config::MarketConfig;
pub use error::{CliError, Result};

/// Optionscope European Option Pricer CLI
#[derive(Parser)]
#[command(name = "optionscope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "optionscope.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

/// Option parameters shared by the pricing commands.
///
/// Flags not given fall back to the configuration file's defaults.
#[derive(Args)]
struct OptionParams {
    /// Option type (call or put)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    option_type: OptionType,

    /// Current underlying price (falls back to `spot` in the config file)
    #[arg(short, long)]
    spot: Option<f64>,

    /// Strike price (defaults to the reference spot)
    #[arg(short = 'k', long)]
    strike: Option<f64>,

    /// Time to maturity in years
    #[arg(short, long)]
    maturity: Option<f64>,

    /// Risk-free rate (annualised, continuously compounded)
    #[arg(short, long)]
    rate: Option<f64>,

    /// Continuous dividend yield
    #[arg(short = 'q', long)]
    dividend_yield: Option<f64>,

    /// Volatility (annualised)
    #[arg(long)]
    volatility: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single option
    Price {
        #[command(flatten)]
        params: OptionParams,
    },

    /// Price a curve of underlying prices around the reference spot
    Curve {
        #[command(flatten)]
        params: OptionParams,

        /// Number of grid points (overrides the config)
        #[arg(long)]
        points: Option<usize>,

        /// Grid half-span as a fraction of spot (overrides the config)
        #[arg(long)]
        span: Option<f64>,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = MarketConfig::load(&cli.config)?;

    match cli.command {
        Commands::Price { params } => commands::price::run(&params.resolve(&config)?),
        Commands::Curve {
            params,
            points,
            span,
            format,
        } => {
            let request = params.resolve(&config)?;
            commands::curve::run(
                &request,
                span.unwrap_or(config.grid_span),
                points.unwrap_or(config.grid_points),
                &format,
            )
        }
    }
}

impl OptionParams {
    /// Merges the flags with the configuration defaults into a concrete
    /// pricing request, checked against the configured controllable ranges.
    fn resolve(&self, config: &MarketConfig) -> Result<commands::PriceRequest> {
        let spot = config.resolve_spot(self.spot)?;

        let request = commands::PriceRequest {
            option_type: self.option_type,
            spot,
            strike: self.strike.unwrap_or(spot),
            maturity: self.maturity.unwrap_or(config.default_maturity),
            rate: self.rate.unwrap_or(config.rate),
            dividend_yield: self.dividend_yield.unwrap_or(config.dividend_yield),
            volatility: self.volatility.unwrap_or(config.default_volatility),
        };

        config.validate_params(
            request.spot,
            request.strike,
            request.maturity,
            request.volatility,
        )?;

        Ok(request)
    }
}
