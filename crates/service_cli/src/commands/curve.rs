//! Curve command implementation
//!
//! Prices an option across a grid of underlying prices around the reference
//! spot and renders the `(underlying, price)` pairs.

use serde::Serialize;
use tracing::info;

use pricer_analytic::PriceGrid;

use crate::commands::PriceRequest;
use crate::{CliError, Result};

/// One point of the price curve.
#[derive(Debug, Serialize)]
pub struct CurvePoint {
    /// Underlying price at this grid point
    pub underlying: f64,
    /// Theoretical option price
    pub price: f64,
}

/// Run the curve command
pub fn run(request: &PriceRequest, span: f64, points: usize, format: &str) -> Result<()> {
    info!("Pricing curve...");
    info!("  Type: {}", request.option_type);
    info!("  Reference spot: {}", request.spot);
    info!("  Grid: ±{}% with {} points", span * 100.0, points);
    info!("  Output format: {}", format);

    let grid = PriceGrid::centered(request.spot, span, points)?;
    let model = request.model()?;
    let prices = model.price_many(grid.spots())?;

    let curve: Vec<CurvePoint> = grid
        .spots()
        .iter()
        .zip(&prices)
        .map(|(&underlying, &price)| CurvePoint { underlying, price })
        .collect();

    render(&curve, format)?;

    info!("Curve complete");
    Ok(())
}

fn render(curve: &[CurvePoint], format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(curve)?);
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for point in curve {
                writer.serialize(point)?;
            }
            writer.flush()?;
        }
        "table" => {
            println!("┌────────────┬────────────┐");
            println!("│ Underlying │ Price      │");
            println!("├────────────┼────────────┤");
            for point in curve {
                println!("│ {:>10.2} │ {:>10.4} │", point.underlying, point.price);
            }
            println!("└────────────┴────────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            )));
        }
    }

    Ok(())
}
