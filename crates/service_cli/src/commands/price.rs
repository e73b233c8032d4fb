//! Price command implementation
//!
//! Prices a single option with the pricer_analytic closed form.

use tracing::info;

use crate::commands::PriceRequest;
use crate::Result;

/// Run the price command
pub fn run(request: &PriceRequest) -> Result<()> {
    info!("Pricing single option...");
    info!("  Type: {}", request.option_type);
    info!("  Spot: {}", request.spot);
    info!("  Strike: {}", request.strike);
    info!("  Maturity: {} years", request.maturity);
    info!("  Rate: {}", request.rate);
    info!("  Dividend yield: {}", request.dividend_yield);
    info!("  Volatility: {}", request.volatility);

    let model = request.model()?;
    let price = model.price(request.spot)?;

    println!(
        "{} K={} T={} σ={} → {:.4}",
        request.option_type, request.strike, request.maturity, request.volatility, price
    );

    info!("Pricing complete");
    Ok(())
}
