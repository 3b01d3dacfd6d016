// Example: plot_price_curve.rs
// Prices calls and puts across a range of spot prices and writes an SVG with
// both price curves and their discounted intrinsic values.
//
// Usage:
//     cargo run --example plot_price_curve -- [output.svg]
//
// The output image defaults to price_curve.svg in the working directory.

use std::error::Error;

use plotters::prelude::*;
use parity_lib::{default_configs, price_batch, OptionType, PricingInputs};

fn main() -> Result<(), Box<dyn Error>> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "price_curve.svg".to_string());

    let config = default_configs::strict();
    let base = config.defaults;
    let discounted_strike = base.discounted_strike();

    let spot_min = base.strike * 0.5;
    let spot_max = base.strike * 1.5;
    let steps = 200;
    let spots: Vec<f64> = (0..=steps)
        .map(|i| spot_min + (spot_max - spot_min) * (i as f64) / (steps as f64))
        .collect();

    let ladder = |option_type: OptionType| -> Vec<PricingInputs> {
        spots
            .iter()
            .map(|&spot| PricingInputs {
                spot,
                option_type,
                ..base
            })
            .collect()
    };

    let mut call_line = Vec::with_capacity(spots.len());
    for report in price_batch(ladder(OptionType::Call), &config) {
        let report = report?;
        call_line.push((report.inputs.spot, report.greeks.price));
    }
    let mut put_line = Vec::with_capacity(spots.len());
    for report in price_batch(ladder(OptionType::Put), &config) {
        let report = report?;
        put_line.push((report.inputs.spot, report.greeks.price));
    }

    let call_intrinsic: Vec<(f64, f64)> = spots
        .iter()
        .map(|&s| (s, (s - discounted_strike).max(0.0)))
        .collect();
    let put_intrinsic: Vec<(f64, f64)> = spots
        .iter()
        .map(|&s| (s, (discounted_strike - s).max(0.0)))
        .collect();

    let y_max = call_line
        .iter()
        .chain(put_line.iter())
        .map(|&(_, p)| p)
        .fold(0.0, f64::max)
        * 1.05;

    let root = SVGBackend::new(&output, (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Black-Scholes price vs spot | K={} T={}y r={:.2}% sigma={:.1}%",
                base.strike,
                base.time_to_expiry,
                base.rate * 100.0,
                base.volatility * 100.0
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(spot_min..spot_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Spot ($)")
        .y_desc("Option price ($)")
        .draw()?;

    chart
        .draw_series(vec![PathElement::new(call_line, RED.stroke_width(2))])?
        .label("Call")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .draw_series(vec![PathElement::new(put_line, BLUE.stroke_width(2))])?
        .label("Put")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart.draw_series(vec![PathElement::new(call_intrinsic, RED.mix(0.4))])?;
    chart.draw_series(vec![PathElement::new(put_intrinsic, BLUE.mix(0.4))])?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    println!("Chart saved to {}", output);
    Ok(())
}
