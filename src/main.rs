use std::env;
use std::error::Error;

use serde_json::json;
use tracing::info;

use intervals::configuration::Configuration;
use intervals::interval::interval::Interval;
use intervals::subdivision::subdivision::{
    reconstitute,
    refine,
    subintervalise_axes
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match env::args().nth(1) {
        Some(config_path) => Configuration::from_reader(config_path)?,
        None => Configuration::new()
    };
    let pair_axis = config.parse().pair_axis;
    let splits = config.subdivision().splits.clone();

    let x = Interval::from_json(&json!([-2.0, 3.0]), pair_axis)?;
    println!("x        = {}", x);
    println!("sin(x)   = {}", x.sin());
    println!("cos(x)   = {}", x.cos());
    println!("x*x      = {}", x.checked_mul(&x)?);
    println!("x^2      = {}", x.powi(2)?);

    let per_axis = splits.first().copied().unwrap_or(1);
    let square_minus = |t: &Interval| t.checked_mul(t)?.checked_sub(t);
    info!(per_axis, "refining x*x - x");
    println!("x*x - x  = {}", square_minus(&x)?);
    println!("refined  = {}", refine(&x, &[per_axis], square_minus)?);

    let rows = Interval::from_json(&json!([[0.0, 1.0], [2.0, 4.0]]), pair_axis)?;
    let counts = if splits.len() == rows.len() { splits } else { vec![per_axis; rows.len()] };
    let tiles = subintervalise_axes(&rows, &counts)?;
    println!("{} tiles of\n{}", tiles.len(), rows);
    println!("hull     =\n{}", reconstitute(&tiles)?);
    Ok(())
}
