use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "watchdog-data-gen")]
#[command(about = "Generate synthetic upstream payloads for the watchdog API")]
pub struct Args {
    /// Which upstream body shape to generate
    #[arg(short = 'k', long, value_enum, default_value = "budget")]
    pub shape: Shape,

    /// Number of fiscal years or observations
    #[arg(short, long, default_value_t = 12)]
    pub count: usize,

    /// First fiscal year / observation year
    #[arg(long, default_value_t = 2015)]
    pub start_year: i32,

    /// Random seed for reproducibility
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shape {
    /// Jurisdiction budget body: `{"data": [...], "total": n}`
    Budget,
    /// Statistics Canada cube body: `{"observations": [{"refPer", "value"}]}`
    Cube,
    /// Bank of Canada Valet body: `{"observations": [{"d", "v"}]}`
    Series,
}

fn budget_payload(rng: &mut StdRng, args: &Args) -> Value {
    let mut years = Vec::with_capacity(args.count);
    let mut revenue = Vec::with_capacity(args.count);
    let mut expenses = Vec::with_capacity(args.count);
    let mut deficit = Vec::with_capacity(args.count);
    let mut net_debt = Vec::with_capacity(args.count);

    let mut debt: f64 = rng.gen_range(600.0..900.0);
    for i in 0..args.count {
        let year = args.start_year + i as i32;
        years.push(format!("{}-{:02}", year, (year + 1) % 100));

        let rev = round1(rng.gen_range(250.0..450.0));
        let exp = round1(rev + rng.gen_range(-20.0..60.0));
        let def = round1(rev - exp);
        debt = round1(debt - def);

        revenue.push(rev);
        expenses.push(exp);
        deficit.push(def);
        net_debt.push(debt);
    }

    json!({
        "data": [{
            "fiscal_years": years,
            "revenue": revenue,
            "expenses": expenses,
            "deficit": deficit,
            "net_debt": net_debt
        }],
        "total": 1
    })
}

fn cube_payload(rng: &mut StdRng, args: &Args) -> Value {
    let observations: Vec<Value> = (0..args.count)
        .map(|i| {
            json!({
                "refPer": (args.start_year + i as i32).to_string(),
                // cube values arrive as strings upstream
                "value": format!("{}", round1(rng.gen_range(-2.0..5.0)))
            })
        })
        .collect();

    json!({ "observations": observations, "totalCount": args.count })
}

fn series_payload(rng: &mut StdRng, args: &Args) -> Value {
    let observations: Vec<Value> = (0..args.count)
        .map(|i| {
            let date = NaiveDate::from_ymd_opt(
                args.start_year + (i / 12) as i32,
                (i % 12) as u32 + 1,
                1,
            )
            .expect("valid synthetic date");
            json!({
                "d": date.to_string(),
                "v": format!("{}", round1(rng.gen_range(0.5..6.5)))
            })
        })
        .collect();

    json!({ "observations": observations, "totalCount": args.count })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let payload = match args.shape {
        Shape::Budget => budget_payload(&mut rng, &args),
        Shape::Cube => cube_payload(&mut rng, &args),
        Shape::Series => series_payload(&mut rng, &args),
    };

    let rendered = serde_json::to_string_pretty(&payload).expect("payload serializes");
    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => {
            io::stdout().write_all(rendered.as_bytes())?;
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(shape: Shape, count: usize) -> Args {
        Args {
            shape,
            count,
            start_year: 2015,
            seed: 42,
            output: None,
        }
    }

    #[test]
    fn budget_payload_has_parallel_series() {
        let mut rng = StdRng::seed_from_u64(42);
        let payload = budget_payload(&mut rng, &args(Shape::Budget, 5));

        let item = &payload["data"][0];
        assert_eq!(item["fiscal_years"].as_array().unwrap().len(), 5);
        assert_eq!(item["revenue"].as_array().unwrap().len(), 5);
        assert_eq!(payload["total"], 1);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            cube_payload(&mut a, &args(Shape::Cube, 8)),
            cube_payload(&mut b, &args(Shape::Cube, 8))
        );
    }

    #[test]
    fn series_payload_walks_months() {
        let mut rng = StdRng::seed_from_u64(42);
        let payload = series_payload(&mut rng, &args(Shape::Series, 14));

        let obs = payload["observations"].as_array().unwrap();
        assert_eq!(obs[0]["d"], "2015-01-01");
        assert_eq!(obs[12]["d"], "2016-01-01");
        assert_eq!(payload["totalCount"], 14);
    }
}
