//! Plate check from the command line

use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;

use plate_check::prelude::*;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "plate-check",
    about = "Bending and shear check of a rectangular steel plate (simplified AS 4100:2020)"
)]
struct Options {
    /// Plate width b (mm)
    #[structopt(short = "b", long, default_value = "200")]
    width: f64,

    /// Plate thickness t (mm)
    #[structopt(short = "t", long, default_value = "10")]
    thickness: f64,

    /// Applied bending moment M (kNm)
    #[structopt(short = "m", long, default_value = "50")]
    moment: f64,

    /// Applied total load P (kN)
    #[structopt(short = "p", long, default_value = "100")]
    load: f64,

    /// Steel yield strength fy (MPa)
    #[structopt(short = "f", long = "fy", default_value = "250")]
    yield_strength: f64,

    /// Capacity reduction factor φ
    #[structopt(long, default_value = "0.9")]
    phi: f64,

    /// Read the inputs from a JSON file instead of the flags
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Print the result as JSON
    #[structopt(long)]
    json: bool,
}

impl Options {
    fn plate_input(&self) -> PlateInput {
        PlateInput::new(
            self.width,
            self.thickness,
            self.moment,
            self.load,
            self.yield_strength,
            self.phi,
        )
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = Options::from_args();
    let input = options
        .plate_input()
        .or_from_file(options.input.as_deref())
        .context("Invalid plate input")?;
    log::debug!("{:?}", input);

    let result = compute(&input);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", Report::from_result(&result));
    }

    Ok(())
}
