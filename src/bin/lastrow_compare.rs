// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use lastrow as lr;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lr::core::compare;

/// Compare two folders of PNGs pixel by pixel, ignoring the last row.
///
/// Images are paired by their position in each folder sorted by name.
/// Different image counts or different image sizes abort the run.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Reference folder.
    #[arg(default_value = "public/edexcel-gcse-maths-answers")]
    reference_dir: PathBuf,
    /// Candidate folder.
    #[arg(default_value = "public/edexcel-gcse-maths-answers-old")]
    candidate_dir: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(error) = my_run(&args) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn my_run(args: &Args) -> Result<(), lr::Error> {
    let comparison = compare::Comparison::new(&args.reference_dir, &args.candidate_dir)?;
    println!(
        "Checking {} image pairs for equality (except last row)...",
        comparison.total()
    );
    comparison.run(|verdict| println!("{}", verdict))?;

    println!("Comparison complete. Only the bottom row was ignored.");
    Ok(())
}
