// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use lastrow as lr;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lr::core::stamp;

/// Blacken the bottom pixel row of every PNG of a folder.
///
/// Results are written into a sibling folder named after the source
/// with a "-modified" suffix. Source images are left untouched.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Folder containing the PNG images.
    #[arg(default_value = "public/edexcel-gcse-maths-answers")]
    source_dir: PathBuf,
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
    let report = stamp::run(&args.source_dir)?;
    println!(
        "Every image got its last row blackened and saved into: {}",
        report.destination.display()
    );
    Ok(())
}
