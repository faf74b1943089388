//! Parse the lambda terms in a given source file and print them to standard
//! output in the chosen encoding.
//!
//! Example usage:
//!
//!     cargo run -- \
//!         --encoding debruijn \
//!         --declarative \
//!         --src-filepath test_programs/church_pairs.lam

use clap::Parser;
use rust_lambda_parse::end_to_end::{run_driver, DriverConfig};

fn main() {
    let driver_config = DriverConfig::parse();

    let driver_result = run_driver(&driver_config);

    match driver_result {
        Ok(rendered_terms) => {
            print!("{}", rendered_terms);
        }

        Err(run_error) => {
            eprintln!("{}", run_error);
        }
    }
}
