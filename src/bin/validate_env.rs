use std::{env, process};

use clap::Parser;

use greenstagram_api::app::{
    env::load_dotenv,
    util::env_check::{self, Target, KNOWN_VARIABLES},
};

/// Checks that the variables a Greenstagram deployment needs are set.
#[derive(Debug, Parser)]
#[command(name = "validate-env")]
struct Args {
    /// Which deployment to check.
    #[arg(long, value_enum, default_value_t = Target::All)]
    target: Target,

    /// Also list every known variable with its value masked.
    #[arg(long)]
    show: bool,
}

fn main() {
    let args = Args::parse();

    match load_dotenv() {
        Some(filename) => println!("loaded {}", filename),
        None => println!("no dotenv file loaded, using process environment"),
    }

    if args.show {
        for name in KNOWN_VARIABLES {
            match env::var(name) {
                Ok(value) => println!("{:<28} set ({})", name, env_check::mask(&value)),
                Err(_) => println!("{:<28} unset", name),
            }
        }
        println!();
    }

    let report = env_check::check(args.target, |name| env::var(name).ok());
    print!("{}", report);

    if !report.is_ok() {
        println!(
            "{} required variable(s) missing",
            report.missing().len()
        );
        process::exit(1);
    }

    println!("all required variables are set");
}
