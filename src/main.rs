use clap::Parser;

use panzootic::args::Args;
use panzootic::runner::Runner;

fn main() {
    let args = Args::parse();

    let mut runner = Runner::new(args).unwrap_or_else(|err| {
        eprintln!("Unable to init simulation: {err}.");
        std::process::exit(1);
    });

    runner.start().unwrap_or_else(|err| {
        eprintln!("Unable to run simulation: {err}.");
        std::process::exit(1);
    });
}
