use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Number of steps to simulate.
    #[clap(short, long, default_value_t = 100)]
    pub steps: usize,

    /// Path to parameter file (YAML). Built-in defaults are used when absent.
    #[clap(short, long)]
    pub parameters: Option<String>,

    /// Seed for the random number generator, overriding the parameter file.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Name of the run, used to label output files.
    #[clap(short, long, default_value = "panzootic")]
    pub name: String,

    /// Path to the output directory.
    #[clap(short, long, default_value = "./out")]
    pub outdir: String,

    /// Path to the log file.
    #[clap(long, default_value = "panzootic.log")]
    pub log_file: String,

    /// Verbosity of logging (-v: debug, -vv: trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable the progress bar.
    #[clap(long)]
    pub disable_progress_bar: bool,
}
