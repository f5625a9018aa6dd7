use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io;
use std::path::Path;

use crate::args::Args;
use crate::config::Parameters;
use crate::errors::Result;
use crate::report::{CsvReportWriter, ReportWriter};
use crate::simulation::Simulation;

pub struct Runner {
    args: Args,
    simulation: Simulation,
}

impl Runner {
    pub fn new(args: Args) -> Result<Runner> {
        Self::setup_logger(&args);

        let mut parameters = Self::load_parameters(args.parameters.as_deref())?;
        if let Some(seed) = args.seed {
            parameters.seed = seed;
        }

        let simulation = Simulation::new(parameters);
        Self::write_fitness_table(&simulation, Path::new(args.outdir.as_str()))?;

        Ok(Self { args, simulation })
    }

    pub fn start(&mut self) -> Result<()> {
        self.run()?;
        log::info!("Finished simulation.");
        Ok(())
    }

    /// Setup logging level and file
    fn setup_logger(args: &Args) {
        let log_level = match args.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        simple_logging::log_to_file(args.log_file.as_str(), log_level).unwrap_or_else(|_| {
            eprintln!("Unable to open log file.");
            std::process::exit(1);
        });
    }

    /// Load parameters from file, falling back to the reference setup.
    fn load_parameters(path: Option<&str>) -> Result<Parameters> {
        let parameters = match path {
            Some(path) => Parameters::read_from_file(path)?,
            None => Parameters::default(),
        };
        log::info!("Loaded parameters\n{}", parameters);
        Ok(parameters)
    }

    fn write_fitness_table(simulation: &Simulation, outdir: &Path) -> Result<()> {
        let Some(fitness_table) = simulation.fitness() else {
            return Ok(());
        };
        fs::create_dir_all(outdir)?;
        let fitness_path = outdir.join("fitness_table.npy");
        let mut fitness_file = io::BufWriter::new(fs::File::create(fitness_path)?);
        fitness_table.write(&mut fitness_file)?;
        Ok(())
    }

    fn run(&mut self) -> Result<()> {
        let bar = match self.args.disable_progress_bar {
            true => None,
            false => {
                let bar = ProgressBar::new(self.args.steps as u64);
                bar.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "[{bar:40}] {pos:>7}/{len:7} [{elapsed_precise} / {duration_precise}] {msg}",
                    )
                    .expect("Unable to create template.")
                    .progress_chars("=> "),
            );
                Some(bar)
            }
        };

        let report_path =
            Path::new(self.args.outdir.as_str()).join(format!("{}.csv", self.args.name));
        let mut report_writer = CsvReportWriter::new(&report_path)?;

        // Step zero records the seeded state before anything happens.
        report_writer.write_report(&self.simulation.report())?;

        for _ in 0..self.args.steps {
            let report = self.simulation.step();
            let step = report.step;
            let population_sizes = report.populations;

            log::debug!("Generate logging message for step {step}...");
            log::info!(
                r###"
        step={step}
        population_sizes={population_sizes:?}"###
            );

            if let Some(bar) = bar.as_ref() {
                bar.set_position(step.try_into().unwrap());
                bar.set_message(format!("{population_sizes:?}"));
            }

            report_writer.write_report(&report)?;
        }

        if let Some(bar) = bar {
            bar.finish_with_message("Done.");
        }
        Ok(())
    }
}
