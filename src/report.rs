use std::fs;
use std::path::Path;

use crate::core::species::Species;
use crate::core::strain::all_strains;
use crate::errors::Result;
use crate::stats::StepReport;

pub trait ReportWriter {
    fn write_report(&mut self, report: &StepReport) -> Result<()>;
}

/// Appends one row per species and circulating strain to a csv file,
/// in long form with zero counts left out.
pub struct CsvReportWriter {
    writer: csv::Writer<fs::File>,
}

impl CsvReportWriter {
    pub fn new(path: &Path) -> Result<Self> {
        log::info!("Writing reports to {}", path.display());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = csv::WriterBuilder::new().from_path(path)?;
        writer.write_record(["step", "species", "strain", "count"])?;
        Ok(Self { writer })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_report(&mut self, report: &StepReport) -> Result<()> {
        for species in Species::ALL {
            for strain in all_strains() {
                let count = report.counts[[species.index(), strain.h, strain.n]];
                if count == 0 {
                    continue;
                }
                self.writer.write_record([
                    report.step.to_string(),
                    species.to_string(),
                    strain.to_string(),
                    count.to_string(),
                ])?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
