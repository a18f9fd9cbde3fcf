use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::config::AnalysisConfig;
use crate::infra::export::xlsx::{ResultSheet, XlsxResultWriter};
use crate::infra::import::open_sheet_source;
use crate::usecase::ports::workbook::ResultSink;
use crate::usecase::services::distance_service::DistanceGenerator;
use crate::usecase::services::ingest_service::classify_sheets;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub subject_count: usize,
    pub cell_count: usize,
    pub evaluated_pairs: usize,
    pub sheets: Vec<ResultSheet>,
    pub finished_at: DateTime<Local>,
}

impl RunSummary {
    pub fn total_rows(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.rows.len()).sum()
    }
}

pub struct AnalysisService {
    config: AnalysisConfig,
}

impl AnalysisService {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Reads every subject, measures all qualifying pairs and writes the result workbook.
    /// Nothing is written when reading fails.
    pub fn run(&self) -> Result<RunSummary> {
        self.config.validate()?;

        let input = &self.config.input_path;
        let mut source = open_sheet_source(input)
            .with_context(|| format!("failed to open input: {}", input.display()))?;
        let sheets = source
            .subject_sheets()
            .with_context(|| format!("failed to read input: {}", input.display()))?;

        let table = classify_sheets(&sheets);
        if table.is_empty() {
            log::warn!("no complete rows found in {}", input.display());
        }

        let output = &self.config.output_path;
        let mut writer = XlsxResultWriter::new(output);
        let report = DistanceGenerator::new(&self.config)
            .generate(&table, &mut writer)
            .context("failed to generate distances")?;
        writer
            .save()
            .with_context(|| format!("failed to save results: {}", output.display()))?;

        for sheet in writer.sheets() {
            log::info!("{}: {} pairs", sheet.name, sheet.rows.len());
        }
        log::info!("Distances saved in results sheet: {}", output.display());
        log::info!(
            "{} pairs within {} of {} evaluated",
            report.total_rows(),
            self.config.max_distance,
            report.evaluated_pairs
        );

        Ok(RunSummary {
            output_path: output.clone(),
            subject_count: sheets.len(),
            cell_count: table.cell_count(),
            evaluated_pairs: report.evaluated_pairs,
            sheets: writer.into_sheets(),
            finished_at: Local::now(),
        })
    }
}
