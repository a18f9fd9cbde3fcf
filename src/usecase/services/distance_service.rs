use std::collections::BTreeMap;

use crate::config::AnalysisConfig;
use crate::domain::entities::cell::CellRecord;
use crate::domain::entities::grouping::GroupingTable;
use crate::domain::entities::pairing::{DistanceRow, PairKind, RESULT_HEADERS};
use crate::error::WorkbookResult;
use crate::usecase::ports::workbook::ResultSink;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceReport {
    /// Candidate pairs measured, before the threshold is applied
    pub evaluated_pairs: usize,
    /// Qualifying rows per destination sheet
    pub rows_per_sheet: BTreeMap<String, usize>,
}

impl DistanceReport {
    pub fn total_rows(&self) -> usize {
        self.rows_per_sheet.values().sum()
    }
}

/// Measures every net/microglia combination of one subject. Returns the number of
/// candidates measured and the rows at or under `max_distance`.
pub fn pairs_within(
    net_cells: &[CellRecord],
    microglia: &[CellRecord],
    subject: &str,
    max_distance: f64,
) -> (usize, Vec<DistanceRow>) {
    let mut evaluated = 0;
    let mut rows = Vec::new();

    for net in net_cells {
        for glia in microglia {
            let distance = net.position.distance_to(&glia.position);
            evaluated += 1;
            if distance <= max_distance {
                rows.push(DistanceRow {
                    pnn_id: net.id.clone(),
                    microglia_id: glia.id.clone(),
                    distance,
                    subject: subject.to_string(),
                });
            }
        }
    }

    (evaluated, rows)
}

pub struct DistanceGenerator<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> DistanceGenerator<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Resets every destination sheet to a bare header row.
    pub fn prepare_sheets(&self, sink: &mut dyn ResultSink) -> WorkbookResult<()> {
        for region in &self.config.regions {
            for pair in PairKind::ALL {
                let sheet = region.sheet_for(pair);
                sink.clear_sheet(sheet)?;
                sink.write_header(sheet, &RESULT_HEADERS)?;
            }
        }
        Ok(())
    }

    pub fn generate(
        &self,
        table: &GroupingTable,
        sink: &mut dyn ResultSink,
    ) -> WorkbookResult<DistanceReport> {
        self.prepare_sheets(sink)?;

        let mut report = DistanceReport {
            evaluated_pairs: 0,
            rows_per_sheet: self
                .config
                .sheet_names()
                .into_iter()
                .map(|sheet| (sheet.to_string(), 0))
                .collect(),
        };

        for (region_name, subjects) in table.regions() {
            let Some(region) = self.config.region(region_name) else {
                log::debug!("region {region_name} has no output sheets, skipping");
                continue;
            };

            for subject in subjects.keys() {
                for pair in PairKind::ALL {
                    let (Some(net_cells), Some(microglia)) = (
                        table.partition(region_name, subject, &pair.net_kind()),
                        table.partition(region_name, subject, &pair.microglia_kind()),
                    ) else {
                        continue;
                    };

                    let sheet = region.sheet_for(pair);
                    let (evaluated, rows) =
                        pairs_within(net_cells, microglia, subject, self.config.max_distance);
                    log::debug!(
                        "{region_name}/{subject} {}: {} of {evaluated} within range",
                        pair.label(),
                        rows.len()
                    );
                    report.evaluated_pairs += evaluated;
                    *report.rows_per_sheet.entry(sheet.to_string()).or_default() += rows.len();
                    for row in rows {
                        sink.append_row(sheet, row)?;
                    }
                }
            }
        }

        Ok(report)
    }
}
