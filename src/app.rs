use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::config::AnalysisConfig;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::analysis_service::{AnalysisService, RunSummary};

const PREVIEW_ROWS: usize = 200;
const CELL_STYLE: &str = "border: 1px solid #bbb; padding: 6px;";
const HEADER_CELL_STYLE: &str = "border: 1px solid #bbb; padding: 6px; background: #f2f2f2;";

/// Overlays the values typed into the form on top of the loaded configuration.
pub fn build_run_config(
    base: &AnalysisConfig,
    input_path: &str,
    output_path: &str,
    max_distance: &str,
) -> Result<AnalysisConfig> {
    let input_path = input_path.trim();
    let output_path = output_path.trim();
    if input_path.is_empty() {
        bail!("choose an input workbook first");
    }
    if output_path.is_empty() {
        bail!("choose where to save the results first");
    }
    let max_distance = max_distance
        .trim()
        .parse::<f64>()
        .map_err(|_| anyhow!("distance threshold is not a number: {max_distance}"))?;

    let config = AnalysisConfig {
        input_path: PathBuf::from(input_path),
        output_path: PathBuf::from(output_path),
        max_distance,
        regions: base.regions.clone(),
    };
    config.validate()?;
    Ok(config)
}

pub fn format_distance(distance: f64) -> String {
    format!("{distance:.2}")
}

pub fn summary_status(summary: &RunSummary) -> String {
    format!(
        "Saved {} pairs from {} cells in {} subjects to {} ({})",
        summary.total_rows(),
        summary.cell_count,
        summary.subject_count,
        summary.output_path.display(),
        summary.finished_at.format("%H:%M:%S"),
    )
}

#[component]
pub fn App() -> Element {
    let base_config = use_hook(AnalysisConfig::load);
    let AppState {
        mut input_path,
        mut output_path,
        mut max_distance,
        mut busy,
        mut status,
        mut summary,
        mut selected_sheet,
    } = AppState::new(&base_config);

    let handle_run = move |_: MouseEvent| {
        if busy() {
            return;
        }
        *busy.write() = true;
        *status.write() = format!("Processing {}", input_path());

        let result = build_run_config(&base_config, &input_path(), &output_path(), &max_distance())
            .and_then(|config| AnalysisService::new(config).run());

        match result {
            Ok(run) => {
                *status.write() = summary_status(&run);
                let keep_selection = selected_sheet()
                    .map(|name| run.sheets.iter().any(|sheet| sheet.name == name))
                    .unwrap_or(false);
                if !keep_selection {
                    *selected_sheet.write() = run.sheets.first().map(|sheet| sheet.name.clone());
                }
                *summary.write() = Some(run);
            }
            Err(err) => {
                log::error!("analysis failed: {err:#}");
                *status.write() = format!("Analysis failed: {err:#}");
            }
        }
        *busy.write() = false;
    };

    let status_text = status();
    let current = summary();
    let selected = selected_sheet();
    let sheet_counts: Vec<(String, usize, &'static str)> = current
        .as_ref()
        .map(|run| {
            run.sheets
                .iter()
                .map(|sheet| {
                    let background = if selected.as_deref() == Some(sheet.name.as_str()) {
                        "#eef4ff"
                    } else {
                        "transparent"
                    };
                    (sheet.name.clone(), sheet.rows.len(), background)
                })
                .collect()
        })
        .unwrap_or_default();
    let evaluated = current.as_ref().map(|run| run.evaluated_pairs).unwrap_or(0);
    let preview_headers: Vec<String> = current
        .as_ref()
        .and_then(|run| run.sheets.iter().find(|s| Some(&s.name) == selected.as_ref()))
        .map(|sheet| sheet.header.clone())
        .unwrap_or_default();
    let preview_rows: Vec<Vec<String>> = current
        .as_ref()
        .and_then(|run| run.sheets.iter().find(|s| Some(&s.name) == selected.as_ref()))
        .map(|sheet| {
            sheet
                .rows
                .iter()
                .take(PREVIEW_ROWS)
                .map(|row| {
                    vec![
                        row.pnn_id.clone(),
                        row.microglia_id.clone(),
                        format_distance(row.distance),
                        row.subject.clone(),
                    ]
                })
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px;",
            h2 { "PNN / microglia distances" }

            div {
                style: "display: flex; gap: 8px; align-items: center; padding: 4px 0;",
                label { "Input workbook " }
                input {
                    style: "min-width: 420px;",
                    disabled: busy(),
                    value: input_path(),
                    onchange: move |event| *input_path.write() = event.value(),
                }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if let Some(file_path) = FileDialog::new()
                            .add_filter("Excel", &["xlsx", "xlsm", "xls", "ods"])
                            .add_filter("CSV", &["csv"])
                            .add_filter("All files", &["*"])
                            .pick_file()
                        {
                            *input_path.write() = file_path.display().to_string();
                        }
                    },
                    "Browse…"
                }
            }

            div {
                style: "display: flex; gap: 8px; align-items: center; padding: 4px 0;",
                label { "Results workbook " }
                input {
                    style: "min-width: 420px;",
                    disabled: busy(),
                    value: output_path(),
                    onchange: move |event| *output_path.write() = event.value(),
                }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if let Some(file_path) = FileDialog::new()
                            .add_filter("Excel", &["xlsx"])
                            .set_file_name("PNN_Microglia_results.xlsx")
                            .save_file()
                        {
                            *output_path.write() = file_path.display().to_string();
                        }
                    },
                    "Save as…"
                }
            }

            div {
                style: "display: flex; gap: 8px; align-items: center; padding: 4px 0;",
                label { "Max distance (µm) " }
                input {
                    r#type: "number",
                    min: "0",
                    step: "any",
                    disabled: busy(),
                    value: max_distance(),
                    onchange: move |event| *max_distance.write() = event.value(),
                }
                button {
                    disabled: busy(),
                    onclick: handle_run,
                    "Run"
                }
            }

            p { "{status_text}" }

            if !sheet_counts.is_empty() {
                p { "{evaluated} candidate pairs evaluated" }
                table { style: "border-collapse: collapse; margin-bottom: 12px; border: 1px solid #bbb;",
                    thead {
                        tr {
                            th { style: HEADER_CELL_STYLE, "Sheet" }
                            th { style: HEADER_CELL_STYLE, "Pairs" }
                        }
                    }
                    tbody {
                        {sheet_counts.clone().into_iter().map(|(name, count, background)| {
                            let target = name.clone();
                            rsx!(
                                tr {
                                    key: "{name}",
                                    style: "cursor: pointer; background: {background};",
                                    onclick: move |_| *selected_sheet.write() = Some(target.clone()),
                                    td { style: CELL_STYLE, "{name}" }
                                    td { style: CELL_STYLE, "{count}" }
                                }
                            )
                        })}
                    }
                }

                table { style: "border-collapse: collapse; width: 100%; border: 1px solid #bbb;",
                    thead {
                        tr {
                            for header in preview_headers.clone() {
                                th { style: HEADER_CELL_STYLE, "{header}" }
                            }
                        }
                    }
                    tbody {
                        if preview_rows.is_empty() {
                            tr {
                                td { style: CELL_STYLE,
                                    colspan: preview_headers.len().max(1),
                                    "No pairs within range"
                                }
                            }
                        } else {
                            for row in preview_rows.clone() {
                                tr {
                                    for cell in row {
                                        td { style: CELL_STYLE, "{cell}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
