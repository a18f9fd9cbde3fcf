use dioxus::prelude::{use_signal, Signal};

use crate::config::AnalysisConfig;
use crate::usecase::services::analysis_service::RunSummary;

#[derive(Clone, Copy)]
pub struct AppState {
    pub input_path: Signal<String>,
    pub output_path: Signal<String>,
    pub max_distance: Signal<String>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub summary: Signal<Option<RunSummary>>,
    pub selected_sheet: Signal<Option<String>>,
}

impl AppState {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            input_path: use_signal(|| config.input_path.display().to_string()),
            output_path: use_signal(|| config.output_path.display().to_string()),
            max_distance: use_signal(|| config.max_distance.to_string()),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
            summary: use_signal(|| None::<RunSummary>),
            selected_sheet: use_signal(|| None::<String>),
        }
    }
}
