//! Analysis parameters
//!
//! Loaded from `<config dir>/pnnmg-distance/config.toml` when present.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::entities::pairing::PairKind;

pub const DEFAULT_MAX_DISTANCE: f64 = 50.0;
const MAX_SHEET_NAME_LEN: usize = 31;

/// Output sheets for one region, one per measured pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSheets {
    pub name: String,
    pub pnnpv_sheet: String,
    pub pnnother_sheet: String,
}

impl RegionSheets {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            pnnpv_sheet: format!("Distance {name} PNNPV"),
            pnnother_sheet: format!("Distance {name} PNNother"),
        }
    }

    pub fn sheet_for(&self, pair: PairKind) -> &str {
        match pair {
            PairKind::PnnPvMicroglia => &self.pnnpv_sheet,
            PairKind::PnnOtherMicroglia => &self.pnnother_sheet,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Inclusive upper bound on reported distances, in input units (µm)
    pub max_distance: f64,
    pub regions: Vec<RegionSheets>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("PNN_Microglia_Coordinates.xlsx"),
            output_path: PathBuf::from("PNN_Microglia_results.xlsx"),
            max_distance: DEFAULT_MAX_DISTANCE,
            regions: vec![RegionSheets::new("ROI1"), RegionSheets::new("ROI2")],
        }
    }
}

impl AnalysisConfig {
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("org", "pnnmg", "pnnmg-distance")
            .ok_or_else(|| anyhow!("unable to resolve config directory"))?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Load from the platform config file, falling back to defaults
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(err) => {
                log::warn!("{err}; using default analysis settings");
                return Self::default();
            }
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err:#}; using default analysis settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    pub fn region(&self, name: &str) -> Option<&RegionSheets> {
        self.regions.iter().find(|region| region.name == name)
    }

    /// Every destination sheet, in configuration order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.regions
            .iter()
            .flat_map(|region| PairKind::ALL.into_iter().map(move |pair| region.sheet_for(pair)))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.max_distance.is_finite() || self.max_distance < 0.0 {
            bail!(
                "distance threshold must be a non-negative number, got {}",
                self.max_distance
            );
        }

        let mut regions = BTreeSet::new();
        for region in &self.regions {
            if !regions.insert(region.name.as_str()) {
                bail!("region {} is configured more than once", region.name);
            }
        }

        let mut sheets = BTreeSet::new();
        for sheet in self.sheet_names() {
            if sheet.trim().is_empty() {
                bail!("output sheet names must not be empty");
            }
            if sheet.chars().count() > MAX_SHEET_NAME_LEN {
                bail!("output sheet name is longer than {MAX_SHEET_NAME_LEN} characters: {sheet}");
            }
            if !sheets.insert(sheet.to_lowercase()) {
                bail!("output sheet {sheet} is used more than once");
            }
        }

        Ok(())
    }
}
