use crate::domain::entities::cell::CellKind;

pub const RESULT_HEADERS: [&str; 4] = ["PNN-type and ID", "Microglia ID", "Distance (µm)", "Subject"];

/// The fixed (net type, microglia) combinations that are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairKind {
    PnnPvMicroglia,
    PnnOtherMicroglia,
}

impl PairKind {
    pub const ALL: [PairKind; 2] = [PairKind::PnnPvMicroglia, PairKind::PnnOtherMicroglia];

    pub fn net_kind(self) -> CellKind {
        match self {
            PairKind::PnnPvMicroglia => CellKind::PnnPv,
            PairKind::PnnOtherMicroglia => CellKind::PnnOther,
        }
    }

    pub fn microglia_kind(self) -> CellKind {
        CellKind::Microglia
    }

    pub fn label(self) -> &'static str {
        match self {
            PairKind::PnnPvMicroglia => "pnnpv-microglia",
            PairKind::PnnOtherMicroglia => "pnnother-microglia",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRow {
    pub pnn_id: String,
    pub microglia_id: String,
    pub distance: f64,
    pub subject: String,
}
