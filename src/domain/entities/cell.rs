/// Cell classification parsed from the type half of a composite label.
///
/// `Other` keeps the lower-cased type so that unrecognised cells still land in their own
/// partition of the grouping table, even though no type pair ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellKind {
    Microglia,
    PnnPv,
    PnnOther,
    Other(String),
}

impl CellKind {
    pub fn classify(raw_type: &str) -> Self {
        let key = raw_type.trim().to_lowercase();
        match key.as_str() {
            "microglia" => CellKind::Microglia,
            "pnnpv" => CellKind::PnnPv,
            "pnnother" => CellKind::PnnOther,
            _ => CellKind::Other(key),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            CellKind::Microglia => "microglia",
            CellKind::PnnPv => "pnnpv",
            CellKind::PnnOther => "pnnother",
            CellKind::Other(key) => key,
        }
    }

    /// Synthetic ID for the `index`-th cell (1-based) of this kind in `region`.
    /// `None` for kinds that keep their raw label.
    pub fn synthetic_id(&self, region: &str, index: usize) -> Option<String> {
        match self {
            CellKind::Microglia => Some(format!("Microglia - {region}#{index}")),
            CellKind::PnnPv | CellKind::PnnOther => Some(format!(
                "{} - {region}#{index}",
                self.key().to_uppercase()
            )),
            CellKind::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Splits `"<type> - <region>"` on every hyphen and keeps the first and last segments.
/// A label without a hyphen yields the same text for both halves.
pub fn split_label(label: &str) -> (String, String) {
    let mut segments = label.split('-');
    let first = segments.next().unwrap_or_default().trim().to_string();
    let last = segments
        .next_back()
        .map(|segment| segment.trim().to_string())
        .unwrap_or_else(|| first.clone());
    (first, last)
}

/// One accepted input row, before it is filed into the grouping table.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub id: String,
    pub position: Position,
    pub kind: CellKind,
    pub region: String,
    pub sheet_name: String,
}

impl Cell {
    pub fn from_label(label: &str, position: Position, sheet_name: &str) -> Self {
        let (raw_type, region) = split_label(label);
        Self {
            id: label.to_string(),
            position,
            kind: CellKind::classify(&raw_type),
            region,
            sheet_name: sheet_name.to_string(),
        }
    }
}

/// What the grouping table keeps of a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRecord {
    pub id: String,
    pub position: Position,
}
