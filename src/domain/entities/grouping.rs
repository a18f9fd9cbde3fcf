use std::collections::BTreeMap;

use crate::domain::entities::cell::{Cell, CellKind, CellRecord};

pub type KindPartitions = BTreeMap<CellKind, Vec<CellRecord>>;
pub type SubjectPartitions = BTreeMap<String, KindPartitions>;

/// Region → subject → cell kind → cells in encounter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupingTable {
    regions: BTreeMap<String, SubjectPartitions>,
}

impl GroupingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `cell` under its region, subject and kind, replacing its ID with the next
    /// synthetic ID of that partition when the kind has one.
    pub fn insert(&mut self, cell: Cell) {
        let Cell {
            id,
            position,
            kind,
            region,
            sheet_name,
        } = cell;

        let partition = self
            .regions
            .entry(region.clone())
            .or_default()
            .entry(sheet_name)
            .or_default()
            .entry(kind.clone())
            .or_default();

        let id = kind
            .synthetic_id(&region, partition.len() + 1)
            .unwrap_or(id);
        partition.push(CellRecord { id, position });
    }

    pub fn regions(&self) -> impl Iterator<Item = (&str, &SubjectPartitions)> {
        self.regions
            .iter()
            .map(|(region, subjects)| (region.as_str(), subjects))
    }

    pub fn partition(&self, region: &str, subject: &str, kind: &CellKind) -> Option<&[CellRecord]> {
        self.regions
            .get(region)?
            .get(subject)?
            .get(kind)
            .map(Vec::as_slice)
    }

    pub fn cell_count(&self) -> usize {
        self.regions
            .values()
            .flat_map(BTreeMap::values)
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
