/// Label returned for any residue index outside the annotated partition.
pub const OUTSIDE_REGIONS_LABEL: &str = "Outside defined regions";

/// One contiguous, inclusive residue-index interval mapped to a region label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionRange {
    pub start: i64,
    pub end: i64,
    pub label: &'static str,
}

// The 16 structural repeats, as an ordered partition of [0, 1935]. Each
// range is inclusive on both ends; contiguity is asserted by the tests below.
const REPEAT_RANGES: [RegionRange; 16] = [
    RegionRange { start: 0, end: 121, label: "Repeat 1" },
    RegionRange { start: 122, end: 241, label: "Repeat 2" },
    RegionRange { start: 242, end: 362, label: "Repeat 3" },
    RegionRange { start: 363, end: 484, label: "Repeat 4" },
    RegionRange { start: 485, end: 607, label: "Repeat 5" },
    RegionRange { start: 608, end: 729, label: "Repeat 6" },
    RegionRange { start: 730, end: 851, label: "Repeat 7" },
    RegionRange { start: 852, end: 973, label: "Repeat 8" },
    RegionRange { start: 974, end: 1093, label: "Repeat 9" },
    RegionRange { start: 1094, end: 1211, label: "Repeat 10" },
    RegionRange { start: 1212, end: 1335, label: "Repeat 11" },
    RegionRange { start: 1336, end: 1457, label: "Repeat 12" },
    RegionRange { start: 1458, end: 1579, label: "Repeat 13" },
    RegionRange { start: 1580, end: 1696, label: "Repeat 14" },
    RegionRange { start: 1697, end: 1818, label: "Repeat 15" },
    RegionRange { start: 1819, end: 1935, label: "Repeat 16" },
];

/// The ordered table of named structural regions.
///
/// The canonical table partitions residue indices 0 through 1935 into the 16
/// repeats of the annotated protein; any index outside that union classifies
/// as [`OUTSIDE_REGIONS_LABEL`]. The table is a process-wide constant and is
/// held by the annotation context rather than read as ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionTable {
    ranges: &'static [RegionRange],
}

impl RegionTable {
    /// The canonical 16-repeat partition.
    pub const fn canonical() -> Self {
        Self {
            ranges: &REPEAT_RANGES,
        }
    }

    /// The ranges of this table, in ascending index order.
    pub fn ranges(&self) -> &[RegionRange] {
        self.ranges
    }

    /// Classifies a residue index into its region label.
    ///
    /// Total over all of `i64`: indices outside the partition return
    /// [`OUTSIDE_REGIONS_LABEL`]. Since the ranges are contiguous and sorted,
    /// lookup is a binary search on the inclusive upper bounds.
    pub fn classify(&self, residue_index: i64) -> &'static str {
        let candidate = self
            .ranges
            .partition_point(|range| range.end < residue_index);
        match self.ranges.get(candidate) {
            Some(range) if range.start <= residue_index => range.label,
            _ => OUTSIDE_REGIONS_LABEL,
        }
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_table_is_a_contiguous_partition() {
        let ranges = RegionTable::canonical().ranges();
        assert_eq!(ranges.len(), 16);
        assert_eq!(ranges[0].start, 0);
        assert_eq!(ranges[15].end, 1935);
        for pair in ranges.windows(2) {
            assert_eq!(
                pair[0].end + 1,
                pair[1].start,
                "gap or overlap between {} and {}",
                pair[0].label,
                pair[1].label
            );
        }
    }

    #[test]
    fn every_index_in_partition_gets_exactly_one_repeat_label() {
        let table = RegionTable::canonical();
        for r in 0..=1935 {
            let label = table.classify(r);
            assert_ne!(label, OUTSIDE_REGIONS_LABEL, "index {r} fell outside");
            assert!(label.starts_with("Repeat "), "index {r} -> {label}");
        }
    }

    #[test]
    fn boundary_indices_classify_exactly() {
        let table = RegionTable::canonical();
        let upper_bounds = [
            121, 241, 362, 484, 607, 729, 851, 973, 1093, 1211, 1335, 1457, 1579, 1696, 1818, 1935,
        ];
        for (k, &bound) in upper_bounds.iter().enumerate() {
            assert_eq!(table.classify(bound), format!("Repeat {}", k + 1));
            if k + 1 < upper_bounds.len() {
                assert_eq!(table.classify(bound + 1), format!("Repeat {}", k + 2));
            }
        }
    }

    #[test]
    fn indices_outside_partition_return_sentinel() {
        let table = RegionTable::canonical();
        assert_eq!(table.classify(-1), OUTSIDE_REGIONS_LABEL);
        assert_eq!(table.classify(1936), OUTSIDE_REGIONS_LABEL);
        assert_eq!(table.classify(i64::MIN), OUTSIDE_REGIONS_LABEL);
        assert_eq!(table.classify(i64::MAX), OUTSIDE_REGIONS_LABEL);
    }

    #[test]
    fn classify_matches_linear_scan_over_ranges() {
        let table = RegionTable::canonical();
        for r in [-5, 0, 1, 121, 122, 500, 973, 974, 1500, 1935, 1936, 4000] {
            let expected = table
                .ranges()
                .iter()
                .find(|range| range.start <= r && r <= range.end)
                .map(|range| range.label)
                .unwrap_or(OUTSIDE_REGIONS_LABEL);
            assert_eq!(table.classify(r), expected, "index {r}");
        }
    }
}
