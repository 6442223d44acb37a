use super::region::RegionTable;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// Each repeat carries one functional window at a fixed offset from the
// repeat's start; window 1 is [92, 113].
const WINDOW_OFFSET: i64 = 92;
const WINDOW_LEN: i64 = 22;

/// One inclusive residue-index interval mapped to a domain label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainRange {
    pub start: i64,
    pub end: i64,
    pub label: String,
}

/// The table of named functional domains.
///
/// Unlike the region table, domain membership is optional: the ranges need
/// not cover the index space and the table may legitimately hold zero, one,
/// or many entries. Ranges are required to be mutually non-overlapping, which
/// the constructor enforces; overlapping entries are a configuration error,
/// not a tie to be broken at lookup time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainTable {
    ranges: Vec<DomainRange>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainTableError {
    #[error("Domain range '{label}' has inverted bounds ({start} > {end})")]
    InvertedBounds { label: String, start: i64, end: i64 },

    #[error("Domain ranges '{first}' and '{second}' overlap")]
    Overlap { first: String, second: String },
}

#[derive(Debug, Error)]
pub enum DomainLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid domain table in '{path}': {source}")]
    Invalid {
        path: String,
        source: DomainTableError,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DomainTableFile {
    #[serde(default, rename = "domain")]
    domains: Vec<DomainRange>,
}

impl DomainTable {
    /// Creates a domain table from a list of ranges, validating that every
    /// range has ordered bounds and that no two ranges overlap.
    pub fn new(ranges: Vec<DomainRange>) -> Result<Self, DomainTableError> {
        for range in &ranges {
            if range.start > range.end {
                return Err(DomainTableError::InvertedBounds {
                    label: range.label.clone(),
                    start: range.start,
                    end: range.end,
                });
            }
        }
        let mut sorted: Vec<&DomainRange> = ranges.iter().collect();
        sorted.sort_by_key(|range| range.start);
        for pair in sorted.windows(2) {
            if pair[1].start <= pair[0].end {
                return Err(DomainTableError::Overlap {
                    first: pair[0].label.clone(),
                    second: pair[1].label.clone(),
                });
            }
        }
        Ok(Self { ranges })
    }

    /// A table with no domains configured; every lookup returns `None`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The canonical table: one 22-residue window per repeat, at a fixed
    /// offset from the repeat's start.
    pub fn canonical() -> Self {
        let ranges = RegionTable::canonical()
            .ranges()
            .iter()
            .enumerate()
            .map(|(k, repeat)| DomainRange {
                start: repeat.start + WINDOW_OFFSET,
                end: repeat.start + WINDOW_OFFSET + WINDOW_LEN - 1,
                label: format!("Domain {}", k + 1),
            })
            .collect();
        // Windows are strictly inside their repeats, so the canonical table
        // cannot violate the non-overlap invariant.
        Self { ranges }
    }

    /// Loads a domain table from a TOML file.
    ///
    /// The file holds zero or more `[[domain]]` entries:
    ///
    /// ```toml
    /// [[domain]]
    /// start = 92
    /// end = 113
    /// label = "Domain 1"
    /// ```
    pub fn load(path: &Path) -> Result<Self, DomainLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| DomainLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: DomainTableFile =
            toml::from_str(&content).map_err(|e| DomainLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Self::new(file.domains).map_err(|e| DomainLoadError::Invalid {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// The configured ranges, in configuration order.
    pub fn ranges(&self) -> &[DomainRange] {
        &self.ranges
    }

    /// Classifies a residue index into its domain label, or `None` when the
    /// index falls in no configured range.
    ///
    /// The ranges are not assumed sorted, so lookup is a linear scan in
    /// configuration order; non-overlap guarantees at most one match.
    pub fn classify(&self, residue_index: i64) -> Option<&str> {
        self.ranges
            .iter()
            .find(|range| range.start <= residue_index && residue_index <= range.end)
            .map(|range| range.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn range(start: i64, end: i64, label: &str) -> DomainRange {
        DomainRange {
            start,
            end,
            label: label.to_string(),
        }
    }

    #[test]
    fn canonical_table_has_one_window_per_repeat() {
        let domains = DomainTable::canonical();
        assert_eq!(domains.ranges().len(), 16);
        assert_eq!(domains.ranges()[0], range(92, 113, "Domain 1"));

        let regions = RegionTable::canonical();
        for window in domains.ranges() {
            assert_eq!(window.end - window.start + 1, 22);
            // Window must sit entirely inside the repeat it annotates.
            assert_eq!(regions.classify(window.start), regions.classify(window.end));
        }
    }

    #[test]
    fn canonical_table_upholds_non_overlap() {
        let ranges = DomainTable::canonical().ranges().to_vec();
        assert!(DomainTable::new(ranges).is_ok());
    }

    #[test]
    fn classify_is_inclusive_on_both_bounds() {
        let table = DomainTable::new(vec![range(92, 113, "Domain 1")]).unwrap();
        assert_eq!(table.classify(92), Some("Domain 1"));
        assert_eq!(table.classify(95), Some("Domain 1"));
        assert_eq!(table.classify(113), Some("Domain 1"));
        assert_eq!(table.classify(91), None);
        assert_eq!(table.classify(114), None);
    }

    #[test]
    fn empty_table_never_matches() {
        let table = DomainTable::empty();
        for r in [-1, 0, 95, 1935, 10_000] {
            assert_eq!(table.classify(r), None);
        }
    }

    #[test]
    fn classify_scans_unsorted_ranges() {
        let table = DomainTable::new(vec![
            range(1000, 1010, "Late"),
            range(5, 10, "Early"),
        ])
        .unwrap();
        assert_eq!(table.classify(7), Some("Early"));
        assert_eq!(table.classify(1005), Some("Late"));
        assert_eq!(table.classify(500), None);
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        let err = DomainTable::new(vec![range(10, 5, "Bad")]).unwrap_err();
        assert_eq!(
            err,
            DomainTableError::InvertedBounds {
                label: "Bad".to_string(),
                start: 10,
                end: 5,
            }
        );
    }

    #[test]
    fn new_rejects_overlapping_ranges() {
        let err = DomainTable::new(vec![range(0, 10, "A"), range(10, 20, "B")]).unwrap_err();
        assert_eq!(
            err,
            DomainTableError::Overlap {
                first: "A".to_string(),
                second: "B".to_string(),
            }
        );
    }

    #[test]
    fn new_accepts_touching_but_disjoint_ranges() {
        assert!(DomainTable::new(vec![range(0, 10, "A"), range(11, 20, "B")]).is_ok());
    }

    #[test]
    fn load_reads_single_entry_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[domain]]\nstart = 92\nend = 113\nlabel = \"Domain 1\""
        )
        .unwrap();

        let table = DomainTable::load(file.path()).unwrap();
        assert_eq!(table.ranges().len(), 1);
        assert_eq!(table.classify(95), Some("Domain 1"));
    }

    #[test]
    fn load_accepts_file_with_no_entries() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let table = DomainTable::load(file.path()).unwrap();
        assert!(table.ranges().is_empty());
    }

    #[test]
    fn load_rejects_overlapping_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[domain]]\nstart = 0\nend = 10\nlabel = \"A\"\n\n[[domain]]\nstart = 5\nend = 15\nlabel = \"B\""
        )
        .unwrap();

        let err = DomainTable::load(file.path()).unwrap_err();
        assert!(matches!(err, DomainLoadError::Invalid { .. }));
    }

    #[test]
    fn load_propagates_missing_file_as_io_error() {
        let err = DomainTable::load(Path::new("/nonexistent/domains.toml")).unwrap_err();
        assert!(matches!(err, DomainLoadError::Io { .. }));
    }
}
