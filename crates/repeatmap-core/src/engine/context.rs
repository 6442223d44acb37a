use super::styles::StyleColor;
use crate::core::annotations::domain::DomainTable;
use crate::core::annotations::region::{OUTSIDE_REGIONS_LABEL, RegionTable};
use crate::core::models::atom::AtomRecord;
use crate::core::models::structure::StructureTable;

/// The read-only context every style resolution and summary runs against.
///
/// Bundles the loaded structure with both classification tables, built once
/// at startup and passed by reference from then on; nothing in the engine
/// holds it as ambient state or mutates it. The default (no-selection)
/// baseline colors are derived here once, since they depend only on the
/// structure and the domain table: every atom is grey except atoms inside a
/// domain window, which are yellow.
#[derive(Debug, Clone)]
pub struct AnnotationContext {
    structure: StructureTable,
    regions: RegionTable,
    domains: DomainTable,
    baseline_colors: Vec<StyleColor>,
}

impl AnnotationContext {
    pub fn new(structure: StructureTable, regions: RegionTable, domains: DomainTable) -> Self {
        let baseline_colors = structure
            .atoms()
            .iter()
            .map(|atom| {
                match atom.residue_index.and_then(|r| domains.classify(r)) {
                    Some(_) => StyleColor::Yellow,
                    None => StyleColor::Grey,
                }
            })
            .collect();
        Self {
            structure,
            regions,
            domains,
            baseline_colors,
        }
    }

    /// A context over the canonical region and domain tables.
    pub fn with_canonical_tables(structure: StructureTable) -> Self {
        Self::new(structure, RegionTable::canonical(), DomainTable::canonical())
    }

    pub fn structure(&self) -> &StructureTable {
        &self.structure
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    pub fn domains(&self) -> &DomainTable {
        &self.domains
    }

    /// Per-atom colors of the no-selection baseline, in table order.
    pub fn baseline_colors(&self) -> &[StyleColor] {
        &self.baseline_colors
    }

    /// The region label of an atom; an absent residue index classifies as
    /// outside every region.
    pub fn region_of(&self, atom: &AtomRecord) -> &'static str {
        atom.residue_index
            .map(|r| self.regions.classify(r))
            .unwrap_or(OUTSIDE_REGIONS_LABEL)
    }

    /// The domain label of an atom, or `None` for atoms outside every
    /// configured window (including atoms with an absent residue index).
    pub fn domain_of(&self, atom: &AtomRecord) -> Option<&str> {
        atom.residue_index.and_then(|r| self.domains.classify(r))
    }
}
