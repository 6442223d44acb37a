use super::atom::AtomRecord;

/// The ordered, immutable table of all atoms in the loaded structure.
///
/// Built once at startup from the output of an external structure parser and
/// never mutated afterwards. Atoms are addressed by positional index; the
/// order is the order the parser emitted and is what the style array produced
/// by the engine aligns to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureTable {
    atoms: Vec<AtomRecord>,
}

impl StructureTable {
    /// Creates a structure table from an ordered sequence of atom records.
    pub fn new(atoms: Vec<AtomRecord>) -> Self {
        Self { atoms }
    }

    /// Retrieves the atom at `index`, or `None` when out of range.
    pub fn atom(&self, index: usize) -> Option<&AtomRecord> {
        self.atoms.get(index)
    }

    /// All atoms, in table order.
    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    /// The number of atoms in the table.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the table contains no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}
