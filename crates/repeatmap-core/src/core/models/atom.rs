use nalgebra::Point3;

/// Represents one atom of the loaded structure.
///
/// Records are produced once, by the table boundary in [`crate::core::io`],
/// and are immutable for the lifetime of the process. An atom's identity is
/// its positional index in the [`super::structure::StructureTable`]; no
/// separate identifier is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The residue sequence index this atom belongs to, or `None` when the
    /// upstream field was missing or not coercible to an integer. A `None`
    /// index classifies as outside every region and domain.
    pub residue_index: Option<i64>,
    /// The name of the parent residue (e.g., "ALA", "GLY").
    pub residue_name: String,
    /// Single-character chain identifier. Not consumed by the classifiers;
    /// carried through for display layers.
    pub chain: char,
    /// Element symbol (e.g., "C", "N"). Carried through, not consumed.
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms. Carried through for the
    /// rendering widget; the annotation core never reads them.
    pub position: Point3<f64>,
}

impl AtomRecord {
    /// Creates a new `AtomRecord` with default values for the pass-through
    /// fields.
    ///
    /// # Arguments
    ///
    /// * `residue_index` - The residue sequence index of the atom.
    /// * `residue_name` - The name of the parent residue.
    pub fn new(residue_index: i64, residue_name: &str) -> Self {
        Self {
            residue_index: Some(residue_index),
            residue_name: residue_name.to_string(),
            chain: ' ',
            element: String::new(),
            position: Point3::origin(),
        }
    }

    /// Coerces a raw residue-index field into an integer.
    ///
    /// Upstream parsers deliver the field as text and occasionally emit
    /// placeholders ("N/A", empty) for atoms without a resolvable residue.
    /// Coercion happens exactly once, at the table boundary; everything past
    /// that boundary works with the `Option`.
    pub fn coerce_residue_index(raw: &str) -> Option<i64> {
        raw.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_expected_default_fields() {
        let atom = AtomRecord::new(42, "ALA");

        assert_eq!(atom.residue_index, Some(42));
        assert_eq!(atom.residue_name, "ALA");
        assert_eq!(atom.chain, ' ');
        assert_eq!(atom.element, "");
        assert_eq!(atom.position, Point3::origin());
    }

    #[test]
    fn coerce_residue_index_parses_plain_integers() {
        assert_eq!(AtomRecord::coerce_residue_index("5"), Some(5));
        assert_eq!(AtomRecord::coerce_residue_index("1935"), Some(1935));
        assert_eq!(AtomRecord::coerce_residue_index("-3"), Some(-3));
    }

    #[test]
    fn coerce_residue_index_trims_whitespace() {
        assert_eq!(AtomRecord::coerce_residue_index(" 130 "), Some(130));
        assert_eq!(AtomRecord::coerce_residue_index("\t95"), Some(95));
    }

    #[test]
    fn coerce_residue_index_rejects_non_numeric_input() {
        assert_eq!(AtomRecord::coerce_residue_index("N/A"), None);
        assert_eq!(AtomRecord::coerce_residue_index(""), None);
        assert_eq!(AtomRecord::coerce_residue_index("12.5"), None);
        assert_eq!(AtomRecord::coerce_residue_index("12a"), None);
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let mut atom1 = AtomRecord::new(7, "GLY");
        atom1.chain = 'A';
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
