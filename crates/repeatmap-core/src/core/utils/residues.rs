use phf::{Map, phf_map};

static RESIDUE_FULL_NAMES: Map<&'static str, &'static str> = phf_map! {
    "ALA" => "Alanine",
    "ARG" => "Arginine",
    "ASN" => "Asparagine",
    "ASP" => "Aspartic acid",
    "CYS" => "Cysteine",
    "GLN" => "Glutamine",
    "GLU" => "Glutamic acid",
    "GLY" => "Glycine",
    "HIS" => "Histidine",
    "ILE" => "Isoleucine",
    "LEU" => "Leucine",
    "LYS" => "Lysine",
    "MET" => "Methionine",
    "PHE" => "Phenylalanine",
    "PRO" => "Proline",
    "SER" => "Serine",
    "THR" => "Threonine",
    "TRP" => "Tryptophan",
    "TYR" => "Tyrosine",
    "VAL" => "Valine",
    "HOH" => "Water",
};

/// Looks up the full name of a standard residue code, for display layers.
pub fn residue_full_name(residue_name: &str) -> Option<&'static str> {
    let normalized = residue_name.trim().to_ascii_uppercase();
    RESIDUE_FULL_NAMES.get(normalized.as_str()).copied()
}
