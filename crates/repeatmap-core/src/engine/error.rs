use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Selected atom index {index} is out of range for a table of {atom_count} atoms")]
    SelectionOutOfRange { index: usize, atom_count: usize },
}
