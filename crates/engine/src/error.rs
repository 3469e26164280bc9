use minerva_ingest::IngestError;
use thiserror::Error;

/// Fatal engine failures
///
/// Everything recoverable degrades inside the pipeline (missing cells,
/// dropped rows, absent cache). What remains is structural malformation of
/// the input, which callers must be able to tell apart from "zero rows".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Malformed(#[from] IngestError),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
