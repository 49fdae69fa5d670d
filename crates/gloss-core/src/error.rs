#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    #[error("Payload still unparseable after repair: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// Top-level payload is missing or not an array
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Dictionary section could not be read; the rest of the response is usable
    #[error("Partial data: {0}")]
    PartialData(String),
}
