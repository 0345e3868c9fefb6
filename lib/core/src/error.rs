use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read data source: {0}")]
    DataLoad(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Row count mismatch: table has {table} rows, matrix has {matrix}")]
    RowMismatch { table: usize, matrix: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
