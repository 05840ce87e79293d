pub mod config_ops;
pub mod convert_ops;

use preeti_core::TableError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Table { path: String, source: TableError },
}
