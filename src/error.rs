/// Library error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API client setup failed: {0}")]
    Api(#[from] crate::api::ApiError),

    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}

impl From<printpdf::Error> for Error {
    fn from(e: printpdf::Error) -> Self {
        Error::Pdf(format!("{:?}", e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
