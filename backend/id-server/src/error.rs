use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Logging setup error: {message}")]
    Logging { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
