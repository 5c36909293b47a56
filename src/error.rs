use std::path::PathBuf;

pub type PostergridResult<T> = Result<T, PostergridError>;

#[derive(thiserror::Error, Debug)]
pub enum PostergridError {
    #[error("input directory '{0}' not found")]
    MissingInput(PathBuf),

    #[error("no primary poster found (expected a filename ending in \"Collection\" or \"Productions\")")]
    NoPrimaryPoster,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PostergridError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }
}
