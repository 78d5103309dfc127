use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LfsrError {
    #[error("Invalid register width {width}: must be at most {max} bits")]
    InvalidWidth { width: u32, max: u32 },
    #[error("No built-in taps for register width {0}")]
    UnknownTaps(u32),
}

impl From<LfsrError> for String {
    fn from(error: LfsrError) -> Self {
        error.to_string()
    }
}

pub type Result<T> = std::result::Result<T, LfsrError>;
