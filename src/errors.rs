use thiserror::Error;

pub type SaveNameResult<T, E = SaveNameError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SaveNameError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("config error: {0}")]
  Config(#[from] toml::de::Error),

  #[error("unknown save format '{0}' (expected one of: serialization, proxy-serialization)")]
  UnknownFormat(String),

  #[error("unknown case sensitivity '{0}' (expected one of: sensitive, insensitive, auto)")]
  UnknownCaseSensitivity(String),

  #[error("other: {0}")]
  Other(String),
}
