use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VeckitError {
    /// A render or coordinate-system call was made before a context was bound.
    #[error("drawing context not bound; call Veckit::bind() first")]
    Unbound,

    #[error("invalid color literal `{0}`")]
    InvalidColor(String),
}

pub type Result<T, E = VeckitError> = core::result::Result<T, E>;
