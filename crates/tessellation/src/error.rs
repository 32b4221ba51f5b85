use crate::path::InputError;
use thiserror::Error;

/// The line builder's result type.
pub type MeshLineResult<T> = Result<T, MeshLineError>;

/// Reasons why the line buffers could not be generated.
///
/// When one of these is returned, the builder and its buffers are left exactly as
/// they were before the call.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum MeshLineError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),
    #[error("Too many vertices ({vertices}), 16 bit indices can address at most 65536")]
    TooManyVertices { vertices: usize },
}
