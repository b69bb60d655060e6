//! Typed failures surfaced by the pipeline stages.
//!
//! Every failure is local to the stage that detects it and terminal for the
//! run: either a stage produces a complete, dimension-consistent buffer or
//! graph, or it reports one of these and downstream stages do not run.

use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The codec could not parse the input file.
    Decode { path: String, message: String },
    /// The codec could not write the output file.
    Encode { path: String, message: String },
    /// Zero width or height; rejected before graph construction.
    InvalidDimensions { width: usize, height: usize },
    /// The source buffer is missing or its length disagrees with `w*h*4`.
    EmptyInput,
    /// The node array could not be allocated.
    Allocation { nodes: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, message } => {
                write!(f, "failed to decode {path}: {message}")
            }
            Self::Encode { path, message } => {
                write!(f, "failed to encode {path}: {message}")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid image dimensions {width}x{height}")
            }
            Self::EmptyInput => write!(f, "empty or inconsistent input buffer"),
            Self::Allocation { nodes } => {
                write!(f, "failed to allocate pixel graph ({nodes} nodes)")
            }
        }
    }
}

impl std::error::Error for Error {}
