use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad failure categories, each with its own process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Parse,
    Geometry,
}

impl ErrorKind {
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Usage => 1,
            Self::Parse => 2,
            Self::Geometry => 3,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid usage, try --help")]
    InvalidUsage,

    #[error("Invalid usage: expected {} numeric arguments but got {}, try --help", .expected, .found)]
    ArgumentCount { expected: usize, found: usize },

    #[error("Invalid usage: only one of --degrees or --radians may be given, try --help")]
    ConflictingAngleModes,

    #[error("--subtract90 requires --radians or --degrees")]
    SubtractWithoutAngleMode,

    #[error("{}: {}: not a valid floating point number", .name, .value)]
    InvalidNumber { name: String, value: String },

    #[error("Lines cannot be parallel")]
    ParallelLines,

    #[error("Error calculating intersection")]
    InvalidIntersection,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_number(name: &str, value: &str) -> Self {
        Self::InvalidNumber {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUsage
            | Self::ArgumentCount { .. }
            | Self::ConflictingAngleModes
            | Self::SubtractWithoutAngleMode => ErrorKind::Usage,
            // Only help output writes before the pipeline runs, so a failed
            // write is reported alongside usage problems.
            Self::Stdio(_) => ErrorKind::Usage,
            Self::InvalidNumber { .. } => ErrorKind::Parse,
            Self::ParallelLines | Self::InvalidIntersection => ErrorKind::Geometry,
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}
