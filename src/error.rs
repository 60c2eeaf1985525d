use thiserror::Error;

/// Everything a run of the generator can fail with.
///
/// The engines themselves never fail; errors come from the command line or
/// from writing the output.
#[derive(Debug, Error)]
pub enum Error {
    /// `--help` was given; the diagnostic is the usage line itself.
    #[error("{}", crate::cli::USAGE)]
    Help,
    #[error("{0}")]
    Usage(String),
    #[error("Invalid generator: Use either '-t <size-of-subset>' for random test or '-b' for sequential test.")]
    ConflictingModes,
    /// `{0}` is the rejected subset size.
    #[error("The size of searched subset must be between 10 and 1000000, got {0}.")]
    SubsetSizeOutOfRange(i32),
    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the usage line should accompany the diagnostic.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }
}

impl From<clap::Error> for Error {
    fn from(error: clap::Error) -> Self {
        Error::Usage(error.to_string().trim_end().to_string())
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_displays_usage() {
        assert_eq!(Error::Help.to_string(), crate::cli::USAGE);
        assert!(!Error::Help.wants_usage());
        assert!(Error::Usage("bad".to_string()).wants_usage());
        assert!(!Error::ConflictingModes.wants_usage());
    }
}
