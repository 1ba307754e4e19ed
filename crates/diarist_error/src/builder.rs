//! Errors from typed builders such as `PacingBuilder`.

/// Why a builder refused to build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// The builder rejected its input
    #[display("invalid builder input: {}", _0)]
    ValidationFailed(String),
}

/// Builder failure with the source location that raised it.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder: {} (line {} in {})", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Wrap `kind`, recording the caller's location.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Failure category.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}
