/// Type alias for Result with anyhow::Error as the error type.
/// Domain failures are raised as `ReportError` and carried through this alias.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
