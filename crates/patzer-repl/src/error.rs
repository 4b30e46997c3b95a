//! Terminal session errors.

/// Errors that can occur while running a terminal session.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    /// An I/O error occurred while reading from stdin or writing to stdout.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::ReplError;

    #[test]
    fn io_error_display() {
        let err: ReplError = std::io::Error::other("stdin closed").into();
        assert_eq!(format!("{err}"), "I/O error: stdin closed");
    }
}
