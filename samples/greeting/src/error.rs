//! Error types for the greeting pipeline.

use std::io;
use thiserror::Error;

/// Errors raised while running the greeting pipeline.
///
/// A failure in any step stops the pipeline; later steps are not run.
#[derive(Debug, Error)]
pub enum GreetingError {
    /// Writing a line to the output sink failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(GreetingError: std::error::Error, Send, Sync);

    #[rstest]
    fn output_error_display_includes_cause() {
        let error = GreetingError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(error.to_string(), "failed to write output: pipe closed");
    }
}
