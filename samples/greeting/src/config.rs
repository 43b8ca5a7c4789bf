//! Runtime configuration for the greeting sample.
//!
//! The sample takes no flags and reads no configuration files. The only
//! external knob is `RUST_LOG`, which selects the log filter; without it
//! [`DEFAULT_LOG_FILTER`] applies.

/// Log filter used when `RUST_LOG` is not set.
///
/// Logs go to stderr, so raising the level never changes what the sample
/// prints to stdout.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Inputs fed to the pipeline, one invocation per value, in order.
///
/// # Example
///
/// ```rust
/// use greeting::GreetingConfig;
///
/// assert_eq!(GreetingConfig::default().inputs, vec![5]);
/// assert_eq!(GreetingConfig::with_inputs([5, 3]).inputs, vec![5, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GreetingConfig {
    /// Values passed to the pipeline.
    pub inputs: Vec<i32>,
}

impl GreetingConfig {
    /// Creates a configuration that runs the pipeline once per input.
    pub fn with_inputs(inputs: impl IntoIterator<Item = i32>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self::with_inputs([5])
    }
}
