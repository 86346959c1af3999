//! `tracing` integration for [`Outcome`].
//!
//! Enabled by the `tracing` feature. Both methods are thin wrappers over
//! `tap_failure` / `tap_success` and hand back the outcome unchanged.

use std::fmt::Debug;

use super::Outcome;

impl<F: Debug, S: Debug> Outcome<F, S> {
    /// Emits a `WARN` event carrying the failure value if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_optics::control::Outcome;
    ///
    /// let value: Outcome<&str, i32> = Outcome::Failure("timeout");
    /// let same = value.trace_failure("fetching profile");
    /// assert_eq!(same, Outcome::Failure("timeout"));
    /// ```
    #[must_use]
    pub fn trace_failure(self, context: &str) -> Self {
        self.tap_failure(|value| {
            tracing::warn!(context, failure = ?value, "outcome failed");
        })
    }

    /// Emits a `DEBUG` event carrying the success value if this is a `Success`.
    #[must_use]
    pub fn trace_success(self, context: &str) -> Self {
        self.tap_success(|value| {
            tracing::debug!(context, success = ?value, "outcome succeeded");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_trace_failure_keeps_value() {
        let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
        tracing::subscriber::with_default(subscriber, || {
            let value: Outcome<String, i32> = Outcome::Failure("boom".to_string());
            assert_eq!(
                value.clone().trace_failure("unit test"),
                Outcome::Failure("boom".to_string())
            );
            assert_eq!(value.trace_success("unit test"), Outcome::Failure("boom".to_string()));
        });
    }

    #[rstest]
    fn test_trace_success_keeps_value() {
        let value: Outcome<String, i32> = Outcome::Success(3);
        assert_eq!(value.clone().trace_success("unit test"), Outcome::Success(3));
        assert_eq!(value.trace_failure("unit test"), Outcome::Success(3));
    }
}
