//! Session configuration options.

use core::time::Duration;

/// Configuration options for a [`Session`](crate::Session).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use parcheesi::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_cpu_delay(Duration::from_millis(250))
///     .with_auto_skip(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Delay before a computer player takes its turn.
    pub cpu_delay: Duration,
    /// Delay before a human turn with nothing to play is skipped.
    pub auto_skip_delay: Duration,
    /// Whether human turns with nothing to play are skipped automatically.
    pub auto_skip: bool,
    /// Whether a computer turn that picked an illegal move is skipped instead
    /// of being left waiting on its roll.
    pub skip_stalled_cpu: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            cpu_delay: Duration::from_millis(1000),
            auto_skip_delay: Duration::from_millis(1500),
            auto_skip: true,
            skip_stalled_cpu: true,
        }
    }
}

impl SessionOptions {
    /// Sets the computer turn delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use parcheesi::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_cpu_delay(Duration::ZERO);
    /// assert_eq!(options.cpu_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_cpu_delay(mut self, delay: Duration) -> Self {
        self.cpu_delay = delay;
        self
    }

    /// Sets the auto-skip delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use parcheesi::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_auto_skip_delay(Duration::from_secs(3));
    /// assert_eq!(options.auto_skip_delay, Duration::from_secs(3));
    /// ```
    #[must_use]
    pub const fn with_auto_skip_delay(mut self, delay: Duration) -> Self {
        self.auto_skip_delay = delay;
        self
    }

    /// Sets whether stuck human turns are skipped automatically.
    ///
    /// # Example
    ///
    /// ```
    /// use parcheesi::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_auto_skip(false);
    /// assert!(!options.auto_skip);
    /// ```
    #[must_use]
    pub const fn with_auto_skip(mut self, enabled: bool) -> Self {
        self.auto_skip = enabled;
        self
    }

    /// Sets whether stalled computer turns are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use parcheesi::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_skip_stalled_cpu(false);
    /// assert!(!options.skip_stalled_cpu);
    /// ```
    #[must_use]
    pub const fn with_skip_stalled_cpu(mut self, enabled: bool) -> Self {
        self.skip_stalled_cpu = enabled;
        self
    }
}
