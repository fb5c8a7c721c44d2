//! State of a code card's copy button.
//!
//! The button shows [`CopyLabel::Idle`] until a clipboard write succeeds,
//! then [`CopyLabel::Copied`] until the scheduled revert fires. Every
//! confirmation bumps a generation counter, so a revert scheduled by an
//! earlier click cannot end a later confirmation early.

use std::time::Duration;

use crate::config::{RenderConfig, DEFAULT_COPY_CONFIRMATION_MS};
use crate::error::ClipboardError;

pub const COPY_LABEL: &str = "⧉ Copy";
pub const COPIED_LABEL: &str = "✅ Copied!";
pub const COPY_TITLE: &str = "Copy to clipboard";

/// Log target for clipboard diagnostics.
pub const CLIPBOARD_LOG_TARGET: &str = "chatmd::clipboard";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyLabel {
    #[default]
    Idle,
    Copied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertToken(u64);

/// A revert the host must run once `after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledRevert {
    pub token: RevertToken,
    pub after: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    label: CopyLabel,
    generation: u64,
    confirmation: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_COPY_CONFIRMATION_MS))
    }
}

impl CopyFeedback {
    pub fn new(confirmation: Duration) -> Self {
        Self {
            label: CopyLabel::Idle,
            generation: 0,
            confirmation,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(Duration::from_millis(config.copy_confirmation_ms))
    }

    pub fn label(&self) -> CopyLabel {
        self.label
    }

    pub fn confirmation(&self) -> Duration {
        self.confirmation
    }

    /// Applies the outcome of a clipboard write.
    ///
    /// Failures are logged and leave the label untouched.
    pub fn resolve(&mut self, result: Result<(), ClipboardError>) -> Option<ScheduledRevert> {
        match result {
            Ok(()) => {
                self.generation += 1;
                self.label = CopyLabel::Copied;
                Some(ScheduledRevert {
                    token: RevertToken(self.generation),
                    after: self.confirmation,
                })
            }
            Err(err) => {
                log::error!(target: CLIPBOARD_LOG_TARGET, "Clipboard copy failed: {err}");
                None
            }
        }
    }

    /// Restores the idle label unless a newer confirmation is showing.
    pub fn revert(&mut self, token: RevertToken) {
        if token.0 == self.generation {
            self.label = CopyLabel::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, Once};

    struct CaptureLogger;

    static RECORDS: Mutex<Vec<(String, log::Level, String)>> = Mutex::new(Vec::new());
    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            RECORDS.lock().unwrap().push((
                record.target().to_string(),
                record.level(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    fn capture_logs() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
        });
    }

    fn records_mentioning(needle: &str) -> Vec<(String, log::Level, String)> {
        RECORDS
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, _, message)| message.contains(needle))
            .cloned()
            .collect()
    }

    /// Fires scheduled reverts once their deadline has passed.
    #[derive(Default)]
    struct ManualTimer {
        now: Duration,
        pending: Vec<(Duration, RevertToken)>,
    }

    impl ManualTimer {
        fn schedule(&mut self, revert: ScheduledRevert) {
            self.pending.push((self.now + revert.after, revert.token));
        }

        fn advance(&mut self, by: Duration, state: &mut CopyFeedback) {
            self.now += by;
            let now = self.now;
            self.pending.retain(|(due, token)| {
                if *due <= now {
                    state.revert(*token);
                    false
                } else {
                    true
                }
            });
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_success_shows_confirmation_for_exactly_1200ms() {
        let mut state = CopyFeedback::default();
        let mut timer = ManualTimer::default();

        let revert = state.resolve(Ok(())).unwrap();
        assert_eq!(revert.after, ms(1200));
        assert_eq!(state.label(), CopyLabel::Copied);
        timer.schedule(revert);

        timer.advance(ms(1199), &mut state);
        assert_eq!(state.label(), CopyLabel::Copied);

        timer.advance(ms(1), &mut state);
        assert_eq!(state.label(), CopyLabel::Idle);
    }

    #[test]
    fn test_stale_revert_does_not_cut_new_confirmation_short() {
        let mut state = CopyFeedback::default();
        let mut timer = ManualTimer::default();

        timer.schedule(state.resolve(Ok(())).unwrap());
        timer.advance(ms(1000), &mut state);
        timer.schedule(state.resolve(Ok(())).unwrap());

        // First click's timer fires here.
        timer.advance(ms(200), &mut state);
        assert_eq!(state.label(), CopyLabel::Copied);

        timer.advance(ms(999), &mut state);
        assert_eq!(state.label(), CopyLabel::Copied);

        timer.advance(ms(1), &mut state);
        assert_eq!(state.label(), CopyLabel::Idle);
    }

    #[test]
    fn test_failure_logs_once_and_keeps_label() {
        capture_logs();
        let mut state = CopyFeedback::default();

        let revert = state.resolve(Err(ClipboardError::Rejected(
            "denied-by-test-7f3a".to_string(),
        )));

        assert!(revert.is_none());
        assert_eq!(state.label(), CopyLabel::Idle);

        let records = records_mentioning("denied-by-test-7f3a");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, CLIPBOARD_LOG_TARGET);
        assert_eq!(records[0].1, log::Level::Error);
    }

    #[test]
    fn test_failure_after_success_leaves_confirmation_showing() {
        capture_logs();
        let mut state = CopyFeedback::default();

        let revert = state.resolve(Ok(())).unwrap();
        assert!(state
            .resolve(Err(ClipboardError::Rejected("denied-by-test-91c2".into())))
            .is_none());
        assert_eq!(state.label(), CopyLabel::Copied);

        state.revert(revert.token);
        assert_eq!(state.label(), CopyLabel::Idle);
        assert_eq!(records_mentioning("denied-by-test-91c2").len(), 1);
    }

    #[test]
    fn test_confirmation_from_config() {
        let config = RenderConfig {
            copy_confirmation_ms: 500,
            ..RenderConfig::default()
        };
        assert_eq!(CopyFeedback::from_config(&config).confirmation(), ms(500));
        assert_eq!(CopyFeedback::default().confirmation(), ms(1200));
    }
}
