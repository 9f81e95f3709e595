// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Interaction boost
//!
//! Each accepted interaction issues a scroll boost that expires on its own in
//! the perf service; handles are not kept. A new boost is skipped while the
//! previous one still covers more time than the new one would.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use super::{HintStatus, MAX_INTERACTIVE_DURATION_MS, MIN_INTERACTIVE_DURATION_MS};
use crate::platform::Clock;
use crate::tuning::{BoostKind, BoostSubtype, PerfTuner};

/// Span during which the last issued interaction boost is considered live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoostWindow {
    /// Monotonic time the boost was issued
    pub start: Duration,
    pub duration_ms: u32,
}

/// Clamp a requested duration into the interactive range.
///
/// Missing or too-small requests get the minimum.
pub fn clamp_duration(requested_ms: Option<i64>) -> u32 {
    match requested_ms {
        Some(ms) if ms > i64::from(MIN_INTERACTIVE_DURATION_MS) => {
            ms.min(i64::from(MAX_INTERACTIVE_DURATION_MS)) as u32
        }
        _ => MIN_INTERACTIVE_DURATION_MS,
    }
}

/// Whether the previous window already covers a new boost of `duration_ms`.
///
/// Compared in microseconds exactly as `prev * 1000 > elapsed + new * 1000`;
/// equality does not suppress.
pub fn is_covered(previous: &BoostWindow, now: Duration, duration_ms: u32) -> bool {
    let elapsed_us = now.saturating_sub(previous.start).as_micros();
    u128::from(previous.duration_ms) * 1000 > elapsed_us + u128::from(duration_ms) * 1000
}

/// State machine for interaction hints
#[derive(Debug, Default)]
pub struct InteractionBoost {
    previous: Mutex<BoostWindow>,
}

impl InteractionBoost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_interaction(
        &self,
        tuner: &dyn PerfTuner,
        clock: &dyn Clock,
        requested_ms: Option<i64>,
    ) -> HintStatus {
        let duration_ms = clamp_duration(requested_ms);
        let now = clock.now();

        {
            let mut previous = self.lock_window();
            if is_covered(&previous, now, duration_ms) {
                tracing::debug!(
                    duration_ms,
                    previous_ms = previous.duration_ms,
                    "interaction boost covered by previous window"
                );
                return HintStatus::Handled;
            }
            *previous = BoostWindow {
                start: now,
                duration_ms,
            };
        }

        tuner.request_boost(BoostKind::Scroll, duration_ms, BoostSubtype::ScrollVertical);
        HintStatus::Handled
    }

    /// The window of the last issued boost
    pub fn window(&self) -> BoostWindow {
        *self.lock_window()
    }

    fn lock_window(&self) -> MutexGuard<'_, BoostWindow> {
        match self.previous.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("Interaction boost window lock was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualClock;
    use crate::tuning::{BoostHandle, RecordingTuner, TunerAction};
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::thread;

    fn scroll(duration_ms: u32, handle: i32) -> TunerAction {
        TunerAction::RequestBoost {
            kind: BoostKind::Scroll,
            duration_ms,
            subtype: BoostSubtype::ScrollVertical,
            handle: BoostHandle(handle),
        }
    }

    #[test]
    fn test_clamp_duration() {
        assert_eq!(clamp_duration(None), 400);
        assert_eq!(clamp_duration(Some(-50)), 400);
        assert_eq!(clamp_duration(Some(0)), 400);
        assert_eq!(clamp_duration(Some(400)), 400);
        assert_eq!(clamp_duration(Some(401)), 401);
        assert_eq!(clamp_duration(Some(2500)), 2500);
        assert_eq!(clamp_duration(Some(5000)), 5000);
        assert_eq!(clamp_duration(Some(i64::MAX)), 5000);
    }

    #[test]
    fn test_first_interaction_always_issues() {
        let tuner = RecordingTuner::new();
        let clock = ManualClock::new();
        let interaction = InteractionBoost::new();

        assert_eq!(
            interaction.on_interaction(&tuner, &clock, None),
            HintStatus::Handled
        );
        assert_eq!(tuner.actions(), vec![scroll(400, 0)]);
        assert_eq!(interaction.window().duration_ms, 400);
    }

    #[test]
    fn test_long_boost_suppresses_short_follow_up() {
        let tuner = RecordingTuner::new();
        let clock = ManualClock::new();
        let interaction = InteractionBoost::new();

        interaction.on_interaction(&tuner, &clock, Some(3000));
        clock.advance(Duration::from_millis(100));
        // 3000ms * 1000 > 100_000us + 400ms * 1000
        interaction.on_interaction(&tuner, &clock, None);

        assert_eq!(tuner.boost_requests(), 1);
        assert_eq!(interaction.window().start, Duration::ZERO);
    }

    #[test]
    fn test_equal_coverage_is_not_suppressed() {
        let tuner = RecordingTuner::new();
        let clock = ManualClock::new();
        let interaction = InteractionBoost::new();

        interaction.on_interaction(&tuner, &clock, Some(1000));
        clock.advance(Duration::from_millis(600));
        // 1_000_000 > 600_000 + 400_000 is false
        interaction.on_interaction(&tuner, &clock, None);

        assert_eq!(tuner.actions(), vec![scroll(1000, 0), scroll(400, 1)]);
        assert_eq!(
            interaction.window(),
            BoostWindow {
                start: Duration::from_millis(600),
                duration_ms: 400,
            }
        );
    }

    #[test]
    fn test_same_duration_back_to_back_reissues() {
        let tuner = RecordingTuner::new();
        let clock = ManualClock::new();
        let interaction = InteractionBoost::new();

        interaction.on_interaction(&tuner, &clock, None);
        interaction.on_interaction(&tuner, &clock, None);

        // prev * 1000 > 0 + prev * 1000 never holds
        assert_eq!(tuner.boost_requests(), 2);
    }

    #[test]
    fn test_longer_request_extends_window() {
        let tuner = RecordingTuner::new();
        let clock = ManualClock::new();
        let interaction = InteractionBoost::new();

        interaction.on_interaction(&tuner, &clock, Some(500));
        clock.advance(Duration::from_millis(10));
        interaction.on_interaction(&tuner, &clock, Some(4000));

        assert_eq!(tuner.actions(), vec![scroll(500, 0), scroll(4000, 1)]);
        assert_eq!(interaction.window().duration_ms, 4000);
    }

    #[test]
    fn test_clock_behind_window_counts_as_zero_elapsed() {
        let previous = BoostWindow {
            start: Duration::from_millis(50),
            duration_ms: 2000,
        };
        assert!(is_covered(&previous, Duration::from_millis(10), 400));
    }

    #[test]
    fn test_concurrent_interactions_under_long_window() {
        let tuner = Arc::new(RecordingTuner::new());
        let clock = Arc::new(ManualClock::new());
        let interaction = Arc::new(InteractionBoost::new());
        interaction.on_interaction(tuner.as_ref(), clock.as_ref(), Some(5000));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tuner = Arc::clone(&tuner);
                let clock = Arc::clone(&clock);
                let interaction = Arc::clone(&interaction);
                thread::spawn(move || {
                    interaction.on_interaction(tuner.as_ref(), clock.as_ref(), Some(400))
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), HintStatus::Handled);
        }

        assert_eq!(tuner.actions(), vec![scroll(5000, 0)]);
        assert_eq!(interaction.window().duration_ms, 5000);
    }

    proptest! {
        #[test]
        fn prop_clamped_duration_in_range(requested in any::<Option<i64>>()) {
            let duration = clamp_duration(requested);
            prop_assert!(duration >= MIN_INTERACTIVE_DURATION_MS);
            prop_assert!(duration <= MAX_INTERACTIVE_DURATION_MS);
        }

        #[test]
        fn prop_suppression_law(
            previous_ms in MIN_INTERACTIVE_DURATION_MS..=MAX_INTERACTIVE_DURATION_MS,
            requested in any::<Option<i64>>(),
            elapsed_us in 0u64..6_000_000,
        ) {
            let tuner = RecordingTuner::new();
            let clock = ManualClock::new();
            let interaction = InteractionBoost::new();

            interaction.on_interaction(&tuner, &clock, Some(i64::from(previous_ms)));
            clock.advance(Duration::from_micros(elapsed_us));
            interaction.on_interaction(&tuner, &clock, requested);

            let duration = u64::from(clamp_duration(requested));
            let covered = u64::from(previous_ms) * 1000 > elapsed_us + duration * 1000;
            let expected = if covered { 1 } else { 2 };
            prop_assert_eq!(tuner.boost_requests(), expected);
        }
    }
}
