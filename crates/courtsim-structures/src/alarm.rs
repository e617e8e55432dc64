//! Blinking alarm on a baseline after a long first bounce.
//!
//! The blink pattern is a pure function of the time elapsed since the alarm
//! started, so updating it any number of times per frame is harmless.

use courtsim_core::{AlarmOptions, Baseline};
use glam::Vec3;

/// Returns whether the blink is in its "on" half at `elapsed` seconds.
///
/// Time before the start counts as the first "on" interval.
#[must_use]
pub fn blink_on(elapsed: f32, interval: f32) -> bool {
    let index = (elapsed.max(0.0) / interval).floor();
    index % 2.0 == 0.0
}

/// Blink state of an alarm started at `start_time`, observed at `now`.
///
/// Returns `None` once more than `duration` seconds have passed.
///
/// Both times are host clock readings; only the elapsed span is narrowed to
/// `f32`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn blink_state(start_time: f64, now: f64, interval: f32, duration: f32) -> Option<bool> {
    let elapsed = now - start_time;
    if elapsed > f64::from(duration) {
        None
    } else {
        Some(blink_on(elapsed as f32, interval))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveAlarm {
    target: Baseline,
    start_time: f64,
}

/// Color change requested by an alarm update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlarmUpdate {
    /// No alarm is running.
    Idle,
    /// The target should be drawn in `color`.
    Blink {
        target: Baseline,
        color: Vec3,
        on: bool,
    },
    /// The alarm finished; the target gets its original color back.
    Cleared { target: Baseline, color: Vec3 },
}

/// At most one running baseline alarm.
#[derive(Debug, Clone)]
pub struct BaselineAlarm {
    active: Option<ActiveAlarm>,
    duration: f32,
    interval: f32,
    original_color: Vec3,
    flash_color: Vec3,
}

impl BaselineAlarm {
    pub fn new(options: &AlarmOptions) -> Self {
        Self {
            active: None,
            duration: options.duration,
            interval: options.interval,
            original_color: options.original_color,
            flash_color: options.flash_color,
        }
    }

    /// Starts an alarm on `target` at time `now`.
    ///
    /// Returns false, leaving the running alarm untouched, if one is already
    /// active.
    pub fn trigger(&mut self, target: Baseline, now: f64) -> bool {
        if let Some(active) = self.active {
            log::debug!(
                "ignoring alarm on {}: {} alarm still running",
                target.name(),
                active.target.name()
            );
            return false;
        }

        log::info!("ball landed long, flashing {}", target.name());
        self.active = Some(ActiveAlarm {
            target,
            start_time: now,
        });
        true
    }

    /// Recomputes the blink state at time `now`.
    pub fn update(&mut self, now: f64) -> AlarmUpdate {
        let Some(active) = self.active else {
            return AlarmUpdate::Idle;
        };

        match blink_state(active.start_time, now, self.interval, self.duration) {
            Some(on) => AlarmUpdate::Blink {
                target: active.target,
                color: if on {
                    self.flash_color
                } else {
                    self.original_color
                },
                on,
            },
            None => {
                self.active = None;
                log::info!("alarm on {} cleared", active.target.name());
                AlarmUpdate::Cleared {
                    target: active.target,
                    color: self.original_color,
                }
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Baseline the running alarm is attached to.
    pub fn target(&self) -> Option<Baseline> {
        self.active.map(|a| a.target)
    }

    /// Time the running alarm started.
    pub fn start_time(&self) -> Option<f64> {
        self.active.map(|a| a.start_time)
    }

    pub fn original_color(&self) -> Vec3 {
        self.original_color
    }

    pub fn flash_color(&self) -> Vec3 {
        self.flash_color
    }
}

impl Default for BaselineAlarm {
    fn default() -> Self {
        Self::new(&AlarmOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_blink_pattern() {
        assert!(blink_on(0.0, 0.15));
        assert!(blink_on(0.14, 0.15));
        assert!(!blink_on(0.16, 0.15));
        assert!(blink_on(0.31, 0.15));
        assert!(!blink_on(0.46, 0.15));
        assert!(blink_on(-1.0, 0.15));
    }

    #[test]
    fn test_blink_state_expires() {
        assert_eq!(blink_state(2.0, 2.0, 0.15, 1.0), Some(true));
        assert_eq!(blink_state(2.0, 3.0, 0.15, 1.0), Some(blink_on(1.0, 0.15)));
        assert_eq!(blink_state(2.0, 3.01, 0.15, 1.0), None);
    }

    #[test]
    fn test_single_active_alarm() {
        let mut alarm = BaselineAlarm::default();
        assert!(alarm.trigger(Baseline::Far, 1.0));
        assert!(!alarm.trigger(Baseline::Near, 1.2));
        assert_eq!(alarm.target(), Some(Baseline::Far));
        assert_eq!(alarm.start_time(), Some(1.0));
    }

    #[test]
    fn test_update_cycle() {
        let mut alarm = BaselineAlarm::default();
        assert_eq!(alarm.update(0.0), AlarmUpdate::Idle);

        alarm.trigger(Baseline::Near, 10.0);
        assert_eq!(
            alarm.update(10.05),
            AlarmUpdate::Blink {
                target: Baseline::Near,
                color: alarm.flash_color(),
                on: true
            }
        );
        assert_eq!(
            alarm.update(10.2),
            AlarmUpdate::Blink {
                target: Baseline::Near,
                color: alarm.original_color(),
                on: false
            }
        );

        // Updates are idempotent
        assert_eq!(alarm.update(10.2), alarm.update(10.2));

        assert_eq!(
            alarm.update(11.5),
            AlarmUpdate::Cleared {
                target: Baseline::Near,
                color: alarm.original_color()
            }
        );
        assert!(!alarm.is_active());
        assert_eq!(alarm.update(11.6), AlarmUpdate::Idle);
    }

    #[test]
    fn test_retrigger_after_clear() {
        let mut alarm = BaselineAlarm::default();
        alarm.trigger(Baseline::Far, 0.0);
        alarm.update(2.0);
        assert!(alarm.trigger(Baseline::Near, 2.0));
        assert_eq!(alarm.target(), Some(Baseline::Near));
    }

    #[test]
    fn test_clears_late_in_a_long_session() {
        let mut alarm = BaselineAlarm::default();
        let mut now = 600_000.0;
        assert!(alarm.trigger(Baseline::Far, now));

        let mut cleared = false;
        for _ in 0..600 {
            now += f64::from(1.0f32 / 60.0);
            if let AlarmUpdate::Cleared { target, .. } = alarm.update(now) {
                assert_eq!(target, Baseline::Far);
                cleared = true;
                break;
            }
        }
        assert!(cleared);
        assert!(alarm.trigger(Baseline::Near, now));
    }

    proptest! {
        #[test]
        fn at_most_one_alarm(times in proptest::collection::vec(0.0f64..10.0, 1..20)) {
            let mut alarm = BaselineAlarm::default();
            let mut sorted = times;
            sorted.sort_by(f64::total_cmp);

            let mut started = 0;
            for (i, now) in sorted.into_iter().enumerate() {
                let target = if i % 2 == 0 { Baseline::Near } else { Baseline::Far };
                let was_active = alarm.is_active();
                if alarm.trigger(target, now) {
                    prop_assert!(!was_active);
                    started += 1;
                }
                prop_assert!(alarm.is_active());
                alarm.update(now);
            }
            prop_assert!(started >= 1);
        }
    }
}
