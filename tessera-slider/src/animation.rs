//! Animated transitions for thumb values.
//!
//! ## Usage
//!
//! The slider core never tweens values itself. External value changes are
//! routed to an [`Animator`] when [`crate::config::SliderConfig`] asks for
//! animated transitions; the default [`TimelineAnimator`] records a
//! transition on the target [`ValueCell`] which the host then advances once
//! per frame through [`crate::slider::SliderController::tick`].
use std::time::{Duration, Instant};

use crate::cell::ValueCell;

const SPRING_STEP: f32 = 0.001;
const SPRING_MAX_SIMULATION: f32 = 2.0;

/// Easing curves for timing animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic ease-out.
    EaseOutCubic,
    /// Cubic ease-in-out.
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress in [0.0, 1.0] to eased progress in [0.0, 1.0].
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Parameters of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringSpec {
    /// Spring stiffness.
    pub stiffness: f32,
    /// Damping coefficient.
    pub damping: f32,
    /// Mass attached to the spring.
    pub mass: f32,
    /// Displacement below which the spring may come to rest.
    pub rest_displacement: f32,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f32,
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }
}

/// Parameters of a fixed-duration eased animation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingSpec {
    /// Total duration.
    pub duration: Duration,
    /// Easing curve.
    pub easing: Easing,
}

impl Default for TimingSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            easing: Easing::default(),
        }
    }
}

/// Which kind of transition to run for external value changes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationSpec {
    /// Physically simulated spring.
    Spring(SpringSpec),
    /// Eased interpolation over a fixed duration.
    Timing(TimingSpec),
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::Spring(SpringSpec::default())
    }
}

/// Capability that moves a [`ValueCell`] toward a target value over time.
///
/// Starting a new animation on a cell must supersede any animation already
/// running on it.
pub trait Animator: Send + Sync {
    /// Begins moving `cell` toward `target`.
    fn animate(&self, cell: &ValueCell, target: f32, spec: &AnimationSpec);
}

/// Records frame-driven transitions on the cell itself.
///
/// The transition progresses whenever the cell is advanced with a timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineAnimator;

impl Animator for TimelineAnimator {
    fn animate(&self, cell: &ValueCell, target: f32, spec: &AnimationSpec) {
        cell.start_transition(target, *spec, Instant::now());
    }
}

/// Applies the target immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateAnimator;

impl Animator for ImmediateAnimator {
    fn animate(&self, cell: &ValueCell, target: f32, _spec: &AnimationSpec) {
        cell.set(target);
    }
}

/// An in-flight transition owned by a [`ValueCell`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Transition {
    from: f32,
    to: f32,
    spec: AnimationSpec,
    started_at: Instant,
    last_sample: Instant,
    position: f32,
    velocity: f32,
}

impl Transition {
    pub(crate) fn new(from: f32, to: f32, spec: AnimationSpec, now: Instant) -> Self {
        Self {
            from,
            to,
            spec,
            started_at: now,
            last_sample: now,
            position: from,
            velocity: 0.0,
        }
    }

    pub(crate) fn target(&self) -> f32 {
        self.to
    }

    /// Samples the transition at `now`. Returns the value and whether the
    /// transition has finished.
    pub(crate) fn sample(&mut self, now: Instant) -> (f32, bool) {
        match self.spec {
            AnimationSpec::Timing(timing) => {
                let elapsed = now.saturating_duration_since(self.started_at);
                if timing.duration.is_zero() || elapsed >= timing.duration {
                    return (self.to, true);
                }
                let fraction = elapsed.as_secs_f32() / timing.duration.as_secs_f32();
                let eased = timing.easing.apply(fraction);
                (self.from + (self.to - self.from) * eased, false)
            }
            AnimationSpec::Spring(spring) => self.step_spring(spring, now),
        }
    }

    fn step_spring(&mut self, spring: SpringSpec, now: Instant) -> (f32, bool) {
        let mass = if spring.mass > 0.0 { spring.mass } else { 1.0 };
        let mut remaining = now
            .saturating_duration_since(self.last_sample)
            .as_secs_f32()
            .min(SPRING_MAX_SIMULATION);
        self.last_sample = now;

        while remaining > 0.0 {
            let dt = remaining.min(SPRING_STEP);
            let displacement = self.position - self.to;
            let force = -spring.stiffness * displacement - spring.damping * self.velocity;
            self.velocity += force / mass * dt;
            self.position += self.velocity * dt;
            remaining -= dt;

            if self.is_at_rest(spring) {
                self.position = self.to;
                self.velocity = 0.0;
                return (self.to, true);
            }
        }

        if !self.position.is_finite() {
            return (self.to, true);
        }
        (self.position, false)
    }

    fn is_at_rest(&self, spring: SpringSpec) -> bool {
        (self.position - self.to).abs() <= spring.rest_displacement
            && self.velocity.abs() <= spring.rest_speed
    }
}
