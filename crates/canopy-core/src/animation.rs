use std::sync::Arc;

use parking_lot::Mutex;
use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Unit-mass spring. `damping_ratio == 1.0` is critically damped (no bounce).
    Spring { damping_ratio: f32, stiffness: f32 },
}

impl Easing {
    /// Eased fraction after `elapsed` of an animation lasting `duration`.
    ///
    /// Tweens work on normalized time. Springs run on physical seconds, so an
    /// underdamped spring can overshoot 1.0 before it settles.
    pub fn progress(&self, elapsed: Duration, duration: Duration) -> f32 {
        let t = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
        };
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Spring {
                damping_ratio,
                stiffness,
            } => spring_response(damping_ratio, stiffness, elapsed.as_secs_f32()),
        }
    }
}

/// Step response of a unit-mass spring released at rest from 0 toward 1.
fn spring_response(zeta: f32, stiffness: f32, t: f32) -> f32 {
    let omega = stiffness.max(0.0).sqrt();
    if omega == 0.0 {
        return 1.0;
    }
    let zeta = zeta.max(0.0);

    if (zeta - 1.0).abs() < 1e-4 {
        1.0 - (-omega * t).exp() * (1.0 + omega * t)
    } else if zeta < 1.0 {
        let root = (1.0 - zeta * zeta).sqrt();
        let omega_d = omega * root;
        let decay = (-zeta * omega * t).exp();
        1.0 - decay * ((omega_d * t).cos() + zeta / root * (omega_d * t).sin())
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSpec {
    /// For springs this is the settle deadline: the value snaps to its target
    /// once it elapses.
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn spring(damping_ratio: f32, stiffness: f32, duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::Spring {
                damping_ratio,
                stiffness,
            },
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

// Animation clock
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock you can drive deterministically. Clones share the same time.
#[derive(Clone)]
pub struct ManualClock {
    t: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            t: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) -> Instant {
        let mut t = self.t.lock();
        *t += by;
        *t
    }

    pub fn set(&self, to: Instant) {
        *self.t.lock() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.t.lock()
    }
}

/// Value that transitions smoothly toward a target, sampled with an explicit
/// frame time.
#[derive(Clone, Debug)]
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    /// Starts animating toward `target` from wherever the value is right now,
    /// so a retarget mid-flight never jumps.
    pub fn set_target(&mut self, target: T, now: Instant) {
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(now);
    }

    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.start = value.clone();
        self.target = value;
        self.start_time = None;
    }

    /// Samples the animation at `now`. Returns true while still running.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = now.saturating_duration_since(start);

        if elapsed < self.spec.delay {
            return true;
        }

        let animation_time = elapsed - self.spec.delay;

        if animation_time >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }

        let eased_t = self.spec.easing.progress(animation_time, self.spec.duration);
        self.current = self.start.interpolate(&self.target, eased_t);

        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}
