//! Splash screen entrance animation
//!
//! Opacity fades in linearly while the logo scale follows a damped spring.
//! Both are pure functions of elapsed time; nothing here decides when the
//! splash screen goes away.

use std::time::Duration;

/// Fade-in duration
pub const FADE_DURATION: Duration = Duration::from_millis(1000);

/// Scale the logo starts from
pub const INITIAL_SCALE: f64 = 0.3;

/// Spring parameters in tension/friction form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: 10.0,
            friction: 2.0,
        }
    }
}

impl SpringConfig {
    /// Stiffness equivalent of the tension value
    pub fn stiffness(&self) -> f64 {
        (self.tension - 30.0) * 3.62 + 194.0
    }

    /// Damping equivalent of the friction value
    pub fn damping(&self) -> f64 {
        (self.friction - 8.0) * 3.0 + 25.0
    }
}

/// One sampled animation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f64,
    /// Logo scale; overshoots 1.0 while the spring settles
    pub scale: f64,
}

/// Entrance animation for the splash logo
#[derive(Debug, Clone, Copy, Default)]
pub struct SplashAnimation {
    spring: SpringConfig,
}

impl SplashAnimation {
    pub fn new(spring: SpringConfig) -> Self {
        Self { spring }
    }

    /// Sample the animation at a point in time since mount
    pub fn frame(&self, elapsed: Duration) -> AnimationFrame {
        let fade = elapsed.as_secs_f64() / FADE_DURATION.as_secs_f64();
        AnimationFrame {
            opacity: fade.clamp(0.0, 1.0),
            scale: 1.0 + self.displacement(elapsed.as_secs_f64()),
        }
    }

    /// Spring displacement from the target, starting at rest
    fn displacement(&self, t: f64) -> f64 {
        let x0 = INITIAL_SCALE - 1.0;
        let k = self.spring.stiffness().max(f64::EPSILON);
        let c = self.spring.damping().max(0.0);
        let omega = k.sqrt();
        let zeta = c / (2.0 * omega);

        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            decay * (x0 * (omega_d * t).cos() + (zeta * omega * x0 / omega_d) * (omega_d * t).sin())
        } else if (zeta - 1.0).abs() < f64::EPSILON {
            (x0 + omega * x0 * t) * (-omega * t).exp()
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let a = -r2 * x0 / (r1 - r2);
            let b = x0 - a;
            a * (r1 * t).exp() + b * (r2 * t).exp()
        }
    }
}
