//! The orb's parameter record: current values, target values, and the
//! per-frame smoothing step that moves one toward the other.
//!
//! Targets are written only when session events are applied; current values
//! are written only by [`OrbParams::tick`]. Every update is a total numeric
//! function, so there is no failure path anywhere in here.

use glam::Vec2;
use rand::Rng;

use crate::color::{step_rgb, ColorTriple};
use crate::constants::{
    BASE_RADIUS, IDLE_RADIUS_RATE, MAX_RADIUS, SMOOTH_RATE, SPEAKING_RADIUS_RATE, SPEAKING_TILT_X,
};
use crate::events::{Role, SessionEvent};

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[derive(Clone, Debug)]
pub struct OrbParams {
    /// Current tilt, radians. `y` carries the smoothed part of the spin.
    pub rotation: Vec2,
    pub target_rotation: Vec2,
    /// Wave distortion magnitude and stroke thickness driver, in \[0, 1\].
    pub amplitude: f32,
    pub target_amplitude: f32,
    pub radius: f32,
    pub target_radius: f32,
    /// Smoothing rate for the radius only; events flip it between the idle
    /// and speaking rates so the swell is faster than the settle.
    pub animation_speed: f32,
    pub colors: ColorTriple,
    pub target_colors: ColorTriple,
}

impl Default for OrbParams {
    fn default() -> Self {
        Self {
            rotation: Vec2::ZERO,
            target_rotation: Vec2::ZERO,
            amplitude: 0.0,
            target_amplitude: 0.0,
            radius: BASE_RADIUS,
            target_radius: BASE_RADIUS,
            animation_speed: SMOOTH_RATE,
            colors: ColorTriple::default(),
            target_colors: ColorTriple::default(),
        }
    }
}

impl OrbParams {
    /// One smoothing step. Rotation, amplitude, and colors move at the fixed
    /// rate; the radius moves at whatever rate the last event selected.
    pub fn tick(&mut self) {
        self.rotation.x = lerp(self.rotation.x, self.target_rotation.x, SMOOTH_RATE);
        self.rotation.y = lerp(self.rotation.y, self.target_rotation.y, SMOOTH_RATE);
        self.amplitude = lerp(self.amplitude, self.target_amplitude, SMOOTH_RATE);
        self.radius = lerp(self.radius, self.target_radius, self.animation_speed);
        self.colors.c1 = step_rgb(self.colors.c1, self.target_colors.c1, SMOOTH_RATE);
        self.colors.c2 = step_rgb(self.colors.c2, self.target_colors.c2, SMOOTH_RATE);
        self.colors.c3 = step_rgb(self.colors.c3, self.target_colors.c3, SMOOTH_RATE);
    }

    /// Apply one session event; writes targets (and the radius rate) only.
    pub fn apply_event(&mut self, event: &SessionEvent, rng: &mut impl Rng) {
        match event {
            SessionEvent::Message {
                role: Role::Assistant,
            } => {
                self.target_amplitude = 1.0;
                self.target_radius = MAX_RADIUS;
                self.animation_speed = SPEAKING_RADIUS_RATE;
                self.target_colors = ColorTriple::random(rng);
            }
            SessionEvent::Message { role: Role::User } => {
                self.target_amplitude = 0.0;
                self.target_radius = BASE_RADIUS;
                self.animation_speed = IDLE_RADIUS_RATE;
            }
            SessionEvent::ModeChange { speaking: true } => {
                log::info!("mode changed to speaking");
                self.target_amplitude = 1.0;
                self.target_rotation.x = SPEAKING_TILT_X;
                self.target_radius = MAX_RADIUS;
                self.animation_speed = SPEAKING_RADIUS_RATE;
                self.target_colors = ColorTriple::random(rng);
            }
            SessionEvent::ModeChange { speaking: false } => {
                log::info!("mode changed to listening");
                self.target_amplitude = 0.0;
                self.target_rotation.x = 0.0;
                self.target_radius = BASE_RADIUS;
                self.animation_speed = IDLE_RADIUS_RATE;
            }
            SessionEvent::Disconnected => {
                log::info!("session disconnected");
                self.target_amplitude = 0.0;
                self.target_radius = BASE_RADIUS;
                self.animation_speed = IDLE_RADIUS_RATE;
                self.target_colors = ColorTriple::default();
            }
            SessionEvent::StatusChange { status } => {
                log::info!("status changed to {status}");
            }
            SessionEvent::Error { message } => {
                // Surfaced to the log side channel only; the visual state
                // keeps smoothing toward whatever target was last set.
                log::error!("session error: {message}");
            }
        }
    }
}
