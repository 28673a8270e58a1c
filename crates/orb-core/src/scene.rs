//! The per-frame orchestration: drain events, smooth parameters, rebuild
//! geometry behind the radius guard, advance the ambient spin.

use glam::Mat4;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{FRAME_SPIN_RATE, RADIUS_REBUILD_THRESHOLD, SPIN_TARGET_STEP, STROKE_BASE};
use crate::events::{EventQueue, EventSender, SessionEvent};
use crate::lines::{make_sphere_lines, SphereLine};
use crate::params::OrbParams;

pub struct OrbScene {
    pub params: OrbParams,
    lines: Vec<SphereLine>,
    frame_count: u64,
    events: EventQueue,
    drained: Vec<SessionEvent>,
    rng: StdRng,
}

impl OrbScene {
    /// Build the scene and the sender handle the transport glue posts into.
    pub fn new(seed: u64) -> (Self, EventSender) {
        let (events, sender) = EventQueue::new();
        let scene = Self {
            params: OrbParams::default(),
            lines: make_sphere_lines(),
            frame_count: 0,
            events,
            drained: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        (scene, sender)
    }

    pub fn lines(&self) -> &[SphereLine] {
        &self.lines
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// One display frame.
    ///
    /// Queued events land first so a frame that receives "speaking" already
    /// smooths toward the new targets. Points are only resampled while the
    /// radius is still moving; once it converges the 25x51 rebuild stops.
    pub fn tick(&mut self) {
        self.drained.clear();
        self.events.drain(&mut self.drained);
        for ev in &self.drained {
            self.params.apply_event(ev, &mut self.rng);
        }

        self.params.tick();

        if (self.params.target_radius - self.params.radius).abs() > RADIUS_REBUILD_THRESHOLD {
            for line in &mut self.lines {
                line.generate_points(self.params.radius, self.params.amplitude, self.frame_count);
            }
        }

        // Ambient spin: the yaw target creeps ahead every frame and the
        // smoothed yaw chases it, which reads as near-constant velocity.
        self.params.target_rotation.y += SPIN_TARGET_STEP;
        self.frame_count += 1;
    }

    /// Total yaw at draw time: smoothed spin plus the unconditional
    /// frame-tied rotation. Kept as two components, summed only here.
    pub fn yaw(&self) -> f32 {
        self.params.rotation.y + self.frame_count as f32 * FRAME_SPIN_RATE
    }

    /// Orientation applied to every line: tilt about X, then yaw about Y.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.params.rotation.x) * Mat4::from_rotation_y(self.yaw())
    }

    /// Stroke width in pixels for the current amplitude.
    pub fn stroke_width(&self) -> f32 {
        STROKE_BASE + self.params.amplitude
    }
}
