//! Procedural sphere lines: one closed-sweep meridian polyline each.

use glam::Vec3;

use crate::constants::{
    BASE_RADIUS, LINE_STEPS, NUM_LINES, WAVE_DEPTH, WAVE_FREQUENCY, WAVE_PHASE_PER_FRAME,
};

/// One meridian of the wireframe sphere.
///
/// The meridian angle is fixed at creation; only the sampled points change,
/// and they are replaced wholesale on each regeneration.
#[derive(Clone, Debug)]
pub struct SphereLine {
    angle: f32,
    points: Vec<Vec3>,
}

impl SphereLine {
    pub fn new(index: usize) -> Self {
        let mut line = Self {
            angle: (index as f32 / NUM_LINES as f32) * std::f32::consts::PI,
            points: Vec::with_capacity(LINE_STEPS + 1),
        };
        line.generate_points(BASE_RADIUS, 0.0, 0);
        line
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Resample all 51 points for the given radius and wave state.
    ///
    /// `lat` sweeps a full 2π; the wave offset's phase is tied to the shared
    /// frame count, which is what keeps the ripple traveling in sync across
    /// every line.
    pub fn generate_points(&mut self, radius: f32, amplitude: f32, frame_count: u64) {
        self.points.clear();
        let phase = frame_count as f32 * WAVE_PHASE_PER_FRAME;
        for i in 0..=LINE_STEPS {
            let t = i as f32 / LINE_STEPS as f32;
            let lat = t * std::f32::consts::TAU;

            let wave_offset = (lat * WAVE_FREQUENCY + phase).sin() * amplitude * WAVE_DEPTH;
            let r = radius + wave_offset;

            self.points.push(Vec3::new(
                r * lat.cos() * self.angle.sin(),
                r * lat.sin() * self.angle.sin(),
                r * self.angle.cos(),
            ));
        }
    }
}

/// The fixed set of meridians, index 0 at angle 0 up to (n-1)/n of π.
pub fn make_sphere_lines() -> Vec<SphereLine> {
    (0..NUM_LINES).map(SphereLine::new).collect()
}
