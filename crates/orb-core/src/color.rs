//! 8-bit RGB triples and the interpolation rules the orb uses on them.

use rand::Rng;

use crate::constants::DEFAULT_COLORS;

/// One gradient stop; channels in \[0, 255\].
pub type Rgb = [u8; 3];

/// The three stops of the stroke gradient along each sphere line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTriple {
    pub c1: Rgb,
    pub c2: Rgb,
    pub c3: Rgb,
}

impl Default for ColorTriple {
    fn default() -> Self {
        Self {
            c1: DEFAULT_COLORS[0],
            c2: DEFAULT_COLORS[1],
            c3: DEFAULT_COLORS[2],
        }
    }
}

impl ColorTriple {
    /// Three independent uniform draws, each channel in \[0, 255\].
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            c1: random_rgb(rng),
            c2: random_rgb(rng),
            c3: random_rgb(rng),
        }
    }
}

pub fn random_rgb(rng: &mut impl Rng) -> Rgb {
    [rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>()]
}

/// One smoothing step of a color toward its target.
///
/// Channels move by `floor((target - current) * rate)` which keeps them in
/// \[0, 255\]: a channel above its target lands on it exactly, one below
/// settles just under it. That asymmetry is part of the orb's look.
pub fn step_rgb(current: Rgb, target: Rgb, rate: f32) -> Rgb {
    let mut out = [0u8; 3];
    for (i, o) in out.iter_mut().enumerate() {
        let c = current[i] as f32;
        let t = target[i] as f32;
        *o = (c + (t - c) * rate).floor().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Straight channel-wise lerp in f32, exact at `t == 0` and `t == 1`.
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> [f32; 3] {
    [
        a[0] as f32 + (b[0] as f32 - a[0] as f32) * t,
        a[1] as f32 + (b[1] as f32 - a[1] as f32) * t,
        a[2] as f32 + (b[2] as f32 - a[2] as f32) * t,
    ]
}

/// Tri-stop gradient along a line, `t` in \[0, 1\].
///
/// The first half blends c1 to c2, the second half c2 to c3, so t = 0, 0.5
/// and 1 hit the stops exactly. Returned channels stay in the 0..=255 range
/// (normalize before handing to the GPU).
pub fn gradient_color(colors: &ColorTriple, t: f32) -> [f32; 3] {
    if t < 0.5 {
        lerp_rgb(colors.c1, colors.c2, t * 2.0)
    } else {
        lerp_rgb(colors.c2, colors.c3, (t - 0.5) * 2.0)
    }
}
