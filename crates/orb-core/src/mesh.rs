//! Ribbon tessellation shared by the native and web frontends.
//!
//! GPU line primitives are fixed-width, and the orb's stroke thickens with
//! amplitude, so each polyline segment becomes a quad (two triangles) that
//! the vertex shader widens in screen space. Both endpoints of the segment
//! travel with every vertex; `edge` selects which endpoint the vertex sits
//! on and which side of the line it expands toward.

use bytemuck::{Pod, Zeroable};

use crate::color::gradient_color;
use crate::constants::{LINE_STEPS, NUM_LINES};
use crate::scene::OrbScene;

pub const VERTICES_PER_SEGMENT: usize = 6;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LineVertex {
    /// Segment start, model space.
    pub position: [f32; 3],
    /// Segment end, model space.
    pub endpoint: [f32; 3],
    /// Stroke color at this vertex's endpoint, linear 0..1 RGBA.
    pub color: [f32; 4],
    /// x: 0 at `position`, 1 at `endpoint`; y: expansion side, -1 or +1.
    pub edge: [f32; 2],
}

/// Tessellate every sphere line into segment quads with the tri-stop
/// gradient sampled at each endpoint's position along the line.
pub fn build_line_vertices(scene: &OrbScene, out: &mut Vec<LineVertex>) {
    out.clear();
    out.reserve(NUM_LINES * LINE_STEPS * VERTICES_PER_SEGMENT);
    let colors = &scene.params.colors;

    for line in scene.lines() {
        let points = line.points();
        let last = (points.len() - 1) as f32;
        for i in 0..points.len() - 1 {
            let p0 = points[i].to_array();
            let p1 = points[i + 1].to_array();
            let c0 = vertex_color(gradient_color(colors, i as f32 / last));
            let c1 = vertex_color(gradient_color(colors, (i + 1) as f32 / last));

            // Two triangles: (start-, start+, end+) and (start-, end+, end-).
            out.push(vertex(p0, p1, c0, 0.0, -1.0));
            out.push(vertex(p0, p1, c0, 0.0, 1.0));
            out.push(vertex(p0, p1, c1, 1.0, 1.0));
            out.push(vertex(p0, p1, c0, 0.0, -1.0));
            out.push(vertex(p0, p1, c1, 1.0, 1.0));
            out.push(vertex(p0, p1, c1, 1.0, -1.0));
        }
    }
}

#[inline]
fn vertex(p0: [f32; 3], p1: [f32; 3], color: [f32; 4], end: f32, side: f32) -> LineVertex {
    LineVertex {
        position: p0,
        endpoint: p1,
        color,
        edge: [end, side],
    }
}

#[inline]
fn vertex_color(rgb_255: [f32; 3]) -> [f32; 4] {
    [
        rgb_255[0] / 255.0,
        rgb_255[1] / 255.0,
        rgb_255[2] / 255.0,
        1.0,
    ]
}
