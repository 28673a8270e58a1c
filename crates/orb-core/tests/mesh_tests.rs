// Host-side tests for the ribbon tessellation handed to the GPU.

use orb_core::{
    build_line_vertices, gradient_color, LineVertex, OrbScene, LINE_STEPS, NUM_LINES,
    VERTICES_PER_SEGMENT,
};

fn tessellate(scene: &OrbScene) -> Vec<LineVertex> {
    let mut out = Vec::new();
    build_line_vertices(scene, &mut out);
    out
}

#[test]
fn vertex_count_is_six_per_segment() {
    let (scene, _sender) = OrbScene::new(1);
    let verts = tessellate(&scene);
    assert_eq!(verts.len(), NUM_LINES * LINE_STEPS * VERTICES_PER_SEGMENT);
}

#[test]
fn segment_quads_carry_both_endpoints() {
    let (scene, _sender) = OrbScene::new(1);
    let verts = tessellate(&scene);
    let p0 = scene.lines()[0].points()[0].to_array();
    let p1 = scene.lines()[0].points()[1].to_array();
    for v in &verts[0..VERTICES_PER_SEGMENT] {
        assert_eq!(v.position, p0);
        assert_eq!(v.endpoint, p1);
    }
}

#[test]
fn edge_attributes_form_two_triangles() {
    let (scene, _sender) = OrbScene::new(1);
    let verts = tessellate(&scene);
    let edges: Vec<[f32; 2]> = verts[0..VERTICES_PER_SEGMENT]
        .iter()
        .map(|v| v.edge)
        .collect();
    assert_eq!(
        edges,
        vec![
            [0.0, -1.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [0.0, -1.0],
            [1.0, 1.0],
            [1.0, -1.0],
        ]
    );
}

#[test]
fn vertex_colors_sample_the_gradient_at_each_endpoint() {
    let (scene, _sender) = OrbScene::new(1);
    let verts = tessellate(&scene);
    let colors = &scene.params.colors;

    // first vertex of the first segment sits at t = 0: stop one, normalized
    let expected_start = gradient_color(colors, 0.0);
    let v = &verts[0];
    for i in 0..3 {
        assert!((v.color[i] * 255.0 - expected_start[i]).abs() < 1e-3);
    }
    assert_eq!(v.color[3], 1.0);

    // last vertex of a line's final segment sits at t = 1: stop three
    let last_line_end = &verts[LINE_STEPS * VERTICES_PER_SEGMENT - 1];
    let expected_end = gradient_color(colors, 1.0);
    for i in 0..3 {
        assert!((last_line_end.color[i] * 255.0 - expected_end[i]).abs() < 1e-3);
    }
}

#[test]
fn gradient_mapping_is_identical_for_every_line() {
    let (scene, _sender) = OrbScene::new(1);
    let verts = tessellate(&scene);
    let per_line = LINE_STEPS * VERTICES_PER_SEGMENT;
    for line in 1..NUM_LINES {
        for seg_vertex in 0..per_line {
            assert_eq!(
                verts[seg_vertex].color,
                verts[line * per_line + seg_vertex].color,
                "gradient depends only on position along the line"
            );
        }
    }
}

#[test]
fn vertex_layout_is_pod_and_tightly_packed() {
    // the pipeline's array_stride assumes no padding between the fields
    assert_eq!(std::mem::size_of::<LineVertex>(), 12 * 4);
    let v = LineVertex {
        position: [1.0, 2.0, 3.0],
        endpoint: [4.0, 5.0, 6.0],
        color: [0.1, 0.2, 0.3, 1.0],
        edge: [0.0, -1.0],
    };
    let bytes: &[u8] = bytemuck::bytes_of(&v);
    assert_eq!(bytes.len(), 48);
}
