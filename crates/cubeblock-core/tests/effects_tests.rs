// Seeded effect layouts and their per-frame output.

use cubeblock_core::constants::*;
use cubeblock_core::effects::{EffectStates, LayerEffects};

fn effects() -> LayerEffects {
    LayerEffects::seeded(DEFAULT_EFFECT_SEED, CUBE_SIZE)
}

#[test]
fn layouts_are_deterministic_per_seed() {
    let a = effects();
    let b = effects();
    assert_eq!(a.graph.nodes, b.graph.nodes);
    assert_eq!(a.graph.edges, b.graph.edges);
    assert_eq!(a.vortex.radii, b.vortex.radii);
    assert_eq!(a.chart.points, b.chart.points);

    let c = LayerEffects::seeded(7, CUBE_SIZE);
    assert_ne!(a.graph.nodes, c.graph.nodes);
}

#[test]
fn layout_sizes_match_constants() {
    let fx = effects();
    assert_eq!(fx.data_stream.particles.len(), DATA_STREAM_PARTICLES);
    assert_eq!(fx.graph.nodes.len(), GRAPH_NODES);
    assert_eq!(fx.vortex.radii.len(), VORTEX_POINTS);
    assert_eq!(fx.chart.points.len(), CHART_POINTS);
}

#[test]
fn graph_edges_join_close_nodes_only() {
    let fx = effects();
    for [a, b] in &fx.graph.edges {
        assert!(a < b);
        assert!(fx.graph.nodes[*a].distance(fx.graph.nodes[*b]) < CUBE_SIZE * 0.7);
    }
}

#[test]
fn graph_lights_edges_with_focus() {
    let fx = effects();
    let dark = fx.graph.update(0.0, 1.0);
    assert_eq!(dark.lit_edges, 0);
    assert_eq!(dark.node_opacity, 0.0);
    assert_eq!(dark.edge_opacity, 0.0);
    let lit = fx.graph.update(1.0, 1.0);
    assert_eq!(lit.lit_edges, fx.graph.edges.len());
    assert_eq!(lit.node_opacity, 1.0);
    assert!((lit.edge_opacity - 0.8).abs() < 1e-6);
}

#[test]
fn opacity_equals_focus() {
    let fx = effects();
    let mut out = EffectStates::new(&fx);
    fx.data_stream.update(0.4, 2.0, &mut out.data_stream);
    fx.vortex.update(0.6, 2.0, &mut out.vortex);
    fx.chart.update(0.8, &mut out.chart);
    assert_eq!(out.data_stream.opacity, 0.4);
    assert_eq!(out.vortex.opacity, 0.6);
    assert_eq!(out.chart.opacity, 0.8);
    assert_eq!(out.data_stream.positions.len(), DATA_STREAM_PARTICLES);
    assert_eq!(out.vortex.positions.len(), VORTEX_POINTS);
}

#[test]
fn stream_particles_stay_between_origin_and_center() {
    let fx = effects();
    let mut out = EffectStates::new(&fx);
    for step in 0..50 {
        fx.data_stream.update(1.0, step as f32 * 0.37, &mut out.data_stream);
        for (p, particle) in out.data_stream.positions.iter().zip(&fx.data_stream.particles) {
            assert!(p.length() <= particle.origin.length() + 1e-5);
        }
    }
}

#[test]
fn chart_reveals_progressively() {
    let fx = effects();
    let mut out = EffectStates::new(&fx);

    fx.chart.update(0.0, &mut out.chart);
    assert!(!out.chart.visible);
    assert!(out.chart.revealed.is_empty());

    fx.chart.update(1.0, &mut out.chart);
    assert_eq!(out.chart.revealed, fx.chart.points);

    // halfway through nine segments ends mid-segment
    fx.chart.update(0.5, &mut out.chart);
    assert_eq!(out.chart.revealed.len(), 6);
    assert_eq!(&out.chart.revealed[..5], &fx.chart.points[..5]);
    let tip = out.chart.revealed[5];
    let expected = fx.chart.points[4].lerp(fx.chart.points[5], 0.5);
    assert!(tip.distance(expected) < 1e-5);
}

#[test]
fn updates_reuse_buffers() {
    let fx = effects();
    let mut out = EffectStates::new(&fx);
    let cap = out.vortex.positions.capacity();
    for i in 0..10 {
        fx.vortex.update(1.0, i as f32, &mut out.vortex);
    }
    assert_eq!(out.vortex.positions.capacity(), cap);
}
