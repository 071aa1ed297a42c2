//! Model behind the animated circuit-board backdrop.
//!
//! Everything here is plain geometry so it can be exercised without a browser;
//! `components::interactive_background` owns the canvas and paints what this
//! module computes.

use rand::Rng;

/// Spacing of the static grid and of the candidate node positions.
pub const GRID_SIZE: f64 = 40.0;
/// Pointer distance below which a node gets a connector. Also the crosshair arm length.
pub const INTERACTION_RANGE: f64 = 150.0;
/// Clock advance per rendered frame.
pub const TIME_STEP: f64 = 0.005;
/// Chance that a grid intersection becomes a node.
pub const NODE_RETENTION: f64 = 0.4;

pub const BASE_COLOR: &str = "#1C1C1C";
pub const GRID_LINE_COLOR: &str = "#000000";
pub const ACCENT_COLOR: &str = "#A63A42";
pub const NODE_COLOR: &str = "#2A2A2A";

pub const GRID_ALPHA: f64 = 0.3;
pub const CROSSHAIR_ALPHA: f64 = 0.2;
pub const CONNECTOR_ALPHA: f64 = 0.1;
pub const GLOW_ALPHA: f64 = 0.08;
pub const NODE_MARKER_SIZE: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Far enough off-screen that nothing reacts until the pointer first moves.
pub const POINTER_OFFSCREEN: Point = Point::new(-1000.0, -1000.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

pub const BRAND_RED: Rgb = Rgb(166, 58, 66);
pub const BRAND_GREEN: Rgb = Rgb(62, 124, 103);

/// A soft radial light drifting over the base fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub center: Point,
    pub radius: f64,
    pub color: Rgb,
}

/// Right-angle trace from a node to the pointer: node, then `corner`, then pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    pub node: Point,
    pub corner: Point,
    pub pointer: Point,
}

/// Rounds each axis independently to the nearest grid line.
pub fn snap_to_grid(p: Point) -> Point {
    Point::new(
        (p.x / GRID_SIZE).round() * GRID_SIZE,
        (p.y / GRID_SIZE).round() * GRID_SIZE,
    )
}

/// Positions of grid lines along one axis, `0, 40, ...` up to and including `extent`.
pub fn grid_lines(extent: f64) -> impl Iterator<Item = f64> {
    (0u32..)
        .map(|i| f64::from(i) * GRID_SIZE)
        .take_while(move |v| *v <= extent)
}

pub fn generate_nodes<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Vec<Point> {
    let mut nodes = Vec::new();
    for x in grid_lines(viewport.width).filter(|x| *x < viewport.width) {
        for y in grid_lines(viewport.height).filter(|y| *y < viewport.height) {
            if rng.gen_bool(NODE_RETENTION) {
                nodes.push(Point::new(x, y));
            }
        }
    }
    nodes
}

/// Mutable state of one mounted backdrop.
#[derive(Debug)]
pub struct CircuitField {
    viewport: Viewport,
    nodes: Vec<Point>,
    pointer: Point,
    time: f64,
}

impl CircuitField {
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            viewport,
            nodes: generate_nodes(viewport, rng),
            pointer: POINTER_OFFSCREEN,
            time: 0.0,
        }
    }

    /// Adopts the new viewport and rebuilds the node set from scratch.
    pub fn resize<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.viewport = viewport;
        self.nodes = generate_nodes(viewport, rng);
    }

    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    pub fn tick(&mut self) {
        self.time += TIME_STEP;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn glows(&self) -> [Glow; 2] {
        glows_at(self.viewport, self.time)
    }

    pub fn crosshair_center(&self) -> Point {
        snap_to_grid(self.pointer)
    }

    pub fn connectors(&self) -> impl Iterator<Item = Connector> + '_ {
        let pointer = self.pointer;
        self.nodes
            .iter()
            .filter(move |node| node.distance(&pointer) < INTERACTION_RANGE)
            .map(move |&node| Connector {
                node,
                corner: Point::new(node.x, pointer.y),
                pointer,
            })
    }
}

/// Red glow drifts around the upper left, green around the lower right.
pub fn glows_at(viewport: Viewport, time: f64) -> [Glow; 2] {
    let Viewport { width: w, height: h } = viewport;
    let radius = w.max(h) * 0.6;
    [
        Glow {
            center: Point::new(
                w * 0.3 + (time * 0.7).sin() * (w * 0.1),
                h * 0.4 + (time * 0.5).cos() * (h * 0.1),
            ),
            radius,
            color: BRAND_RED,
        },
        Glow {
            center: Point::new(
                w * 0.7 + (time * 0.6).cos() * (w * 0.1),
                h * 0.6 + (time * 0.8).sin() * (h * 0.1),
            ),
            radius,
            color: BRAND_GREEN,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::f64::consts::PI;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn is_multiple_of_grid(v: f64) -> bool {
        (v / GRID_SIZE).fract() == 0.0
    }

    #[test]
    fn nodes_sit_on_intersections_inside_the_viewport() {
        for (w, h) in [(1280.0, 720.0), (375.0, 812.0), (41.0, 39.0), (0.0, 0.0)] {
            let field = CircuitField::new(Viewport::new(w, h), &mut rng());
            for node in field.nodes() {
                assert!(is_multiple_of_grid(node.x) && is_multiple_of_grid(node.y), "{node:?}");
                assert!((0.0..=w).contains(&node.x) && (0.0..=h).contains(&node.y), "{node:?}");
            }
        }
    }

    #[test]
    fn roughly_forty_percent_of_intersections_are_kept() {
        let viewport = Viewport::new(4000.0, 4000.0);
        let nodes = generate_nodes(viewport, &mut rng());
        let ratio = nodes.len() as f64 / 10_000.0;
        assert!((0.37..0.43).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn resize_rebuilds_for_the_new_viewport() {
        let mut field = CircuitField::new(Viewport::new(1920.0, 1080.0), &mut rng());
        field.resize(Viewport::new(400.0, 300.0), &mut rng());

        assert_eq!(field.viewport(), Viewport::new(400.0, 300.0));
        assert!(!field.nodes().is_empty());
        assert!(field.nodes().iter().all(|n| n.x < 400.0 && n.y < 300.0));
    }

    #[test]
    fn resize_keeps_pointer_and_clock() {
        let mut field = CircuitField::new(Viewport::new(800.0, 600.0), &mut rng());
        field.set_pointer(Point::new(100.0, 100.0));
        field.tick();
        field.resize(Viewport::new(640.0, 480.0), &mut rng());
        assert_eq!(field.pointer(), Point::new(100.0, 100.0));
        assert!(field.time() > 0.0);
    }

    #[test]
    fn snapping_rounds_each_axis_independently() {
        assert_eq!(snap_to_grid(Point::new(19.0, 21.0)), Point::new(0.0, 40.0));
        assert_eq!(snap_to_grid(Point::new(61.0, 99.9)), Point::new(80.0, 80.0));
        assert_eq!(snap_to_grid(Point::new(123.4, 5.0)), Point::new(120.0, 0.0));
    }

    #[test]
    fn snapped_center_is_never_more_than_half_a_cell_away() {
        let mut r = rng();
        for _ in 0..500 {
            let p = Point::new(r.gen_range(0.0..2000.0), r.gen_range(0.0..2000.0));
            let s = snap_to_grid(p);
            assert!((s.x - p.x).abs() <= GRID_SIZE / 2.0);
            assert!((s.y - p.y).abs() <= GRID_SIZE / 2.0);
        }
    }

    #[test]
    fn connectors_follow_the_interaction_radius() {
        let mut field = CircuitField::new(Viewport::new(1200.0, 800.0), &mut rng());
        field.set_pointer(Point::new(413.0, 287.0));
        let pointer = field.pointer();

        let connected: Vec<Point> = field.connectors().map(|c| c.node).collect();
        for node in field.nodes() {
            let expected = node.distance(&pointer) < INTERACTION_RANGE;
            assert_eq!(connected.contains(node), expected, "{node:?}");
        }
        assert!(!connected.is_empty());
    }

    #[test]
    fn node_exactly_at_the_radius_is_not_connected() {
        let mut field = CircuitField::new(Viewport::new(0.0, 0.0), &mut rng());
        field.nodes = vec![Point::new(150.0, 0.0), Point::new(149.0, 0.0)];
        field.set_pointer(Point::new(0.0, 0.0));
        let nodes: Vec<Point> = field.connectors().map(|c| c.node).collect();
        assert_eq!(nodes, vec![Point::new(149.0, 0.0)]);
    }

    #[test]
    fn connector_turns_at_the_pointer_row() {
        let mut field = CircuitField::new(Viewport::new(0.0, 0.0), &mut rng());
        field.nodes = vec![Point::new(40.0, 80.0)];
        field.set_pointer(Point::new(100.0, 50.0));
        let connector = field.connectors().next().unwrap();
        assert_eq!(connector.corner, Point::new(40.0, 50.0));
        assert_eq!(connector.pointer, Point::new(100.0, 50.0));
    }

    #[test]
    fn offscreen_pointer_touches_nothing() {
        let field = CircuitField::new(Viewport::new(1920.0, 1080.0), &mut rng());
        assert_eq!(field.connectors().count(), 0);
    }

    #[test]
    fn clock_advances_by_a_fixed_step() {
        let mut field = CircuitField::new(Viewport::new(100.0, 100.0), &mut rng());
        let mut previous = field.time();
        for _ in 0..1000 {
            field.tick();
            let step = field.time() - previous;
            assert!(step > 0.0);
            assert!((step - TIME_STEP).abs() < 1e-9);
            previous = field.time();
        }
    }

    #[test]
    fn glows_are_periodic_in_time() {
        let viewport = Viewport::new(1440.0, 900.0);
        // sin(0.7t), cos(0.5t), cos(0.6t), sin(0.8t) share the period 20π.
        let period = 20.0 * PI;
        for t in [0.0, 1.3, 17.0] {
            let a = glows_at(viewport, t);
            let b = glows_at(viewport, t + period);
            for (ga, gb) in a.iter().zip(b.iter()) {
                assert!((ga.center.x - gb.center.x).abs() < 1e-6);
                assert!((ga.center.y - gb.center.y).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn glow_radius_scales_with_the_larger_side() {
        let [red, green] = glows_at(Viewport::new(1000.0, 2000.0), 0.0);
        assert_eq!(red.radius, 1200.0);
        assert_eq!(green.radius, 1200.0);
        assert_eq!(red.color.with_alpha(GLOW_ALPHA), "rgba(166, 58, 66, 0.08)");
    }

    #[test]
    fn grid_lines_include_the_far_edge() {
        let xs: Vec<f64> = grid_lines(120.0).collect();
        assert_eq!(xs, vec![0.0, 40.0, 80.0, 120.0]);
    }
}
