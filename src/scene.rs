// The retro computer scene: a list of parts (boxes, cylinders, planes and
// dots) rebuilt every frame from the power flag and the elapsed time, drawn
// with a perspective projection and the painter's algorithm.

use crate::particles::{ParticleField, StarField, STAR_DEPTH, STAR_RADIUS};
use crate::util::{hex_color, shade, with_opacity};
use eframe::egui::{self, Color32, Painter, Pos2, Rect, Shape, Stroke};
use nalgebra::{Rotation3, Unit, Vector3};
use std::f32::consts::{PI, TAU};

const CYLINDER_SEGMENTS: usize = 12;
const FIELD_OF_VIEW: f32 = 75.0; // degrees, vertical
const NEAR_PLANE: f32 = 0.1;
const AMBIENT: f32 = 0.35;

fn v(x: f32, y: f32, z: f32) -> Vector3<f32> {
    Vector3::new(x, y, z)
}

// Rotation of the computer group about +y
fn group_rotation(yaw: f32) -> Rotation3<f32> {
    Rotation3::from_euler_angles(0.0, yaw, 0.0)
}

// --- Cosmetic oscillators ---

/// Y rotation of the whole computer group.
pub fn sway_angle(elapsed: f32) -> f32 {
    (elapsed * 0.2).sin() * 0.05
}

/// Emissive intensity of the powered screen.
pub fn screen_intensity(elapsed: f32) -> f32 {
    0.4 + (elapsed * 3.0).sin() * 0.1
}

/// Vertical bob of the coffee mug.
pub fn mug_float(elapsed: f32) -> f32 {
    const SPEED: f32 = 1.0;
    const INTENSITY: f32 = 0.3;
    (elapsed * SPEED).sin() / 10.0 * INTENSITY
}

// --- Scene description ---

/// Parts the user can click.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Hotspot {
    Screen,
    Keyboard,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geometry {
    Cuboid { size: Vector3<f32> },
    Cylinder { top: f32, bottom: f32, height: f32 },
    Plane { width: f32, height: f32 }, // faces +z
    Dot { radius: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub geometry: Geometry,
    pub position: Vector3<f32>,
    pub color: Color32,
    pub emissive: f32, // 0 = fully lit by the scene, 1 = self-lit
    pub opacity: f32,
    pub hotspot: Option<Hotspot>,
}

impl Part {
    fn new(geometry: Geometry, position: Vector3<f32>, color: &str) -> Self {
        Self {
            geometry,
            position,
            color: hex_color(color),
            emissive: 0.0,
            opacity: 1.0,
            hotspot: None,
        }
    }

    fn cuboid(size: Vector3<f32>, position: Vector3<f32>, color: &str) -> Self {
        Self::new(Geometry::Cuboid { size }, position, color)
    }

    fn cylinder(top: f32, bottom: f32, height: f32, position: Vector3<f32>, color: &str) -> Self {
        Self::new(Geometry::Cylinder { top, bottom, height }, position, color)
    }

    fn plane(width: f32, height: f32, position: Vector3<f32>, color: &str) -> Self {
        Self::new(Geometry::Plane { width, height }, position, color)
    }

    fn emissive(mut self, intensity: f32) -> Self {
        self.emissive = intensity;
        self
    }

    fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    fn hotspot(mut self, hotspot: Hotspot) -> Self {
        self.hotspot = Some(hotspot);
        self
    }

    fn offset(mut self, by: Vector3<f32>) -> Self {
        self.position = self.position + by;
        self
    }
}

fn desk(parts: &mut Vec<Part>) {
    let origin = v(0.0, -1.5, 0.0);
    parts.push(Part::cuboid(v(6.0, 0.1, 4.0), origin, "#4a4a4a"));
    for (x, z) in [(-2.5, -1.5), (2.5, -1.5), (-2.5, 1.5), (2.5, 1.5)] {
        parts.push(Part::cylinder(0.05, 0.05, 1.6, origin + v(x, -0.8, z), "#2a2a2a"));
    }
    parts.push(Part::cuboid(v(6.1, 0.02, 4.1), origin + v(0.0, 0.06, 0.0), "#3a3a3a"));
}

fn pc_tower(parts: &mut Vec<Part>, powered: bool) {
    let origin = v(2.5, -0.7, 0.0);
    let led = if powered { "#00ff00" } else { "#ff0000" };
    parts.push(Part::cuboid(v(0.4, 1.2, 0.8), origin, "#2a2a2a"));
    parts.push(
        Part::cylinder(0.03, 0.03, 0.02, origin + v(0.21, 0.4, 0.3), led)
            .emissive(0.5),
    );
    parts.push(Part::cuboid(v(0.02, 0.08, 0.3), origin + v(0.21, 0.1, 0.0), "#1a1a1a"));
    for y in [-0.2, 0.0, 0.2] {
        parts.push(Part::cuboid(v(0.01, 0.05, 0.2), origin + v(0.21, y, -0.2), "#1a1a1a"));
    }
    parts.push(
        Part::cuboid(v(0.01, 0.02, 0.6), origin + v(0.21, -0.5, 0.0), "#0066ff").emissive(0.3),
    );
}

fn monitor(parts: &mut Vec<Part>, powered: bool, elapsed: f32) {
    parts.push(Part::cylinder(0.3, 0.4, 0.2, v(0.0, -1.1, 0.0), "#2a2a2a"));
    parts.push(Part::cylinder(0.08, 0.08, 0.6, v(0.0, -0.8, 0.0), "#1a1a1a"));
    parts.push(Part::cuboid(v(2.4, 1.8, 0.6), Vector3::zeros(), "#3a3a3a"));
    parts.push(Part::cuboid(v(2.2, 1.6, 0.05), v(0.0, 0.0, 0.31), "#1a1a1a"));

    if powered {
        parts.push(
            Part::plane(2.1, 1.5, v(0.0, 0.0, 0.32), "#00ff00")
                .emissive(0.3)
                .opacity(0.1),
        );
        parts.push(
            Part::plane(1.9, 1.3, v(0.0, 0.0, 0.34), "#003300")
                .emissive(screen_intensity(elapsed))
                .opacity(0.95)
                .hotspot(Hotspot::Screen),
        );
    } else {
        parts.push(
            Part::plane(1.9, 1.3, v(0.0, 0.0, 0.34), "#000000")
                .opacity(0.95)
                .hotspot(Hotspot::Screen),
        );
    }

    for x in [0.8, 1.0, 1.2] {
        parts.push(Part::cylinder(0.03, 0.03, 0.02, v(x, -0.7, 0.31), "#404040"));
    }
    parts.push(Part::cuboid(v(0.6, 0.08, 0.01), v(0.0, -0.7, 0.31), "#2a2a2a"));
}

fn keyboard(parts: &mut Vec<Part>) {
    let origin = v(0.0, -1.45, 0.8);
    parts.push(
        Part::cuboid(v(1.6, 0.08, 0.6), origin, "#2a2a2a").hotspot(Hotspot::Keyboard),
    );
    for i in 0..60 {
        let row = (i / 12) as f32;
        let col = (i % 12) as f32;
        parts.push(Part::cuboid(
            v(0.08, 0.03, 0.08),
            origin + v(-0.65 + col * 0.11, 0.045, -0.2 + row * 0.1),
            "#404040",
        ));
    }
    parts.push(Part::cuboid(v(0.4, 0.03, 0.08), origin + v(0.0, 0.045, 0.25), "#404040"));
}

fn mouse(parts: &mut Vec<Part>) {
    let origin = v(1.2, -1.44, 0.3);
    parts.push(Part::cylinder(0.25, 0.25, 0.01, origin + v(0.0, -0.005, 0.0), "#1a1a1a"));
    parts.push(Part::cuboid(v(0.12, 0.04, 0.18), origin, "#2a2a2a"));
    parts.push(Part::cuboid(v(0.04, 0.015, 0.06), origin + v(-0.03, 0.025, 0.04), "#404040"));
    parts.push(Part::cuboid(v(0.04, 0.015, 0.06), origin + v(0.03, 0.025, 0.04), "#404040"));
    parts.push(Part::cylinder(0.01, 0.01, 0.02, origin + v(0.0, 0.03, 0.02), "#606060"));
}

fn coffee_mug(parts: &mut Vec<Part>, powered: bool, elapsed: f32) {
    let origin = v(-1.8, -1.3 + mug_float(elapsed), -0.8);
    let mut mug = vec![
        Part::cylinder(0.12, 0.1, 0.2, Vector3::zeros(), "#8B4513"),
        Part::cuboid(v(0.04, 0.14, 0.04), v(0.15, 0.0, 0.0), "#8B4513"),
        Part::cylinder(0.11, 0.11, 0.02, v(0.0, 0.08, 0.0), "#3C1810"),
    ];
    if powered {
        for i in 0..5 {
            let step = i as f32;
            mug.push(
                Part::new(Geometry::Dot { radius: 0.005 }, v(0.0, 0.15 + step * 0.05, 0.0), "#ffffff")
                    .opacity(0.3 - step * 0.05),
            );
        }
    }
    parts.extend(mug.into_iter().map(|p| p.offset(origin)));
}

/// Builds the whole computer group in model space.
pub fn build_computer(powered: bool, elapsed: f32) -> Vec<Part> {
    let mut parts = Vec::with_capacity(128);
    desk(&mut parts);
    pc_tower(&mut parts, powered);
    monitor(&mut parts, powered, elapsed);
    keyboard(&mut parts);
    mouse(&mut parts);
    coffee_mug(&mut parts, powered, elapsed);
    parts
}

// --- Camera ---

/// Orbit camera around `target`. Angles in radians; `polar` is measured
/// from the +y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vector3<f32>,
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
}

impl OrbitCamera {
    pub const MIN_DISTANCE: f32 = 5.0;
    pub const MAX_DISTANCE: f32 = 15.0;
    pub const MIN_POLAR: f32 = PI / 6.0;
    pub const MAX_POLAR: f32 = PI / 2.2;

    /// Camera looking at `target` from `eye`, clamped to the allowed range.
    pub fn looking_from(eye: Vector3<f32>, target: Vector3<f32>) -> Self {
        let offset = eye - target;
        let distance = offset.norm();
        let polar = if distance > 0.0 { (offset.y / distance).acos() } else { PI / 2.0 };
        let mut camera = Self {
            target,
            azimuth: offset.x.atan2(offset.z),
            polar,
            distance,
        };
        camera.clamp();
        camera
    }

    pub fn eye(&self) -> Vector3<f32> {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + v(self.distance * sp * sa, self.distance * cp, self.distance * sp * ca)
    }

    /// One full turn every 60 / `speed` seconds.
    pub fn auto_rotate(&mut self, dt: f32, speed: f32) {
        self.azimuth = (self.azimuth + TAU / 60.0 * speed * dt) % TAU;
    }

    pub fn drag(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth = (self.azimuth - d_azimuth) % TAU;
        self.polar -= d_polar;
        self.clamp();
    }

    /// `factor` > 1 moves away.
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance *= factor;
            self.clamp();
        }
    }

    fn clamp(&mut self) {
        self.polar = self.polar.clamp(Self::MIN_POLAR, Self::MAX_POLAR);
        self.distance = self.distance.clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(v(0.0, 2.0, 8.0), Vector3::zeros())
    }
}

// --- Projection ---

/// Perspective projection of world space onto a screen rectangle.
#[derive(Debug, Clone)]
pub struct Projector {
    eye: Vector3<f32>,
    forward: Vector3<f32>,
    right: Vector3<f32>,
    up: Vector3<f32>,
    focal: f32,
    center: Pos2,
}

impl Projector {
    pub fn new(camera: &OrbitCamera, rect: Rect) -> Self {
        let eye = camera.eye();
        let forward = Unit::new_normalize(camera.target - eye).into_inner();
        let right = Unit::new_normalize(forward.cross(&Vector3::y())).into_inner();
        let up = right.cross(&forward);
        let focal = rect.height() / 2.0 / (FIELD_OF_VIEW.to_radians() / 2.0).tan();
        Self { eye, forward, right, up, focal, center: rect.center() }
    }

    pub fn eye(&self) -> Vector3<f32> {
        self.eye
    }

    /// Screen position and view depth, or `None` behind the near plane.
    pub fn project(&self, p: Vector3<f32>) -> Option<(Pos2, f32)> {
        let rel = p - self.eye;
        let depth = rel.dot(&self.forward);
        if depth < NEAR_PLANE {
            return None;
        }
        let x = rel.dot(&self.right) / depth * self.focal;
        let y = rel.dot(&self.up) / depth * self.focal;
        Some((egui::pos2(self.center.x + x, self.center.y - y), depth))
    }
}

// --- Tessellation ---

struct Face {
    points: Vec<Vector3<f32>>,
    normal: Vector3<f32>,
    double_sided: bool,
}

fn transform(part: &Part, group: &Rotation3<f32>, local: Vector3<f32>) -> Vector3<f32> {
    group * (local + part.position)
}

fn quad(a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>, d: Vector3<f32>) -> Face {
    let normal = (b - a)
        .cross(&(d - a))
        .try_normalize(f32::EPSILON)
        .unwrap_or_else(Vector3::zeros);
    Face { points: vec![a, b, c, d], normal, double_sided: false }
}

fn faces(part: &Part, group: &Rotation3<f32>) -> Vec<Face> {
    let t = |p: Vector3<f32>| transform(part, group, p);
    match part.geometry {
        Geometry::Cuboid { size } => {
            let (hx, hy, hz) = (size.x / 2.0, size.y / 2.0, size.z / 2.0);
            let c = |sx: f32, sy: f32, sz: f32| t(v(sx * hx, sy * hy, sz * hz));
            vec![
                quad(c(-1., -1., 1.), c(1., -1., 1.), c(1., 1., 1.), c(-1., 1., 1.)),
                quad(c(1., -1., -1.), c(-1., -1., -1.), c(-1., 1., -1.), c(1., 1., -1.)),
                quad(c(1., -1., 1.), c(1., -1., -1.), c(1., 1., -1.), c(1., 1., 1.)),
                quad(c(-1., -1., -1.), c(-1., -1., 1.), c(-1., 1., 1.), c(-1., 1., -1.)),
                quad(c(-1., 1., 1.), c(1., 1., 1.), c(1., 1., -1.), c(-1., 1., -1.)),
                quad(c(-1., -1., -1.), c(1., -1., -1.), c(1., -1., 1.), c(-1., -1., 1.)),
            ]
        }
        Geometry::Cylinder { top, bottom, height } => {
            let h = height / 2.0;
            let ring = |radius: f32, y: f32| -> Vec<Vector3<f32>> {
                (0..CYLINDER_SEGMENTS)
                    .map(|i| {
                        let a = TAU * i as f32 / CYLINDER_SEGMENTS as f32;
                        t(v(radius * a.sin(), y, radius * a.cos()))
                    })
                    .collect()
            };
            let upper = ring(top, h);
            let lower = ring(bottom, -h);
            let mut out: Vec<Face> = (0..CYLINDER_SEGMENTS)
                .map(|i| {
                    let j = (i + 1) % CYLINDER_SEGMENTS;
                    quad(lower[i], lower[j], upper[j], upper[i])
                })
                .collect();
            let up = t(Vector3::y()) - t(Vector3::zeros());
            let up = Unit::new_normalize(up).into_inner();
            out.push(Face { points: upper, normal: up, double_sided: false });
            let mut base = lower;
            base.reverse();
            out.push(Face { points: base, normal: -up, double_sided: false });
            out
        }
        Geometry::Plane { width, height } => {
            let (hw, hh) = (width / 2.0, height / 2.0);
            let mut face = quad(
                t(v(-hw, -hh, 0.0)),
                t(v(hw, -hh, 0.0)),
                t(v(hw, hh, 0.0)),
                t(v(-hw, hh, 0.0)),
            );
            face.double_sided = true;
            vec![face]
        }
        Geometry::Dot { .. } => vec![],
    }
}

// --- Hit testing ---

/// Even-odd point-in-polygon test in screen space.
pub fn point_in_polygon(p: Pos2, polygon: &[Pos2]) -> bool {
    let mut inside = false;
    let n = polygon.len();
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + n - 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Screen-space outlines of the clickable parts from the last render.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Hotspot, Vec<Pos2>, f32)>, // (hotspot, polygon, depth)
}

impl HitMap {
    /// Nearest hotspot under `p`.
    pub fn hit(&self, p: Pos2) -> Option<Hotspot> {
        self.regions
            .iter()
            .filter(|(_, poly, _)| point_in_polygon(p, poly))
            .min_by(|a, b| a.2.total_cmp(&b.2))
            .map(|(h, _, _)| *h)
    }

    /// Screen rectangle covering `hotspot`.
    pub fn bounds(&self, hotspot: Hotspot) -> Option<Rect> {
        let mut points = self
            .regions
            .iter()
            .filter(|(h, _, _)| *h == hotspot)
            .flat_map(|(_, poly, _)| poly.iter().copied())
            .peekable();
        points.peek()?;
        Some(Rect::from_points(&points.collect::<Vec<_>>()))
    }
}

// --- Rendering ---

fn lit_color(part: &Part, normal: Vector3<f32>, light: Vector3<f32>) -> Color32 {
    let diffuse = normal.dot(&light).max(0.0);
    let lit = AMBIENT + (1.0 - AMBIENT) * diffuse;
    let brightness = lit + (1.0 - lit) * part.emissive.clamp(0.0, 1.0);
    with_opacity(shade(part.color, brightness), part.opacity)
}

/// Dots for the particle field at `elapsed` seconds.
pub fn particle_shapes(projector: &Projector, field: &ParticleField, elapsed: f32) -> Vec<Shape> {
    let color = with_opacity(hex_color("#4F46E5"), 0.6);
    field
        .positions_at(elapsed)
        .filter_map(|p| projector.project(p))
        .map(|(pos, depth)| {
            let radius = (0.02 * projector.focal / depth).clamp(0.5, 2.5);
            Shape::circle_filled(pos, radius, color)
        })
        .collect()
}

/// Dots for the star backdrop. Stars fade towards the far side of the shell.
pub fn star_shapes(projector: &Projector, field: &StarField, elapsed: f32) -> Vec<Shape> {
    let near = (STAR_RADIUS - projector.eye.norm()).max(NEAR_PLANE);
    let far = STAR_RADIUS + STAR_DEPTH + projector.eye.norm();
    field
        .stars()
        .iter()
        .filter_map(|star| {
            let (pos, depth) = projector.project(star.position)?;
            let fade = 1.0 - ((depth - near) / (far - near)).clamp(0.0, 1.0) * 0.7;
            let alpha = fade * StarField::twinkle(star, elapsed);
            let radius = (star.size * 0.25).max(0.5);
            Some(Shape::circle_filled(pos, radius, with_opacity(Color32::WHITE, alpha)))
        })
        .collect()
}

/// Tessellates `parts` rotated by `group_yaw` into depth-sorted shapes and
/// records the outlines of the hotspots.
pub fn render_parts(projector: &Projector, parts: &[Part], group_yaw: f32) -> (Vec<Shape>, HitMap) {
    let light = v(5.0, 5.0, 5.0).normalize();
    let group = group_rotation(group_yaw);
    let eye = projector.eye();
    let mut polygons: Vec<(f32, Shape)> = Vec::new();
    let mut hits = HitMap::default();

    for part in parts {
        if let Geometry::Dot { radius } = part.geometry {
            let world = transform(part, &group, Vector3::zeros());
            if let Some((pos, depth)) = projector.project(world) {
                let r = (radius * projector.focal / depth).max(1.0);
                let color = with_opacity(part.color, part.opacity);
                polygons.push((depth, Shape::circle_filled(pos, r, color)));
            }
            continue;
        }

        for face in faces(part, &group) {
            let centroid = face.points.iter().fold(Vector3::zeros(), |acc, p| acc + p)
                / face.points.len() as f32;
            let facing = face.normal.dot(&(eye - centroid));
            if facing <= 0.0 && !face.double_sided {
                continue;
            }
            let projected: Option<Vec<(Pos2, f32)>> =
                face.points.iter().map(|p| projector.project(*p)).collect();
            let Some(projected) = projected else {
                continue;
            };
            let depth = projected.iter().map(|(_, d)| *d).sum::<f32>() / projected.len() as f32;
            let screen: Vec<Pos2> = projected.into_iter().map(|(p, _)| p).collect();
            let normal = if facing < 0.0 { -face.normal } else { face.normal };
            let fill = lit_color(part, normal, light);

            if let Some(hotspot) = part.hotspot {
                hits.regions.push((hotspot, screen.clone(), depth));
            }
            let outline = Stroke::new(0.5, shade(fill, 0.8));
            polygons.push((depth, Shape::convex_polygon(screen, fill, outline)));
        }
    }

    // Far to near
    polygons.sort_by(|a, b| b.0.total_cmp(&a.0));
    (polygons.into_iter().map(|(_, shape)| shape).collect(), hits)
}

/// Paints the stars, the particle field and the computer, returning the
/// hotspot outlines.
pub fn paint(
    painter: &Painter,
    projector: &Projector,
    stars: &StarField,
    field: &ParticleField,
    parts: &[Part],
    group_yaw: f32,
    elapsed: f32,
) -> HitMap {
    painter.extend(star_shapes(projector, stars, elapsed));
    painter.extend(particle_shapes(projector, field, elapsed));
    let (shapes, hits) = render_parts(projector, parts, group_yaw);
    painter.extend(shapes);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> Rect {
        Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn oscillators_stay_in_range() {
        for i in 0..1000 {
            let t = i as f32 * 0.37;
            assert!(sway_angle(t).abs() <= 0.05 + 1e-6);
            let s = screen_intensity(t);
            assert!((0.3 - 1e-6..=0.5 + 1e-6).contains(&s));
            assert!(mug_float(t).abs() <= 0.03 + 1e-6);
        }
        assert_eq!(sway_angle(0.0), 0.0);
        assert_eq!(screen_intensity(0.0), 0.4);
    }

    #[test]
    fn power_changes_only_cosmetic_parts() {
        let off = build_computer(false, 0.0);
        let on = build_computer(true, 0.0);
        // glow plane plus five steam dots
        assert_eq!(on.len(), off.len() + 6);
        // the power LED is the only part glowing at 0.5
        let led = |parts: &[Part]| parts.iter().find(|p| p.emissive == 0.5).map(|p| p.color);
        assert_eq!(led(&off), Some(hex_color("#ff0000")));
        assert_eq!(led(&on), Some(hex_color("#00ff00")));
    }

    #[test]
    fn scene_has_one_screen_and_one_keyboard_hotspot() {
        let parts = build_computer(true, 1.0);
        let count = |h| parts.iter().filter(|p| p.hotspot == Some(h)).count();
        assert_eq!(count(Hotspot::Screen), 1);
        assert_eq!(count(Hotspot::Keyboard), 1);
        // 60 keys plus the space bar
        let keys = parts
            .iter()
            .filter(|p| p.geometry == Geometry::Cuboid { size: v(0.08, 0.03, 0.08) })
            .count();
        assert_eq!(keys, 60);
    }

    #[test]
    fn default_camera_matches_initial_view() {
        let camera = OrbitCamera::default();
        let eye = camera.eye();
        assert!((eye.x - 0.0).abs() < 1e-4);
        assert!((eye.y - 2.0).abs() < 1e-4);
        assert!((eye.z - 8.0).abs() < 1e-4);
    }

    #[test]
    fn camera_limits_are_enforced() {
        let mut camera = OrbitCamera::default();
        camera.zoom(100.0);
        assert_eq!(camera.distance, OrbitCamera::MAX_DISTANCE);
        camera.zoom(0.001);
        assert_eq!(camera.distance, OrbitCamera::MIN_DISTANCE);
        camera.drag(0.0, 10.0);
        assert_eq!(camera.polar, OrbitCamera::MIN_POLAR);
        camera.drag(0.0, -10.0);
        assert_eq!(camera.polar, OrbitCamera::MAX_POLAR);
    }

    #[test]
    fn auto_rotate_turns_once_per_minute_at_unit_speed() {
        let mut camera = OrbitCamera::default();
        camera.auto_rotate(15.0, 1.0);
        assert!((camera.azimuth - PI / 2.0).abs() < 1e-4);
    }

    #[test]
    fn origin_projects_to_centre() {
        let projector = Projector::new(&OrbitCamera::default(), test_rect());
        let (pos, depth) = projector.project(Vector3::zeros()).unwrap();
        assert!((pos.x - 400.0).abs() < 1e-3);
        assert!((pos.y - 300.0).abs() < 1e-3);
        assert!(depth > 8.0);
        assert!(projector.project(v(0.0, 2.5, 10.0)).is_none());
    }

    #[test]
    fn particles_in_front_of_the_camera_are_drawn() {
        let projector = Projector::new(&OrbitCamera::default(), test_rect());
        let field = ParticleField::new(200, 4.0, Some(1));
        assert_eq!(particle_shapes(&projector, &field, 0.0).len(), 200);
    }

    #[test]
    fn stars_surround_the_scene() {
        let projector = Projector::new(&OrbitCamera::default(), test_rect());
        let stars = StarField::new(3000, Some(9));
        let shapes = star_shapes(&projector, &stars, 0.0);
        // Roughly the half of the sky in front of the camera
        assert!(!shapes.is_empty());
        assert!(shapes.len() < stars.len());
    }

    #[test]
    fn group_rotation_turns_about_y() {
        let turned = group_rotation(PI / 2.0) * v(1.0, 2.0, 0.0);
        assert!(turned.x.abs() < 1e-5);
        assert!((turned.y - 2.0).abs() < 1e-5);
        assert!((turned.z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn polygon_containment() {
        let square = [
            egui::pos2(0.0, 0.0),
            egui::pos2(10.0, 0.0),
            egui::pos2(10.0, 10.0),
            egui::pos2(0.0, 10.0),
        ];
        assert!(point_in_polygon(egui::pos2(5.0, 5.0), &square));
        assert!(!point_in_polygon(egui::pos2(15.0, 5.0), &square));
        assert!(!point_in_polygon(egui::pos2(5.0, -1.0), &square));
    }

    #[test]
    fn screen_hotspot_covers_the_view_centre() {
        let rect = test_rect();
        let projector = Projector::new(&OrbitCamera::default(), rect);
        let (shapes, hits) = render_parts(&projector, &build_computer(false, 0.0), 0.0);
        assert!(!shapes.is_empty());
        assert_eq!(hits.hit(rect.center()), Some(Hotspot::Screen));
        assert_eq!(hits.hit(egui::pos2(2.0, 2.0)), None);
        let bounds = hits.bounds(Hotspot::Screen).unwrap();
        assert!(bounds.contains(rect.center()));
    }
}
