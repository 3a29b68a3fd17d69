//! Decorative background: a slowly tumbling cloud of pyramids
//!
//! Purely cosmetic and independent of any app data. The scene lives in an
//! `Option` on the app; while it is `Some` the app subscribes to window
//! frames and calls `tick`, and dropping it ends both.
use cgmath::{perspective, Deg, Matrix4, Rad, Vector3, Vector4};
use iced::time::Instant;
use iced::widget::canvas::{self, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme};
use rand::Rng;

use crate::ui::style;
use crate::Message;

const SHAPE_COUNT: usize = 25;
/// Chance that a shape is drawn as a wireframe rather than solid
const WIREFRAME_RATIO: f64 = 0.4;
const CAMERA_DISTANCE: f32 = 5.0;
const FIELD_OF_VIEW: Deg<f32> = Deg(75.0);
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;
const FOG_DENSITY: f32 = 0.05;

// Per-frame increments, in radians
const GROUP_SPIN_X: f32 = 0.0008;
const GROUP_SPIN_Y: f32 = 0.0015;
const SHAPE_SPIN: f32 = 0.005;
const BOB_AMPLITUDE: f32 = 0.002;

/// Regular tetrahedron of radius 1
const VERTICES: [[f32; 3]; 4] = [
    [0.577_350_3, 0.577_350_3, 0.577_350_3],
    [-0.577_350_3, -0.577_350_3, 0.577_350_3],
    [-0.577_350_3, 0.577_350_3, -0.577_350_3],
    [0.577_350_3, -0.577_350_3, -0.577_350_3],
];
const FACES: [[usize; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
const EDGES: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeStyle {
    /// Amber outline
    Wireframe,
    /// Translucent sand faces
    Solid,
}

#[derive(Debug, Clone)]
struct Shape {
    position: Vector3<f32>,
    rotation_x: f32,
    rotation_y: f32,
    scale: f32,
    style: ShapeStyle,
}

/// A shape after projection to screen space
#[derive(Debug, Clone)]
pub struct ProjectedShape {
    pub style: ShapeStyle,
    /// Screen position of each vertex
    pub points: [Point; 4],
    /// Distance from the camera, used for fog and draw order
    pub depth: f32,
}

/// The animated scene
#[derive(Debug, Clone)]
pub struct Scene {
    shapes: Vec<Shape>,
    group_rotation_x: f32,
    group_rotation_y: f32,
    started: Option<Instant>,
}

impl Scene {
    /// Scatter the shapes at random
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let shapes = (0..SHAPE_COUNT)
            .map(|_| Shape {
                position: Vector3::new(
                    (rng.gen::<f32>() - 0.5) * 16.0,
                    (rng.gen::<f32>() - 0.5) * 16.0,
                    (rng.gen::<f32>() - 0.5) * 12.0,
                ),
                rotation_x: rng.gen::<f32>() * std::f32::consts::PI,
                rotation_y: rng.gen::<f32>() * std::f32::consts::PI,
                scale: rng.gen::<f32>() * 0.6 + 0.2,
                style: if rng.gen_bool(WIREFRAME_RATIO) {
                    ShapeStyle::Wireframe
                } else {
                    ShapeStyle::Solid
                },
            })
            .collect();

        Self {
            shapes,
            group_rotation_x: 0.0,
            group_rotation_y: 0.0,
            started: None,
        }
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Advance the animation by one frame
    pub fn tick(&mut self, now: Instant) {
        let started = *self.started.get_or_insert(now);
        let seconds = now.duration_since(started).as_secs_f32();

        self.group_rotation_x += GROUP_SPIN_X;
        self.group_rotation_y += GROUP_SPIN_Y;

        for (i, shape) in self.shapes.iter_mut().enumerate() {
            shape.rotation_x += SHAPE_SPIN;
            shape.rotation_y += SHAPE_SPIN;
            shape.position.y += (seconds + i as f32).sin() * BOB_AMPLITUDE;
        }
    }

    /// Project every visible shape into a viewport of `size`, far to near
    pub fn project(&self, size: Size) -> Vec<ProjectedShape> {
        if size.width <= 0.0 || size.height <= 0.0 {
            return Vec::new();
        }

        let projection = perspective(FIELD_OF_VIEW, size.width / size.height, NEAR_PLANE, FAR_PLANE);
        let view = Matrix4::from_translation(Vector3::new(0.0, 0.0, -CAMERA_DISTANCE));
        let group = Matrix4::from_angle_x(Rad(self.group_rotation_x))
            * Matrix4::from_angle_y(Rad(self.group_rotation_y));

        let mut projected: Vec<ProjectedShape> = self
            .shapes
            .iter()
            .filter_map(|shape| {
                let model_view = view * group * shape.model_matrix();
                let center = model_view * Vector4::new(0.0, 0.0, 0.0, 1.0);
                let mvp = projection * model_view;

                let mut points = [Point::ORIGIN; 4];
                for (point, vertex) in points.iter_mut().zip(VERTICES.iter()) {
                    let clip = mvp * Vector4::new(vertex[0], vertex[1], vertex[2], 1.0);
                    // Behind or too close to the camera
                    if clip.w <= NEAR_PLANE {
                        return None;
                    }
                    *point = Point::new(
                        (clip.x / clip.w + 1.0) * 0.5 * size.width,
                        (1.0 - clip.y / clip.w) * 0.5 * size.height,
                    );
                }

                Some(ProjectedShape {
                    style: shape.style,
                    points,
                    depth: -center.z,
                })
            })
            .collect();

        projected.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        projected
    }
}

impl Shape {
    fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_x(Rad(self.rotation_x))
            * Matrix4::from_angle_y(Rad(self.rotation_y))
            * Matrix4::from_scale(self.scale)
    }
}

/// Exponential-squared fog: 0 at the camera, towards 1 far away
fn fog_factor(depth: f32) -> f32 {
    let d = FOG_DENSITY * depth.max(0.0);
    (1.0 - (-d * d).exp()).clamp(0.0, 1.0)
}

/// Blend `color` into the fog colour, keeping its alpha
fn fogged(color: Color, depth: f32) -> Color {
    let f = fog_factor(depth);
    let fog = style::FOG;
    Color {
        r: color.r + (fog.r - color.r) * f,
        g: color.g + (fog.g - color.g) * f,
        b: color.b + (fog.b - color.b) * f,
        a: color.a,
    }
}

impl canvas::Program<Message> for Scene {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), style::SAND);

        for shape in self.project(bounds.size()) {
            match shape.style {
                ShapeStyle::Wireframe => {
                    let outline = Path::new(|builder| {
                        for [a, b] in EDGES {
                            builder.move_to(shape.points[a]);
                            builder.line_to(shape.points[b]);
                        }
                    });
                    frame.stroke(
                        &outline,
                        Stroke::default()
                            .with_color(fogged(style::WIREFRAME, shape.depth))
                            .with_width(1.0),
                    );
                }
                ShapeStyle::Solid => {
                    let color = fogged(style::SOLID, shape.depth);
                    for [a, b, c] in FACES {
                        let face = Path::new(|builder| {
                            builder.move_to(shape.points[a]);
                            builder.line_to(shape.points[b]);
                            builder.line_to(shape.points[c]);
                            builder.close();
                        });
                        frame.fill(&face, color);
                    }
                }
            }
        }

        vec![frame.into_geometry()]
    }
}
