// SPDX-License-Identifier: MPL-2.0
//! Decorative "neural network" animation drawn on a Canvas.
//!
//! Nodes drift across a fixed logical field and bounce at its edges. Pairs of
//! nodes closer than the connection distance are joined by a line whose
//! opacity fades with distance.

use crate::app::config::{
    FIELD_HEIGHT, FIELD_WIDTH, MAX_CONNECTION_OPACITY, MAX_NODE_RADIUS, MIN_NODE_RADIUS,
    NODE_SPEED,
};
use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

/// A single node of the field, in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

/// Animation state owned by the application and advanced on every tick.
pub struct NeuralNetwork {
    nodes: Vec<Node>,
    connection_distance: f32,
    cache: Cache,
}

impl NeuralNetwork {
    /// Builds `node_count` nodes using `sample`, which must yield values in `[0, 1)`.
    pub fn new(node_count: usize, connection_distance: f32, mut sample: impl FnMut() -> f32) -> Self {
        let nodes = (0..node_count)
            .map(|_| Node {
                x: sample() * FIELD_WIDTH,
                y: sample() * FIELD_HEIGHT,
                vx: (sample() - 0.5) * NODE_SPEED,
                vy: (sample() - 0.5) * NODE_SPEED,
                radius: sample() * (MAX_NODE_RADIUS - MIN_NODE_RADIUS) + MIN_NODE_RADIUS,
            })
            .collect();

        Self {
            nodes,
            connection_distance,
            cache: Cache::default(),
        }
    }

    /// Random layout seeded from the operating system.
    pub fn random(node_count: usize, connection_distance: f32) -> Self {
        Self::new(node_count, connection_distance, random_unit)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Moves every node one step, reversing velocity at the field edges.
    pub fn advance(&mut self) {
        for node in &mut self.nodes {
            node.x += node.vx;
            node.y += node.vy;

            if node.x <= 0.0 || node.x >= FIELD_WIDTH {
                node.vx = -node.vx;
            }
            if node.y <= 0.0 || node.y >= FIELD_HEIGHT {
                node.vy = -node.vy;
            }

            node.x = node.x.clamp(0.0, FIELD_WIDTH);
            node.y = node.y.clamp(0.0, FIELD_HEIGHT);
        }
        self.cache.clear();
    }

    /// Pairs `(i, j, opacity)` of nodes closer than the connection distance.
    pub fn connections(&self) -> Vec<(usize, usize, f32)> {
        let mut connections = Vec::new();
        for (i, a) in self.nodes.iter().enumerate() {
            for (j, b) in self.nodes.iter().enumerate().skip(i + 1) {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < self.connection_distance {
                    let opacity = (1.0 - distance / self.connection_distance) * MAX_CONNECTION_OPACITY;
                    connections.push((i, j, opacity));
                }
            }
        }
        connections
    }

    /// Canvas element filling the given height.
    pub fn view<'a, Message: 'a>(&'a self, height: f32) -> Element<'a, Message> {
        Canvas::new(NetworkCanvas { network: self })
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into()
    }
}

impl std::fmt::Debug for NeuralNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeuralNetwork")
            .field("nodes", &self.nodes.len())
            .field("connection_distance", &self.connection_distance)
            .finish_non_exhaustive()
    }
}

/// Uniform value in `[0, 1)` from the OS random source.
///
/// Falls back to the middle of the range when the source is unavailable.
fn random_unit() -> f32 {
    let mut bytes = [0u8; 4];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => {
            // 24 bits keep the result strictly below 1.0 in f32.
            (u32::from_le_bytes(bytes) >> 8) as f32 / (1u32 << 24) as f32
        }
        Err(err) => {
            log::warn!("Random source unavailable: {}", err);
            0.5
        }
    }
}

struct NetworkCanvas<'a> {
    network: &'a NeuralNetwork,
}

impl<Message> canvas::Program<Message> for NetworkCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let network = self.network;
        let geometry = network
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let scale_x = frame.width() / FIELD_WIDTH;
                let scale_y = frame.height() / FIELD_HEIGHT;
                let scale_r = scale_x.min(scale_y);
                let project = |node: &Node| Point::new(node.x * scale_x, node.y * scale_y);

                for (i, j, opacity) in network.connections() {
                    let line = Path::line(project(&network.nodes[i]), project(&network.nodes[j]));
                    frame.stroke(
                        &line,
                        Stroke::default().with_width(1.0).with_color(Color {
                            a: opacity,
                            ..palette::CYAN_400
                        }),
                    );
                }

                for node in &network.nodes {
                    let circle = Path::circle(project(node), node.radius * scale_r);
                    frame.fill(
                        &circle,
                        Color {
                            a: 0.8,
                            ..palette::BLUE_400
                        },
                    );
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn constant(value: f32) -> impl FnMut() -> f32 {
        move || value
    }

    #[test]
    fn nodes_start_inside_the_field() {
        let network = NeuralNetwork::random(12, 150.0);
        assert_eq!(network.nodes().len(), 12);
        for node in network.nodes() {
            assert!((0.0..=FIELD_WIDTH).contains(&node.x));
            assert!((0.0..=FIELD_HEIGHT).contains(&node.y));
            assert!(node.vx.abs() <= NODE_SPEED / 2.0);
            assert!(node.radius >= MIN_NODE_RADIUS && node.radius <= MAX_NODE_RADIUS);
        }
    }

    #[test]
    fn constant_sampler_places_nodes_at_center() {
        let network = NeuralNetwork::new(3, 150.0, constant(0.5));
        let node = network.nodes()[0];
        assert_relative_eq!(node.x, FIELD_WIDTH / 2.0);
        assert_relative_eq!(node.y, FIELD_HEIGHT / 2.0);
        assert_relative_eq!(node.vx, 0.0);
        assert_relative_eq!(node.radius, (MIN_NODE_RADIUS + MAX_NODE_RADIUS) / 2.0);
    }

    #[test]
    fn node_bounces_at_right_edge() {
        let mut network = NeuralNetwork::new(1, 150.0, constant(0.0));
        network.nodes[0] = Node {
            x: FIELD_WIDTH - 0.1,
            y: 10.0,
            vx: 0.15,
            vy: 0.0,
            radius: 5.0,
        };
        network.advance();
        let node = network.nodes()[0];
        assert_relative_eq!(node.x, FIELD_WIDTH);
        assert_relative_eq!(node.vx, -0.15);

        network.advance();
        assert!(network.nodes()[0].x < FIELD_WIDTH);
    }

    #[test]
    fn nodes_stay_in_field_over_many_ticks() {
        let mut network = NeuralNetwork::random(12, 150.0);
        for _ in 0..10_000 {
            network.advance();
        }
        for node in network.nodes() {
            assert!((0.0..=FIELD_WIDTH).contains(&node.x));
            assert!((0.0..=FIELD_HEIGHT).contains(&node.y));
        }
    }

    #[test]
    fn connection_opacity_fades_with_distance() {
        let mut network = NeuralNetwork::new(3, 150.0, constant(0.0));
        network.nodes[0].x = 0.0;
        network.nodes[1].x = 75.0;
        network.nodes[2].x = 300.0;
        for node in &mut network.nodes {
            node.y = 0.0;
        }

        let connections = network.connections();
        assert_eq!(connections.len(), 1);
        let (i, j, opacity) = connections[0];
        assert_eq!((i, j), (0, 1));
        assert_relative_eq!(opacity, 0.5 * MAX_CONNECTION_OPACITY);
    }

    #[test]
    fn view_builds_canvas() {
        let network = NeuralNetwork::new(4, 150.0, constant(0.25));
        let _element: Element<'_, ()> = network.view(200.0);
    }
}
