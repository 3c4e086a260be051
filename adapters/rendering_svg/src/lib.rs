#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! SVG adapter that serialises composed route scenes into standalone
//! documents.
//!
//! The renderer consumes the declarative [`RouteScene`] contract and emits
//! plain markup, so it doubles as the headless presentation backend for
//! tests and batch runs.

use std::{fmt::Write as _, fs, path::PathBuf};

use anyhow::{Context, Result as AnyResult};
use glam::Vec2;
use planar_route_core::Bounds;
use planar_route_rendering::{Color, NodeRole, RoutePresenter, RouteScene, ROUTE_STROKE_WIDTH};

/// Radius of a rendered node expressed in world units.
pub const NODE_RADIUS: f32 = 0.15;

const SEGMENT_COLOR: Color = Color::from_rgb_u8(40, 40, 40);
const UNVISITED_COLOR: Color = Color::from_rgb_u8(128, 128, 128);

/// Converts route scenes into standalone SVG documents.
#[derive(Clone, Copy, Debug)]
pub struct SvgRenderer {
    scale: f32,
    margin: f32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            scale: 64.0,
            margin: 16.0,
        }
    }
}

impl SvgRenderer {
    /// Creates a renderer with the default pixel scale and margin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with an explicit pixels-per-unit scale and pixel
    /// margin.
    #[must_use]
    pub fn with_layout(scale: f32, margin: f32) -> Self {
        Self { scale, margin }
    }

    /// Serialises the scene into an SVG document.
    ///
    /// The vertical axis is flipped so the scene origin sits at the bottom
    /// left, matching the world coordinate system the scenes are composed
    /// in.
    #[must_use]
    pub fn render(&self, scene: &RouteScene) -> String {
        let bounds = scene.bounds();
        let width = bounds.width() as f32 * self.scale + self.margin * 2.0;
        let height = bounds.height() as f32 * self.scale + self.margin * 2.0;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.1}" height="{height:.1}" viewBox="0 0 {width:.1} {height:.1}">"#
        );

        for segment in scene.segments() {
            let from = self.project(bounds, segment.from);
            let to = self.project(bounds, segment.to);
            let _ = writeln!(
                svg,
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}" />"#,
                from.x,
                from.y,
                to.x,
                to.y,
                hex(SEGMENT_COLOR),
                ROUTE_STROKE_WIDTH * self.scale,
            );
        }

        for node in scene.nodes() {
            let center = self.project(bounds, node.position);
            let fill = node.role.map_or(UNVISITED_COLOR, NodeRole::color);
            let _ = writeln!(
                svg,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" />"#,
                center.x,
                center.y,
                NODE_RADIUS * self.scale,
                hex(fill),
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn project(&self, bounds: Bounds, position: Vec2) -> Vec2 {
        let x = (position.x - bounds.min().x() as f32) * self.scale + self.margin;
        let y = (bounds.max().y() as f32 - position.y) * self.scale + self.margin;
        Vec2::new(x, y)
    }
}

fn hex(color: Color) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_byte(color.red),
        channel_byte(color.green),
        channel_byte(color.blue),
    )
}

fn channel_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Presenter that writes rendered documents to a file path.
#[derive(Clone, Debug)]
pub struct SvgFilePresenter {
    renderer: SvgRenderer,
    path: PathBuf,
}

impl SvgFilePresenter {
    /// Creates a presenter that renders scenes into the provided path.
    #[must_use]
    pub fn new(renderer: SvgRenderer, path: PathBuf) -> Self {
        Self { renderer, path }
    }
}

impl RoutePresenter for SvgFilePresenter {
    fn present(&mut self, scene: &RouteScene) -> AnyResult<()> {
        let document = self.renderer.render(scene);
        fs::write(&self.path, document)
            .with_context(|| format!("failed to write SVG to {}", self.path.display()))?;
        Ok(())
    }
}
