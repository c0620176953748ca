//! Drawing surface abstraction
//!
//! Everything above the simulation draws through [`Canvas`]. A window
//! backend implements it over its own primitives; [`DrawList`] records the
//! calls instead, which is what the headless driver and the tests use.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear blend toward `other` (t = 0 keeps self, t = 1 gives other)
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// How a closed shape is painted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    Solid,
    /// Outline only, with the given stroke width
    Outline(f32),
}

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
}

/// A 2D drawing surface in screen coordinates (y grows downward)
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color, fill: Fill);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    /// Axis-aligned rectangle with its top-left corner at `pos`
    fn rect(&mut self, pos: Vec2, size: Vec2, color: Color, fill: Fill);
    fn text(&mut self, text: &str, pos: Vec2, anchor: Anchor, size: f32, color: Color);
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        fill: Fill,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
        fill: Fill,
    },
    Text {
        text: String,
        pos: Vec2,
        anchor: Anchor,
        size: f32,
        color: Color,
    },
}

/// Canvas that records every call in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether any text command contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        // Anything drawn before a clear would be invisible anyway
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { color });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color, fill: Fill) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            fill,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn rect(&mut self, pos: Vec2, size: Vec2, color: Color, fill: Fill) {
        self.commands.push(DrawCommand::Rect {
            pos,
            size,
            color,
            fill,
        });
    }

    fn text(&mut self, text: &str, pos: Vec2, anchor: Anchor, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            pos,
            anchor,
            size,
            color,
        });
    }
}
