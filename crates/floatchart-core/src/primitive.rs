// File: crates/floatchart-core/src/primitive.rs
// Summary: Drawable primitive tree handed to the rendering collaborator.

/// Horizontal text anchoring, matching SVG `text-anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Filled rectangle in group-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPrim {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub class: String,
}

/// Text label in group-local coordinates. `dy_em` nudges the baseline in em
/// units to center labels vertically within their row.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPrim {
    pub x: f32,
    pub y: f32,
    pub dy_em: f32,
    pub anchor: TextAnchor,
    pub class: String,
    pub content: String,
}

/// Axis line or tick gridline segment.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePrim {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub class: String,
}

/// Tagged drawable. Pure value object; one generation per build, discarded
/// on the next.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect(RectPrim),
    Text(TextPrim),
    AxisLine(LinePrim),
}

/// Primitive container with a class tag and a translate offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub class: String,
    pub tx: f32,
    pub ty: f32,
    pub nodes: Vec<Primitive>,
}

impl Group {
    pub fn new(class: impl Into<String>, tx: f32, ty: f32) -> Self {
        Self { class: class.into(), tx, ty, nodes: Vec::new() }
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, class: &str) {
        self.nodes.push(Primitive::Rect(RectPrim {
            x,
            y,
            width,
            height,
            class: class.to_string(),
        }));
    }

    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        dy_em: f32,
        anchor: TextAnchor,
        class: &str,
        content: impl Into<String>,
    ) {
        self.nodes.push(Primitive::Text(TextPrim {
            x,
            y,
            dy_em,
            anchor,
            class: class.to_string(),
            content: content.into(),
        }));
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, class: &str) {
        self.nodes.push(Primitive::AxisLine(LinePrim {
            x1,
            y1,
            x2,
            y2,
            class: class.to_string(),
        }));
    }
}

/// Full chart output: outer surface size plus the ordered groups
/// (key block, two axis blocks, per-record bands, per-record notes).
#[derive(Clone, Debug, PartialEq)]
pub struct ChartTree {
    pub surface_width: f32,
    pub surface_height: f32,
    pub groups: Vec<Group>,
}
