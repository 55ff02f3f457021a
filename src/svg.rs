//! Vector drawing primitives and their SVG serialization.
//!
//! Rendering a chart produces a [`Document`]: a tree of rectangles, lines,
//! text nodes, groups, and gradient definitions. The tree is plain data, so
//! callers can inspect or rewrite it before serializing with
//! [`Document::to_svg_string`].

use crate::style::Rgba;

/// How a shape is filled.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    None,
    Color(Rgba),
    /// Reference to a paint resource registered in the defs, by id.
    Url(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: Option<f64>,
    pub ry: Option<f64>,
    pub fill: Fill,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Rgba,
    pub stroke_width: f64,
    pub stroke_dasharray: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub fill: Rgba,
    pub font_size: f64,
    pub anchor: TextAnchor,
    /// Rotation in degrees about the text origin.
    pub rotation: f64,
}

/// One color stop of a linear gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    /// Position along the gradient vector, 0..=1.
    pub offset: f64,
    pub color: Rgba,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientUnits {
    /// Coordinates relative to the bounding box of the filled shape (0..1).
    ObjectBoundingBox,
    /// Absolute document coordinates.
    UserSpaceOnUse,
}

/// A reusable linear-gradient paint resource, referenced by `Fill::Url(id)`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub units: GradientUnits,
    pub stops: Vec<Stop>,
}

/// One node of the primitive tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Rect(Rect),
    Line(Line),
    Text(Text),
    Group(Vec<Node>),
    Defs(Vec<Node>),
    LinearGradient(LinearGradient),
}

/// A complete drawing surface: dimensions plus the ordered primitive tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(width: f64, height: f64) -> Self {
        Document {
            width,
            height,
            children: Vec::new(),
        }
    }

    /// Serialize the tree to a standalone SVG string.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = num(self.width),
            h = num(self.height),
        ));
        for child in &self.children {
            write_node(&mut out, child);
        }
        out.push_str("</svg>");
        out
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Rect(r) => {
            out.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                num(r.x),
                num(r.y),
                num(r.width),
                num(r.height)
            ));
            if let Some(rx) = r.rx {
                out.push_str(&format!(" rx=\"{}\"", num(rx)));
            }
            if let Some(ry) = r.ry {
                out.push_str(&format!(" ry=\"{}\"", num(ry)));
            }
            match &r.fill {
                Fill::None => out.push_str(" fill=\"none\""),
                Fill::Color(c) => out.push_str(&format!(" fill=\"{}\"", c.to_css())),
                Fill::Url(id) => out.push_str(&format!(" fill=\"url(#{id})\"")),
            }
            out.push_str("/>");
        }
        Node::Line(l) => {
            out.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
                num(l.x1),
                num(l.y1),
                num(l.x2),
                num(l.y2),
                l.stroke.to_css(),
                num(l.stroke_width)
            ));
            if let Some(dash) = &l.stroke_dasharray {
                out.push_str(&format!(" stroke-dasharray=\"{dash}\""));
            }
            out.push_str("/>");
        }
        Node::Text(t) => {
            out.push_str(&format!(
                "<text x=\"{x}\" y=\"{y}\" fill=\"{fill}\" font-size=\"{size}\" text-anchor=\"{anchor}\"",
                x = num(t.x),
                y = num(t.y),
                fill = t.fill.to_css(),
                size = num(t.font_size),
                anchor = t.anchor.as_str(),
            ));
            if t.rotation != 0.0 {
                out.push_str(&format!(
                    " transform=\"rotate({} {} {})\"",
                    num(t.rotation),
                    num(t.x),
                    num(t.y)
                ));
            }
            out.push('>');
            out.push_str(&escape_xml(&t.content));
            out.push_str("</text>");
        }
        Node::Group(children) => {
            out.push_str("<g>");
            for child in children {
                write_node(out, child);
            }
            out.push_str("</g>");
        }
        Node::Defs(children) => {
            out.push_str("<defs>");
            for child in children {
                write_node(out, child);
            }
            out.push_str("</defs>");
        }
        Node::LinearGradient(g) => {
            out.push_str(&format!(
                "<linearGradient id=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                escape_xml(&g.id),
                num(g.x1),
                num(g.y1),
                num(g.x2),
                num(g.y2)
            ));
            if g.units == GradientUnits::UserSpaceOnUse {
                out.push_str(" gradientUnits=\"userSpaceOnUse\"");
            }
            out.push('>');
            for stop in &g.stops {
                out.push_str(&format!(
                    "<stop offset=\"{}\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                    num(stop.offset),
                    stop.color.to_hex(),
                    num(stop.opacity)
                ));
            }
            out.push_str("</linearGradient>");
        }
    }
}

/// Format a coordinate compactly: two decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
