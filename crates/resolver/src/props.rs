//! Presentation properties for a rendered icon.

use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

pub const DEFAULT_SIZE: u32 = 24;
pub const DEFAULT_FILL: &str = "none";
pub const DEFAULT_STROKE: &str = "currentColor";
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const VIEW_BOX: &str = "0 0 24 24";

/// How one icon instance is drawn.
///
/// Every field is optional; unset (or empty/non-positive) values fall back
/// to the defaults above. Deserializes from camelCase JSON, e.g.
/// `{"size": 32, "color": "red", "strokeWidth": 1.5}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Props {
    pub id: Option<String>,
    pub size: Option<u32>,
    pub color: Option<String>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f32>,
    /// Extra CSS classes, e.g. `text-blue-500`.
    pub class: String,
    /// Extra attributes appended to the `<svg>` element, in key order.
    pub attrs: BTreeMap<String, String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn size(&self) -> u32 {
        self.size.filter(|s| *s > 0).unwrap_or(DEFAULT_SIZE)
    }

    pub fn fill(&self) -> &str {
        non_empty(&self.fill).unwrap_or(DEFAULT_FILL)
    }

    /// Explicit stroke, else the color, else `currentColor`.
    pub fn stroke(&self) -> &str {
        non_empty(&self.stroke)
            .or_else(|| non_empty(&self.color))
            .unwrap_or(DEFAULT_STROKE)
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
            .filter(|w| *w > 0.0)
            .unwrap_or(DEFAULT_STROKE_WIDTH)
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Wraps `fragment` in a complete `<svg>` element carrying these properties.
    pub fn wrap(&self, fragment: &str) -> String {
        let size = self.size();
        let mut svg = format!(
            r#"<svg xmlns="{}" width="{}" height="{}" viewBox="{}" fill="{}" stroke="{}" stroke-width="{}" class="{}""#,
            SVG_NS,
            size,
            size,
            VIEW_BOX,
            escape(self.fill()),
            escape(self.stroke()),
            self.stroke_width(),
            escape(self.class()),
        );

        if let Some(id) = non_empty(&self.id) {
            let _ = write!(svg, r#" id="{}""#, escape(id));
        }
        for (key, value) in &self.attrs {
            if is_attribute_name(key) {
                let _ = write!(svg, r#" {}="{}""#, key, escape(value.as_str()));
            } else {
                log::warn!("Dropping invalid attribute name {:?}", key);
            }
        }

        svg.push('>');
        svg.push_str(fragment);
        svg.push_str("</svg>");
        svg
    }
}

fn is_attribute_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}
