use glam::Vec2;

use crate::color::Color;

/// How the outline is painted. Waves are only ever filled solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Color),
}

impl Fill {
    pub fn color(&self) -> Color {
        match self {
            Fill::Solid(color) => *color,
        }
    }
}

/// Geometry of one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineShape {
    /// Closed polygon; the last vertex connects back to the first.
    Polygon(Vec<Vec2>),
    /// The whole surface, used when the wave is too small to draw.
    FullRect { width: f32, height: f32 },
}

/// A closed outline plus its fill instruction, produced once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveOutline {
    pub shape: OutlineShape,
    pub fill: Fill,
}

impl WaveOutline {
    pub fn polygon(vertices: Vec<Vec2>, color: Color) -> Self {
        Self {
            shape: OutlineShape::Polygon(vertices),
            fill: Fill::Solid(color),
        }
    }

    pub fn full_rect(width: f32, height: f32, color: Color) -> Self {
        Self {
            shape: OutlineShape::FullRect { width, height },
            fill: Fill::Solid(color),
        }
    }

    pub fn is_solid_rect(&self) -> bool {
        matches!(self.shape, OutlineShape::FullRect { .. })
    }

    /// Vertex list of the outline; a full rect expands to its four corners
    /// starting at the origin.
    pub fn vertices(&self) -> Vec<Vec2> {
        match &self.shape {
            OutlineShape::Polygon(points) => points.clone(),
            OutlineShape::FullRect { width, height } => vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(*width, 0.0),
                Vec2::new(*width, *height),
                Vec2::new(0.0, *height),
            ],
        }
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty polygon.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        match &self.shape {
            OutlineShape::FullRect { width, height } => {
                Some((Vec2::ZERO, Vec2::new(*width, *height)))
            }
            OutlineShape::Polygon(points) => {
                let first = *points.first()?;
                Some(points.iter().fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))))
            }
        }
    }
}
