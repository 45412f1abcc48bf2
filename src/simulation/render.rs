//! What a frame needs to know about each body, and the surface it is drawn on.

use crate::simulation::states::{BodyColor, BodyId, NVec2};

/// A filled circle anchored at its top-left corner, in window pixels
/// (origin at the top-left, y pointing down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderData {
    pub id: BodyId,
    pub position: NVec2,
    pub radius: f64,
    pub color: BodyColor,
}

impl RenderData {
    pub fn center(&self) -> NVec2 {
        self.position + NVec2::new(self.radius, self.radius)
    }
}

/// Anything a frame can be drawn on
pub trait RenderTarget {
    fn clear(&mut self);
    fn draw_circle(&mut self, circle: RenderData);
}

/// Collects the circles of one frame, in draw order
impl RenderTarget for Vec<RenderData> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn draw_circle(&mut self, circle: RenderData) {
        self.push(circle);
    }
}
