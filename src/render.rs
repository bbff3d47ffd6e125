//! Drawing port
//!
//! The simulation emits a handful of 2D primitives per frame. A host turns them
//! into real drawing calls; [`DrawList`] records them instead.

use glam::Vec2;

/// Outbound drawing calls, in field coordinates (origin top-left, y down)
pub trait Canvas {
    /// Axis-aligned rectangle from its top-left corner
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Circle from its centre and diameter
    fn circle(&mut self, x: f32, y: f32, diameter: f32);
    /// Text anchored at its centre
    fn text(&mut self, text: &str, x: f32, y: f32);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { pos: Vec2, size: Vec2 },
    Circle { center: Vec2, diameter: f32 },
    Text { text: String, pos: Vec2 },
}

/// Canvas that records every call of a frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn rects(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { pos, size } => Some((*pos, *size)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }
}

impl Canvas for DrawList {
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Rect {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        });
    }

    fn circle(&mut self, x: f32, y: f32, diameter: f32) {
        self.commands.push(DrawCommand::Circle {
            center: Vec2::new(x, y),
            diameter,
        });
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos: Vec2::new(x, y),
        });
    }
}

/// Canvas that drops everything (headless runs)
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn circle(&mut self, _x: f32, _y: f32, _diameter: f32) {}
    fn text(&mut self, _text: &str, _x: f32, _y: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.rect(1.0, 2.0, 3.0, 4.0);
        list.circle(5.0, 6.0, 12.0);
        list.text("7", 8.0, 9.0);

        assert_eq!(list.commands.len(), 3);
        assert_eq!(
            list.commands[0],
            DrawCommand::Rect {
                pos: Vec2::new(1.0, 2.0),
                size: Vec2::new(3.0, 4.0)
            }
        );
        assert_eq!(
            list.commands[1],
            DrawCommand::Circle {
                center: Vec2::new(5.0, 6.0),
                diameter: 12.0
            }
        );
        assert!(list.has_text("7"));
        assert_eq!(list.rects().count(), 1);

        list.clear();
        assert!(list.commands.is_empty());
    }
}
