use glam::Vec2;

/// Custom cursor follower: last pointer position and whether the pointer is
/// over something clickable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub position: Vec2,
    pub hovered: bool,
}

impl CursorState {
    /// Returns `true` if the stored position changed.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let next = Vec2::new(x, y);
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    /// Returns `true` if the hover flag changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }
}
