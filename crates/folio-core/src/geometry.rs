use glam::Vec2;

/// Client-space bounding box, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// A zero-area box belongs to an element that is not laid out yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }

    /// Pointer position as a fraction of the box, centered at zero (-0.5..0.5).
    #[inline]
    pub fn centered_fraction(&self, p: Vec2) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }
        let fx = ((p.x - self.left) / self.width - 0.5).clamp(-0.5, 0.5);
        let fy = ((p.y - self.top) / self.height - 0.5).clamp(-0.5, 0.5);
        Some(Vec2::new(fx, fy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fraction_spans_half_range() {
        let r = Rect::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(r.centered_fraction(r.center()), Some(Vec2::ZERO));
        assert_eq!(
            r.centered_fraction(Vec2::new(100.0, 50.0)),
            Some(Vec2::new(-0.5, -0.5))
        );
        assert_eq!(
            r.centered_fraction(Vec2::new(300.0, 150.0)),
            Some(Vec2::new(0.5, 0.5))
        );
    }

    #[test]
    fn empty_rect_has_no_fraction() {
        let r = Rect::new(10.0, 10.0, 0.0, 40.0);
        assert!(r.is_empty());
        assert_eq!(r.centered_fraction(Vec2::new(10.0, 10.0)), None);
    }
}
