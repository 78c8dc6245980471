//! The `Point` value type shared verbatim with the foreign caller.

/// A point in 2D space.
///
/// Layout is fixed: two IEEE-754 doubles, `x` at offset 0 and `y` at offset 8,
/// 16 bytes total, aligned like `double`, no padding. Matches
/// `typedef struct { double x; double y; } Point;` in C.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance, computed with `hypot` to avoid intermediate overflow.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn layout_matches_c() {
        assert_eq!(mem::size_of::<Point>(), 16);
        assert_eq!(mem::align_of::<Point>(), mem::align_of::<f64>());
        assert_eq!(mem::offset_of!(Point, x), 0);
        assert_eq!(mem::offset_of!(Point, y), 8);
    }

    #[test]
    fn distance_of_three_four_five() {
        let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12, "{d}");
    }

    #[test]
    fn midpoint_and_translate() {
        let mid = Point::new(0.0, 0.0).midpoint(Point::new(3.0, 4.0));
        assert_eq!(mid, Point::new(1.5, 2.0));

        let mut p = Point::new(10.0, 20.0);
        p.translate(5.0, -3.0);
        assert_eq!(p, Point::new(15.0, 17.0));
    }
}
