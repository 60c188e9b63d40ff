//! Screen coordinates and the interpolation helpers behind line drawing.

/// Position on the display, in pixels.
///
/// Coordinates are signed so callers can address positions partially or
/// fully off screen; the buffer clips such writes instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: i32,
    /// Vertical offset from the top edge.
    pub y: i32,
}

impl Point {
    /// Top-left corner of the display.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Creates a point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Chebyshev distance between two points.
///
/// This is the number of interpolation steps a line needs so that no two
/// consecutive samples are more than one pixel apart on either axis.
#[inline]
pub(crate) fn step_count(start: Point, end: Point) -> u32 {
    let dx = (end.x - start.x).unsigned_abs();
    let dy = (end.y - start.y).unsigned_abs();
    dx.max(dy)
}

/// Linear interpolation between two points at parameter `t` in `[0, 1]`.
#[inline]
pub(crate) fn lerp(start: Point, end: Point, t: f64) -> (f64, f64) {
    let x = start.x as f64 + (end.x - start.x) as f64 * t;
    let y = start.y as f64 + (end.y - start.y) as f64 * t;
    (x, y)
}

/// Rounds an interpolated position back onto the pixel grid.
#[inline]
pub(crate) fn round_position((x, y): (f64, f64)) -> Point {
    Point::new(x.round() as i32, y.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_count_is_chebyshev() {
        assert_eq!(step_count(Point::new(0, 0), Point::new(0, 5)), 5);
        assert_eq!(step_count(Point::new(0, 0), Point::new(3, 5)), 5);
        assert_eq!(step_count(Point::new(5, 0), Point::new(0, 0)), 5);
        assert_eq!(step_count(Point::new(2, 2), Point::new(2, 2)), 0);
        assert_eq!(step_count(Point::new(-3, 0), Point::new(3, -1)), 6);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Point::new(1, 2);
        let b = Point::new(7, -4);
        assert_eq!(lerp(a, b, 0.0), (1.0, 2.0));
        assert_eq!(lerp(a, b, 1.0), (7.0, -4.0));
        assert_eq!(lerp(a, b, 0.5), (4.0, -1.0));
    }

    #[test]
    fn test_round_position() {
        assert_eq!(round_position((1.4, 2.6)), Point::new(1, 3));
        assert_eq!(round_position((-1.4, -2.6)), Point::new(-1, -3));
    }
}
