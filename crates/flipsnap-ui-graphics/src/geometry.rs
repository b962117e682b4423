//! Geometric primitives: Point, EdgeInsets, TriangleSide

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// Margin or padding values for each edge of a box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub fn horizontal(horizontal: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            ..Self::default()
        }
    }

    pub fn from_components(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }
}

/// Right triangle spanned by two points: the absolute horizontal leg `x`,
/// the absolute vertical leg `y` and the hypotenuse `z`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TriangleSide {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl TriangleSide {
    pub fn between(from: Point, to: Point) -> Self {
        let x = (from.x - to.x).abs();
        let y = (from.y - to.y).abs();
        Self {
            x,
            y,
            z: x.hypot(y),
        }
    }

    /// Straight-line distance between the two points.
    pub fn distance(&self) -> f32 {
        self.z
    }

    /// Angle in degrees between the vertical axis and the hypotenuse.
    ///
    /// 0° is a purely vertical vector, 90° a purely horizontal one. A
    /// degenerate triangle (both points equal) reports 0°.
    pub fn angle_from_vertical(&self) -> f32 {
        if self.z <= 0.0 {
            return 0.0;
        }
        let cos = (self.y / self.z).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_legs_are_absolute() {
        let triangle = TriangleSide::between(Point::new(10.0, 10.0), Point::new(7.0, 14.0));
        assert_eq!(triangle.x, 3.0);
        assert_eq!(triangle.y, 4.0);
        assert_eq!(triangle.z, 5.0);
    }

    #[test]
    fn horizontal_vector_is_ninety_degrees() {
        let triangle = TriangleSide::between(Point::ZERO, Point::new(-20.0, 0.0));
        assert!((triangle.angle_from_vertical() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn vertical_vector_is_zero_degrees() {
        let triangle = TriangleSide::between(Point::ZERO, Point::new(0.0, 30.0));
        assert!(triangle.angle_from_vertical().abs() < 1e-4);
    }

    #[test]
    fn diagonal_is_forty_five_degrees() {
        let triangle = TriangleSide::between(Point::ZERO, Point::new(8.0, 8.0));
        assert!((triangle.angle_from_vertical() - 45.0).abs() < 1e-3);
    }

    #[test]
    fn degenerate_triangle_has_zero_angle() {
        let triangle = TriangleSide::between(Point::new(3.0, 3.0), Point::new(3.0, 3.0));
        assert_eq!(triangle.distance(), 0.0);
        assert_eq!(triangle.angle_from_vertical(), 0.0);
    }

    #[test]
    fn edge_insets_horizontal_sum() {
        let insets = EdgeInsets::from_components(4.0, 1.0, 6.0, 2.0);
        assert_eq!(insets.horizontal_sum(), 10.0);
    }
}
