//! Common types used throughout grid_localization

use nalgebra::Vector2;

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// 2D pose (position + orientation)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn from_point(point: Point2D, yaw: f64) -> Self {
        Self { x: point.x, y: point.y, yaw }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Unit vector along the pose heading
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.yaw.cos(), self.yaw.sin())
    }

    /// Normalize yaw to [-pi, pi]
    pub fn normalize_yaw(&mut self) {
        while self.yaw > std::f64::consts::PI {
            self.yaw -= 2.0 * std::f64::consts::PI;
        }
        while self.yaw < -std::f64::consts::PI {
            self.yaw += 2.0 * std::f64::consts::PI;
        }
    }
}

/// Axis-aligned world-space bounding region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point2D,
    pub max: Point2D,
}

impl BoundingBox {
    pub fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every given point
    pub fn from_points<'a, I: IntoIterator<Item = &'a Point2D>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }

    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// One-cell cardinal movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    PlusX,
    PlusY,
    MinusX,
    MinusY,
}

impl Heading {
    pub const ALL: [Heading; 4] = [
        Heading::PlusX,
        Heading::PlusY,
        Heading::MinusX,
        Heading::MinusY,
    ];

    /// Grid offset of a single step along this heading
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Heading::PlusX => (1, 0),
            Heading::PlusY => (0, 1),
            Heading::MinusX => (-1, 0),
            Heading::MinusY => (0, -1),
        }
    }

    /// Heading angle in radians
    pub fn yaw(&self) -> f64 {
        match self {
            Heading::PlusX => 0.0,
            Heading::PlusY => std::f64::consts::FRAC_PI_2,
            Heading::MinusX => std::f64::consts::PI,
            Heading::MinusY => -std::f64::consts::FRAC_PI_2,
        }
    }

    pub fn opposite(&self) -> Heading {
        match self {
            Heading::PlusX => Heading::MinusX,
            Heading::PlusY => Heading::MinusY,
            Heading::MinusX => Heading::PlusX,
            Heading::MinusY => Heading::PlusY,
        }
    }

    /// Heading of a single-step move between 4-neighbors, if any
    pub fn between(x1: i32, y1: i32, x2: i32, y2: i32) -> Option<Heading> {
        match (x2 - x1, y2 - y1) {
            (1, 0) => Some(Heading::PlusX),
            (0, 1) => Some(Heading::PlusY),
            (-1, 0) => Some(Heading::MinusX),
            (0, -1) => Some(Heading::MinusY),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2d_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_pose2d_direction() {
        let pose = Pose2D::new(1.0, 2.0, std::f64::consts::FRAC_PI_2);
        let d = pose.direction();
        assert!(d[0].abs() < 1e-10);
        assert!((d[1] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_bounding_box_contains() {
        let bounds = BoundingBox::new(Point2D::new(0.0, 0.0), Point2D::new(2.0, 3.0));
        assert!(bounds.contains(Point2D::new(1.0, 1.5)));
        assert!(bounds.contains(Point2D::new(0.0, 3.0)));
        assert!(!bounds.contains(Point2D::new(-0.1, 1.0)));
        assert!(!bounds.contains(Point2D::new(1.0, 3.1)));
    }

    #[test]
    fn test_bounding_box_from_points() {
        let points = vec![
            Point2D::new(1.0, 4.0),
            Point2D::new(-2.0, 0.5),
            Point2D::new(3.0, 2.0),
        ];
        let bounds = BoundingBox::from_points(&points).unwrap();
        assert_eq!(bounds.min, Point2D::new(-2.0, 0.5));
        assert_eq!(bounds.max, Point2D::new(3.0, 4.0));
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    #[test]
    fn test_heading_offset_round_trip() {
        for &heading in &Heading::ALL {
            let (dx, dy) = heading.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
            assert_eq!(Heading::between(0, 0, dx, dy), Some(heading));
            let (ox, oy) = heading.opposite().offset();
            assert_eq!((ox, oy), (-dx, -dy));
        }
    }

    #[test]
    fn test_heading_yaw_matches_offset() {
        for &heading in &Heading::ALL {
            let (dx, dy) = heading.offset();
            assert!((heading.yaw().cos() - dx as f64).abs() < 1e-10);
            assert!((heading.yaw().sin() - dy as f64).abs() < 1e-10);
        }
    }

    #[test]
    fn test_heading_between_rejects_non_neighbors() {
        assert_eq!(Heading::between(0, 0, 0, 0), None);
        assert_eq!(Heading::between(0, 0, 1, 1), None);
        assert_eq!(Heading::between(0, 0, 2, 0), None);
    }
}
