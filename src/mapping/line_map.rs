//! Line-segment obstacle map
//!
//! Represents the mapped environment as a set of wall segments plus the
//! bounding region they span. Walls block line of sight exactly; a positive
//! wall thickness additionally marks points near a wall as occupied.

use crate::common::{
    BoundingBox, LocalizationError, LocalizationResult, ObstacleMap, Point2D, Pose2D,
};

/// A single wall segment in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2D,
    pub end: Point2D,
}

impl LineSegment {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point2D::new(x1, y1),
            end: Point2D::new(x2, y2),
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Shortest distance from a point to this segment
    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        let ex = self.end.x - self.start.x;
        let ey = self.end.y - self.start.y;
        let len_sq = ex * ex + ey * ey;
        if len_sq == 0.0 {
            return self.start.distance(&point);
        }
        let t = ((point.x - self.start.x) * ex + (point.y - self.start.y) * ey) / len_sq;
        let t = t.clamp(0.0, 1.0);
        let closest = Point2D::new(self.start.x + t * ex, self.start.y + t * ey);
        closest.distance(&point)
    }

    /// Distance along a ray from `pose` to where it crosses this segment,
    /// `None` if the ray misses
    pub fn ray_intersection(&self, pose: &Pose2D) -> Option<f64> {
        let d = pose.direction();
        let ex = self.end.x - self.start.x;
        let ey = self.end.y - self.start.y;
        let denom = d[0] * ey - d[1] * ex;
        if denom.abs() < f64::EPSILON {
            // Parallel to the segment
            return None;
        }
        let ox = self.start.x - pose.x;
        let oy = self.start.y - pose.y;
        let t = (ox * ey - oy * ex) / denom;
        let s = (ox * d[1] - oy * d[0]) / denom;
        if t >= 0.0 && (0.0..=1.0).contains(&s) {
            Some(t)
        } else {
            None
        }
    }
}

/// Obstacle map built from wall segments
#[derive(Debug, Clone)]
pub struct LineMap {
    lines: Vec<LineSegment>,
    bounds: BoundingBox,
    wall_thickness: f64,
}

impl LineMap {
    /// Create a map whose bounding region spans the given walls.
    /// Walls are treated as infinitely thin line-of-sight barriers.
    pub fn new(lines: Vec<LineSegment>) -> LocalizationResult<Self> {
        Self::with_wall_thickness(lines, 0.0)
    }

    /// Create a map whose walls occupy a band of the given thickness;
    /// points within half the thickness of a wall are not free space.
    pub fn with_wall_thickness(
        lines: Vec<LineSegment>,
        wall_thickness: f64,
    ) -> LocalizationResult<Self> {
        if wall_thickness < 0.0 {
            return Err(LocalizationError::InvalidParameter(format!(
                "wall thickness must be non-negative, got {}",
                wall_thickness
            )));
        }
        let endpoints: Vec<Point2D> = lines
            .iter()
            .flat_map(|l| vec![l.start, l.end])
            .collect();
        let bounds = BoundingBox::from_points(&endpoints).ok_or_else(|| {
            LocalizationError::InvalidParameter("line map needs at least one wall".to_string())
        })?;
        Ok(Self {
            lines,
            bounds,
            wall_thickness,
        })
    }

    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }
}

impl ObstacleMap for LineMap {
    fn is_free(&self, point: Point2D) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }
        self.lines
            .iter()
            .all(|line| line.distance_to_point(point) > self.wall_thickness / 2.0)
    }

    fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn range_to_obstacle(&self, pose: &Pose2D) -> f64 {
        self.lines
            .iter()
            .filter_map(|line| line.ray_intersection(pose))
            .fold(f64::INFINITY, f64::min)
    }
}
