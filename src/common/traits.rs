//! Common traits defining interfaces for grid localization

use crate::common::error::LocalizationResult;
use crate::common::types::{BoundingBox, Heading, Point2D, Pose2D};

/// Trait for continuous-space obstacle maps
///
/// The grid side of the crate only relies on these three queries; how the
/// map is built or stored is the implementation's business.
pub trait ObstacleMap {
    /// Whether a world-space point lies in the free area of the map
    fn is_free(&self, point: Point2D) -> bool;

    /// World-space bounding region of the mapped area
    fn bounds(&self) -> BoundingBox;

    /// Distance from a pose to the nearest obstacle along the pose heading,
    /// `f64::INFINITY` if the ray escapes the map without hitting one
    fn range_to_obstacle(&self, pose: &Pose2D) -> f64;
}

impl<'a, M: ObstacleMap + ?Sized> ObstacleMap for &'a M {
    fn is_free(&self, point: Point2D) -> bool {
        (**self).is_free(point)
    }

    fn bounds(&self) -> BoundingBox {
        (**self).bounds()
    }

    fn range_to_obstacle(&self, pose: &Pose2D) -> f64 {
        (**self).range_to_obstacle(pose)
    }
}

/// Trait for discrete grid views over an obstacle map
///
/// Single source of truth for which cells are occupiable and which
/// single-step moves between adjacent cells are geometrically legal.
/// All queries accept arbitrary coordinates; out-of-range ones are
/// reported invalid/obstructed rather than failing.
pub trait GridMap {
    /// Number of cells along x
    fn grid_width(&self) -> i32;

    /// Number of cells along y
    fn grid_height(&self) -> i32;

    /// Whether (x, y) is inside the grid extents and its world point lies
    /// within the obstacle map bounds
    fn is_valid_grid_position(&self, x: i32, y: i32) -> bool;

    /// Whether (x, y) cannot be occupied, either because it is invalid or
    /// because its world point is not free space
    fn is_obstructed(&self, x: i32, y: i32) -> bool;

    /// World coordinate of a grid position (pure affine transform, no
    /// validity check)
    fn coordinates_of_grid_position(&self, x: i32, y: i32) -> Point2D;

    /// Whether a robot can move directly from (x1, y1) to (x2, y2)
    fn is_valid_transition(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool;

    /// Distance from a grid position to the nearest obstacle along a heading
    fn range_to_obstacle_from_grid_position(&self, x: i32, y: i32, heading: f64) -> f64;
}

impl<'a, M: GridMap + ?Sized> GridMap for &'a M {
    fn grid_width(&self) -> i32 {
        (**self).grid_width()
    }

    fn grid_height(&self) -> i32 {
        (**self).grid_height()
    }

    fn is_valid_grid_position(&self, x: i32, y: i32) -> bool {
        (**self).is_valid_grid_position(x, y)
    }

    fn is_obstructed(&self, x: i32, y: i32) -> bool {
        (**self).is_obstructed(x, y)
    }

    fn coordinates_of_grid_position(&self, x: i32, y: i32) -> Point2D {
        (**self).coordinates_of_grid_position(x, y)
    }

    fn is_valid_transition(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        (**self).is_valid_transition(x1, y1, x2, y2)
    }

    fn range_to_obstacle_from_grid_position(&self, x: i32, y: i32, heading: f64) -> f64 {
        (**self).range_to_obstacle_from_grid_position(x, y, heading)
    }
}

/// Trait for motion-update models of a grid-based Bayesian filter
pub trait ActionModel {
    /// Compute the belief resulting from one attempted move in the commanded
    /// direction. The input belief is left untouched.
    fn update_after_move(
        &self,
        from: &crate::localization::BeliefGrid,
        heading: Heading,
    ) -> LocalizationResult<crate::localization::BeliefGrid>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OpenMap {
        bounds: BoundingBox,
    }

    impl ObstacleMap for OpenMap {
        fn is_free(&self, point: Point2D) -> bool {
            self.bounds.contains(point)
        }

        fn bounds(&self) -> BoundingBox {
            self.bounds
        }

        fn range_to_obstacle(&self, _pose: &Pose2D) -> f64 {
            f64::INFINITY
        }
    }

    #[test]
    fn test_obstacle_map_impl_for_reference() {
        let map = OpenMap {
            bounds: BoundingBox::new(Point2D::origin(), Point2D::new(1.0, 1.0)),
        };
        let by_ref: &dyn ObstacleMap = &&map;
        assert!(by_ref.is_free(Point2D::new(0.5, 0.5)));
        assert!(!by_ref.is_free(Point2D::new(2.0, 0.5)));
        assert!(by_ref.range_to_obstacle(&Pose2D::new(0.5, 0.5, 0.0)).is_infinite());
    }
}
