//! Discrete grid view over a continuous obstacle map
//!
//! Overlays a fixed grid discretisation (extents, cell size, origin offset)
//! on an [`ObstacleMap`] and answers which cells can be occupied and which
//! single-step moves between adjacent cells are geometrically legal.
//! Nothing is cached: every query is recomputed from the grid parameters and
//! the underlying map, so the answers cannot drift from the map geometry.

use crate::common::{
    GridMap, Heading, LocalizationError, LocalizationResult, ObstacleMap, Point2D, Pose2D,
};

/// Grid discretisation of an obstacle map
#[derive(Debug, Clone)]
pub struct DiscreteGridMap<M: ObstacleMap> {
    map: M,
    width: i32,
    height: i32,
    cell_size: f64,
    offset: Point2D,
}

impl<M: ObstacleMap> DiscreteGridMap<M> {
    /// Create a grid of `width` x `height` cells over `map`, with cell (0, 0)
    /// at world coordinate `offset` and `cell_size` world units between
    /// neighboring cell centers.
    pub fn new(
        map: M,
        width: i32,
        height: i32,
        cell_size: f64,
        offset: Point2D,
    ) -> LocalizationResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(LocalizationError::InvalidParameter(format!(
                "grid extents must be positive, got {}x{}",
                width, height
            )));
        }
        if cell_size <= 0.0 {
            return Err(LocalizationError::InvalidParameter(format!(
                "cell size must be positive, got {}",
                cell_size
            )));
        }
        Ok(Self {
            map,
            width,
            height,
            cell_size,
            offset,
        })
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn offset(&self) -> Point2D {
        self.offset
    }

    pub fn obstacle_map(&self) -> &M {
        &self.map
    }
}

impl<M: ObstacleMap> GridMap for DiscreteGridMap<M> {
    fn grid_width(&self) -> i32 {
        self.width
    }

    fn grid_height(&self) -> i32 {
        self.height
    }

    fn is_valid_grid_position(&self, x: i32, y: i32) -> bool {
        // Out-of-range coordinates short-circuit before any world lookup
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        let world = self.coordinates_of_grid_position(x, y);
        self.map.bounds().contains(world)
    }

    fn is_obstructed(&self, x: i32, y: i32) -> bool {
        if !self.is_valid_grid_position(x, y) {
            return true;
        }
        !self.map.is_free(self.coordinates_of_grid_position(x, y))
    }

    fn coordinates_of_grid_position(&self, x: i32, y: i32) -> Point2D {
        Point2D::new(
            self.offset.x + x as f64 * self.cell_size,
            self.offset.y + y as f64 * self.cell_size,
        )
    }

    fn is_valid_transition(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        if !self.is_valid_grid_position(x1, y1) || !self.is_valid_grid_position(x2, y2) {
            return false;
        }
        if self.is_obstructed(x1, y1) || self.is_obstructed(x2, y2) {
            return false;
        }
        if x1 == x2 && y1 == y2 {
            // Staying in place is always legal
            return true;
        }
        let heading = match Heading::between(x1, y1, x2, y2) {
            Some(heading) => heading,
            // Only single-step cardinal moves are modeled
            None => return false,
        };
        self.range_to_obstacle_from_grid_position(x1, y1, heading.yaw()) > self.cell_size
    }

    fn range_to_obstacle_from_grid_position(&self, x: i32, y: i32, heading: f64) -> f64 {
        let position = self.coordinates_of_grid_position(x, y);
        self.map.range_to_obstacle(&Pose2D::from_point(position, heading))
    }
}
