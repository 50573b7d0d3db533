//! Probability distribution over grid positions
//!
//! Dense belief container for grid-based Bayesian localization: one
//! probability mass per cell, plus the obstruction mask captured from the
//! grid map at construction time. Obstructed cells carry zero mass by
//! convention. `Clone` gives the copy semantics update algorithms rely on:
//! they clone the input and write the copy, so callers keep the original.

use itertools::iproduct;
use nalgebra::DMatrix;
use ordered_float::OrderedFloat;

use crate::common::{GridMap, LocalizationError, LocalizationResult};

/// Belief over robot grid positions
#[derive(Debug, Clone)]
pub struct BeliefGrid {
    probs: DMatrix<f64>,
    obstructed: DMatrix<bool>,
}

impl BeliefGrid {
    /// Uniform belief over every unobstructed cell of the grid
    pub fn uniform<M: GridMap>(map: &M) -> LocalizationResult<Self> {
        let mut belief = Self::zeroed(map);
        let free_cells = iproduct!(0..belief.width(), 0..belief.height())
            .filter(|&(x, y)| !belief.is_obstructed(x, y))
            .count();
        if free_cells == 0 {
            return Err(LocalizationError::UnnormalizableDistribution(
                "grid has no unobstructed cells".to_string(),
            ));
        }
        let mass = 1.0 / free_cells as f64;
        for (x, y) in iproduct!(0..belief.width(), 0..belief.height()) {
            if !belief.is_obstructed(x, y) {
                belief.set_probability(x, y, mass);
            }
        }
        Ok(belief)
    }

    /// Belief with all mass on a single cell, which must be occupiable
    pub fn point_mass<M: GridMap>(map: &M, x: i32, y: i32) -> LocalizationResult<Self> {
        let mut belief = Self::zeroed(map);
        if belief.is_obstructed(x, y) {
            return Err(LocalizationError::InvalidParameter(format!(
                "cell ({}, {}) cannot carry mass, it is obstructed or out of range",
                x, y
            )));
        }
        belief.set_probability(x, y, 1.0);
        Ok(belief)
    }

    fn zeroed<M: GridMap>(map: &M) -> Self {
        let width = map.grid_width() as usize;
        let height = map.grid_height() as usize;
        let obstructed = DMatrix::from_fn(width, height, |x, y| {
            map.is_obstructed(x as i32, y as i32)
        });
        Self {
            probs: DMatrix::from_element(width, height, 0.0),
            obstructed,
        }
    }

    pub fn width(&self) -> i32 {
        self.probs.nrows() as i32
    }

    pub fn height(&self) -> i32 {
        self.probs.ncols() as i32
    }

    fn in_range(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }

    /// Mass at a cell; out-of-range coordinates carry no mass
    pub fn probability(&self, x: i32, y: i32) -> f64 {
        if self.in_range(x, y) {
            self.probs[(x as usize, y as usize)]
        } else {
            0.0
        }
    }

    /// Set the mass at a cell; out-of-range coordinates are ignored
    pub fn set_probability(&mut self, x: i32, y: i32, value: f64) {
        if self.in_range(x, y) {
            self.probs[(x as usize, y as usize)] = value;
        }
    }

    /// Whether a cell was obstructed in the grid map this belief was built
    /// over; out-of-range coordinates count as obstructed
    pub fn is_obstructed(&self, x: i32, y: i32) -> bool {
        if self.in_range(x, y) {
            self.obstructed[(x as usize, y as usize)]
        } else {
            true
        }
    }

    /// Total mass over all cells
    pub fn sum(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Scale all masses so they sum to 1
    pub fn normalize(&mut self) -> LocalizationResult<()> {
        let total = self.sum();
        if total <= 0.0 {
            return Err(LocalizationError::UnnormalizableDistribution(format!(
                "total probability mass is {}",
                total
            )));
        }
        self.probs /= total;
        Ok(())
    }

    /// Cell with the highest mass
    pub fn mode(&self) -> Option<(i32, i32)> {
        iproduct!(0..self.width(), 0..self.height())
            .max_by_key(|&(x, y)| OrderedFloat(self.probability(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{GridMap, Point2D};

    /// Minimal grid map double: rectangular grid with a blocked-cell list
    struct MaskGrid {
        width: i32,
        height: i32,
        blocked: Vec<(i32, i32)>,
    }

    impl MaskGrid {
        fn open(width: i32, height: i32) -> Self {
            Self { width, height, blocked: Vec::new() }
        }
    }

    impl GridMap for MaskGrid {
        fn grid_width(&self) -> i32 {
            self.width
        }

        fn grid_height(&self) -> i32 {
            self.height
        }

        fn is_valid_grid_position(&self, x: i32, y: i32) -> bool {
            x >= 0 && y >= 0 && x < self.width && y < self.height
        }

        fn is_obstructed(&self, x: i32, y: i32) -> bool {
            !self.is_valid_grid_position(x, y) || self.blocked.contains(&(x, y))
        }

        fn coordinates_of_grid_position(&self, x: i32, y: i32) -> Point2D {
            Point2D::new(x as f64, y as f64)
        }

        fn is_valid_transition(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
            !self.is_obstructed(x1, y1)
                && !self.is_obstructed(x2, y2)
                && (x1 - x2).abs() + (y1 - y2).abs() <= 1
        }

        fn range_to_obstacle_from_grid_position(&self, _x: i32, _y: i32, _heading: f64) -> f64 {
            f64::INFINITY
        }
    }

    #[test]
    fn test_uniform_sums_to_one() {
        let belief = BeliefGrid::uniform(&MaskGrid::open(3, 4)).unwrap();
        assert!((belief.sum() - 1.0).abs() < 1e-10);
        assert!((belief.probability(2, 3) - 1.0 / 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_uniform_skips_obstructed_cells() {
        let map = MaskGrid {
            width: 2,
            height: 2,
            blocked: vec![(0, 1)],
        };
        let belief = BeliefGrid::uniform(&map).unwrap();
        assert_eq!(belief.probability(0, 1), 0.0);
        assert!(belief.is_obstructed(0, 1));
        assert!((belief.probability(1, 1) - 1.0 / 3.0).abs() < 1e-10);
        assert!((belief.sum() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_uniform_fails_on_fully_blocked_grid() {
        let map = MaskGrid {
            width: 1,
            height: 2,
            blocked: vec![(0, 0), (0, 1)],
        };
        assert!(matches!(
            BeliefGrid::uniform(&map),
            Err(LocalizationError::UnnormalizableDistribution(_))
        ));
    }

    #[test]
    fn test_point_mass() {
        let belief = BeliefGrid::point_mass(&MaskGrid::open(3, 3), 1, 2).unwrap();
        assert_eq!(belief.probability(1, 2), 1.0);
        assert_eq!(belief.probability(0, 0), 0.0);
        assert!((belief.sum() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_mass_rejects_obstructed_cell() {
        let map = MaskGrid {
            width: 3,
            height: 3,
            blocked: vec![(1, 1)],
        };
        assert!(matches!(
            BeliefGrid::point_mass(&map, 1, 1),
            Err(LocalizationError::InvalidParameter(_))
        ));
        assert!(matches!(
            BeliefGrid::point_mass(&map, 3, 0),
            Err(LocalizationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_out_of_range_accessors() {
        let mut belief = BeliefGrid::uniform(&MaskGrid::open(2, 2)).unwrap();
        assert_eq!(belief.probability(-1, 0), 0.0);
        assert_eq!(belief.probability(0, 2), 0.0);
        assert!(belief.is_obstructed(5, 5));
        // Writing out of range changes nothing
        belief.set_probability(-1, 0, 0.7);
        assert!((belief.sum() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_normalize_rescales() {
        let mut belief = BeliefGrid::point_mass(&MaskGrid::open(2, 2), 0, 0).unwrap();
        belief.set_probability(0, 0, 0.2);
        belief.set_probability(1, 1, 0.6);
        belief.normalize().unwrap();
        assert!((belief.probability(0, 0) - 0.25).abs() < 1e-10);
        assert!((belief.probability(1, 1) - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_normalize_fails_on_zero_mass() {
        let mut belief = BeliefGrid::uniform(&MaskGrid::open(2, 2)).unwrap();
        for x in 0..2 {
            for y in 0..2 {
                belief.set_probability(x, y, 0.0);
            }
        }
        assert!(matches!(
            belief.normalize(),
            Err(LocalizationError::UnnormalizableDistribution(_))
        ));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = BeliefGrid::point_mass(&MaskGrid::open(2, 2), 0, 0).unwrap();
        let mut copy = original.clone();
        copy.set_probability(0, 0, 0.0);
        copy.set_probability(1, 1, 1.0);
        assert_eq!(original.probability(0, 0), 1.0);
        assert_eq!(original.probability(1, 1), 0.0);
    }

    #[test]
    fn test_mode_finds_peak() {
        let mut belief = BeliefGrid::uniform(&MaskGrid::open(3, 3)).unwrap();
        belief.set_probability(2, 0, 0.5);
        assert_eq!(belief.mode(), Some((2, 0)));
    }
}
