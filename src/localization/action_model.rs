//! Deterministic action model for grid-based localization
//!
//! Motion-update half of a grid Bayesian filter under idealised dynamics:
//! the robot always attempts to move exactly one cell in the commanded
//! direction and stays in place when the move is blocked. The grid map is
//! the sole authority on which moves are legal.

use itertools::iproduct;

use crate::common::{ActionModel, GridMap, Heading, LocalizationError, LocalizationResult};
use crate::localization::grid_distribution::BeliefGrid;

/// Action model that moves probability mass one cell per commanded step
///
/// One parametrised sweep serves all four directions via the heading's
/// `(dx, dy)` offset. For every unobstructed destination cell the new mass
/// is the sum of two contributions read from the input belief only:
/// the mass of the cell one step behind when its move into the destination
/// is legal, and the destination's own mass when its commanded move out is
/// blocked. Every unit of input mass ends up in exactly one output cell, so
/// the sweep conserves mass and its iteration order is immaterial.
pub struct DeterministicActionModel<M: GridMap> {
    grid_map: M,
}

impl<M: GridMap> DeterministicActionModel<M> {
    pub fn new(grid_map: M) -> Self {
        Self { grid_map }
    }

    pub fn grid_map(&self) -> &M {
        &self.grid_map
    }
}

impl<M: GridMap> ActionModel for DeterministicActionModel<M> {
    fn update_after_move(
        &self,
        from: &BeliefGrid,
        heading: Heading,
    ) -> LocalizationResult<BeliefGrid> {
        if from.width() != self.grid_map.grid_width()
            || from.height() != self.grid_map.grid_height()
        {
            return Err(LocalizationError::DimensionMismatch(format!(
                "belief is {}x{} but grid map is {}x{}",
                from.width(),
                from.height(),
                self.grid_map.grid_width(),
                self.grid_map.grid_height()
            )));
        }

        let (dx, dy) = heading.offset();
        let mut to = from.clone();
        for (x, y) in iproduct!(0..from.width(), 0..from.height()) {
            // Obstructed cells carry no mass and are never moved through
            if self.grid_map.is_obstructed(x, y) {
                continue;
            }
            // Mass arriving from the cell one step behind the destination
            let (sx, sy) = (x - dx, y - dy);
            let inbound = if self.grid_map.is_valid_transition(sx, sy, x, y) {
                from.probability(sx, sy)
            } else {
                0.0
            };
            // Mass staying put because this cell's own move is blocked
            let stayed = if self.grid_map.is_valid_transition(x, y, x + dx, y + dy) {
                0.0
            } else {
                from.probability(x, y)
            };
            to.set_probability(x, y, inbound + stayed);
        }

        to.normalize()?;
        Ok(to)
    }
}
