//! Visualization utilities for grid_localization
//!
//! Renders a belief grid as a heatmap over the line map walls using gnuplot.
//! Only demo binaries draw; library code never plots on its own.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, PointSize, PointSymbol};

use crate::common::{GridMap, LocalizationError, LocalizationResult, ObstacleMap};
use crate::localization::BeliefGrid;
use crate::mapping::{DiscreteGridMap, LineMap};

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";

    // Semantic colors
    pub const WALL: &str = BLACK;
    pub const TRUE_POSITION: &str = BLUE;
    pub const ESTIMATED: &str = "#35C788";
}

/// Marker drawn on top of the belief heatmap
struct CellMarker {
    x: f64,
    y: f64,
    caption: String,
    color: String,
}

/// Collects map and belief layers, then renders them in one figure
pub struct MapVisualizer {
    title: String,
    heatmap: Option<(Vec<f64>, usize, usize, (f64, f64, f64, f64))>,
    walls: Vec<([f64; 2], [f64; 2])>,
    markers: Vec<CellMarker>,
}

impl MapVisualizer {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            heatmap: None,
            walls: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Add the belief grid as an image layer spanning the grid's world extent
    pub fn set_belief<M: ObstacleMap>(
        &mut self,
        grid: &DiscreteGridMap<M>,
        belief: &BeliefGrid,
    ) -> &mut Self {
        let width = belief.width();
        let height = belief.height();
        let mut z_data = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                z_data.push(belief.probability(x, y));
            }
        }
        let half = grid.cell_size() / 2.0;
        let min = grid.coordinates_of_grid_position(0, 0);
        let max = grid.coordinates_of_grid_position(width - 1, height - 1);
        let extent = (min.x - half, min.y - half, max.x + half, max.y + half);
        self.heatmap = Some((z_data, height as usize, width as usize, extent));
        self
    }

    /// Add the wall segments of a line map
    pub fn set_walls(&mut self, map: &LineMap) -> &mut Self {
        for line in map.lines() {
            self.walls
                .push(([line.start.x, line.end.x], [line.start.y, line.end.y]));
        }
        self
    }

    /// Mark a grid cell with a captioned point
    pub fn mark_cell<M: ObstacleMap>(
        &mut self,
        grid: &DiscreteGridMap<M>,
        x: i32,
        y: i32,
        caption: &str,
        color: &str,
    ) -> &mut Self {
        let world = grid.coordinates_of_grid_position(x, y);
        self.markers.push(CellMarker {
            x: world.x,
            y: world.y,
            caption: caption.to_string(),
            color: color.to_string(),
        });
        self
    }

    fn draw(&self, fig: &mut Figure) {
        let axes = fig.axes2d();
        axes.set_title(&self.title, &[])
            .set_x_label("x [m]", &[])
            .set_y_label("y [m]", &[])
            .set_aspect_ratio(AutoOption::Fix(1.0));

        if let Some((z_data, rows, cols, extent)) = &self.heatmap {
            axes.image(
                z_data.iter().cloned(),
                *rows,
                *cols,
                Some(*extent),
                &[Caption("Belief")],
            );
        }
        for (xs, ys) in &self.walls {
            axes.lines(xs.iter(), ys.iter(), &[Color(colors::WALL)]);
        }
        for marker in &self.markers {
            axes.points(
                &[marker.x],
                &[marker.y],
                &[
                    Caption(marker.caption.as_str()),
                    Color(marker.color.as_str()),
                    PointSymbol('O'),
                    PointSize(2.0),
                ],
            );
        }
    }

    /// Save the figure to an SVG file
    pub fn save_svg(&self, path: &str, width: u32, height: u32) -> LocalizationResult<()> {
        let mut fig = Figure::new();
        self.draw(&mut fig);
        fig.save_to_svg(path, width, height)
            .map_err(|e| LocalizationError::VisualizationError(format!("{}", e)))
    }

    /// Open an interactive gnuplot window
    pub fn show(&self) -> LocalizationResult<()> {
        let mut fig = Figure::new();
        self.draw(&mut fig);
        fig.show()
            .map(|_| ())
            .map_err(|e| LocalizationError::VisualizationError(format!("{}", e)))
    }
}
