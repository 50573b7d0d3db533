// Grid-based localization action model demo
//
// A robot random-walks through a small maze. Every commanded move is fed to
// the deterministic action model; because the dynamics are noise-free, the
// belief tracks the true cell exactly as long as it starts as a point mass.

use rand::Rng;

use grid_localization::utils::{colors, MapVisualizer};
use grid_localization::{
    ActionModel, BeliefGrid, DeterministicActionModel, DiscreteGridMap, GridMap, Heading, LineMap,
    LineSegment, Point2D,
};

// Demo parameters
const GRID_SIZE: i32 = 6; // cells per side
const CELL_SIZE: f64 = 1.0; // [m]
const N_STEPS: usize = 30; // random walk length

const SHOW_ANIMATION: bool = false;

/// 6m square room with two internal walls
fn build_maze() -> LineMap {
    let side = GRID_SIZE as f64 * CELL_SIZE;
    let walls = vec![
        // Outer boundary
        LineSegment::from_coords(0.0, 0.0, side, 0.0),
        LineSegment::from_coords(side, 0.0, side, side),
        LineSegment::from_coords(side, side, 0.0, side),
        LineSegment::from_coords(0.0, side, 0.0, 0.0),
        // Internal walls
        LineSegment::from_coords(2.0, 0.0, 2.0, 4.0),
        LineSegment::from_coords(4.0, 2.0, 4.0, 6.0),
    ];
    LineMap::new(walls).unwrap()
}

fn heading_name(heading: Heading) -> &'static str {
    match heading {
        Heading::PlusX => "+x",
        Heading::PlusY => "+y",
        Heading::MinusX => "-x",
        Heading::MinusY => "-y",
    }
}

fn main() {
    println!("Grid localization action model demo start!");

    let maze = build_maze();
    let grid = DiscreteGridMap::new(
        maze.clone(),
        GRID_SIZE,
        GRID_SIZE,
        CELL_SIZE,
        Point2D::new(0.5, 0.5),
    )
    .unwrap();
    let model = DeterministicActionModel::new(&grid);

    // Robot starts in the lower-left corner, belief knows it
    let (mut true_x, mut true_y) = (0, 0);
    let mut belief = BeliefGrid::point_mass(&grid, true_x, true_y).unwrap();

    let mut rng = rand::thread_rng();
    for step in 1..=N_STEPS {
        let heading = Heading::ALL[rng.gen_range(0..Heading::ALL.len())];

        // The robot attempts the move and stays put when it is blocked
        let (dx, dy) = heading.offset();
        if grid.is_valid_transition(true_x, true_y, true_x + dx, true_y + dy) {
            true_x += dx;
            true_y += dy;
        }

        belief = model.update_after_move(&belief, heading).unwrap();
        let (est_x, est_y) = belief.mode().unwrap();

        println!(
            "Step {:2}: move {} -> true ({}, {}), est ({}, {})",
            step, heading_name(heading), true_x, true_y, est_x, est_y
        );
    }

    println!("Done! Belief followed the robot for {} steps.", N_STEPS);

    let mut vis = MapVisualizer::new("Grid Localization Action Model");
    vis.set_belief(&grid, &belief)
        .set_walls(&maze)
        .mark_cell(&grid, true_x, true_y, "True", colors::TRUE_POSITION);
    if let Some((est_x, est_y)) = belief.mode() {
        vis.mark_cell(&grid, est_x, est_y, "Estimated", colors::ESTIMATED);
    }

    let output_path = "./img/grid_localization.svg";
    std::fs::create_dir_all("./img").unwrap();
    vis.save_svg(output_path, 640, 480).unwrap();
    println!("Plot saved to {}", output_path);

    if SHOW_ANIMATION {
        vis.show().unwrap();
    }
}
