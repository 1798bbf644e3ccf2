use sketch_grid::{Grid, Point, PointPair};

fn main() {
    // The default sketch canvas: 760x760 pixels in 10px cells
    let grid = Grid::default();
    println!("{}", grid);

    println!("\nSnapping (n -> snap(n)):");
    for n in [0, 5, 10, 17, 29, 699, 700, 759] {
        println!("{:4} -> {:4}", n, grid.snap(n));
    }

    println!("\nCells and centers:");
    for p in [Point::new(10, 10), Point::new(17, 29), Point::new(700, 700), Point::new(759, 759)] {
        match grid.cell_of(p) {
            Ok(cell) => {
                let center = grid.snapped_center(p);
                println!("{} -> cell ({}, {}), center {}", p, cell.col, cell.row, center);
            }
            Err(e) => println!("{} -> {}", p, e),
        }
    }

    // Off-canvas lookup is reported, snapping still works
    let outside = Point::new(760, 760);
    if let Err(e) = grid.cell_of(outside) {
        println!("{} -> {} (snaps to {})", outside, e, grid.snap_point(outside));
    }

    println!("\nRing-shift over a few clicks:");
    let mut pair = PointPair::new(Point::new(10, 10), Point::new(700, 700));
    println!("start: {}", pair);
    for click in [Point::new(50, 60), Point::new(0, 0), Point::new(760, 760)] {
        pair.shift_in(click);
        println!("click {}: {}", click, pair);
    }
}
