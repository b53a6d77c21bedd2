use crate::grid::{Endpoints, Floor, Position, SIZE};
use crate::labels::{LabelOverlay, RoomKind};
use crate::statistics::ComparisonReport;

/// Print one comparison pass as a table followed by the verdict.
pub fn print_comparison_results(run: usize, report: &ComparisonReport) {
    println!(
        "\n=== RUN {} : floor {}, {} -> {} ===",
        run, report.floor, report.endpoints.start, report.endpoints.goal
    );
    println!();
    println!(
        "{:<8} {:<8} {:<8} {:<8} {:>11}",
        "Algorithm", "Length", "Cost", "Nodes", "Time"
    );
    println!("{}", "-".repeat(47));
    for result in &report.results {
        println!("{}", result);
    }

    let Some(best) = report.best() else {
        println!();
        println!("{}", report.explanation());
        return;
    };

    println!();
    println!(
        "Selected route: {} (score {:.2}, {} cells, cost {})",
        best.strategy, best.score, best.path_length(), best.cost
    );
    if let (Some(optimal), Some(efficiency)) = (report.optimal_cost, report.efficiency(best)) {
        println!("Optimal cost: {} (route efficiency {:.3})", optimal, efficiency);
    }
    if let Some(injected) = report.injected() {
        let cells: Vec<String> = injected.iter().map(Position::to_string).collect();
        println!("Route collapsed at: {}", cells.join(" "));
    }
    println!();
    println!("{}", report.explanation());
}

/// ASCII view of a floor with the highlighted path.
pub fn render_floor(
    floor: &Floor,
    labels: &LabelOverlay,
    endpoints: Endpoints,
    path: &[Position],
) -> String {
    let mut out =
        String::from("Legend: S=Start G=Goal *=Path #=Blocked R=Room L=Lift T=Stairs E=Exit\n");
    out.push_str("   ");
    for col in 0..SIZE {
        out.push_str(&format!("{:2}", col));
    }
    out.push('\n');

    for row in 0..SIZE {
        out.push_str(&format!("{:2} ", row));
        for col in 0..SIZE {
            let pos = Position::new(row, col);
            let glyph = if pos == endpoints.start {
                'S'
            } else if pos == endpoints.goal {
                'G'
            } else if floor.is_blocked(pos) {
                '#'
            } else if path.contains(&pos) {
                '*'
            } else {
                match labels.kind_at(pos) {
                    RoomKind::Lift => 'L',
                    RoomKind::Stairs => 'T',
                    RoomKind::Exit => 'E',
                    RoomKind::Corridor | RoomKind::Entry => '.',
                    _ => 'R',
                }
            };
            out.push(' ');
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
