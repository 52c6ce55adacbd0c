use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use dicelab_core::distribution::SumDistribution;
use dicelab_core::simulation::Simulation;

pub fn distribution(dist: &SumDistribution) {
    let modes = dist.modes();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Sum").add_attribute(Attribute::Bold),
        Cell::new("Ways"),
        Cell::new("Probability"),
        Cell::new("Percent").fg(Color::Cyan),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (sum, prob) in dist.entries() {
        let sum_cell = if modes.contains(&sum) {
            Cell::new(sum).fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            Cell::new(sum)
        };

        table.add_row(vec![
            sum_cell,
            Cell::new(dist.count_of(sum)),
            Cell::new(format!("{}/{}", dist.count_of(sum), dist.total_outcomes())),
            Cell::new(format!("{:.2}%", prob * 100.0)).fg(Color::Cyan),
        ]);
    }

    println!("\n{}", table);
}

pub fn statistics(sweep: &[SumDistribution]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Dice").add_attribute(Attribute::Bold),
        Cell::new("Outcomes"),
        Cell::new("Sums"),
        Cell::new("Mean"),
        Cell::new("Variance"),
        Cell::new("Mode(s)").fg(Color::Green),
        Cell::new("P(mode)").fg(Color::Cyan),
    ]);

    for i in 1..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for dist in sweep {
        let modes = dist.modes();
        let mode_text = modes
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(dist.dice_count()).add_attribute(Attribute::Bold),
            Cell::new(dist.total_outcomes()),
            Cell::new(format!("{}..{}", dist.min_sum(), dist.max_sum())),
            Cell::new(format!("{:.1}", dist.mean())),
            Cell::new(format!("{:.2}", dist.variance())),
            Cell::new(mode_text).fg(Color::Green),
            Cell::new(format!("{:.2}%", dist.probability_of(modes[0]) * 100.0)).fg(Color::Cyan),
        ]);
    }

    println!("\n{}", table);
}

pub fn simulation_comparison(exact: &SumDistribution, sim: &Simulation) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Sum").add_attribute(Attribute::Bold),
        Cell::new("Exact"),
        Cell::new("Empirical"),
        Cell::new("Delta"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for sum in exact.sums() {
        let p_exact = exact.probability_of(sum);
        let p_emp = sim.empirical_probability_of(sum);
        let delta = (p_emp - p_exact).abs();

        // Flag bins that drifted beyond what the sample size warrants.
        let tolerance = 3.0 * (p_exact * (1.0 - p_exact) / sim.rolls() as f64).sqrt();
        let delta_cell = if delta > tolerance {
            Cell::new(format!("{:.5}", delta)).fg(Color::Red)
        } else {
            Cell::new(format!("{:.5}", delta)).fg(Color::Green)
        };

        table.add_row(vec![
            Cell::new(sum).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}%", p_exact * 100.0)),
            Cell::new(format!("{:.2}%", p_emp * 100.0)),
            delta_cell,
        ]);
    }

    println!("\n{}", table);
}
