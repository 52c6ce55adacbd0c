mod lines;
mod tables;

pub use self::lines::print_distribution as print_distribution_lines;
pub use self::tables::{
    distribution as print_distribution_table, simulation_comparison as print_simulation_table,
    statistics as print_statistics_table,
};
