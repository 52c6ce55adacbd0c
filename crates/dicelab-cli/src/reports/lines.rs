use dicelab_core::distribution::SumDistribution;

/// The classic fixed-format listing: a header naming the dice count,
/// then one `Sum s: p%` line per achievable sum, ascending.
pub fn print_distribution(dist: &SumDistribution) {
    let noun = if dist.dice_count() == 1 { "DIE" } else { "DICE" };
    println!(
        "\n=== SUM PROBABILITIES FOR {} {} ===",
        dist.dice_count(),
        noun
    );
    for (sum, prob) in dist.entries() {
        println!("Sum {}: {:.2}%", sum, prob * 100.0);
    }
}
