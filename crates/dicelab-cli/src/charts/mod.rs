use dicelab_core::curve;
use dicelab_core::distribution::SumDistribution;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Default pixel sizes matching the classic report's figure shapes.
pub const PER_DICE_SIZE: (u32, u32) = (1200, 600);
pub const SUMMARY_SIZE: (u32, u32) = (1400, 700);

/// Fixed series palette (matplotlib's default category colors), cycled
/// when the sweep has more than five counts.
const SERIES_COLORS: [RGBColor; 5] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
];

pub fn series_color(dice_count: u32) -> RGBColor {
    SERIES_COLORS[(dice_count as usize).saturating_sub(1) % SERIES_COLORS.len()]
}

pub fn per_dice_path(out_dir: &str, dice_count: u32) -> PathBuf {
    Path::new(out_dir).join(format!("dice_{}.png", dice_count))
}

pub fn summary_path(out_dir: &str) -> PathBuf {
    Path::new(out_dir).join("summary.png")
}

fn dice_noun(dice_count: u32) -> &'static str {
    if dice_count == 1 {
        "Die"
    } else {
        "Dice"
    }
}

/// One distribution: bars at each (sum, probability) point, an
/// interpolated curve through them, and a rotated percentage label per
/// point. Returns once the backend has presented the finished file.
pub fn render_distribution_chart(
    dist: &SumDistribution,
    samples: usize,
    size: (u32, u32),
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let color = series_color(dist.dice_count());

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = dist.min_sum() as f64 - 1.0;
    let x_max = dist.max_sum() as f64 + 1.0;
    let peak = dist
        .probabilities()
        .into_iter()
        .fold(f64::MIN, f64::max);
    let y_max = peak * 1.25;

    let title = format!(
        "Probability Distribution with {} {}",
        dist.dice_count(),
        dice_noun(dist.dice_count())
    );

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 22))
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(&BLACK.mix(0.1))
        .bold_line_style(&BLACK.mix(0.2))
        .x_desc("Sum of the dice")
        .y_desc("Probability")
        .draw()?;

    chart
        .draw_series(dist.entries().map(|(sum, prob)| {
            let x = sum as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, prob)], color.mix(0.6).filled())
        }))?
        .label("Exact probability")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.mix(0.6).filled())
        });

    // Bar outlines.
    chart.draw_series(dist.entries().map(|(sum, prob)| {
        let x = sum as f64;
        Rectangle::new([(x - 0.4, 0.0), (x + 0.4, prob)], BLACK.stroke_width(1))
    }))?;

    let points = curve::interpolate_curve(dist, samples);
    chart
        .draw_series(LineSeries::new(points, color.stroke_width(2)))?
        .label("Probability curve")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
        });

    let label_style = ("sans-serif", 12)
        .into_font()
        .transform(FontTransform::Rotate270)
        .color(&BLACK);
    chart.draw_series(dist.entries().map(|(sum, prob)| {
        Text::new(
            format!("{:.2}%", prob * 100.0),
            (sum as f64, prob + y_max * 0.02),
            label_style.clone(),
        )
    }))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// The comparison view: every sweep member's interpolated curve on one
/// set of axes, each labeled by its dice count.
pub fn render_summary_chart(
    sweep: &[SumDistribution],
    samples: usize,
    size: (u32, u32),
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    if sweep.is_empty() {
        return Err("nothing to plot: empty sweep".into());
    }

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = sweep.iter().map(|d| d.min_sum()).min().unwrap() as f64;
    let x_max = sweep.iter().map(|d| d.max_sum()).max().unwrap() as f64;
    let peak = sweep
        .iter()
        .flat_map(|d| d.probabilities())
        .fold(f64::MIN, f64::max);
    let y_max = peak * 1.1;

    let title = format!(
        "Comparison of Probability Distributions ({} to {} Dice)",
        sweep.first().unwrap().dice_count(),
        sweep.last().unwrap().dice_count()
    );

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 22))
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .light_line_style(&BLACK.mix(0.1))
        .bold_line_style(&BLACK.mix(0.2))
        .x_desc("Sum of the dice")
        .y_desc("Probability")
        .draw()?;

    for dist in sweep {
        let color = series_color(dist.dice_count());
        let points = curve::interpolate_curve(dist, samples);
        let label = format!(
            "{} {}",
            dist.dice_count(),
            dice_noun(dist.dice_count()).to_lowercase()
        );

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
