use crate::distribution::SumDistribution;
use crate::error::DlResult;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Flat, serialization-friendly view of a distribution.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRecord {
    pub dice_count: u32,
    pub total_outcomes: u64,
    pub sums: Vec<u32>,
    pub counts: Vec<u64>,
    pub probabilities: Vec<f64>,
}

impl From<&SumDistribution> for DistributionRecord {
    fn from(dist: &SumDistribution) -> Self {
        let sums = dist.sums();
        Self {
            dice_count: dist.dice_count(),
            total_outcomes: dist.total_outcomes(),
            counts: sums.iter().map(|&s| dist.count_of(s)).collect(),
            probabilities: dist.probabilities(),
            sums,
        }
    }
}

/// Writes one distribution as `sum,count,probability` rows.
pub fn write_csv<W: Write>(dist: &SumDistribution, writer: W) -> DlResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["sum", "count", "probability"])?;
    for (sum, prob) in dist.entries() {
        wtr.write_record(&[
            sum.to_string(),
            dist.count_of(sum).to_string(),
            prob.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes a whole sweep as `dice,sum,count,probability` rows.
pub fn write_csv_sweep<W: Write>(sweep: &[SumDistribution], writer: W) -> DlResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["dice", "sum", "count", "probability"])?;
    for dist in sweep {
        for (sum, prob) in dist.entries() {
            wtr.write_record(&[
                dist.dice_count().to_string(),
                sum.to_string(),
                dist.count_of(sum).to_string(),
                prob.to_string(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Writes one distribution as a pretty-printed JSON record.
pub fn write_json<W: Write>(dist: &SumDistribution, writer: W) -> DlResult<()> {
    serde_json::to_writer_pretty(writer, &DistributionRecord::from(dist))?;
    Ok(())
}

/// Writes a whole sweep as a JSON array of records.
pub fn write_json_sweep<W: Write>(sweep: &[SumDistribution], writer: W) -> DlResult<()> {
    let records: Vec<DistributionRecord> = sweep.iter().map(DistributionRecord::from).collect();
    serde_json::to_writer_pretty(writer, &records)?;
    Ok(())
}
