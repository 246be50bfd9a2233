use serde::{Deserialize, Serialize};

/// One segment of a progress bar, with its legend label and color token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub value: u64,
    pub color: String,
}

impl ChartSeries {
    pub fn new(name: &str, value: u64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            color: color.to_string(),
        }
    }

    /// Share of `total` as a percentage, rounded to one decimal place.
    pub fn percent_of(&self, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let percent = self.value as f64 * 100.0 / total as f64;
        (percent * 10.0).round() / 10.0
    }
}

pub fn series_total(series: &[ChartSeries]) -> u64 {
    series
        .iter()
        .map(|entry| entry.value)
        .fold(0, u64::saturating_add)
}
