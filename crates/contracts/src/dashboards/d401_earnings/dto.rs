use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::shared::format::format_thousands;

pub const MONTHS: [&str; 6] = ["January", "February", "March", "April", "May", "June"];

/// Device split shown before the first "Apply Filters"
const INITIAL_DEVICES: [(u32, u32); 6] = [
    (200, 150),
    (220, 180),
    (250, 200),
    (180, 220),
    (300, 250),
    (280, 210),
];

/// One bar of the monthly earnings chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsPoint {
    pub month: String,
    /// Whole dollars
    pub earnings: u32,
    pub desktop: u32,
    pub mobile: u32,
}

fn random_earnings<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1000..6000)
}

fn random_device<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(100..400)
}

/// Six months of random earnings with the fixed device split
pub fn initial_series<R: Rng + ?Sized>(rng: &mut R) -> Vec<EarningsPoint> {
    MONTHS
        .iter()
        .zip(INITIAL_DEVICES.iter())
        .map(|(month, (desktop, mobile))| EarningsPoint {
            month: month.to_string(),
            earnings: random_earnings(rng),
            desktop: *desktop,
            mobile: *mobile,
        })
        .collect()
}

/// New random values for every month; month labels are kept
pub fn regenerate<R: Rng + ?Sized>(series: &[EarningsPoint], rng: &mut R) -> Vec<EarningsPoint> {
    series
        .iter()
        .map(|p| EarningsPoint {
            month: p.month.clone(),
            earnings: random_earnings(rng),
            desktop: random_device(rng),
            mobile: random_device(rng),
        })
        .collect()
}

/// Summary cards under the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsSummary {
    pub total_revenue: u64,
    pub average_commission: f64,
    /// Percent, 5.0..15.0
    pub conversion_rate: f64,
}

impl EarningsSummary {
    pub fn compute<R: Rng + ?Sized>(series: &[EarningsPoint], rng: &mut R) -> Self {
        let total_revenue: u64 = series.iter().map(|p| u64::from(p.earnings)).sum();
        let average_commission = if series.is_empty() {
            0.0
        } else {
            total_revenue as f64 / series.len() as f64 / 10.0
        };
        Self {
            total_revenue,
            average_commission,
            conversion_rate: rng.gen_range(5.0..15.0),
        }
    }

    pub fn total_label(&self) -> String {
        format!("$ {}", format_thousands(self.total_revenue as i64))
    }

    pub fn average_label(&self) -> String {
        format!("$ {:.2}", self.average_commission)
    }

    pub fn conversion_label(&self) -> String {
        format!("{:.1}%", self.conversion_rate)
    }
}

/// Inclusive reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// today-29 ..= today
    pub fn last_30_days(today: NaiveDate) -> Self {
        Self {
            from: today - Duration::days(29),
            to: today,
        }
    }

    /// Range spanning both dates, whichever order they come in
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            from: a.min(b),
            to: a.max(b),
        }
    }

    pub fn with_from(self, from: NaiveDate) -> Self {
        Self::between(from, self.to)
    }

    pub fn with_to(self, to: NaiveDate) -> Self {
        Self::between(self.from, to)
    }

    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.from.format("%b %d, %Y"),
            self.to.format("%b %d, %Y")
        )
    }

    pub fn description(&self) -> String {
        format!(
            "Showing data from {} to {}",
            self.from.format("%b %d, %Y"),
            self.to.format("%b %d, %Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn test_initial_series_ranges() {
        let series = initial_series(&mut rng());
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].month, "January");
        assert_eq!(series[5].month, "June");
        assert!(series.iter().all(|p| (1000..6000).contains(&p.earnings)));
        assert_eq!((series[3].desktop, series[3].mobile), (180, 220));
    }

    #[test]
    fn test_regenerate_keeps_months() {
        let mut r = rng();
        let series = initial_series(&mut r);
        let next = regenerate(&series, &mut r);
        let months: Vec<_> = next.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, MONTHS.to_vec());
        for p in &next {
            assert!((1000..6000).contains(&p.earnings));
            assert!((100..400).contains(&p.desktop));
            assert!((100..400).contains(&p.mobile));
        }
    }

    #[test]
    fn test_summary_math() {
        let series: Vec<EarningsPoint> = MONTHS
            .iter()
            .map(|m| EarningsPoint {
                month: m.to_string(),
                earnings: 2000,
                desktop: 100,
                mobile: 100,
            })
            .collect();
        let summary = EarningsSummary::compute(&series, &mut rng());
        assert_eq!(summary.total_revenue, 12000);
        assert_eq!(summary.total_label(), "$ 12,000");
        assert_eq!(summary.average_label(), "$ 200.00");
        assert!(summary.conversion_rate >= 5.0 && summary.conversion_rate < 15.0);
    }

    #[test]
    fn test_default_range() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 30).unwrap();
        let range = DateRange::last_30_days(today);
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(range.label(), "Jul 01, 2024 - Jul 30, 2024");
    }

    #[test]
    fn test_range_endpoints_are_ordered() {
        let early = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let range = DateRange::between(late, early);
        assert_eq!(range.from, early);
        assert_eq!(range.to, late);

        let moved = range.with_from(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(moved.from, late);
        assert_eq!(moved.to, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }
}
