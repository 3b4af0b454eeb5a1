use super::chart::{BarChart, BarGroup, Series};
use crate::layout::toast_service::use_toast;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use chrono::Local;
use contracts::dashboards::d401_earnings::dto::{
    initial_series, regenerate, DateRange, EarningsPoint, EarningsSummary,
};
use contracts::shared::notification::Notification;
use leptos::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const EARNINGS: [Series; 1] = [Series {
    label: "Earnings",
    modifier: "earnings",
}];

const DEVICES: [Series; 2] = [
    Series {
        label: "Desktop",
        modifier: "desktop",
    },
    Series {
        label: "Mobile",
        modifier: "mobile",
    },
];

fn clock_seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(js_sys::Date::now() as u64)
}

/// Last 30 days ending on the visitor's local calendar day
fn default_range() -> DateRange {
    DateRange::last_30_days(Local::now().date_naive())
}

fn earnings_groups(series: &[EarningsPoint]) -> Vec<BarGroup> {
    series
        .iter()
        .map(|p| BarGroup {
            label: p.month.clone(),
            values: vec![p.earnings],
        })
        .collect()
}

fn device_groups(series: &[EarningsPoint]) -> Vec<BarGroup> {
    series
        .iter()
        .map(|p| BarGroup {
            label: p.month.clone(),
            values: vec![p.desktop, p.mobile],
        })
        .collect()
}

/// Earnings chart with date range, summary cards and simulated refresh
#[component]
pub fn EarningsDashboard() -> impl IntoView {
    let toast = use_toast();
    let rng = StoredValue::new(clock_seeded_rng());

    let initial = rng.try_update_value(|r| initial_series(r)).unwrap_or_default();
    let initial_summary = rng
        .try_update_value(|r| EarningsSummary::compute(&initial, r))
        .unwrap_or(EarningsSummary {
            total_revenue: 0,
            average_commission: 0.0,
            conversion_rate: 0.0,
        });

    let (series, set_series) = signal(initial);
    let (summary, set_summary) = signal(initial_summary);
    let (range, set_range) = signal(default_range());

    let apply_filters = move |_| {
        let current = series.get_untracked();
        let next = rng.try_update_value(|r| {
            let next = regenerate(&current, r);
            let summary = EarningsSummary::compute(&next, r);
            (next, summary)
        });
        if let Some((next, next_summary)) = next {
            log::info!(
                "earnings regenerated for {} ({} points)",
                range.get_untracked().label(),
                next.len()
            );
            set_series.set(next);
            set_summary.set(next_summary);
        }
    };

    let export = move |_| {
        toast.notify(
            Notification::new("Export Requested (UI Only)")
                .with_description(format!("Earnings for {} (simulated).", range.get_untracked().label())),
        );
    };

    view! {
        <div class="page earnings-dashboard">
            <div class="page-header">
                <div class="page-header__content">
                    <h1 class="page-header__title">"Earning Dashboard"</h1>
                </div>
                <div class="page-header__actions">
                    <span class="date-range">
                        {icon("calendar")}
                        <DateInput
                            value=Signal::derive(move || range.get().from)
                            on_change=Callback::new(move |d| set_range.update(|r| *r = r.with_from(d)))
                        />
                        <span>"-"</span>
                        <DateInput
                            value=Signal::derive(move || range.get().to)
                            on_change=Callback::new(move |d| set_range.update(|r| *r = r.with_to(d)))
                        />
                    </span>
                    <Button on_click=Callback::new(apply_filters)>
                        {icon("filter")}
                        "Apply Filters"
                    </Button>
                    <Button variant="outline" on_click=Callback::new(export)>
                        {icon("download")}
                        "Export"
                    </Button>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <div>
                        <h3 class="card__title">"Monthly Earnings Overview"</h3>
                        <p class="card__subtitle">{move || range.get().description()}</p>
                    </div>
                </div>
                <BarChart
                    series=EARNINGS.to_vec()
                    groups=Signal::derive(move || series.with(|s| earnings_groups(s)))
                />
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Traffic by Device"</h3>
                </div>
                <BarChart
                    series=DEVICES.to_vec()
                    groups=Signal::derive(move || series.with(|s| device_groups(s)))
                />
            </div>

            <div class="card-grid card-grid--3">
                <StatCard
                    label="Total Revenue"
                    value=Signal::derive(move || summary.get().total_label())
                    subtitle="+12.5% from previous period"
                />
                <StatCard
                    label="Average Commission"
                    value=Signal::derive(move || summary.get().average_label())
                    subtitle="Per sale average"
                />
                <StatCard
                    label="Conversion Rate"
                    value=Signal::derive(move || summary.get().conversion_label())
                    subtitle="Clicks to sales"
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: &str, earnings: u32, desktop: u32, mobile: u32) -> EarningsPoint {
        EarningsPoint {
            month: month.to_string(),
            earnings,
            desktop,
            mobile,
        }
    }

    #[test]
    fn test_groups_follow_series_order() {
        let series = vec![point("January", 1500, 200, 150), point("February", 2500, 220, 180)];

        let earnings = earnings_groups(&series);
        assert_eq!(earnings.len(), 2);
        assert_eq!(earnings[1].label, "February");
        assert_eq!(earnings[1].values, vec![2500]);

        let devices = device_groups(&series);
        assert_eq!(devices[0].values, vec![200, 150]);
    }

    #[test]
    fn test_default_range_ends_on_local_today() {
        let before = Local::now().date_naive();
        let range = default_range();
        let after = Local::now().date_naive();
        assert!(range.to == before || range.to == after);
        assert_eq!((range.to - range.from).num_days(), 29);
    }
}
