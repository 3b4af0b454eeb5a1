//! Plain CSS bar chart. Bars are sized as a percentage of the tallest value.

use contracts::shared::format::format_thousands;
use leptos::prelude::*;

/// One series: legend label plus the CSS modifier that colours it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Series {
    pub label: &'static str,
    pub modifier: &'static str,
}

/// Category label with one value per series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarGroup {
    pub label: String,
    pub values: Vec<u32>,
}

fn bar_height(value: u32, max: u32) -> String {
    if max == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", value as f64 * 100.0 / max as f64)
}

#[component]
pub fn BarChart(
    series: Vec<Series>,
    #[prop(into)] groups: Signal<Vec<BarGroup>>,
) -> impl IntoView {
    let max = Memo::new(move |_| {
        groups.with(|gs| {
            gs.iter()
                .flat_map(|g| g.values.iter().copied())
                .max()
                .unwrap_or(0)
        })
    });
    let legend = series.clone();

    view! {
        <div class="bar-chart">
            <div class="bar-chart__plot">
                {move || {
                    let series = series.clone();
                    groups
                        .get()
                        .into_iter()
                        .map(|group| {
                            let bars = group
                                .values
                                .iter()
                                .zip(series.iter())
                                .map(|(value, s)| {
                                    let height = bar_height(*value, max.get());
                                    view! {
                                        <div
                                            class=format!("bar-chart__bar bar-chart__bar--{}", s.modifier)
                                            style=format!("height: {}", height)
                                            title=format!("{}: {}", s.label, format_thousands(*value as i64))
                                        ></div>
                                    }
                                })
                                .collect_view();
                            view! {
                                <div class="bar-chart__group">
                                    <div class="bar-chart__bars">{bars}</div>
                                    <div class="bar-chart__label">{group.label}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="bar-chart__legend">
                {legend
                    .into_iter()
                    .map(|s| view! {
                        <span class="bar-chart__legend-item">
                            <span class=format!("bar-chart__swatch bar-chart__bar--{}", s.modifier)></span>
                            {s.label}
                        </span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_is_relative_to_max() {
        assert_eq!(bar_height(50, 200), "25.0%");
        assert_eq!(bar_height(200, 200), "100.0%");
        assert_eq!(bar_height(10, 0), "0%");
    }
}
