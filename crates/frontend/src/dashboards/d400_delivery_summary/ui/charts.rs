//! Inline SVG pie and bar charts for the delivery summary.

use contracts::dashboards::d400_delivery_summary::series::format_kg;
use contracts::dashboards::d400_delivery_summary::ChartSeries;
use leptos::prelude::*;

/// Fixed slice/bar palette. Groups beyond its length reuse colors from the
/// start; that repetition is cosmetic, not an error.
pub const PALETTE: [&str; 15] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#FF9F40", "#9966FF", "#FF6384", "#C9CBCF",
    "#4D5360", "#FF99CC", "#99CCFF", "#FFB366", "#99FF99", "#FF99CC", "#CC99FF",
];

pub fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn polar(cx: f64, cy: f64, r: f64, turn: f64) -> (f64, f64) {
    // turn 0.0 points up; fractions advance clockwise
    let angle = (turn - 0.25) * std::f64::consts::TAU;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path of one pie slice covering `[start, end)` as fractions of the
/// full circle.
pub fn pie_slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x1, y1) = polar(cx, cy, r, start);
    let (x2, y2) = polar(cx, cy, r, end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
        cx, cy, x1, y1, r, r, large_arc, x2, y2
    )
}

/// Pie chart with a legend; slice labels carry value and share of total.
#[component]
pub fn PieChart(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    view! {
        <div style="display: flex; gap: 16px; align-items: flex-start; flex-wrap: wrap;">
            {move || {
                let series = series.get();
                if series.is_empty() {
                    return view! {
                        <div style="color: #888; padding: 24px;">"ไม่มีข้อมูล"</div>
                    }
                    .into_any();
                }

                let total = series.total();
                let (cx, cy, r) = (150.0, 150.0, 140.0);
                let mut cursor = 0.0;
                let slices = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(index, value)| {
                        let fraction = if total > 0.0 { value / total } else { 0.0 };
                        let start = cursor;
                        cursor += fraction;
                        let percentage = fraction * 100.0;
                        let label = format!("{} กก. ({:.1}%)", format_kg(*value), percentage);
                        let (label_x, label_y) =
                            polar(cx, cy, r * 0.6, start + fraction / 2.0);

                        let shape = if fraction >= 0.999 {
                            // a full-circle arc degenerates; draw the disc
                            view! {
                                <circle cx=cx cy=cy r=r fill=color(index) stroke="white" stroke-width="1" />
                            }
                            .into_any()
                        } else {
                            view! {
                                <path
                                    d=pie_slice_path(cx, cy, r, start, start + fraction)
                                    fill=color(index)
                                    stroke="white"
                                    stroke-width="1"
                                />
                            }
                            .into_any()
                        };

                        view! {
                            {shape}
                            <text
                                x=format!("{:.1}", label_x)
                                y=format!("{:.1}", label_y)
                                text-anchor="middle"
                                font-size="11"
                                fill="#000"
                            >
                                {label}
                            </text>
                        }
                    })
                    .collect_view();

                let legend = series
                    .labels
                    .iter()
                    .enumerate()
                    .map(|(index, label)| {
                        view! {
                            <div style="display: flex; align-items: center; gap: 6px; font-size: 12px;">
                                <span style=format!(
                                    "display: inline-block; width: 15px; height: 15px; border-radius: 3px; background: {};",
                                    color(index)
                                )></span>
                                <span>{label.clone()}</span>
                            </div>
                        }
                    })
                    .collect_view();

                view! {
                    <svg width="300" height="300" viewBox="0 0 300 300">
                        {slices}
                    </svg>
                    <div style="display: flex; flex-direction: column; gap: 4px; max-height: 300px; overflow-y: auto;">
                        {legend}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

/// Bar chart with value labels above the bars.
#[component]
pub fn BarChart(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    view! {
        <div style="overflow-x: auto;">
            {move || {
                let series = series.get();
                if series.is_empty() {
                    return view! {
                        <div style="color: #888; padding: 24px;">"ไม่มีข้อมูล"</div>
                    }
                    .into_any();
                }

                let max = series.values.iter().cloned().fold(0.0_f64, f64::max).max(1.0);
                let bar_width = 44.0;
                let gap = 28.0;
                let chart_height = 220.0;
                let width = 50.0 + (bar_width + gap) * series.values.len() as f64;

                let bars = series
                    .values
                    .iter()
                    .zip(series.labels.iter())
                    .enumerate()
                    .map(|(index, (value, label))| {
                        let height = value / max * chart_height;
                        let x = 50.0 + (bar_width + gap) * index as f64;
                        let y = 20.0 + chart_height - height;
                        view! {
                            <rect
                                x=format!("{:.1}", x)
                                y=format!("{:.1}", y)
                                width=bar_width
                                height=format!("{:.1}", height)
                                fill=color(index)
                                stroke="#ffff"
                                stroke-width="1"
                            />
                            <text
                                x=format!("{:.1}", x + bar_width / 2.0)
                                y=format!("{:.1}", y - 6.0)
                                text-anchor="middle"
                                font-size="11"
                                fill="#000"
                            >
                                {format_kg(*value)}
                            </text>
                            <text
                                x=format!("{:.1}", x + bar_width / 2.0)
                                y=format!("{:.1}", 20.0 + chart_height + 16.0)
                                text-anchor="middle"
                                font-size="11"
                                fill="#333"
                            >
                                {label.clone()}
                            </text>
                        }
                    })
                    .collect_view();

                view! {
                    <svg width=format!("{:.0}", width) height="270" viewBox=format!("0 0 {:.0} 270", width)>
                        <text x="12" y="18" font-size="11" fill="#333">"จำนวน (กก.)"</text>
                        <line x1="40" y1="20" x2="40" y2=format!("{:.1}", 20.0 + chart_height) stroke="#ccc" />
                        <line
                            x1="40"
                            y1=format!("{:.1}", 20.0 + chart_height)
                            x2=format!("{:.0}", width)
                            y2=format!("{:.1}", 20.0 + chart_height)
                            stroke="#ccc"
                        />
                        {bars}
                    </svg>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_past_its_length() {
        assert_eq!(color(0), PALETTE[0]);
        assert_eq!(color(15), PALETTE[0]);
        assert_eq!(color(17), PALETTE[2]);
    }

    #[test]
    fn half_slice_uses_small_arc_flag() {
        let path = pie_slice_path(150.0, 150.0, 100.0, 0.0, 0.25);
        assert!(path.contains(" 0 1 "), "path: {}", path);
        let big = pie_slice_path(150.0, 150.0, 100.0, 0.0, 0.75);
        assert!(big.contains(" 1 1 "), "path: {}", big);
    }

    #[test]
    fn slice_starts_at_twelve_oclock() {
        let path = pie_slice_path(150.0, 150.0, 100.0, 0.0, 0.25);
        // first point of the wedge is straight up from the center
        assert!(path.starts_with("M 150.00 150.00 L 150.00 50.00"), "path: {}", path);
    }
}
