use detection::presenter::{ChartSeries, Presentation, CURRENT_MONTH_FILL};
use detection::Locale;
use std::fmt::Write;

/// Renders the result panel, and the chart as a table, for a terminal.
pub fn render_text(presentation: &Presentation, locale: Locale) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", locale.result_title());
    for flag in &presentation.flags {
        let _ = writeln!(out, "  {}: {}", flag.label, flag.text);
    }

    if let Some(chart) = &presentation.chart {
        out.push('\n');
        render_chart_table(&mut out, chart);
    }
    if let Some(reason) = &presentation.chart_omission {
        let _ = writeln!(out, "\nchart omitted: {}", reason);
    }

    out
}

/// One row per category; the current month's bar is marked with `*`.
fn render_chart_table(out: &mut String, chart: &ChartSeries) {
    let label_width = chart.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let headers: Vec<&str> = std::iter::once(chart.bars.label.as_str())
        .chain(chart.lines.iter().map(|l| l.label.as_str()))
        .collect();

    let _ = writeln!(out, "{} ({})", chart.title, chart.y_axis_title);
    let _ = write!(out, "{:label_width$}", "");
    for header in &headers {
        let _ = write!(out, "  {:>width$}", header, width = header.chars().count().max(10));
    }
    out.push('\n');

    for (i, label) in chart.labels.iter().enumerate() {
        let _ = write!(out, "{:label_width$}", label);

        let marker = if chart.bars.fills[i] == CURRENT_MONTH_FILL { "*" } else { " " };
        let bar = format!("{:.2}{}", chart.bars.values[i], marker);
        let _ = write!(out, "  {:>width$}", bar, width = headers[0].chars().count().max(10));

        for (line, header) in chart.lines.iter().zip(&headers[1..]) {
            let _ = write!(
                out,
                "  {:>width$.2}",
                line.values[i],
                width = header.chars().count().max(10)
            );
        }
        out.push('\n');
    }
}

pub fn render_json(presentation: &Presentation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(presentation)
}
