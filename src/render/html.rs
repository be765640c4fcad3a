//! Standalone HTML export.
//!
//! The page embeds the rendered SVG inline plus the normalized task table as
//! a JSON payload, so the exported file is self-contained and the underlying
//! data stays inspectable.

use super::figure::TimelineFigure;

/// Assemble the export page around an already-rendered SVG.
pub fn page(figure: &TimelineFigure, svg: &str) -> String {
    let data = serde_json::to_string_pretty(&figure.rows)
        .unwrap_or_else(|_| "[]".to_string())
        // Keep the payload from terminating its own <script> element.
        .replace("</", "<\\/");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ margin: 0; padding: 24px; background: #f5f6f8; font-family: sans-serif; }}
  .chart {{ background: #ffffff; padding: 12px; border-radius: 6px;
            box-shadow: 0 1px 4px rgba(0, 0, 0, 0.12); max-width: fit-content; }}
  .chart svg {{ display: block; max-width: 100%; height: auto; }}
</style>
</head>
<body>
<div class="chart">
{svg}
</div>
<script id="schedule-data" type="application/json">
{data}
</script>
</body>
</html>
"#,
        title = escape(&figure.title),
        svg = svg,
        data = data,
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::document::{normalize, ScheduleDocument};
    use crate::model::ChartConfig;
    use crate::render::figure::GroupBy;
    use crate::render::theme::ThemeCapability;

    fn sample_figure() -> TimelineFigure {
        let document: ScheduleDocument = serde_yaml::from_str(
            "tasks:\n  - name: Draft\n    start: 2024-01-01\n    finish: 2024-01-08\n",
        )
        .unwrap();
        let rows = normalize(&document.tasks);
        TimelineFigure::build(
            "Launch <Plan>",
            rows,
            &ChartConfig::default(),
            GroupBy::Task,
            ThemeCapability::detect(),
        )
        .unwrap()
    }

    #[test]
    fn page_embeds_svg_and_data() {
        let figure = sample_figure();
        let page = page(&figure, "<svg>stub</svg>");
        assert!(page.contains("<svg>stub</svg>"));
        assert!(page.contains(r#"type="application/json""#));
        assert!(page.contains("\"Draft\""));
        assert!(page.contains("\"duration_label\": \"7 days\""));
    }

    #[test]
    fn title_is_escaped() {
        let figure = sample_figure();
        let page = page(&figure, "<svg/>");
        assert!(page.contains("<title>Launch &lt;Plan&gt;</title>"));
    }
}
