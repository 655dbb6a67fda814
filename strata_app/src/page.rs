// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host page output.
//!
//! The embedding contract is two fixed container elements (one for the
//! chart SVG, one for the range-slider SVG) whose children the renderer
//! exclusively owns. This writer produces a self-contained page honoring
//! that contract.

/// Container element id owned by the chart renderer.
pub const CHART_CONTAINER_ID: &str = "chart-container";
/// Container element id owned by the slider renderer.
pub const SLIDER_CONTAINER_ID: &str = "slider-range";

/// Renders a standalone HTML page embedding the chart and slider SVGs.
pub fn render_page(title: &str, chart_svg: &str, slider_svg: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(
        "<style>\nbody { margin: 2rem; font-family: sans-serif; }\n\
         #chart-container, #slider-range { width: 100%; }\n</style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    out.push_str(&format!("<div id=\"{CHART_CONTAINER_ID}\">\n"));
    out.push_str(chart_svg);
    out.push_str("</div>\n");
    out.push_str(&format!("<div id=\"{SLIDER_CONTAINER_ID}\">\n"));
    out.push_str(slider_svg);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_both_containers_and_the_svgs() {
        let page = render_page("Chart & Friends", "<svg>c</svg>", "<svg>s</svg>");
        assert!(page.contains(r#"<div id="chart-container">"#));
        assert!(page.contains(r#"<div id="slider-range">"#));
        assert!(page.contains("<svg>c</svg>"));
        assert!(page.contains("<svg>s</svg>"));
        assert!(page.contains("Chart &amp; Friends"));
    }
}
