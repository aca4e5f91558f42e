use crate::constants::{CHART_X_TITLE, CHART_Y_TITLE};
use crate::models::chart::{Axis, AxisTitle, Font, Legend, Margin};
use crate::models::{Layout, Theme};

/// Colors for one theme
struct Palette {
    background: &'static str,
    text: &'static str,
    grid: &'static str,
    line: &'static str,
    legend_bg: &'static str,
    colorway: &'static [&'static str],
}

const DARK: Palette = Palette {
    background: "#151518",
    text: "#FFFFFF",
    grid: "#2A2A2E",
    line: "#4A4A50",
    legend_bg: "rgba(0,0,0,0)",
    colorway: &[
        "#ffed00", "#ef7d00", "#e4003a", "#c13246", "#822661", "#48277c", "#005ca9", "#00aaff",
        "#9b30d9", "#af005f",
    ],
};

const LIGHT: Palette = Palette {
    background: "#FFFFFF",
    text: "#1A1A1A",
    grid: "#E5E5E5",
    line: "#C8C8C8",
    legend_bg: "rgba(255,255,255,0)",
    colorway: &[
        "#254495", "#c13246", "#e4003a", "#ef7d00", "#ffed00", "#822661", "#48277c", "#005ca9",
        "#00aaff", "#9b30d9",
    ],
};

fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

fn axis(title: &str, p: &Palette) -> Axis {
    Axis {
        title: AxisTitle {
            text: title.to_string(),
        },
        gridcolor: p.grid,
        linecolor: p.line,
        zeroline: false,
        showgrid: true,
    }
}

/// Base layout of a themed line chart with the given axis titles
pub fn base_layout(x_title: &str, y_title: &str, theme: Theme) -> Layout {
    let p = palette(theme);
    let font = Font {
        family: "Arial, sans-serif",
        size: 12,
        color: p.text,
    };

    Layout {
        paper_bgcolor: p.background,
        plot_bgcolor: p.background,
        font: font.clone(),
        colorway: p.colorway,
        xaxis: axis(x_title, p),
        yaxis: axis(y_title, p),
        legend: Legend {
            orientation: "h",
            x: 0.0,
            y: 1.02,
            xanchor: "left",
            yanchor: "bottom",
            bgcolor: p.legend_bg,
            font,
        },
        margin: Margin { l: 40, r: 20, t: 30, b: 40 },
        hovermode: "x unified",
        autosize: true,
    }
}

/// Layout of the normalized performance chart
pub fn performance_layout(theme: Theme) -> Layout {
    base_layout(CHART_X_TITLE, CHART_Y_TITLE, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_layout_titles() {
        let layout = performance_layout(Theme::Dark);
        assert_eq!(layout.xaxis.title.text, "Date");
        assert_eq!(layout.yaxis.title.text, "Normalized Price (Base=100)");
    }

    #[test]
    fn test_themes_differ() {
        let dark = performance_layout(Theme::Dark);
        let light = performance_layout(Theme::Light);
        assert_ne!(dark.paper_bgcolor, light.paper_bgcolor);
        assert_ne!(dark.font.color, light.font.color);
    }
}
