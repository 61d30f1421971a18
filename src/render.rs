//! HTML rendering of result tables with a closed set of color themes.
//!
//! Rendering is a cosmetic collaborator layered on top of the plain
//! [`ResultTable`]: it decides borders, fonts, and the accent color,
//! nothing about the numbers. The theme set is a fixed enum; an
//! unrecognized theme name is reported with the valid names, never
//! silently substituted.

use crate::error::SummaryError;
use crate::table::ResultTable;
use std::fmt;

/// A named visual theme.
///
/// Themes differ only in the accent color used for headers and the
/// caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Grey accent.
    #[default]
    Standard,
    /// Light coral accent.
    Pink,
    /// Medium sea green accent.
    Green,
    /// Light sea green accent.
    Blue,
}

impl Theme {
    /// Valid theme names, in parse order.
    pub const NAMES: [&'static str; 4] = ["standard", "pink", "green", "blue"];

    /// Parses a theme name.
    ///
    /// # Errors
    ///
    /// [`SummaryError::UnknownTheme`] for any name outside
    /// [`Theme::NAMES`]; the message lists the valid names.
    pub fn parse(name: &str) -> Result<Self, SummaryError> {
        match name {
            "standard" => Ok(Self::Standard),
            "pink" => Ok(Self::Pink),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            _ => Err(SummaryError::UnknownTheme {
                name: name.to_string(),
                valid: Self::NAMES.join(", "),
            }),
        }
    }

    /// Accent color for headers and the caption.
    pub fn accent(self) -> &'static str {
        match self {
            Self::Standard => "grey",
            Self::Pink => "#F08080",
            Self::Green => "#3CB371",
            Self::Blue => "#20B2AA",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standard => "standard",
            Self::Pink => "pink",
            Self::Green => "green",
            Self::Blue => "blue",
        };
        write!(f, "{name}")
    }
}

/// Renders a result table as a self-contained styled HTML fragment.
///
/// The layout mirrors the table structure: a caption, a two-row header
/// (group labels spanning their statistics, then statistic names), and
/// one body row per row key. Continuous tables get a single "Features"
/// label column; categorical tables get "FEATURES" and "VALUES"
/// columns. The core never depends on this function succeeding; it is
/// infallible by construction once the theme exists.
pub fn render_html(table: &ResultTable, theme: Theme) -> String {
    let accent = theme.accent();
    let has_values = table.rows.iter().any(|r| r.value.is_some());
    let label_cols = if has_values { 2 } else { 1 };

    let mut html = String::new();
    html.push_str("<style>\n");
    html.push_str(".tabsum { border-collapse: collapse; border: 0.02px solid silver; font-family: Verdana; }\n");
    html.push_str(".tabsum th, .tabsum td { border: 0.054px solid silver; padding: 4px; text-align: center; }\n");
    html.push_str(&format!(
        ".tabsum th {{ font-weight: normal; color: {accent}; }}\n"
    ));
    html.push_str(".tabsum td { color: grey; }\n");
    html.push_str(".tabsum tr:hover td { background-color: silver; }\n");
    html.push_str(&format!(
        ".tabsum caption {{ font-weight: bold; color: {accent}; text-align: center; font-size: 16px; }}\n"
    ));
    html.push_str("</style>\n");

    html.push_str("<table class=\"tabsum\">\n");
    html.push_str(&format!("<caption>{}</caption>\n", escape(&table.caption)));

    // Header row 1: group labels spanning their statistics.
    html.push_str("<tr>");
    html.push_str(&format!("<th colspan=\"{label_cols}\"></th>"));
    let mut i = 0;
    while i < table.columns.len() {
        let group = &table.columns[i].group;
        let span = table.columns[i..]
            .iter()
            .take_while(|k| &k.group == group)
            .count();
        html.push_str(&format!(
            "<th colspan=\"{span}\">{}</th>",
            escape(group)
        ));
        i += span;
    }
    html.push_str("</tr>\n");

    // Header row 2: statistic names.
    html.push_str("<tr>");
    if has_values {
        html.push_str("<th>FEATURES</th><th>VALUES</th>");
    } else {
        html.push_str("<th>Features</th>");
    }
    for key in &table.columns {
        html.push_str(&format!("<th>{}</th>", escape(&key.statistic)));
    }
    html.push_str("</tr>\n");

    // Body rows.
    for (key, row) in table.rows.iter().zip(&table.cells) {
        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", escape(&key.feature)));
        if has_values {
            html.push_str(&format!(
                "<td>{}</td>",
                escape(key.value.as_deref().unwrap_or(""))
            ));
        }
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape(&cell.to_string())));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
