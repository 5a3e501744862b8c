//! Result export — plain text, Markdown, CSV and JSON renderings.
//!
//! All formats take the name-sorted result list, so the same selection
//! always renders to the same bytes.

use serde::{Deserialize, Serialize};

use crate::aggregate::CalculatedResult;

pub const EXPORT_TITLE: &str = "ARK: Primal Descended Calculator Results";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Markdown,
    Csv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [Self::Text, Self::Markdown, Self::Csv, Self::Json];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Parse a format name; unrecognised names yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "markdown" | "md" => Some(Self::Markdown),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub fn render(results: &[CalculatedResult], format: ExportFormat) -> String {
    match format {
        ExportFormat::Text => render_text(results),
        ExportFormat::Markdown => render_markdown(results),
        ExportFormat::Csv => render_csv(results),
        ExportFormat::Json => render_json(results),
    }
}

fn render_text(results: &[CalculatedResult]) -> String {
    let mut text = format!("{}\n{}\n\n", EXPORT_TITLE, "=".repeat(50));
    for r in results {
        text.push_str(&format!("{}: {}\n", r.item, r.quantity));
    }
    text
}

fn render_markdown(results: &[CalculatedResult]) -> String {
    let mut md = format!("# {}\n\n| Item | Quantity |\n|------|----------|\n", EXPORT_TITLE);
    for r in results {
        md.push_str(&format!("| {} | {} |\n", r.item.replace('|', "\\|"), r.quantity));
    }
    md
}

fn render_csv(results: &[CalculatedResult]) -> String {
    let mut csv = String::from("Item,Quantity\n");
    for r in results {
        csv.push_str(&format!("\"{}\",{}\n", r.item.replace('"', "\"\""), r.quantity));
    }
    csv
}

fn render_json(results: &[CalculatedResult]) -> String {
    // A Vec of plain structs cannot fail to serialize
    serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<CalculatedResult> {
        vec![
            CalculatedResult {
                item: "Artefact".into(),
                quantity: 4,
                icon: "/icons/artefact.png".into(),
            },
            CalculatedResult {
                item: "Black \"Big\" Pearl".into(),
                quantity: 1000,
                icon: "/icons/black_pearl.png".into(),
            },
        ]
    }

    #[test]
    fn test_text() {
        let text = render(&results(), ExportFormat::Text);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], EXPORT_TITLE);
        assert_eq!(lines[1].len(), 50);
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Artefact: 4");
    }

    #[test]
    fn test_markdown() {
        let md = render(&results(), ExportFormat::Markdown);
        assert!(md.starts_with("# "));
        assert!(md.contains("| Item | Quantity |\n|------|----------|\n"));
        assert!(md.contains("| Artefact | 4 |\n"));
    }

    #[test]
    fn test_csv_quotes() {
        let csv = render(&results(), ExportFormat::Csv);
        assert_eq!(
            csv,
            "Item,Quantity\n\"Artefact\",4\n\"Black \"\"Big\"\" Pearl\",1000\n"
        );
    }

    #[test]
    fn test_json_parses_back() {
        let json = render(&results(), ExportFormat::Json);
        let back: Vec<CalculatedResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, results());
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(render(&[], ExportFormat::Csv), "Item,Quantity\n");
        assert_eq!(render(&[], ExportFormat::Json), "[]");
    }

    #[test]
    fn test_format_ids() {
        for f in ExportFormat::ALL {
            assert_eq!(ExportFormat::from_id(f.id()), Some(f));
        }
        assert_eq!(ExportFormat::from_id("MD"), Some(ExportFormat::Markdown));
        assert_eq!(ExportFormat::from_id("pdf"), None);
    }
}
