//! Chart figure specifications.
//!
//! Figures are plain serializable data handed to the D3.js renderers in
//! `assets/js/`. Field order is fixed and there are no maps, so serializing
//! the same figure twice always produces the same bytes.

use serde::Serialize;

pub const BAR_COLOR: &str = "#66B2FF";
pub const SERVICE_COLOR: &str = "#FF9999";
pub const RETAIL_COLOR: &str = "#99FF99";

pub const BAR_X_AXIS_TITLE: &str = "Apresentação de Madeira";
pub const BAR_Y_AXIS_TITLE: &str = "Soma do Volume";

pub fn bar_title(species: &str) -> String {
    format!("Soma do Volume por Apresentação de Madeira ({})", species)
}

pub fn pie_title(presentation: &str, species: &str) -> String {
    format!("Tipo de venda para - {} ({})", presentation, species)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// A figure with no traces. Rendered as a blank chart area.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Bar(BarTrace),
    Pie(PieTrace),
}

/// One bar per `x` label. A `None` height is serialized as `null` and drawn
/// as an empty slot on the axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    pub marker_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_figure_serializes_without_layout_fields() {
        let json = serde_json::to_string(&Figure::empty()).unwrap();
        assert_eq!(json, r#"{"data":[],"layout":{}}"#);
    }

    #[test]
    fn traces_are_tagged_by_type() {
        let trace = Trace::Bar(BarTrace {
            x: vec!["P1".into(), "P2".into()],
            y: vec![Some(1.5), None],
            marker_color: BAR_COLOR.into(),
        });
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["y"][1], serde_json::Value::Null);
    }

    #[test]
    fn titles_embed_names() {
        assert_eq!(
            bar_title("Ipê"),
            "Soma do Volume por Apresentação de Madeira (Ipê)"
        );
        assert_eq!(pie_title("Tora", "Ipê"), "Tipo de venda para - Tora (Ipê)");
    }
}
