//! The dashboard's reactive rules.
//!
//! Each rule is a pure function of the sales table and the current
//! [`DashboardState`]. Absent selections produce a hidden container or an
//! empty figure, never an error.

use crate::figure::{
    bar_title, pie_title, BarTrace, Figure, Layout, PieTrace, Trace, BAR_COLOR,
    BAR_X_AXIS_TITLE, BAR_Y_AXIS_TITLE, RETAIL_COLOR, SERVICE_COLOR,
};
use crate::state::{ClickData, DashboardState, Display};
use madeira_sales::{SaleType, SalesTable};

/// Bar container is shown iff a species is selected.
pub fn bar_visibility(state: &DashboardState) -> Display {
    Display::visible_if(state.species.is_some())
}

/// Summed volume per presentation for the selected species.
pub fn bar_chart(table: &SalesTable, state: &DashboardState) -> Figure {
    let Some(species) = state.species_name(table) else {
        return Figure::empty();
    };

    let volumes = table.volume_by_presentation(species);
    let (x, y): (Vec<String>, Vec<Option<f64>>) = volumes
        .into_iter()
        .map(|v| (v.presentation, v.volume))
        .unzip();

    Figure {
        data: vec![Trace::Bar(BarTrace {
            x,
            y,
            marker_color: BAR_COLOR.to_string(),
        })],
        layout: Layout {
            title: Some(bar_title(species)),
            xaxis_title: Some(BAR_X_AXIS_TITLE.to_string()),
            yaxis_title: Some(BAR_Y_AXIS_TITLE.to_string()),
        },
    }
}

/// Pie container is shown iff a bar has been clicked since the last reset.
pub fn pie_visibility(state: &DashboardState) -> Display {
    Display::visible_if(state.bar_click.is_some())
}

/// Any species change forgets the last bar click.
pub fn clear_bar_click(_state: &DashboardState) -> Option<ClickData> {
    None
}

/// Sale-type breakdown for the clicked presentation and selected species.
/// Always two slices, service first.
pub fn pie_chart(table: &SalesTable, state: &DashboardState) -> Figure {
    let (Some(click), Some(species)) = (state.bar_click.as_ref(), state.species_name(table))
    else {
        return Figure::empty();
    };

    let counts = table.sale_type_counts(&click.presentation, species);
    let colors = SaleType::ALL
        .iter()
        .map(|t| match t {
            SaleType::Service => SERVICE_COLOR.to_string(),
            SaleType::Retail => RETAIL_COLOR.to_string(),
        })
        .collect();

    Figure {
        data: vec![Trace::Pie(PieTrace {
            labels: SaleType::ALL.iter().map(|t| t.label().to_string()).collect(),
            values: counts.ordered().iter().map(|(_, n)| *n).collect(),
            colors,
        })],
        layout: Layout {
            title: Some(pie_title(&click.presentation, species)),
            ..Layout::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use madeira_sales::SalesRecord;

    fn oak_table() -> SalesTable {
        SalesTable::from_records(vec![
            SalesRecord::new("P1", "Oak", 10.0, SaleType::Service),
            SalesRecord::new("P1", "Oak", 5.0, SaleType::Retail),
            SalesRecord::new("P2", "Oak", 3.0, SaleType::Service),
            SalesRecord::new("P3", "Pine", 2.0, SaleType::Retail),
        ])
    }

    fn oak_clicked(presentation: &str) -> DashboardState {
        DashboardState {
            species: Some(0),
            bar_click: Some(ClickData::new(presentation)),
        }
    }

    #[test]
    fn bar_hidden_without_species() {
        assert_eq!(bar_visibility(&DashboardState::default()), Display::None);
        assert_eq!(bar_visibility(&DashboardState::with_species(0)), Display::Block);
    }

    #[test]
    fn bar_chart_empty_without_species() {
        let figure = bar_chart(&oak_table(), &DashboardState::default());
        assert!(figure.is_empty());
        assert_eq!(figure.layout, Layout::default());
    }

    #[test]
    fn bar_chart_sums_volume_over_full_axis() {
        let figure = bar_chart(&oak_table(), &DashboardState::with_species(0));
        let Trace::Bar(bar) = &figure.data[0] else {
            panic!("expected bar trace");
        };
        assert_eq!(bar.x, ["P1", "P2", "P3"]);
        assert_eq!(bar.y, [Some(15.0), Some(3.0), None]);
        assert_eq!(bar.marker_color, BAR_COLOR);
        assert_eq!(
            figure.layout.title.as_deref(),
            Some("Soma do Volume por Apresentação de Madeira (Oak)")
        );
        assert_eq!(figure.layout.xaxis_title.as_deref(), Some(BAR_X_AXIS_TITLE));
    }

    #[test]
    fn bar_chart_for_other_species_keeps_axis() {
        let figure = bar_chart(&oak_table(), &DashboardState::with_species(1));
        let Trace::Bar(bar) = &figure.data[0] else {
            panic!("expected bar trace");
        };
        assert_eq!(bar.x, ["P1", "P2", "P3"]);
        assert_eq!(bar.y, [None, None, Some(2.0)]);
    }

    #[test]
    fn pie_visibility_follows_click() {
        assert_eq!(pie_visibility(&DashboardState::with_species(0)), Display::None);
        assert_eq!(pie_visibility(&oak_clicked("P1")), Display::Block);
    }

    #[test]
    fn clear_always_resets() {
        assert_eq!(clear_bar_click(&oak_clicked("P1")), None);
        assert_eq!(clear_bar_click(&DashboardState::default()), None);
    }

    #[test]
    fn pie_chart_empty_without_click_or_species() {
        let table = oak_table();
        assert!(pie_chart(&table, &DashboardState::with_species(0)).is_empty());
        let no_species = DashboardState {
            species: None,
            bar_click: Some(ClickData::new("P1")),
        };
        assert!(pie_chart(&table, &no_species).is_empty());
    }

    #[test]
    fn pie_chart_counts_sale_types() {
        let figure = pie_chart(&oak_table(), &oak_clicked("P1"));
        let Trace::Pie(pie) = &figure.data[0] else {
            panic!("expected pie trace");
        };
        assert_eq!(pie.labels, ["Prestação de Serviços", "Varejo"]);
        assert_eq!(pie.values, [1, 1]);
        assert_eq!(pie.colors, [SERVICE_COLOR, RETAIL_COLOR]);
        assert_eq!(
            figure.layout.title.as_deref(),
            Some("Tipo de venda para - P1 (Oak)")
        );
    }

    #[test]
    fn pie_chart_keeps_both_slices_when_one_is_zero() {
        let figure = pie_chart(&oak_table(), &oak_clicked("P2"));
        let Trace::Pie(pie) = &figure.data[0] else {
            panic!("expected pie trace");
        };
        assert_eq!(pie.labels.len(), 2);
        assert_eq!(pie.values, [1, 0]);
    }

    #[test]
    fn rules_are_idempotent() {
        let table = oak_table();
        let state = oak_clicked("P1");
        let first = serde_json::to_string(&bar_chart(&table, &state)).unwrap();
        let second = serde_json::to_string(&bar_chart(&table, &state)).unwrap();
        assert_eq!(first, second);
        let first = serde_json::to_string(&pie_chart(&table, &state)).unwrap();
        let second = serde_json::to_string(&pie_chart(&table, &state)).unwrap();
        assert_eq!(first, second);
    }
}
