//! Explicit callback graph wiring UI inputs to rule outputs.
//!
//! Every callback names the output it produces and the inputs it listens
//! to. A callback whose output is also an input (the click reset writes the
//! bar-click state) is ordered before every callback reading that input, so
//! a single pass in graph order settles all outputs for an event.

use crate::figure::Figure;
use crate::rules;
use crate::state::{ClickData, DashboardError, DashboardState, Display};
use log::debug;
use madeira_sales::SalesTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Input {
    SpeciesDropdown,
    BarClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Output {
    BarContainerStyle,
    BarFigure,
    PieContainerStyle,
    BarClickData,
    PieFigure,
}

impl Output {
    /// The input this output feeds back into, if any.
    pub fn feeds(&self) -> Option<Input> {
        match self {
            Output::BarClickData => Some(Input::BarClick),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OutputValue {
    Display(Display),
    Figure(Figure),
    ClickData(Option<ClickData>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputUpdate {
    pub target: Output,
    #[serde(flatten)]
    pub value: OutputValue,
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Event {
    SelectSpecies(Option<usize>),
    ClickBar(Option<ClickData>),
}

impl Event {
    pub fn input(&self) -> Input {
        match self {
            Event::SelectSpecies(_) => Input::SpeciesDropdown,
            Event::ClickBar(_) => Input::BarClick,
        }
    }

    fn apply(self, state: &mut DashboardState) {
        match self {
            Event::SelectSpecies(species) => state.species = species,
            Event::ClickBar(click) => state.bar_click = click,
        }
    }
}

pub type Rule = fn(&SalesTable, &DashboardState) -> OutputValue;

#[derive(Clone)]
pub struct Callback {
    pub name: &'static str,
    pub output: Output,
    pub inputs: &'static [Input],
    pub rule: Rule,
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("name", &self.name)
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

/// Result of running the graph for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dispatch {
    pub state: DashboardState,
    pub updates: Vec<OutputUpdate>,
}

#[derive(Debug, Clone)]
pub struct CallbackGraph {
    callbacks: Vec<Callback>,
}

/// Feed a rule's result back into the state when its output is an input.
fn write_back(state: &mut DashboardState, output: Output, value: &OutputValue) -> Option<Input> {
    let input = output.feeds()?;
    match (input, value) {
        (Input::BarClick, OutputValue::ClickData(click)) => state.bar_click = click.clone(),
        _ => return None,
    }
    Some(input)
}

impl CallbackGraph {
    /// Order `callbacks` so writers run before readers.
    ///
    /// Declaration order is kept wherever the graph allows it. A callback
    /// that feeds one of its own inputs is a cycle.
    pub fn new(callbacks: Vec<Callback>) -> Result<Self, DashboardError> {
        let n = callbacks.len();
        let depends_on = |reader: usize, writer: usize| {
            callbacks[writer]
                .output
                .feeds()
                .is_some_and(|input| callbacks[reader].inputs.contains(&input))
        };

        let mut placed = vec![false; n];
        let mut order = Vec::with_capacity(n);
        while order.len() < n {
            let next = (0..n).find(|&i| {
                !placed[i] && (0..n).all(|w| placed[w] || !depends_on(i, w))
            });
            match next {
                Some(i) => {
                    placed[i] = true;
                    order.push(i);
                }
                None => {
                    let stuck: Vec<&str> = (0..n)
                        .filter(|&i| !placed[i])
                        .map(|i| callbacks[i].name)
                        .collect();
                    return Err(DashboardError::CallbackCycle(stuck.join(", ")));
                }
            }
        }

        let mut slots: Vec<Option<Callback>> = callbacks.into_iter().map(Some).collect();
        let callbacks = order
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect();
        Ok(Self { callbacks })
    }

    /// The dashboard's five callbacks.
    pub fn dashboard() -> Result<Self, DashboardError> {
        Self::new(vec![
            Callback {
                name: "bar_visibility",
                output: Output::BarContainerStyle,
                inputs: &[Input::SpeciesDropdown],
                rule: |_, state| OutputValue::Display(rules::bar_visibility(state)),
            },
            Callback {
                name: "bar_chart",
                output: Output::BarFigure,
                inputs: &[Input::SpeciesDropdown],
                rule: |table, state| OutputValue::Figure(rules::bar_chart(table, state)),
            },
            Callback {
                name: "pie_visibility",
                output: Output::PieContainerStyle,
                inputs: &[Input::BarClick],
                rule: |_, state| OutputValue::Display(rules::pie_visibility(state)),
            },
            Callback {
                name: "clear_bar_click",
                output: Output::BarClickData,
                inputs: &[Input::SpeciesDropdown],
                rule: |_, state| OutputValue::ClickData(rules::clear_bar_click(state)),
            },
            Callback {
                name: "pie_chart",
                output: Output::PieFigure,
                inputs: &[Input::BarClick, Input::SpeciesDropdown],
                rule: |table, state| OutputValue::Figure(rules::pie_chart(table, state)),
            },
        ])
    }

    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    /// Apply `event` and recompute every output downstream of it.
    pub fn dispatch(
        &self,
        table: &SalesTable,
        mut state: DashboardState,
        event: Event,
    ) -> Result<Dispatch, DashboardError> {
        let input = event.input();
        event.apply(&mut state);
        state.validate(table)?;
        debug!("dispatch {:?} with state {:?}", input, state);
        Ok(self.run(table, state, BTreeSet::from([input])))
    }

    /// Run every callback once, as on page load.
    pub fn initial(
        &self,
        table: &SalesTable,
        state: DashboardState,
    ) -> Result<Dispatch, DashboardError> {
        state.validate(table)?;
        Ok(self.run(
            table,
            state,
            BTreeSet::from([Input::SpeciesDropdown, Input::BarClick]),
        ))
    }

    fn run(
        &self,
        table: &SalesTable,
        mut state: DashboardState,
        mut changed: BTreeSet<Input>,
    ) -> Dispatch {
        let mut updates = Vec::new();
        for callback in &self.callbacks {
            if !callback.inputs.iter().any(|i| changed.contains(i)) {
                continue;
            }
            let value = (callback.rule)(table, &state);
            if let Some(input) = write_back(&mut state, callback.output, &value) {
                changed.insert(input);
            }
            debug!("callback {} -> {:?}", callback.name, callback.output);
            updates.push(OutputUpdate {
                target: callback.output,
                value,
            });
        }
        Dispatch { state, updates }
    }
}
