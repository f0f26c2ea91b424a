//! Date range picker bounded by the dataset's first and last day.

use crate::state::{constrain_date, AppState};
use dioxus::prelude::*;

/// Start and end date inputs. Picks outside the dataset bounds are clamped
/// back into range; an inverted pair is left for the filter to reject.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let min = (state.min_date)();
    let max = (state.max_date)();

    let on_start_change = move |evt: Event<FormData>| {
        let value = constrain_date(&evt.value(), &(state.min_date)(), &(state.max_date)());
        state.start_date.set(value);
    };

    let on_end_change = move |evt: Event<FormData>| {
        let value = constrain_date(&evt.value(), &(state.min_date)(), &(state.max_date)());
        state.end_date.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            label {
                style: "font-weight: bold;",
                "Start date: "
                input {
                    r#type: "date",
                    min: "{min}",
                    max: "{max}",
                    value: "{start}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "End date: "
                input {
                    r#type: "date",
                    min: "{min}",
                    max: "{max}",
                    value: "{end}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
