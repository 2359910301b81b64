use chrono::Local;
use shared::fetch::fetch_week;
use shared::summary::SummaryState;
use yew::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::components::summary_table::SummaryTable;
use crate::services::api::GlooCalendarApi;

#[function_component(CalendarSummary)]
pub fn calendar_summary() -> Html {
    let state = use_state(SummaryState::default);

    // Fetch once on mount. In-flight requests are not cancelled on unmount.
    {
        let state = state.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = GlooCalendarApi::from_build_env();
                tracing::debug!(?api, "Loading weekly calendar summary");
                let result = fetch_week(&api, &Local::now()).await;
                state.set(SummaryState::from_fetch(result));
            });
            || ()
        });
    }

    html! {
        <div class="calendar-summary">
            <h2>{ "Calendar summary" }</h2>
            {match state.summary() {
                None => html! { <LoadingSpinner /> },
                Some(summary) => html! { <SummaryTable {summary} /> },
            }}
        </div>
    }
}
