mod components;
mod services;

use yew::prelude::*;

use crate::components::calendar_summary::CalendarSummary;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div id="app" class="container">
            <CalendarSummary />
        </div>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
