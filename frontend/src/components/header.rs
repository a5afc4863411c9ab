use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-car-burst"></i> {" Crash Severity Prediction"}</h1>
            <p class="subtitle">{"Describe the crash scenario and submit it for a severity estimate"}</p>
        </header>
    }
}
