use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-heart-pulse"></i> {" Diabetes Risk Predictor"}</h1>
            <p class="subtitle">{"Enter your health information to predict diabetes risk"}</p>
        </header>
    }
}
