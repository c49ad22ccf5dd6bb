use super::super::Model;
use shared::render_state;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    if model.form.is_submitting() {
        return html! {
            <div id="loader" class="loader">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Analyzing your health data..."}</p>
            </div>
        };
    }

    let Some(view) = render_state(model.form.state()) else {
        return html! {};
    };

    html! {
        <div id="result-container" class="result-container">
            <div class={classes!("result-card", view.tone.css_class())}>
                <h3>{"Prediction Result"}</h3>
                <div class={classes!("prediction-result", view.tone.css_class())}>
                    <div class="result-icon">
                        <i class={ view.tone.icon() }></i>
                    </div>
                    <div class="result-text">
                        <h4>{ view.title }</h4>
                        <p>{ view.message }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
