mod api;
mod components;

use components::handlers;
use components::header::render_header;
use components::prediction_form::render_prediction_form;
use components::results::render_results;
use components::theme_toggle::render_theme_toggle;
use gloo_timers::callback::Timeout;
use shared::{Field, PredictionForm, PredictionResult, RequestError, Theme};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Form input
    FieldChanged(Field, String),
    Submit,

    // Prediction round-trip
    PredictionFinished(Result<PredictionResult, RequestError>),

    // UI states
    ClearValidationErrors(u32),
    ToggleTheme,
}

// Main component
pub struct Model {
    form: PredictionForm,
    theme: Theme,
    error_clear_timeout: Option<Timeout>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let theme = Theme::default();
        components::utils::apply_theme(theme);

        Self {
            form: PredictionForm::new(),
            theme,
            error_clear_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FieldChanged(field, raw) => handlers::handle_field_changed(self, field, raw),
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::PredictionFinished(outcome) => handlers::handle_prediction_finished(self, outcome),
            Msg::ClearValidationErrors(generation) => {
                handlers::handle_clear_validation_errors(self, generation)
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }
                <div class="top-right">
                    { render_theme_toggle(self.theme, ctx.link()) }
                </div>

                <main class="main-content">
                    { render_prediction_form(self, ctx) }
                    { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Diabetes Risk Predictor | Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
