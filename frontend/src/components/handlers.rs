use super::super::Model;
use super::super::Msg;
use super::utils::{apply_theme, scroll_into_view};
use crate::api::GlooTransport;
use gloo_timers::callback::Timeout;
use shared::{
    Field, PredictionRequest, PredictionResult, RequestError, SubmitBlocked,
    VALIDATION_ERROR_DISPLAY_MS, submit,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_field_changed(model: &mut Model, field: Field, raw: String) -> bool {
    model.form.set_value(field, raw);
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.form.prepare_submission() {
        Ok(request) => {
            send_prediction_request(ctx, request);
            true
        }
        Err(SubmitBlocked::InFlight) => false,
        Err(SubmitBlocked::Invalid(count)) => {
            log::info!("Submission blocked by {} invalid field(s)", count);
            schedule_error_clear(model, ctx);
            true
        }
    }
}

pub fn handle_prediction_finished(
    model: &mut Model,
    outcome: Result<PredictionResult, RequestError>,
) -> bool {
    match &outcome {
        Ok(result) => log::info!("Prediction finished: {}", result),
        Err(e) => log::error!("Prediction failed: {}", e),
    }

    if !model.form.complete(outcome) {
        return false;
    }

    // Let the result card render before scrolling to it
    Timeout::new(0, || scroll_into_view("result-container")).forget();
    true
}

pub fn handle_clear_validation_errors(model: &mut Model, generation: u32) -> bool {
    model.error_clear_timeout = None;
    model.form.clear_errors(generation)
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = model.theme.toggled();
    apply_theme(model.theme);
    true
}

fn schedule_error_clear(model: &mut Model, ctx: &Context<Model>) {
    let generation = model.form.error_generation();
    let link = ctx.link().clone();

    // Replacing the handle drops, and so cancels, the previous timer
    model.error_clear_timeout = Some(Timeout::new(VALIDATION_ERROR_DISPLAY_MS, move || {
        link.send_message(Msg::ClearValidationErrors(generation));
    }));
}

pub fn send_prediction_request(ctx: &Context<Model>, request: PredictionRequest) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = submit(&GlooTransport::default(), &request).await;
            link.send_message(Msg::PredictionFinished(outcome));
        }
    });
}
