use super::super::Model;
use super::super::Msg;
use shared::Field;
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_prediction_form(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="form-container">
            <form id="prediction-form" class="prediction-form" novalidate=true onsubmit={handle_submit}>
                <div class="form-grid">
                    { for Field::iter().map(|field| render_field(model, link, field)) }
                </div>
                <button
                    id="predict-btn"
                    class="predict-btn"
                    type="submit"
                    disabled={model.form.is_submitting()}
                >
                    { render_submit_button_content(model) }
                </button>
            </form>
        </div>
    }
}

fn render_field(model: &Model, link: &Scope<Model>, field: Field) -> Html {
    let bounds = field.bounds();
    let handle_input = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(field, input.value())
    });

    html! {
        <div class="form-group" key={field.form_name()}>
            <label for={field.form_name()}>{ field.label() }</label>
            <input
                type="number"
                id={field.form_name()}
                name={field.form_name()}
                class={classes!(model.form.field_status(field).css_class())}
                min={bounds.min.to_string()}
                max={bounds.max.to_string()}
                step={field.step()}
                value={model.form.value(field).to_string()}
                oninput={handle_input}
            />
            {
                if let Some(error) = model.form.error_for(field) {
                    html! { <div class="error-message">{ error.message() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_submit_button_content(model: &Model) -> Html {
    if model.form.is_submitting() {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i><span>{" Processing..."}</span></> }
    } else {
        html! { <><i class="fa-solid fa-brain"></i><span>{" Predict Risk"}</span></> }
    }
}
