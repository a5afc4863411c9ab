use super::super::{Model, Msg};
use shared::{CrashField, FieldKind};
use strum::IntoEnumIterator;
use yew::prelude::*;

pub fn render_crash_form(model: &Model, ctx: &Context<Model>) -> Html {
    let onsubmit = ctx.link().callback(Msg::Submit);

    html! {
        <form id={model.config.ids.form} class="crash-form" {onsubmit}>
            <div class="form-grid">
                { for CrashField::iter().map(|field| render_field(model, field)) }
            </div>
            <button type="submit" class="predict-btn">
                <i class="fa-solid fa-magnifying-glass"></i>{" Predict Severity"}
            </button>
        </form>
    }
}

fn render_field(model: &Model, field: CrashField) -> Html {
    let id = field.element_id();
    let node_ref = model.config.bindings.node_ref(field);

    // No `required` or bounds: the form never blocks a submission.
    let control = match field.kind() {
        FieldKind::Numeric => html! {
            <input type="number" step="any" {id} name={id} ref={node_ref} />
        },
        FieldKind::Categorical => html! {
            <select {id} name={id} ref={node_ref}>
                { for field.options().iter().map(|option| html! {
                    <option value={*option}>{ *option }</option>
                })}
            </select>
        },
    };

    html! {
        <div class="form-field" key={id}>
            <label for={id}>{ field.label() }</label>
            { control }
        </div>
    }
}
