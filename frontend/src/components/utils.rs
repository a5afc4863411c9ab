use super::super::Model;
use yew::prelude::*;

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = model.display.error() {
        html! {
            <div id={model.config.ids.error} class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
