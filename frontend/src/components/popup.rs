use super::super::{Model, Msg};
use yew::prelude::*;

pub fn render_popup(model: &Model, ctx: &Context<Model>) -> Html {
    let ids = &model.config.ids;
    let style = if model.display.popup_visible() {
        "display: block;"
    } else {
        "display: none;"
    };

    html! {
        <div id={ids.popup} class="popup" {style}>
            <div class="popup-content">
                <span
                    id={ids.close}
                    class="close-btn"
                    title="Close"
                    onclick={ctx.link().callback(|_: MouseEvent| Msg::DismissPopup)}
                >
                    {"×"}
                </span>
                <h2>{"Prediction Result"}</h2>
                <p id={ids.result}>{ model.display.result_text() }</p>
                <p id={ids.confidence}>{ model.display.confidence_text() }</p>
            </div>
        </div>
    }
}
