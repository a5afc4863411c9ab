use super::super::{Model, Msg};
use crate::api::{PredictionError, request_prediction};
use shared::{CrashFeatureRecord, PredictionResult};
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;
use yew::prelude::*;

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>, event: SubmitEvent) -> bool {
    event.prevent_default();

    let bindings = &model.config.bindings;
    let record = CrashFeatureRecord::from_lookup(|field| bindings.read(field));
    let seq = model.display.begin_submission();

    log::info!("Submitting crash scenario #{} to {}", seq, model.config.endpoint);
    send_prediction_request(ctx, model.config.endpoint.clone(), seq, record);

    true
}

pub fn send_prediction_request(
    ctx: &Context<Model>,
    endpoint: String,
    seq: u64,
    record: CrashFeatureRecord,
) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            if let Ok(payload) = serde_json::to_string(&record) {
                gloo_console::debug!(format!("Request #{} payload:", seq), payload);
            }

            match request_prediction(&endpoint, &record).await {
                Ok(result) => link.send_message(Msg::PredictionReceived(seq, result)),
                Err(e) => {
                    log::error!("Prediction #{} failed: {}", seq, e);
                    link.send_message(Msg::PredictionFailed(seq, e))
                }
            }
        }
    });
}

pub fn handle_prediction_received(model: &mut Model, seq: u64, result: PredictionResult) -> bool {
    log::info!(
        "Prediction #{}: {} / {}",
        seq,
        shared::display_value(&result.prediction),
        shared::display_value(&result.confidence)
    );
    model.display.apply::<PredictionError>(seq, Ok(result))
}

pub fn handle_prediction_failed(model: &mut Model, seq: u64, error: PredictionError) -> bool {
    model.display.apply(seq, Err::<PredictionResult, _>(error))
}

pub fn handle_dismiss_popup(model: &mut Model) -> bool {
    model.display.dismiss()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::super::super::Model;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit};

    #[wasm_bindgen_test]
    async fn submitting_the_form_prevents_navigation() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let _app = yew::Renderer::<Model>::with_root(root).render();
        TimeoutFuture::new(10).await;

        let form = document.get_element_by_id("predictForm").unwrap();
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("submit", &init).unwrap();

        let not_cancelled = form.dispatch_event(&event).unwrap();
        assert!(!not_cancelled);
        assert!(event.default_prevented());
    }
}
