mod api;
mod components;
mod config;

use api::PredictionError;
use components::crash_form::render_crash_form;
use components::handlers;
use components::header::render_header;
use components::popup::render_popup;
use components::utils::render_error_message;
use config::AppConfig;
use shared::{PredictionDisplay, PredictionResult};
use web_sys::SubmitEvent;
use yew::prelude::*;

// Yew msg components
enum Msg {
    // Form
    Submit(SubmitEvent),

    // Prediction outcomes, tagged with the submission sequence number
    PredictionReceived(u64, PredictionResult),
    PredictionFailed(u64, PredictionError),

    // Popup
    DismissPopup,
}

// Main component
struct Model {
    config: AppConfig,
    display: PredictionDisplay,
}

impl Model {
    fn with_config(config: AppConfig) -> Self {
        let display = PredictionDisplay::new(config.policy);
        Self { config, display }
    }
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let model = Self::with_config(AppConfig::from_env());
        log::info!(
            "Prediction endpoint: {} (render policy: {})",
            model.config.endpoint,
            model.display.policy()
        );
        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit(event) => handlers::handle_submit(self, ctx, event),
            Msg::PredictionReceived(seq, result) => {
                handlers::handle_prediction_received(self, seq, result)
            }
            Msg::PredictionFailed(seq, error) => {
                handlers::handle_prediction_failed(self, seq, error)
            }
            Msg::DismissPopup => handlers::handle_dismiss_popup(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_crash_form(self, ctx) }
                    { render_error_message(self) }
                </main>

                { render_popup(self, ctx) }

                <footer class="app-footer">
                    <p>{"Crash Severity Prediction | Rust WASM"}</p>
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
