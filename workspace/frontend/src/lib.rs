use yew::prelude::*;

mod components;
pub mod api_client;
pub mod settings;
pub mod shared;

use components::detection_page::DetectionPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="min-h-screen bg-base-200 py-8">
            <DetectionPage />
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Anomalia Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Detection endpoint: {}", settings.endpoint);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
