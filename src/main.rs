use log::{info, Level};
use smartflow_site::App;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting SmartFlow site");
    yew::Renderer::<App>::new().render();
}
