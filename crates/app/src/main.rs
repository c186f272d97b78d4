use tracing::Level;

fn main() {
    let config = portal::portal_config();
    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {e}");
    }

    dioxus::launch(portal::App);
}
