use dioxus::prelude::*;
use lectern::components::App as LecternApp;

const MAIN_CSS: Asset = asset!("/assets/lectern.css");

fn main() {
    // Cross-platform logger (web console + desktop stdout)
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Lectern")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1000.0, 800.0)),
        );

        dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // CSS loading: asset! macro has issues on desktop, use include_str! as workaround
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/lectern.css")} }
        }

        body { class: "lt-body",
            LecternApp {}
        }
    }
}
