#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
use dioxus::desktop::Config;
use dioxus::prelude::*;

use ui::app::THEME_CSS_INLINE;
use ui::views::{Home, PageNotFound};
use ui::SiteProviders;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Spoonz – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1280.0, 860.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{THEME_CSS_INLINE}" }

        Router::<Route> {}
    }
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopShell() -> Element {
    rsx! {
        SiteProviders {
            Outlet::<Route> {}
        }
    }
}
