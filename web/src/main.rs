use dioxus::prelude::*;

use ui::app::THEME_CSS;
use ui::views::{Home, PageNotFound};
use ui::SiteProviders;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Spoonz Rolled Ice Cream · Gulf Shores" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: THEME_CSS }

        Router::<Route> {}
    }
}

/// Web layout: shared providers around the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        SiteProviders {
            Outlet::<Route> {}
        }
    }
}
