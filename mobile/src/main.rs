use dioxus::prelude::*;

use ui::app::THEME_CSS;
use ui::views::{Home, PageNotFound};
use ui::SiteProviders;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileShell)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        Router::<Route> {}
    }
}

#[component]
fn MobileShell() -> Element {
    rsx! {
        SiteProviders {
            Outlet::<Route> {}
        }
    }
}
