use dioxus::prelude::*;

mod views;

use ui::LoadingSpinner;
use views::{Dashboard, Login};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            server::init()?;

            Ok(dioxus::server::router(App))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Cosmos" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        SuspenseBoundary {
            fallback: |_| rsx! { LoadingSpinner {} },
            Router::<Route> {}
        }
    }
}
