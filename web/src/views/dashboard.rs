use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "dashboard",
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                p { class: "page-subtitle", "You're signed in." }
            }
            Link {
                to: Route::Login {},
                class: "dashboard-link",
                "Back to sign in"
            }
        }
    }
}
