use dioxus::prelude::*;

/// Full-width loading indicator with a fixed caption.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "spinner-container",
            div { class: "spinner", role: "status" }
            p { "Beaming down information from the cosmos..." }
        }
    }
}
