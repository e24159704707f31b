use dioxus::prelude::*;
use ui::LoginForm;

#[component]
pub fn Login() -> Element {
    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Cosmos" }
                    p { class: "login-subtitle", "Sign in to continue" }
                }
                LoginForm {
                    on_success: move |_| tracing::info!("signed in, heading to dashboard"),
                }
            }
        }
    }
}
