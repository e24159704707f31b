mod state;

use dioxus::prelude::*;
use types::Field;

pub use state::{LoginState, Phase, UpdateState, submit};

use crate::ServerAuthenticator;

impl UpdateState for Signal<LoginState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut LoginState) -> R) -> R {
        self.with_mut(f)
    }
}

/// Email and password login form.
///
/// On a successful login `on_success` fires and the router moves to the
/// dashboard.
#[component]
pub fn LoginForm(on_success: EventHandler<()>) -> Element {
    let mut state = use_signal(LoginState::default);
    let snapshot = state.read().clone();

    rsx! {
        LoginFormView {
            state: snapshot,
            on_email: move |email| state.write().set_email(email),
            on_password: move |password| state.write().set_password(password),
            on_submit: move |_| {
                spawn(async move {
                    if let Some(path) = submit(state, &ServerAuthenticator).await {
                        on_success.call(());
                        navigator().push(path);
                    }
                });
            },
        }
    }
}

/// Markup for a [`LoginState`]. Holds no state of its own.
#[component]
pub fn LoginFormView(
    state: LoginState,
    on_email: EventHandler<String>,
    on_password: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let submitting = state.is_submitting();
    let email_error = state.errors().get(Field::Email);
    let password_error = state.errors().get(Field::Password);
    let server_error = state.server_error().map(str::to_string);
    let email = state.email().to_string();
    let password = state.password().to_string();

    rsx! {
        form {
            class: "login-form",
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            if let Some(err) = server_error {
                div { class: "alert alert-error", role: "alert", "{err}" }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "email", "Email" }
                input {
                    id: "email",
                    name: "email",
                    class: "form-input",
                    r#type: "email",
                    autocomplete: "email",
                    placeholder: "you@example.com",
                    disabled: submitting,
                    value: "{email}",
                    oninput: move |e| on_email.call(e.value()),
                }
                if let Some(err) = email_error {
                    p { class: "field-error", "{err}" }
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    class: "form-input",
                    r#type: "password",
                    autocomplete: "current-password",
                    disabled: submitting,
                    value: "{password}",
                    oninput: move |e| on_password.call(e.value()),
                }
                if let Some(err) = password_error {
                    p { class: "field-error", "{err}" }
                }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary login-btn",
                "aria-label": "Submit button",
                disabled: submitting,
                if submitting { "Signing in..." } else { "Sign in" }
            }
        }
    }
}
