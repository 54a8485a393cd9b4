// src/components/login.rs
use dioxus::prelude::*;

use crate::auth::AuthClient;
use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::storage;
use crate::Route;

/// Demo email/password sign-in. On success the session token is persisted
/// and the user lands on the home dashboard with their uid.
#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let navigator = use_navigator();

    let submit = move |_| {
        if busy() {
            return;
        }
        let email_value = email().trim().to_string();
        let password_value = password();
        if email_value.is_empty() || password_value.is_empty() {
            error_message.set(Some("Enter your email and password.".to_string()));
            return;
        }

        busy.set(true);
        error_message.set(None);

        spawn(async move {
            let client = AuthClient::new(BackendConfig::from_env());
            match client.sign_in(&email_value, &password_value).await {
                Ok(response) => {
                    if let Err(e) = storage::save_session_token(&response.token) {
                        log::error!("Could not persist session token: {}", e);
                    }
                    navigator.push(Route::Home { uid: response.uid });
                }
                Err(ApiError::Unauthorized) => {
                    busy.set(false);
                    error_message.set(Some("Incorrect email or password.".to_string()));
                }
                Err(e) => {
                    log::error!("Sign-in failed: {}", e);
                    busy.set(false);
                    error_message.set(Some("Could not sign in. Please try again.".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "screen login-screen",
            div {
                class: "login-card",
                h1 { class: "login-title", "Nivesh" }
                p { class: "login-subtitle", "Sign in to your account" }

                input {
                    class: "text-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                input {
                    class: "text-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }

                if let Some(message) = error_message() {
                    p { class: "error-banner", "{message}" }
                }

                button {
                    class: "primary-button",
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Signing in..." } else { "Sign In" }
                }
            }
        }
    }
}
