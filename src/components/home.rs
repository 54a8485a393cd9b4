// src/components/home.rs
use dioxus::prelude::*;

use crate::auth::AuthClient;
use crate::components::referral::ReferralBox;
use crate::config::BackendConfig;
use crate::docstore::DocStoreClient;
use crate::format::{format_inr_whole, format_signed_inr, format_signed_percent};
use crate::profile::UserProfile;
use crate::session::{self, HomeState};
use crate::storage;
use crate::Route;

// Demo dashboard numbers, same for every signed-in user
const PORTFOLIO_VALUE: f64 = 1_24_568.0;
const DAY_CHANGE: f64 = 1_245.0;
const DAY_CHANGE_PERCENT: f64 = 1.01;
const TOTAL_RETURNS: f64 = 14_230.0;

/// Home dashboard. Renders exactly one of four views depending on how the
/// session/profile load went: loading, session-expired, error, or the main
/// dashboard content.
#[component]
pub fn Home(uid: String) -> Element {
    let mut state = use_signal(|| HomeState::Loading);
    let mut load_attempt = use_signal(|| 0u32);
    let mut load_task = use_signal(|| None::<Task>);

    // One load per mount and one per retry. The previous task is cancelled
    // first so a stale result can never overwrite a newer one.
    use_effect(move || {
        let _ = load_attempt();
        if let Some(previous) = load_task.take() {
            previous.cancel();
        }

        let nav_uid = uid.clone();
        let task = spawn(async move {
            state.set(HomeState::Loading);
            let stored = storage::load_session_token();
            let source = DocStoreClient::new(BackendConfig::from_env());
            let nav_uid = (!nav_uid.is_empty()).then_some(nav_uid);
            let next = session::load_home(&source, stored, nav_uid.as_deref()).await;
            state.set(next);
        });
        load_task.set(Some(task));
    });

    let retry = move |_| {
        load_attempt += 1;
    };

    match state() {
        HomeState::Loading => rsx! {
            div {
                class: "screen loading-screen",
                div { class: "spinner" }
                p { class: "loading-text", "Loading your dashboard..." }
            }
        },
        HomeState::SessionExpired => rsx! {
            div {
                class: "screen gate-screen",
                div { class: "gate-icon", "⏰" }
                h2 { class: "gate-title", "Session Expired" }
                p {
                    class: "gate-message",
                    "Please log in again to continue."
                }
                Link {
                    class: "primary-button",
                    to: Route::Login {},
                    "Log In"
                }
            }
        },
        HomeState::Error(error) => rsx! {
            div {
                class: "screen gate-screen",
                div { class: "gate-icon", "⚠️" }
                h2 { class: "gate-title", "Something went wrong" }
                p { class: "gate-message error-banner", "{error}" }
                button {
                    class: "primary-button",
                    onclick: retry,
                    "Try Again"
                }
            }
        },
        HomeState::MainContent(profile) => rsx! {
            Dashboard { profile }
        },
    }
}

#[component]
fn Dashboard(profile: UserProfile) -> Element {
    let mut show_menu = use_signal(|| false);
    let autosave = use_signal(storage::load_autosave_settings);
    let navigator = use_navigator();

    let sign_out = move |_| {
        show_menu.set(false);
        let token = storage::load_session_token().ok().flatten();
        storage::clear_session_token();
        spawn(async move {
            if let Some(token) = token {
                AuthClient::new(BackendConfig::from_env())
                    .sign_out(&token)
                    .await;
            }
        });
        navigator.push(Route::Login {});
    };

    let autosave_summary = {
        let settings = autosave();
        if settings.enabled {
            format!("On · {}/week", format_inr_whole(f64::from(settings.weekly_amount)))
        } else {
            "Off".to_string()
        }
    };

    let portfolio_value = format_inr_whole(PORTFOLIO_VALUE);
    let day_change_line = format!(
        "{} ({})",
        format_signed_inr(DAY_CHANGE),
        format_signed_percent(DAY_CHANGE_PERCENT)
    );
    let total_returns = format_signed_inr(TOTAL_RETURNS);

    rsx! {
        div {
            class: "screen home-screen",
            onclick: move |_| {
                if show_menu() {
                    show_menu.set(false);
                }
            },

            // Header: avatar, greeting, menu
            div {
                class: "home-header",
                div { class: "avatar", "{profile.initials()}" }
                div {
                    class: "greeting-block",
                    p { class: "greeting-hey", "Hey, {profile.greeting_name()}" }
                    p { class: "greeting-sub", "Welcome back" }
                }
                div {
                    class: "menu-icon",
                    onclick: move |e| {
                        e.stop_propagation();
                        show_menu.set(!show_menu());
                    },
                    "⋮"
                }

                if show_menu() {
                    div {
                        class: "dropdown-menu",
                        onclick: move |e| e.stop_propagation(),
                        button {
                            class: "dropdown-item",
                            onclick: sign_out,
                            div { class: "dropdown-icon", "🚪" }
                            "Sign Out"
                        }
                    }
                }
            }

            // Portfolio balance card
            div {
                class: "balance-card",
                p { class: "balance-label", "Portfolio Value" }
                h1 { class: "balance-amount", "{portfolio_value}" }
                div {
                    class: "balance-change-row",
                    span {
                        class: if DAY_CHANGE >= 0.0 { "change positive" } else { "change negative" },
                        "{day_change_line}"
                    }
                    span { class: "change-period", "today" }
                }
                div {
                    class: "balance-returns",
                    span { class: "returns-label", "Total returns" }
                    span { class: "change positive", "{total_returns}" }
                }
            }

            // Investment options
            div {
                class: "section-header",
                h3 { "Invest" }
                Link { class: "section-link", to: Route::Invest {}, "See all" }
            }
            div {
                class: "invest-options-row",
                Link {
                    class: "invest-option-card gold",
                    to: Route::Invest {},
                    div { class: "option-icon", "🪙" }
                    p { class: "option-name", "Gold" }
                }
                Link {
                    class: "invest-option-card silver",
                    to: Route::Invest {},
                    div { class: "option-icon", "🥈" }
                    p { class: "option-name", "Silver" }
                }
                Link {
                    class: "invest-option-card funds",
                    to: Route::Invest {},
                    div { class: "option-icon", "📈" }
                    p { class: "option-name", "Mutual Funds" }
                }
            }

            // Quick services
            div {
                class: "section-header",
                h3 { "Quick Services" }
            }
            div {
                class: "services-grid",
                Link {
                    class: "service-card",
                    to: Route::Expenses {},
                    div { class: "service-icon", "🧾" }
                    p { class: "service-name", "Expenses" }
                }
                Link {
                    class: "service-card",
                    to: Route::Goals {},
                    div { class: "service-icon", "🎯" }
                    p { class: "service-name", "Goals" }
                }
                Link {
                    class: "service-card",
                    to: Route::SipCalculator {},
                    div { class: "service-icon", "🧮" }
                    p { class: "service-name", "SIP Calculator" }
                }
            }

            // Autosave entry card
            Link {
                class: "autosave-card",
                to: Route::Autosave {},
                div {
                    class: "autosave-text",
                    p { class: "autosave-title", "Automated Savings" }
                    p { class: "autosave-summary", "{autosave_summary}" }
                }
                div { class: "chevron", "›" }
            }

            ReferralBox {}
        }
    }
}
