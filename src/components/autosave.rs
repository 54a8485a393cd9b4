// src/components/autosave.rs
use dioxus::prelude::*;

use crate::format::format_inr_whole;
use crate::storage::{self, AutosaveSettings};
use crate::Route;

const WEEKLY_PRESETS: [u32; 4] = [100, 250, 500, 1000];

/// Automated-savings configuration. Every change is written back to storage
/// immediately so the home card always reflects the latest settings.
#[component]
pub fn Autosave() -> Element {
    let mut settings = use_signal(storage::load_autosave_settings);

    let mut update = move |next: AutosaveSettings| {
        storage::save_autosave_settings(&next);
        settings.set(next);
    };

    let weekly_label = format_inr_whole(f64::from(settings().weekly_amount));
    let presets = WEEKLY_PRESETS.map(|amount| (amount, format_inr_whole(f64::from(amount))));

    rsx! {
        div {
            class: "screen autosave-screen",
            div {
                class: "screen-header",
                Link { class: "back-button", to: Route::Home { uid: String::new() }, "‹" }
                h2 { class: "screen-title", "Automated Savings" }
            }

            div {
                class: "settings-card",
                div {
                    class: "setting-row",
                    div {
                        class: "setting-text",
                        p { class: "setting-title", "Autosave" }
                        p { class: "setting-sub", "Move money to savings automatically" }
                    }
                    button {
                        class: if settings().enabled { "toggle on" } else { "toggle" },
                        onclick: move |_| {
                            let mut next = settings();
                            next.enabled = !next.enabled;
                            update(next);
                        },
                        div { class: "toggle-knob" }
                    }
                }

                div {
                    class: if settings().enabled { "setting-row" } else { "setting-row disabled" },
                    div {
                        class: "setting-text",
                        p { class: "setting-title", "Round-ups" }
                        p { class: "setting-sub", "Save spare change from every transaction" }
                    }
                    button {
                        class: if settings().roundup_enabled { "toggle on" } else { "toggle" },
                        disabled: !settings().enabled,
                        onclick: move |_| {
                            let mut next = settings();
                            next.roundup_enabled = !next.roundup_enabled;
                            update(next);
                        },
                        div { class: "toggle-knob" }
                    }
                }
            }

            div {
                class: if settings().enabled { "settings-card" } else { "settings-card disabled" },
                p { class: "setting-title", "Weekly amount" }
                div {
                    class: "preset-row",
                    for (amount, label) in presets {
                        button {
                            class: if settings().weekly_amount == amount { "preset-chip active" } else { "preset-chip" },
                            disabled: !settings().enabled,
                            onclick: move |_| {
                                let mut next = settings();
                                next.weekly_amount = amount;
                                update(next);
                            },
                            "{label}"
                        }
                    }
                }
                p {
                    class: "setting-sub",
                    if settings().enabled {
                        "Saving {weekly_label} every week"
                    } else {
                        "Turn on autosave to start"
                    }
                }
            }
        }
    }
}
