// src/components/sip_calculator.rs
use dioxus::prelude::*;

use crate::format::format_inr_whole;
use crate::sip;
use crate::Route;

/// SIP calculator quick service: monthly amount, expected annual return and
/// horizon in, projected invested/returns/maturity out.
#[component]
pub fn SipCalculator() -> Element {
    let mut monthly_input = use_signal(|| "5000".to_string());
    let mut rate_input = use_signal(|| "12".to_string());
    let mut years_input = use_signal(|| "10".to_string());

    let monthly = monthly_input().trim().parse::<f64>().unwrap_or(0.0).max(0.0);
    let rate = rate_input().trim().parse::<f64>().unwrap_or(0.0).max(0.0);
    let years = years_input().trim().parse::<u32>().unwrap_or(0);

    let projection = sip::project(monthly, rate, years);
    let invested = format_inr_whole(projection.invested);
    let estimated_returns = format_inr_whole(projection.estimated_returns);
    let maturity_value = format_inr_whole(projection.maturity_value);

    rsx! {
        div {
            class: "screen sip-screen",
            div {
                class: "screen-header",
                Link { class: "back-button", to: Route::Home { uid: String::new() }, "‹" }
                h2 { class: "screen-title", "SIP Calculator" }
            }

            div {
                class: "sip-form",
                label {
                    class: "input-label",
                    "Monthly investment (₹)"
                    input {
                        class: "text-input",
                        r#type: "number",
                        min: "0",
                        value: "{monthly_input}",
                        oninput: move |e| monthly_input.set(e.value()),
                    }
                }
                label {
                    class: "input-label",
                    "Expected annual return (%)"
                    input {
                        class: "text-input",
                        r#type: "number",
                        min: "0",
                        step: "0.5",
                        value: "{rate_input}",
                        oninput: move |e| rate_input.set(e.value()),
                    }
                }
                label {
                    class: "input-label",
                    "Time period (years)"
                    input {
                        class: "text-input",
                        r#type: "number",
                        min: "0",
                        value: "{years_input}",
                        oninput: move |e| years_input.set(e.value()),
                    }
                }
            }

            div {
                class: "sip-results",
                div {
                    class: "sip-result-row",
                    span { class: "sip-result-label", "Invested amount" }
                    span { class: "sip-result-value", "{invested}" }
                }
                div {
                    class: "sip-result-row",
                    span { class: "sip-result-label", "Estimated returns" }
                    span { class: "sip-result-value change positive", "{estimated_returns}" }
                }
                div {
                    class: "sip-result-row total",
                    span { class: "sip-result-label", "Maturity value" }
                    span { class: "sip-result-value", "{maturity_value}" }
                }
            }
        }
    }
}
