// src/components/invest.rs
use dioxus::prelude::*;

use crate::catalog::{self, MetalRate, MutualFund};
use crate::format::{format_inr, format_signed_percent};
use crate::Route;

/// Investment browsing: gold/silver rate cards and the mutual fund list.
#[component]
pub fn Invest() -> Element {
    rsx! {
        div {
            class: "screen invest-screen",
            div {
                class: "screen-header",
                Link { class: "back-button", to: Route::Home { uid: String::new() }, "‹" }
                h2 { class: "screen-title", "Invest" }
            }

            div {
                class: "section-header",
                h3 { "Digital Metals" }
            }
            div {
                class: "metal-cards-row",
                for rate in catalog::metal_rates() {
                    MetalCard { rate: rate.clone() }
                }
            }

            div {
                class: "section-header",
                h3 { "Mutual Funds" }
            }
            div {
                class: "fund-list",
                for fund in catalog::funds() {
                    FundRow { fund: fund.clone() }
                }
            }
        }
    }
}

#[component]
fn FundRow(fund: MutualFund) -> Element {
    let meta = format!("{} · {}", fund.category, fund.company);
    let three_year = format_signed_percent(fund.returns.three_year);
    let risk_class = format!("risk-badge {}", fund.risk.css_class());

    rsx! {
        Link {
            class: "fund-list-item",
            to: Route::FundDetail { fund_id: fund.id.clone() },
            div {
                class: "fund-list-main",
                p { class: "fund-name", "{fund.short_name}" }
                p { class: "fund-meta", "{meta}" }
            }
            div {
                class: "fund-list-side",
                p { class: "fund-return", "{three_year}" }
                p { class: "fund-return-label", "3Y returns" }
                span { class: "{risk_class}", "{fund.risk.label()}" }
            }
        }
    }
}

#[component]
fn MetalCard(rate: MetalRate) -> Element {
    let change_class = if rate.day_change_percent >= 0.0 {
        "change positive"
    } else {
        "change negative"
    };
    let price = format!("{}/g", format_inr(rate.price_per_gram));
    let change = format_signed_percent(rate.day_change_percent);
    let icon = if rate.metal == "Gold" { "🪙" } else { "🥈" };

    rsx! {
        div {
            class: "metal-card",
            div { class: "option-icon", "{icon}" }
            p { class: "metal-name", "{rate.metal}" }
            p { class: "metal-price", "{price}" }
            span { class: change_class, "{change}" }
        }
    }
}
