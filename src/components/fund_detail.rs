// src/components/fund_detail.rs
use dioxus::prelude::*;

use crate::catalog::{self, MutualFund};
use crate::format::{format_inr, format_inr_whole, format_signed_percent};
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum FundTab {
    Overview,
    Performance,
    Holdings,
}

/// Fund detail screen. The fund is whatever the route's `fund_id` resolves
/// to; an id that is not in the catalog gets an explicit not-found view.
#[component]
pub fn FundDetail(fund_id: String) -> Element {
    match catalog::find_fund(&fund_id) {
        Some(fund) => rsx! {
            FundDetailContent { fund: fund.clone() }
        },
        None => rsx! {
            div {
                class: "screen gate-screen",
                div { class: "gate-icon", "🔍" }
                h2 { class: "gate-title", "Fund not found" }
                p {
                    class: "gate-message",
                    "We couldn't find a fund with id \"{fund_id}\"."
                }
                Link {
                    class: "primary-button",
                    to: Route::Invest {},
                    "Browse Funds"
                }
            }
        },
    }
}

#[component]
fn FundDetailContent(fund: MutualFund) -> Element {
    let mut active_tab = use_signal(|| FundTab::Overview);

    let summary_meta = format!("{} · {}", fund.category, fund.company);
    let risk_class = format!("risk-badge {}", fund.risk.css_class());
    let risk_label = format!("{} Risk", fund.risk.label());

    let tab_button = |tab: FundTab, label: &'static str| {
        rsx! {
            button {
                class: if active_tab() == tab { "tab-button active" } else { "tab-button" },
                onclick: move |_| active_tab.set(tab),
                "{label}"
            }
        }
    };

    rsx! {
        div {
            class: "screen fund-detail-screen",
            div {
                class: "screen-header",
                Link { class: "back-button", to: Route::Invest {}, "‹" }
                h2 { class: "screen-title", "{fund.short_name}" }
            }

            div {
                class: "fund-summary",
                p { class: "fund-full-name", "{fund.name}" }
                p { class: "fund-meta", "{summary_meta}" }
                span { class: "{risk_class}", "{risk_label}" }
            }

            div {
                class: "tab-bar",
                {tab_button(FundTab::Overview, "Overview")}
                {tab_button(FundTab::Performance, "Performance")}
                {tab_button(FundTab::Holdings, "Holdings")}
            }

            match active_tab() {
                FundTab::Overview => rsx! { OverviewTab { fund: fund.clone() } },
                FundTab::Performance => rsx! { PerformanceTab { fund: fund.clone() } },
                FundTab::Holdings => rsx! { HoldingsTab { fund: fund.clone() } },
            }
        }
    }
}

#[component]
fn OverviewTab(fund: MutualFund) -> Element {
    rsx! {
        div {
            class: "tab-content",
            div {
                class: "stat-grid",
                StatCell { label: "NAV", value: format_inr(fund.nav) }
                StatCell { label: "AUM", value: fund.aum.clone() }
                StatCell { label: "Expense Ratio", value: format!("{:.2}%", fund.expense_ratio) }
                StatCell {
                    label: "Min. Investment",
                    value: format_inr_whole(f64::from(fund.min_investment)),
                }
            }
            div {
                class: "about-block",
                h4 { "About this fund" }
                p { class: "about-text", "{fund.details}" }
                p { class: "established", "Established {fund.established}" }
            }
        }
    }
}

#[component]
fn StatCell(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "stat-cell",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}

#[component]
fn PerformanceTab(fund: MutualFund) -> Element {
    // scale so 25% annualised fills the track
    let rows = [
        ("1 Year", fund.returns.one_year),
        ("3 Years", fund.returns.three_year),
        ("5 Years", fund.returns.five_year),
    ]
    .map(|(label, value)| {
        let width = (value * 4.0).clamp(0.0, 100.0);
        (label, format_signed_percent(value), format!("width: {width}%"))
    });

    rsx! {
        div {
            class: "tab-content",
            for (label, value, bar_style) in rows {
                div {
                    class: "performance-row",
                    span { class: "performance-label", "{label}" }
                    div {
                        class: "performance-bar-track",
                        div {
                            class: "performance-bar-fill",
                            style: "{bar_style}",
                        }
                    }
                    span { class: "performance-value", "{value}" }
                }
            }
            p {
                class: "performance-footnote",
                "Annualised returns. Past performance does not guarantee future results."
            }
        }
    }
}

#[component]
fn HoldingsTab(fund: MutualFund) -> Element {
    rsx! {
        div {
            class: "tab-content",
            for holding in fund.holdings.iter() {
                div {
                    class: "holding-row",
                    span { class: "holding-name", "{holding.name}" }
                    span { class: "holding-percent", "{holding.percentage:.1}%" }
                }
            }
        }
    }
}
