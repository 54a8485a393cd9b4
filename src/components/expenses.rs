// src/components/expenses.rs
use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::format::format_inr_whole;
use crate::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub label: String,
    pub category: String,
    pub icon: &'static str,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Expense {
    fn meta_line(&self) -> String {
        format!("{} · {}", self.category, self.date.format("%d %b"))
    }
}

fn expense(label: &str, category: &str, icon: &'static str, amount: f64, date: (i32, u32, u32)) -> Expense {
    Expense {
        label: label.to_string(),
        category: category.to_string(),
        icon,
        amount,
        // demo dates are hardcoded and always valid
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
    }
}

/// Demo expense history for the current month.
pub fn demo_expenses() -> Vec<Expense> {
    vec![
        expense("Swiggy", "Food & Dining", "🍽️", 486.0, (2024, 3, 18)),
        expense("Uber", "Transport", "🚕", 245.0, (2024, 3, 17)),
        expense("BigBasket", "Groceries", "🛒", 1_820.0, (2024, 3, 15)),
        expense("Netflix", "Entertainment", "🎬", 649.0, (2024, 3, 12)),
        expense("Electricity Bill", "Utilities", "💡", 1_340.0, (2024, 3, 10)),
        expense("Decathlon", "Shopping", "🛍️", 2_150.0, (2024, 3, 8)),
        expense("Apollo Pharmacy", "Health", "💊", 560.0, (2024, 3, 5)),
    ]
}

pub fn monthly_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Expense tracking quick service. Static demo data, newest first.
#[component]
pub fn Expenses() -> Element {
    let expenses = demo_expenses();
    let total = monthly_total(&expenses);

    rsx! {
        div {
            class: "screen expenses-screen",
            div {
                class: "screen-header",
                Link { class: "back-button", to: Route::Home { uid: String::new() }, "‹" }
                h2 { class: "screen-title", "Expenses" }
            }

            div {
                class: "total-card",
                p { class: "total-label", "Spent this month" }
                h1 { class: "total-amount", "{format_inr_whole(total)}" }
            }

            div {
                class: "expense-list",
                for item in expenses.iter() {
                    div {
                        class: "expense-row",
                        div { class: "expense-icon", "{item.icon}" }
                        div {
                            class: "expense-main",
                            p { class: "expense-label", "{item.label}" }
                            p { class: "expense-meta", "{item.meta_line()}" }
                        }
                        span { class: "expense-amount", "{format_inr_whole(item.amount)}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_total_sums_all_amounts() {
        let expenses = demo_expenses();
        let total = monthly_total(&expenses);
        assert_eq!(total, 7_250.0);
    }

    #[test]
    fn demo_dates_are_valid() {
        for item in demo_expenses() {
            assert_ne!(item.date, NaiveDate::default(), "{} has a bad date", item.label);
        }
    }
}
