// src/components/goals.rs
use dioxus::prelude::*;

use crate::format::format_inr_compact;
use crate::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsGoal {
    pub name: String,
    pub icon: &'static str,
    pub target: f64,
    pub saved: f64,
}

impl SavingsGoal {
    /// Progress toward the target, clamped to 100 once reached.
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.saved / self.target * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_reached(&self) -> bool {
        self.saved >= self.target && self.target > 0.0
    }
}

fn goal(name: &str, icon: &'static str, target: f64, saved: f64) -> SavingsGoal {
    SavingsGoal {
        name: name.to_string(),
        icon,
        target,
        saved,
    }
}

/// Demo savings goals.
pub fn demo_goals() -> Vec<SavingsGoal> {
    vec![
        goal("Goa Trip", "🏖️", 40_000.0, 28_500.0),
        goal("New Laptop", "💻", 85_000.0, 85_000.0),
        goal("Emergency Fund", "🛟", 3_00_000.0, 1_12_000.0),
        goal("Wedding", "💍", 8_00_000.0, 95_000.0),
    ]
}

/// Goal savings quick service. Static demo goals with progress bars.
#[component]
pub fn Goals() -> Element {
    let goals = demo_goals();

    rsx! {
        div {
            class: "screen goals-screen",
            div {
                class: "screen-header",
                Link { class: "back-button", to: Route::Home { uid: String::new() }, "‹" }
                h2 { class: "screen-title", "Goals" }
            }

            div {
                class: "goal-list",
                for item in goals {
                    GoalCard { goal: item }
                }
            }
        }
    }
}

#[component]
fn GoalCard(goal: SavingsGoal) -> Element {
    let progress = goal.progress_percent();
    let percent_label = format!("{:.0}%", progress);
    let amounts = format!(
        "{} of {}",
        format_inr_compact(goal.saved),
        format_inr_compact(goal.target)
    );

    rsx! {
        div {
            class: "goal-card",
            div {
                class: "goal-top-row",
                div { class: "goal-icon", "{goal.icon}" }
                div {
                    class: "goal-main",
                    p { class: "goal-name", "{goal.name}" }
                    p { class: "goal-amounts", "{amounts}" }
                }
                if goal.is_reached() {
                    span { class: "goal-reached", "✓ Reached" }
                } else {
                    span { class: "goal-percent", "{percent_label}" }
                }
            }
            div {
                class: "goal-bar-track",
                div {
                    class: "goal-bar-fill",
                    style: "width: {progress}%",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_a_simple_ratio() {
        let g = goal("test", "🎯", 1000.0, 250.0);
        assert_eq!(g.progress_percent(), 25.0);
        assert!(!g.is_reached());
    }

    #[test]
    fn progress_clamps_at_target() {
        let g = goal("test", "🎯", 1000.0, 1500.0);
        assert_eq!(g.progress_percent(), 100.0);
        assert!(g.is_reached());
    }

    #[test]
    fn zero_target_means_zero_progress() {
        let g = goal("test", "🎯", 0.0, 500.0);
        assert_eq!(g.progress_percent(), 0.0);
        assert!(!g.is_reached());
    }

    #[test]
    fn demo_goals_have_positive_targets() {
        for g in demo_goals() {
            assert!(g.target > 0.0, "{} has no target", g.name);
        }
    }
}
