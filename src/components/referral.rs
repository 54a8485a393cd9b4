// src/components/referral.rs
use dioxus::prelude::*;

#[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
use arboard::Clipboard as SystemClipboard;

const REFERRAL_CODE: &str = "NIVESH50";

/// Referral promotion box on the home dashboard. Tapping the code copies it
/// on desktop; other platforms just show it.
#[component]
pub fn ReferralBox() -> Element {
    let mut copied = use_signal(|| false);

    let copy_code = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            log::info!("Clipboard copy not supported on web platform.");
        }

        #[cfg(target_os = "android")]
        {
            log::info!("Clipboard copy not supported on Android platform.");
        }

        #[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
        {
            std::thread::spawn(move || {
                if let Ok(mut clipboard) = SystemClipboard::new() {
                    let _ = clipboard.set_text(REFERRAL_CODE.to_string());
                }
            });
            copied.set(true);
            spawn(async move {
                tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
                copied.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "referral-box",
            div { class: "referral-icon", "🎁" }
            div {
                class: "referral-text",
                p { class: "referral-title", "Refer & earn ₹50" }
                p { class: "referral-sub", "Share your code with a friend" }
            }
            button {
                class: "referral-code",
                onclick: copy_code,
                if copied() { "Copied!" } else { "{REFERRAL_CODE}" }
            }
        }
    }
}
