use dioxus::prelude::*;

mod auth;
mod catalog;
mod components;
mod config;
mod docstore;
mod error;
mod format;
mod profile;
mod session;
mod sip;
mod storage;

use components::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:uid")]
    Home { uid: String },
    #[route("/login")]
    Login {},
    #[route("/invest")]
    Invest {},
    #[route("/fund/:fund_id")]
    FundDetail { fund_id: String },
    #[route("/expenses")]
    Expenses {},
    #[route("/goals")]
    Goals {},
    #[route("/sip")]
    SipCalculator {},
    #[route("/autosave")]
    Autosave {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Info),
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
