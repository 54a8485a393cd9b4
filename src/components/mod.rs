pub mod autosave;
pub mod expenses;
pub mod fund_detail;
pub mod goals;
pub mod home;
pub mod invest;
pub mod login;
pub mod referral;
pub mod sip_calculator;

pub use autosave::Autosave;
pub use expenses::Expenses;
pub use fund_detail::FundDetail;
pub use goals::Goals;
pub use home::Home;
pub use invest::Invest;
pub use login::Login;
pub use sip_calculator::SipCalculator;
