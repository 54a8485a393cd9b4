//! SIP (systematic investment plan) projection maths for the calculator
//! screen. Standard annuity-due future value: contributions at the start of
//! each month, compounded monthly.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SipProjection {
    pub invested: f64,
    pub estimated_returns: f64,
    pub maturity_value: f64,
}

/// Project a monthly SIP of `monthly` rupees at `annual_rate_percent` for
/// `years`. A zero rate degenerates to plain accumulation.
pub fn project(monthly: f64, annual_rate_percent: f64, years: u32) -> SipProjection {
    let months = f64::from(years * 12);
    let invested = monthly * months;

    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    let maturity_value = if monthly_rate == 0.0 {
        invested
    } else {
        monthly * ((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate * (1.0 + monthly_rate)
    };

    SipProjection {
        invested,
        estimated_returns: maturity_value - invested,
        maturity_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1.0
    }

    #[test]
    fn one_year_at_twelve_percent() {
        let p = project(1000.0, 12.0, 1);
        assert_eq!(p.invested, 12_000.0);
        // 1000 * ((1.01^12 - 1) / 0.01) * 1.01
        assert!(close(p.maturity_value, 12_809.33), "got {}", p.maturity_value);
        assert!(close(p.estimated_returns, 809.33));
    }

    #[test]
    fn zero_rate_is_plain_accumulation() {
        let p = project(500.0, 0.0, 10);
        assert_eq!(p.invested, 60_000.0);
        assert_eq!(p.maturity_value, 60_000.0);
        assert_eq!(p.estimated_returns, 0.0);
    }

    #[test]
    fn longer_horizon_compounds_more() {
        let five = project(2000.0, 10.0, 5);
        let ten = project(2000.0, 10.0, 10);
        assert!(ten.maturity_value > 2.0 * five.maturity_value);
    }

    #[test]
    fn zero_years_is_zero_everything() {
        let p = project(1000.0, 12.0, 0);
        assert_eq!(p.invested, 0.0);
        assert_eq!(p.maturity_value, 0.0);
    }
}
