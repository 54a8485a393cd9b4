//! Static demo catalog: the mutual funds shown in the browsing and detail
//! screens, plus the gold/silver rate cards. Built once per process,
//! identical for every user, never mutated.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Risk {
    Low,
    Moderate,
    High,
}

impl Risk {
    pub fn label(&self) -> &'static str {
        match self {
            Risk::Low => "Low",
            Risk::Moderate => "Moderate",
            Risk::High => "High",
        }
    }

    /// CSS class suffix for the risk badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Risk::Low => "risk-low",
            Risk::Moderate => "risk-moderate",
            Risk::High => "risk-high",
        }
    }
}

/// Annualised returns in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Returns {
    pub one_year: f64,
    pub three_year: f64,
    pub five_year: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub name: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MutualFund {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub company: String,
    pub category: String,
    pub risk: Risk,
    pub returns: Returns,
    /// Net asset value per unit in rupees
    pub nav: f64,
    /// Assets under management, display string
    pub aum: String,
    /// Annual expense ratio in percent
    pub expense_ratio: f64,
    /// Minimum SIP amount in rupees
    pub min_investment: u32,
    pub holdings: Vec<Holding>,
    pub details: String,
    pub established: u16,
}

/// Demo spot rate for the gold/silver cards on the invest screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MetalRate {
    pub metal: &'static str,
    pub price_per_gram: f64,
    pub day_change_percent: f64,
}

static FUNDS: OnceLock<Vec<MutualFund>> = OnceLock::new();

fn holding(name: &str, percentage: f64) -> Holding {
    Holding {
        name: name.to_string(),
        percentage,
    }
}

fn build_funds() -> Vec<MutualFund> {
    vec![
        MutualFund {
            id: "1".to_string(),
            name: "HDFC Top 100 Fund".to_string(),
            short_name: "HDFC Top 100".to_string(),
            company: "HDFC Mutual Fund".to_string(),
            category: "Large Cap".to_string(),
            risk: Risk::Moderate,
            returns: Returns {
                one_year: 12.4,
                three_year: 14.2,
                five_year: 13.1,
            },
            nav: 812.45,
            aum: "₹21,450 Cr".to_string(),
            expense_ratio: 1.68,
            min_investment: 500,
            holdings: vec![
                holding("HDFC Bank", 9.8),
                holding("ICICI Bank", 8.4),
                holding("Reliance Industries", 7.2),
                holding("Infosys", 5.9),
                holding("Larsen & Toubro", 4.6),
            ],
            details: "Invests in the top 100 companies by market capitalisation, \
                      aiming for steady long-term growth with lower volatility \
                      than mid and small cap funds."
                .to_string(),
            established: 1996,
        },
        MutualFund {
            id: "2".to_string(),
            name: "Axis Bluechip Fund".to_string(),
            short_name: "Axis Bluechip".to_string(),
            company: "Axis Mutual Fund".to_string(),
            category: "Large Cap".to_string(),
            risk: Risk::Moderate,
            returns: Returns {
                one_year: 9.8,
                three_year: 11.6,
                five_year: 12.4,
            },
            nav: 43.26,
            aum: "₹33,180 Cr".to_string(),
            expense_ratio: 1.55,
            min_investment: 500,
            holdings: vec![
                holding("ICICI Bank", 9.1),
                holding("HDFC Bank", 8.7),
                holding("Bajaj Finance", 6.8),
                holding("Infosys", 6.2),
                holding("Tata Consultancy Services", 5.4),
            ],
            details: "A concentrated portfolio of quality bluechip companies \
                      with strong balance sheets and consistent earnings growth."
                .to_string(),
            established: 2010,
        },
        MutualFund {
            id: "3".to_string(),
            name: "SBI Small Cap Fund".to_string(),
            short_name: "SBI Small Cap".to_string(),
            company: "SBI Mutual Fund".to_string(),
            category: "Small Cap".to_string(),
            risk: Risk::High,
            returns: Returns {
                one_year: 22.5,
                three_year: 19.8,
                five_year: 21.3,
            },
            nav: 131.78,
            aum: "₹15,920 Cr".to_string(),
            expense_ratio: 1.92,
            min_investment: 500,
            holdings: vec![
                holding("Blue Star", 4.2),
                holding("Elgi Equipments", 3.8),
                holding("Finolex Industries", 3.5),
                holding("Carborundum Universal", 3.1),
                holding("V-Guard Industries", 2.9),
            ],
            details: "Seeks high growth from emerging small cap companies. \
                      Suitable only for investors comfortable with sharp \
                      drawdowns over shorter horizons."
                .to_string(),
            established: 2009,
        },
        MutualFund {
            id: "4".to_string(),
            name: "ICICI Prudential Balanced Advantage Fund".to_string(),
            short_name: "ICICI Balanced Adv".to_string(),
            company: "ICICI Prudential Mutual Fund".to_string(),
            category: "Hybrid".to_string(),
            risk: Risk::Low,
            returns: Returns {
                one_year: 8.6,
                three_year: 9.9,
                five_year: 10.2,
            },
            nav: 58.40,
            aum: "₹49,310 Cr".to_string(),
            expense_ratio: 1.49,
            min_investment: 100,
            holdings: vec![
                holding("Government Securities", 22.4),
                holding("HDFC Bank", 5.6),
                holding("Reliance Industries", 4.8),
                holding("Infosys", 3.9),
                holding("Corporate Bonds AAA", 12.7),
            ],
            details: "Dynamically shifts between equity and debt based on \
                      market valuations, smoothing returns across cycles."
                .to_string(),
            established: 2006,
        },
        MutualFund {
            id: "5".to_string(),
            name: "Parag Parikh Flexi Cap Fund".to_string(),
            short_name: "PPFAS Flexi Cap".to_string(),
            company: "PPFAS Mutual Fund".to_string(),
            category: "Flexi Cap".to_string(),
            risk: Risk::Moderate,
            returns: Returns {
                one_year: 15.7,
                three_year: 17.4,
                five_year: 18.9,
            },
            nav: 68.91,
            aum: "₹58,740 Cr".to_string(),
            expense_ratio: 1.33,
            min_investment: 1000,
            holdings: vec![
                holding("HDFC Bank", 8.1),
                holding("Bajaj Holdings", 7.3),
                holding("Alphabet Inc", 5.8),
                holding("ITC", 5.5),
                holding("Coal India", 5.1),
            ],
            details: "Value-oriented flexi cap fund free to invest across \
                      market caps, with a slice of overseas equities."
                .to_string(),
            established: 2013,
        },
        MutualFund {
            id: "6".to_string(),
            name: "Mirae Asset Large Cap Fund".to_string(),
            short_name: "Mirae Large Cap".to_string(),
            company: "Mirae Asset Mutual Fund".to_string(),
            category: "Large Cap".to_string(),
            risk: Risk::Moderate,
            returns: Returns {
                one_year: 11.2,
                three_year: 13.5,
                five_year: 14.8,
            },
            nav: 96.30,
            aum: "₹37,660 Cr".to_string(),
            expense_ratio: 1.58,
            min_investment: 500,
            holdings: vec![
                holding("HDFC Bank", 9.4),
                holding("ICICI Bank", 7.9),
                holding("Reliance Industries", 7.0),
                holding("Tata Consultancy Services", 5.2),
                holding("Axis Bank", 4.4),
            ],
            details: "Growth-at-reasonable-price approach over established \
                      large cap companies with durable competitive positions."
                .to_string(),
            established: 2008,
        },
    ]
}

/// The full demo catalog in display order.
pub fn funds() -> &'static [MutualFund] {
    FUNDS.get_or_init(build_funds)
}

/// Linear scan by id. Absence is an ordinary outcome; the detail screen
/// renders a not-found view for it.
pub fn find_fund(id: &str) -> Option<&'static MutualFund> {
    funds().iter().find(|fund| fund.id == id)
}

/// Demo gold/silver rates for the invest screen cards.
pub fn metal_rates() -> &'static [MetalRate] {
    static RATES: [MetalRate; 2] = [
        MetalRate {
            metal: "Gold",
            price_per_gram: 7245.0,
            day_change_percent: 0.42,
        },
        MetalRate {
            metal: "Silver",
            price_per_gram: 91.60,
            day_change_percent: -0.18,
        },
    ];
    &RATES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_resolves_to_its_own_record() {
        for fund in funds() {
            let found = find_fund(&fund.id).expect("catalog id must resolve");
            assert_eq!(found, fund);
        }
    }

    #[test]
    fn fund_two_is_axis_bluechip() {
        let fund = find_fund("2").expect("fund 2 exists");
        assert_eq!(fund.name, "Axis Bluechip Fund");
        assert_eq!(fund.nav, 43.26);
        assert_eq!(fund.risk, Risk::Moderate);
    }

    #[test]
    fn absent_id_is_none() {
        assert!(find_fund("999").is_none());
        assert!(find_fund("").is_none());
    }

    #[test]
    fn catalog_ids_are_unique() {
        let all = funds();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn holdings_are_present_for_detail_tab() {
        for fund in funds() {
            assert!(!fund.holdings.is_empty(), "{} has no holdings", fund.name);
        }
    }

    #[test]
    fn both_metals_have_rates() {
        let rates = metal_rates();
        assert_eq!(rates.len(), 2);
        assert!(rates.iter().any(|r| r.metal == "Gold"));
        assert!(rates.iter().any(|r| r.metal == "Silver"));
    }
}
