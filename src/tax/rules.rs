use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::tax::surcharge::SurchargeTable;

/// Statutory rule set selected by the taxpayer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Regime {
    Old,
    #[default]
    New,
}

/// Error for an unrecognized regime tag. Callers must handle this
/// explicitly rather than falling back to a default regime.
#[derive(Debug, thiserror::Error)]
#[error("unknown regime tag `{0}`, expected `old` or `new`")]
pub struct UnknownRegime(String);

impl std::str::FromStr for Regime {
    type Err = UnknownRegime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "old" => Ok(Regime::Old),
            "new" => Ok(Regime::New),
            other => Err(UnknownRegime(other.to_string())),
        }
    }
}

impl Regime {
    pub fn display(&self) -> &'static str {
        match self {
            Regime::Old => "old",
            Regime::New => "new",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// One band of a progressive schedule. `width` of `None` marks the
/// unbounded top band.
#[derive(Debug, Clone, Copy)]
pub struct Slab {
    pub width: Option<Decimal>,
    pub rate: Decimal,
}

impl Slab {
    fn bounded(width: Decimal, rate: Decimal) -> Self {
        Slab {
            width: Some(width),
            rate,
        }
    }

    fn unbounded(rate: Decimal) -> Self {
        Slab { width: None, rate }
    }
}

/// Progressive slab schedule, walked lowest band first. The bottom band is
/// the zero-rated basic exemption.
#[derive(Debug, Clone)]
pub struct SlabSchedule {
    slabs: Vec<Slab>,
}

impl SlabSchedule {
    pub fn new(slabs: Vec<Slab>) -> Self {
        SlabSchedule { slabs }
    }

    /// Marginal-bracket tax on `income`, starting from the bottom band.
    pub fn tax_on(&self, income: Decimal) -> Decimal {
        self.walk(income, Decimal::ZERO)
    }

    /// Tax on income whose share of the bottom zero-rated band has already
    /// been consumed elsewhere. With the band fully consumed the walk starts
    /// at the second slab; with it partially consumed the residual income
    /// first fills the unused zero-rated room.
    pub fn tax_above_exemption(&self, income: Decimal, zero_band_used: Decimal) -> Decimal {
        self.walk(income, zero_band_used)
    }

    fn walk(&self, income: Decimal, first_band_used: Decimal) -> Decimal {
        let mut remaining = income;
        let mut tax = Decimal::ZERO;
        for (i, slab) in self.slabs.iter().enumerate() {
            if remaining <= Decimal::ZERO {
                break;
            }
            let portion = match slab.width {
                Some(width) => {
                    let room = if i == 0 {
                        (width - first_band_used).max(Decimal::ZERO)
                    } else {
                        width
                    };
                    remaining.min(room)
                }
                None => remaining,
            };
            tax += portion * slab.rate;
            remaining -= portion;
        }
        tax
    }
}

/// Complete parameter set for one regime in one assessment year. Engines
/// take all statutory constants from here, so a future tax year is a new
/// constructor rather than an engine change.
#[derive(Debug, Clone)]
pub struct RegimeRules {
    pub regime: Regime,
    /// Flat deduction from gross salary
    pub standard_deduction: Decimal,
    /// Share of gross house-property income allowed as standard deduction
    pub house_property_deduction: Decimal,
    /// Zero-rated basic exemption; in the new regime unused capacity is
    /// allocated against capital gains
    pub basic_exemption: Decimal,
    pub slabs: SlabSchedule,
    /// Section 87A rebate: income ceiling and maximum rebate
    pub rebate_income_limit: Decimal,
    pub rebate_cap: Decimal,
    /// Combined-income window (lower-exclusive, upper-inclusive) in which
    /// tax is capped at the excess over the lower bound
    pub marginal_relief_window: Option<(Decimal, Decimal)>,
    pub stcg_rate: Decimal,
    pub ltcg_rate: Decimal,
    /// LTCG's own exemption, applied before any basic-exemption allocation
    pub ltcg_exemption: Decimal,
    pub surcharge: SurchargeTable,
    pub cess_rate: Decimal,
}

impl RegimeRules {
    /// Rules in force for AY 2026-27
    pub fn for_regime(regime: Regime) -> Self {
        match regime {
            Regime::Old => Self::old_ay_2026_27(),
            Regime::New => Self::new_ay_2026_27(),
        }
    }

    pub fn old_ay_2026_27() -> Self {
        RegimeRules {
            regime: Regime::Old,
            standard_deduction: dec!(50000),
            house_property_deduction: dec!(0.30),
            basic_exemption: dec!(250000),
            slabs: SlabSchedule::new(vec![
                Slab::bounded(dec!(250000), Decimal::ZERO),
                Slab::bounded(dec!(250000), dec!(0.05)),
                Slab::bounded(dec!(500000), dec!(0.20)),
                Slab::unbounded(dec!(0.30)),
            ]),
            rebate_income_limit: dec!(500000),
            rebate_cap: dec!(12500),
            marginal_relief_window: None,
            stcg_rate: dec!(0.20),
            ltcg_rate: dec!(0.125),
            ltcg_exemption: dec!(125000),
            surcharge: SurchargeTable::old_regime(),
            cess_rate: dec!(0.04),
        }
    }

    pub fn new_ay_2026_27() -> Self {
        RegimeRules {
            regime: Regime::New,
            standard_deduction: dec!(75000),
            house_property_deduction: dec!(0.30),
            basic_exemption: dec!(400000),
            slabs: SlabSchedule::new(vec![
                Slab::bounded(dec!(400000), Decimal::ZERO),
                Slab::bounded(dec!(400000), dec!(0.05)),
                Slab::bounded(dec!(400000), dec!(0.10)),
                Slab::bounded(dec!(400000), dec!(0.15)),
                Slab::bounded(dec!(400000), dec!(0.20)),
                Slab::bounded(dec!(400000), dec!(0.25)),
                Slab::unbounded(dec!(0.30)),
            ]),
            rebate_income_limit: dec!(1200000),
            rebate_cap: dec!(60000),
            marginal_relief_window: Some((dec!(1200000), dec!(1260000))),
            stcg_rate: dec!(0.20),
            ltcg_rate: dec!(0.125),
            ltcg_exemption: dec!(125000),
            surcharge: SurchargeTable::new_regime(),
            cess_rate: dec!(0.04),
        }
    }
}
