use rust_decimal::Decimal;

use crate::tax::rules::{Regime, RegimeRules};

/// Gross income components as supplied by the filer, before any deductions.
/// The caller validates that all amounts are non-negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomeSources {
    pub salary: Decimal,
    pub business: Decimal,
    pub house_property: Decimal,
    pub other_sources: Decimal,
    pub house_loan_interest: Decimal,
}

/// Aggregate the non-capital-gains income components into a single taxable
/// figure using the rules in force for `regime`.
pub fn aggregate_income(regime: Regime, sources: &IncomeSources) -> Decimal {
    aggregate_with_rules(&RegimeRules::for_regime(regime), sources)
}

/// Salary net of the standard deduction; house property net of the 30%
/// deduction and loan interest (which may drive it negative). Each
/// component is floored at zero independently before summing, so a loss in
/// one head never offsets another.
pub fn aggregate_with_rules(rules: &RegimeRules, sources: &IncomeSources) -> Decimal {
    let salary = sources.salary - rules.standard_deduction;
    let house = sources.house_property * (Decimal::ONE - rules.house_property_deduction)
        - sources.house_loan_interest;
    floor_zero(salary)
        + floor_zero(sources.business)
        + floor_zero(house)
        + floor_zero(sources.other_sources)
}

fn floor_zero(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn salary_only(salary: Decimal) -> IncomeSources {
        IncomeSources {
            salary,
            ..Default::default()
        }
    }

    #[test]
    fn standard_deduction_applied_per_regime() {
        let sources = salary_only(dec!(1000000));
        assert_eq!(aggregate_income(Regime::Old, &sources), dec!(950000));
        assert_eq!(aggregate_income(Regime::New, &sources), dec!(925000));
    }

    #[test]
    fn salary_below_deduction_clamps_to_zero() {
        let sources = salary_only(dec!(40000));
        assert_eq!(aggregate_income(Regime::Old, &sources), Decimal::ZERO);
        assert_eq!(aggregate_income(Regime::New, &sources), Decimal::ZERO);
    }

    #[test]
    fn house_property_thirty_percent_deduction() {
        let sources = IncomeSources {
            house_property: dec!(300000),
            ..Default::default()
        };
        assert_eq!(aggregate_income(Regime::New, &sources), dec!(210000));
    }

    #[test]
    fn loan_interest_can_wipe_out_house_income() {
        let sources = IncomeSources {
            house_property: dec!(300000),
            house_loan_interest: dec!(250000),
            other_sources: dec!(50000),
            ..Default::default()
        };
        // 2,10,000 - 2,50,000 clamps to zero; other sources unaffected
        assert_eq!(aggregate_income(Regime::New, &sources), dec!(50000));
    }

    #[test]
    fn all_components_summed() {
        let sources = IncomeSources {
            salary: dec!(575000),
            business: dec!(200000),
            house_property: dec!(100000),
            other_sources: dec!(30000),
            house_loan_interest: Decimal::ZERO,
        };
        // (575000 - 75000) + 200000 + 70000 + 30000
        assert_eq!(aggregate_income(Regime::New, &sources), dec!(800000));
    }

    #[test]
    fn monotone_in_each_component() {
        let base = IncomeSources {
            salary: dec!(500000),
            business: dec!(100000),
            house_property: dec!(200000),
            other_sources: dec!(50000),
            house_loan_interest: dec!(20000),
        };
        let total = aggregate_income(Regime::New, &base);

        for bump in [
            IncomeSources {
                salary: base.salary + dec!(1),
                ..base
            },
            IncomeSources {
                business: base.business + dec!(1),
                ..base
            },
            IncomeSources {
                house_property: base.house_property + dec!(1),
                ..base
            },
            IncomeSources {
                other_sources: base.other_sources + dec!(1),
                ..base
            },
        ] {
            assert!(aggregate_income(Regime::New, &bump) >= total);
        }
    }
}
