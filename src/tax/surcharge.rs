use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One surcharge tier, applicable when combined income exceeds `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct SurchargeTier {
    pub threshold: Decimal,
    pub rate: Decimal,
}

/// Surcharge schedule, ordered highest threshold first so the first
/// matching tier wins.
#[derive(Debug, Clone)]
pub struct SurchargeTable {
    tiers: Vec<SurchargeTier>,
    /// Statutory cap on the rate when capital gains are present
    cg_rate_cap: Decimal,
}

impl SurchargeTable {
    pub fn old_regime() -> Self {
        Self::with_top_rate(dec!(0.37))
    }

    pub fn new_regime() -> Self {
        Self::with_top_rate(dec!(0.25))
    }

    fn with_top_rate(top_rate: Decimal) -> Self {
        SurchargeTable {
            tiers: vec![
                SurchargeTier {
                    threshold: dec!(50000000),
                    rate: top_rate,
                },
                SurchargeTier {
                    threshold: dec!(20000000),
                    rate: dec!(0.25),
                },
                SurchargeTier {
                    threshold: dec!(10000000),
                    rate: dec!(0.15),
                },
                SurchargeTier {
                    threshold: dec!(5000000),
                    rate: dec!(0.10),
                },
            ],
            cg_rate_cap: dec!(0.15),
        }
    }

    /// Resolve the surcharge rate for `combined_income` (slab income plus
    /// capital gains). When any capital gains are present the resolved rate
    /// is clamped to the statutory 15% cap.
    pub fn rate_for(&self, combined_income: Decimal, capital_gains: Decimal) -> Decimal {
        let mut rate = self
            .tiers
            .iter()
            .find(|tier| combined_income > tier.threshold)
            .map(|tier| tier.rate)
            .unwrap_or(Decimal::ZERO);
        if capital_gains > Decimal::ZERO && rate > self.cg_rate_cap {
            rate = self.cg_rate_cap;
        }
        rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_first_threshold_no_surcharge() {
        let table = SurchargeTable::new_regime();
        assert_eq!(table.rate_for(dec!(4999999), Decimal::ZERO), Decimal::ZERO);
        // Thresholds are exclusive
        assert_eq!(table.rate_for(dec!(5000000), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn tier_boundaries_exclusive() {
        let table = SurchargeTable::new_regime();
        assert_eq!(table.rate_for(dec!(5000001), Decimal::ZERO), dec!(0.10));
        assert_eq!(table.rate_for(dec!(10000000), Decimal::ZERO), dec!(0.10));
        assert_eq!(table.rate_for(dec!(10000001), Decimal::ZERO), dec!(0.15));
        assert_eq!(table.rate_for(dec!(20000000), Decimal::ZERO), dec!(0.15));
        assert_eq!(table.rate_for(dec!(20000001), Decimal::ZERO), dec!(0.25));
    }

    #[test]
    fn top_tier_differs_by_regime() {
        assert_eq!(
            SurchargeTable::old_regime().rate_for(dec!(60000000), Decimal::ZERO),
            dec!(0.37)
        );
        assert_eq!(
            SurchargeTable::new_regime().rate_for(dec!(60000000), Decimal::ZERO),
            dec!(0.25)
        );
    }

    #[test]
    fn capital_gains_cap_at_fifteen_percent() {
        let table = SurchargeTable::new_regime();
        // 2.5cr would resolve to 25%, but capital gains cap it
        assert_eq!(table.rate_for(dec!(25000000), dec!(25000000)), dec!(0.15));
        assert_eq!(
            SurchargeTable::old_regime().rate_for(dec!(60000000), dec!(1000)),
            dec!(0.15)
        );
    }

    #[test]
    fn capital_gains_cap_leaves_lower_rates_alone() {
        let table = SurchargeTable::new_regime();
        assert_eq!(table.rate_for(dec!(15000000), dec!(1000000)), dec!(0.15));
        assert_eq!(table.rate_for(dec!(6000000), dec!(1000000)), dec!(0.10));
    }
}
