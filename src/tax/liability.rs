use log::debug;
use rust_decimal::Decimal;

use crate::tax::rules::{Regime, RegimeRules};

/// Result of a tax computation. All figures are rounded to two decimal
/// places at this output boundary; full precision is kept internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBreakdown {
    /// Tax before surcharge and cess, net of rebate and marginal relief
    pub base_tax: Decimal,
    pub surcharge: Decimal,
    pub cess: Decimal,
    /// Section 87A rebate applied against slab tax
    pub rebate: Decimal,
    /// Marginal relief applied (always zero in the old regime)
    pub marginal_relief: Decimal,
}

impl TaxBreakdown {
    /// Total liability including surcharge and cess
    pub fn total(&self) -> Decimal {
        self.base_tax + self.surcharge + self.cess
    }
}

/// How the basic exemption was spread across the income streams, consumed
/// in statutory priority order: slab income first, then STCG, then LTCG
/// (after LTCG's own exemption). Unused capacity cannot be wasted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExemptionAllocation {
    pub regular: Decimal,
    pub stcg: Decimal,
    pub ltcg: Decimal,
}

impl ExemptionAllocation {
    /// Allocate `capacity` against the three streams in priority order.
    /// `ltcg` is the long-term gain remaining after its own exemption.
    pub fn allocate(capacity: Decimal, regular: Decimal, stcg: Decimal, ltcg: Decimal) -> Self {
        let mut remaining = capacity;
        let take_regular = regular.min(remaining);
        remaining -= take_regular;
        let take_stcg = stcg.min(remaining);
        remaining -= take_stcg;
        let take_ltcg = ltcg.min(remaining);
        ExemptionAllocation {
            regular: take_regular,
            stcg: take_stcg,
            ltcg: take_ltcg,
        }
    }
}

/// Compute the tax liability for `regime` under the rules in force,
/// given the aggregated non-capital-gains income and the two gains.
pub fn compute_tax(
    regime: Regime,
    total_income: Decimal,
    stcg: Decimal,
    ltcg: Decimal,
) -> TaxBreakdown {
    compute_with_rules(&RegimeRules::for_regime(regime), total_income, stcg, ltcg)
}

pub fn compute_with_rules(
    rules: &RegimeRules,
    total_income: Decimal,
    stcg: Decimal,
    ltcg: Decimal,
) -> TaxBreakdown {
    match rules.regime {
        Regime::Old => old_regime_liability(rules, total_income, stcg, ltcg),
        Regime::New => new_regime_liability(rules, total_income, stcg, ltcg),
    }
}

fn old_regime_liability(
    rules: &RegimeRules,
    total_income: Decimal,
    stcg: Decimal,
    ltcg: Decimal,
) -> TaxBreakdown {
    let slab_tax = rules.slabs.tax_on(total_income);

    // Capital gains are taxed outside the slab system and never earn the rebate
    let taxable_ltcg = (ltcg - rules.ltcg_exemption).max(Decimal::ZERO);
    let cg_tax = stcg * rules.stcg_rate + taxable_ltcg * rules.ltcg_rate;

    let rebate = rebate_for(rules, total_income, slab_tax);
    let pre_surcharge = ((slab_tax - rebate).max(Decimal::ZERO) + cg_tax).max(Decimal::ZERO);

    finalize(
        rules,
        pre_surcharge,
        rebate,
        Decimal::ZERO,
        total_income + stcg + ltcg,
        stcg + ltcg,
    )
}

fn new_regime_liability(
    rules: &RegimeRules,
    total_income: Decimal,
    stcg: Decimal,
    ltcg: Decimal,
) -> TaxBreakdown {
    let ltcg_after_exemption = (ltcg - rules.ltcg_exemption).max(Decimal::ZERO);
    let alloc = ExemptionAllocation::allocate(
        rules.basic_exemption,
        total_income,
        stcg,
        ltcg_after_exemption,
    );
    debug!(
        "basic exemption allocation: regular={} stcg={} ltcg={}",
        alloc.regular, alloc.stcg, alloc.ltcg
    );

    // Slab income has already consumed its share of the zero-rated band
    let taxable_regular = total_income - alloc.regular;
    let slab_tax = rules.slabs.tax_above_exemption(taxable_regular, alloc.regular);

    let taxable_stcg = stcg - alloc.stcg;
    let taxable_ltcg = ltcg_after_exemption - alloc.ltcg;
    let cg_tax = taxable_stcg * rules.stcg_rate + taxable_ltcg * rules.ltcg_rate;

    let rebate = rebate_for(rules, total_income, slab_tax);
    let mut pre_surcharge = (slab_tax - rebate).max(Decimal::ZERO) + cg_tax;

    let combined_income = total_income + stcg + ltcg;
    let mut marginal_relief = Decimal::ZERO;
    if let Some((floor, ceiling)) = rules.marginal_relief_window {
        if combined_income > floor && combined_income <= ceiling {
            // Tax may not exceed the amount by which income crosses the
            // rebate cliff; the cutoff at the upper boundary is literal
            let cap = combined_income - floor;
            if pre_surcharge > cap {
                marginal_relief = pre_surcharge - cap;
                pre_surcharge = cap;
                debug!("marginal relief {} caps tax at {}", marginal_relief, cap);
            }
        }
    }

    finalize(
        rules,
        pre_surcharge,
        rebate,
        marginal_relief,
        combined_income,
        stcg + ltcg,
    )
}

/// Rebate applies only to slab tax, only at or below the income ceiling
fn rebate_for(rules: &RegimeRules, total_income: Decimal, slab_tax: Decimal) -> Decimal {
    if total_income <= rules.rebate_income_limit {
        rules.rebate_cap.min(slab_tax)
    } else {
        Decimal::ZERO
    }
}

fn finalize(
    rules: &RegimeRules,
    pre_surcharge: Decimal,
    rebate: Decimal,
    marginal_relief: Decimal,
    combined_income: Decimal,
    capital_gains: Decimal,
) -> TaxBreakdown {
    let rate = rules.surcharge.rate_for(combined_income, capital_gains);
    let surcharge = pre_surcharge * rate;
    let cess = (pre_surcharge + surcharge) * rules.cess_rate;

    TaxBreakdown {
        base_tax: pre_surcharge.max(Decimal::ZERO).round_dp(2),
        surcharge: surcharge.round_dp(2),
        cess: cess.round_dp(2),
        rebate: rebate.round_dp(2),
        marginal_relief: marginal_relief.round_dp(2),
    }
}
