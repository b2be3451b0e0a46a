//! Compute command - full liability breakdown for a single regime

use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cmd::{format_inr, format_inr_signed, IncomeArgs, RegimeArg};
use crate::tax::{
    aggregate_with_rules, compute_with_rules, ExemptionAllocation, Regime, RegimeRules,
    TaxBreakdown,
};

#[derive(Args, Debug)]
pub struct ComputeCommand {
    /// Tax regime to compute under
    #[arg(short, long, value_enum, default_value_t = RegimeArg::New)]
    regime: RegimeArg,

    #[command(flatten)]
    income: IncomeArgs,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Computation result for JSON output
#[derive(Debug, Serialize)]
struct ComputeOutput {
    regime: String,
    total_income: String,
    stcg: String,
    ltcg: String,
    base_tax: String,
    surcharge: String,
    cess: String,
    rebate: String,
    marginal_relief: String,
    total_tax: String,
    tds_paid: String,
    net_tax: String,
}

impl ComputeCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let regime: Regime = self.regime.into();
        let rules = RegimeRules::for_regime(regime);
        let total_income = aggregate_with_rules(&rules, &self.income.sources());
        let breakdown =
            compute_with_rules(&rules, total_income, self.income.stcg, self.income.ltcg);

        let total_tax = breakdown.total();
        let net_tax = total_tax - self.income.tds_paid;

        if self.json {
            self.print_json(regime, total_income, &breakdown, total_tax, net_tax)
        } else {
            self.print_text(&rules, total_income, &breakdown, total_tax, net_tax);
            Ok(())
        }
    }

    fn print_text(
        &self,
        rules: &RegimeRules,
        total_income: Decimal,
        breakdown: &TaxBreakdown,
        total_tax: Decimal,
        net_tax: Decimal,
    ) {
        println!();
        println!("TAX COMPUTATION ({} regime, AY 2026-27)", rules.regime);
        println!();

        println!("INCOME");
        println!(
            "  Taxable income (excl. capital gains): {}",
            format_inr(total_income)
        );
        if self.income.stcg > Decimal::ZERO || self.income.ltcg > Decimal::ZERO {
            println!(
                "  STCG: {} | LTCG: {}",
                format_inr(self.income.stcg),
                format_inr(self.income.ltcg)
            );
        }
        println!();

        if rules.regime == Regime::New {
            self.print_exemption_allocation(rules, total_income);
        }

        println!("LIABILITY");
        println!("  Base tax: {}", format_inr(breakdown.base_tax));
        if breakdown.rebate > Decimal::ZERO {
            println!("  Rebate applied: {}", format_inr(breakdown.rebate));
        }
        if breakdown.marginal_relief > Decimal::ZERO {
            println!(
                "  Marginal relief applied: {}",
                format_inr(breakdown.marginal_relief)
            );
        }
        println!(
            "  Surcharge: {} | Cess: {}",
            format_inr(breakdown.surcharge),
            format_inr(breakdown.cess)
        );
        println!();

        println!("TOTAL TAX LIABILITY: {}", format_inr(total_tax));
        if self.income.tds_paid > Decimal::ZERO {
            println!("  TDS/advance tax paid: {}", format_inr(self.income.tds_paid));
            if net_tax < Decimal::ZERO {
                println!("  REFUND DUE: {}", format_inr(net_tax.abs()));
            } else {
                println!("  NET PAYABLE: {}", format_inr_signed(net_tax));
            }
        }
        println!();
    }

    /// Mirror of the engine's basic-exemption allocation, shown so a filer
    /// can see where the 4,00,000 went
    fn print_exemption_allocation(&self, rules: &RegimeRules, total_income: Decimal) {
        if self.income.stcg <= Decimal::ZERO && self.income.ltcg <= Decimal::ZERO {
            return;
        }
        let ltcg_after = (self.income.ltcg - rules.ltcg_exemption).max(Decimal::ZERO);
        let alloc = ExemptionAllocation::allocate(
            rules.basic_exemption,
            total_income,
            self.income.stcg,
            ltcg_after,
        );

        println!("BASIC EXEMPTION UTILISATION");
        println!(
            "  Regular income: {} used, taxable {}",
            format_inr(alloc.regular),
            format_inr(total_income - alloc.regular)
        );
        println!(
            "  STCG: {} used, taxable {}",
            format_inr(alloc.stcg),
            format_inr(self.income.stcg - alloc.stcg)
        );
        println!(
            "  LTCG (after {} exemption): {} used, taxable {}",
            format_inr(rules.ltcg_exemption),
            format_inr(alloc.ltcg),
            format_inr(ltcg_after - alloc.ltcg)
        );
        println!();
    }

    fn print_json(
        &self,
        regime: Regime,
        total_income: Decimal,
        breakdown: &TaxBreakdown,
        total_tax: Decimal,
        net_tax: Decimal,
    ) -> anyhow::Result<()> {
        let output = ComputeOutput {
            regime: regime.to_string(),
            total_income: format!("{:.2}", total_income),
            stcg: format!("{:.2}", self.income.stcg),
            ltcg: format!("{:.2}", self.income.ltcg),
            base_tax: format!("{:.2}", breakdown.base_tax),
            surcharge: format!("{:.2}", breakdown.surcharge),
            cess: format!("{:.2}", breakdown.cess),
            rebate: format!("{:.2}", breakdown.rebate),
            marginal_relief: format!("{:.2}", breakdown.marginal_relief),
            total_tax: format!("{:.2}", total_tax),
            tds_paid: format!("{:.2}", self.income.tds_paid),
            net_tax: format!("{:.2}", net_tax),
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
