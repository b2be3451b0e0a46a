//! Compare command - both regimes side by side

use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cmd::{format_inr, format_inr_signed, IncomeArgs};
use crate::tax::{aggregate_with_rules, compute_with_rules, Regime, RegimeRules, TaxBreakdown};

#[derive(Args, Debug)]
pub struct CompareCommand {
    #[command(flatten)]
    income: IncomeArgs,

    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug)]
struct RegimeOutcome {
    total_income: Decimal,
    breakdown: TaxBreakdown,
    total_tax: Decimal,
    net_tax: Decimal,
}

#[derive(Debug, Clone, Tabled)]
struct CompareRow {
    #[tabled(rename = "Component")]
    component: String,
    #[tabled(rename = "Old Regime")]
    old: String,
    #[tabled(rename = "New Regime")]
    new: String,
}

#[derive(Debug, Serialize)]
struct RegimeSummary {
    total_income: String,
    base_tax: String,
    surcharge: String,
    cess: String,
    rebate: String,
    marginal_relief: String,
    total_tax: String,
    net_tax: String,
}

#[derive(Debug, Serialize)]
struct CompareOutput {
    old: RegimeSummary,
    new: RegimeSummary,
    cheaper_regime: String,
    saving: String,
}

impl CompareCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let old = self.outcome(Regime::Old);
        let new = self.outcome(Regime::New);

        if self.json {
            self.print_json(&old, &new)
        } else {
            self.print_table(&old, &new);
            Ok(())
        }
    }

    fn outcome(&self, regime: Regime) -> RegimeOutcome {
        let rules = RegimeRules::for_regime(regime);
        let total_income = aggregate_with_rules(&rules, &self.income.sources());
        let breakdown =
            compute_with_rules(&rules, total_income, self.income.stcg, self.income.ltcg);
        let total_tax = breakdown.total();
        RegimeOutcome {
            total_income,
            breakdown,
            total_tax,
            net_tax: total_tax - self.income.tds_paid,
        }
    }

    fn print_table(&self, old: &RegimeOutcome, new: &RegimeOutcome) {
        let rows = vec![
            row("Taxable Income", old.total_income, new.total_income),
            row("Base Tax", old.breakdown.base_tax, new.breakdown.base_tax),
            row("Rebate", old.breakdown.rebate, new.breakdown.rebate),
            row(
                "Marginal Relief",
                old.breakdown.marginal_relief,
                new.breakdown.marginal_relief,
            ),
            row("Surcharge", old.breakdown.surcharge, new.breakdown.surcharge),
            row("Cess", old.breakdown.cess, new.breakdown.cess),
            row("Total Tax", old.total_tax, new.total_tax),
            CompareRow {
                component: "Net Payable".to_string(),
                old: format_inr_signed(old.net_tax),
                new: format_inr_signed(new.net_tax),
            },
        ];

        println!();
        println!("REGIME COMPARISON (AY 2026-27)");
        println!();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();

        let saving = (old.total_tax - new.total_tax).abs();
        if old.total_tax == new.total_tax {
            println!("Both regimes produce the same liability.");
        } else if new.total_tax < old.total_tax {
            println!("The new regime saves {}.", format_inr(saving));
        } else {
            println!("The old regime saves {}.", format_inr(saving));
        }
        println!();
    }

    fn print_json(&self, old: &RegimeOutcome, new: &RegimeOutcome) -> anyhow::Result<()> {
        let cheaper = if new.total_tax <= old.total_tax {
            Regime::New
        } else {
            Regime::Old
        };
        let output = CompareOutput {
            old: summary(old),
            new: summary(new),
            cheaper_regime: cheaper.to_string(),
            saving: format!("{:.2}", (old.total_tax - new.total_tax).abs()),
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

fn row(component: &str, old: Decimal, new: Decimal) -> CompareRow {
    CompareRow {
        component: component.to_string(),
        old: format_inr(old),
        new: format_inr(new),
    }
}

fn summary(outcome: &RegimeOutcome) -> RegimeSummary {
    RegimeSummary {
        total_income: format!("{:.2}", outcome.total_income),
        base_tax: format!("{:.2}", outcome.breakdown.base_tax),
        surcharge: format!("{:.2}", outcome.breakdown.surcharge),
        cess: format!("{:.2}", outcome.breakdown.cess),
        rebate: format!("{:.2}", outcome.breakdown.rebate),
        marginal_relief: format!("{:.2}", outcome.breakdown.marginal_relief),
        total_tax: format!("{:.2}", outcome.total_tax),
        net_tax: format!("{:.2}", outcome.net_tax),
    }
}
