pub mod batch;
pub mod compare;
pub mod compute;

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use crate::tax::{IncomeSources, Regime};

/// Income inputs shared by the compute and compare commands. All amounts
/// are annual figures in rupees and must be non-negative.
#[derive(Args, Debug)]
pub struct IncomeArgs {
    /// Gross annual salary before the standard deduction
    #[arg(long, default_value = "0")]
    pub salary: Decimal,

    /// Net business or professional income
    #[arg(long, default_value = "0")]
    pub business_income: Decimal,

    /// Gross annual value of house property
    #[arg(long, default_value = "0")]
    pub house_income: Decimal,

    /// Interest paid on a house property loan
    #[arg(long, default_value = "0")]
    pub house_loan_interest: Decimal,

    /// Income from other sources (interest, dividends)
    #[arg(long, default_value = "0")]
    pub other_sources: Decimal,

    /// Short-term capital gains
    #[arg(long, default_value = "0")]
    pub stcg: Decimal,

    /// Long-term capital gains
    #[arg(long, default_value = "0")]
    pub ltcg: Decimal,

    /// TDS and advance tax already paid
    #[arg(long, default_value = "0")]
    pub tds_paid: Decimal,
}

impl IncomeArgs {
    pub fn sources(&self) -> IncomeSources {
        IncomeSources {
            salary: self.salary,
            business: self.business_income,
            house_property: self.house_income,
            other_sources: self.other_sources,
            house_loan_interest: self.house_loan_interest,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RegimeArg {
    Old,
    #[default]
    New,
}

impl From<RegimeArg> for Regime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::Old => Regime::Old,
            RegimeArg::New => Regime::New,
        }
    }
}

pub fn format_inr(amount: Decimal) -> String {
    format!("\u{20B9}{:.2}", amount)
}

pub fn format_inr_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-\u{20B9}{:.2}", amount.abs())
    } else {
        format!("\u{20B9}{:.2}", amount)
    }
}
