pub mod income;
pub mod liability;
pub mod rules;
pub mod surcharge;

pub use income::{aggregate_income, aggregate_with_rules, IncomeSources};
pub use liability::{compute_tax, compute_with_rules, ExemptionAllocation, TaxBreakdown};
pub use rules::{Regime, RegimeRules};
pub use surcharge::SurchargeTable;
