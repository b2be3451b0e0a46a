//! Batch command - compute liabilities for scenarios from a CSV file

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tax::{aggregate_income, compute_tax, IncomeSources, Regime};

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// Scenario CSV file. Reads from stdin if not specified.
    #[arg(default_value = "-")]
    file: PathBuf,
}

/// One input scenario. Column names match the CSV header.
#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    regime: String,
    salary: Decimal,
    business_income: Decimal,
    house_income: Decimal,
    other_sources: Decimal,
    house_loan_interest: Option<Decimal>,
    stcg: Decimal,
    ltcg: Decimal,
    tds_paid: Option<Decimal>,
}

/// One output row, written to stdout as CSV
#[derive(Debug, Serialize)]
struct ResultRecord {
    regime: String,
    total_income: String,
    base_tax: String,
    surcharge: String,
    cess: String,
    rebate: String,
    marginal_relief: String,
    total_tax: String,
    net_tax: String,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let scenarios = self.read_scenarios()?;
        let mut writer = csv::Writer::from_writer(io::stdout());

        for (row, scenario) in scenarios.into_iter().enumerate() {
            let result = compute_scenario(&scenario)
                .map_err(|e| anyhow::anyhow!("row {}: {}", row + 1, e))?;
            writer.serialize(result)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn read_scenarios(&self) -> anyhow::Result<Vec<ScenarioRecord>> {
        let mut buffer = Vec::new();
        if self.file.as_os_str() == "-" {
            let stdin = io::stdin();
            BufReader::new(stdin.lock()).read_to_end(&mut buffer)?;
            if buffer.is_empty() {
                anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
            }
        } else {
            BufReader::new(File::open(&self.file)?).read_to_end(&mut buffer)?;
        }

        let mut reader = csv::Reader::from_reader(io::Cursor::new(buffer));
        let scenarios = reader
            .deserialize()
            .collect::<Result<Vec<ScenarioRecord>, _>>()?;
        Ok(scenarios)
    }
}

fn compute_scenario(scenario: &ScenarioRecord) -> anyhow::Result<ResultRecord> {
    let regime: Regime = scenario.regime.parse()?;

    let sources = IncomeSources {
        salary: scenario.salary,
        business: scenario.business_income,
        house_property: scenario.house_income,
        other_sources: scenario.other_sources,
        house_loan_interest: scenario.house_loan_interest.unwrap_or_default(),
    };
    let total_income = aggregate_income(regime, &sources);
    let breakdown = compute_tax(regime, total_income, scenario.stcg, scenario.ltcg);

    let total_tax = breakdown.total();
    let net_tax = total_tax - scenario.tds_paid.unwrap_or_default();

    Ok(ResultRecord {
        regime: regime.to_string(),
        total_income: format!("{:.2}", total_income),
        base_tax: format!("{:.2}", breakdown.base_tax),
        surcharge: format!("{:.2}", breakdown.surcharge),
        cess: format!("{:.2}", breakdown.cess),
        rebate: format!("{:.2}", breakdown.rebate),
        marginal_relief: format!("{:.2}", breakdown.marginal_relief),
        total_tax: format!("{:.2}", total_tax),
        net_tax: format!("{:.2}", net_tax),
    })
}
