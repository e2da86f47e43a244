//! Load loans and financing plans from caller-provided files
//!
//! The core never persists anything; these helpers only materialize CSV
//! loan lists and JSON plan files into typed values for the binaries.

use super::{CalculationMode, FinancingPlan, Loan};
use chrono::NaiveDate;
use csv::Reader;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Raw CSV row matching the flat loans format.
///
/// Flat CSV loans carry no payment periods; variable-mode loans come in
/// through JSON plan files.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
    #[serde(rename = "DurationYears")]
    duration_years: u32,
    #[serde(rename = "MonthlyPayment")]
    monthly_payment: f64,
    #[serde(rename = "StartDate")]
    start_date: String,
    #[serde(rename = "CalculationMode")]
    calculation_mode: String,
}

impl CsvRow {
    fn to_loan(self) -> Result<Loan, Box<dyn Error>> {
        let calculation_mode = match self.calculation_mode.as_str() {
            "payment" => CalculationMode::Payment,
            "duration" => CalculationMode::Duration,
            "variable" => CalculationMode::Variable,
            other => return Err(format!("Unknown CalculationMode: {}", other).into()),
        };

        let start_date = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")?;

        Ok(Loan {
            name: self.name,
            amount: self.amount,
            annual_rate: self.annual_rate,
            duration_years: self.duration_years,
            monthly_payment: self.monthly_payment,
            start_date,
            calculation_mode,
            payment_periods: Vec::new(),
        })
    }
}

/// Load all loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<Loan>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut loans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.to_loan()?);
    }

    Ok(loans)
}

/// Load loans from any reader (e.g., string buffer, network stream)
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Loan>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut loans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.to_loan()?);
    }

    Ok(loans)
}

/// Load a full financing plan (nested loans, payment periods) from JSON
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<FinancingPlan, Box<dyn Error>> {
    let file = File::open(path)?;
    load_plan_from_reader(file)
}

/// Load a financing plan from any reader
pub fn load_plan_from_reader<R: std::io::Read>(reader: R) -> Result<FinancingPlan, Box<dyn Error>> {
    let plan = serde_json::from_reader(reader)?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOANS_CSV: &str = "\
Name,Amount,AnnualRate,DurationYears,MonthlyPayment,StartDate,CalculationMode
Main home,200000,1.5,20,965.09,2024-01-01,payment
Car,15000,4.2,5,277.61,2024-06-01,duration
";

    #[test]
    fn test_load_loans_from_csv() {
        let loans = load_loans_from_reader(LOANS_CSV.as_bytes()).unwrap();
        assert_eq!(loans.len(), 2);

        let home = &loans[0];
        assert_eq!(home.name, "Main home");
        assert_eq!(home.amount, 200_000.0);
        assert_eq!(home.calculation_mode, CalculationMode::Payment);
        assert_eq!(
            home.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );

        assert_eq!(loans[1].calculation_mode, CalculationMode::Duration);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let csv = "\
Name,Amount,AnnualRate,DurationYears,MonthlyPayment,StartDate,CalculationMode
Bad,1000,1.0,1,100,2024-01-01,weekly
";
        let err = load_loans_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Unknown CalculationMode"));
    }

    #[test]
    fn test_load_plan_from_json() {
        let json = r#"{
            "name": "House + car",
            "created": "2024-06-15",
            "loans": [
                {
                    "name": "Main home",
                    "amount": 200000.0,
                    "annual_rate": 1.5,
                    "duration_years": 20,
                    "monthly_payment": 965.09,
                    "start_date": "2024-01-01",
                    "calculation_mode": "payment"
                },
                {
                    "name": "Works",
                    "amount": 30000.0,
                    "annual_rate": 2.0,
                    "duration_years": 3,
                    "monthly_payment": 600.0,
                    "start_date": "2024-06-01",
                    "calculation_mode": "variable",
                    "payment_periods": [
                        {"id": 1, "start_month": 1, "end_month": 12, "monthly_payment": 500.0}
                    ]
                }
            ]
        }"#;

        let plan = load_plan_from_reader(json.as_bytes()).unwrap();
        assert_eq!(plan.name, "House + car");
        assert_eq!(plan.loans.len(), 2);
        assert_eq!(plan.loans[1].payment_periods.len(), 1);
        assert_eq!(plan.loans[1].payment_periods[0].monthly_payment, 500.0);
    }
}
