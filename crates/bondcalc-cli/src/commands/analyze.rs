//! Analyze command implementation.
//!
//! Calculates yields, total interest and price classification for a bond.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tabled::Tabled;

use bondcalc_analytics::validation::validate_all;
use bondcalc_analytics::{
    compute_bond_analytics_detailed, BondAnalyticsResult, BondParameters, CashFlow,
    CouponFrequency, PriceClassification,
};
use bondcalc_math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

use crate::cli::OutputFormat;
use crate::commands::parse_frequency;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_amount, print_csv, print_header, print_json, print_table, print_warning, KeyValue,
};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Face (par) value repaid at maturity
    #[arg(long, default_value = "1000")]
    pub face: f64,

    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long, default_value = "5")]
    pub coupon: f64,

    /// Current market price
    #[arg(short, long, default_value = "950")]
    pub price: f64,

    /// Years remaining to maturity
    #[arg(short, long, default_value = "10")]
    pub years: f64,

    /// Coupon frequency: 1=Annual, 2=SemiAnnual
    #[arg(long, default_value = "2", value_parser = parse_frequency)]
    pub frequency: CouponFrequency,

    /// Show the cash flow schedule
    #[arg(long)]
    pub cashflows: bool,

    /// Fail if the YTM solver does not converge
    #[arg(long)]
    pub strict: bool,

    /// Solver convergence tolerance
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Maximum solver iterations
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,
}

impl AnalyzeArgs {
    fn parameters(&self) -> BondParameters {
        BondParameters::new(self.face, self.coupon, self.price, self.years, self.frequency)
    }
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, format: OutputFormat) -> Result<()> {
    let params = args.parameters();
    let result = analyze(&params, &args)?;

    match format {
        OutputFormat::Table => {
            print_header("Bond Analytics");
            print_table(&summary(&params, &result));

            if args.cashflows {
                print_cashflows(&result.cash_flow_schedule);
            }
        }
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Csv => print_csv(&result.cash_flow_schedule)?,
        OutputFormat::Minimal => println!("YTM: {:.4}%", result.ytm),
    }

    Ok(())
}

fn analyze(params: &BondParameters, args: &AnalyzeArgs) -> CliResult<BondAnalyticsResult> {
    let violations = validate_all(params);
    if !violations.is_empty() {
        return Err(CliError::InvalidParameters(violations));
    }

    let solver = SolverConfig::try_new(args.tolerance, args.max_iterations)?;
    let (result, ytm) = compute_bond_analytics_detailed(params, &solver);

    if !ytm.is_converged() {
        if args.strict {
            return Err(CliError::NotConverged {
                termination: ytm.termination,
                iterations: ytm.iterations,
            });
        }
        print_warning(&format!(
            "YTM solver stopped on {} after {} iterations; reporting best estimate",
            ytm.termination, ytm.iterations
        ));
    }

    Ok(result)
}

fn summary(params: &BondParameters, result: &BondAnalyticsResult) -> Vec<KeyValue> {
    vec![
        KeyValue::from_amount("Face Value", params.face_value),
        KeyValue::from_percent("Coupon Rate", params.annual_coupon_rate, 2),
        KeyValue::from_amount("Market Price", params.market_price),
        KeyValue::new("Years to Maturity", params.years_to_maturity.to_string()),
        KeyValue::new("Coupon Frequency", params.coupon_frequency.to_string()),
        KeyValue::new("", ""), // Separator
        KeyValue::from_percent("Current Yield", result.current_yield, 2),
        KeyValue::from_percent("Yield to Maturity", result.ytm, 4),
        KeyValue::from_amount("Total Interest", result.total_interest_earned),
        KeyValue::new(
            "Classification",
            classification_label(result.price_classification),
        ),
    ]
}

fn classification_label(classification: PriceClassification) -> String {
    let label = classification.to_string();
    match classification {
        PriceClassification::Premium => label.green().to_string(),
        PriceClassification::Discount => label.red().to_string(),
        PriceClassification::Par => label,
    }
}

/// Print cash flow schedule.
fn print_cashflows(schedule: &[CashFlow]) {
    #[derive(Tabled)]
    struct CashflowRow {
        #[tabled(rename = "Period")]
        period: u32,
        #[tabled(rename = "Amount")]
        amount: String,
        #[tabled(rename = "Type")]
        cf_type: &'static str,
    }

    let rows: Vec<CashflowRow> = schedule
        .iter()
        .map(|cf| CashflowRow {
            period: cf.period,
            amount: format_amount(cf.amount),
            cf_type: if cf.is_principal {
                "Coupon + Principal"
            } else {
                "Coupon"
            },
        })
        .collect();

    print_header("Cash Flow Schedule");
    print_table(&rows);
}
