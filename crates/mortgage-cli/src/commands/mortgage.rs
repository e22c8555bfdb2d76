use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use mortgage_core::{summarize, Mortgage};

use crate::input;
use crate::input::file::RawRecord;

/// Field order of the PiXELL River data files.
const RECORD_FIELDS: usize = 4;

/// Arguments for batch record processing
#[derive(Args)]
pub struct ProcessArgs {
    /// Path to a delimited file of `amount,rate,amortization,frequency` records
    pub file: String,

    /// Field delimiter
    #[arg(long, default_value = ",")]
    pub delimiter: char,
}

/// Arguments for a single payment calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CalculateArgs {
    /// Principal loan amount (e.g. 682912.43)
    #[arg(long)]
    pub amount: Option<String>,

    /// Rate key (e.g. FIXED_5, VARIABLE_1)
    #[arg(long)]
    pub rate: Option<String>,

    /// Payment frequency key (MONTHLY, BI_WEEKLY, WEEKLY)
    #[arg(long)]
    pub frequency: Option<String>,

    /// Amortization period in years
    #[arg(long)]
    pub amortization: Option<String>,

    /// Print the machine-readable record instead of the payment summary
    #[arg(long)]
    pub repr: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Outcome of validating and pricing one data file record.
#[derive(Debug, Serialize)]
pub struct RecordOutcome {
    pub line: u64,
    pub data: String,
    pub status: &'static str,
    pub payment: Option<Decimal>,
    pub description: Option<String>,
    pub error: Option<String>,
}

pub fn run_process(args: ProcessArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = input::file::read_records(&args.file, args.delimiter)?;

    let outcomes: Vec<RecordOutcome> = records
        .iter()
        .map(evaluate_record)
        .collect();

    let rejected = outcomes.iter().filter(|o| o.status == "error").count();
    log::info!(
        "processed {} records from {} ({} rejected)",
        outcomes.len(),
        args.file,
        rejected
    );

    Ok(serde_json::to_value(outcomes)?)
}

/// Validate one record and price it, capturing any failure as text.
pub fn evaluate_record(record: &RawRecord) -> RecordOutcome {
    let data = record.text.clone();
    log::debug!("line {}: {:?}", record.line, record.fields);

    let parsed = match record.fields.as_slice() {
        [amount, rate, amortization, frequency] => {
            Mortgage::from_raw(amount, rate, frequency, amortization).map_err(|e| e.to_string())
        }
        fields => Err(format!(
            "expected {} fields, found {}",
            RECORD_FIELDS,
            fields.len()
        )),
    };

    match parsed {
        Ok(mortgage) => RecordOutcome {
            line: record.line,
            data,
            status: "ok",
            payment: Some(mortgage.calculate_payment()),
            description: Some(mortgage.to_string()),
            error: None,
        },
        Err(message) => {
            log::warn!("line {}: {}", record.line, message);
            RecordOutcome {
                line: record.line,
                data,
                status: "error",
                payment: None,
                description: None,
                error: Some(message),
            }
        }
    }
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mortgage: Mortgage = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(mortgage) = input::stdin::read_stdin()? {
        mortgage
    } else {
        mortgage_from_flags(&args)?
    };

    render_calculation(&mortgage, args.repr)
}

fn mortgage_from_flags(args: &CalculateArgs) -> Result<Mortgage, Box<dyn std::error::Error>> {
    let mortgage = Mortgage::from_raw(
        args.amount
            .as_deref()
            .ok_or("--amount is required (or provide --input)")?,
        args.rate
            .as_deref()
            .ok_or("--rate is required (or provide --input)")?,
        args.frequency
            .as_deref()
            .ok_or("--frequency is required (or provide --input)")?,
        args.amortization
            .as_deref()
            .ok_or("--amortization is required (or provide --input)")?,
    )?;
    Ok(mortgage)
}

fn render_calculation(mortgage: &Mortgage, repr: bool) -> Result<Value, Box<dyn std::error::Error>> {
    if repr {
        return Ok(Value::String(mortgage.to_record_string()));
    }

    let result = summarize(mortgage);
    Ok(serde_json::to_value(result)?)
}
