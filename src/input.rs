use crate::engine::operation::{AccountCategory, Operation, OperationKind};
use crate::engine::{AccountId, Amount};

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, PartialEq)]
pub enum Error {
    Json(String),   // The JSON itself is malformed, or a tag is unknown.
    Format(String), // Well-formed JSON that doesn't convert into an Operation.
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Self::Format(err.to_string())
    }
}

// When parsing, I'm making the assumption that we want to completely abort
// on errors.
// When we're reading a JSON batch file, it makes sense to fix the file (or
// the code), then try again.
// For a real-world scenario where we're receiving a stream of events instead,
// we would probably filter out bad records and send them to an external
// system for analysis and recovery.
pub fn parse(input: impl std::io::Read) -> Result<Vec<Operation>, Error> {
    let buffered = std::io::BufReader::new(input);
    let records: Vec<OperationRecord> = serde_json::from_reader(buffered)?;

    records
        .into_iter()
        .map(|record| Ok(record.try_into()?))
        .collect()
}

// I have an OperationRecord type so the external wire vocabulary
// (natural/juridical, cash_in/cash_out, nested amount object) stays at the
// boundary, and the rest of the code reasons about a clean domain type.
//
// This gives me way more flexibility in crafting a clean Operation type,
// that makes the rest of the code easier to reason about.
// Besides, the internal Operation type makes no assumption on how the
// operations are actually formatted, so both domain logic and parsing are
// easier to maintain.
#[derive(Debug, Deserialize)]
pub struct OperationRecord {
    date: String,

    user_id: AccountId,

    user_type: UserType,

    #[serde(rename = "type")]
    operation_type: OperationType,

    operation: AmountRecord,
}

#[derive(Debug, Deserialize)]
struct AmountRecord {
    amount: Amount,
    currency: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum UserType {
    Natural,
    Juridical,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum OperationType {
    CashIn,
    CashOut,
}

impl TryFrom<OperationRecord> for Operation {
    type Error = &'static str;
    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
            .map_err(|_| "date is not a valid YYYY-MM-DD calendar date")?;

        let category = match record.user_type {
            UserType::Natural => AccountCategory::Individual,
            UserType::Juridical => AccountCategory::Organization,
        };
        let kind = match record.operation_type {
            OperationType::CashIn => OperationKind::Deposit,
            OperationType::CashOut => OperationKind::Withdrawal,
        };

        Ok(Self::new(
            date,
            record.user_id,
            category,
            kind,
            record.operation.amount,
            record.operation.currency,
        ))
    }
}

#[test]
// Parsing well-formed data should return a vector of Operation.
fn test_parse_ok() {
    let data = r#"[
        { "date": "2016-01-05", "user_id": 1, "user_type": "natural", "type": "cash_in", "operation": { "amount": 200.00, "currency": "EUR" } },
        { "date": "2016-01-06", "user_id": 2, "user_type": "juridical", "type": "cash_out", "operation": { "amount": 300.00, "currency": "EUR" } }
    ]"#;
    let reader = std::io::Cursor::new(data);
    let operations = parse(reader).expect("parsing should succeed");

    assert_eq!(2, operations.len());
    assert_eq!(AccountCategory::Individual, operations[0].category);
    assert_eq!(OperationKind::Deposit, operations[0].kind);
    assert_eq!(AccountCategory::Organization, operations[1].category);
    assert_eq!(OperationKind::Withdrawal, operations[1].kind);
}

#[test]
fn test_parse_empty_batch() {
    let reader = std::io::Cursor::new("[]");
    let operations = parse(reader).expect("parsing should succeed");
    assert!(operations.is_empty());
}

#[test]
// Parsing incorrectly formatted data should return an Err.
fn test_parse_invalid_format() {
    for (data, err_contains) in vec![
        ("*** not json at all", "expected value"),
        (
            r#"[{ "date": "2016-01-05", "user_id": 1, "user_type": "alien", "type": "cash_in", "operation": { "amount": 1.0, "currency": "EUR" } }]"#,
            "unknown variant `alien`",
        ),
        (
            r#"[{ "date": "2016-01-05", "user_id": 1, "user_type": "natural", "type": "transfer", "operation": { "amount": 1.0, "currency": "EUR" } }]"#,
            "unknown variant `transfer`",
        ),
        (
            r#"[{ "date": "2016-01-05", "user_id": 1, "user_type": "natural", "type": "cash_in" }]"#,
            "missing field `operation`",
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let got_err = parse(reader);
        assert!(got_err.is_err());

        let err = got_err.err().unwrap();
        match err {
            Error::Json(msg) => assert!(msg.contains(err_contains), "{:?}", msg),
            Error::Format(_) => panic!("unexpected error"),
        }
    }
}

#[test]
// Records with an unparseable date should fail to convert into an Operation.
fn test_parse_invalid_date() {
    let data = r#"[{ "date": "yesterday", "user_id": 1, "user_type": "natural", "type": "cash_in", "operation": { "amount": 1.0, "currency": "EUR" } }]"#;
    let reader = std::io::Cursor::new(data);
    let got_err = parse(reader);

    assert_eq!(
        Err(Error::Format(
            "date is not a valid YYYY-MM-DD calendar date".to_string()
        )),
        got_err
    );
}
