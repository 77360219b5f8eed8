//! Koinly universal-import row schema.

use serde::Serialize;

/// Sentinel filling every field of a structurally invalid source row.
pub const INVALID_ROW: &str = "Invalid Row";

/// One row of Koinly's universal import format. Fields serialize under
/// Koinly's exact header names, so writing these through `csv` produces the
/// importable file directly. All fields stay textual: amounts keep the exact
/// precision extracted from the source, and the date column may carry the
/// "Invalid Date" sentinel.
///
/// `net_worth_*` and `tx_hash` are part of the schema but always empty; the
/// NovaDAX export carries no such data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KoinlyRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Sent Amount")]
    pub sent_amount: String,
    #[serde(rename = "Sent Currency")]
    pub sent_currency: String,
    #[serde(rename = "Received Amount")]
    pub received_amount: String,
    #[serde(rename = "Received Currency")]
    pub received_currency: String,
    #[serde(rename = "Fee Amount")]
    pub fee_amount: String,
    #[serde(rename = "Fee Currency")]
    pub fee_currency: String,
    #[serde(rename = "Net Worth Amount")]
    pub net_worth_amount: String,
    #[serde(rename = "Net Worth Currency")]
    pub net_worth_currency: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "TxHash")]
    pub tx_hash: String,
}

impl KoinlyRow {
    /// The row emitted for a source record with fewer than five fields.
    pub fn invalid() -> Self {
        Self {
            date: INVALID_ROW.to_string(),
            sent_amount: INVALID_ROW.to_string(),
            sent_currency: INVALID_ROW.to_string(),
            received_amount: INVALID_ROW.to_string(),
            received_currency: INVALID_ROW.to_string(),
            fee_amount: INVALID_ROW.to_string(),
            fee_currency: INVALID_ROW.to_string(),
            net_worth_amount: INVALID_ROW.to_string(),
            net_worth_currency: INVALID_ROW.to_string(),
            label: INVALID_ROW.to_string(),
            description: INVALID_ROW.to_string(),
            tx_hash: INVALID_ROW.to_string(),
        }
    }
}
