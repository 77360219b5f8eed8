//! NovaDAX export rows: positional field access and transaction-type
//! classification into Koinly fields.
//!
//! Export columns: timestamp, type label, currency, amount text, status.
//! Trailing columns are ignored; the status column is carried by the export
//! but plays no role in the Koinly schema.

use csv::StringRecord;

use crate::amount;
use crate::date;
use crate::koinly::KoinlyRow;
use crate::text;

/// Conversion knobs, passed down from the caller; nothing ambient.
#[derive(Debug, Clone)]
pub struct Options {
    /// Local fiat currency code. Decides which leg of a buy/sell a row is:
    /// the fiat leg moves money out on a buy and in on a sale.
    pub fiat: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fiat: "BRL".to_string(),
        }
    }
}

/// Transaction kinds in the NovaDAX vocabulary, in rule-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    TradeFee,
    WithdrawalFee,
    FiatDeposit,
    Bonus,
    Purchase,
    Sale,
    CryptoWithdrawal,
}

/// Ordered classification rules over the folded label. First match wins, and
/// the order is load-bearing: "taxa de saque de criptomoedas" must be
/// consumed by its fee rule before the plain "saque de criptomoedas" rule
/// can see it.
const RULES: &[(&str, TxKind)] = &[
    ("taxa de transacao", TxKind::TradeFee),
    ("taxa de saque de criptomoedas", TxKind::WithdrawalFee),
    ("deposito em reais", TxKind::FiatDeposit),
    ("redeemed bonus", TxKind::Bonus),
    ("compra", TxKind::Purchase),
    ("venda", TxKind::Sale),
    ("saque de criptomoedas", TxKind::CryptoWithdrawal),
];

/// Classify a folded label, or `None` for a type outside the vocabulary.
/// Unmatched rows are still emitted, just with empty amount fields.
pub fn classify(folded_label: &str) -> Option<TxKind> {
    RULES
        .iter()
        .find(|(phrase, _)| folded_label.contains(phrase))
        .map(|&(_, kind)| kind)
}

/// Convert one NovaDAX data record into one Koinly row.
///
/// A record with fewer than five fields is structurally invalid and maps to
/// the all-sentinel row. Everything else degrades field by field: an
/// unparseable timestamp becomes the date sentinel, a missing amount becomes
/// an empty string, and an unknown type leaves the amount columns empty. The
/// record itself is never dropped.
pub fn convert_record(record: &StringRecord, opts: &Options) -> KoinlyRow {
    if record.len() < 5 {
        return KoinlyRow::invalid();
    }

    let timestamp = record.get(0).unwrap_or("");
    let type_label = record.get(1).unwrap_or("");
    let currency = record.get(2).unwrap_or("");
    let amount_text = record.get(3).unwrap_or("");

    let value = amount::extract(amount_text);
    let is_fiat = currency.eq_ignore_ascii_case(&opts.fiat);

    let mut row = KoinlyRow {
        date: date::convert_timestamp(timestamp),
        description: type_label.to_string(),
        ..KoinlyRow::default()
    };

    match classify(&text::fold(type_label)) {
        Some(TxKind::TradeFee) | Some(TxKind::WithdrawalFee) => {
            row.fee_amount = value;
            row.fee_currency = currency.to_string();
        }
        Some(TxKind::FiatDeposit) => {
            row.received_amount = value;
            row.received_currency = currency.to_string();
        }
        Some(TxKind::Bonus) => {
            row.received_amount = value;
            row.received_currency = currency.to_string();
            row.label = "reward".to_string();
        }
        Some(TxKind::Purchase) if is_fiat => {
            row.sent_amount = value;
            row.sent_currency = opts.fiat.clone();
        }
        Some(TxKind::Purchase) => {
            row.received_amount = value;
            row.received_currency = currency.to_string();
        }
        Some(TxKind::Sale) if is_fiat => {
            row.received_amount = value;
            row.received_currency = opts.fiat.clone();
        }
        Some(TxKind::Sale) => {
            row.sent_amount = value;
            row.sent_currency = currency.to_string();
        }
        Some(TxKind::CryptoWithdrawal) => {
            row.sent_amount = value;
            row.sent_currency = currency.to_string();
        }
        None => {}
    }

    row
}
