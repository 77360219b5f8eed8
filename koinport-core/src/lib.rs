//! koinport-core: NovaDAX statement conversion into the Koinly universal
//! import format.

pub mod amount;
pub mod convert;
pub mod date;
pub mod koinly;
pub mod novadax;
pub mod text;

pub use amount::extract;
pub use convert::{convert_file, convert_statement, Summary};
pub use date::{convert_timestamp, INVALID_DATE};
pub use koinly::{KoinlyRow, INVALID_ROW};
pub use novadax::{classify, convert_record, Options, TxKind};
pub use text::fold;
