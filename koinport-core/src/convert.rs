//! Statement driver: NovaDAX CSV in, Koinly CSV out.
//!
//! One pass, one output row per input data row, input order preserved. The
//! per-record pipeline never fails; the only fatal errors here are I/O.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Writer};

use crate::date::INVALID_DATE;
use crate::koinly::INVALID_ROW;
use crate::novadax::{self, Options};

/// Counters reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Data rows written (header excluded); equals the input data rows.
    pub rows: usize,
    /// Rows with fewer than five fields, emitted as all-sentinel rows.
    pub invalid_rows: usize,
    /// Rows whose timestamp did not parse.
    pub invalid_dates: usize,
}

/// Convert a NovaDAX export read from `input` into Koinly rows on `output`.
///
/// The first input record is the NovaDAX header and is discarded. The Koinly
/// header goes out first, then one row per data record.
pub fn convert_statement<R: Read, W: Write>(
    input: R,
    output: W,
    opts: &Options,
) -> Result<Summary> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(input);
    let mut wtr = Writer::from_writer(output);

    let mut summary = Summary::default();

    for record in rdr.records() {
        let record = record.context("reading source record")?;
        let row = novadax::convert_record(&record, opts);

        if row.date == INVALID_ROW {
            summary.invalid_rows += 1;
        } else if row.date == INVALID_DATE {
            summary.invalid_dates += 1;
        }

        wtr.serialize(&row).context("writing output row")?;
        summary.rows += 1;
    }

    wtr.flush().context("flushing output")?;
    Ok(summary)
}

/// File-path wrapper around [`convert_statement`].
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    opts: &Options,
) -> Result<Summary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let reader = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let writer = File::create(output).with_context(|| format!("creating {}", output.display()))?;

    convert_statement(reader, writer, opts)
}
