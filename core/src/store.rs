//! CSV persistence layer.
//!
//! RULE: Only store.rs touches the price file.
//! Every mutation rewrites the whole file. There is no locking: two
//! processes writing the same file race and the last writer wins.

use crate::{
    error::{WatchError, WatchResult},
    record::{PriceRecord, COLUMNS},
    table::PriceTable,
};
use std::path::PathBuf;

pub struct PriceStore {
    path: PathBuf,
}

impl PriceStore {
    /// Point the store at `path`. Nothing is read or created until `load()`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the full table.
    ///
    /// A missing file is created with the header only and an empty table
    /// is returned. A file with the wrong header or an unparsable row is
    /// `CorruptData`; missing prices are never read as zero.
    pub fn load(&self) -> WatchResult<PriceTable> {
        if !self.path.exists() {
            let table = PriceTable::new();
            self.save(&table)?;
            log::info!("created empty price file at {}", self.path.display());
            return Ok(table);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let header: Vec<String> = reader
            .headers()
            .map_err(|e| WatchError::CorruptData(format!("unreadable header: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();
        check_header(&header)?;

        let mut rows = Vec::new();
        for (i, result) in reader.deserialize::<PriceRecord>().enumerate() {
            let row_no = i + 1;
            let record =
                result.map_err(|e| WatchError::CorruptData(format!("row {row_no}: {e}")))?;
            check_prices(&record, row_no)?;
            rows.push(record);
        }

        log::debug!("loaded {} rows from {}", rows.len(), self.path.display());
        Ok(PriceTable::from_rows(rows))
    }

    /// Overwrite the file with `table`, header first, rows in table order.
    pub fn save(&self, table: &PriceTable) -> WatchResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(COLUMNS)?;
        for row in table.rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        log::info!("saved {} rows to {}", table.len(), self.path.display());
        Ok(())
    }
}

fn check_header(header: &[String]) -> WatchResult<()> {
    if header.iter().map(String::as_str).eq(COLUMNS) {
        return Ok(());
    }
    let missing: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|c| !header.iter().any(|h| h == c))
        .collect();
    let msg = if missing.is_empty() {
        format!(
            "expected header {}, found {}",
            COLUMNS.join(","),
            header.join(",")
        )
    } else {
        format!("missing columns: {}", missing.join(", "))
    };
    Err(WatchError::CorruptData(msg))
}

fn check_prices(record: &PriceRecord, row_no: usize) -> WatchResult<()> {
    let prices = [
        ("Your_Price", record.own_price),
        ("Swiggy_Price", record.competitor_a_price),
        ("Zomato_Price", record.competitor_b_price),
    ];
    match prices.iter().find(|(_, v)| !v.is_finite()) {
        Some((column, value)) => Err(WatchError::CorruptData(format!(
            "row {row_no}: {column} is not a number ({value})"
        ))),
        None => Ok(()),
    }
}
