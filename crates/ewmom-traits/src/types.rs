//! Common types used throughout the ewmom crates.
//!
//! This module defines the market data container signals are scored against,
//! along with the symbol and date aliases.

use polars::prelude::*;

use crate::{MomentumError, Result};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier, typically a ticker like "AAPL".
pub type Symbol = String;

/// Days between 0001-01-01 and 1970-01-01, the epoch of polars `Date` columns.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Container for market data.
///
/// `MarketData` wraps a Polars DataFrame in long format, one row per symbol
/// and date. Signals read one numeric column per symbol as an ordered
/// observation sequence (oldest first).
///
/// # Expected Schema
///
/// - `symbol`: security identifier (string)
/// - `date`: trading date (`Date` dtype)
/// - one or more numeric columns such as `close` or `volume`
///
/// # Example
///
/// ```no_run
/// use ewmom_traits::MarketData;
/// use polars::prelude::*;
///
/// let df = df! {
///     "symbol" => &["AAPL", "MSFT"],
///     "close" => &[150.0, 300.0],
///     "volume" => &[1000000, 2000000],
/// }.unwrap();
///
/// let market_data = MarketData::new(df);
/// ```
#[derive(Debug, Clone)]
pub struct MarketData {
    data: DataFrame,
}

impl MarketData {
    /// Creates a new `MarketData` instance from a DataFrame.
    pub const fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Returns whether the market data has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }

    /// Checks if a column exists in the market data.
    pub fn has_column(&self, name: &str) -> bool {
        self.data
            .get_column_names()
            .iter()
            .any(|s| s.as_str() == name)
    }

    /// Returns the distinct symbols in the data, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the `symbol` column is missing or not a string column.
    pub fn symbols(&self) -> Result<Vec<Symbol>> {
        let symbols = self
            .data
            .column("symbol")
            .map_err(|_| MomentumError::MissingColumn("symbol".to_string()))?
            .as_materialized_series()
            .str()?
            .unique()?;

        let mut unique: Vec<Symbol> = symbols
            .into_iter()
            .filter_map(|s: Option<&str>| s.map(|s| s.to_string()))
            .collect();
        unique.sort();
        Ok(unique)
    }

    /// Returns the ordered observation history of `column` for one symbol.
    ///
    /// Rows dated after `up_to` are excluded and the remaining rows are
    /// sorted by date, oldest first. Nulls become NaN so they are treated as
    /// missing observations.
    ///
    /// # Errors
    ///
    /// Returns an error if a required column is missing or has the wrong type.
    pub fn history(&self, symbol: &str, column: &str, up_to: Date) -> Result<Vec<f64>> {
        for col in ["symbol", "date", column] {
            if !self.has_column(col) {
                return Err(MomentumError::MissingColumn(col.to_string()));
            }
        }

        let date_mask = self
            .data
            .column("date")?
            .as_materialized_series()
            .date()?
            .into_iter()
            .map(|d: Option<i32>| {
                d.and_then(|d| Date::from_num_days_from_ce_opt(d + UNIX_EPOCH_DAYS_FROM_CE))
                    .is_some_and(|d| d <= up_to)
            })
            .collect::<BooleanChunked>();

        let symbol_mask = self
            .data
            .column("symbol")?
            .as_materialized_series()
            .str()?
            .equal(symbol);

        let rows = self.data.filter(&(&date_mask & &symbol_mask))?;
        let sorted = rows.sort(["date"], Default::default())?;

        let values = sorted
            .column(column)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;

        Ok(values
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }
}
