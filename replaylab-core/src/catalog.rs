//! Symbol catalog — the supported ticker list with per-symbol base prices.
//!
//! Supported symbols are business configuration, not logic: the catalog is
//! stored as a TOML file of `[[symbols]]` entries and ships with a built-in
//! default set. Unknown tickers fall back to `DEFAULT_BASE_PRICE` rather
//! than failing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base price used for tickers not present in the catalog.
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("catalog defines no symbols")]
    Empty,
}

/// One supported ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub ticker: String,
    pub name: String,
    pub base_price: f64,
}

/// Ordered list of supported tickers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    symbols: Vec<SymbolInfo>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_big7()
    }
}

impl Catalog {
    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        if catalog.symbols.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// The built-in default: seven large-cap US tickers.
    pub fn default_big7() -> Self {
        let entries = [
            ("AAPL", "Apple Inc.", 180.0),
            ("GOOGL", "Alphabet Inc.", 140.0),
            ("MSFT", "Microsoft Corp.", 410.0),
            ("AMZN", "Amazon.com Inc.", 175.0),
            ("TSLA", "Tesla Inc.", 250.0),
            ("NVDA", "NVIDIA Corp.", 880.0),
            ("SPY", "SPDR S&P 500 ETF", 520.0),
        ];
        Self {
            symbols: entries
                .into_iter()
                .map(|(ticker, name, base_price)| SymbolInfo {
                    ticker: ticker.into(),
                    name: name.into(),
                    base_price,
                })
                .collect(),
        }
    }

    pub fn symbols(&self) -> &[SymbolInfo] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Index of a ticker in display order, if supported.
    pub fn position(&self, ticker: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s.ticker == ticker)
    }

    pub fn get(&self, ticker: &str) -> Option<&SymbolInfo> {
        self.symbols.iter().find(|s| s.ticker == ticker)
    }

    /// Base price for a ticker, falling back to `DEFAULT_BASE_PRICE` for
    /// tickers outside the catalog.
    pub fn base_price(&self, ticker: &str) -> f64 {
        self.get(ticker)
            .map(|s| s.base_price)
            .unwrap_or(DEFAULT_BASE_PRICE)
    }
}
