//! CSV holdings ingestion.
//!
//! Expected header: `name,value,assetClass,industry,region,ticker,currency`.
//! `ticker` may be omitted; every other column is required. Category cells
//! are matched case-insensitively against the taxonomy labels.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::Utc;
use csv::StringRecord;
use shockwave_portfolio::{Asset, AssetClass, Holdings, Industry, PortfolioError, Region};
use tracing::debug;

use crate::{FileError, FileResult};

/// Columns that must appear in the header.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "name",
    "value",
    "assetClass",
    "industry",
    "region",
    "currency",
];

/// Columns that may be omitted.
pub const OPTIONAL_COLUMNS: [&str; 1] = ["ticker"];

/// Owner name used when none can be derived.
pub const DEFAULT_OWNER: &str = "Portfolio";

/// Header positions of the known columns.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    name: usize,
    value: usize,
    asset_class: usize,
    industry: usize,
    region: usize,
    ticker: Option<usize>,
    currency: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> FileResult<Self> {
        let find = |col: &str| headers.iter().position(|h| h == col);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| find(col).is_none())
            .map(|col| (*col).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(FileError::MissingColumns { columns: missing });
        }

        let required = |col: &str| {
            find(col).ok_or_else(|| FileError::MissingColumns {
                columns: vec![col.to_string()],
            })
        };

        Ok(Self {
            name: required("name")?,
            value: required("value")?,
            asset_class: required("assetClass")?,
            industry: required("industry")?,
            region: required("region")?,
            ticker: find("ticker"),
            currency: required("currency")?,
        })
    }
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

fn parse_category<T>(record: &StringRecord, idx: usize, column: &str, row: usize) -> FileResult<T>
where
    T: FromStr<Err = PortfolioError>,
{
    let raw = cell(record, idx);
    raw.parse().map_err(|_| FileError::UnknownCategory {
        column: column.to_string(),
        value: raw.to_string(),
        row,
    })
}

fn parse_row(record: &StringRecord, cols: &ColumnIndex, index: usize) -> FileResult<Asset> {
    let row = index + 1;
    let name = cell(record, cols.name);

    let value = cell(record, cols.value)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FileError::InvalidValue {
            name: name.to_string(),
            row,
        })?;
    if value < 0.0 {
        return Err(FileError::NegativeValue {
            name: name.to_string(),
            row,
        });
    }

    let asset_class: AssetClass = parse_category(record, cols.asset_class, "assetClass", row)?;
    let industry: Industry = parse_category(record, cols.industry, "industry", row)?;
    let region: Region = parse_category(record, cols.region, "region", row)?;

    let mut builder = Asset::builder()
        .id(format!("asset-{index}"))
        .name(name)
        .value(value)
        .asset_class(asset_class)
        .industry(industry)
        .region(region);

    if let Some(ticker) = cols.ticker.map(|i| cell(record, i)).filter(|t| !t.is_empty()) {
        builder = builder.ticker(ticker);
    }
    let currency = cell(record, cols.currency);
    if !currency.is_empty() {
        builder = builder.currency(currency);
    }

    Ok(builder.build()?)
}

/// Reads holdings from any CSV source.
///
/// # Errors
///
/// Returns [`FileError::EmptyFile`] when there are no data rows,
/// [`FileError::MissingColumns`] for an incomplete header, and a row-level
/// error for the first invalid row.
pub fn read_holdings<R: Read>(reader: R, owner: &str) -> FileResult<Holdings> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(FileError::EmptyFile);
    }

    let cols = ColumnIndex::from_headers(&headers)?;

    let assets = records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_row(record, &cols, index))
        .collect::<FileResult<Vec<_>>>()?;

    let holdings = Holdings::new(owner, assets, Utc::now())?;
    debug!(
        owner = holdings.owner(),
        assets = holdings.len(),
        total_value = holdings.total_value(),
        "parsed holdings csv"
    );
    Ok(holdings)
}

/// Parses holdings from CSV text, owned by `owner` or [`DEFAULT_OWNER`].
///
/// # Errors
///
/// See [`read_holdings`].
pub fn parse_holdings_csv(input: &str, owner: Option<&str>) -> FileResult<Holdings> {
    read_holdings(input.as_bytes(), owner.unwrap_or(DEFAULT_OWNER))
}

/// Reads a holdings CSV file; the owner is the file name without extension.
///
/// # Errors
///
/// Returns [`FileError::Io`] if the file cannot be opened, otherwise see
/// [`read_holdings`].
pub fn read_holdings_csv(path: impl AsRef<Path>) -> FileResult<Holdings> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading holdings csv");
    let file = File::open(path)?;
    read_holdings(file, &owner_from_path(path))
}

/// Derives an owner name from a file path (stem, or [`DEFAULT_OWNER`]).
#[must_use]
pub fn owner_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_OWNER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,value,assetClass,industry,region,ticker,currency\n";

    #[test]
    fn test_parse_basic() {
        let csv = format!(
            "{HEADER}Tesla,120,Stocks,Technology,North America,TSLA,USD\n\
             Villa , 80 ,Real Estate,Other,Europe,,\n"
        );
        let holdings = parse_holdings_csv(&csv, Some("Jane")).unwrap();

        assert_eq!(holdings.owner(), "Jane");
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings.total_value(), 200.0);

        let tesla = &holdings.assets()[0];
        assert_eq!(tesla.id, "asset-0");
        assert_eq!(tesla.ticker.as_deref(), Some("TSLA"));

        let villa = &holdings.assets()[1];
        assert_eq!(villa.id, "asset-1");
        assert_eq!(villa.name, "Villa");
        assert_eq!(villa.asset_class, AssetClass::RealEstate);
        assert_eq!(villa.ticker, None);
        assert_eq!(villa.currency, "USD");
    }

    #[test]
    fn test_default_owner() {
        let csv = format!("{HEADER}Cash,1,Cash,Finance,Global,,USD\n");
        let holdings = parse_holdings_csv(&csv, None).unwrap();
        assert_eq!(holdings.owner(), DEFAULT_OWNER);
    }

    #[test]
    fn test_ticker_column_optional() {
        let csv = "name,value,assetClass,industry,region,currency\n\
                   Gold,10,Commodities,Materials,Global,EUR\n";
        let holdings = parse_holdings_csv(csv, None).unwrap();
        assert_eq!(holdings.assets()[0].ticker, None);
        assert_eq!(holdings.assets()[0].currency, "EUR");
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            parse_holdings_csv("", None),
            Err(FileError::EmptyFile)
        ));
        assert!(matches!(
            parse_holdings_csv(HEADER, None),
            Err(FileError::EmptyFile)
        ));
    }

    #[test]
    fn test_missing_columns() {
        let csv = "name,assetClass,industry\nTesla,Stocks,Technology\n";
        match parse_holdings_csv(csv, None) {
            Err(FileError::MissingColumns { columns }) => {
                assert_eq!(columns, vec!["value", "region", "currency"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_value() {
        let csv = format!(
            "{HEADER}Cash,1,Cash,Finance,Global,,USD\n\
             Tesla,lots,Stocks,Technology,North America,TSLA,USD\n"
        );
        match parse_holdings_csv(&csv, None) {
            Err(FileError::InvalidValue { name, row }) => {
                assert_eq!(name, "Tesla");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_value() {
        let csv = format!("{HEADER}Debt,-5,Other,Other,Global,,USD\n");
        assert!(matches!(
            parse_holdings_csv(&csv, None),
            Err(FileError::NegativeValue { row: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_category() {
        let csv = format!("{HEADER}Thing,5,Beanie Babies,Other,Global,,USD\n");
        match parse_holdings_csv(&csv, None) {
            Err(FileError::UnknownCategory { column, value, row }) => {
                assert_eq!(column, "assetClass");
                assert_eq!(value, "Beanie Babies");
                assert_eq!(row, 1);
            }
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_rows_skipped() {
        let csv = format!("{HEADER}\nCash,1,Cash,Finance,Global,,USD\n,,,,,,\n\n");
        let holdings = parse_holdings_csv(&csv, None).unwrap();
        assert_eq!(holdings.len(), 1);
    }

    #[test]
    fn test_owner_from_path() {
        assert_eq!(owner_from_path(Path::new("/tmp/Jane Doe.csv")), "Jane Doe");
        assert_eq!(owner_from_path(Path::new("holdings")), "holdings");
        assert_eq!(owner_from_path(Path::new("/")), DEFAULT_OWNER);
    }
}
