//! Bundled sample holdings.

use shockwave_portfolio::Holdings;

use crate::holdings_csv::parse_holdings_csv;
use crate::FileResult;

/// Owner name given to the sample holdings.
pub const SAMPLE_OWNER: &str = "Sample Portfolio";

/// A concentrated multi-asset portfolio for demos and tests.
pub const SAMPLE_HOLDINGS_CSV: &str = "\
name,value,assetClass,industry,region,ticker,currency
Tesla,120000000000,Stocks,Technology,North America,TSLA,USD
SpaceX,50000000000,Private Equity,Technology,North America,,USD
Twitter / X,30000000000,Private Equity,Technology,North America,,USD
Bitcoin,15000000000,Cryptocurrency,Finance,Global,BTC,USD
Real Estate Portfolio,10000000000,Real Estate,Other,North America,,USD
Boring Company,5000000000,Private Equity,Industrials,North America,,USD
Neuralink,3000000000,Private Equity,Healthcare,North America,,USD
US Treasury Bonds,2000000000,Bonds,Finance,North America,,USD
Cash and Equivalents,5000000000,Cash,Finance,Global,,USD
Artwork Collection,1000000000,Other,Other,Global,,USD
Solar City,4000000000,Stocks,Energy,North America,,USD
";

/// Parses [`SAMPLE_HOLDINGS_CSV`].
///
/// # Errors
///
/// Only fails if the bundled data is malformed.
pub fn sample_holdings() -> FileResult<Holdings> {
    parse_holdings_csv(SAMPLE_HOLDINGS_CSV, Some(SAMPLE_OWNER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shockwave_portfolio::AssetClass;

    #[test]
    fn test_sample_parses() {
        let holdings = sample_holdings().unwrap();
        assert_eq!(holdings.owner(), SAMPLE_OWNER);
        assert_eq!(holdings.len(), 11);
        assert_eq!(holdings.total_value(), 245_000_000_000.0);
        assert_eq!(holdings.assets()[2].name, "Twitter / X");
        assert_eq!(holdings.assets()[3].ticker.as_deref(), Some("BTC"));
        assert_eq!(holdings.assets()[10].asset_class, AssetClass::Stocks);
    }
}
