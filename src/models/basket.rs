use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset class served by one table widget and one chart widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Equities,
    Bonds,
    Commodities,
    Currencies,
    Volatility,
    DigitalAssets,
}

/// Fixed ordered list of `(symbol, display name)` pairs
#[derive(Debug, Clone, Copy)]
pub struct Basket {
    pub members: &'static [(&'static str, &'static str)],
}

impl Basket {
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.members.iter().map(|(symbol, _)| *symbol)
    }
}

const EQUITY_TABLE: &[(&str, &str)] = &[
    ("^NDX", "NASDAQ"),
    ("^GSPC", "S&P 500"),
    ("VEU", "IEF (Global Ex-US)"),
    ("FEZ", "STOXX 50"),
    ("^N225", "NIKKEI"),
    ("ASHR", "CSI 300"),
];

const EQUITY_CHART: &[(&str, &str)] = &[
    ("^GSPC", "S&P 500"),
    ("^DJI", "Dow Jones"),
    ("^IXIC", "NASDAQ"),
    ("^FTSE", "FTSE 100"),
    ("^N225", "Nikkei 225"),
    ("^HSI", "Hang Seng"),
];

const BONDS: &[(&str, &str)] = &[
    ("SHY", "US Treasury ETF (1-3Y)"),
    ("IEF", "US Treasury ETF (7-10Y)"),
    ("TLT", "US Treasury ETF (20Y+)"),
    ("HYG", "US HY ETF"),
    ("LQD", "US Inv Grade ETF"),
];

const COMMODITIES: &[(&str, &str)] = &[
    ("GLD", "Gold"),
    ("SLV", "Silver"),
    ("CPER", "Copper"),
    ("URA", "Uranium"),
    ("BNO", "Brent Crude Oil"),
    ("USO", "WTI Crude Oil"),
];

const CURRENCIES: &[(&str, &str)] = &[
    ("DX-Y.NYB", "US Dollar Index (DXY)"),
    ("EURUSD=X", "EUR/USD"),
    ("JPYUSD=X", "JPY/USD"),
    ("GBPUSD=X", "GBP/USD"),
];

const VOLATILITY: &[(&str, &str)] = &[("^VIX", "VIX"), ("MOVE", "MOVE")];

const DIGITAL_ASSETS: &[(&str, &str)] = &[
    ("BTC-USD", "Bitcoin USD"),
    ("ETH-USD", "Ethereum USD"),
    ("SOL-USD", "Solana USD"),
];

impl AssetClass {
    pub const ALL: [AssetClass; 6] = [
        AssetClass::Equities,
        AssetClass::Bonds,
        AssetClass::Commodities,
        AssetClass::Currencies,
        AssetClass::Volatility,
        AssetClass::DigitalAssets,
    ];

    /// Parse from string (case-insensitive, accepts route slugs)
    pub fn from_str(s: &str) -> Result<Self, AppError> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "equities" | "equity" => Ok(AssetClass::Equities),
            "bonds" | "fixed_income" => Ok(AssetClass::Bonds),
            "commodities" => Ok(AssetClass::Commodities),
            "currencies" | "fx" => Ok(AssetClass::Currencies),
            "volatility" => Ok(AssetClass::Volatility),
            "digital_assets" | "crypto" => Ok(AssetClass::DigitalAssets),
            _ => Err(AppError::UnknownAssetClass(s.to_string())),
        }
    }

    /// Basket of the `*_table` widget
    pub fn table_basket(&self) -> Basket {
        let members = match self {
            AssetClass::Equities => EQUITY_TABLE,
            AssetClass::Bonds => BONDS,
            AssetClass::Commodities => COMMODITIES,
            AssetClass::Currencies => CURRENCIES,
            AssetClass::Volatility => VOLATILITY,
            AssetClass::DigitalAssets => DIGITAL_ASSETS,
        };
        Basket { members }
    }

    /// Basket of the `*_performance` widget (equities plot a broader index set)
    pub fn chart_basket(&self) -> Basket {
        match self {
            AssetClass::Equities => Basket {
                members: EQUITY_CHART,
            },
            _ => self.table_basket(),
        }
    }

    /// Header of the first table column
    pub fn label_column(&self) -> &'static str {
        match self {
            AssetClass::Equities | AssetClass::Volatility => "Index",
            AssetClass::Bonds | AssetClass::Commodities => "ETF",
            AssetClass::Currencies => "Currency",
            AssetClass::DigitalAssets => "Asset",
        }
    }

    pub fn table_endpoint(&self) -> &'static str {
        match self {
            AssetClass::Equities => "equities_table",
            AssetClass::Bonds => "bonds_table",
            AssetClass::Commodities => "commodities_table",
            AssetClass::Currencies => "currencies_table",
            AssetClass::Volatility => "volatility_table",
            AssetClass::DigitalAssets => "digital_assets_table",
        }
    }

    pub fn chart_endpoint(&self) -> &'static str {
        match self {
            AssetClass::Equities => "equity_performance",
            AssetClass::Bonds => "bonds_performance",
            AssetClass::Commodities => "commodities_performance",
            AssetClass::Currencies => "currencies_performance",
            AssetClass::Volatility => "volatility_performance",
            AssetClass::DigitalAssets => "digital_assets_performance",
        }
    }

    /// Widget category shown by the dashboard host
    pub fn category(&self) -> &'static str {
        match self {
            AssetClass::Equities => "Equities",
            AssetClass::Bonds => "Fixed Income",
            AssetClass::Commodities => "Commodities",
            AssetClass::Currencies => "Currencies",
            AssetClass::Volatility => "Volatility",
            AssetClass::DigitalAssets => "Digital Assets",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Equities => "equities",
            AssetClass::Bonds => "bonds",
            AssetClass::Commodities => "commodities",
            AssetClass::Currencies => "currencies",
            AssetClass::Volatility => "volatility",
            AssetClass::DigitalAssets => "digital_assets",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
