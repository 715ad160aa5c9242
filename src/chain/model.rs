use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Index underlyings; everything else is looked up on the equities endpoint.
const INDEX_SYMBOLS: &[&str] = &["NIFTY", "BANKNIFTY", "FINNIFTY", "MIDCPNIFTY", "NIFTYNXT50"];

/// Which NSE option-chain endpoint a symbol lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityType {
    Equity,
    Index,
}

/// An underlying the option chain is requested for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Security {
    pub symbol: String,
    pub security_type: SecurityType,
}

impl Security {
    pub fn equity(symbol: impl AsRef<str>) -> Self {
        Self {
            symbol: symbol.as_ref().trim().to_uppercase(),
            security_type: SecurityType::Equity,
        }
    }

    pub fn index(symbol: impl AsRef<str>) -> Self {
        Self {
            symbol: symbol.as_ref().trim().to_uppercase(),
            security_type: SecurityType::Index,
        }
    }

    /// Upper-cases the symbol and picks the index endpoint for known index names.
    pub fn parse(symbol: impl AsRef<str>) -> Self {
        let sym = symbol.as_ref().trim().to_uppercase();
        if INDEX_SYMBOLS.contains(&sym.as_str()) {
            Self::index(sym)
        } else {
            Self::equity(sym)
        }
    }

    pub fn is_index(&self) -> bool {
        self.security_type == SecurityType::Index
    }
}

/// Call or put side of a strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionSide {
    Call,
    Put,
}

/// One listed contract. Fields the provider omitted or sent malformed are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractQuote {
    pub strike: f64,
    pub expiry: NaiveDate,
    pub open_interest: Option<u64>,
    /// Percentage units (`18.5` means 18.5%).
    pub implied_volatility: Option<f64>,
    pub volume: Option<u64>,
}

/// A strike with whichever sides are listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeRecord {
    pub strike: f64,
    pub call: Option<ContractQuote>,
    pub put: Option<ContractQuote>,
}

impl StrikeRecord {
    pub fn quote(&self, side: OptionSide) -> Option<&ContractQuote> {
        match side {
            OptionSide::Call => self.call.as_ref(),
            OptionSide::Put => self.put.as_ref(),
        }
    }
}

/// Normalized chain for the nearest expiry of one underlying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChainSnapshot {
    pub symbol: String,
    /// Underlying price at the time of the snapshot.
    pub spot: f64,
    /// Nearest expiry; quotes with any other expiry are ignored by the analytics.
    pub expiry: NaiveDate,
    /// Records in ascending strike order.
    pub strikes: Vec<StrikeRecord>,
}
