use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::core::NseError;
use crate::core::wire::{de_lenient_f64, de_lenient_u64};

use super::model::{ContractQuote, OptionChainSnapshot, StrikeRecord};

/// NSE expiry format, e.g. `26-Dec-2024`.
const EXPIRY_FORMAT: &str = "%d-%b-%Y";

/* ---------------- Minimal serde mapping for the option-chain payload ---------------- */

#[derive(Deserialize)]
pub(crate) struct ChainEnvelope {
    records: Option<RecordsNode>,
}

#[derive(Deserialize)]
struct RecordsNode {
    #[serde(rename = "underlyingValue", default, deserialize_with = "de_lenient_f64")]
    underlying_value: Option<f64>,
    #[serde(rename = "expiryDates", default)]
    expiry_dates: Option<Vec<String>>,
    // Rows stay untyped so one malformed row cannot fail the whole payload.
    #[serde(default)]
    data: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct StrikeNode {
    #[serde(rename = "strikePrice", default, deserialize_with = "de_lenient_f64")]
    strike_price: Option<f64>,
    #[serde(rename = "expiryDate", default)]
    expiry_date: Option<String>,
    #[serde(rename = "CE", default)]
    call: Option<Value>,
    #[serde(rename = "PE", default)]
    put: Option<Value>,
}

#[derive(Deserialize)]
struct ContractNode {
    #[serde(rename = "strikePrice", default, deserialize_with = "de_lenient_f64")]
    strike_price: Option<f64>,
    #[serde(rename = "expiryDate", default)]
    expiry_date: Option<String>,
    #[serde(rename = "openInterest", default, deserialize_with = "de_lenient_u64")]
    open_interest: Option<u64>,
    #[serde(rename = "impliedVolatility", default, deserialize_with = "de_lenient_f64")]
    implied_volatility: Option<f64>,
    #[serde(rename = "totalTradedVolume", default, deserialize_with = "de_lenient_u64")]
    total_traded_volume: Option<u64>,
    #[serde(rename = "underlyingValue", default, deserialize_with = "de_lenient_f64")]
    underlying_value: Option<f64>,
}

pub(crate) fn parse_expiry(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), EXPIRY_FORMAT).ok()
}

fn contract(v: Option<Value>) -> Option<ContractNode> {
    v.and_then(|v| serde_json::from_value(v).ok())
}

struct ParsedRow {
    strike: Option<f64>,
    expiry: Option<NaiveDate>,
    call: Option<ContractNode>,
    put: Option<ContractNode>,
}

impl ParsedRow {
    fn side_expiry(node: Option<&ContractNode>) -> Option<NaiveDate> {
        node.and_then(|c| c.expiry_date.as_deref()).and_then(parse_expiry)
    }
}

/* ---------------- Wire -> snapshot ---------------- */

pub(crate) fn parse_chain(body: &str, symbol: &str) -> Result<OptionChainSnapshot, NseError> {
    let env: ChainEnvelope = serde_json::from_str(body)
        .map_err(|e| NseError::Data(format!("option chain json parse: {e}")))?;
    into_snapshot(env, symbol)
}

pub(crate) fn into_snapshot(
    env: ChainEnvelope,
    symbol: &str,
) -> Result<OptionChainSnapshot, NseError> {
    let records = env
        .records
        .ok_or_else(|| NseError::Data(format!("option chain for {symbol}: missing records")))?;

    let rows: Vec<ParsedRow> = records
        .data
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| serde_json::from_value::<StrikeNode>(v).ok())
        .map(|n| ParsedRow {
            strike: n.strike_price,
            expiry: n.expiry_date.as_deref().and_then(parse_expiry),
            call: contract(n.call),
            put: contract(n.put),
        })
        .collect();

    if rows.is_empty() {
        return Err(NseError::EmptyData {
            symbol: symbol.to_string(),
        });
    }

    let expiry = nearest_expiry(&rows, records.expiry_dates.as_deref()).ok_or_else(|| {
        NseError::Data(format!("option chain for {symbol}: no parseable expiry date"))
    })?;

    let spot = records
        .underlying_value
        .or_else(|| {
            rows.iter()
                .flat_map(|r| [r.call.as_ref(), r.put.as_ref()])
                .flatten()
                .find_map(|c| c.underlying_value)
        })
        .filter(|v| *v > 0.0)
        .ok_or_else(|| {
            NseError::Data(format!("option chain for {symbol}: missing underlyingValue"))
        })?;

    let mut strikes: Vec<StrikeRecord> = rows
        .into_iter()
        .filter_map(|row| to_record(row, expiry))
        .collect();
    strikes.sort_by(|a, b| a.strike.total_cmp(&b.strike));

    if strikes.is_empty() {
        return Err(NseError::EmptyData {
            symbol: symbol.to_string(),
        });
    }

    Ok(OptionChainSnapshot {
        symbol: symbol.to_string(),
        spot,
        expiry,
        strikes,
    })
}

/// Earliest call-side expiry; put-side and the top-level list are fallbacks.
fn nearest_expiry(rows: &[ParsedRow], listed: Option<&[String]>) -> Option<NaiveDate> {
    let calls = rows
        .iter()
        .filter_map(|r| ParsedRow::side_expiry(r.call.as_ref()))
        .min();
    let puts = || {
        rows.iter()
            .filter_map(|r| ParsedRow::side_expiry(r.put.as_ref()))
            .min()
    };

    calls
        .or_else(puts)
        .or_else(|| rows.iter().filter_map(|r| r.expiry).min())
        .or_else(|| {
            listed
                .unwrap_or_default()
                .iter()
                .filter_map(|s| parse_expiry(s))
                .min()
        })
}

fn to_record(row: ParsedRow, expiry: NaiveDate) -> Option<StrikeRecord> {
    let strike = row
        .strike
        .or_else(|| row.call.as_ref().and_then(|c| c.strike_price))
        .or_else(|| row.put.as_ref().and_then(|c| c.strike_price))
        .filter(|s| s.is_finite())?;

    let row_expiry = row.expiry;
    // Quotes carry the record strike even when a side reports its own.
    let quote = |node: Option<ContractNode>| -> Option<ContractQuote> {
        let node = node?;
        let quote_expiry = ParsedRow::side_expiry(Some(&node)).or(row_expiry)?;
        (quote_expiry == expiry).then(|| ContractQuote {
            strike,
            expiry: quote_expiry,
            open_interest: node.open_interest,
            implied_volatility: node.implied_volatility,
            volume: node.total_traded_volume,
        })
    };

    let call = quote(row.call);
    let put = quote(row.put);

    let keep = call.is_some() || put.is_some() || row_expiry == Some(expiry);
    keep.then_some(StrikeRecord { strike, call, put })
}
