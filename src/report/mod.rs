//! Plain-text rendering of analytics for chat delivery.

use crate::analytics::{AnalyticsResult, ChainSummary};
use crate::core::NseError;
use crate::index::ScanEntry;

/// Upper bound per message; leaves headroom under Telegram's 4096-character cap.
pub const MESSAGE_LIMIT: usize = 4000;

/// Full multi-section report for one symbol.
pub fn format_analysis(a: &AnalyticsResult) -> String {
    let signals = a
        .signals
        .iter()
        .map(|s| format!("• {s}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "📈 {symbol} Options Analysis 📉\n\
         \n\
         Price Analysis\n\
         🔼 Spot Price: ₹{spot:.2}\n\
         📉 Max Pain: ₹{max_pain}\n\
         📅 Expiry: {expiry}\n\
         \n\
         Open Interest Analysis\n\
         📊 PCR: {pcr:.2}\n\
         📈 CE OI: {ce_oi}\n\
         📉 PE OI: {pe_oi}\n\
         \n\
         Volatility Analysis\n\
         📈 Avg CE IV: {ce_iv:.2}%\n\
         📉 Avg PE IV: {pe_iv:.2}%\n\
         🔄 IV Skew: {skew:.2}\n\
         🎚️ IV Rank: {rank:.1}%\n\
         \n\
         Volume Analysis\n\
         📈 CE Volume: {ce_vol}\n\
         📉 PE Volume: {pe_vol}\n\
         🔄 Volume PCR: {vol_pcr:.2}\n\
         \n\
         📢 Signals\n\
         {signals}\n",
        symbol = a.symbol,
        spot = a.spot,
        max_pain = format_price(a.max_pain),
        expiry = a.expiry.format("%d-%b-%Y"),
        pcr = a.oi.pcr,
        ce_oi = group_thousands(a.oi.total_call_oi),
        pe_oi = group_thousands(a.oi.total_put_oi),
        ce_iv = a.iv.mean_call_iv,
        pe_iv = a.iv.mean_put_iv,
        skew = a.iv.iv_skew,
        rank = a.iv.iv_rank,
        ce_vol = group_thousands(a.volume.total_call_volume),
        pe_vol = group_thousands(a.volume.total_put_volume),
        vol_pcr = a.volume.volume_pcr,
    )
}

/// Compact block used by batch scans.
pub fn format_summary(s: &ChainSummary) -> String {
    format!(
        "📊 **{symbol}**\n\
         💰 Current Price: {spot}\n\
         🔽 Support 1: {support}\n\
         🔼 Resistance 1: {resistance}\n\
         📈 PCR OI: {pcr:.2}\n\
         📢 Signal: {bias}\n\
         ✅ Recommendation: {rec}\n\
         🎯 Target: {target}\n\
         🛑 Stop Loss: {stop}\n",
        symbol = s.symbol,
        spot = format_price(s.spot),
        support = format_price(s.support),
        resistance = format_price(s.resistance),
        pcr = s.pcr,
        bias = s.bias,
        rec = s.recommendation,
        target = format_price(s.target),
        stop = format_price(s.stop_loss),
    )
}

/// Text shown in place of a summary when a symbol could not be analyzed.
pub fn format_failure(symbol: &str, err: &NseError) -> String {
    match err {
        NseError::EmptyData { .. } => format!("⚠️ No data for {symbol}\n"),
        NseError::Status { .. } | NseError::Http(_) | NseError::Session(_) => {
            format!("❌ Error fetching {symbol}\n")
        }
        NseError::Url(_) | NseError::Data(_) => format!("⚠️ Error analyzing {symbol}\n"),
    }
}

/// Render a scan and pack it into messages of at most [`MESSAGE_LIMIT`] characters.
pub fn format_scan(entries: &[ScanEntry]) -> Vec<String> {
    let parts: Vec<String> = entries
        .iter()
        .map(|e| match &e.outcome {
            Ok(summary) => format_summary(summary),
            Err(err) => format_failure(&e.symbol, err),
        })
        .collect();
    chunk_messages(&parts, MESSAGE_LIMIT)
}

/// Pack `parts` (each followed by a newline) into messages no longer than `limit` characters.
///
/// A part that alone exceeds `limit` is emitted as its own message rather than split.
pub fn chunk_messages<S: AsRef<str>>(parts: &[S], limit: usize) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for part in parts {
        let part = part.as_ref();
        let part_len = part.chars().count() + 1;
        if current_len > 0 && current_len + part_len > limit {
            messages.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push_str(part);
        current.push('\n');
        current_len += part_len;
    }

    if current_len > 0 {
        messages.push(current);
    }
    messages
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Strikes are usually whole numbers; show them without a fraction when they are.
fn format_price(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}
