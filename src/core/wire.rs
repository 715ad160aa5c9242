use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// NSE sends numbers as JSON numbers, numeric strings, `"-"` or null depending on the
/// endpoint and time of day. Anything that is not a finite number maps to `None`.
pub fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(v.as_ref().and_then(value_to_f64))
}

/// Like [`de_lenient_f64`] for counts; fractional or negative values map to `None`.
pub fn de_lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(v.as_ref().and_then(value_to_u64))
}

fn value_to_f64(v: &Value) -> Option<f64> {
    let f = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok()?,
        _ => return None,
    };
    f.is_finite().then_some(f)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn value_to_u64(v: &Value) -> Option<u64> {
    if let Value::Number(n) = v
        && let Some(u) = n.as_u64()
    {
        return Some(u);
    }
    let f = value_to_f64(v)?;
    // This cast is safe as we check the bounds and fraction first.
    (f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}
