// File: crates/grapher-core/src/codec.rs
// Summary: ViewState <-> location query codec (percent-escaped compact JSON token).
// Notes:
// - Decoding merges the parsed object over a default state; unknown keys are ignored.
// - The whole state is a single token after the separator, not a key/value list.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, warn};

use crate::error::{GrapherError, GrapherResult};
use crate::types::QUERY_SEPARATOR;
use crate::view::ViewState;

/// Characters left unescaped, matching `encodeURIComponent`'s unreserved marks.
const TOKEN: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Decode a location query (with or without the leading `?`) into a view state.
pub fn decode(query: &str) -> GrapherResult<ViewState> {
    let token = query.strip_prefix(QUERY_SEPARATOR).unwrap_or(query);
    if token.is_empty() {
        return Ok(ViewState::default());
    }
    let text = percent_decode_str(token)
        .decode_utf8()
        .map_err(|e| GrapherError::MalformedState(format!("query is not valid UTF-8: {e}")))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| GrapherError::MalformedState(format!("query is not valid JSON: {e}")))?;
    if !value.is_object() {
        return Err(GrapherError::MalformedState("query state must be a JSON object".to_string()));
    }
    let state: ViewState = serde_json::from_value(value)
        .map_err(|e| GrapherError::MalformedState(e.to_string()))?;
    debug!(countries = state.countries.len(), yscale = %state.yscale, "decoded view state");
    Ok(state)
}

/// Decode, substituting the default state when the query is malformed.
pub fn decode_or_default(query: &str) -> ViewState {
    decode(query).unwrap_or_else(|err| {
        warn!(error = %err, "falling back to default view state");
        ViewState::default()
    })
}

/// Escaped token for `state`, without base location or separator.
pub fn encode_query(state: &ViewState) -> String {
    // A struct of strings and a unit enum always serializes.
    let json = serde_json::to_string(state).unwrap_or_default();
    utf8_percent_encode(&json, TOKEN).to_string()
}

/// Full location for `state`: `base` stripped of any query, the separator, then the token.
pub fn encode(state: &ViewState, base: &str) -> String {
    let location = format!("{}{QUERY_SEPARATOR}{}", base_of(base), encode_query(state));
    debug!(%location, "encoded view state");
    location
}

/// Location without its query and fragment.
pub fn base_of(location: &str) -> &str {
    let end = location.find([QUERY_SEPARATOR, '#']).unwrap_or(location.len());
    &location[..end]
}

/// Query part of a location (text after the first `?`, fragment removed); empty when absent.
pub fn query_of(location: &str) -> &str {
    let without_fragment = location.split('#').next().unwrap_or(location);
    match without_fragment.split_once(QUERY_SEPARATOR) {
        Some((_, query)) => query,
        None => "",
    }
}
