//! Cache-busting query parameter.

use url::Url;

/// Query parameter carrying the request timestamp.
pub const CACHE_BUST_PARAM: &str = "time";

/// Returns `url` with `time=<unix_secs>` set, replacing any existing `time`
/// parameter and keeping every other query pair in order.
pub fn with_cache_buster(url: &Url, unix_secs: u64) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != CACHE_BUST_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut busted = url.clone();
    busted
        .query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(CACHE_BUST_PARAM, &unix_secs.to_string());
    busted
}
