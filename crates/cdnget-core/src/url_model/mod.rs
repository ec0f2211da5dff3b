//! URL handling for CDN downloads.
//!
//! Derives the local file name from the URL path (never from response
//! headers) and rewrites URLs with a cache-busting query parameter.

mod cache_bust;
mod path;

pub use cache_bust::{with_cache_buster, CACHE_BUST_PARAM};
pub use path::filename_from_url_path;

use url::Url;

/// File name used when the URL path has no usable last segment.
pub const DEFAULT_FILENAME: &str = "download.bin";

/// Local file name for a download of `url`: the last non-empty path segment,
/// or `DEFAULT_FILENAME`.
///
/// # Examples
///
/// - `https://cdn.example.com/pkgs/tool-1.2.tar.gz?x=1` → `"tool-1.2.tar.gz"`
/// - `https://cdn.example.com/` → `"download.bin"`
pub fn local_filename(url: &Url) -> String {
    filename_from_url_path(url).unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn local_filename_from_url_path() {
        assert_eq!(
            local_filename(&parse("https://dl.example.com/public/org/repo/raw/files/tool.tar.gz")),
            "tool.tar.gz"
        );
    }

    #[test]
    fn local_filename_ignores_query() {
        assert_eq!(
            local_filename(&parse("https://dl.example.com/a/pkg.deb?time=1700000000")),
            "pkg.deb"
        );
    }

    #[test]
    fn local_filename_root_fallback() {
        assert_eq!(local_filename(&parse("https://dl.example.com/")), "download.bin");
        assert_eq!(local_filename(&parse("https://dl.example.com")), "download.bin");
    }

    #[test]
    fn cache_buster_does_not_change_file_name() {
        let url = parse("https://dl.example.com/a/pkg.whl");
        let busted = with_cache_buster(&url, 1_700_000_000);
        assert_eq!(local_filename(&url), local_filename(&busted));
    }
}
