//! File name extraction from URL path.

use url::Url;

/// Extracts the last non-empty path segment of `url` for use as a file name.
///
/// The segment is kept as it appears in the URL (percent-encoding included), so
/// an encoded `/` can never become a path separator. Returns `None` if the path
/// is empty/root or the segment is `.`/`..`.
pub fn filename_from_url_path(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
