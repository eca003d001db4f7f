use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use tracing::debug;

/// A search token, or a placeholder that is skipped
pub trait Marker {
    fn token(&self) -> Option<&str>;
}

impl Marker for str {
    fn token(&self) -> Option<&str> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl Marker for String {
    fn token(&self) -> Option<&str> {
        self.as_str().token()
    }
}

impl<T: Marker + ?Sized> Marker for &T {
    fn token(&self) -> Option<&str> {
        (**self).token()
    }
}

impl<T: Marker> Marker for Option<T> {
    fn token(&self) -> Option<&str> {
        self.as_ref().and_then(Marker::token)
    }
}

/// Percent-decode a marker, replacing invalid UTF-8 sequences
pub fn decode(token: &str) -> Cow<'_, str> {
    percent_decode_str(token).decode_utf8_lossy()
}

/// Find where a version begins inside `haystack`.
///
/// Markers are tried in order; the first one present anywhere in the
/// haystack wins, and the offset just past its earliest occurrence is
/// returned. A marker matches either as written or percent-decoded, the
/// haystack itself is never rewritten.
pub fn locate<I>(haystack: &str, markers: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: Marker,
{
    for marker in markers {
        let raw = match marker.token() {
            Some(token) => token,
            None => continue,
        };
        let decoded = decode(raw);

        let found = [raw, &*decoded]
            .iter()
            .filter(|token| !token.is_empty())
            .filter_map(|token| haystack.find(*token).map(|start| (start, start + token.len())))
            .min_by_key(|&(start, _)| start);

        if let Some((_, offset)) = found {
            debug!(marker = raw, offset, "marker located");
            return Some(offset);
        }
    }

    None
}
