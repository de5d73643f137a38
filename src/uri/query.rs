//! Query-string reconstruction.

use url::form_urlencoded;

use super::support::is_raw_value;

/// Separator for plain text and code.
pub const AMPERSAND: &str = "&";

/// Separator for URIs embedded in XML attributes.
pub const XML_AMPERSAND: &str = "&amp;";

/// Assemble `name=value` pairs into a query string.
///
/// A `None` value emits the bare name. Values wrapped in `RAW(...)` are
/// written verbatim even when `encode` is set, so they parse back
/// unchanged.
#[must_use]
pub fn create_query_string<I, K, V>(options: I, separator: &str, encode: bool) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut rc = String::new();
    for (i, (key, value)) in options.into_iter().enumerate() {
        if i > 0 {
            rc.push_str(separator);
        }
        append_parameter(
            &mut rc,
            key.as_ref(),
            value.as_ref().map(AsRef::<str>::as_ref),
            encode,
        );
    }
    rc
}

fn append_parameter(rc: &mut String, key: &str, value: Option<&str>, encode: bool) {
    if encode {
        rc.extend(form_urlencoded::byte_serialize(key.as_bytes()));
    } else {
        rc.push_str(key);
    }

    let Some(value) = value else {
        return;
    };
    rc.push('=');
    if is_raw_value(value) || !encode {
        rc.push_str(value);
    } else {
        rc.extend(form_urlencoded::byte_serialize(value.as_bytes()));
    }
}
