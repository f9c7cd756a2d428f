//! Stable JSON encoding for provenance documents.
//!
//! Output is indented with two spaces and ends with a newline. Characters
//! such as `<`, `>` and `&` are written literally, never as `\u` escapes.

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

/// Encode `value` as indented JSON bytes.
///
/// # Errors
///
/// Returns the serializer error if `value` cannot be represented as JSON.
pub fn to_vec_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::with_capacity(1024);
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"  "));
    value.serialize(&mut serializer)?;
    out.push(b'\n');
    Ok(out)
}
