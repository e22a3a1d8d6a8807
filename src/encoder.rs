//! Module encoding
//!
//! Each app module is embedded as a base64 literal inside a `require.register`
//! call. The literal is decoded and evaluated inside the module factory:
//!
//! ```text
//! require.register("<id>", function(exports, require, module) {
//! eval(decodeURIComponent(escape(atob("<base64>"))));
//! });
//! ```
//!
//! Base64 keeps quotes, backslashes and non-ASCII bytes in the module source from
//! terminating the enclosing script, and `decodeURIComponent(escape(..))` turns the
//! decoded bytes back into UTF-8 text. A `//# sourceURL=<id>.js` line is appended
//! to the payload before encoding so debuggers attribute the code to its module.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::write::EncoderWriter;

use crate::error::{
    Result,
    fs::{output_failed, read_failed},
};
use crate::stream::{copy_source, write_fragment};

/// Opening of every module registration, up to the module identifier
pub const REGISTER_OPEN: &str = "require.register(\"";

const FACTORY_OPEN: &str = "\", function(exports, require, module) {\neval(decodeURIComponent(escape(atob(\"";

const FACTORY_CLOSE: &str = "\"))));\n});\n";

/// Debug annotation appended to a module's source before encoding.
///
/// Line terminators in the id would end the comment early, so they become spaces.
pub fn source_url(id: &str) -> String {
    let id: String = id
        .chars()
        .map(|c| if is_line_terminator(c) { ' ' } else { c })
        .collect();
    format!("\n//# sourceURL={id}.js")
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Escape `value` for use between double quotes in a script.
///
/// `<` is escaped too so an id can never close the surrounding `<script>`.
pub fn escape_js_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '<' | '\u{2028}' | '\u{2029}' => {
                escaped.push_str(&format!("\\u{:04x}", u32::from(c)));
            }
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Encode the module `id` read from `source` as a registration fragment into `out`.
///
/// The payload is base64-encoded while it is copied, so memory use does not grow
/// with the module size. `origin` names the source in read errors.
pub fn encode_module<R, W>(id: &str, origin: &Path, source: &mut R, out: &mut W) -> Result<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    write_fragment(out, REGISTER_OPEN.as_bytes())?;
    write_fragment(out, escape_js_string(id).as_bytes())?;
    write_fragment(out, FACTORY_OPEN.as_bytes())?;

    {
        let mut encoder = EncoderWriter::new(&mut *out, &STANDARD);
        copy_source(origin, source, &mut encoder)?;
        encoder
            .write_all(source_url(id).as_bytes())
            .map_err(output_failed)?;
        encoder.finish().map_err(output_failed)?;
    }

    write_fragment(out, FACTORY_CLOSE.as_bytes())
}

/// Open the module file at `path` and encode it under `id` into `out`.
///
/// The file handle is released before returning, on success or failure.
pub fn write_module<W: Write + ?Sized>(id: &str, path: &Path, out: &mut W) -> Result<()> {
    let mut file = File::open(path).map_err(|e| read_failed(path, e))?;
    encode_module(id, path, &mut file, out)
}
