//! Flag-driven string escaping layered over serde_json's serializer.

use std::io;

use serde_json::ser::{CharEscape, Formatter};

use crate::options::Flags;

/// A serde_json [`Formatter`] that applies the option flags: `\/` for
/// slashes, `\uXXXX` for non-ASCII text (UTF-16 units, lowercase hex), and
/// uppercase-hex escapes for the HTML-significant characters.
pub(crate) struct EscapeFormatter {
    flags: Flags,
}

impl EscapeFormatter {
    pub(crate) fn new(flags: Flags) -> Self {
        Self { flags }
    }
}

fn write_unicode_escape<W>(writer: &mut W, unit: u16, upper: bool) -> io::Result<()>
where
    W: ?Sized + io::Write,
{
    if upper {
        write!(writer, "\\u{unit:04X}")
    } else {
        write!(writer, "\\u{unit:04x}")
    }
}

impl Formatter for EscapeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        // serde_json only routes characters here that its own escape table
        // leaves alone, so quotes, backslashes, and control characters never
        // show up in a fragment.
        for ch in fragment.chars() {
            match ch {
                '/' if !self.flags.contains(Flags::UNESCAPED_SLASHES) => {
                    writer.write_all(b"\\/")?;
                }
                '<' if self.flags.contains(Flags::HEX_TAG) => {
                    write_unicode_escape(writer, '<' as u16, true)?;
                }
                '>' if self.flags.contains(Flags::HEX_TAG) => {
                    write_unicode_escape(writer, '>' as u16, true)?;
                }
                '&' if self.flags.contains(Flags::HEX_AMP) => {
                    write_unicode_escape(writer, '&' as u16, true)?;
                }
                '\'' if self.flags.contains(Flags::HEX_APOS) => {
                    write_unicode_escape(writer, '\'' as u16, true)?;
                }
                ch if !ch.is_ascii() && !self.flags.contains(Flags::UNESCAPED_UNICODE) => {
                    let mut units = [0u16; 2];
                    for unit in ch.encode_utf16(&mut units) {
                        write_unicode_escape(writer, *unit, false)?;
                    }
                }
                ch => {
                    let mut buf = [0u8; 4];
                    writer.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
                }
            }
        }
        Ok(())
    }

    fn write_char_escape<W>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let literal: &[u8] = match char_escape {
            CharEscape::Quote if self.flags.contains(Flags::HEX_QUOT) => {
                return write_unicode_escape(writer, '"' as u16, true);
            }
            CharEscape::Quote => b"\\\"",
            CharEscape::ReverseSolidus => b"\\\\",
            CharEscape::Solidus => b"\\/",
            CharEscape::Backspace => b"\\b",
            CharEscape::FormFeed => b"\\f",
            CharEscape::LineFeed => b"\\n",
            CharEscape::CarriageReturn => b"\\r",
            CharEscape::Tab => b"\\t",
            CharEscape::AsciiControl(byte) => {
                return write_unicode_escape(writer, byte as u16, false);
            }
        };
        writer.write_all(literal)
    }
}
