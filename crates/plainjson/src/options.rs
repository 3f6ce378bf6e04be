use core::ops::{BitOr, BitOrAssign};

/// Encoder option flags, combined with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u32);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Leave `/` unescaped instead of emitting `\/`.
    pub const UNESCAPED_SLASHES: Flags = Flags(1 << 0);
    /// Leave non-ASCII text literal instead of emitting `\uXXXX` escapes.
    pub const UNESCAPED_UNICODE: Flags = Flags(1 << 1);
    /// Escape `<` and `>` as `\u003C` and `\u003E`.
    pub const HEX_TAG: Flags = Flags(1 << 2);
    /// Escape `&` as `\u0026`.
    pub const HEX_AMP: Flags = Flags(1 << 3);
    /// Escape `'` as `\u0027`.
    pub const HEX_APOS: Flags = Flags(1 << 4);
    /// Escape `"` as `\u0022`.
    pub const HEX_QUOT: Flags = Flags(1 << 5);

    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone)]
pub struct EncodeOptions {
    pub flags: Flags,
    /// Maximum container nesting of the encoded tree.
    pub max_depth: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            flags: Flags::UNESCAPED_SLASHES | Flags::UNESCAPED_UNICODE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EncodeOptions {
    /// Options forced by `html_encode`: non-ASCII stays literal, the five
    /// HTML-significant characters become Unicode escapes, and slashes are
    /// escaped.
    pub(crate) fn html() -> Self {
        Self {
            flags: Flags::UNESCAPED_UNICODE
                | Flags::HEX_TAG
                | Flags::HEX_AMP
                | Flags::HEX_APOS
                | Flags::HEX_QUOT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Maximum container nesting of the decoded tree.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
