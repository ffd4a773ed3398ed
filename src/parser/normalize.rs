//! Optional input normalization applied before structuring.

use std::borrow::Cow;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

const BOM: char = '\u{FEFF}';
const REPLACEMENT: char = '\u{FFFD}';

/// Strip a leading BOM, drop U+FFFD, and bring the text to NFC.
///
/// Borrows when the input is already clean.
pub fn normalize_input(raw: &str) -> Cow<'_, str> {
    let text = raw.strip_prefix(BOM).unwrap_or(raw);
    let needs_nfc = is_nfc_quick(text.chars()) != IsNormalized::Yes;

    if !needs_nfc && !text.contains(REPLACEMENT) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.nfc().filter(|c| *c != REPLACEMENT).collect())
}
