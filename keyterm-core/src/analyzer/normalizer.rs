//! Text normalization.
//!
//! Canonicalizes raw text into the restricted alphabet `[a-z0-9+#.]` plus
//! single spaces. Everything downstream (term enumeration, presence
//! matching) compares text in this form, so the scorer and the matcher must
//! share exactly this routine.

/// Marker for bytes that start a multi-byte UTF-8 sequence.
const NON_ASCII: u8 = 0;

/// Per-byte mapping for the ASCII fast path.
///
/// Uppercase letters fold to lowercase, `[a-z0-9+#.]` map to themselves and
/// every other ASCII byte (whitespace and punctuation alike) maps to a space.
/// Bytes `>= 0x80` map to [`NON_ASCII`].
const CLASS_TABLE: [u8; 256] = build_class_table();

const fn build_class_table() -> [u8; 256] {
    let mut table = [NON_ASCII; 256];
    let mut b = 0usize;
    while b < 128 {
        let c = b as u8;
        table[b] = match c {
            b'A'..=b'Z' => c + 32,
            b'a'..=b'z' | b'0'..=b'9' | b'+' | b'#' | b'.' => c,
            _ => b' ',
        };
        b += 1;
    }
    table
}

/// Lowercasing, alphabet-restricting text normalizer.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware, so `'K'` (Kelvin)
///   still becomes `k`)
/// - Replaces every character outside `[a-z0-9+#.]` with a space, which keeps
///   tokens like `c++`, `c#` and `3.5` intact
/// - Collapses runs of spaces into one
/// - Removes leading/trailing spaces
///
/// The output is idempotent: normalizing it again returns it unchanged.
///
/// # Examples
///
/// ```
/// use keyterm_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer;
/// assert_eq!(normalizer.normalize("  C++ / C#,  Python 3.5!  "), "c++ c# python 3.5");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut pending_space = false;

        for (i, &b) in input.as_bytes().iter().enumerate() {
            let mapped = CLASS_TABLE[b as usize];
            if mapped != NON_ASCII {
                push_mapped(out, mapped, &mut pending_space);
                continue;
            }

            // Continuation bytes are consumed with their lead byte below.
            if !input.is_char_boundary(i) {
                continue;
            }

            let Some(ch) = input[i..].chars().next() else {
                break;
            };

            for lowered in ch.to_lowercase() {
                let mapped = if lowered.is_ascii() {
                    CLASS_TABLE[lowered as usize]
                } else {
                    b' '
                };
                push_mapped(out, mapped, &mut pending_space);
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Appends one mapped byte, deferring spaces so none lead, trail or repeat.
#[inline(always)]
fn push_mapped(out: &mut String, mapped: u8, pending_space: &mut bool) {
    if mapped == b' ' {
        *pending_space = !out.is_empty();
        return;
    }
    if *pending_space {
        out.push(' ');
        *pending_space = false;
    }
    out.push(mapped as char);
}

/// Normalizes `text` with the default normalizer.
#[inline]
pub fn normalize(text: &str) -> String {
    TextNormalizer.normalize(text)
}
