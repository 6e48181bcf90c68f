/// Expand common typographic ligatures found in PDF-extracted text.
///
/// Word processors emit ligature codepoints (ﬁ, ﬂ, ...) that would
/// otherwise defeat the keyword and pattern matching downstream.
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{FB05}', '\u{FB06}'], "st")
}
