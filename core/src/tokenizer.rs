/// Split text into words on the ASCII space character.
///
/// Runs of spaces collapse, so no empty words are produced. Other whitespace
/// (tabs, newlines) is part of a word.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}
