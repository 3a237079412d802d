/// Splits raw text into word tokens.
///
/// The split is exact: lines are cut on `'\n'`, then each line is cut on
/// single `' '` characters. Tokens keep their case and punctuation, so
/// `"cc."` and `"cc"` are distinct words. Runs of spaces produce empty
/// candidates, which are discarded. Order of appearance is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for line in text.split('\n') {
        for word in line.split(' ') {
            // Guard against stray embedded newlines surviving the line split.
            if word.is_empty() || word.starts_with('\n') {
                continue;
            }
            tokens.push(word.to_string());
        }
    }
    tokens
}
