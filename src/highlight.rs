/// How a single character of the active word should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharState {
    Correct,
    Incorrect,
    /// next character to type
    Cursor,
    Untyped,
}

/// Classify each character of `target` against what has been typed so far.
pub fn classify_word(target: &str, typed: &str) -> Vec<CharState> {
    let typed: Vec<char> = typed.chars().collect();

    target
        .chars()
        .enumerate()
        .map(|(idx, expected)| match typed.get(idx) {
            Some(&c) if c == expected => CharState::Correct,
            Some(_) => CharState::Incorrect,
            None if idx == typed.len() => CharState::Cursor,
            None => CharState::Untyped,
        })
        .collect()
}

/// Characters typed past the end of the target word.
pub fn overflow<'a>(target: &str, typed: &'a str) -> &'a str {
    let target_len = target.chars().count();

    match typed.char_indices().nth(target_len) {
        Some((byte_idx, _)) => &typed[byte_idx..],
        None => "",
    }
}
