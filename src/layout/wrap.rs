/// Greedy word wrap to at most `width` characters per line.
///
/// Words are separated by any whitespace run and re-joined with single spaces. A hyphen inside a
/// word (`Self-Organizing`) is a break opportunity: the line may end right after it. A word
/// longer than `width` first fills what is left of the current line, then continues in
/// `width`-sized chunks, so no returned line is ever longer than `width` characters. No hyphens
/// are inserted. Empty or all-whitespace input yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for (i, piece) in hyphen_pieces(&chars).into_iter().enumerate() {
            let joins_word = i > 0;
            let mut rest = piece.to_vec();
            loop {
                let sep = usize::from(line_len > 0 && !joins_word);
                if line_len + sep + rest.len() <= width {
                    if sep == 1 {
                        line.push(' ');
                    }
                    line.extend(rest.iter());
                    line_len += sep + rest.len();
                    break;
                }

                if rest.len() > width {
                    let space_left = width.saturating_sub(line_len + sep);
                    if space_left > 0 {
                        if sep == 1 {
                            line.push(' ');
                        }
                        line.extend(rest.drain(..space_left));
                    }
                }
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Split a word after each hyphen that sits between letters.
///
/// A hyphen breaks when it follows two letters (or `letter-letter-`) and is followed by a letter
/// and then another letter or `-letter`. Digits and leading or trailing hyphens never break.
fn hyphen_pieces(word: &[char]) -> Vec<&[char]> {
    let letter = |i: usize| word.get(i).is_some_and(|c| c.is_alphabetic() || *c == '_');
    let hyphen = |i: usize| word.get(i) == Some(&'-');

    let mut pieces = Vec::new();
    let mut start = 0;
    for i in 2..word.len() {
        if !hyphen(i) {
            continue;
        }
        let before = (letter(i - 1) && letter(i - 2))
            || (i >= 3 && letter(i - 1) && hyphen(i - 2) && letter(i - 3));
        let after = letter(i + 1) && (letter(i + 2) || (hyphen(i + 2) && letter(i + 3)));
        if before && after {
            pieces.push(&word[start..=i]);
            start = i + 1;
        }
    }
    pieces.push(&word[start..]);
    pieces
}

/// [`wrap_text`] joined with `\n`, ready to be drawn as one block.
pub fn wrap_block(text: &str, width: usize) -> String {
    wrap_text(text, width).join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
