//! Shared text helpers.

/// Remove leading and trailing blank lines, keeping indentation of the rest.
///
/// Trailing whitespace on the last kept line is dropped as well.
///
/// # Examples
///
/// ```
/// use tutor_lesson::trim_blank_lines;
///
/// assert_eq!(trim_blank_lines("\n\n    indented();\n\n"), "    indented();");
/// assert_eq!(trim_blank_lines("  \n \t\n"), "");
/// ```
pub fn trim_blank_lines(text: &str) -> &str {
    let mut start = 0;
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    text[start..].trim_end()
}

/// Iterate lines together with their byte offset and 1-based line number.
///
/// Yielded lines keep their terminator so offsets add up to the input length.
pub(crate) fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    text.split_inclusive('\n')
        .scan(0, |offset, line| {
            let start = *offset;
            *offset += line.len();
            Some((start, line))
        })
        .enumerate()
        .map(|(idx, (offset, line))| (idx + 1, offset, line))
}

/// Strip a trailing `\n` or `\r\n`.
pub(crate) fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_blank_lines_keeps_inner_blank_lines() {
        assert_eq!(trim_blank_lines("\na();\n\nb();\n"), "a();\n\nb();");
    }

    #[test]
    fn test_trim_blank_lines_empty() {
        assert_eq!(trim_blank_lines(""), "");
    }

    #[test]
    fn test_lines_with_offsets_cover_input() {
        let text = "one\ntwo\r\nthree";
        let lines: Vec<_> = lines_with_offsets(text).collect();
        assert_eq!(lines, vec![(1, 0, "one\n"), (2, 4, "two\r\n"), (3, 9, "three")]);
    }

    #[test]
    fn test_strip_newline() {
        assert_eq!(strip_newline("a\r\n"), "a");
        assert_eq!(strip_newline("a\n"), "a");
        assert_eq!(strip_newline("a"), "a");
    }
}
