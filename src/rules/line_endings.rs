//! Line splitting and line-ending detection

/// Line terminator style of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
        }
    }

    /// Style of the first terminator in `content`, LF when there is none
    pub fn detect(content: &[u8]) -> Self {
        match content.iter().position(|&b| b == b'\n') {
            Some(i) if i > 0 && content[i - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

/// Iterator over physical lines, each including its terminator
pub struct Lines<'a> {
    rest: &'a [u8],
    done: bool,
}

/// Split `content` into physical lines.
///
/// A final unterminated line is yielded even when empty, so `b"a\n"` gives
/// `["a\n", ""]` and `b""` gives `[""]`.
pub fn split_lines(content: &[u8]) -> Lines<'_> {
    Lines {
        rest: content,
        done: false,
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.rest.iter().position(|&b| b == b'\n') {
            Some(i) => {
                let (line, rest) = self.rest.split_at(i + 1);
                self.rest = rest;
                Some(line)
            }
            None => {
                self.done = true;
                Some(self.rest)
            }
        }
    }
}

/// Split a physical line into its content and terminator
pub fn strip_line_ending(raw: &[u8]) -> (&[u8], &[u8]) {
    if raw.ends_with(b"\r\n") {
        raw.split_at(raw.len() - 2)
    } else if raw.ends_with(b"\n") {
        raw.split_at(raw.len() - 1)
    } else {
        (raw, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(LineEnding::detect(b""), LineEnding::Lf);
        assert_eq!(LineEnding::detect(b"hello"), LineEnding::Lf);
        assert_eq!(LineEnding::detect(b"a\nb\r\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect(b"a\r\nb\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect(b"\r\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect(b"a\rb\n"), LineEnding::Lf);
    }

    #[test]
    fn test_split_lines_keeps_terminators() {
        let lines: Vec<_> = split_lines(b"a\nb\r\nc").collect();
        assert_eq!(lines, vec![&b"a\n"[..], &b"b\r\n"[..], &b"c"[..]]);
    }

    #[test]
    fn test_split_lines_trailing_terminator() {
        let lines: Vec<_> = split_lines(b"a\n").collect();
        assert_eq!(lines, vec![&b"a\n"[..], &b""[..]]);

        let lines: Vec<_> = split_lines(b"").collect();
        assert_eq!(lines, vec![&b""[..]]);
    }

    #[test]
    fn test_split_lines_concat_is_identity() {
        let content = b"x \r\n\n\ty\r\n z";
        let joined: Vec<u8> = split_lines(content).flatten().copied().collect();
        assert_eq!(joined, content);
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending(b"ab\r\n"), (&b"ab"[..], &b"\r\n"[..]));
        assert_eq!(strip_line_ending(b"ab\n"), (&b"ab"[..], &b"\n"[..]));
        assert_eq!(strip_line_ending(b"ab"), (&b"ab"[..], &b""[..]));
        assert_eq!(strip_line_ending(b"ab\r"), (&b"ab\r"[..], &b""[..]));
    }
}
