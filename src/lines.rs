/// Iterate over the lines of a `str`, keeping each line's `\n` (or `\r\n`).
///
/// Unlike [`str::lines`], concatenating the items reproduces the input, so
/// callers can track byte offsets while scanning.
#[derive(Clone, Debug)]
pub(crate) struct LinesWithTerminator<'a> {
    data: &'a str,
}

impl<'a> LinesWithTerminator<'a> {
    pub(crate) fn new(data: &'a str) -> LinesWithTerminator<'a> {
        LinesWithTerminator { data }
    }
}

impl<'a> Iterator for LinesWithTerminator<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        if self.data.is_empty() {
            return None;
        }
        let end = self
            .data
            .find('\n')
            .map(|i| i + 1)
            .unwrap_or(self.data.len());
        let (line, rest) = self.data.split_at(end);
        self.data = rest;
        Some(line)
    }
}

/// Strip a trailing `\n` or `\r\n`.
pub(crate) fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Drop trailing line terminators and whitespace-only trailing lines.
///
/// Whitespace at the end of the last non-blank line is kept.
pub(crate) fn trim_blank_tail(mut data: &str) -> &str {
    loop {
        data = data.trim_end_matches(['\n', '\r']);
        let last = data.rfind('\n').map_or(0, |i| i + 1);
        if data.is_empty() || !is_blank(&data[last..]) {
            return data;
        }
        data = &data[..last];
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_terminators() {
        let lines: Vec<_> = LinesWithTerminator::new("a\nb\r\n\nc").collect();
        assert_eq!(lines, ["a\n", "b\r\n", "\n", "c"]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(LinesWithTerminator::new("").next(), None);
    }

    #[test]
    fn trailing_newline_yields_no_empty_line() {
        let lines: Vec<_> = LinesWithTerminator::new("a\n").collect();
        assert_eq!(lines, ["a\n"]);
    }

    #[test]
    fn strip() {
        assert_eq!(strip_terminator("a\r\n"), "a");
        assert_eq!(strip_terminator("a\n"), "a");
        assert_eq!(strip_terminator("a"), "a");
    }

    #[test]
    fn blank_tail() {
        assert_eq!(trim_blank_tail("a  \n"), "a  ");
        assert_eq!(trim_blank_tail("a\n  b\t\r\n \n\t\n\n"), "a\n  b\t");
        assert_eq!(trim_blank_tail(" \n\t"), "");
        assert_eq!(trim_blank_tail(""), "");
    }
}
