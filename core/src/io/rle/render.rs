use std::fmt;

use crate::pattern::ParsedPattern;

/// Maximum length of an RLE body line, not counting the line break.
const MAX_LINE_LEN: usize = 70;

/// Repeated RLE item, such as `3o` or `$`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct RleToken {
    count: usize,
    tag: char,
}
impl RleToken {
    fn new(count: usize, tag: char) -> Self {
        Self { count, tag }
    }
    /// Returns the number of characters in the string representation.
    fn str_len(self) -> usize {
        match self.count {
            1 => 1,
            n => n.to_string().len() + 1,
        }
    }
}
impl fmt::Display for RleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count != 1 {
            write!(f, "{}", self.count)?;
        }
        write!(f, "{}", self.tag)
    }
}

impl ParsedPattern {
    /// Renders the pattern as a 2-state RLE string, with body lines wrapped
    /// at 70 characters.
    ///
    /// Dead cells at the end of a row and empty rows at the bottom of the
    /// pattern are omitted; the header still records the full size.
    pub fn to_rle(&self) -> String {
        let mut tokens = vec![];
        let (mut row, mut column) = (0, 0);
        for run in self.runs() {
            if run.row > row {
                tokens.push(RleToken::new(run.row - row, '$'));
                row = run.row;
                column = 0;
            }
            if run.start > column {
                tokens.push(RleToken::new(run.start - column, 'b'));
            }
            tokens.push(RleToken::new(run.len, 'o'));
            column = run.end();
        }
        tokens.push(RleToken::new(1, '!'));

        let mut ret = format!("x = {}, y = {}\n", self.width(), self.height());
        let mut line_len = 0;
        for token in tokens {
            line_len += token.str_len();
            if line_len > MAX_LINE_LEN {
                ret.push('\n');
                line_len = token.str_len();
            }
            ret.push_str(&token.to_string());
        }
        ret.push('\n');
        ret
    }
}
