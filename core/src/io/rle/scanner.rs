use log::trace;

use crate::pattern::Run;

/// Whether the scanner should be fed more input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScanStep {
    /// Keep feeding characters.
    Continue,
    /// `!` was seen; ignore the rest of the input.
    End,
}

/// State machine that turns RLE body characters into horizontal runs.
#[derive(Debug, Default, Clone)]
pub struct RleScanner {
    /// Repeat count accumulated from digits since the last item.
    pending_count: Option<usize>,
    /// Live run that has not yet been ended by `b`, `$`, or `!`.
    open_run: Option<Run>,
    /// Current row.
    row: usize,
    /// Column of the next cell.
    column: usize,
    /// Runs closed so far, in the order they were closed.
    runs: Vec<Run>,
}
impl RleScanner {
    /// Advances the state machine by one character.
    pub fn step(&mut self, ch: char) -> ScanStep {
        if let Some(digit) = ch.to_digit(10) {
            let count = self.pending_count.unwrap_or(0);
            self.pending_count = Some(count.saturating_mul(10).saturating_add(digit as usize));
            return ScanStep::Continue;
        }

        let count = self.pending_count.take().unwrap_or(1);
        match ch {
            '!' => {
                self.close_run();
                return ScanStep::End;
            }
            // A zero count makes the item a no-op.
            'b' | 'o' | '$' if count == 0 => (),
            'b' => {
                self.close_run();
                self.column = self.column.saturating_add(count);
            }
            'o' => {
                match &mut self.open_run {
                    Some(run) => run.len = run.len.saturating_add(count),
                    None => self.open_run = Some(Run::new(self.row, self.column, count)),
                }
                self.column = self.column.saturating_add(count);
            }
            '$' => {
                self.close_run();
                self.row = self.row.saturating_add(count);
                self.column = 0;
            }
            other => trace!("Skipping {:?} in RLE body", other),
        }
        ScanStep::Continue
    }

    /// Closes any open run and returns every run.
    pub fn finish(mut self) -> Vec<Run> {
        self.close_run();
        self.runs
    }

    fn close_run(&mut self) {
        if let Some(run) = self.open_run.take() {
            self.runs.push(run);
        }
    }
}
