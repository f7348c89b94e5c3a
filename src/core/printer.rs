use crate::core::paginator::Pager;
use crate::core::{Result, Vendor};
use std::io::{BufRead, Write};

enum State {
    FirstPage,
    AwaitingContinue,
    Done,
}

/// Pages the result list to the terminal, asking before every page after
/// the first. Generic over its IO so tests can drive it with buffers.
pub struct Printer<R, W> {
    input: R,
    output: W,
    window_size: usize,
}

impl<R: BufRead, W: Write> Printer<R, W> {
    pub fn new(input: R, output: W, window_size: usize) -> Self {
        Self {
            input,
            output,
            window_size,
        }
    }

    /// Show `vendors` one window at a time. The first page is printed
    /// unconditionally; each following page only after a literal "yes".
    /// Exhaustion and decline both end the loop normally.
    pub fn present(&mut self, vendors: &[Vendor]) -> Result<()> {
        let mut pager = Pager::new(self.window_size);
        let mut pages_shown = 0usize;
        let mut state = State::FirstPage;

        loop {
            match state {
                State::FirstPage => {
                    self.print_window(pager.window(vendors))?;
                    pager.advance();
                    pages_shown = 1;

                    state = if vendors.len() < self.window_size {
                        State::Done
                    } else {
                        State::AwaitingContinue
                    };
                }
                State::AwaitingContinue => {
                    let window = pager.window(vendors);
                    if window.is_empty() {
                        state = State::Done;
                        continue;
                    }

                    let remaining = vendors.len() - self.window_size * pages_shown;
                    write!(
                        self.output,
                        "Print more data ({} remaining in the list)? (yes)",
                        remaining
                    )?;
                    self.output.flush()?;

                    // EOF leaves the answer empty, which counts as a decline.
                    let mut answer = String::new();
                    self.input.read_line(&mut answer)?;

                    if answer.trim() == "yes" {
                        self.print_window(window)?;
                        pager.advance();
                        pages_shown += 1;
                    } else {
                        state = State::Done;
                    }
                }
                State::Done => {
                    tracing::debug!("Done after {} page(s)", pages_shown);
                    return Ok(());
                }
            }
        }
    }

    fn print_window(&mut self, window: &[Vendor]) -> Result<()> {
        for vendor in window {
            writeln!(
                self.output,
                "NAME & ADDRESS: {} ; {}",
                vendor.applicant, vendor.location
            )?;
        }
        Ok(())
    }
}
