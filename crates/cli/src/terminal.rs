use std::io::{self, Write};

use anyhow::Result;
use capguard_rules::{ProfileReport, Reason};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

/// Color scheme for terminal output.
struct Colors;

impl Colors {
    const SOURCE: Color = Color::Magenta;
    const PASS: Color = Color::Green;
    const ERROR: Color = Color::Red;
    const RECOMMENDATION: Color = Color::Yellow;
    const DIM: Color = Color::DarkGrey;
}

/// Renders profile reports as colored text.
pub struct Terminal<W: Write> {
    out: W,
}

impl Terminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print one report under a header naming its source.
    pub fn print_report(&mut self, source: &str, report: &ProfileReport) -> Result<()> {
        queue!(
            self.out,
            SetForegroundColor(Colors::SOURCE),
            Print(source),
            SetForegroundColor(Colors::DIM),
            Print(format!(" ({})\n", report.profile)),
            ResetColor,
        )?;

        if report.valid {
            queue!(
                self.out,
                SetForegroundColor(Colors::PASS),
                Print("  no errors\n"),
                ResetColor,
            )?;
        }
        for reason in &report.errors {
            self.print_reason("error", Colors::ERROR, reason)?;
        }
        for reason in &report.recommendations {
            self.print_reason("recommendation", Colors::RECOMMENDATION, reason)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn print_reason(&mut self, label: &str, color: Color, reason: &Reason) -> Result<()> {
        queue!(
            self.out,
            Print("  "),
            SetForegroundColor(color),
            Print(label),
            ResetColor,
            Print(format!(" {} ", reason.path)),
            SetForegroundColor(Colors::DIM),
            Print(format!("[{}]", reason.code())),
            ResetColor,
            Print(format!(" {}\n", reason.message())),
        )?;
        Ok(())
    }
}
