//! ANSI terminal renderer.

use std::io::{self, Write};

use sd_grid::{Escape, Snapshot};
use sd_sim::{SimObserver, SimReport};

const HOME: &str = "\x1b[H";
const CLEAR: &str = "\x1b[2J";

/// Redraws the grid in place every frame.
///
/// Observer hooks cannot fail, so the first write error is kept and handed
/// back by [`finish`](Self::finish); later frames are skipped.
pub struct TerminalRenderer<W: Write> {
    out:   W,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn draw(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = write(&mut self.out).and_then(|()| self.out.flush()) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> SimObserver for TerminalRenderer<W> {
    fn on_start(&mut self, snapshot: &Snapshot) {
        self.draw(|out| write!(out, "{HOME}{CLEAR}{snapshot}"));
    }

    fn on_frame(&mut self, _frame: u64, snapshot: &Snapshot) {
        self.draw(|out| write!(out, "{HOME}{snapshot}"));
    }

    fn on_escape(&mut self, escape: &Escape) {
        self.draw(|out| writeln!(out, "\n{escape}"));
    }

    fn on_sim_end(&mut self, report: &SimReport) {
        if report.winner.is_none() {
            self.draw(|out| writeln!(out, "\nno sheep escaped within the tick limit"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sd_core::{AgentId, Pos};

    use super::*;

    fn snapshot() -> Snapshot {
        let rows = ["# G #", "#   #", "# # #"]
            .iter()
            .map(|row| row.split(' ').map(str::to_owned).collect())
            .collect();
        Snapshot { width: 3, height: 3, rows }
    }

    #[test]
    fn clears_once_then_homes_every_frame() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.on_start(&snapshot());
        renderer.on_frame(1, &snapshot());
        renderer.on_frame(2, &snapshot());
        let text = String::from_utf8(renderer.finish().unwrap()).unwrap();

        assert_eq!(text.matches(CLEAR).count(), 1);
        assert_eq!(text.matches(HOME).count(), 3);
        assert!(text.starts_with("\x1b[H\x1b[2J# G #\n"));
    }

    #[test]
    fn prints_the_escape_line() {
        let escape = Escape {
            agent: AgentId(0),
            label: "A".into(),
            from:  Pos::new(1, 1),
            gate:  Pos::new(1, 0),
        };
        let report = SimReport {
            winner:          Some(escape.clone()),
            frames:          1,
            ticks_per_agent: vec![(AgentId(0), 7)],
            panicked_agents: 0,
            elapsed:         Duration::from_millis(5),
        };
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.on_escape(&escape);
        renderer.on_sim_end(&report);
        let text = String::from_utf8(renderer.finish().unwrap()).unwrap();

        assert_eq!(text, "\nsheep A escaped through the gate at (1, 0)\n");
    }

    #[test]
    fn keeps_the_first_write_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut renderer = TerminalRenderer::new(Broken);
        renderer.on_start(&snapshot());
        renderer.on_frame(1, &snapshot());
        assert_eq!(renderer.finish().err().map(|e| e.to_string()), Some("closed".into()));
    }
}
