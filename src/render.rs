use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Datelike, NaiveDate};

use crate::counter::{CounterState, FrameSink};

/// Counter display text: the value followed by its suffix, verbatim.
pub fn counter_text(value: i64, suffix: &str) -> String {
    format!("{value}{suffix}")
}

/// Parse an event date the way the listing endpoint sends it: a plain
/// `YYYY-MM-DD` date or a full RFC 3339 timestamp.
pub fn parse_event_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// `Sunday, December 15, 2024`
pub fn long_date(s: &str) -> Option<String> {
    parse_event_date(s).map(|d| d.format("%A, %B %-d, %Y").to_string())
}

/// Calendar badge form: (`Dec`, `15`).
pub fn short_date(s: &str) -> Option<(String, String)> {
    parse_event_date(s).map(|d| (d.format("%b").to_string(), d.day().to_string()))
}

// ── Terminal counter board ──────────────────────────────────────────────────

struct BoardInner<W> {
    rows: Vec<(String, String)>,
    out: W,
    drawn: bool,
}

/// A block of labelled counters redrawn in place on every frame.
///
/// Each row is fed by its own [`Counter`](crate::counter::Counter) through a
/// [`BoardSlot`].
pub struct Board<W: Write + Send + 'static> {
    inner: Mutex<BoardInner<W>>,
    label_width: usize,
}

impl<W: Write + Send + 'static> Board<W> {
    pub fn new(labels: &[&str], out: W) -> Arc<Self> {
        let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
        Arc::new(Self {
            inner: Mutex::new(BoardInner {
                rows: labels
                    .iter()
                    .map(|l| (l.to_string(), String::new()))
                    .collect(),
                out,
                drawn: false,
            }),
            label_width,
        })
    }

    pub fn slot(self: &Arc<Self>, index: usize) -> BoardSlot<W> {
        BoardSlot {
            board: Arc::clone(self),
            index,
        }
    }

    /// Current rows as they would be printed.
    pub fn lines(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        self.format_rows(&inner.rows)
    }

    fn set(&self, index: usize, text: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(row) = inner.rows.get_mut(index) else {
            return;
        };
        row.1 = text.to_string();

        let lines = self.format_rows(&inner.rows);
        let up = if inner.drawn { lines.len() } else { 0 };
        inner.drawn = true;

        // Rendering is best effort; a closed terminal must not stop the counters
        let out = &mut inner.out;
        if up > 0 {
            let _ = write!(out, "\x1b[{up}A");
        }
        for line in &lines {
            let _ = writeln!(out, "\x1b[2K{line}");
        }
        let _ = out.flush();
    }

    fn format_rows(&self, rows: &[(String, String)]) -> Vec<String> {
        let width = self.label_width;
        rows.iter()
            .map(|(label, text)| format!("{label:<width$}  {text:>12}"))
            .collect()
    }
}

pub struct BoardSlot<W: Write + Send + 'static> {
    board: Arc<Board<W>>,
    index: usize,
}

impl<W: Write + Send + 'static> FrameSink for BoardSlot<W> {
    fn frame(&self, text: &str, _state: CounterState) {
        self.board.set(self.index, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_text_is_value_then_suffix() {
        assert_eq!(counter_text(50000, "+"), "50000+");
        assert_eq!(counter_text(32, "%"), "32%");
        assert_eq!(counter_text(150, ""), "150");
    }

    #[test]
    fn long_date_spells_out_weekday_and_month() {
        assert_eq!(
            long_date("2024-12-15").as_deref(),
            Some("Sunday, December 15, 2024")
        );
        assert_eq!(
            long_date("2024-12-05T18:00:00Z").as_deref(),
            Some("Thursday, December 5, 2024")
        );
    }

    #[test]
    fn short_date_for_badges() {
        assert_eq!(
            short_date("2024-12-20"),
            Some(("Dec".to_string(), "20".to_string()))
        );
    }

    #[test]
    fn unparseable_dates_are_none() {
        assert_eq!(long_date("next tuesday"), None);
        assert_eq!(short_date(""), None);
    }

    #[test]
    fn board_redraws_rows_in_place() {
        let board = Board::new(&["Campaigns", "Active Members"], Vec::new());
        board.slot(0).frame("150", CounterState::default());
        board.slot(1).frame("50000+", CounterState::default());

        let lines = board.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Campaigns"));
        assert!(lines[0].ends_with("150"));
        assert!(lines[1].ends_with("50000+"));

        let inner = board.inner.lock().unwrap();
        let printed = String::from_utf8_lossy(&inner.out);
        assert!(printed.contains("\x1b[2A"));
    }

    #[test]
    fn board_ignores_unknown_slot() {
        let board = Board::new(&["Only"], Vec::new());
        board.slot(3).frame("9", CounterState::default());
        assert!(board.lines()[0].trim_end().ends_with("Only"));
    }
}
