// SPDX-License-Identifier: MPL-2.0
//! Recorded touch traces for replaying gestures through the classifier.
//!
//! One step per line, blank lines and `#` comments ignored:
//!
//! ```text
//! down 800 500 0
//! move 805 502 20
//! up 810 505 50
//! tick 400
//! ```

use crate::domain::gesture::{PointerEvent, TouchPoint};
use crate::error::{Error, Result};

/// A single replay step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceStep {
    Pointer(PointerEvent),
    /// Advance the clock and fire due deadlines.
    Tick(i64),
}

impl TraceStep {
    /// Timestamp of the step on the trace clock.
    #[must_use]
    pub fn timestamp_ms(&self) -> i64 {
        match self {
            TraceStep::Pointer(event) => event.point().timestamp_ms,
            TraceStep::Tick(t) => *t,
        }
    }
}

/// Parses a whole trace.
///
/// # Errors
///
/// Returns [`Error::Trace`] with the 1-based line number of the first
/// malformed line.
pub fn parse(input: &str) -> Result<Vec<TraceStep>> {
    input
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let line = raw.split('#').next().unwrap_or("").trim();
            (!line.is_empty()).then(|| {
                parse_line(line).map_err(|message| Error::Trace {
                    line: index + 1,
                    message,
                })
            })
        })
        .collect()
}

fn parse_line(line: &str) -> std::result::Result<TraceStep, String> {
    let mut fields = line.split_whitespace();
    let kind = fields.next().unwrap_or_default();

    if kind == "tick" {
        let t = parse_field::<i64>(fields.next(), "timestamp")?;
        return expect_end(fields).map(|()| TraceStep::Tick(t));
    }

    let x = parse_field::<f32>(fields.next(), "x")?;
    let y = parse_field::<f32>(fields.next(), "y")?;
    let t = parse_field::<i64>(fields.next(), "timestamp")?;
    expect_end(fields)?;

    let point = TouchPoint::new(x, y, t);
    let event = match kind {
        "down" => PointerEvent::Down(point),
        "move" => PointerEvent::Move(point),
        "up" => PointerEvent::Up(point),
        "cancel" => PointerEvent::Cancel(point),
        other => return Err(format!("unknown step '{}'", other)),
    };
    Ok(TraceStep::Pointer(event))
}

fn parse_field<T: std::str::FromStr>(
    field: Option<&str>,
    name: &str,
) -> std::result::Result<T, String> {
    let raw = field.ok_or_else(|| format!("missing {}", name))?;
    raw.parse()
        .map_err(|_| format!("invalid {} '{}'", name, raw))
}

fn expect_end<'a>(mut fields: impl Iterator<Item = &'a str>) -> std::result::Result<(), String> {
    match fields.next() {
        Some(extra) => Err(format!("unexpected field '{}'", extra)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pointer_and_tick_steps() {
        let steps = parse(
            "# double tap on the right half\n\
             down 800 500 0\n\
             up 800 500 50   # first release\n\
             \n\
             tick 400\n",
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                TraceStep::Pointer(PointerEvent::Down(TouchPoint::new(800.0, 500.0, 0))),
                TraceStep::Pointer(PointerEvent::Up(TouchPoint::new(800.0, 500.0, 50))),
                TraceStep::Tick(400),
            ]
        );
        assert_eq!(steps[2].timestamp_ms(), 400);
    }

    #[test]
    fn reports_line_of_first_error() {
        match parse("down 1 2 3\nhover 1 2 3\n") {
            Err(Error::Trace { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("hover"));
            }
            other => panic!("expected trace error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_missing_and_extra_fields() {
        assert!(parse("up 1 2").is_err());
        assert!(parse("tick 5 6").is_err());
        assert!(parse("move x 2 3").is_err());
    }
}
