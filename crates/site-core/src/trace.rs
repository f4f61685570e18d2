//! Plain-text event traces for replaying a browsing session headlessly.
//!
//! ```text
//! # comment
//! register 1 0.15 100
//! scroll 150
//! intersect 1 0.2
//! pointer 40 120
//! hover enter
//! ```

use crate::engine::{ScrollEngine, VisualSink};
use crate::reveal::ElementId;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceEvent {
    Register {
        id: ElementId,
        threshold: Option<f64>,
        delay_ms: u32,
    },
    Scroll(f64),
    Intersect {
        id: ElementId,
        ratio: f64,
    },
    Pointer {
        x: f32,
        y: f32,
    },
    Hover(bool),
}

#[derive(Debug, Error, PartialEq)]
pub enum TraceError {
    #[error("line {line}: unknown event `{word}`")]
    UnknownEvent { line: usize, word: String },
    #[error("line {line}: `{event}` expects {expected}")]
    Arity {
        line: usize,
        event: &'static str,
        expected: &'static str,
    },
    #[error("line {line}: invalid {what} `{value}`")]
    InvalidValue {
        line: usize,
        what: &'static str,
        value: String,
    },
}

fn number<T: std::str::FromStr>(
    line: usize,
    what: &'static str,
    value: &str,
) -> Result<T, TraceError> {
    value.parse::<T>().map_err(|_| TraceError::InvalidValue {
        line,
        what,
        value: value.to_string(),
    })
}

/// Parse a single trace line. Blank lines and comments yield `Ok(None)`.
pub fn parse_line(line_no: usize, raw: &str) -> Result<Option<TraceEvent>, TraceError> {
    let text = raw.split('#').next().unwrap_or("").trim();
    if text.is_empty() {
        return Ok(None);
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    let arity = |event: &'static str, expected: &'static str| TraceError::Arity {
        line: line_no,
        event,
        expected,
    };
    let event = match words[0] {
        "scroll" => match words[1..] {
            [offset] => TraceEvent::Scroll(number(line_no, "offset", offset)?),
            _ => return Err(arity("scroll", "<offset>")),
        },
        "register" => {
            let (id, threshold, delay) = match words[1..] {
                [id] => (id, None, None),
                [id, t] => (id, Some(t), None),
                [id, t, d] => (id, Some(t), Some(d)),
                _ => return Err(arity("register", "<id> [threshold|default] [delay_ms]")),
            };
            let threshold = match threshold {
                None | Some("default") => None,
                Some(t) => Some(number(line_no, "threshold", t)?),
            };
            TraceEvent::Register {
                id: ElementId(number(line_no, "element id", id)?),
                threshold,
                delay_ms: match delay {
                    Some(d) => number(line_no, "delay", d)?,
                    None => 0,
                },
            }
        }
        "intersect" => match words[1..] {
            [id, ratio] => TraceEvent::Intersect {
                id: ElementId(number(line_no, "element id", id)?),
                ratio: number(line_no, "ratio", ratio)?,
            },
            _ => return Err(arity("intersect", "<id> <ratio>")),
        },
        "pointer" => match words[1..] {
            [x, y] => TraceEvent::Pointer {
                x: number(line_no, "x", x)?,
                y: number(line_no, "y", y)?,
            },
            _ => return Err(arity("pointer", "<x> <y>")),
        },
        "hover" => match words[1..] {
            ["enter"] => TraceEvent::Hover(true),
            ["leave"] => TraceEvent::Hover(false),
            [other] => {
                return Err(TraceError::InvalidValue {
                    line: line_no,
                    what: "hover state",
                    value: other.to_string(),
                })
            }
            _ => return Err(arity("hover", "enter|leave")),
        },
        other => {
            return Err(TraceError::UnknownEvent {
                line: line_no,
                word: other.to_string(),
            })
        }
    };
    Ok(Some(event))
}

pub fn parse_trace(input: &str) -> Result<Vec<TraceEvent>, TraceError> {
    let mut events = Vec::new();
    for (i, raw) in input.lines().enumerate() {
        if let Some(ev) = parse_line(i + 1, raw)? {
            events.push(ev);
        }
    }
    Ok(events)
}

/// Apply one event to `engine`.
pub fn apply(engine: &mut ScrollEngine, event: &TraceEvent, sink: &mut impl VisualSink) {
    match *event {
        TraceEvent::Register {
            id,
            threshold: Some(t),
            delay_ms,
        } => {
            engine.register_with_delay(id, t, delay_ms);
        }
        TraceEvent::Register {
            id,
            threshold: None,
            delay_ms,
        } => {
            engine.register_default(id, delay_ms);
        }
        TraceEvent::Scroll(offset) => {
            engine.on_scroll(offset, sink);
        }
        TraceEvent::Intersect { id, ratio } => {
            engine.on_intersection(id, ratio, sink);
        }
        TraceEvent::Pointer { x, y } => engine.on_pointer_move(x, y, sink),
        TraceEvent::Hover(entered) => engine.on_hover(entered, sink),
    }
}

pub fn replay(engine: &mut ScrollEngine, events: &[TraceEvent], sink: &mut impl VisualSink) {
    for ev in events {
        apply(engine, ev, sink);
    }
}
