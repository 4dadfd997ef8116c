//! Text command format.
//!
//! ```text
//! <N>
//! Stop <name>: <lat>, <lng>[, <D>m to <other stop>]*
//! Bus <name>: <stop> > <stop> > ... > <stop>
//! Bus <name>: <stop> - <stop> - ... - <stop>
//! <M>
//! Bus <name>
//! Stop <name>
//! ```
//!
//! Blank lines are skipped and do not count towards `N` or `M`.

use transport_catalogue::Coordinates;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: invalid request count {value:?}")]
    InvalidCount { line: usize, value: String },

    #[error("expected {expected} {section} requests, found {found}")]
    Truncated {
        section: &'static str,
        expected: usize,
        found: usize,
    },
}

/// A request that adds data to the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub enum BaseRequest {
    Stop {
        name: String,
        coordinates: Coordinates,
        /// `(other stop, meters)` measured from this stop
        distances: Vec<(String, u32)>,
    },
    Bus {
        name: String,
        /// Already expanded into visiting order
        stops: Vec<String>,
    },
}

/// A request answered from the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatRequest {
    Bus(String),
    Stop(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    pub base: Vec<BaseRequest>,
    pub stats: Vec<StatRequest>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// `A > B > C > A`: the description is the whole loop
    Ring,
    /// `A - B - C`: the vehicle returns along the same stops
    Linear,
}

/// Turn a route description into the full visiting order.
///
/// A ring that does not close itself gets its first stop appended. A linear
/// route is followed by its reverse without the turnaround stop.
pub fn expand_route(kind: RouteKind, stops: Vec<String>) -> Vec<String> {
    match kind {
        RouteKind::Ring => {
            let mut stops = stops;
            if let (Some(first), Some(last)) = (stops.first(), stops.last()) {
                if first != last {
                    let first = first.clone();
                    stops.push(first);
                }
            }
            stops
        }
        RouteKind::Linear => {
            let back: Vec<String> = stops.iter().rev().skip(1).cloned().collect();
            let mut stops = stops;
            stops.extend(back);
            stops
        }
    }
}

pub fn parse_script(input: &str) -> Result<Script, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let mut script = Script::default();

    let Some((line, value)) = lines.next() else {
        return Ok(script);
    };
    let base_count = parse_count(line, value)?;
    for found in 0..base_count {
        let (line, text) = lines.next().ok_or(ParseError::Truncated {
            section: "base",
            expected: base_count,
            found,
        })?;
        script.base.push(parse_base_request(line, text)?);
    }

    // The stat section may be omitted entirely
    let Some((line, value)) = lines.next() else {
        return Ok(script);
    };
    let stat_count = parse_count(line, value)?;
    for found in 0..stat_count {
        let (line, text) = lines.next().ok_or(ParseError::Truncated {
            section: "stat",
            expected: stat_count,
            found,
        })?;
        script.stats.push(parse_stat_request(line, text)?);
    }

    Ok(script)
}

pub fn parse_base_request(line: usize, text: &str) -> Result<BaseRequest, ParseError> {
    let malformed = |reason: String| ParseError::Malformed { line, reason };

    let (head, body) = text
        .split_once(':')
        .ok_or_else(|| malformed("missing ':' after name".into()))?;

    if let Some(name) = head.strip_prefix("Stop ") {
        let name = parse_name(name).ok_or_else(|| malformed("empty stop name".into()))?;
        let mut parts = body.split(',').map(str::trim);

        let lat = parse_degrees(parts.next(), "latitude").map_err(malformed)?;
        let lng = parse_degrees(parts.next(), "longitude").map_err(malformed)?;

        let distances = parts
            .map(|clause| parse_distance_clause(clause).map_err(malformed))
            .collect::<Result<Vec<_>, _>>()?;

        return Ok(BaseRequest::Stop {
            name,
            coordinates: Coordinates::new(lat, lng),
            distances,
        });
    }

    if let Some(name) = head.strip_prefix("Bus ") {
        let name = parse_name(name).ok_or_else(|| malformed("empty route name".into()))?;
        let (kind, separator) = if body.contains('>') {
            (RouteKind::Ring, ">")
        } else {
            (RouteKind::Linear, " - ")
        };

        let stops = body
            .split(separator)
            .map(|stop| parse_name(stop).ok_or_else(|| malformed(format!("empty stop name in route {name}"))))
            .collect::<Result<Vec<_>, _>>()?;

        return Ok(BaseRequest::Bus {
            name,
            stops: expand_route(kind, stops),
        });
    }

    Err(malformed(format!("unknown request {head:?}")))
}

pub fn parse_stat_request(line: usize, text: &str) -> Result<StatRequest, ParseError> {
    let malformed = |reason: &str| ParseError::Malformed {
        line,
        reason: reason.to_owned(),
    };

    if let Some(name) = text.strip_prefix("Bus ") {
        return parse_name(name)
            .map(StatRequest::Bus)
            .ok_or_else(|| malformed("empty route name"));
    }
    if let Some(name) = text.strip_prefix("Stop ") {
        return parse_name(name)
            .map(StatRequest::Stop)
            .ok_or_else(|| malformed("empty stop name"));
    }

    Err(malformed("expected 'Bus <name>' or 'Stop <name>'"))
}

fn parse_count(line: usize, value: &str) -> Result<usize, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidCount {
        line,
        value: value.to_owned(),
    })
}

fn parse_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

fn parse_degrees(raw: Option<&str>, what: &str) -> Result<f64, String> {
    let raw = raw.ok_or_else(|| format!("missing {what}"))?;
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("invalid {what} {raw:?}"))
}

/// `3900m to Marushkino`
fn parse_distance_clause(clause: &str) -> Result<(String, u32), String> {
    let (meters, other) = clause
        .split_once("m to ")
        .ok_or_else(|| format!("expected '<D>m to <stop>', found {clause:?}"))?;
    let meters = meters
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid distance {meters:?}"))?;
    let other = parse_name(other).ok_or_else(|| "empty stop name in distance".to_owned())?;
    Ok((other, meters))
}
