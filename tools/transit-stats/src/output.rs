//! Answers to stat requests and their text/JSON rendering.

use std::fmt;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use transport_catalogue::{RouteStatistics, TransitCatalogue};

use crate::parse::StatRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per request
    Text,
    /// A JSON array of answers
    Json,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Answer<'a> {
    Bus {
        name: &'a str,
        /// `None` when the route is unknown
        statistics: Option<RouteStatistics>,
    },
    Stop {
        name: &'a str,
        /// `None` when the stop is unknown; sorted route names otherwise
        buses: Option<Vec<&'a str>>,
    },
}

pub fn answer<'a, C: TransitCatalogue>(
    catalogue: &'a C,
    request: &'a StatRequest,
) -> transport_catalogue::Result<Answer<'a>> {
    Ok(match request {
        StatRequest::Bus(name) => Answer::Bus {
            name,
            statistics: catalogue
                .find_route(name)
                .map(|id| catalogue.route_statistics(id))
                .transpose()?,
        },
        StatRequest::Stop(name) => Answer::Stop {
            name,
            buses: catalogue
                .find_stop(name)
                .map(|id| catalogue.route_names_by_stop(id))
                .transpose()?,
        },
    })
}

impl fmt::Display for Answer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Bus { name, statistics: None } => write!(f, "Bus {name}: not found"),
            Answer::Bus {
                name,
                statistics: Some(stats),
            } => write!(
                f,
                "Bus {name}: {} stops on route, {} unique stops, {} route length, {} curvature",
                stats.total_stops,
                stats.unique_stops,
                format_general(stats.route_length as f64, 6),
                format_general(stats.curvature, 6),
            ),
            Answer::Stop { name, buses: None } => write!(f, "Stop {name}: not found"),
            Answer::Stop { name, buses: Some(buses) } if buses.is_empty() => {
                write!(f, "Stop {name}: no buses")
            }
            Answer::Stop { name, buses: Some(buses) } => {
                write!(f, "Stop {name}: buses {}", buses.join(" "))
            }
        }
    }
}

pub fn write_answers<W: Write>(answers: &[Answer<'_>], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for answer in answers {
                writeln!(out, "{answer}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, answers)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Six-significant-digit general float notation.
///
/// Fixed notation with trailing zeros dropped, switching to scientific
/// notation for decimal exponents below -4 or at least `significant`.
pub fn format_general(value: f64, significant: usize) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let significant = significant.max(1);
    let scientific = format!("{:.*e}", significant - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= significant as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (significant as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transport_catalogue::{Coordinates, TransportCatalogue};

    #[test]
    fn general_notation() {
        assert_eq!(format_general(5950.0, 6), "5950");
        assert_eq!(format_general(27400.0, 6), "27400");
        assert_eq!(format_general(1.3612442, 6), "1.36124");
        assert_eq!(format_general(1.0, 6), "1");
        assert_eq!(format_general(0.0, 6), "0");
        assert_eq!(format_general(0.0001, 6), "0.0001");
        assert_eq!(format_general(0.00001234, 6), "1.234e-05");
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(999999.7, 6), "1e+06");
    }

    fn catalogue() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("Tolstopaltsevo", Coordinates::new(55.611087, 37.20829));
        catalogue.add_stop("Marushkino", Coordinates::new(55.595884, 37.209755));
        catalogue.add_stop("Prazhskaya", Coordinates::new(55.611678, 37.603831));
        catalogue.set_distance("Tolstopaltsevo", "Marushkino", 3900);
        catalogue
            .add_route("750", &["Tolstopaltsevo", "Marushkino", "Tolstopaltsevo"])
            .unwrap();
        catalogue.add_route("14", &["Marushkino"]).unwrap();
        catalogue
    }

    #[test]
    fn text_answers() {
        let catalogue = catalogue();
        let render = |request: StatRequest| answer(&catalogue, &request).unwrap().to_string();

        assert!(render(StatRequest::Bus("750".into()))
            .starts_with("Bus 750: 3 stops on route, 2 unique stops, 7800 route length, "));
        assert_eq!(
            render(StatRequest::Bus("14".into())),
            "Bus 14: 1 stops on route, 1 unique stops, 0 route length, 0 curvature"
        );
        assert_eq!(render(StatRequest::Bus("751".into())), "Bus 751: not found");
        assert_eq!(render(StatRequest::Stop("Samara".into())), "Stop Samara: not found");
        assert_eq!(render(StatRequest::Stop("Prazhskaya".into())), "Stop Prazhskaya: no buses");
        assert_eq!(render(StatRequest::Stop("Marushkino".into())), "Stop Marushkino: buses 14 750");
    }

    #[test]
    fn json_answers() {
        let catalogue = catalogue();
        let requests = vec![StatRequest::Bus("751".into()), StatRequest::Stop("Marushkino".into())];
        let answers = requests
            .iter()
            .map(|request| answer(&catalogue, request))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        let mut out = Vec::new();
        write_answers(&answers, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value[0]["type"], "bus");
        assert_eq!(value[0]["name"], "751");
        assert!(value[0]["statistics"].is_null());
        assert_eq!(value[1]["type"], "stop");
        assert_eq!(value[1]["buses"], serde_json::json!(["14", "750"]));
    }
}
