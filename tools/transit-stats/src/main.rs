use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use transport_catalogue::TransportCatalogue;

mod output;
mod parse;

use output::{answer, write_answers, OutputFormat};
use parse::{parse_script, BaseRequest};

#[derive(Parser, Debug)]
#[command(
    name = "transit-stats",
    author,
    version,
    about = "Build a transport catalogue from text commands and print route and stop statistics",
    long_about = "Reads a request count followed by that many Stop/Bus definitions, then a \
                  second count followed by Bus/Stop queries. Stops may be referenced before \
                  they are defined.\n\n\
                  Each query is answered on stdout in request order; logs go to stderr."
)]
struct Args {
    /// Input file with requests (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format for answers
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();

    let input = match &args.input {
        Some(path) => {
            tracing::info!("Input: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&input, args.format, &mut out)?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}

fn run<W: Write>(input: &str, format: OutputFormat, out: &mut W) -> Result<()> {
    let script = parse_script(input).context("Failed to parse input")?;
    tracing::debug!(
        base = script.base.len(),
        stats = script.stats.len(),
        "parsed requests"
    );

    let catalogue = build_catalogue(&script.base);

    let answers = script
        .stats
        .iter()
        .map(|request| answer(&catalogue, request))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to answer requests")?;

    write_answers(&answers, format, out)
}

/// Apply base requests in input order.
///
/// A rejected route is logged and skipped; it does not stop ingestion.
fn build_catalogue(requests: &[BaseRequest]) -> TransportCatalogue {
    let mut catalogue = TransportCatalogue::new();

    for request in requests {
        match request {
            BaseRequest::Stop {
                name,
                coordinates,
                distances,
            } => {
                catalogue.add_stop(name, *coordinates);
                for (other, meters) in distances {
                    catalogue.set_distance(name, other, *meters);
                }
            }
            BaseRequest::Bus { name, stops } => {
                if let Err(err) = catalogue.add_route(name, stops.as_slice()) {
                    tracing::warn!(route = %name, "Skipping route: {err}");
                }
            }
        }
    }

    let undefined = catalogue.stops().filter(|stop| stop.is_placeholder()).count();
    if undefined > 0 {
        tracing::warn!("{undefined} stops are referenced but never defined; using (0, 0)");
    }
    tracing::info!(
        stops = catalogue.stop_count(),
        routes = catalogue.route_count(),
        "Catalogue built"
    );

    catalogue
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
13
Stop Tolstopaltsevo: 55.611087, 37.20829, 3900m to Marushkino
Stop Marushkino: 55.595884, 37.209755, 9900m to Rasskazovka, 100m to Marushkino
Bus 256: Biryulyovo Zapadnoye > Biryusinka > Universam > Biryulyovo Tovarnaya > Biryulyovo Passazhirskaya > Biryulyovo Zapadnoye
Bus 750: Tolstopaltsevo - Marushkino - Marushkino - Rasskazovka
Stop Rasskazovka: 55.632761, 37.333324, 9500m to Marushkino
Stop Biryulyovo Zapadnoye: 55.574371, 37.6517, 7500m to Rossoshanskaya ulitsa, 1800m to Biryusinka, 2400m to Universam
Stop Biryusinka: 55.581065, 37.64839, 750m to Universam
Stop Universam: 55.587655, 37.645687, 5600m to Rossoshanskaya ulitsa, 900m to Biryulyovo Tovarnaya
Stop Biryulyovo Tovarnaya: 55.592028, 37.653656, 1300m to Biryulyovo Passazhirskaya
Stop Biryulyovo Passazhirskaya: 55.580999, 37.659164, 1200m to Biryulyovo Zapadnoye
Bus 828: Biryulyovo Zapadnoye > Universam > Rossoshanskaya ulitsa > Biryulyovo Zapadnoye
Stop Rossoshanskaya ulitsa: 55.595579, 37.605757
Stop Prazhskaya: 55.611678, 37.603831
6
Bus 256
Bus 750
Bus 751
Stop Samara
Stop Prazhskaya
Stop Biryulyovo Zapadnoye
";

    fn run_text(input: &str) -> String {
        let mut out = Vec::new();
        run(input, OutputFormat::Text, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn curvature(line: &str) -> f64 {
        line.rsplit(", ")
            .next()
            .and_then(|tail| tail.strip_suffix(" curvature"))
            .and_then(|value| value.parse().ok())
            .unwrap()
    }

    #[test]
    fn sample_script() {
        let output = run_text(SAMPLE);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Bus 256: 6 stops on route, 5 unique stops, 5950 route length, "));
        assert!((curvature(lines[0]) - 1.36124).abs() < 1e-4);
        assert!(lines[1].starts_with("Bus 750: 7 stops on route, 3 unique stops, 27400 route length, "));
        assert!((curvature(lines[1]) - 1.30853).abs() < 1e-4);
        assert_eq!(lines[2], "Bus 751: not found");
        assert_eq!(lines[3], "Stop Samara: not found");
        assert_eq!(lines[4], "Stop Prazhskaya: no buses");
        assert_eq!(lines[5], "Stop Biryulyovo Zapadnoye: buses 256 828");
    }

    #[test]
    fn rejected_route_does_not_abort() {
        let output = run_text(
            "3\n\
             Bus 1: A > B > A\n\
             Bus 1: C > D > C\n\
             Stop A: 55.0, 37.0\n\
             2\n\
             Bus 1\n\
             Stop C\n",
        );

        assert!(output.starts_with("Bus 1: 3 stops on route, 2 unique stops"));
        assert!(output.ends_with("Stop C: not found\n"));
    }

    #[test]
    fn malformed_input_is_an_error() {
        let mut out = Vec::new();
        let err = run("1\nStop A: north, south\n0\n", OutputFormat::Text, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
        assert!(out.is_empty());
    }

    #[test]
    fn json_output() {
        let mut out = Vec::new();
        run(SAMPLE, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(6));
        assert_eq!(value[0]["statistics"]["route_length"], 5950);
        assert_eq!(value[5]["buses"], serde_json::json!(["256", "828"]));
    }
}
