use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use synth_chart::api::{RenderRequest, RenderResponse, render_chart};
use synth_chart::telemetry::init_default_tracing;

const USAGE: &str =
    "usage: render_chart [--input <payload.json>] [--output <path>] [--markup-only] [--pretty]";

#[derive(Debug, Default)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    markup_only: bool,
    pretty: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            buf
        }
    };
    // An empty body is treated as `{}` so validation reports the missing field.
    let raw = if raw.trim().is_empty() { "{}" } else { raw.as_str() };

    let request = RenderRequest::from_json_str(raw).map_err(|err| err.to_string())?;
    let rendered = render_chart(&request).map_err(|err| err.to_string())?;

    let body = if args.markup_only {
        rendered.markup().to_owned()
    } else {
        let response = RenderResponse::from_rendered(rendered, &request);
        let json = if args.pretty {
            response.to_json_pretty()
        } else {
            response.to_json()
        };
        json.map_err(|err| err.to_string())?
    };

    match &args.output {
        Some(path) => fs::write(path, body)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{body}").map_err(|err| format!("failed to write stdout: {err}"))
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                parsed.input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                parsed.output = Some(PathBuf::from(value));
            }
            "--markup-only" => parsed.markup_only = true,
            "--pretty" => parsed.pretty = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}
