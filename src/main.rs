mod debug_report;

use std::io::{self, IsTerminal, Read};
use std::sync::Once;

use twmerge::{Config, Merger, ModifierOrder};

static TRACING_INIT: Once = Once::new();

fn main() {
    init_tracing();

    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut config = Config::default();
    if let Some(prefix) = &cli.prefix {
        config = config.with_prefix(prefix.clone());
    }
    if cli.normalize_modifiers {
        config = config.with_modifier_order(ModifierOrder::Normalized);
    }

    let merger = match Merger::new(config) {
        Ok(merger) => merger,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let inputs: Vec<&str> = cli.inputs.iter().map(String::as_str).collect();
    if cli.explain {
        let report = merger.merge_verbose(&inputs);
        debug_report::print_report(&inputs, &report, cli.color);
    } else {
        println!("{}", merger.merge(&inputs));
    }
}

/// Log to stderr when `RUST_LOG` is set, e.g. `RUST_LOG=twmerge=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

struct CliConfig {
    inputs: Vec<String>,
    prefix: Option<String>,
    normalize_modifiers: bool,
    explain: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut inputs: Vec<String> = Vec::new();
    let mut prefix: Option<String> = None;
    let mut normalize_modifiers = false;
    let mut explain = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("twmerge {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-e" | "--explain" => explain = true,
            "--normalize-modifiers" => normalize_modifiers = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--prefix" => {
                let value = args.next().ok_or_else(|| "error: --prefix expects a value".to_string())?;
                prefix = Some(parse_prefix(&value)?);
            }
            "--" => {
                inputs.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--prefix=") => {
                prefix = Some(parse_prefix(arg.trim_start_matches("--prefix="))?);
            }
            _ if arg.starts_with('-') && !looks_like_class(&arg) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => inputs.push(arg),
        }
    }

    if inputs.is_empty() {
        inputs.push(read_stdin_input()?);
    }

    if inputs.iter().all(|input| input.trim().is_empty()) {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { inputs, prefix, normalize_modifiers, explain, color })
}

/// Negative utilities (`-mt-2`) are class lists, not options.
fn looks_like_class(arg: &str) -> bool {
    arg.len() > 1 && !arg.starts_with("--") && arg[1..].contains('-')
}

fn parse_prefix(value: &str) -> Result<String, String> {
    if value.is_empty() || value.contains(|c: char| c == ':' || c.is_whitespace()) {
        return Err(format!("error: invalid --prefix '{value}' (expected a non-empty name without ':' or spaces)"));
    }
    Ok(value.to_string())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "twmerge {version}

Merge tailwind class lists without style conflicts.

Usage:
  twmerge [OPTIONS] [--] <class-list...>
  echo '<class-list>' | twmerge [OPTIONS]

Each argument is one class list; later lists override earlier ones. With no
class-list arguments the whole of stdin is read as a single list.

Options:
  -e, --explain              Print a per-token report instead of the result.
  --prefix <name>            Only merge classes written as <name>:<class>.
  --normalize-modifiers      Treat reordered variant modifiers as one scope.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Enable logging to stderr, e.g. RUST_LOG=twmerge=trace.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
