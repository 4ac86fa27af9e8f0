// Command-line interface for kuis
//
// This binary turns JSON question lists into styled documents.
//
// The pipeline has two stages: JSON is rendered to an intermediate text (the numbered questions,
// tab-indented options and the answer/explanation lines), and that text is classified line by
// line into a styled document. The render command stops after the first stage, so the text can
// be previewed or hand-edited and then converted on its own.
//
// Usage:
//  kuis <input> [--to <format>] [--from <format>] [-o <file>]  - Convert (default)
//  kuis convert <input> [--to <format>] [--from <format>] [-o <file>]  - Same as above (explicit)
//  kuis render <input>                   - Print the intermediate text
//  kuis classify <file>                  - Show the category of each line of an intermediate text
//  kuis --list-formats                   - List available formats
//
// An <input> of "-" reads from stdin (as quiz JSON unless --from says otherwise).
//
// Extra Parameters:
//
// Style parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and layers the values over the configured style sheet.
// Example:
//  kuis quiz.json --extra-font Arial --extra-font-size 28

mod classify;

use clap::{Arg, ArgAction, Command, ValueHint};
use kuis_babel::formats::common::{restyle, style_sheet_from_options};
use kuis_babel::ir::StyleSheet;
use kuis_babel::{render_json, FormatRegistry, SerializedDocument, INVALID_INPUT_SENTINEL};
use kuis_config::{KuisConfig, Loader};
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};

const SUBCOMMANDS: &[&str] = &["convert", "render", "classify", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg(help: &'static str) -> Arg {
    Arg::new("input")
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("kuis")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn JSON question lists into styled documents")
        .long_about(
            "kuis converts a JSON list of multiple-choice questions into a styled document.\n\n\
            Each question is a record of [prompt, options, answer, explanation].\n\n\
            Commands:\n  \
            - convert:  JSON (or intermediate text) to docx, markdown or json (default)\n  \
            - render:   Print the intermediate text for a JSON question list\n  \
            - classify: Show how each line of an intermediate text is classified\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> <value> to override the style sheet:\n  \
            font, font-size, indent-left, line-spacing.\n\n\
            Examples:\n  \
            kuis quiz.json                          # Write questions.docx\n  \
            kuis quiz.json -o ujian.docx            # Write ujian.docx\n  \
            kuis render quiz.json > quiz.md         # Preview / edit the text\n  \
            kuis quiz.md --to docx -o quiz.docx     # Build from edited text\n  \
            kuis quiz.json --extra-font Arial       # Override the font",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a kuis.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a question list to a document (default command)")
                .long_about(
                    "Convert a question list to a document.\n\n\
                    Supported formats:\n  \
                    - quiz:     JSON question list (.json, input only)\n  \
                    - markdown: Intermediate text (.md, .txt)\n  \
                    - docx:     Word document (.docx, output only)\n  \
                    - json:     Styled document tree (output only)\n\n\
                    The source format is auto-detected from the file extension; stdin ('-') is\n\
                    read as quiz JSON. The target format comes from --to, then the -o extension,\n\
                    then the configured default. Binary output without -o is written to the\n\
                    configured file name (questions.docx by default).",
                )
                .arg(input_arg("Input file path, or '-' for stdin"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to the configured format)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Print the intermediate text for a JSON question list")
                .long_about(
                    "Render a JSON question list to the intermediate text.\n\n\
                    Invalid input prints the 'Invalid JSON format' sentinel and exits with\n\
                    status 1; the reason is reported on stderr.",
                )
                .arg(input_arg("Input JSON file path, or '-' for stdin")),
        )
        .subcommand(
            Command::new("classify")
                .about("Show the category of each line of an intermediate text file")
                .arg(input_arg("Intermediate text file path, or '-' for stdin")),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if should_inject_convert(&cleaned_args) {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, to, output, &extra_params, &config);
        }
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_render_command(input);
        }
        Some(("classify", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_classify_command(input);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// A bare `kuis <input>` means convert. Stdin ("-") counts as an input too.
fn should_inject_convert(args: &[String]) -> bool {
    match args.get(1) {
        Some(first) => {
            (first == "-" || !first.starts_with('-')) && !SUBCOMMANDS.contains(&first.as_str())
        }
        None => false,
    }
}

fn init_logging(config: &KuisConfig) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(1);
            });
        return source;
    }

    fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    })
}

/// Handle the render command
fn handle_render_command(input: &str) {
    let source = read_input(input);
    match render_json(&source) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            print!("{INVALID_INPUT_SENTINEL}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the classify command
fn handle_classify_command(input: &str) {
    let source = read_input(input);
    print!("{}", classify::classify_listing(&source));
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: Option<&str>,
    to: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &KuisConfig,
) {
    let registry = FormatRegistry::default();

    let from = resolve_input_format(&registry, input, from);
    let to = resolve_output_format(&registry, to, output, config);
    debug!("Converting '{input}' from {from} to {to}");

    for name in [from.as_str(), to.as_str()] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let sheet = style_sheet_from_config(config, extra_params).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let source = read_input(input);

    let doc = registry.parse(&source, &from).unwrap_or_else(|e| {
        if e.is_input_error() {
            eprintln!("Parse error: {e}");
        } else {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    });
    let doc = restyle(&doc, &sheet);

    let result = registry
        .serialize_with_options(&doc, &to, &HashMap::new())
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match (output, result) {
        (Some(path), data) => write_output(path, data),
        (None, SerializedDocument::Text(text)) => {
            print!("{text}");
        }
        (None, data @ SerializedDocument::Binary(_)) => {
            write_output(&config.output.file_name, data);
        }
    }
}

fn write_output(path: &str, data: SerializedDocument) {
    let bytes = data.into_bytes();
    fs::write(path, &bytes).unwrap_or_else(|e| {
        eprintln!("Error writing file '{path}': {e}");
        std::process::exit(1);
    });
    info!("Wrote {} bytes to {path}", bytes.len());
}

fn resolve_input_format(registry: &FormatRegistry, input: &str, explicit: Option<&str>) -> String {
    if let Some(format) = explicit {
        return format.to_string();
    }
    if input == "-" {
        return "quiz".to_string();
    }
    registry.detect_input_format(input).unwrap_or_else(|| {
        eprintln!("Error: Could not detect format from filename '{input}'");
        eprintln!("Please specify --from explicitly");
        std::process::exit(1);
    })
}

fn resolve_output_format(
    registry: &FormatRegistry,
    explicit: Option<&str>,
    output: Option<&str>,
    config: &KuisConfig,
) -> String {
    explicit
        .map(|s| s.to_string())
        .or_else(|| output.and_then(|path| registry.detect_output_format(path)))
        .unwrap_or_else(|| config.convert.default_format.clone())
}

/// The configured style sheet with `--extra-*` style overrides layered on top.
fn style_sheet_from_config(
    config: &KuisConfig,
    extra_params: &HashMap<String, String>,
) -> Result<StyleSheet, kuis_babel::KuisError> {
    let base = StyleSheet::from(&config.docx);
    style_sheet_from_options(&base, extra_params)
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let direction = match (format.supports_parsing(), format.supports_serialization()) {
                (true, true) => "in/out",
                (true, false) => "in",
                (false, true) => "out",
                (false, false) => "-",
            };
            println!("  {name:<10} {direction:<7} {}", format.description());
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> KuisConfig {
    let loader = Loader::new().with_optional_file("kuis.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
