use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;
use std::{env, fs::File};

use tag_cloud::{
    parse_requested, DocumentSource, FileSource, HtmlRenderer, JsonRenderer, RendererSink,
    SeparatorSet, StdinSource, TagCloudGenerator,
};

fn print_usage() {
    eprintln!("Usage: tag-cloud [--input FILE|-] [--output FILE] [--count N] [OPTIONS]");
    eprintln!("  --input FILE       input text file, or '-' for stdin");
    eprintln!("  --output FILE      output file for the generated page");
    eprintln!("  --count N          number of terms in the tag cloud");
    eprintln!("  --separators STR   characters treated as word boundaries");
    eprintln!("  --stylesheet URL   stylesheet href for the HTML page");
    eprintln!("  --json             emit JSON triples instead of HTML");
    eprintln!("Missing input/output/count are prompted for interactively.");
}

fn prompt(label: &str) -> io::Result<String> {
    eprint!("{}: ", label);
    let _ = io::stderr().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> ExitCode {
    let program_start = Instant::now();

    let mut args = env::args().skip(1);
    let mut input_opt: Option<String> = None;
    let mut output_opt: Option<String> = None;
    let mut count_opt: Option<String> = None;
    let mut separators_opt: Option<String> = None;
    let mut stylesheet_opt: Option<String> = None;
    let mut json = false;
    while let Some(a) = args.next() {
        match a.as_str() {
            "--input" => {
                if let Some(v) = args.next() { input_opt = Some(v); } else { eprintln!("[error] --input requires a path"); return ExitCode::FAILURE; }
            }
            "--output" => {
                if let Some(v) = args.next() { output_opt = Some(v); } else { eprintln!("[error] --output requires a path"); return ExitCode::FAILURE; }
            }
            "--count" => {
                if let Some(v) = args.next() { count_opt = Some(v); } else { eprintln!("[error] --count requires a number"); return ExitCode::FAILURE; }
            }
            "--separators" => {
                if let Some(v) = args.next() { separators_opt = Some(v); } else { eprintln!("[error] --separators requires a string"); return ExitCode::FAILURE; }
            }
            "--stylesheet" => {
                if let Some(v) = args.next() { stylesheet_opt = Some(v); } else { eprintln!("[error] --stylesheet requires a URL"); return ExitCode::FAILURE; }
            }
            "--json" => { json = true; }
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => {
                // first bare argument is the input file
                if input_opt.is_none() { input_opt = Some(other.to_string()); } else { eprintln!("[warn] extra arg ignored: {}", other); }
            }
        }
    }

    // fall back to prompts, as the interactive mode does
    let input = match input_opt {
        Some(v) => v,
        None => match prompt("Insert name of input file") {
            Ok(v) => v,
            Err(e) => { eprintln!("[error] failed to read input name: {}", e); return ExitCode::FAILURE; }
        },
    };
    let output = match output_opt {
        Some(v) => v,
        None => match prompt("Insert name of output file") {
            Ok(v) => v,
            Err(e) => { eprintln!("[error] failed to read output name: {}", e); return ExitCode::FAILURE; }
        },
    };
    let count_raw = match count_opt {
        Some(v) => v,
        None => match prompt("Insert number of words in the generated tag cloud") {
            Ok(v) => v,
            Err(e) => { eprintln!("[error] failed to read term count: {}", e); return ExitCode::FAILURE; }
        },
    };
    let requested = match parse_requested(&count_raw) {
        Ok(n) => n,
        Err(e) => { eprintln!("[error] {}", e); return ExitCode::FAILURE; }
    };

    let generator = match separators_opt {
        Some(chars) => TagCloudGenerator::with_separators(SeparatorSet::from_chars(&chars)),
        None => TagCloudGenerator::new(),
    };

    let mut source: Box<dyn DocumentSource> = if input == "-" {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(&input))
    };
    let label = if input == "-" { "stdin" } else { input.as_str() };

    let out_file = match File::create(&output) {
        Ok(f) => BufWriter::new(f),
        Err(e) => { eprintln!("[error] failed to create {}: {}", output, e); return ExitCode::FAILURE; }
    };
    let mut sink: Box<dyn RendererSink> = if json {
        Box::new(JsonRenderer::new(out_file))
    } else {
        let mut renderer = HtmlRenderer::new(out_file);
        if let Some(href) = stylesheet_opt {
            renderer = renderer.with_stylesheet(href);
        }
        Box::new(renderer)
    };

    let generate_start = Instant::now();
    match generator.generate(label, requested, &mut source, &mut sink) {
        Ok(summary) => {
            eprintln!(
                "[info] {}: {} occurrences, {} distinct terms, {} rendered to {}",
                label, summary.total_terms, summary.distinct_terms, summary.rendered_terms, output
            );
            eprintln!(
                "[time] generate={:.2}ms total={:.2}ms",
                generate_start.elapsed().as_secs_f64() * 1000.0,
                program_start.elapsed().as_secs_f64() * 1000.0
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[error] {}", e);
            ExitCode::FAILURE
        }
    }
}
