use std::{
    fs::{self, read_to_string},
    path::{Path, PathBuf},
    process,
    rc::Rc,
    time::Instant,
};

use clap::Parser;
use log::{debug, info};
use minilang::{
    display_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    report::report::{render_diagnostics, render_functions, render_globals, render_tokens},
    type_checker::type_checker::type_check,
};

const TOKENS_FILE: &str = "token_list.txt";
const ERRORS_FILE: &str = "compiler_errors.txt";
const GLOBALS_FILE: &str = "global_variables.txt";
const FUNCTIONS_FILE: &str = "functions.txt";

/// Checks a MiniLang source file and reports its semantic errors.
#[derive(Parser, Debug)]
#[command(name = "minilang", version, about)]
struct Args {
    /// The source file to analyze
    file: PathBuf,

    /// Write the token list to this path
    #[arg(long, value_name = "PATH")]
    tokens: Option<PathBuf>,

    /// Write every report into this directory
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

fn write_report(path: &Path, contents: &str) {
    if let Err(error) = fs::write(path, contents) {
        eprintln!("Failed to write `{}`: {}", path.display(), error);
        process::exit(1);
    }
    debug!("wrote {}", path.display());
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read `{}`: {}", args.file.display(), error);
            process::exit(1);
        }
    };

    if let Some(out_dir) = &args.out_dir {
        if let Err(error) = fs::create_dir_all(out_dir) {
            eprintln!("Failed to create `{}`: {}", out_dir.display(), error);
            process::exit(1);
        }
    }

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| String::from("shell"));

    let tokens = tokenize(source.clone(), Some(file_name.clone()));
    info!("Tokenized in {:?}", start.elapsed());

    let token_list = render_tokens(&tokens);
    if let Some(path) = &args.tokens {
        write_report(path, &token_list);
    }
    if let Some(out_dir) = &args.out_dir {
        write_report(&out_dir.join(TOKENS_FILE), &token_list);
    }

    let parse_start = Instant::now();
    let program = match parse(tokens, Rc::new(file_name)) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, &args.file);
            if let Some(out_dir) = &args.out_dir {
                write_report(&out_dir.join(ERRORS_FILE), &format!("{}\n", error));
            }
            process::exit(1);
        }
    };
    info!("Parsed in {:?}", parse_start.elapsed());

    let check_start = Instant::now();
    let result = type_check(&program);
    info!("Type checked in {:?}", check_start.elapsed());

    let diagnostics = render_diagnostics(&result.diagnostics);
    print!("{}", diagnostics);

    if let Some(out_dir) = &args.out_dir {
        write_report(&out_dir.join(ERRORS_FILE), &diagnostics);
        write_report(&out_dir.join(GLOBALS_FILE), &render_globals(&result.globals));
        write_report(
            &out_dir.join(FUNCTIONS_FILE),
            &render_functions(&result.functions),
        );
    }

    if result.has_errors() {
        println!(
            "Found {} semantic errors in {}",
            result.diagnostics.len(),
            args.file.display()
        );
        process::exit(1);
    }

    println!(
        "No semantic errors: {} globals, {} functions ({:?})",
        result.globals.len(),
        result.functions.len(),
        start.elapsed()
    );
}
