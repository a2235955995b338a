use std::{fs, process};

use clap::Parser;
use fdclosure_cli::{fixtures, App, CliError, Command};
use fdclosure_core::{closure, closure_with, format_dependencies, ProgressTracking};
use fdclosure_parser::parse_dependencies;
use fdclosure_testgen::generator::Problem;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Closure(args) => run_closure(args),
        Command::Demo => demo(),
        Command::Generate(args) => generate(args),
        Command::Solve(args) => solve(args),
        Command::Fmt(args) => fmt(args),
        Command::Schema => schema(),
    }
}

fn exit_with(error: &CliError) -> ! {
    eprintln!("error: {error}");
    process::exit(1);
}

fn run_closure(args: &fdclosure_cli::ClosureArgs) {
    let dependencies =
        fdclosure_cli::load_dependencies(args).unwrap_or_else(|e| exit_with(&e));
    let result = closure_with(&args.attributes, &dependencies, args.tracking.into());

    if args.json {
        println!("{}", fdclosure_cli::closure_json(&result));
    } else {
        print!("{}", result.report());
    }
}

fn demo() {
    for (attributes, dependencies) in fixtures::demo_runs() {
        print!("{}", closure(attributes, &dependencies).report());
        println!();
    }
}

fn generate(args: &fdclosure_cli::GenerateArgs) {
    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    });

    let problems = fdclosure_testgen::generator::generate_mult_problems(
        args.n_problem,
        args.n_attribute,
        args.n_dependency,
        args.max_side,
    );

    for problem in &problems {
        let path = args.output_dir.join(format!("{}.json", problem.get_id()));
        let file = fs::File::create(&path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", path.display());
            process::exit(1);
        });
        serde_json::to_writer_pretty(file, problem).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Generated {} problems to {}",
        problems.len(),
        args.output_dir.display()
    );
}

fn solve(args: &fdclosure_cli::SolveArgs) {
    let tracking = ProgressTracking::from(args.tracking);
    let mut any_failed = false;

    let mut entries: Vec<_> = fs::read_dir(&args.input_dir)
        .unwrap_or_else(|e| {
            eprintln!("Failed to read input directory: {e}");
            process::exit(1);
        })
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        .collect();

    entries.sort_by_key(fs::DirEntry::path);

    if entries.is_empty() {
        eprintln!("No .json files found in {}", args.input_dir.display());
        process::exit(1);
    }

    for entry in entries {
        let path = entry.path();
        let filename = path.file_name().unwrap_or_default().to_string_lossy();

        let problem: Problem = match fs::File::open(&path)
            .map_err(CliError::from)
            .and_then(|file| serde_json::from_reader::<_, Problem>(file).map_err(CliError::from))
        {
            Ok(problem) => problem,
            Err(e) => {
                any_failed = true;
                eprintln!("{filename}: {e}");
                continue;
            }
        };

        tracing::debug!(file = %filename, id = problem.get_id(), "solve: problem loaded");
        let result = problem.closure(tracking);

        if args.json {
            let mut value = fdclosure_cli::closure_json(&result);
            value["file"] = serde_json::Value::from(filename.to_string());
            println!("{value}");
        } else if args.verbose {
            println!("{filename}:");
            print!("{}", result.report());
        } else {
            println!("{filename}: {}", result.summary_line());
        }
    }

    if any_failed {
        process::exit(1);
    }
}

fn fmt(args: &fdclosure_cli::FmtArgs) {
    let files = fdclosure_cli::collect_fd_files(&args.paths).unwrap_or_else(|e| exit_with(&e));
    let mut any_unformatted = false;

    for path in files {
        let original = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {e}", path.display());
            process::exit(1);
        });
        let dependencies = parse_dependencies(&original).unwrap_or_else(|e| {
            eprintln!("{}: {e}", path.display());
            process::exit(1);
        });
        let formatted = format_dependencies(&dependencies);

        if formatted == original {
            continue;
        }
        if args.check {
            println!("{}: not formatted", path.display());
            any_unformatted = true;
        } else {
            fs::write(&path, formatted).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {e}", path.display());
                process::exit(1);
            });
            println!("{}: formatted", path.display());
        }
    }

    if any_unformatted {
        process::exit(1);
    }
}

fn schema() {
    let schema = schemars::schema_for!(Problem);
    let text = serde_json::to_string_pretty(&schema).unwrap_or_else(|e| exit_with(&e.into()));
    println!("{text}");
}
