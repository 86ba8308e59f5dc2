use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use mython::run_program;

/// mython is an interpreter for Mython, a small dynamically typed,
/// Python flavoured language with classes, single inheritance and
/// significant whitespace.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the built-in smoke tests instead of interpreting a program.
    #[arg(short, long)]
    test: bool,

    /// Path of the Mython program to interpret.
    #[arg(required_unless_present = "test")]
    input: Option<PathBuf>,

    /// Path of the file the program's print output is written to.
    #[arg(required_unless_present = "test")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.test {
        return run_smoke_tests();
    }

    let (Some(input), Some(output)) = (args.input, args.output) else {
        eprintln!("Both an input and an output file are required.");
        return ExitCode::FAILURE;
    };

    let source = match fs::read_to_string(&input) {
        Ok(source) => source,
        Err(_) => {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      input.display());
            return ExitCode::FAILURE;
        },
    };

    let mut sink = match fs::File::create(&output) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to create the output file '{}': {e}", output.display());
            return ExitCode::FAILURE;
        },
    };

    match run_program(&source, &mut sink) {
        Ok(()) => {
            println!("Mython output was written to file: {}", output.display());
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// The built-in smoke suite: a handful of complete programs with their
/// expected output, runnable in the field without the test harness.
const SMOKE_TESTS: &[(&str, &str, &str)] =
    &[("arithmetics",
       "print 1+2+3+4+5, 1*2*3*4*5, 1-2-3-4-5, 36/4/3, 2*5+10/2\n",
       "15 120 -13 3 15\n"),
      ("simple prints",
       "print 57\nprint 10, 24, -8\nprint 'hello'\nprint \"world\"\nprint True, False\nprint\nprint None\n",
       "57\n10 24 -8\nhello\nworld\nTrue False\n\nNone\n"),
      ("assignments",
       "x = 57\nprint x\nx = 'banana'\nprint x\ny = False\nx = y\nprint x\nx = None\nprint x, y\n",
       "57\nbanana\nFalse\nNone False\n"),
      ("variables are pointers",
       "class Counter:\n  def __init__():\n    self.value = 0\n\n  def add():\n    self.value = self.value + 1\n\nclass Dummy:\n  def do_add(counter):\n    counter.add()\n\nx = Counter()\ny = x\n\nx.add()\ny.add()\n\nprint x.value\n\nd = Dummy()\nd.do_add(x)\n\nprint y.value\n",
       "2\n3\n"),
      ("inheritance and __str__",
       "class Shape:\n  def __str__():\n    return 'Shape'\n\nclass Circle(Shape):\n  def __str__():\n    return 'Circle'\n\nclass Rect(Shape):\n  def __str__():\n    return 'Rect'\n\nprint Shape(), Circle(), Rect()\n",
       "Shape Circle Rect\n")];

fn run_smoke_tests() -> ExitCode {
    let mut failed = 0;

    for &(name, source, expected) in SMOKE_TESTS {
        let mut output = Vec::new();
        let verdict = match run_program(source, &mut output) {
            Ok(()) if output == expected.as_bytes() => "ok",
            Ok(()) => "FAILED (wrong output)",
            Err(_) => "FAILED (error)",
        };
        if verdict != "ok" {
            failed += 1;
        }
        println!("{name} ... {verdict}");
    }

    if failed == 0 {
        println!("All smoke tests passed.");
        ExitCode::SUCCESS
    } else {
        eprintln!("{failed} smoke test(s) failed.");
        ExitCode::FAILURE
    }
}
