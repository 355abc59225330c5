// Copyright 2024 The DocAssert Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use json_compare::{compare_object, load_json, Config, JSONPath, NumericMode, Suppression};

#[doc(hidden)]
#[macro_export]
macro_rules! write_to_output {
    ($writer:expr, $msg:expr, $($arg:tt)*) => {
        if let Err(err) = writeln!($writer, $msg, $($arg)*) {
            eprintln!("Error: {}", err);
            std::process::exit(Code::INTERNAL_ERROR);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! handle_error {
    ($code:expr, $msg:expr, $($arg:tt)*) => {
        println!($msg, $($arg)*);
        std::process::exit($code);
    };

    ($code:expr, $msg:expr) => {
        println!($msg);
        std::process::exit($code);
    };
}

#[doc(hidden)]
struct Code;

impl Code {
    const SUCCESS: i32 = 0;
    const DIFFERENT: i32 = 1;
    const INVALID_ARGUMENT: i32 = 2;
    const LOAD_ERROR: i32 = 3;
    const INTERNAL_ERROR: i32 = 4;
}

#[doc(hidden)]
#[derive(Debug, Parser, PartialEq)]
#[command(version, about, long_about = None)]
struct Cli {
    /// First JSON file
    lhs: PathBuf,

    /// Second JSON file
    rhs: PathBuf,

    /// JSONPath of a location to leave out of the comparison, may be repeated
    #[clap(short, long = "ignore", value_name = "JSONPATH")]
    ignore: Vec<String>,

    /// Compare all numbers as floating point values
    #[clap(long)]
    assume_float: bool,

    /// When to skip the message for a key whose values differ
    #[clap(long, value_enum, default_value_t = Suppression::Redundant)]
    suppression: Suppression,

    /// Print each difference with its path and indented values
    #[clap(long)]
    pretty: bool,

    /// Exit with status 1 when the documents differ
    #[clap(long)]
    exit_code: bool,

    /// Log comparison progress to stderr
    #[clap(short, long)]
    verbose: bool,
}

#[doc(hidden)]
fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let lhs = match load_json(&cli.lhs) {
        Ok(value) => value,
        Err(err) => {
            handle_error!(Code::LOAD_ERROR, "Error: {}", err);
        }
    };

    let rhs = match load_json(&cli.rhs) {
        Ok(value) => value,
        Err(err) => {
            handle_error!(Code::LOAD_ERROR, "Error: {}", err);
        }
    };

    let numeric_mode = if cli.assume_float {
        NumericMode::AssumeFloat
    } else {
        NumericMode::Strict
    };

    let mut config = Config::new()
        .numeric_mode(numeric_mode)
        .suppression(cli.suppression);

    for pattern in cli.ignore.iter() {
        match pattern.jsonpath() {
            Ok(path) => config = config.ignore_path(path),
            Err(err) => {
                handle_error!(
                    Code::INVALID_ARGUMENT,
                    "Error: invalid ignore path {}: {}",
                    pattern,
                    err
                );
            }
        }
    }

    let comparison = compare_object(&lhs, &rhs, config);

    let mut out = io::stdout().lock();
    for difference in comparison.differences() {
        if cli.pretty {
            write_to_output!(out, "{:#}", difference);
        } else {
            write_to_output!(out, "{}", difference);
        }
    }
    write_to_output!(out, "{}", comparison.summary());
    if let Err(err) = out.flush() {
        handle_error!(Code::INTERNAL_ERROR, "Error: {}", err);
    }

    if cli.exit_code && !comparison.is_equal() {
        std::process::exit(Code::DIFFERENT);
    }
    std::process::exit(Code::SUCCESS);
}
