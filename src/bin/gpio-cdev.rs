// Copyright (c) 2018 The rust-gpio-cdev Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `gpio-cdev -n NAME -o OFF [-o OFF ...] [-d {in,out}] [-v BITSTRING]`

use std::process::ExitCode;

use clap::Parser;
use gpio_utils::cdev;
use gpio_utils::cli::{cdev_exit_status, CdevArgs, CliError, EXIT_FAILURE};
use gpio_utils::logging::init_logging;

fn main() -> ExitCode {
    init_logging();

    let args = match CdevArgs::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::from(EXIT_FAILURE);
        }
        Err(e) => e.exit(),
    };

    let inv = match args.invocation() {
        Ok(inv) => inv,
        Err(CliError::Missing(_)) => {
            print!("{}", CdevArgs::usage());
            return ExitCode::from(EXIT_FAILURE);
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match cdev::open_and_run(&args.dev_dir, &inv, &mut std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(cdev_exit_status(&e))
        }
    }
}
