// Copyright (c) 2018 The rust-gpio-cdev Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `gpio-sysfs -n NUM [-d {in,out}] [-v {0,1}]`

use std::process::ExitCode;

use clap::Parser;
use gpio_utils::cli::{CliError, SysfsArgs, EXIT_FAILURE};
use gpio_utils::logging::init_logging;
use gpio_utils::sysfs::{self, Sysfs};

fn main() -> ExitCode {
    init_logging();

    let args = match SysfsArgs::try_parse() {
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
            print!("{}", SysfsArgs::usage());
            return ExitCode::from(EXIT_FAILURE);
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let sysfs = Sysfs::new(&args.sysfs_root);
    match sysfs::run(&sysfs, &inv, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
