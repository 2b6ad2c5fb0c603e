//! `si57x-calc`: Si57x register / output frequency calculator.
//!
//! ```text
//! si57x-calc --rfreq 2bc011eb8 --hsdiv 0 --n1 8    FOUT from registers
//! si57x-calc --fout 125e6 [--registers]            registers for FOUT
//! ```

use std::process;

use clap::Parser;
use log::debug;

use si57x::config::{Options, Outcome};

#[derive(Debug, Parser)]
#[command(
    name = "si57x-calc",
    version,
    about = "Calculate parameters for Silabs Si57x oscillator or the output frequency from the parameters provided"
)]
struct Args {
    /// Internal crystal frequency in hertz [default = 114.285e6]
    #[arg(long, allow_negative_numbers = true)]
    fxtal: Option<String>,

    /// Raw RFREQ register value in hexadecimal
    #[arg(long, help_heading = "Calculate FOUT from registers")]
    rfreq: Option<String>,

    /// Raw HSDIV register value in hexadecimal
    #[arg(long, help_heading = "Calculate FOUT from registers")]
    hsdiv: Option<String>,

    /// Raw N1 register value in hexadecimal
    #[arg(long, help_heading = "Calculate FOUT from registers")]
    n1: Option<String>,

    /// Output frequency in hertz
    #[arg(long, allow_negative_numbers = true, help_heading = "Calculate registers from FOUT")]
    fout: Option<String>,

    /// Also print the register 7 to 12 image
    #[arg(long, help_heading = "Calculate registers from FOUT")]
    registers: bool,
}

impl From<Args> for Options {
    fn from(a: Args) -> Self {
        Options {
            fxtal: a.fxtal,
            rfreq: a.rfreq,
            hsdiv: a.hsdiv,
            n1: a.n1,
            fout: a.fout,
        }
    }
}

fn run(options: Options) -> si57x::Result<Outcome> {
    let request = options.resolve()?;
    debug!("{:?}", request);
    request.run()
}

fn main() {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let show_registers = args.registers;
    match run(args.into()) {
        Ok(outcome) => {
            println!("{}", outcome);
            if let (true, Outcome::Registers(s)) = (show_registers, &outcome) {
                println!("{}", s.registers());
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
