//! Calculation requests from command line options

use core::fmt;

use crate::{constants::*, errors::*, frequency::*, register::*};


/// Option values as given on the command line
#[derive(Debug,Clone,Default)]
pub struct Options {
    pub fxtal: Option<String>,
    pub rfreq: Option<String>,
    pub hsdiv: Option<String>,
    pub n1: Option<String>,
    pub fout: Option<String>,
}

/// A single calculation
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Request {
    /// Output frequency from register values
    Frequency {
        rfreq: Rfreq,
        hsdiv: HsDiv,
        n1: N1,
        fxtal: f64,
    },
    /// Register values for an output frequency
    Registers {
        fout: f64,
        fxtal: f64,
    },
}

impl Options {

    /// Picks the calculation mode and parses the values it needs.
    /// Register options and `fout` are mutually exclusive.
    pub fn resolve(&self) -> Result<Request> {
        let any_register = self.rfreq.is_some() || self.hsdiv.is_some() || self.n1.is_some();

        match (&self.fout, &self.rfreq, &self.hsdiv, &self.n1) {
            (Some(_), _, _, _) if any_register => Err(Error::ArgumentConflict),
            (Some(fout), _, _, _) => Ok(Request::Registers {
                fout: parse_hz("fout", fout)?,
                fxtal: self.fxtal()?,
            }),
            (None, Some(rfreq), Some(hsdiv), Some(n1)) => Ok(Request::Frequency {
                rfreq: Rfreq(parse_hex("rfreq", rfreq)?),
                hsdiv: HsDiv::from_raw(parse_hex_u32("hsdiv", hsdiv)?),
                n1: N1::from_raw(parse_hex_u32("n1", n1)?),
                fxtal: self.fxtal()?,
            }),
            _ => Err(Error::MissingArguments),
        }
    }

    /// Crystal frequency, the nominal one unless overridden
    pub fn fxtal(&self) -> Result<f64> {
        let fxtal = match &self.fxtal {
            Some(s) => parse_hz("fxtal", s)?,
            None => FXTAL_DEFAULT_HZ,
        };
        (if fxtal > 0.0 { Ok(()) } else { Err(Error::invalid("fxtal", fxtal.to_string(), "must be positive")) })?;
        Ok(fxtal)
    }
}


/// Calculation result
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Outcome {
    /// Output frequency, Hz
    Frequency(f64),
    Registers(Solution),
}

impl Request {
    pub fn run(&self) -> Result<Outcome> {
        match *self {
            Request::Frequency { rfreq, hsdiv, n1, fxtal } => {
                Ok(Outcome::Frequency(f_out(rfreq, hsdiv, n1, fxtal)))
            }
            Request::Registers { fout, fxtal } => {
                solve(fout, fxtal).map(Outcome::Registers)
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Frequency(fout) => write!(f, "FOUT = {:?} Hz", fout),
            Outcome::Registers(s) => {
                writeln!(f, "RFREQ = 0x{:010x}", s.rfreq.0)?;
                writeln!(f, "HSDIV = 0x{:01x}", s.hsdiv.raw())?;
                write!(f, "N1 = 0x{:02x}", s.n1.raw())
            }
        }
    }
}


/// Hexadecimal register value, `0x` prefix optional
pub fn parse_hex(option: &'static str, text: &str) -> Result<u64> {
    let t = text.trim();
    let digits = t.strip_prefix("0x")
        .or_else(|| t.strip_prefix("0X"))
        .unwrap_or(t);
    u64::from_str_radix(digits, 16).map_err(|e| Error::invalid(option, text, e))
}

fn parse_hex_u32(option: &'static str, text: &str) -> Result<u32> {
    let v = parse_hex(option, text)?;
    u32::try_from(v).map_err(|e| Error::invalid(option, text, e))
}

/// Frequency in hertz, any finite float notation
pub fn parse_hz(option: &'static str, text: &str) -> Result<f64> {
    let v: f64 = text.trim().parse().map_err(|e| Error::invalid(option, text, e))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(Error::invalid(option, text, "not a finite number"))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn registers(rfreq: &str, hsdiv: &str, n1: &str) -> Options {
        Options {
            rfreq: Some(rfreq.into()),
            hsdiv: Some(hsdiv.into()),
            n1: Some(n1.into()),
            ..Options::default()
        }
    }

    fn frequency(fout: &str) -> Options {
        Options { fout: Some(fout.into()), ..Options::default() }
    }

    #[test]
    fn resolves_frequency_mode() {
        let r = registers("0x2bc011eb8", "1", "8").resolve().unwrap();
        assert_eq!(r, Request::Frequency {
            rfreq: Rfreq(0x2_bc01_1eb8),
            hsdiv: HsDiv(5),
            n1: N1(8),
            fxtal: FXTAL_DEFAULT_HZ,
        });
    }

    #[test]
    fn resolves_registers_mode() {
        let mut o = frequency("125e6");
        o.fxtal = Some("114.28e6".into());
        assert_eq!(o.resolve().unwrap(), Request::Registers { fout: 125e6, fxtal: 114.28e6 });
    }

    #[test]
    fn fout_with_register_conflicts() {
        let mut o = frequency("125e6");
        o.rfreq = Some("0x2bc011eb8".into());
        assert_eq!(o.resolve(), Err(Error::ArgumentConflict));

        let mut o = registers("1", "1", "1");
        o.fout = Some("not a number".into());
        assert_eq!(o.resolve(), Err(Error::ArgumentConflict));
    }

    #[test]
    fn incomplete_registers_are_missing() {
        assert_eq!(Options::default().resolve(), Err(Error::MissingArguments));

        let mut o = registers("1", "1", "1");
        o.n1 = None;
        assert_eq!(o.resolve(), Err(Error::MissingArguments));
    }

    #[test]
    fn malformed_values() {
        let e = registers("0xzz", "1", "8").resolve().unwrap_err();
        assert!(matches!(e, Error::InvalidArgumentFormat { option: "rfreq", .. }));

        let e = registers("1", "1", "100000000").resolve().unwrap_err();
        assert!(matches!(e, Error::InvalidArgumentFormat { option: "n1", .. }));

        let e = frequency("12.5 MHz").resolve().unwrap_err();
        assert!(matches!(e, Error::InvalidArgumentFormat { option: "fout", .. }));

        let e = frequency("inf").resolve().unwrap_err();
        assert!(matches!(e, Error::InvalidArgumentFormat { option: "fout", .. }));
    }

    #[test]
    fn fxtal_must_be_positive() {
        let mut o = frequency("125e6");
        o.fxtal = Some("0".into());
        assert!(matches!(o.resolve(), Err(Error::InvalidArgumentFormat { option: "fxtal", .. })));
        o.fxtal = Some("-114.285e6".into());
        assert!(matches!(o.resolve(), Err(Error::InvalidArgumentFormat { option: "fxtal", .. })));
    }

    #[test]
    fn hex_prefix_is_optional() {
        assert_eq!(parse_hex("n1", "0x1f"), Ok(0x1f));
        assert_eq!(parse_hex("n1", "0X1F"), Ok(0x1f));
        assert_eq!(parse_hex("n1", " 1f "), Ok(0x1f));
        assert!(parse_hex("n1", "").is_err());
    }

    #[test]
    fn odd_n1_matches_next_even() {
        let a = registers("2bc011eb8", "0", "3").resolve().unwrap().run().unwrap();
        let b = registers("2bc011eb8", "0", "4").resolve().unwrap().run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn frequency_output() {
        let mut o = registers("141dd7600", "5", "6");
        o.fxtal = Some("268435456".into());
        let out = o.resolve().unwrap().run().unwrap();
        assert_eq!(out.to_string(), "FOUT = 100000000.0 Hz");
    }

    #[test]
    fn registers_output() {
        let mut o = frequency("100e6");
        o.fxtal = Some("268435456".into());
        let out = o.resolve().unwrap().run().unwrap();
        assert_eq!(out.to_string(), "RFREQ = 0x0141dd7600\nHSDIV = 0x5\nN1 = 0x06");
    }

    #[test]
    fn out_of_range_run() {
        let r = frequency("1").resolve().unwrap();
        assert_eq!(r.run(), Err(Error::OutOfRange { fout: 1.0 }));
    }
}
