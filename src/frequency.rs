//! Frequency calculations
//!
//! ```text
//! f DCO = f XTAL × RFREQ
//! f OUT = f DCO / (HS_DIV × N1)
//! ```

use log::{debug, trace};

use crate::{constants::*, errors::*, register::*};


/// DCO frequency for a given RFREQ, Hz
#[inline]
pub fn fdco(rfreq: Rfreq, fxtal: f64) -> f64 {
    (rfreq.0 as f64 * fxtal) / Rfreq::scale()
}

/// True if the DCO can run at this frequency
#[inline]
pub fn fdco_in_range(fdco: f64) -> bool {
    (FDCO_MIN_HZ ..= FDCO_MAX_HZ).contains(&fdco)
}

/// Output frequency for a divider configuration, Hz.
///
/// Defined for any input, nothing is checked against the device limits.
pub fn f_out(rfreq: Rfreq, hsdiv: HsDiv, n1: N1, fxtal: f64) -> f64 {
    fdco(rfreq, fxtal) / (hsdiv.0 as f64 * n1.0 as f64)
}


/// Divider configuration selected for an output frequency
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Solution {
    pub rfreq: Rfreq,
    pub hsdiv: HsDiv,
    pub n1: N1,
    /// DCO frequency, Hz
    pub fdco: f64,
    /// Frequency actually produced, Hz
    pub fout: f64,
    /// Distance from the requested frequency, Hz
    pub error: f64,
}

impl Solution {
    /// Register image for this configuration
    pub fn registers(&self) -> RegisterBlock {
        RegisterBlock::new(self.rfreq, self.hsdiv, self.n1)
    }
}


/// Finds the divider configuration closest to `fout`.
///
/// Every HS_DIV / N1 pair is tried, RFREQ is truncated to the register
/// resolution. Pairs that put the DCO outside its band are skipped.
/// On equal error the pair tried first wins, HS_DIV from 11 down,
/// N1 from 1 up.
pub fn solve(fout: f64, fxtal: f64) -> Result<Solution> {
    let candidates = HsDiv::candidates()
        .flat_map(|hsdiv| N1::candidates().map(move |n1| (hsdiv, n1)))
        .filter_map(|(hsdiv, n1)| {
            let rfreq = Rfreq(
                (fout * hsdiv.0 as f64 * n1.0 as f64 * Rfreq::scale() / fxtal) as u64
            );
            let fdco = fdco(rfreq, fxtal);
            if !fdco_in_range(fdco) {
                return None;
            }
            let achieved = fdco / (hsdiv.0 as f64 * n1.0 as f64);
            let error = (fout - achieved).abs();
            Some(Solution { rfreq, hsdiv, n1, fdco, fout: achieved, error })
        });

    match first_minimum(candidates, |s| s.error) {
        Some(s) => {
            debug!(
                "fout {} Hz: HS_DIV {} N1 {} RFREQ {:#x}, fdco {} Hz, error {} Hz",
                fout, s.hsdiv.0, s.n1.0, s.rfreq.0, s.fdco, s.error
            );
            Ok(s)
        }
        None => {
            debug!("fout {} Hz: no divider pair within the DCO band", fout);
            Err(Error::OutOfRange { fout })
        }
    }
}

/// Smallest element by `key`, the earliest one on ties.
fn first_minimum<T, I, K>(items: I, key: K) -> Option<T>
where I: IntoIterator<Item = T>,
      K: Fn(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;
    for item in items {
        let k = key(&item);
        if best.as_ref().map_or(true, |(_, b)| k < *b) {
            trace!("new best, key {}", k);
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}
