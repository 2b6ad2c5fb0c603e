//! Constants

/// Nominal internal crystal frequency, Hz.
/// Each part is factory calibrated, the real value is within a few
/// hundred ppm of this and can be recovered from the startup RFREQ.
pub const FXTAL_DEFAULT_HZ: f64 = 114.285e6;

/// Minimum DCO frequency, Hz
pub const FDCO_MIN_HZ: f64 = 4.85e9;

/// Maximum DCO frequency, Hz
pub const FDCO_MAX_HZ: f64 = 5.67e9;

/// RFREQ is a 38 bit fixed point number with a 28 bit fraction
pub const RFREQ_FRAC_BITS: u32 = 28;

/// Full width of the RFREQ register
pub const RFREQ_BITS: u32 = 38;

/// HS_DIV register holds (divider - 4)
pub const HSDIV_OFFSET: u32 = 4;

/// Valid HS_DIV dividers, in search order.
/// 8 and 10 are not implemented by the device.
pub const HSDIV_SEARCH_ORDER: [u32; 6] = [11, 9, 7, 6, 5, 4];

/// Largest N1 divider. N1 is 1 or an even number up to this value.
pub const N1_MAX: u32 = 128;
