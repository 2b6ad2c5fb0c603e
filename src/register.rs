//! Si57x frequency control registers

use core::fmt;

use crate::constants::*;


/// Bit operations on the 48 bit register image
pub trait BitField {
    /// Number of bits in the bit field
    fn num_bits() -> u8;

    /// Offset from 0
    fn offset() -> u8;

    #[inline]
    fn mask() -> u64 {
        !(u64::MAX << Self::num_bits())
    }
}

/// Generate BitField implementation
macro_rules! gen_bitfield_impl {
    ($n:ident, $nb:tt, $off:tt) => {
        impl BitField for $n {
            #[inline] fn num_bits() -> u8 { $nb }
            #[inline] fn offset() -> u8 { $off }
        }
    }
}

/// Small bitfield-encoded numbers boilerplate
macro_rules! gen_bitfield_struct {
    ($(#[$meta:meta])*, $n:ident, $v:ty, $nb:tt, $off:tt) => {
        $(#[$meta])*
        #[derive(Debug,Copy,Clone,PartialEq,Eq)]
        pub struct $n(pub $v);

        gen_bitfield_impl!($n, $nb, $off);

        impl From<u64> for $n { #[inline] fn from(x: u64) -> Self { $n(x as $v) } }
        impl From<$n> for u64 { #[inline] fn from(f: $n) -> u64 { f.0 as u64 } }
    };
}


gen_bitfield_struct!(
    /// Reference frequency multiplier, registers 8 to 12.
    /// 38 bit unsigned fixed point number, 10 integer bits and
    /// 28 fractional bits.
    /// f DCO = f XTAL × RFREQ
    , Rfreq, u64, 38, 0
);

gen_bitfield_struct!(
    /// N1 field, register 7 bits 4:0 and register 8 bits 7:6.
    /// Holds (N1 - 1).
    , N1Bits, u8, 7, 38
);

gen_bitfield_struct!(
    /// HS_DIV field, register 7 bits 7:5.
    /// Holds (HS_DIV - 4).
    , HsDivBits, u8, 3, 45
);


impl Rfreq {
    /// Fixed point scale, 2^28
    #[inline]
    pub fn scale() -> f64 {
        (1u64 << RFREQ_FRAC_BITS) as f64
    }

    /// Multiplier value
    #[inline]
    pub fn multiplier(self) -> f64 {
        self.0 as f64 / Self::scale()
    }

    /// Register value for a multiplier, truncated towards zero.
    /// Negative and NaN multipliers map to 0.
    #[inline]
    pub fn from_multiplier(m: f64) -> Self {
        Rfreq((m * Self::scale()) as u64)
    }
}


/// High speed output divider.
///
/// The device implements 4, 5, 6, 7, 9 and 11. On the wire the
/// register holds the divider minus 4.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct HsDiv(pub u32);

impl HsDiv {
    /// Divider from its register value
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        HsDiv(raw.saturating_add(HSDIV_OFFSET))
    }

    /// Register value
    #[inline]
    pub fn raw(self) -> u32 {
        self.0.saturating_sub(HSDIV_OFFSET)
    }

    /// True if the device implements this divider
    pub fn is_valid(self) -> bool {
        HSDIV_SEARCH_ORDER.contains(&self.0)
    }

    /// Valid dividers, largest first
    pub fn candidates() -> impl Iterator<Item = HsDiv> {
        HSDIV_SEARCH_ORDER.iter().map(|&d| HsDiv(d))
    }
}


/// Low speed output divider.
/// 1 or an even number from 2 to 128.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct N1(pub u32);

impl N1 {
    /// Divider from a raw N1 value.
    /// Odd values other than 1 are not implemented by the device,
    /// they are rounded up to the next even divider.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        if raw > 1 && raw % 2 == 1 {
            N1(raw.saturating_add(1))
        } else {
            N1(raw)
        }
    }

    /// Raw N1 value
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 == 1 || (self.0 % 2 == 0 && (2..=N1_MAX).contains(&self.0))
    }

    /// Valid dividers: 1, then 2, 4, .. 128
    pub fn candidates() -> impl Iterator<Item = N1> {
        core::iter::once(1)
            .chain((2..=N1_MAX).step_by(2))
            .map(N1)
    }
}


/// Frequency control registers 7 to 12, one 48 bit word,
/// register 7 in the most significant byte.
///
/// ```text
/// 47..45   44..38   37..0
/// HS_DIV   N1       RFREQ
/// ```
#[derive(Debug,Copy,Clone,Default,PartialEq,Eq)]
pub struct RegisterBlock {
    /// Register image
    pub w: u64,
}

impl RegisterBlock {

    /// Number of registers in the block
    pub const LEN: usize = 6;

    /// First register address of the block
    pub const FIRST: u8 = 7;

    /// Register image for a divider configuration
    pub fn new(rfreq: Rfreq, hsdiv: HsDiv, n1: N1) -> Self {
        RegisterBlock::default()
            .set(rfreq)
            .set(HsDivBits(hsdiv.raw() as u8))
            .set(N1Bits(n1.0.saturating_sub(1) as u8))
    }

    /// Get register bitfield value
    #[inline]
    pub fn get<F>(&self) -> F
    where F: BitField + From<u64>
    {
        F::from(
            (self.w >> F::offset()) & F::mask()
        )
    }

    /// Update register bitfield.
    /// Values wider than the field are truncated.
    #[inline]
    pub fn set<F>(mut self, f: F) -> Self
    where F: BitField + Into<u64>
    {
        let fbits = (f.into() & F::mask()) << F::offset();
        let rbits = self.w & !(F::mask() << F::offset());
        self.w = rbits | fbits;
        self
    }

    pub fn rfreq(&self) -> Rfreq {
        self.get()
    }

    pub fn hsdiv(&self) -> HsDiv {
        let bits: HsDivBits = self.get();
        HsDiv::from_raw(bits.0 as u32)
    }

    pub fn n1(&self) -> N1 {
        let bits: N1Bits = self.get();
        N1(bits.0 as u32 + 1)
    }

    /// Registers 7 to 12 as read over I2C
    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        let w = bytes.iter().fold(0u64, |w, &b| (w << 8) | b as u64);
        RegisterBlock { w }
    }

    /// Register values in device format, register 7 first
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let be = self.w.to_be_bytes();
        let mut bytes = [0u8; Self::LEN];
        bytes.copy_from_slice(&be[8 - Self::LEN..]);
        bytes
    }
}

impl fmt::Display for RegisterBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "REG{}..{} =", Self::FIRST, Self::FIRST as usize + Self::LEN - 1)?;
        for b in self.to_bytes().iter() {
            write!(f, " {:#04x}", b)?;
        }
        Ok(())
    }
}
