//! Pair table shared by the encoder and decoder.

/// Alphabet used by one locator pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbols {
    /// Upper-case letters starting at `A`.
    Letters,
    /// Decimal digits starting at `0`.
    Digits,
}

/// One precision level of a Maidenhead locator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairLayout {
    pub name: &'static str,
    pub symbols: Symbols,
    /// Number of subdivisions per axis at this level.
    pub radix: u8,
    /// Cell width in degrees of longitude.
    pub lon_span_deg: f64,
    /// Cell height in degrees of latitude.
    pub lat_span_deg: f64,
    /// Cell size counted in finest cells, the same on both axes.
    pub units: u32,
}

impl PairLayout {
    /// Character for `value`, which must be below `radix`.
    pub fn symbol(&self, value: u8) -> char {
        debug_assert!(value < self.radix);
        let base = match self.symbols {
            Symbols::Letters => b'A',
            Symbols::Digits => b'0',
        };
        char::from(base + value)
    }

    /// Value of an upper-case symbol, or `None` outside this pair's alphabet.
    pub fn value(&self, symbol: char) -> Option<u8> {
        let base = match self.symbols {
            Symbols::Letters => 'A',
            Symbols::Digits => '0',
        };
        let offset = (symbol as u32).checked_sub(base as u32)?;
        if offset < u32::from(self.radix) {
            Some(offset as u8)
        } else {
            None
        }
    }
}

/// Locator pairs from coarsest to finest. Each span is the previous span
/// divided by this pair's radix.
pub const PAIRS: [PairLayout; 6] = [
    PairLayout {
        name: "field",
        symbols: Symbols::Letters,
        radix: 18,
        lon_span_deg: 20.0,
        lat_span_deg: 10.0,
        units: 576_000,
    },
    PairLayout {
        name: "square",
        symbols: Symbols::Digits,
        radix: 10,
        lon_span_deg: 2.0,
        lat_span_deg: 1.0,
        units: 57_600,
    },
    PairLayout {
        name: "subsquare",
        symbols: Symbols::Letters,
        radix: 24,
        lon_span_deg: 5.0 / 60.0,
        lat_span_deg: 2.5 / 60.0,
        units: 2_400,
    },
    PairLayout {
        name: "extended square",
        symbols: Symbols::Digits,
        radix: 10,
        lon_span_deg: 5.0 / 600.0,
        lat_span_deg: 2.5 / 600.0,
        units: 240,
    },
    PairLayout {
        name: "extended subsquare",
        symbols: Symbols::Letters,
        radix: 24,
        lon_span_deg: 5.0 / 14_400.0,
        lat_span_deg: 2.5 / 14_400.0,
        units: 10,
    },
    PairLayout {
        name: "extended square",
        symbols: Symbols::Digits,
        radix: 10,
        lon_span_deg: 5.0 / 144_000.0,
        lat_span_deg: 2.5 / 144_000.0,
        units: 1,
    },
];

/// Finest longitude cells per degree.
pub const LON_UNITS_PER_DEG: u32 = 28_800;
/// Finest latitude cells per degree.
pub const LAT_UNITS_PER_DEG: u32 = 57_600;

/// Coarsest encodable precision (one pair).
pub const MIN_PRECISION: u8 = 1;
/// Finest encodable precision (one pair per table row).
pub const MAX_PRECISION: u8 = PAIRS.len() as u8;
/// Longest accepted locator, in characters.
pub const MAX_LOCATOR_LEN: usize = 2 * PAIRS.len();
