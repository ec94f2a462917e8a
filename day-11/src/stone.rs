use std::iter::{once, Chain, Once};

/// A single stone, identified by the number engraved on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stone(pub u64);

/// What a stone turns into after one blink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Successors {
    One(u64),
    Two(u64, u64),
}

impl IntoIterator for Successors {
    type Item = u64;
    type IntoIter = Chain<Once<u64>, std::option::IntoIter<u64>>;

    fn into_iter(self) -> Self::IntoIter {
        let (first, second) = match self {
            Successors::One(value) => (value, None),
            Successors::Two(left, right) => (left, Some(right)),
        };
        once(first).chain(second)
    }
}

impl Stone {
    pub const MULTIPLIER: u64 = 2024;

    #[inline(always)]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline(always)]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Number of decimal digits; zero has one.
    pub fn digit_count(self) -> u32 {
        let mut num = self.0;
        let mut len = 1;
        while num >= 10 {
            len += 1;
            num /= 10;
        }
        len
    }

    #[inline(always)]
    pub fn has_even_digits(self) -> bool {
        self.digit_count() % 2 == 0
    }

    /// Splits the decimal digits into a high and a low half. Leading zeros of
    /// the low half vanish: 1000 splits into 10 and 0.
    pub fn split_digits(self) -> (Stone, Stone) {
        let power = 10u64.pow(self.digit_count() / 2);
        (Stone(self.0 / power), Stone(self.0 % power))
    }

    pub fn blink(self) -> Successors {
        if self.is_zero() {
            Successors::One(1)
        } else if self.has_even_digits() {
            let (left, right) = self.split_digits();
            Successors::Two(left.0, right.0)
        } else {
            // Wraps past u64::MAX / 2024, like plain unsigned arithmetic.
            Successors::One(self.0.wrapping_mul(Self::MULTIPLIER))
        }
    }
}
