//! Ordinal types usable as range bounds.

/// A totally ordered type with a successor.
///
/// `succ` returns `None` at the type's maximum, which lets a range like
/// `250u8..=255` end without overflowing.
pub trait Ordinal: Copy + Ord {
    fn succ(self) -> Option<Self>;
}

macro_rules! ordinal_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordinal for $t {
                #[inline]
                fn succ(self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

ordinal_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Ordinal for char {
    fn succ(self) -> Option<Self> {
        match self {
            // Skip the surrogate gap.
            '\u{D7FF}' => Some('\u{E000}'),
            c => char::from_u32(c as u32 + 1),
        }
    }
}
