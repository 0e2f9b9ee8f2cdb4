/// Source of uniformly distributed integers.
///
/// Injected wherever the program needs chance, so outcomes can be pinned
/// down in tests.
pub trait RandomSource: Send {
    /// Returns a value in `0..bound`. `bound` must be greater than zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

pub type RandomSourceBox = Box<dyn RandomSource>;
