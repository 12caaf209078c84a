/// Reverse a string one Unicode scalar value at a time.
///
/// Reversing twice gives back the input. Grapheme clusters made of several scalars, such as a
/// letter followed by a combining accent, are not kept together: the accent ends up in front of
/// the letter, and attaches to whatever precedes it when rendered.
pub fn reverse_text(input: &str) -> String {
    input.chars().rev().collect()
}

/// The reversed form of a string, derived at most once per distinct input.
#[derive(Debug, Default)]
pub struct TextReverse {
    input: Option<String>,
    output: String,
    derivations: usize,
}

impl TextReverse {
    /// Nothing derived yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The reversed form of `input`, reusing the last result if the input is unchanged.
    pub fn get(&mut self, input: &str) -> &str {
        if self.input.as_deref() != Some(input) {
            self.derivations += 1;
            tracing::trace!(derivations = self.derivations, "deriving reversed text");
            self.output = reverse_text(input);
            self.input = Some(input.to_string());
        }
        &self.output
    }

    /// The last derived value. Empty before the first [`TextReverse::get`].
    pub fn output(&self) -> &str {
        &self.output
    }

    /// How many times the reversal actually ran.
    pub fn derivations(&self) -> usize {
        self.derivations
    }
}
