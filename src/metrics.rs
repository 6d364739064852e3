/// Classification of a single target position against what was typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharState {
    Unset,
    Correct,
    Incorrect,
}

/// Live typing metrics. All values are whole numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    pub accuracy: u32,
    pub wpm: u32,
    pub progress: u32,
}

impl Metrics {
    pub fn compute(typed: &str, target: &str, elapsed_secs: u64) -> Self {
        let typed_len = typed.chars().count() as u64;
        let target_len = target.chars().count() as u64;

        let correct = correct_chars(typed, target) as u64;
        let accuracy = if typed_len == 0 {
            0
        } else {
            round_div(100 * correct, typed_len)
        };

        let wpm = if elapsed_secs == 0 {
            0
        } else {
            round_div(60 * words_typed(typed) as u64, elapsed_secs)
        };

        // only a full-length input may read as 100
        let progress = if typed_len >= target_len {
            100
        } else {
            round_div(100 * typed_len, target_len).min(99)
        };

        Self {
            accuracy: accuracy as u32,
            wpm: wpm as u32,
            progress: progress as u32,
        }
    }
}

/// Positions where the typed char equals the target char at the same index.
pub fn correct_chars(typed: &str, target: &str) -> usize {
    typed
        .chars()
        .zip(target.chars())
        .filter(|(t, e)| t == e)
        .count()
}

/// Whitespace-delimited non-empty tokens.
pub fn words_typed(typed: &str) -> usize {
    typed.split_whitespace().count()
}

/// One entry per target character. Typed characters past the end of the
/// target have no slot here; see [`overflow`].
pub fn classify(typed: &str, target: &str) -> Vec<CharState> {
    let mut typed = typed.chars();
    target
        .chars()
        .map(|expected| match typed.next() {
            None => CharState::Unset,
            Some(c) if c == expected => CharState::Correct,
            Some(_) => CharState::Incorrect,
        })
        .collect()
}

/// Characters typed beyond the target's length.
pub fn overflow(typed: &str, target: &str) -> usize {
    typed
        .chars()
        .count()
        .saturating_sub(target.chars().count())
}

// round(num / den) with halves rounded up
fn round_div(num: u64, den: u64) -> u64 {
    (2 * num + den) / (2 * den)
}
