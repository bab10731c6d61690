//! Sliding-window sequence detection.
//!
//! The detector keeps the `N` most recent inputs, where `N` is the pattern
//! length. A full window equal to the pattern fires once and empties the
//! window, so overlapping matches are not detected.

use std::collections::VecDeque;

use crate::event::KeyInput;

/// ↑ ↑ ↓ ↓ ← → ← → B A
pub const KONAMI_CODE: [KeyInput; 10] = [
    KeyInput::ArrowUp,
    KeyInput::ArrowUp,
    KeyInput::ArrowDown,
    KeyInput::ArrowDown,
    KeyInput::ArrowLeft,
    KeyInput::ArrowRight,
    KeyInput::ArrowLeft,
    KeyInput::ArrowRight,
    KeyInput::Char('b'),
    KeyInput::Char('a'),
];

/// Matches a fixed pattern against a stream of inputs.
#[derive(Debug, Clone)]
pub struct SequenceDetector<T> {
    pattern: Vec<T>,
    buffer: VecDeque<T>,
}

impl<T: PartialEq + Clone> SequenceDetector<T> {
    pub fn new(pattern: impl Into<Vec<T>>) -> Self {
        let pattern = pattern.into();
        let buffer = VecDeque::with_capacity(pattern.len() + 1);
        Self { pattern, buffer }
    }

    /// Feed one input. Returns true exactly when the pattern completes.
    pub fn push(&mut self, input: T) -> bool {
        if self.pattern.is_empty() {
            return false;
        }

        self.buffer.push_back(input);
        if self.buffer.len() > self.pattern.len() {
            self.buffer.pop_front();
        }

        if self.buffer.len() == self.pattern.len() && self.buffer.iter().eq(self.pattern.iter()) {
            self.buffer.clear();
            return true;
        }
        false
    }

    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    /// Number of buffered inputs.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

impl SequenceDetector<KeyInput> {
    pub fn konami() -> Self {
        Self::new(KONAMI_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pattern_fires_once_and_clears() {
        let mut detector = SequenceDetector::konami();
        let fired: Vec<bool> = KONAMI_CODE.iter().map(|k| detector.push(*k)).collect();

        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[9]);
        assert_eq!(detector.buffered(), 0);
    }

    #[test]
    fn test_buffer_bounded_by_pattern_length() {
        let mut detector = SequenceDetector::new(vec![1, 2, 3]);
        for n in 0..100 {
            detector.push(n + 10);
        }
        assert_eq!(detector.buffered(), 3);
    }

    #[test]
    fn test_leading_noise_is_evicted() {
        let mut detector = SequenceDetector::new(vec![1, 2, 3]);
        assert!(!detector.push(9));
        assert!(!detector.push(1));
        assert!(!detector.push(2));
        assert!(detector.push(3));
    }

    #[test]
    fn test_no_overlapping_matches() {
        // "aa" in "aaa" matches once, then the window restarts empty
        let mut detector = SequenceDetector::new(vec!['a', 'a']);
        assert!(!detector.push('a'));
        assert!(detector.push('a'));
        assert!(!detector.push('a'));
        assert!(detector.push('a'));
    }

    #[test]
    fn test_empty_pattern_never_fires() {
        let mut detector: SequenceDetector<u32> = SequenceDetector::new(Vec::new());
        assert!(!detector.push(1));
        assert_eq!(detector.buffered(), 0);
    }

    #[test]
    fn test_legacy_key_codes() {
        let codes = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];
        let mut detector = SequenceDetector::konami();
        let fired = codes
            .into_iter()
            .map(KeyInput::from_legacy_code)
            .filter(|k| detector.push(*k))
            .count();
        assert_eq!(fired, 1);
    }
}
