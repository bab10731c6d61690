//! Property-based tests for the reconciler and sequence detector
//!
//! Uses proptest to verify invariants that must hold for any scroll
//! position, layout, or key stream.

use proptest::prelude::*;
use portfolio_core::{
    KeyInput, Layout, NavbarTier, PageConfig, Rect, RecordingSink, Reconciler, RevealKind,
    Section, SectionExtent, SequenceDetector, TargetId, TargetRect, KONAMI_CODE,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Contiguous, non-overlapping section heights starting at document top
fn section_heights_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(50.0..2000.0f64, 5)
}

fn extents_from_heights(heights: &[f64]) -> Vec<SectionExtent> {
    let mut top = 0.0;
    Section::ALL
        .iter()
        .zip(heights)
        .map(|(section, height)| {
            let extent = SectionExtent::new(*section, top, *height);
            top += height;
            extent
        })
        .collect()
}

fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        Just(KeyInput::ArrowUp),
        Just(KeyInput::ArrowDown),
        Just(KeyInput::ArrowLeft),
        Just(KeyInput::ArrowRight),
        Just(KeyInput::Char('a')),
        Just(KeyInput::Char('b')),
        Just(KeyInput::Other),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A position strictly inside exactly one extent selects that section
    #[test]
    fn position_inside_extent_selects_it(
        heights in section_heights_strategy(),
        index in 0usize..5,
        fraction in 0.01..0.99f64,
    ) {
        let extents = extents_from_heights(&heights);
        let extent = extents[index];
        let position = extent.top + extent.height * fraction;
        prop_assume!(position > extent.top && position < extent.top + extent.height);

        prop_assert_eq!(
            Reconciler::select_section(&extents, position),
            Some(extent.section)
        );
    }

    /// reconcile() applies the header offset before selecting
    #[test]
    fn reconcile_selects_section_under_adjusted_offset(
        heights in section_heights_strategy(),
        offset in 0.0..5000.0f64,
    ) {
        let config = PageConfig::default();
        let extents = extents_from_heights(&heights);
        let layout = Layout { sections: extents.clone(), ..Default::default() };
        let mut reconciler = Reconciler::new(&config);
        let mut sink = RecordingSink::default();

        reconciler.reconcile(offset, 800.0, &layout, &mut sink);

        // Fresh reconciler: no previous section to fall back to
        let expected = Reconciler::select_section(&extents, offset + config.header_offset);
        prop_assert_eq!(reconciler.active_section(), expected);
    }

    /// Navbar tier is a pure threshold comparison
    #[test]
    fn navbar_tier_threshold(offset in -500.0..5000.0f64) {
        let tier = NavbarTier::for_offset(offset, 50.0);
        prop_assert_eq!(tier == NavbarTier::Scrolled, offset >= 50.0);
    }

    /// Once revealed, a target stays revealed whatever happens next
    #[test]
    fn reveal_is_monotonic(tops in prop::collection::vec(-1000.0..3000.0f64, 1..40)) {
        let mut reconciler = Reconciler::new(&PageConfig::default());
        let mut sink = RecordingSink::default();
        let id = TargetId::new("section-header");
        let mut seen = false;

        for top in tops {
            let layout = Layout {
                targets: vec![TargetRect::new(
                    "section-header",
                    RevealKind::Scroll,
                    Rect::new(0.0, top, 300.0, 40.0),
                )],
                ..Default::default()
            };
            reconciler.reconcile(0.0, 800.0, &layout, &mut sink);
            seen |= top < 800.0 - 150.0;
            prop_assert_eq!(reconciler.is_revealed(&id), seen);
        }
        prop_assert!(sink.reveals.len() <= 1);
    }

    /// Intersection reveals fire at most once per target
    #[test]
    fn intersection_reveals_once(fractions in prop::collection::vec(0.0..=1.0f64, 1..40)) {
        let mut reconciler = Reconciler::new(&PageConfig::default());
        let mut sink = RecordingSink::default();
        let bar = TargetRect::new(
            "bar",
            RevealKind::SkillBar { target_width: 80 },
            Rect::default(),
        );
        for fraction in &fractions {
            reconciler.observe(&bar, *fraction, &mut sink);
        }
        let expected = usize::from(fractions.iter().any(|f| *f >= 0.5));
        prop_assert_eq!(sink.reveals.len(), expected);
    }

    /// The buffer never holds more than the pattern length
    #[test]
    fn detector_buffer_bounded(keys in prop::collection::vec(key_strategy(), 0..200)) {
        let mut detector = SequenceDetector::konami();
        for key in keys {
            detector.push(key);
            prop_assert!(detector.buffered() <= KONAMI_CODE.len());
        }
    }

    /// Noise followed by the pattern always fires on the last key
    #[test]
    fn detector_fires_after_noise(noise in prop::collection::vec(key_strategy(), 0..50)) {
        let mut detector = SequenceDetector::konami();
        for key in noise {
            detector.push(key);
        }
        let fired: Vec<bool> = KONAMI_CODE.iter().map(|k| detector.push(*k)).collect();
        prop_assert!(fired[KONAMI_CODE.len() - 1]);
        prop_assert_eq!(detector.buffered(), 0);
    }

    /// The pattern repeated n times fires n times
    #[test]
    fn detector_fires_once_per_repetition(n in 1usize..6) {
        let mut detector = SequenceDetector::konami();
        let fired = (0..n)
            .flat_map(|_| KONAMI_CODE)
            .filter(|k| detector.push(*k))
            .count();
        prop_assert_eq!(fired, n);
    }
}
