//! The landing page hero sequence.
//!
//! Rewrites the opening of the Gettysburg Address step by step into a one-line
//! summary, then clears the editor and starts over.

use super::{Sequence, Step};

/// Text typed by the first step of the hero sequence.
pub const HERO_ORIGINAL_TEXT: &str = "Four score and seven years ago our fathers brought forth on this continent, a new nation, conceived in Liberty, and dedicated to the proposition that all men are created equal.";

const FIRST_REWRITE: &str = "In 1863 our fathers brought forth on this continent, a new nation, conceived in Liberty, and dedicated to the proposition that all men are created equal.";
const SECOND_REWRITE: &str =
    "In 1863 our fathers brought forth on this continent, a nation of freedom and equality.";
const THIRD_REWRITE: &str = "A nation founded on freedom and equality is what America stands for.";

// Offsets are character indices into the text shown by the preceding step.
// Every span covers exactly the phrase the following delete replaces, so the
// first two (in range on the landing page as 0..15 and 57..88) were re-aimed too.
fn hero_steps() -> Vec<Step> {
    vec![
        Step::type_text(HERO_ORIGINAL_TEXT, 2000),
        // "Four score and seven years ago"
        Step::highlight(0, 30, 800),
        Step::delete("In 1863", 1200),
        Step::type_text(FIRST_REWRITE, 1000),
        // "new nation, ... created equal."
        Step::highlight(55, 153, 800),
        Step::delete(
            "In 1863 our fathers brought forth on this continent, a nation of freedom",
            1200,
        ),
        Step::type_text(SECOND_REWRITE, 1000),
        Step::highlight(0, 86, 800),
        Step::delete("A nation founded on freedom and equality", 1200),
        Step::type_text(THIRD_REWRITE, 1000),
        // " is what America stands for."
        Step::highlight(40, 68, 800),
        Step::delete("A nation founded on freedom and equality.", 1200),
        Step::reset(1500),
    ]
}

/// Build the built-in hero sequence at normal speed.
pub fn hero_sequence() -> Sequence {
    Sequence {
        steps: hero_steps(),
        speed: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::check_highlights;
    use std::time::Duration;

    #[test]
    fn hero_steps_pass_constructor_checks() {
        assert!(Sequence::new(hero_steps()).is_ok());
    }

    #[test]
    fn hero_sequence_has_thirteen_steps() {
        assert_eq!(hero_sequence().len(), 13);
    }

    #[test]
    fn hero_highlights_stay_in_bounds() {
        assert!(check_highlights(&hero_sequence()).is_empty());
    }

    #[test]
    fn hero_cycle_lasts_fourteen_and_a_half_seconds() {
        assert_eq!(hero_sequence().cycle_duration(), Duration::from_millis(14_500));
    }

    #[test]
    fn hero_highlights_cover_replaced_text() {
        let original: String = HERO_ORIGINAL_TEXT.chars().take(30).collect();
        assert_eq!(original, "Four score and seven years ago");

        let tail: String = THIRD_REWRITE.chars().skip(40).collect();
        assert_eq!(tail, " is what America stands for.");
    }

    #[test]
    fn hero_ends_with_reset() {
        let seq = hero_sequence();
        assert_eq!(seq.steps().last(), Some(&Step::reset(1500)));
    }
}
