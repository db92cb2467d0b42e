//! Grapheme-aware splitting for per-letter text animation.
//!
//! Devanagari display strings tear into broken glyph fragments when they
//! are animated per scalar value: matras and conjunct marks end up in their
//! own spans and render detached from their base consonant. The entrance
//! animation therefore splits on extended grapheme clusters, with plain
//! per-scalar splitting kept as the degraded path.

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Extended grapheme clusters (UAX #29); combining marks stay attached.
    GraphemeClusters,
    /// One piece per code unit. Visual degradation only; output is still a
    /// faithful partition of the input.
    CodeUnits,
}

/// Split `text` into animation units with the preferred strategy.
pub fn split_graphemes(text: &str) -> Vec<String> {
    split_with(SplitStrategy::GraphemeClusters, text)
}

/// Split `text` with an explicit strategy. Concatenating the returned
/// pieces reproduces `text` exactly, for either strategy. Never panics.
pub fn split_with(strategy: SplitStrategy, text: &str) -> Vec<String> {
    match strategy {
        SplitStrategy::GraphemeClusters => text.graphemes(true).map(str::to_owned).collect(),
        SplitStrategy::CodeUnits => text.chars().map(|ch| ch.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "GANESH",
        "गणेश",
        "सिंह",
        "अपनी बात हम तक पहुँचाएँ",
        "naïve café",
    ];

    #[test]
    fn concatenation_reproduces_input_on_both_paths() {
        for sample in SAMPLES {
            for strategy in [SplitStrategy::GraphemeClusters, SplitStrategy::CodeUnits] {
                let joined: String = split_with(strategy, sample).concat();
                assert_eq!(&joined, sample, "strategy {strategy:?}");
            }
        }
    }

    #[test]
    fn devanagari_matras_stay_attached() {
        // णे is ण + vowel sign े; splitting them apart would render a
        // dangling matra in the animation.
        assert_eq!(split_graphemes("गणेश"), vec!["ग", "णे", "श"]);
    }

    #[test]
    fn cluster_path_merges_combining_marks_the_fallback_tears() {
        // सिंह is four scalar values but only two user-perceived letters.
        let clusters = split_graphemes("सिंह");
        let units = split_with(SplitStrategy::CodeUnits, "सिंह");
        assert_eq!(clusters.len(), 2);
        assert_eq!(units.len(), 4);
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(split_graphemes("").is_empty());
        assert!(split_with(SplitStrategy::CodeUnits, "").is_empty());
    }
}
