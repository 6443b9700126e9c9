//! Corpus-dependent match threshold.

use crate::config::MatcherConfig;

/// Compute the match threshold for a corpus.
///
/// Starting from `base_threshold`, small corpora and corpora of verbose
/// questions get `small_corpus_penalty` subtracted; very verbose ones lose a
/// further `very_verbose_penalty`. The result is clamped to
/// `[min_threshold, 1]`.
pub fn adaptive_threshold(
    config: &MatcherConfig,
    valid_entries: usize,
    average_question_chars: f64,
) -> f64 {
    let mut threshold = config.base_threshold;

    if valid_entries < config.small_corpus_size
        || average_question_chars > config.verbose_question_chars
    {
        threshold -= config.small_corpus_penalty;
    }
    if average_question_chars > config.very_verbose_question_chars {
        threshold -= config.very_verbose_penalty;
    }

    threshold.clamp(config.min_threshold, 1.0)
}
