use unicode_segmentation::UnicodeSegmentation;

/// Sentence segmentation capability
///
/// Returned sentences are trimmed and non-empty; whitespace-only
/// fragments never reach the packer. No exact boundary correctness is
/// promised - the packer tolerates imperfect segmentation.
pub trait SentenceSplit: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}

/// Sentence boundaries per Unicode UAX #29
///
/// Handles the usual traps (abbreviations like "Dr.", decimal numbers,
/// ellipses) without a model download, unlike NLP-pipeline segmenters.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl SentenceSplit for UnicodeSegmenter {
    fn split(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let sentences = UnicodeSegmenter.split("Hello world. How are you? I am fine.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "Hello world.");
        assert_eq!(sentences[2], "I am fine.");
    }

    #[test]
    fn test_abbreviations_not_split() {
        let sentences = UnicodeSegmenter.split("Dr. Smith went to Washington D.C. on Tuesday.");
        // UAX #29 keeps "Dr." attached; "D.C." may or may not split, but
        // it must not break on every period
        assert!(sentences.len() <= 2, "too many splits: {:?}", sentences);
    }

    #[test]
    fn test_empty_text() {
        assert!(UnicodeSegmenter.split("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(UnicodeSegmenter.split("   \n\t  ").is_empty());
    }

    #[test]
    fn test_sentences_are_trimmed() {
        let sentences = UnicodeSegmenter.split("First sentence.   Second sentence.");
        for sentence in &sentences {
            assert_eq!(sentence.trim(), sentence);
        }
    }
}
