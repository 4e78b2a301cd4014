use crate::config::WallConfig;
use crate::types::Article;
use std::time::Duration;
use tracing::debug;

/// Maps article text to a display duration from estimated reading time.
///
/// The richest variant first normalizes the content (punctuation, digits and
/// whitespace read near-instantly; Latin runs read as whole words), then
/// scales the remaining character count against a standard length/duration
/// pair and clamps both sides. The raw-length variant skips normalization.
#[derive(Debug, Clone)]
pub struct DurationEstimator {
    min_duration: Duration,
    max_duration: Duration,
    standard_length: usize,
    standard_duration: Duration,
    normalize: bool,
}

impl DurationEstimator {
    pub fn from_config(config: &WallConfig) -> Self {
        Self {
            min_duration: config.article_min_duration,
            max_duration: config.article_max_duration,
            standard_length: config.article_standard_length,
            standard_duration: config.article_standard_duration,
            normalize: config.normalize_content,
        }
    }

    /// Display duration for an article, clamped to `[min, max]`.
    pub fn duration_for(&self, article: &Article) -> Duration {
        let length = if self.normalize {
            normalized_length(&article.content)
        } else {
            article.content.chars().count()
        };

        let raw_ms = (length as f64 / self.standard_length as f64
            * self.standard_duration.as_millis() as f64)
            .floor() as u64;

        let duration = Duration::from_millis(raw_ms)
            .clamp(self.min_duration, self.max_duration);
        debug!(
            "Estimated {}ms for '{}' (effective length {})",
            duration.as_millis(),
            article.title,
            length
        );
        duration
    }
}

/// Reading-relevant character count of the content.
///
/// Characters read near-instantly (digits, whitespace, common ASCII and CJK
/// punctuation) do not count at all. Runs of Latin letters and URL-ish symbols
/// count one "word" per 7 characters, rounded up, since a human reads such
/// runs whole rather than character by character.
pub fn normalized_length(content: &str) -> usize {
    let mut length = 0usize;
    let mut run = 0usize;

    for c in content.chars() {
        // Stripped characters also do not interrupt a word run.
        if is_fast_read(c) {
            continue;
        }
        if is_word_char(c) {
            run += 1;
            continue;
        }
        length += flush_run(&mut run) + 1;
    }

    length + flush_run(&mut run)
}

fn flush_run(run: &mut usize) -> usize {
    let words = run.div_ceil(7);
    *run = 0;
    words
}

fn is_fast_read(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(
            c,
            ',' | '.' | ':' | ';' | '<' | '>' | '(' | ')' | '[' | ']' | '{' | '}' | '/' | '\\'
        )
        || matches!(
            c,
            '，' | '、' | '．' | '。' | '：' | '；'
                | '“' | '”' | '‘' | '’'
                | '（' | '）' | '【' | '】' | '〔' | '〕' | '《' | '》'
        )
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '@' | '+' | '%' | '-')
}
