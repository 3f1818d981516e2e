//! Lexicon-based compound polarity scoring (VADER rules).

use sentiscope_core::SentimentLabel;
use serde::Serialize;

use crate::lexicon::Lexicon;

/// Multiplier applied to a valence preceded by a negation.
pub const N_SCALAR: f64 = -0.74;

/// Emphasis added for an all-caps word in mixed-case text.
pub const C_INCR: f64 = 0.733;

/// Normalization constant approximating the maximum expected raw sum.
const ALPHA: f64 = 15.0;

const EXCLAMATION_INCR: f64 = 0.292;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_MAX: f64 = 0.96;

/// Compound score in `[-1.0, 1.0]` and its derived label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    pub score: f64,
    pub label: SentimentLabel,
}

impl Sentiment {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            label: SentimentLabel::from_score(score),
        }
    }
}

/// Stateless scorer over a read-only [`Lexicon`].
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Lexicon,
}

impl SentimentScorer {
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score text and label it.
    #[must_use]
    pub fn score(&self, text: &str) -> Sentiment {
        Sentiment::from_score(self.compound(text))
    }

    /// Compound polarity of `text`, rounded to four decimals.
    ///
    /// Returns `0.0` for empty text or text with no lexicon words.
    #[must_use]
    pub fn compound(&self, text: &str) -> f64 {
        let tokens: Vec<&str> = text.split_whitespace().map(strip_punct_if_word).collect();
        if tokens.is_empty() {
            return 0.0;
        }
        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = has_cap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let word = lower[i].as_str();
            let kind_of = word == "kind" && lower.get(i + 1).is_some_and(|next| next == "of");
            if kind_of || self.lexicon.booster(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.token_valence(&tokens, &lower, i, cap_diff));
        }

        apply_but_weighting(&lower, &mut sentiments);

        let mut sum: f64 = sentiments.iter().sum();
        let emphasis = punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        round4(normalize(sum))
    }

    fn token_valence(&self, tokens: &[&str], lower: &[String], i: usize, cap_diff: bool) -> f64 {
        let word = lower[i].as_str();
        let Some(base) = self.lexicon.valence(word) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before another sentiment word acts as negation only.
        if word == "no" && lower.get(i + 1).is_some_and(|next| self.lexicon.contains(next)) {
            valence = 0.0;
        }
        let back = |n: usize| lower[i - n].as_str();
        if (i > 0 && back(1) == "no")
            || (i > 1 && back(2) == "no")
            || (i > 2 && back(3) == "no" && matches!(back(1), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if cap_diff && is_all_caps(tokens[i]) {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let distance = start_i + 1;
            if self.lexicon.contains(back(distance)) {
                continue;
            }
            let mut scalar =
                self.booster_scalar(tokens[i - distance], back(distance), valence, cap_diff);
            match start_i {
                1 => scalar *= 0.95,
                2 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            valence = self.negation_check(valence, lower, start_i, i);
            if start_i == 2 {
                valence = self.idioms_check(valence, lower, i);
            }
        }

        self.least_check(valence, lower, i)
    }

    fn booster_scalar(&self, token: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(boost) = self.lexicon.booster(lower) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -boost } else { boost };
        if cap_diff && is_all_caps(token) {
            if valence > 0.0 {
                scalar += C_INCR;
            } else {
                scalar -= C_INCR;
            }
        }
        scalar
    }

    fn negation_check(&self, valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
        let back = |n: usize| lower[i - n].as_str();
        let so_or_this = |w: &str| matches!(w, "so" | "this");
        match start_i {
            0 => {
                if self.lexicon.is_negation(back(1)) {
                    valence * N_SCALAR
                } else {
                    valence
                }
            }
            1 => {
                if back(2) == "never" && so_or_this(back(1)) {
                    valence * 1.25
                } else if back(2) == "without" && back(1) == "doubt" {
                    valence
                } else if self.lexicon.is_negation(back(2)) {
                    valence * N_SCALAR
                } else {
                    valence
                }
            }
            _ => {
                if back(3) == "never" && (so_or_this(back(2)) || so_or_this(back(1))) {
                    valence * 1.25
                } else if back(3) == "without" && (back(2) == "doubt" || back(1) == "doubt") {
                    valence
                } else if self.lexicon.is_negation(back(3)) {
                    valence * N_SCALAR
                } else {
                    valence
                }
            }
        }
    }

    /// Phrases around token `i` that override its valence ("yeah right",
    /// "broken heart"), then phrase boosters ("kind of") among the three
    /// preceding tokens. Needs `i >= 3`.
    fn idioms_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        let phrase = |range: std::ops::RangeInclusive<usize>| lower[range].join(" ");
        let one_zero = phrase(i - 1..=i);
        let two_one_zero = phrase(i - 2..=i);
        let two_one = phrase(i - 2..=i - 1);
        let three_two_one = phrase(i - 3..=i - 1);
        let three_two = phrase(i - 3..=i - 2);

        let mut valence = [&one_zero, &two_one_zero, &two_one, &three_two_one, &three_two]
            .into_iter()
            .find_map(|p| self.lexicon.idiom(p))
            .unwrap_or(valence);

        if i + 1 < lower.len() {
            if let Some(v) = self.lexicon.idiom(&phrase(i..=i + 1)) {
                valence = v;
            }
        }
        if i + 2 < lower.len() {
            if let Some(v) = self.lexicon.idiom(&phrase(i..=i + 2)) {
                valence = v;
            }
        }

        for ngram in [&three_two_one, &three_two, &two_one] {
            if let Some(boost) = self.lexicon.booster(ngram) {
                valence += boost;
            }
        }
        valence
    }

    /// "least good" negates; "at least good" and "very least good" do not.
    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i == 0 || lower[i - 1] != "least" || self.lexicon.contains("least") {
            return valence;
        }
        if i == 1 || !matches!(lower[i - 2].as_str(), "at" | "very") {
            valence * N_SCALAR
        } else {
            valence
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

/// Contributions before the first "but" are halved, those after it weighted 1.5x.
fn apply_but_weighting(lower: &[String], sentiments: &mut [f64]) {
    let Some(but_idx) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (idx, s) in sentiments.iter_mut().enumerate() {
        match idx.cmp(&but_idx) {
            std::cmp::Ordering::Less => *s *= 0.5,
            std::cmp::Ordering::Greater => *s *= 1.5,
            std::cmp::Ordering::Equal => {}
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_MAX,
    };
    exclamations as f64 * EXCLAMATION_INCR + question_amp
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Strip surrounding punctuation unless that leaves two or fewer characters,
/// which keeps short emoticons like `:)` intact.
fn strip_punct_if_word(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are fully upper-case.
fn has_cap_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}
