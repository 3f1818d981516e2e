//! Static sentiment lexicon plus the booster and negation word lists.
//!
//! Valences use the VADER scale (roughly `[-4.0, 4.0]`, mean of human
//! ratings). The built-in table is a curated subset of common social-media
//! vocabulary; [`Lexicon::from_vader_file`] loads the full published
//! `vader_lexicon.txt` instead.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SentimentError;

/// Booster increment for intensifiers ("extremely good").
pub const B_INCR: f64 = 0.293;

/// Booster decrement for dampeners ("slightly good").
pub const B_DECR: f64 = -0.293;

/// Built-in token valences.
const VALENCES: &[(&str, f64)] = &[
    // Positive
    ("accept", 1.6),
    ("accepted", 1.1),
    ("admire", 2.1),
    ("adorable", 2.2),
    ("agree", 1.5),
    ("amazing", 2.8),
    ("amazed", 2.2),
    ("amused", 1.6),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("approve", 1.7),
    ("approved", 1.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("beloved", 2.3),
    ("best", 3.2),
    ("better", 1.9),
    ("bless", 1.8),
    ("blessed", 2.9),
    ("bliss", 2.7),
    ("bright", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("celebrate", 2.7),
    ("charming", 2.8),
    ("cheer", 2.3),
    ("cheerful", 2.5),
    ("clean", 1.7),
    ("clever", 2.0),
    ("comfort", 1.5),
    ("comfortable", 2.3),
    ("confident", 2.2),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("cool", 1.3),
    ("courage", 2.2),
    ("creative", 1.9),
    ("cute", 2.0),
    ("delight", 2.9),
    ("delighted", 2.3),
    ("delicious", 2.7),
    ("easy", 1.9),
    ("effective", 2.1),
    ("encourage", 2.3),
    ("energetic", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("enthusiastic", 1.9),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fair", 1.3),
    ("faith", 1.8),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("free", 2.3),
    ("fresh", 1.3),
    ("friend", 2.2),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("funny", 1.9),
    ("generous", 2.3),
    ("gift", 1.9),
    ("glad", 2.0),
    ("glorious", 3.2),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("greatest", 3.2),
    ("happiness", 2.6),
    ("happy", 2.7),
    ("healthy", 1.7),
    ("help", 1.7),
    ("helpful", 1.8),
    ("hero", 2.6),
    ("honest", 2.3),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("hug", 2.1),
    ("important", 0.8),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("improved", 2.1),
    ("inspiring", 2.2),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("kind", 2.4),
    ("laugh", 2.6),
    ("like", 2.0),
    ("liked", 1.8),
    ("lol", 2.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("luck", 2.0),
    ("lucky", 1.8),
    ("magnificent", 2.9),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("optimistic", 1.3),
    ("outstanding", 3.0),
    ("paradise", 3.2),
    ("peace", 2.5),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("popular", 1.8),
    ("positive", 2.6),
    ("pretty", 2.2),
    ("pride", 1.4),
    ("progress", 1.8),
    ("promising", 1.7),
    ("proud", 2.1),
    ("recommend", 1.5),
    ("relaxed", 2.2),
    ("relief", 2.1),
    ("respect", 2.1),
    ("rich", 2.6),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("smart", 1.7),
    ("smile", 1.5),
    ("smiling", 2.3),
    ("strong", 2.3),
    ("stunning", 1.6),
    ("success", 2.7),
    ("successful", 2.8),
    ("sunshine", 2.2),
    ("super", 2.9),
    ("support", 1.7),
    ("supportive", 1.2),
    ("sweet", 2.0),
    ("thank", 1.5),
    ("thankful", 2.7),
    ("thanks", 1.9),
    ("thrilled", 2.1),
    ("top", 0.8),
    ("true", 1.8),
    ("trust", 2.3),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("victory", 2.8),
    ("warm", 0.9),
    ("welcome", 2.0),
    ("win", 2.8),
    ("winner", 2.8),
    ("winning", 2.4),
    ("wise", 1.8),
    ("won", 2.7),
    ("wonderful", 2.7),
    ("worth", 0.9),
    ("wow", 2.8),
    ("yay", 2.4),
    ("yes", 1.7),
    // Negative
    ("abandon", -1.9),
    ("abandoned", -2.0),
    ("abuse", -3.2),
    ("accident", -2.1),
    ("afraid", -2.2),
    ("aggressive", -0.6),
    ("alarm", -1.4),
    ("alone", -1.0),
    ("anger", -2.7),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("anxious", -1.0),
    ("ashamed", -2.1),
    ("attack", -2.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("ban", -2.6),
    ("banned", -2.0),
    ("bitter", -1.8),
    ("blame", -1.4),
    ("bored", -1.1),
    ("boring", -1.3),
    ("broke", -1.8),
    ("broken", -2.1),
    ("bug", -1.4),
    ("careless", -1.5),
    ("chaos", -2.7),
    ("cheat", -2.0),
    ("complain", -1.5),
    ("confused", -1.3),
    ("crap", -1.6),
    ("crash", -1.7),
    ("crazy", -1.4),
    ("crime", -2.5),
    ("crisis", -3.1),
    ("cruel", -2.8),
    ("cry", -2.1),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dead", -3.3),
    ("death", -2.9),
    ("debt", -1.5),
    ("delay", -1.3),
    ("depressed", -2.3),
    ("depressing", -1.6),
    ("destroy", -2.5),
    ("destroyed", -3.4),
    ("difficult", -1.5),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("doubt", -1.5),
    ("dull", -1.7),
    ("dumb", -2.3),
    ("embarrassing", -1.6),
    ("enemy", -2.5),
    ("error", -1.7),
    ("evil", -3.4),
    ("expensive", -0.3),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fake", -2.1),
    ("fear", -2.2),
    ("fight", -1.6),
    ("fraud", -2.8),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("furious", -2.7),
    ("gloomy", -0.6),
    ("greedy", -1.3),
    ("grief", -2.2),
    ("guilty", -1.8),
    ("hard", -0.4),
    ("harm", -2.5),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hell", -3.6),
    ("helpless", -2.1),
    ("horrible", -2.5),
    ("hostile", -2.2),
    ("hurt", -2.4),
    ("idiot", -2.3),
    ("ill", -1.8),
    ("kill", -3.7),
    ("killed", -3.5),
    ("lame", -1.8),
    ("liar", -2.8),
    ("lonely", -1.5),
    ("lose", -1.6),
    ("loser", -2.4),
    ("losing", -1.6),
    ("loss", -1.3),
    ("lost", -1.3),
    ("mad", -2.2),
    ("mess", -1.5),
    ("miserable", -2.2),
    ("miss", -0.6),
    ("mistake", -1.4),
    ("nasty", -2.6),
    ("negative", -2.7),
    ("nervous", -1.2),
    ("no", -1.2),
    ("pain", -2.3),
    ("painful", -1.9),
    ("panic", -2.3),
    ("pathetic", -2.7),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("protest", -1.0),
    ("rage", -2.6),
    ("regret", -1.9),
    ("reject", -1.7),
    ("rejected", -2.3),
    ("risk", -1.1),
    ("rude", -2.0),
    ("ruin", -2.8),
    ("ruined", -2.1),
    ("sad", -2.1),
    ("scam", -2.7),
    ("scandal", -1.9),
    ("scared", -1.9),
    ("scary", -2.2),
    ("shame", -2.1),
    ("shit", -2.6),
    ("shock", -1.6),
    ("shocked", -1.3),
    ("sick", -2.3),
    ("slow", -1.1),
    ("sorry", -0.3),
    ("stress", -1.8),
    ("stressed", -1.4),
    ("struggle", -1.3),
    ("stupid", -2.4),
    ("suck", -1.9),
    ("sucks", -1.5),
    ("suffer", -2.5),
    ("terrible", -2.1),
    ("terrified", -3.0),
    ("threat", -2.4),
    ("tired", -1.9),
    ("tragedy", -3.4),
    ("tragic", -3.3),
    ("trouble", -1.7),
    ("ugly", -2.3),
    ("unfair", -2.1),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("useless", -1.8),
    ("victim", -2.2),
    ("violence", -3.1),
    ("war", -2.9),
    ("waste", -1.8),
    ("weak", -1.9),
    ("weird", -0.7),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
    ("wrong", -2.1),
];

/// Intensifiers and dampeners, keyed by lowercase word or phrase.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerable", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("effing", B_INCR),
    ("enormous", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptional", B_INCR),
    ("exceptionally", B_INCR),
    ("extreme", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("flipping", B_INCR),
    ("flippin", B_INCR),
    ("frackin", B_INCR),
    ("fracking", B_INCR),
    ("fricking", B_INCR),
    ("frickin", B_INCR),
    ("frigging", B_INCR),
    ("friggin", B_INCR),
    ("fully", B_INCR),
    ("fuckin", B_INCR),
    ("fucking", B_INCR),
    ("fuggin", B_INCR),
    ("fugging", B_INCR),
    ("greatly", B_INCR),
    ("hella", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredible", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("major", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("total", B_INCR),
    ("totally", B_INCR),
    ("tremendous", B_INCR),
    ("tremendously", B_INCR),
    ("uber", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utter", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("just enough", B_DECR),
    ("kind of", B_DECR),
    ("kinda", B_DECR),
    ("kindof", B_DECR),
    ("kind-of", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginal", B_DECR),
    ("marginally", B_DECR),
    ("occasional", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarce", B_DECR),
    ("scarcely", B_DECR),
    ("slight", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sort of", B_DECR),
    ("sorta", B_DECR),
    ("sortof", B_DECR),
    ("sort-of", B_DECR),
];

/// Multi-word phrases whose valence replaces that of the sentiment word
/// inside them.
const IDIOMS: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("badass", 1.5),
    ("bus stop", 0.0),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("to die for", 3.0),
    ("beating heart", 3.1),
    ("broken heart", -2.9),
];

/// Words that flip the polarity of a following sentiment word.
///
/// Apostrophe-free spellings are included because normalized text has
/// punctuation removed.
const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't",
    "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt",
    "havent", "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't",
    "isn't", "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not",
    "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't",
    "shan't", "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't",
    "wouldn't", "rarely", "seldom", "despite",
];

/// Immutable word-valence lookup shared by every scoring call.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    idioms: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// The embedded lexicon.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(VALENCES.iter().map(|&(w, v)| (w, v)))
    }

    /// Build a lexicon from `(word, valence)` pairs, keeping the standard
    /// booster, idiom, and negation lists. Words are lowercased.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self {
            valences: entries
                .into_iter()
                .map(|(w, v)| (w.as_ref().to_lowercase(), v))
                .collect(),
            boosters: BOOSTERS
                .iter()
                .map(|&(w, v)| (w.to_string(), v))
                .collect(),
            idioms: IDIOMS.iter().map(|&(p, v)| (p.to_string(), v)).collect(),
            negations: NEGATIONS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Parse the published VADER lexicon format.
    ///
    /// Each non-blank line is `token<TAB>mean<TAB>...`; only the first two
    /// columns are used.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Lexicon`] for a line without a numeric
    /// second column, or [`SentimentError::Io`] if reading fails.
    pub fn from_vader_reader<R: BufRead>(reader: R) -> Result<Self, SentimentError> {
        let mut entries = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let mut cols = line.split('\t');
            let token = cols.next().unwrap_or_default().trim();
            let mean = cols.next().ok_or_else(|| SentimentError::Lexicon {
                line: line_no,
                reason: "missing valence column".to_string(),
            })?;
            let mean: f64 = mean.trim().parse().map_err(|e| SentimentError::Lexicon {
                line: line_no,
                reason: format!("invalid valence {mean:?}: {e}"),
            })?;
            if token.is_empty() {
                return Err(SentimentError::Lexicon {
                    line: line_no,
                    reason: "empty token".to_string(),
                });
            }
            entries.push((token.to_string(), mean));
        }
        tracing::debug!(entries = entries.len(), "parsed VADER lexicon");
        Ok(Self::from_entries(entries))
    }

    /// Load a VADER-format lexicon file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::MissingInput`] if the file does not exist,
    /// otherwise the errors of [`Lexicon::from_vader_reader`].
    pub fn from_vader_file(path: &Path) -> Result<Self, SentimentError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SentimentError::MissingInput(path.to_path_buf()),
            _ => SentimentError::Io(e),
        })?;
        Self::from_vader_reader(BufReader::new(file))
    }

    /// Valence of a lowercase token, if it is a lexicon word.
    #[must_use]
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.valences.contains_key(token)
    }

    /// Booster scalar of a lowercase token, if it is an intensifier or dampener.
    ///
    /// Phrase entries such as `kind of` match a space-joined n-gram.
    #[must_use]
    pub fn booster(&self, token: &str) -> Option<f64> {
        self.boosters.get(token).copied()
    }

    /// Fixed valence of a space-joined lowercase phrase like `yeah right`.
    #[must_use]
    pub fn idiom(&self, phrase: &str) -> Option<f64> {
        self.idioms.get(phrase).copied()
    }

    #[must_use]
    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token) || token.contains("n't")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn builtin_has_no_duplicate_words() {
        assert_eq!(Lexicon::builtin().len(), VALENCES.len());
    }

    #[test]
    fn builtin_valences_stay_on_vader_scale() {
        for &(word, valence) in VALENCES {
            assert!(
                (-4.0..=4.0).contains(&valence) && valence != 0.0,
                "{word} has out-of-range valence {valence}"
            );
            assert_eq!(word, word.to_lowercase(), "{word} must be lowercase");
        }
    }

    #[test]
    fn boosters_are_not_lexicon_words() {
        let lex = Lexicon::builtin();
        for &(word, _) in BOOSTERS {
            assert!(!lex.contains(word), "{word} is both booster and lexicon word");
        }
    }

    #[test]
    fn lookups_cover_examples() {
        let lex = Lexicon::builtin();
        assert!(lex.valence("love").unwrap() > 0.0);
        assert!(lex.valence("terrible").unwrap() < 0.0);
        assert_eq!(lex.valence("table"), None);
        assert_eq!(lex.booster("extremely"), Some(B_INCR));
        assert_eq!(lex.booster("slightly"), Some(B_DECR));
    }

    #[test]
    fn incredible_is_a_booster_not_a_sentiment_word() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.booster("incredible"), Some(B_INCR));
        assert_eq!(lex.valence("incredible"), None);
        assert_eq!(lex.booster("fuggin"), Some(B_INCR));
    }

    #[test]
    fn phrase_tables_are_keyed_by_joined_words() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.booster("kind of"), Some(B_DECR));
        assert_eq!(lex.idiom("yeah right"), Some(-2.0));
        assert_eq!(lex.idiom("to die for"), Some(3.0));
        assert_eq!(lex.idiom("yeah"), None);
    }

    #[test]
    fn negation_matches_list_and_contractions() {
        let lex = Lexicon::builtin();
        assert!(lex.is_negation("not"));
        assert!(lex.is_negation("dont"));
        assert!(lex.is_negation("shouldn't"));
        assert!(lex.is_negation("wouldn't've"));
        assert!(!lex.is_negation("good"));
    }

    #[test]
    fn parses_vader_format() {
        let data = "$:\t-1.5\t0.80623\t[-1, -1, -1, -1, -3, -1, -3, -1, -2, -1]\n\
                    \n\
                    Happy\t2.7\t0.9\t[3, 3, 2]\n";
        let lex = Lexicon::from_vader_reader(Cursor::new(data)).unwrap();
        assert_eq!(lex.len(), 2);
        assert_eq!(lex.valence("$:"), Some(-1.5));
        assert_eq!(lex.valence("happy"), Some(2.7));
        // Boosters and negations are still available.
        assert!(lex.is_negation("never"));
        assert_eq!(lex.booster("very"), Some(B_INCR));
    }

    #[test]
    fn rejects_line_without_valence() {
        let data = "good\t1.9\nbroken-line\n";
        let err = Lexicon::from_vader_reader(Cursor::new(data)).unwrap_err();
        assert!(
            matches!(err, SentimentError::Lexicon { line: 2, .. }),
            "expected Lexicon error on line 2, got: {err:?}"
        );
    }

    #[test]
    fn rejects_non_numeric_valence() {
        let data = "good\tvery\n";
        let err = Lexicon::from_vader_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, SentimentError::Lexicon { line: 1, .. }));
    }

    #[test]
    fn missing_lexicon_file_is_missing_input() {
        let err = Lexicon::from_vader_file(Path::new("/nonexistent/vader_lexicon.txt"))
            .unwrap_err();
        assert!(matches!(err, SentimentError::MissingInput(_)));
    }
}
