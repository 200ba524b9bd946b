//! Language-specific stopword sets.
//!
//! Stopwords are read-only configuration: they are built once and passed
//! into the stages that need them, never consulted through globals. Two
//! built-in sets ship with the crate: the full Dutch list used for normal
//! filtering, and a much smaller "basic" list the pipeline falls back to
//! when the full list filters away too much.

use std::collections::HashSet;

/// A read-only set of filler words for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Build a set from explicit words. Intended for tests and callers
    /// supplying their own language data.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The full Dutch stopword list.
    pub fn dutch() -> Self {
        Self::from_words(DUTCH_STOPWORDS.iter().copied())
    }

    /// The reduced Dutch list used as an exhaustion fallback: when the full
    /// list rejects too many phrases, re-filtering with this set preserves
    /// more content while still dropping pure filler.
    pub fn basic() -> Self {
        Self::from_words(BASIC_STOPWORDS.iter().copied())
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Dutch filler words, pronouns, auxiliaries, numerals and conversational
/// tics common in radio speech.
const DUTCH_STOPWORDS: &[&str] = &[
    "de", "het", "een", "en", "van", "in", "te", "dat", "die", "is", "op", "met", "als", "voor",
    "aan", "er", "door", "om", "tot", "ook", "maar", "uit", "bij", "over", "nog", "naar", "dan",
    "of", "je", "ik", "ze", "zij", "hij", "wij", "jij", "u", "hun", "ons", "mijn", "jouw", "zijn",
    "haar", "dit", "deze", "niet", "hebben", "daar", "heeft", "eigenlijk", "heel", "gaat", "gaan",
    "toch", "want", "elkaar", "even", "waar", "natuurlijk", "veel", "meer", "moet", "kunnen",
    "wordt", "gewoon", "worden", "echt", "komen", "komt", "hier", "niks", "gevonden", "twee",
    "drie", "vier", "vijf", "zes", "zeven", "acht", "negen", "tien", "goed", "doen", "moeten",
    "maken", "soort", "onze", "omdat", "kwam", "iemand", "blijven", "vaak", "jaar", "denk",
    "weer", "staat", "waren", "geen", "vandaag", "bijvoorbeeld", "zeggen", "grote", "tijd",
    "muziek", "iets", "eigen", "vooral", "toen", "eerste", "tweede", "derde", "vierde", "vijfde",
    "zesde", "zevende", "achtste", "negende", "tiende", "vind", "laten", "altijd", "andere",
    "alle", "woord", "gebruiken", "moment", "zelf", "zien", "jullie", "terug", "kijken", "hebt",
    "weet", "hele", "dingen", "helemaal", "verschillende", "inderdaad", "beter", "misschien",
    "manier", "dacht", "uiteindelijk", "beetje", "ging", "gemaakt", "vanuit", "werd", "vond",
    "best", "alleen", "groep", "honderd", "iedereen", "weken", "groot", "allemaal", "gedaan",
    "lang", "zeker", "meter", "dagen", "gegeven", "leuk", "keer", "zaten", "mooi", "deden",
    "willen", "begint", "ervoor", "minder", "weten", "onder", "steeds", "stellen", "anders",
    "alles", "hadden", "zegt", "juist", "oude", "bent", "vindt", "volgend", "laatste", "minuten",
    "vanaf", "tegen", "samen", "laag", "zoals", "tevoren", "eerder", "maakt", "vorig", "nieuwe",
    "ligt", "jonge", "staan", "zich", "ziet", "kijk", "week", "eens", "klein", "volgende",
    "lijkt", "tussen", "stuk", "geworden", "dus", "zo", "snel", "elke", "we", "it", "have",
    "had", "you", "ja", "ben", "kan", "wel", "nou", "waarom", "denken", "leren", "paar", "soms",
    "wat", "was", "wil", "zeer", "zeg", "hem", "zie", "heb", "liever", "bijna", "hadden", "zou",
    "zouden", "ga", "kom", "doe", "maak", "vinden", "mij", "me", "jou", "uw", "welke", "welk",
    "wie", "wanneer", "hoe", "al", "hoor", "hè", "hé",
];

/// Minimal Dutch filler set: articles, common prepositions and pronouns only.
const BASIC_STOPWORDS: &[&str] = &[
    "de", "het", "een", "en", "van", "in", "te", "dat", "die", "is", "op", "met", "als", "voor",
    "aan", "er", "door", "om", "tot", "ook", "maar", "uit", "bij", "over", "nog", "naar", "dan",
    "of", "je", "ik", "ze", "zij", "hij", "wij", "jij", "u", "hun", "ons", "mijn", "jouw",
    "zijn", "haar", "dit", "dat", "deze", "die",
];
