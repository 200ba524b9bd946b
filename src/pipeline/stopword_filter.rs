//! Stopword-ratio filtering of candidate words and phrases.
//!
//! Dutch function words dominate raw n-gram output. Rather than ban
//! stopwords outright, each phrase length gets its own ceiling so that
//! longer phrases may carry more of them. All-stopword phrases never
//! survive regardless of length, and neither do phrases the fragment
//! rules recognize as incomplete conversational scraps.

use crate::defaults;
use crate::pipeline::types::{word_count, Candidate};
use crate::stopwords::Stopwords;
use std::collections::HashSet;

/// Literal scraps of half sentences the recognizer likes to promote to
/// phrases. Matched by substring against the lowercased phrase.
const INCOMPLETE_PATTERNS: &[&str] = &[
    "moet zorgen voor een",
    "het ook een beetje",
    "ik zeggen het glas",
    "er zijn bijna geen",
    "zou ik zeggen het",
    "maar ik heb het",
    "ik heb het ook",
    "van ga ik wel",
    "ik zeg nooit",
    "voor een",
    "een beetje",
    "zeggen het",
    "bijna geen",
    "heb het",
    "ga ik wel",
    "het glas",
    "het ook",
    "ik wel",
];

/// A phrase opening with one of these and closing with one of the end
/// words is a fragment, not a thought.
const INCOMPLETE_START_WORDS: &[&str] = &["moet", "het", "ik", "er", "zou", "maar", "van", "zeg"];
const INCOMPLETE_END_WORDS: &[&str] =
    &["een", "beetje", "glas", "geen", "het", "ook", "wel", "nooit"];

/// Conversational stock phrases that carry no topic of their own.
const GENERIC_PHRASES: &[&str] = &[
    "ik zeg", "ik heb", "het is", "dat is", "er zijn", "er is", "ik ben", "ik ga", "ik doe",
    "ik wil", "ik kan", "ik moet",
];

/// Recognizes incomplete sentence fragments and generic filler phrases.
///
/// Like the stopword sets, the pattern lists are configuration: the
/// defaults carry the Dutch lists, tests supply their own.
#[derive(Debug, Clone)]
pub struct FragmentRules {
    patterns: Vec<String>,
    start_words: HashSet<String>,
    end_words: HashSet<String>,
    generic: HashSet<String>,
}

impl Default for FragmentRules {
    fn default() -> Self {
        Self::new(
            INCOMPLETE_PATTERNS.iter().copied(),
            INCOMPLETE_START_WORDS.iter().copied(),
            INCOMPLETE_END_WORDS.iter().copied(),
            GENERIC_PHRASES.iter().copied(),
        )
    }
}

impl FragmentRules {
    pub fn new<I, J, K, L>(patterns: I, start_words: J, end_words: K, generic: L) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<str>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        fn lowered<I>(items: I) -> Vec<String>
        where
            I: IntoIterator,
            I::Item: AsRef<str>,
        {
            items
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        }
        Self {
            patterns: lowered(patterns),
            start_words: lowered(start_words).into_iter().collect(),
            end_words: lowered(end_words).into_iter().collect(),
            generic: lowered(generic).into_iter().collect(),
        }
    }

    /// Whether a phrase reads as a complete thought rather than a
    /// fragment. Very short texts, texts containing an incomplete
    /// pattern, fragments bracketed by a start/end word pair, and the
    /// generic stock phrases all fail.
    pub fn is_complete_thought(&self, phrase: &str) -> bool {
        let lower = phrase.trim().to_lowercase();
        if lower.chars().count() < 5 {
            return false;
        }

        if self.patterns.iter().any(|p| lower.contains(p)) {
            return false;
        }

        let words: Vec<&str> = lower.split_whitespace().collect();
        if let [first, .., last] = words.as_slice()
            && self.start_words.contains(*first)
            && self.end_words.contains(*last)
        {
            return false;
        }

        !self.generic.contains(&lower)
    }
}

pub struct StopwordFilter<'a> {
    stopwords: &'a Stopwords,
    fragments: FragmentRules,
    two_word_cap: f64,
    balance_threshold: usize,
}

impl<'a> StopwordFilter<'a> {
    pub fn new(stopwords: &'a Stopwords) -> Self {
        Self::with_balance(stopwords, defaults::TWO_WORD_CAP, defaults::BALANCE_THRESHOLD)
    }

    pub fn with_balance(stopwords: &'a Stopwords, two_word_cap: f64, balance_threshold: usize) -> Self {
        Self {
            stopwords,
            fragments: FragmentRules::default(),
            two_word_cap,
            balance_threshold,
        }
    }

    pub fn with_fragment_rules(mut self, fragments: FragmentRules) -> Self {
        self.fragments = fragments;
        self
    }

    /// Filter candidates, then rebalance the phrase mix.
    ///
    /// Surviving words keep their input order and come first. When more
    /// than `balance_threshold` phrases survive, 2-word phrases are
    /// capped at `two_word_cap` of the surviving phrase total (later
    /// entries dropped first) and the phrase list is reordered longest
    /// class first. Phrases of 3+ words are never dropped here.
    pub fn filter(&self, candidates: &[Candidate]) -> Vec<Candidate> {
        let kept: Vec<Candidate> = candidates
            .iter()
            .filter(|c| self.keeps(&c.text))
            .cloned()
            .collect();

        let (words, phrases): (Vec<Candidate>, Vec<Candidate>) =
            kept.into_iter().partition(|c| !c.is_phrase());

        let mut out = words;
        out.extend(self.balance(phrases));
        out
    }

    /// Whether a single candidate text survives the stopword and
    /// fragment rules.
    pub fn keeps(&self, text: &str) -> bool {
        let words: Vec<&str> = text.split_whitespace().collect();
        match words.len() {
            0 => false,
            1 => self.keeps_word(words[0]),
            _ => self.keeps_phrase(text, &words),
        }
    }

    fn keeps_word(&self, word: &str) -> bool {
        !self.stopwords.contains(word) && word.chars().count() >= 3
    }

    fn keeps_phrase(&self, text: &str, words: &[&str]) -> bool {
        let total = words.len();
        let stop_count = words.iter().filter(|w| self.stopwords.contains(w)).count();

        if stop_count == total {
            return false;
        }

        let max_allowed = match total {
            2 => 1,
            3 => 2,
            4 => 3,
            5 => 4,
            _ => 5,
        };
        if stop_count > max_allowed {
            return false;
        }

        // A 2-word phrase whose only substance is a 1-2 char word says
        // nothing.
        if total == 2 && stop_count == 1 {
            let non_stop = words
                .iter()
                .find(|w| !self.stopwords.contains(w))
                .copied()
                .unwrap_or("");
            if non_stop.chars().count() < 3 {
                return false;
            }
        }

        self.fragments.is_complete_thought(text)
    }

    fn balance(&self, phrases: Vec<Candidate>) -> Vec<Candidate> {
        if phrases.len() <= self.balance_threshold {
            return phrases;
        }

        let total = phrases.len();
        let mut long = Vec::new();
        let mut medium = Vec::new();
        let mut two_word = Vec::new();
        for phrase in phrases {
            match word_count(&phrase.text) {
                2 => two_word.push(phrase),
                3 => medium.push(phrase),
                _ => long.push(phrase),
            }
        }

        let max_two_word = (total as f64 * self.two_word_cap) as usize;
        two_word.truncate(max_two_word);

        long.extend(medium);
        long.extend(two_word);
        long
    }
}
