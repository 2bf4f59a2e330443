use crate::structs::{Lexicon, PartOfSpeech, TokenNormalizer};
use crate::types::{Token, TokenRef};
use std::collections::HashSet;

/// Dictionary-based normalization to a valid base form.
///
/// Candidate base forms come from the lexicon's irregular inflections or from repeatedly
/// detaching inflectional suffixes; only candidates the lexicon knows for the requested part of
/// speech are accepted, and the shortest one wins. Words with no accepted candidate are returned
/// unchanged.
///
/// Without an explicit hint every token is treated as a noun. Verb inflections therefore often
/// pass through untouched (`studies` stays `studies` unless lemmatized as a verb).
pub struct Lemmatizer<'a> {
    lexicon: &'a Lexicon,
    default_pos: PartOfSpeech,
}

impl<'a> Lemmatizer<'a> {
    /// Creates a lemmatizer over a previously loaded lexicon, defaulting to nouns.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_default_pos(lexicon, PartOfSpeech::Noun)
    }

    /// Creates a lemmatizer that uses `default_pos` for tokens without a hint.
    pub fn with_default_pos(lexicon: &'a Lexicon, default_pos: PartOfSpeech) -> Self {
        Self {
            lexicon,
            default_pos,
        }
    }

    pub fn default_pos(&self) -> PartOfSpeech {
        self.default_pos
    }

    /// Lemmatizes a token using the default part of speech.
    pub fn lemmatize(&self, word: &TokenRef) -> Token {
        self.lemmatize_with_pos(word, self.default_pos)
    }

    /// Lemmatizes a token using an explicit part-of-speech hint.
    pub fn lemmatize_with_pos(&self, word: &TokenRef, pos: PartOfSpeech) -> Token {
        self.candidate_lemmas(word, pos)
            .into_iter()
            .reduce(|shortest, candidate| {
                if candidate.len() < shortest.len() {
                    candidate
                } else {
                    shortest
                }
            })
            .unwrap_or_else(|| word.to_string())
    }

    /// Collects every base form the lexicon accepts for `word`, in discovery order.
    ///
    /// # Returns
    /// * Known base forms; empty when the word cannot be reduced.
    pub fn candidate_lemmas(&self, word: &TokenRef, pos: PartOfSpeech) -> Vec<Token> {
        if let Some(exceptions) = self.lexicon.get_exceptions(word, pos) {
            let forms: Vec<Token> = std::iter::once(word.to_string())
                .chain(exceptions.iter().cloned())
                .collect();

            return self.filter_known_forms(&forms, pos);
        }

        let mut forms = Self::detach_suffixes(&[word.to_string()], pos);

        let mut first_pass = vec![word.to_string()];
        first_pass.extend(forms.iter().cloned());
        let known = self.filter_known_forms(&first_pass, pos);
        if !known.is_empty() {
            return known;
        }

        // Keep detaching until some form is known or no rule applies any more. Every rule
        // either shortens the form or (for `men` → `man`) cannot fire twice, so this ends.
        let mut visited: HashSet<Token> = first_pass.into_iter().collect();
        while !forms.is_empty() {
            forms = Self::detach_suffixes(&forms, pos)
                .into_iter()
                .filter(|form| visited.insert(form.clone()))
                .collect();

            let known = self.filter_known_forms(&forms, pos);
            if !known.is_empty() {
                return known;
            }
        }

        Vec::new()
    }

    fn detach_suffixes(forms: &[Token], pos: PartOfSpeech) -> Vec<Token> {
        forms
            .iter()
            .flat_map(|form| {
                pos.suffix_rules()
                    .iter()
                    .filter(move |(old, _)| form.ends_with(old))
                    .map(move |(old, new)| format!("{}{}", &form[..form.len() - old.len()], new))
            })
            .collect()
    }

    fn filter_known_forms(&self, forms: &[Token], pos: PartOfSpeech) -> Vec<Token> {
        let mut seen: HashSet<&Token> = HashSet::new();

        forms
            .iter()
            .filter(|form| self.lexicon.is_base_form(form, pos))
            .filter(|form| seen.insert(*form))
            .cloned()
            .collect()
    }
}

impl TokenNormalizer for Lemmatizer<'_> {
    fn normalize(&self, token: &TokenRef) -> Token {
        self.lemmatize(token)
    }
}
