use bag_of_words::constants::IRREGULAR_VERB_SENTENCE;
use bag_of_words::{
    Analyzer, CountMatrix, Error, Lemmatizer, Lexicon, NormalizationComparison, PartOfSpeech,
    PorterStemmer, TokenNormalizer, Tokenizer, Vocabulary,
};

fn load_lexicon() -> Lexicon {
    Lexicon::embedded().expect("Failed to load embedded lexicon")
}

#[cfg(test)]
mod porter_stemmer_tests {
    use super::*;

    #[test]
    fn test_stem_truncates_to_root() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("studies"), "studi");
        assert_eq!(stemmer.stem("study"), "studi");
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("learning"), "learn");
    }

    #[test]
    fn test_stem_is_deterministic() {
        let stemmer = PorterStemmer::new();

        for word in ["historically", "fascinating", "concepts"] {
            assert_eq!(stemmer.stem(word), stemmer.normalize(word));
        }
    }

    #[test]
    fn test_stemmed_analyzer_merges_inflections() {
        let stemmer = PorterStemmer::new();
        let analyzer = Analyzer::new(Tokenizer::bag_of_words_parser())
            .with_normalizer(&stemmer);

        let documents = ["studies", "study"];
        let vocabulary = Vocabulary::from_documents(&documents, &analyzer);
        let count_matrix = CountMatrix::from_documents(&documents, &analyzer, &vocabulary);

        assert_eq!(vocabulary.feature_names(), ["studi"]);
        assert_eq!(count_matrix.rows(), [vec![1], vec![1]]);
    }
}

#[cfg(test)]
mod lemmatizer_tests {
    use super::*;

    #[test]
    fn test_noun_default_leaves_verb_forms_unchanged() {
        let lexicon = load_lexicon();
        let lemmatizer = Lemmatizer::new(&lexicon);

        assert_eq!(lemmatizer.default_pos(), PartOfSpeech::Noun);
        assert_eq!(lemmatizer.lemmatize("studies"), "studies");
        assert_eq!(lemmatizer.lemmatize("went"), "went");
        assert_eq!(lemmatizer.lemmatize("historically"), "historically");
    }

    #[test]
    fn test_verb_hint() {
        let lexicon = load_lexicon();
        let lemmatizer = Lemmatizer::new(&lexicon);

        assert_eq!(
            lemmatizer.lemmatize_with_pos("studies", PartOfSpeech::Verb),
            "study"
        );
        assert_eq!(
            lemmatizer.lemmatize_with_pos("loved", PartOfSpeech::Verb),
            "love"
        );
        assert_eq!(
            lemmatizer.lemmatize_with_pos("learning", PartOfSpeech::Verb),
            "learn"
        );
    }

    #[test]
    fn test_irregular_verbs_use_exceptions() {
        let lexicon = load_lexicon();
        let lemmatizer = Lemmatizer::new(&lexicon);

        assert_eq!(
            lemmatizer.lemmatize_with_pos("went", PartOfSpeech::Verb),
            "go"
        );
        assert_eq!(
            lemmatizer.lemmatize_with_pos("running", PartOfSpeech::Verb),
            "run"
        );
        assert_eq!(
            lemmatizer.lemmatize_with_pos("was", PartOfSpeech::Verb),
            "be"
        );
    }

    #[test]
    fn test_noun_suffix_rules() {
        let lexicon = load_lexicon();
        let lemmatizer = Lemmatizer::new(&lexicon);

        assert_eq!(lemmatizer.lemmatize("messages"), "message");
        assert_eq!(lemmatizer.lemmatize("entries"), "entry");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("leaves"), "leaf");
        assert_eq!(lemmatizer.lemmatize("women"), "woman");
        assert_eq!(lemmatizer.lemmatize("lives"), "life");
        assert_eq!(lemmatizer.lemmatize("children"), "child");
    }

    #[test]
    fn test_base_forms_are_kept() {
        let lexicon = load_lexicon();
        let lemmatizer = Lemmatizer::new(&lexicon);

        assert_eq!(lemmatizer.lemmatize("learning"), "learning");
        assert_eq!(lemmatizer.lemmatize("machine"), "machine");
    }

    #[test]
    fn test_adjectives_and_adverbs() {
        let lexicon = load_lexicon();
        let lemmatizer = Lemmatizer::new(&lexicon);

        assert_eq!(
            lemmatizer.lemmatize_with_pos("better", PartOfSpeech::Adjective),
            "good"
        );
        assert_eq!(
            lemmatizer.lemmatize_with_pos("greatest", PartOfSpeech::Adjective),
            "great"
        );
        assert_eq!(
            lemmatizer.lemmatize_with_pos("better", PartOfSpeech::Adverb),
            "well"
        );
        assert_eq!(
            lemmatizer.lemmatize_with_pos("quickly", PartOfSpeech::Adverb),
            "quickly"
        );
    }

    #[test]
    fn test_unknown_words_are_unchanged() {
        let lexicon = load_lexicon();
        let lemmatizer = Lemmatizer::new(&lexicon);

        assert_eq!(lemmatizer.lemmatize("wkly"), "wkly");
        assert_eq!(
            lemmatizer.lemmatize_with_pos("jurongs", PartOfSpeech::Verb),
            "jurongs"
        );
        assert!(
            lemmatizer.candidate_lemmas("wkly", PartOfSpeech::Noun).is_empty()
        );
    }

    #[test]
    fn test_custom_default_pos() {
        let lexicon = load_lexicon();
        let lemmatizer = Lemmatizer::with_default_pos(&lexicon, PartOfSpeech::Verb);

        assert_eq!(lemmatizer.lemmatize("studies"), "study");
        assert_eq!(lemmatizer.normalize("went"), "go");
    }

    #[test]
    fn test_lemmatized_analyzer_merges_inflections() {
        let lexicon = load_lexicon();
        let lemmatizer = Lemmatizer::with_default_pos(&lexicon, PartOfSpeech::Verb);
        let analyzer = Analyzer::new(Tokenizer::bag_of_words_parser())
            .with_normalizer(&lemmatizer);

        let documents = ["Studies", "study"];
        let vocabulary = Vocabulary::from_documents(&documents, &analyzer);
        let count_matrix = CountMatrix::from_documents(&documents, &analyzer, &vocabulary);

        assert_eq!(vocabulary.feature_names(), ["study"]);
        assert_eq!(count_matrix.rows(), [vec![1], vec![1]]);
    }
}

#[cfg(test)]
mod lexicon_tests {
    use super::*;

    const BASE_FORMS: &str = "Lemma,Part Of Speech\nrun,nv\nfast,a\n";
    const EXCEPTIONS: &str = "Inflection,Part Of Speech,Lemma\nran,v,run\n";

    #[test]
    fn test_embedded_lexicon_loads() {
        let lexicon = load_lexicon();

        assert!(lexicon.base_form_count() > 0);
        assert!(lexicon.exception_count() > 0);
        assert!(lexicon.is_base_form("study", PartOfSpeech::Verb));
        assert!(!lexicon.is_base_form("study", PartOfSpeech::Noun));
        assert_eq!(
            lexicon.get_exceptions("went", PartOfSpeech::Verb),
            Some(&["go".to_string()][..])
        );
    }

    #[test]
    fn test_from_csv_strings() {
        let lexicon = Lexicon::from_csv_strings(BASE_FORMS, EXCEPTIONS).unwrap();

        assert_eq!(lexicon.base_form_count(), 3);
        assert_eq!(lexicon.exception_count(), 1);
        assert!(lexicon.is_base_form("run", PartOfSpeech::Noun));
        assert!(lexicon.is_base_form("run", PartOfSpeech::Verb));
        assert!(lexicon.is_base_form("fast", PartOfSpeech::Adjective));
        assert_eq!(lexicon.get_exceptions("ran", PartOfSpeech::Noun), None);

        let lemmatizer = Lemmatizer::new(&lexicon);
        assert_eq!(
            lemmatizer.lemmatize_with_pos("ran", PartOfSpeech::Verb),
            "run"
        );
        assert_eq!(lemmatizer.lemmatize("runs"), "run");
    }

    #[test]
    fn test_inserted_entries() {
        let mut lexicon = Lexicon::default();
        lexicon.insert_base_form("mouse", PartOfSpeech::Noun);
        lexicon.insert_exception("mice", PartOfSpeech::Noun, "mouse");
        lexicon.insert_exception("mice", PartOfSpeech::Noun, "mouse");

        assert_eq!(lexicon.exception_count(), 1);
        assert_eq!(Lemmatizer::new(&lexicon).lemmatize("mice"), "mouse");
    }

    #[test]
    fn test_entries_are_scoped_by_part_of_speech() {
        let mut lexicon = Lexicon::default();
        lexicon.insert_base_form("Leave", PartOfSpeech::Noun);
        lexicon.insert_base_form("leave", PartOfSpeech::Verb);
        lexicon.insert_exception("left", PartOfSpeech::Verb, "leave");

        assert_eq!(lexicon.base_form_count(), 2);
        assert!(lexicon.is_base_form("leave", PartOfSpeech::Noun));
        assert!(!lexicon.is_base_form("leave", PartOfSpeech::Adjective));
        assert_eq!(lexicon.get_exceptions("left", PartOfSpeech::Noun), None);
        assert_eq!(
            lexicon.get_exceptions("left", PartOfSpeech::Verb),
            Some(&["leave".to_string()][..])
        );
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let result = Lexicon::from_csv_strings("Lemma,Part Of Speech\nrun,x\n", EXCEPTIONS);
        assert!(matches!(result, Err(Error::LexiconError(_))));

        let result =
            Lexicon::from_csv_strings(BASE_FORMS, "Inflection,Part Of Speech,Lemma\nran,vv,run\n");
        assert!(matches!(result, Err(Error::LexiconError(_))));
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let result = Lexicon::from_csv_strings("Word,Part Of Speech\nrun,v\n", EXCEPTIONS);
        assert!(matches!(result, Err(Error::LexiconError(_))));
    }

    #[test]
    fn test_part_of_speech_tags() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(PartOfSpeech::from_tag(pos.tag()), Some(pos));
            assert_eq!(pos.to_string().parse::<PartOfSpeech>().unwrap(), pos);
        }

        assert_eq!("V".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Verb);
        assert!("x".parse::<PartOfSpeech>().is_err());
        assert!("".parse::<PartOfSpeech>().is_err());
        assert!(PartOfSpeech::Adverb.suffix_rules().is_empty());
    }
}

#[cfg(test)]
mod normalization_comparison_tests {
    use super::*;

    #[test]
    fn test_irregular_verb_sentence() {
        let lexicon = load_lexicon();
        let stemmer = PorterStemmer::new();
        let lemmatizer = Lemmatizer::new(&lexicon);

        let comparison = NormalizationComparison::from_documents(
            &[IRREGULAR_VERB_SENTENCE],
            &stemmer,
            &lemmatizer,
        );
        let row = &comparison.rows()[0];

        assert_eq!(row.original, "i went running and studies historically");
        assert_eq!(row.lemmatized, "went running studies historically");

        let stemmed: Vec<&str> = row.stemmed.split(' ').collect();
        assert_eq!(stemmed.len(), 4);
        assert_eq!(stemmed[1], "run");
        assert_eq!(stemmed[2], "studi");
    }

    #[test]
    fn test_stop_words_kept_only_in_original_column() {
        let lexicon = load_lexicon();
        let stemmer = PorterStemmer::new();
        let lemmatizer = Lemmatizer::new(&lexicon);

        let documents = ["It is what it was", "The cats"];
        let comparison = NormalizationComparison::from_documents(&documents, &stemmer, &lemmatizer);

        assert_eq!(comparison.rows()[0].original, "it is what it was");
        assert_eq!(comparison.rows()[0].stemmed, "");
        assert_eq!(comparison.rows()[0].lemmatized, "");
        assert_eq!(comparison.rows()[1].original, "the cats");
        assert_eq!(comparison.rows()[1].stemmed, "cat");
    }

    #[test]
    fn test_corpora() {
        let lexicon = load_lexicon();
        let stemmer = PorterStemmer::new();
        let lemmatizer = Lemmatizer::new(&lexicon);

        let documents = ["The messages were sent", "No entries"];
        let comparison = NormalizationComparison::from_documents(&documents, &stemmer, &lemmatizer);

        assert_eq!(
            comparison.lemmatized_corpus(),
            vec!["message sent", "entry"]
        );
        assert_eq!(comparison.stemmed_corpus().len(), 2);
    }

    #[test]
    fn test_display_layout() {
        let lexicon = load_lexicon();
        let stemmer = PorterStemmer::new();
        let lemmatizer = Lemmatizer::new(&lexicon);

        let documents = ["word ".repeat(20)];
        let comparison = NormalizationComparison::from_documents(&documents, &stemmer, &lemmatizer);
        let rendered = comparison.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(&format!("{:<50} | ", "Original")));
        assert_eq!(lines[1], "-".repeat(155));

        let cells: Vec<&str> = lines[2].split(" | ").collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].chars().count(), 50);
        assert_eq!(cells[0].trim_end().chars().count(), 48);
    }
}
