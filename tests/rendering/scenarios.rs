#[cfg(test)]
mod scenarios {
    use sentence::cache::{Identifiers, Policy, TokenCache};
    use sentence::rendering::Handle;
    use sentence::sentence::Sentence;

    fn cache() -> TokenCache {
        TokenCache::new(Policy::default(), Identifiers::sequence(1))
    }

    fn classic(cache: &mut TokenCache) -> Sentence {
        let mut sentence = Sentence::new();
        sentence
            .add_word(cache, "Today")
            .add_word(cache, "November")
            .add_number(cache, 21)
            .add_word(cache, "at")
            .add_number(cache, 13)
            .add_word(cache, "hours")
            .add_word(cache, "and")
            .add_number(cache, 21)
            .add_word(cache, "minutes");
        sentence
    }

    fn rendered(sentence: &Sentence) -> String {
        let mut buffer = String::new();
        sentence
            .render(&mut buffer)
            .expect("Sentence should render");
        buffer
    }

    #[test]
    fn word_then_number() {
        let mut cache = cache();
        let mut sentence = Sentence::new();
        sentence
            .add_word(&mut cache, "at")
            .add_number(&mut cache, 13);

        assert_eq!(sentence.len(), 4);

        let lines: Vec<String> = sentence
            .lines()
            .map(|line| {
                line.unwrap()
                    .to_string()
            })
            .collect();

        assert_eq!(
            lines,
            vec![
                "[0] This is the word at(0) at position 0",
                "[1] This is the word at(0) at position 1",
                "[2] This is the number 13 at position 2",
                "[3] This is the number 13 at position 3",
            ]
        );
    }

    #[test]
    fn classic_sentence() {
        let mut cache = cache();
        let sentence = classic(&mut cache);

        // Today(5) November(8) 21(2) at(2) 13(2) hours(5) and(3) 21(2) minutes(7)
        assert_eq!(sentence.len(), 36);

        let output = rendered(&sentence);
        let lines: Vec<&str> = output
            .lines()
            .collect();

        assert_eq!(lines[0], "[0] This is the word Today(0) at position 0");
        assert_eq!(lines[5], "[5] {1} This is the word November(5) at position 5");
        assert_eq!(lines[13], "[13] This is the number 21 at position 13");
        assert_eq!(lines[15], "[15] This is the word at(15) at position 15");
        assert_eq!(lines[22], "[22] This is the word hours(19) at position 22");
        assert_eq!(lines[27], "[27] This is the number 21 at position 27");
        assert_eq!(lines[29], "[29] {2} This is the word minutes(29) at position 29");
        assert_eq!(lines[35], "[35] {2} This is the word minutes(29) at position 35");
    }

    #[test]
    fn repeated_number_shares_instance_within_sentence() {
        let mut cache = cache();
        let sentence = classic(&mut cache);
        let tokens = sentence.tokens();

        assert!(Handle::same(&tokens[2], &tokens[7]));
        assert!(!Handle::same(&tokens[2], &tokens[4]));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn number_shared_across_sentences() {
        let mut cache = cache();
        let mut one = Sentence::new();
        let mut two = Sentence::new();

        one.add_word(&mut cache, "at")
            .add_number(&mut cache, 21);
        two.add_number(&mut cache, 21);

        assert!(Handle::same(&one.tokens()[1], &two.tokens()[0]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn rendering_survives_cache() {
        let mut cache = cache();
        let sentence = classic(&mut cache);

        let before = rendered(&sentence);
        drop(cache);
        let after = rendered(&sentence);

        assert_eq!(before, after);
    }

    #[test]
    fn rendering_survives_clear() {
        let mut cache = cache();
        let sentence = classic(&mut cache);

        let before = rendered(&sentence);
        cache.clear();
        assert!(cache.is_empty());

        assert_eq!(before, rendered(&sentence));
    }

    #[test]
    fn locating_positions() {
        let mut cache = cache();
        let sentence = classic(&mut cache);

        assert_eq!(sentence.resolve(0), Some((0, 0)));
        assert_eq!(sentence.resolve(4), Some((0, 4)));
        assert_eq!(sentence.resolve(5), Some((1, 0)));
        assert_eq!(sentence.resolve(14), Some((2, 1)));
        assert_eq!(sentence.resolve(35), Some((8, 6)));
        assert_eq!(sentence.resolve(36), None);
    }
}
