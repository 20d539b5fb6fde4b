use std::time::{Duration, Instant};

use assert_matches::assert_matches;
use marmoset_type::session::{Session, SessionStatus};
use marmoset_type::util::calculate_wpm;
use marmoset_type::vocabulary::Vocabulary;
use marmoset_type::word_generator::{WordGenerator, NUM_OF_WORDS};

fn submit(session: &mut Session, word: &str, now: Instant) {
    session.on_input_change_at(word, now);
    session.on_input_change_at(&format!("{word} "), now);
}

#[test]
fn cat_dog_vocabulary_two_word_session() {
    let mut session = Session::new(vec!["cat".to_string(), "dog".to_string()]);
    let start = Instant::now();

    submit(&mut session, "cat", start);
    submit(&mut session, "dog", start + Duration::from_millis(1300));

    assert_matches!(session.status(), SessionStatus::Finished);
    assert_eq!(session.correct_chars(), 8);
    assert_eq!(session.elapsed_secs(), 1);
    assert_eq!(session.final_wpm(), 96);
    assert_eq!(session.samples().len(), 1);
}

#[test]
fn generated_session_runs_to_completion() {
    let vocab = Vocabulary::from_words(
        "farm".to_string(),
        ["cow", "pig", "hen", "goat"].iter().map(|w| w.to_string()).collect(),
    )
    .unwrap();
    let words = WordGenerator::new(vocab.clone()).generate();
    assert_eq!(words.len(), NUM_OF_WORDS);
    assert!(words.iter().all(|w| vocab.contains(w)));

    let mut session = Session::new(words.clone());
    let start = Instant::now();
    let mut expected = 0;

    for (i, word) in words.iter().enumerate() {
        let now = start + Duration::from_millis(300 * i as u64);
        // every third word is fumbled
        if i % 3 == 0 {
            submit(&mut session, "oops", now);
        } else {
            submit(&mut session, word, now);
            expected += word.len() + 1;
        }
        assert_eq!(session.correct_chars(), expected);
    }

    assert!(session.has_finished());
    // last word lands at 14.7s
    assert_eq!(session.elapsed_secs(), 14);
    assert_eq!(session.final_wpm(), calculate_wpm(expected, 14));

    let secs: Vec<u64> = session.samples().iter().map(|s| s.elapsed_secs).collect();
    assert_eq!(secs, (1..=14).collect::<Vec<u64>>());

    let before = session.samples().len();
    session.advance_clock(start + Duration::from_secs(60));
    assert_eq!(session.samples().len(), before);
}
