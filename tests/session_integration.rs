use quizproctor::{
    CompletionCause, Question, SESSION_SECONDS, Session, TickOutcome, format_clock, percentage,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn three_questions() -> Vec<Question> {
    vec![
        Question {
            text: "Chan's algorithm is used for computing:".to_string(),
            options: vec![
                "Shortest path between two points".to_string(),
                "Convex hull".to_string(),
                "Area of a polygon".to_string(),
                "Closest distance between two points".to_string(),
            ],
            correct_answer: "Convex hull".to_string(),
            explanation: "Chan's algorithm is output-sensitive.".to_string(),
        },
        Question {
            text: "Dijkstra's algorithm cannot be applied on:".to_string(),
            options: vec![
                "Directed and weighted graphs".to_string(),
                "Container of objects of similar types".to_string(),
                "Container of objects of mixed types".to_string(),
                "All of the mentioned".to_string(),
            ],
            correct_answer: "Container of objects of similar types".to_string(),
            explanation: String::new(),
        },
        Question {
            text: "Order of growth of Dijkstra with an ordered-array PQ?".to_string(),
            options: vec![
                "V".to_string(),
                "EV".to_string(),
                "V²".to_string(),
                "E(logV)".to_string(),
            ],
            correct_answer: "EV".to_string(),
            explanation: "V inserts, V delete-mins, E decrease-keys.".to_string(),
        },
    ]
}

fn wrong_option(question: &Question) -> String {
    question
        .options
        .iter()
        .find(|option| !question.is_correct(option))
        .expect("every sample question has a wrong option")
        .clone()
}

#[test]
fn one_correct_one_wrong_one_blank_scores_a_third() {
    let mut rng = StdRng::seed_from_u64(404);
    let mut session =
        Session::new(&mut rng, &three_questions(), 0.0).expect("sample deck is non-empty");

    // Question 1: correct answer.
    let correct = session.current_question().correct_answer.clone();
    session.select(&correct);
    session.advance(30_000.0);

    // Question 2: deliberately wrong answer.
    let wrong = wrong_option(session.current_question());
    session.select(&wrong);
    session.advance(60_000.0);

    // Question 3: left blank; submit from the last question.
    session.advance(90_000.0);

    let outcome = session.outcome().expect("submission completes the session");
    assert_eq!(outcome.correct, 1);
    assert_eq!(outcome.total, 3);
    assert_eq!(outcome.cause, CompletionCause::Submitted);
    assert_eq!(outcome.elapsed_seconds, 90);
    assert_eq!(percentage(outcome.correct, outcome.total), "33.33");

    // Data driving the review screen: question 1 chose the correct option,
    // question 2 a wrong one, question 3 has no recorded selection.
    assert_eq!(session.answer(0), Some(correct.as_str()));
    assert!(session.deck()[0].is_correct(session.answer(0).unwrap()));
    assert!(!session.deck()[1].is_correct(session.answer(1).unwrap()));
    assert_eq!(session.answer(2), None);
}

#[test]
fn countdown_expiry_completes_with_zero_score() {
    let mut rng = StdRng::seed_from_u64(911);
    let mut session =
        Session::new(&mut rng, &three_questions(), 0.0).expect("sample deck is non-empty");

    assert_eq!(session.remaining_seconds(), SESSION_SECONDS);

    for _ in 0..SESSION_SECONDS - 1 {
        assert!(matches!(session.tick(0.0), TickOutcome::Counting(_)));
    }
    assert_eq!(session.tick(600_000.0), TickOutcome::Expired);

    let outcome = session.outcome().expect("expiry completes the session");
    assert_eq!(outcome.correct, 0);
    assert_eq!(outcome.total, 3);
    assert_eq!(outcome.cause, CompletionCause::TimeExpired);
    assert_eq!(format_clock(outcome.elapsed_seconds), "10:00");
}

#[test]
fn tab_switches_survive_to_the_summary_and_reset_clears_them() {
    let mut rng = StdRng::seed_from_u64(77);
    let questions = three_questions();
    let mut session =
        Session::new(&mut rng, &questions, 0.0).expect("sample deck is non-empty");

    session.record_hidden();
    session.record_hidden();
    session.jump_to(2);
    session.advance(120_000.0);

    assert!(session.is_complete());
    assert_eq!(session.tab_switches(), 2);

    // Reset is wholesale replacement; the fresh session carries nothing over.
    let fresh = Session::new(&mut rng, &questions, 200_000.0).expect("deck is still non-empty");
    assert_eq!(fresh.tab_switches(), 0);
    assert!(!fresh.is_complete());
}

#[test]
fn reset_yields_a_fully_fresh_session() {
    let mut rng = StdRng::seed_from_u64(2024);
    let questions = three_questions();

    let mut first = Session::new(&mut rng, &questions, 0.0).expect("sample deck is non-empty");
    let pick = first.current_question().options[0].clone();
    first.select(&pick);
    first.tick(1_000.0);
    first.record_hidden();
    first.jump_to(2);
    first.advance(5_000.0);
    assert!(first.is_complete());

    let fresh = Session::new(&mut rng, &questions, 10_000.0).expect("deck is still non-empty");

    assert_eq!(fresh.current_index(), 0);
    assert_eq!(fresh.answered_count(), 0);
    assert_eq!(fresh.remaining_seconds(), SESSION_SECONDS);
    assert_eq!(fresh.tab_switches(), 0);
    assert!(!fresh.is_complete());

    // Independently drawn permutation of the same questions.
    let mut fresh_texts: Vec<&str> = fresh.deck().iter().map(|q| q.text.as_str()).collect();
    let mut input_texts: Vec<&str> = questions.iter().map(|q| q.text.as_str()).collect();
    fresh_texts.sort();
    input_texts.sort();
    assert_eq!(fresh_texts, input_texts);
}
