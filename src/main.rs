#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use quizproctor::{SESSION_SECONDS, demo_questions, format_clock, shuffle_deck};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut rng = StdRng::from_entropy();
    let deck = shuffle_deck(&mut rng, &demo_questions());

    println!(
        "quizproctor deck preview (session budget {})",
        format_clock(SESSION_SECONDS)
    );

    for (index, question) in deck.iter().enumerate() {
        println!();
        println!("Question {} of {}: {}", index + 1, deck.len(), question.text);

        for option in &question.options {
            let marker = if question.is_correct(option) { "*" } else { " " };
            println!("  [{marker}] {option}");
        }
    }
}

// On wasm the page is mounted by the library's start hook; the binary
// entry point has nothing to do.
#[cfg(target_arch = "wasm32")]
fn main() {}
