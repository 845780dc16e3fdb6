use rs_backoff_core::{CompletionInput, SentenceCompleter, TieBreak};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=trace to see every generation step
    env_logger::init();

    let corpus = [
        "the", "cat", "is", "chubby", ",", "i", "want", "to", "pet", "his", "belly", ".", "the", "cat", "is",
    ];
    let seed = ["the", "cat", "is"];

    // Deterministic: ties go to the token seen first in the corpus
    let sentence = rs_backoff_core::complete(&seed, 3, &corpus, false)?;
    println!("Deterministic: {}", sentence.join(" "));

    // Random tie-break with a fixed seed, reproducible across runs
    let mut input = CompletionInput::new(TieBreak::Random);
    input.rng_seed = Some(42);
    input.set_max_length(12)?;
    let completer = SentenceCompleter::new(&corpus, 2, input)?;
    for i in 0..3 {
        println!("Random bigram {}: {}", i + 1, completer.complete(&["i"]).join(" "));
    }

    // An order of 0 has no backoff base case
    match rs_backoff_core::complete(&seed, 0, &corpus, false) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
