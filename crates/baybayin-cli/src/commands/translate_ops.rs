use std::io::{self, Write};

use baybayin_engine::translate::{CancelToken, StreamEnd, TranslateClient};

/// Stream a translation of `prompt`, echoing chunks as they arrive, then
/// print the Baybayin rendering of the full text.
pub fn translate_cmd(endpoint: &str, prompt: &str, canceller: &str, font: &str) {
    let client = TranslateClient::new(endpoint);
    let translation = die!(
        client.translate(prompt, &CancelToken::new(), |chunk| {
            print!("{chunk}");
            let _ = io::stdout().flush();
        }),
        "\nError: {}"
    );
    println!();
    if translation.end != StreamEnd::Done {
        eprintln!("note: stream ended without [DONE]; output may be incomplete");
    }
    println!("{}", translation.transliterate(canceller, font));
}
