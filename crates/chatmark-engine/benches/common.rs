// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_message(size: usize) -> String {
    let base = "Here are some ideas for your trip:\n\n**Museums & Culture:**\n- Visit the *Louvre* early\n- Book at www.louvre.fr or https://www.musee-orsay.fr/en\n\n## Getting around\n1) Take the `RER B` from the airport\n2) Walk along the **Seine** at sunset\n\n```bash\ncurl -s https://api.example.com/v1/metro | jq '.lines'\n```\n\n";
    base.repeat(size)
}

/// Inputs that punish backtracking matchers: long runs of unmatched openers.
#[allow(dead_code)]
pub fn generate_adversarial_inputs(len: usize) -> Vec<(&'static str, String)> {
    vec![
        ("stars", "*".repeat(len)),
        ("ticks", "`".repeat(len)),
        ("open_bold", "**a ".repeat(len / 4)),
        ("spaced_stars", " *a".repeat(len / 3)),
        ("parens", format!("https://x.org/{}", "(".repeat(len))),
    ]
}
