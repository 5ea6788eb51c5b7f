use quizdesk_core::domain::MAX_OPTIONS;

/// One line typed by the test-taker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Pick the option at this 0-based position
    Choose(usize),
    Next,
    Previous,
    Quit,
    Help,
    Unknown(String),
}

/// Letter shown next to the option at `index` (`a`, `b`, ...)
pub fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'a'.checked_add(i))
        .map(char::from)
        .unwrap_or('?')
}

/// Interpret a line of input.
///
/// Options are picked by letter or by 1-based number.
pub fn parse_input(line: &str) -> Input {
    let word = line.trim().to_ascii_lowercase();
    match word.as_str() {
        "n" | "next" | "s" | "submit" => Input::Next,
        "p" | "prev" | "previous" | "back" => Input::Previous,
        "q" | "quit" | "exit" => Input::Quit,
        "h" | "?" | "help" => Input::Help,
        _ => parse_choice(&word).unwrap_or_else(|| Input::Unknown(word.clone())),
    }
}

fn parse_choice(word: &str) -> Option<Input> {
    let mut chars = word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_lowercase() {
            let index = (c as u8 - b'a') as usize;
            return (index < MAX_OPTIONS).then_some(Input::Choose(index));
        }
    }

    word.parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_OPTIONS).contains(n))
        .map(|n| Input::Choose(n - 1))
}
