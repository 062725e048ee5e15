const DIGIT_NAMES: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

/// Reduces raw input to upper-case letters: digits are spelled out, anything else is dropped.
pub fn transform_text(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphabetic() {
            output.push(ch.to_ascii_uppercase());
        } else if let Some(digit) = ch.to_digit(10) {
            output.push_str(DIGIT_NAMES[digit as usize]);
        }
    }
    output
}
