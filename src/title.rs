use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("digit pattern is valid"));

const UNSAFE_CHARS: [char; 8] = ['?', '/', '\\', '|', '"', ':', '<', '>'];

/// Strips surrounding whitespace and every character that can't appear in a
/// file or directory name.
pub fn sanitize(raw: &str) -> String {
    raw.trim().chars().filter(|c| !UNSAFE_CHARS.contains(c)).collect()
}

/// Bumps the last run of digits in `title` by one.
///
/// The new number is written without padding and right-aligned against the end
/// of the old run: `Ep 007` becomes `Ep 008`, `Ep 9` becomes `Ep 10`. Any
/// Unicode decimal digits count, the new number is always ASCII. A title
/// without digits comes back unchanged.
pub fn increment(title: &str) -> String {
    let Some(run) = DIGIT_RUN.find_iter(title).last() else {
        return title.to_owned();
    };

    let next = increment_digits(run.as_str());
    // positions are in chars, not bytes
    let keep = run.as_str().chars().count().saturating_sub(next.len());

    let mut result = String::with_capacity(title.len() + 1);
    result.push_str(&title[..run.start()]);
    result.extend(run.as_str().chars().take(keep));
    result.push_str(&next);
    result.push_str(&title[run.end()..]);
    result
}

/// Decimal `+ 1` on a digit string of any length, leading zeros dropped.
fn increment_digits(digits: &str) -> String {
    let mut values: Vec<u8> = digits
        .chars()
        .map(digit_value)
        .skip_while(|&v| v == 0)
        .collect();
    let mut carry = true;

    for v in values.iter_mut().rev() {
        if *v == 9 {
            *v = 0;
        } else {
            *v += 1;
            carry = false;
            break;
        }
    }
    if carry {
        values.insert(0, 1);
    }

    values.into_iter().map(|v| char::from(b'0' + v)).collect()
}

/// Value of a decimal digit from any script.
///
/// Unicode assigns decimal digits in contiguous blocks ordered 0 to 9, so the
/// distance from the start of the surrounding run of digit code points,
/// modulo ten, is the value.
fn digit_value(c: char) -> u8 {
    if let Some(v) = c.to_digit(10) {
        return v as u8;
    }

    let mut offset = 0u32;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    (offset % 10) as u8
}

fn is_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT.is_match(c.encode_utf8(&mut buf))
}
