// Rendering recognized phrases as digits.

use numwords_core::{LocaleGrammar, PhraseKind};

use crate::overlay::PhraseResult;

/// Digits of `value` preceded by `leading_zeros` literal zeros. A zero value
/// after leading zeros renders as the zeros alone (`00`, not `000`).
pub fn formal_digits(value: u128, leading_zeros: usize) -> String {
    let zeros = "0".repeat(leading_zeros);
    if value == 0 && leading_zeros > 0 {
        zeros
    } else {
        format!("{zeros}{value}")
    }
}

/// Text substituted for a phrase.
pub fn render(result: &PhraseResult, grammar: &LocaleGrammar) -> String {
    let mut out = String::new();
    if let Some(sign) = result.sign {
        out.push(sign.symbol());
    }
    out.push_str(&formal_digits(result.value, result.leading_zero_count));

    match result.kind {
        PhraseKind::Cardinal => {}
        PhraseKind::Ordinal => {
            out.push_str(grammar.ordinal_separator);
            out.push_str(result.suffix.as_deref().unwrap_or_default());
        }
        PhraseKind::Decimal => {
            if let Some(fraction) = result.fraction {
                out.push(grammar.decimal_symbol);
                out.push_str(&formal_digits(fraction.value, fraction.leading_zero_count));
            }
        }
    }
    out
}

/// Space-separated phone layout of a digit string: two trailing pairs,
/// triples before them, and a leading group of one to three digits.
///
/// `89161234567` → `8 916 123 45 67`. Strings shorter than five digits are
/// returned unchanged.
pub fn group_phone_digits(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    if chars.len() < 5 {
        return digits.to_string();
    }
    let (head, pairs) = chars.split_at(chars.len() - 4);

    let mut groups: Vec<String> = Vec::new();
    let lead = match head.len() % 3 {
        0 => 3,
        n => n,
    };
    groups.push(head[..lead].iter().collect());
    groups.extend(head[lead..].chunks(3).map(|c| c.iter().collect()));
    groups.extend(pairs.chunks(2).map(|c| c.iter().collect()));
    groups.join(" ")
}
