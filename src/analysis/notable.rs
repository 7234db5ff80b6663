//! Labels for the most positive and most negative message

use super::engine::Extreme;

pub fn format_positive(extreme: &Extreme) -> String {
    format!("👍 Positive: \"{}\" – {}", extreme.text, extreme.user)
}

pub fn format_negative(extreme: &Extreme) -> String {
    format!("⚠️ Negative: \"{}\" – {}", extreme.text, extreme.user)
}

/// Positive label first, then negative; missing extremes are skipped
pub fn format_notable(
    most_positive: Option<&Extreme>,
    most_negative: Option<&Extreme>,
) -> Vec<String> {
    most_positive
        .map(format_positive)
        .into_iter()
        .chain(most_negative.map(format_negative))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extreme(user: &str, text: &str, score: f64) -> Extreme {
        Extreme {
            user: user.to_string(),
            text: text.to_string(),
            score,
        }
    }

    #[test]
    fn test_both_extremes() {
        let pos = extreme("Alice", "Great job!", 3.0);
        let neg = extreme("Bob", "I am not sure about this", -1.0);
        assert_eq!(
            format_notable(Some(&pos), Some(&neg)),
            vec![
                "👍 Positive: \"Great job!\" – Alice".to_string(),
                "⚠️ Negative: \"I am not sure about this\" – Bob".to_string(),
            ]
        );
    }

    #[test]
    fn test_absent_extremes_omitted() {
        assert!(format_notable(None, None).is_empty());

        let neg = extreme("Bob", "ugh", -2.0);
        let labels = format_notable(None, Some(&neg));
        assert_eq!(labels.len(), 1);
        assert!(labels[0].starts_with("⚠️ Negative"));
    }
}
