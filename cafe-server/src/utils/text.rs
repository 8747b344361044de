//! 文本工具函数
//!
//! location 比较统一在 repository 层做 title case 归一化，
//! handler 层只传原始查询串。

/// Title-case a string: the first letter of each word is uppercased, the
/// rest lowercased. Any non-alphabetic character starts a new word
/// ("new york" -> "New York", "SOHO" -> "Soho").
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_word() {
        assert_eq!(title_case("paris"), "Paris");
    }

    #[test]
    fn multiple_words() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("peckham rye"), "Peckham Rye");
    }

    #[test]
    fn uppercase_is_folded() {
        assert_eq!(title_case("SOHO"), "Soho");
        assert_eq!(title_case("pECKHAM"), "Peckham");
    }

    #[test]
    fn non_alphabetic_separators_start_words() {
        assert_eq!(title_case("stoke-on-trent"), "Stoke-On-Trent");
    }

    #[test]
    fn empty_input() {
        assert_eq!(title_case(""), "");
    }
}
