use crate::analysis::stopwords::StopWords;
use crate::analysis::tokenizer::{is_valid_word, split_ascii_whitespace};
use crate::core::error::{Error, Result};

/// Two word lists produced by parsing a query string: terms that must match
/// (`plus_words`) and terms that must not appear (`minus_words`).
///
/// Word views borrow directly from the query text passed in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query<'a> {
    pub plus_words: Vec<&'a str>,
    pub minus_words: Vec<&'a str>,
}

struct QueryWord<'a> {
    data: &'a str,
    is_minus: bool,
}

/// Classifies and validates a single query token. Does not know about stop
/// words — that filtering happens one layer up, after validation.
fn parse_query_word(token: &str) -> Result<QueryWord<'_>> {
    if token.is_empty() {
        return Err(Error::invalid_argument("query word is empty"));
    }

    let (is_minus, word) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    if word.is_empty() || word.starts_with('-') || !is_valid_word(word) {
        return Err(Error::invalid_argument(format!(
            "query word {token:?} is invalid"
        )));
    }

    Ok(QueryWord {
        data: word,
        is_minus,
    })
}

/// Parses `text` into plus/minus word lists, preserving insertion order and
/// duplicates. Used only by the parallel `match_document` path, which
/// deduplicates its result after a parallel filter instead of up front.
pub fn parse_query_basic<'a>(stop_words: &StopWords, text: &'a str) -> Result<Query<'a>> {
    let mut query = Query::default();
    for token in split_ascii_whitespace(text) {
        let word = parse_query_word(token)?;
        if stop_words.contains(word.data) {
            continue;
        }
        if word.is_minus {
            query.minus_words.push(word.data);
        } else {
            query.plus_words.push(word.data);
        }
    }
    Ok(query)
}

/// Parses `text` the same way as [`parse_query_basic`], then sorts each list
/// and collapses adjacent duplicates. Idempotent: parsing the result of
/// formatting this query back out (or simply calling it twice on the same
/// text) yields the same lists.
pub fn parse_query_no_duplicates<'a>(stop_words: &StopWords, text: &'a str) -> Result<Query<'a>> {
    let mut query = parse_query_basic(stop_words, text)?;
    query.plus_words.sort_unstable();
    query.plus_words.dedup();
    query.minus_words.sort_unstable();
    query.minus_words.dedup();
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_stop_words() -> StopWords {
        StopWords::from_iter(Vec::<&str>::new()).unwrap()
    }

    #[test]
    fn splits_plus_and_minus_words() {
        let query = parse_query_basic(&no_stop_words(), "-cat in the city").unwrap();
        assert_eq!(query.minus_words, vec!["cat"]);
        assert_eq!(query.plus_words, vec!["in", "the", "city"]);
    }

    #[test]
    fn rejects_bare_minus() {
        assert!(parse_query_basic(&no_stop_words(), "cat -").is_err());
    }

    #[test]
    fn rejects_double_minus() {
        assert!(parse_query_basic(&no_stop_words(), "cat --dog").is_err());
    }

    #[test]
    fn rejects_control_byte() {
        assert!(parse_query_basic(&no_stop_words(), "cat\u{0001}dog").is_err());
    }

    #[test]
    fn stop_words_are_dropped_from_both_lists() {
        let stop_words = StopWords::from_str("in the").unwrap();
        let query = parse_query_basic(&stop_words, "cow in the -city").unwrap();
        assert_eq!(query.plus_words, vec!["cow"]);
        assert_eq!(query.minus_words, vec!["city"]);
    }

    #[test]
    fn no_duplicates_sorts_and_dedupes() {
        let query = parse_query_no_duplicates(&no_stop_words(), "dog cat dog cat").unwrap();
        assert_eq!(query.plus_words, vec!["cat", "dog"]);
    }

    #[test]
    fn no_duplicates_is_idempotent() {
        let stop_words = no_stop_words();
        let once = parse_query_no_duplicates(&stop_words, "dog cat dog").unwrap();
        let rebuilt = parse_query_basic(&stop_words, &once.plus_words.join(" ")).unwrap();
        let twice = parse_query_no_duplicates(&stop_words, &rebuilt.plus_words.join(" ")).unwrap();
        assert_eq!(once.plus_words, twice.plus_words);
    }
}
