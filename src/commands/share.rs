//! Share token command

use crate::core::Word;
use crate::error::ShareError;
use crate::game::Dictionary;
use crate::share::encode;

/// Share token for a dictionary word
///
/// # Errors
///
/// Returns `ShareError` if `word` is not a valid puzzle word or is not in the
/// dictionary.
pub fn share_token(word: &str, dictionary: &dyn Dictionary) -> Result<String, ShareError> {
    let word = Word::new(word)?;
    if !dictionary.contains(word.text()) {
        return Err(ShareError::NotInDictionary(word.text().to_string()));
    }
    Ok(encode(&word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::decode;
    use crate::wordlists::WordList;

    #[test]
    fn token_opens_the_same_word() {
        let dictionary = WordList::from_slice(&["absolute"]);

        let token = share_token("absolute", &dictionary).unwrap();

        assert_eq!(decode(&token, &dictionary).unwrap().text(), "ABSOLUTE");
    }

    #[test]
    fn unknown_or_invalid_words_are_refused() {
        let dictionary = WordList::from_slice(&["crane"]);

        assert_eq!(
            share_token("slate", &dictionary),
            Err(ShareError::NotInDictionary("SLATE".to_string()))
        );
        assert!(matches!(
            share_token("cr4ne", &dictionary),
            Err(ShareError::InvalidWord(_))
        ));
    }
}
