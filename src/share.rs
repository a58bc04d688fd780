//! Share tokens
//!
//! A shared game is identified by the standard base64 encoding of its
//! uppercase secret. Decoding checks that the token holds a real dictionary
//! word before anyone starts a game on it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::core::Word;
use crate::error::ShareError;
use crate::game::Dictionary;

/// Query parameter carrying the token in a share link
pub const SHARE_PARAM: &str = "share";

/// Token for `secret`
///
/// # Examples
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::share::encode;
///
/// assert_eq!(encode(&Word::new("crane").unwrap()), "Q1JBTkU=");
/// ```
#[must_use]
pub fn encode(secret: &Word) -> String {
    STANDARD.encode(secret.text())
}

/// Recover the secret from `token`
///
/// # Errors
/// Returns `ShareError` if the token is not base64, holds nothing, holds
/// something that is not a puzzle word, or names a word the dictionary does
/// not know.
pub fn decode(token: &str, dictionary: &dyn Dictionary) -> Result<Word, ShareError> {
    let bytes = STANDARD
        .decode(token.trim())
        .map_err(|_| ShareError::Undecodable)?;
    let text = String::from_utf8(bytes).map_err(|_| ShareError::Undecodable)?;

    let text = text.trim();
    if text.is_empty() {
        return Err(ShareError::Empty);
    }

    let word = Word::new(text)?;
    if !dictionary.contains(word.text()) {
        return Err(ShareError::NotInDictionary(word.text().to_string()));
    }
    Ok(word)
}

/// Link for sharing `secret`
///
/// With a base URL this is `<base>?share=<token>`; without one it is the
/// command that opens the game from this binary.
#[must_use]
pub fn share_link(secret: &Word, base_url: Option<&str>) -> String {
    let token = encode(secret);
    match base_url {
        Some(base) => {
            let separator = if base.contains('?') { '&' } else { '?' };
            format!("{base}{separator}{SHARE_PARAM}={token}")
        }
        None => format!("wordle open {token}"),
    }
}
