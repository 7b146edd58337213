//! Dot-bracket lexing

/* local use */
use crate::error::Generation;

/// A structure character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Unpaired, // '.'
    Open,     // '('
    Close,    // ')'
}

/// Error hold the rejected byte, caller know its position
impl TryFrom<u8> for Token {
    type Error = u8;

    fn try_from(c: u8) -> Result<Self, Self::Error> {
        match c {
            b'.' => Ok(Token::Unpaired),
            b'(' => Ok(Token::Open),
            b')' => Ok(Token::Close),
            _ => Err(c),
        }
    }
}

/// Iterate over structure token with their position, invalid character is report with its position
pub fn tokenize(structure: &[u8]) -> impl Iterator<Item = Result<(usize, Token), Generation>> + '_ {
    structure
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            Token::try_from(c)
                .map(|token| (i, token))
                .map_err(|c| Generation::InvalidStructureChar(c as char, i))
        })
}

#[cfg(test)]
mod t {
    use super::*;

    #[test]
    fn lex() {
        let tokens: Result<Vec<(usize, Token)>, Generation> = tokenize(b"(.)").collect();

        assert_eq!(
            tokens.unwrap(),
            vec![(0, Token::Open), (1, Token::Unpaired), (2, Token::Close)]
        );
    }

    #[test]
    fn invalid_char_position() {
        let tokens: Result<Vec<(usize, Token)>, Generation> = tokenize(b"..[..]").collect();

        assert_eq!(tokens, Err(Generation::InvalidStructureChar('[', 2)));
    }

    #[test]
    fn single_byte() {
        assert_eq!(Token::try_from(b'.'), Ok(Token::Unpaired));
        assert_eq!(Token::try_from(b'('), Ok(Token::Open));
        assert_eq!(Token::try_from(b')'), Ok(Token::Close));
        assert_eq!(Token::try_from(b'&'), Err(b'&'));
    }
}
