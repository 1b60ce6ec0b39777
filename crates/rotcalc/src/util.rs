use crate::lexer::Token;
use std::fmt;

pub fn display_fn<F>(f: F) -> impl fmt::Display
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    struct DisplayFn<F> {
        f: F,
    }
    impl<F> fmt::Display for DisplayFn<F>
    where
        F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
    {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            (self.f)(formatter)
        }
    }
    DisplayFn { f }
}

/// Render a token list as `{NUMBER[1], PLUS, NUMBER[2]}`.
pub fn display_tokens(tokens: &[Token]) -> impl fmt::Display + '_ {
    display_fn(move |f| {
        f.write_str("{")?;
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match token {
                Token::Number(n) => write!(f, "NUMBER[{}]", n)?,
                Token::Plus => f.write_str("PLUS")?,
                Token::Minus => f.write_str("MINUS")?,
                Token::Star => f.write_str("TIMES")?,
                Token::Slash => f.write_str("DIVIDED_BY")?,
                Token::Illegal(ch) => write!(f, "ILLEGAL[{}]", ch.escape_debug())?,
                Token::EndOfInput => f.write_str("END_OF_INPUT")?,
            }
        }
        f.write_str("}")
    })
}
