use chrono::format::{self, ParseResult, Parsed, StrftimeItems};
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeTextError;

bitflags::bitflags! {
    /// Which parts of a time a format pattern shows
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TimeComponents: u8 {
        const HOUR     = 0b0001;
        const MINUTE   = 0b0010;
        const SECOND   = 0b0100;
        const MERIDIEM = 0b1000;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Hour24 { padded: bool },
    Hour12 { padded: bool },
    Minute { padded: bool },
    Second { padded: bool },
    Meridiem,
    Literal(String),
}

impl Token {
    fn push_strftime(&self, out: &mut String) {
        match self {
            Self::Hour24 { padded } => out.push_str(if *padded { "%H" } else { "%-H" }),
            Self::Hour12 { padded } => out.push_str(if *padded { "%I" } else { "%-I" }),
            Self::Minute { padded } => out.push_str(if *padded { "%M" } else { "%-M" }),
            Self::Second { padded } => out.push_str(if *padded { "%S" } else { "%-S" }),
            Self::Meridiem => out.push_str("%p"),
            Self::Literal(text) => out.push_str(&text.replace('%', "%%")),
        }
    }
}

/// A date-fns style time pattern such as `HH:mm:ss` or `h:mm a`
///
/// Supported tokens: `HH`/`H` (24-hour), `hh`/`h` (12-hour), `mm`/`m`,
/// `ss`/`s` and `a` (AM/PM). Text inside single quotes is literal, `''` is a
/// literal quote. Any other character is kept as literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPattern {
    pattern: String,
    tokens: Vec<Token>,
    strftime: String,
    /// Same as `strftime` with a trailing `<separator><seconds>` removed
    strftime_without_seconds: Option<String>,
}

impl FormatPattern {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let tokens = tokenize(pattern);
        let strftime = to_strftime(&tokens);

        let strftime_without_seconds = match tokens.as_slice() {
            [head @ .., Token::Literal(_), Token::Second { .. }] if !head.is_empty() => {
                Some(to_strftime(head))
            }
            _ => None,
        };

        Self {
            pattern: pattern.to_string(),
            tokens,
            strftime,
            strftime_without_seconds,
        }
    }

    /// The pattern as supplied by the caller
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn components(&self) -> TimeComponents {
        self.tokens.iter().fold(TimeComponents::empty(), |acc, token| {
            acc | match token {
                Token::Hour24 { .. } | Token::Hour12 { .. } => TimeComponents::HOUR,
                Token::Minute { .. } => TimeComponents::MINUTE,
                Token::Second { .. } => TimeComponents::SECOND,
                Token::Meridiem => TimeComponents::MERIDIEM,
                Token::Literal(_) => TimeComponents::empty(),
            }
        })
    }

    /// Render the time-of-day part of `value`
    #[must_use]
    pub fn format(&self, value: &NaiveDateTime) -> String {
        value.format(&self.strftime).to_string()
    }

    /// Parse `text` as a time of day laid out per this pattern
    ///
    /// Fields the pattern does not carry are taken from midnight on the
    /// reference date: a 12-hour pattern without `a` reads as AM, a pattern
    /// without hours reads as hour zero. When the pattern ends in a seconds
    /// field the text may leave it out, in which case the seconds are zero.
    ///
    /// # Errors
    ///
    /// Returns [`TimeTextError::Unparseable`] if the text does not follow the
    /// pattern or denotes an impossible time, and [`TimeTextError::LeapSecond`]
    /// for a `:60` second.
    pub fn parse_time(&self, text: &str) -> Result<NaiveTime, TimeTextError> {
        let parsed = parse_on_reference(text, &self.strftime).or_else(|err| {
            self.strftime_without_seconds
                .as_deref()
                .and_then(|fallback| parse_on_reference(text, fallback).ok())
                .ok_or(err)
        });

        let time = parsed.map_err(|source| TimeTextError::Unparseable {
            text: text.to_string(),
            pattern: self.pattern.clone(),
            source,
        })?;

        if time.nanosecond() >= 1_000_000_000 {
            return Err(TimeTextError::LeapSecond(text.to_string()));
        }

        Ok(time)
    }
}

impl Default for FormatPattern {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_FORMAT)
    }
}

fn parse_on_reference(text: &str, strftime: &str) -> ParseResult<NaiveTime> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, text, StrftimeItems::new(strftime))?;

    let (reference_pm, reference_hour12) = NaiveTime::MIN.hour12();
    if parsed.hour_mod_12().is_none() {
        parsed.set_hour12(i64::from(reference_hour12))?;
    }
    if parsed.hour_div_12().is_none() {
        parsed.set_ampm(reference_pm)?;
    }
    if parsed.minute().is_none() {
        parsed.set_minute(i64::from(NaiveTime::MIN.minute()))?;
    }

    parsed.to_naive_time()
}

fn to_strftime(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        token.push_strftime(&mut out);
    }
    out
}

fn push_literal(tokens: &mut Vec<Token>, c: char) {
    if let Some(Token::Literal(text)) = tokens.last_mut() {
        text.push(c);
    } else {
        tokens.push(Token::Literal(c.to_string()));
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                push_literal(&mut tokens, '\'');
                continue;
            }
            // Quoted run; an unterminated quote runs to the end
            while let Some(q) = chars.next() {
                if q == '\'' {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        push_literal(&mut tokens, '\'');
                        continue;
                    }
                    break;
                }
                push_literal(&mut tokens, q);
            }
            continue;
        }

        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        let padded = run >= 2;

        match c {
            'H' => tokens.push(Token::Hour24 { padded }),
            'h' => tokens.push(Token::Hour12 { padded }),
            'm' => tokens.push(Token::Minute { padded }),
            's' => tokens.push(Token::Second { padded }),
            'a' => tokens.push(Token::Meridiem),
            _ => {
                for _ in 0..run {
                    push_literal(&mut tokens, c);
                }
            }
        }
    }

    tokens
}
