//! Color values and CSS color parsing.
//!
//! Map renderers consume colors as CSS strings, so [`Rgba`] displays as
//! `rgb(r, g, b)` when fully opaque and `rgba(r, g, b, a)` otherwise. The
//! reverse direction goes through the `cssparser` tokenizer, which gives us
//! the same leniency a browser applies to hand-written style values.

use std::fmt;
use std::str::FromStr;

use cssparser::{
    BasicParseErrorKind, ParseError, ParseErrorKind, Parser, ParserInput, ToCss, Token,
};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Alpha applied to a feature's color in its base state.
pub const BASE_OPACITY: f32 = 0.5;

/// Alpha applied to a feature's color while hovered.
pub const HOVER_OPACITY: f32 = 0.7;

/// The application's accent color (`#c14213`).
pub const PRIMARY_COLOR: Rgba = Rgba::rgb(0xc1, 0x42, 0x13);

/// An sRGB color with straight (non-premultiplied) alpha.
///
/// # Example
///
/// ```rust
/// use mapstyle::Rgba;
///
/// let blue = Rgba::rgb(0, 0, 255);
/// assert_eq!(blue.to_string(), "rgb(0, 0, 255)");
/// assert_eq!(blue.with_alpha(0.5).to_string(), "rgba(0, 0, 255, 0.5)");
///
/// let parsed: Rgba = "rgba(125, 125, 255, 0.4)".parse().unwrap();
/// assert_eq!(parsed, Rgba::new(125, 125, 255, 0.4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

impl Rgba {
    /// Creates a color from channels and an alpha value.
    ///
    /// Alpha is stored as given; use [`Rgba::with_alpha`] for clamping.
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a fully opaque color from an `(r, g, b)` triple.
    pub const fn from_triple((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }

    /// Returns the same color with a different alpha, clamped to `[0, 1]`.
    ///
    /// NaN becomes fully transparent, as CSS does for a NaN alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        Self { alpha, ..self }
    }

    /// Returns the `(r, g, b)` channels, dropping alpha.
    pub const fn triple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}

/// Error returned when a string is not a color we understand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{value}': {reason}")]
pub struct ColorParseError {
    pub value: String,
    pub reason: String,
}

impl ColorParseError {
    pub(crate) fn new(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
enum Invalid {
    #[error("unknown color name '{0}'")]
    UnknownName(String),
    #[error("'#{0}' is not a 3, 4, 6 or 8 digit hex color")]
    BadHex(String),
    #[error("unsupported color function '{0}()'")]
    UnknownFunction(String),
    #[error("expected a number or percentage, found '{0}'")]
    ExpectedNumber(String),
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    /// Parses a CSS color: a named color, `#rgb`, `#rgba`, `#rrggbb`,
    /// `#rrggbbaa`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// Channels and alpha may be numbers or percentages, as in
    /// `rgb(100%, 0%, 0%)` or `rgba(0, 0, 255, 50%)`.
    ///
    /// An unterminated function such as `rgba(1, 2, 3, 0.5` is accepted, as
    /// CSS closes open blocks at end of input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut input = ParserInput::new(s);
        let mut parser = Parser::new(&mut input);
        parser
            .parse_entirely(parse_color)
            .map_err(|err| ColorParseError::new(s, describe(err)))
    }
}

fn describe(err: ParseError<'_, Invalid>) -> String {
    match err.kind {
        ParseErrorKind::Custom(invalid) => invalid.to_string(),
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            "unexpected end of input".to_string()
        }
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            format!("unexpected '{}'", token.to_css_string())
        }
        ParseErrorKind::Basic(_) => "invalid color syntax".to_string(),
    }
}

fn parse_color<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<Rgba, ParseError<'i, Invalid>> {
    let token = parser.next()?.clone();
    match token {
        Token::Ident(ref name) => named_color(name)
            .ok_or_else(|| parser.new_custom_error(Invalid::UnknownName(name.to_string()))),
        Token::Hash(ref digits) | Token::IDHash(ref digits) => hex_color(digits)
            .ok_or_else(|| parser.new_custom_error(Invalid::BadHex(digits.to_string()))),
        Token::Function(ref name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(parse_rgb_arguments)
        }
        Token::Function(ref name) => {
            Err(parser.new_custom_error(Invalid::UnknownFunction(name.to_string())))
        }
        other => Err(parser.new_unexpected_token_error(other)),
    }
}

fn parse_rgb_arguments<'i, 't>(
    parser: &mut Parser<'i, 't>,
) -> Result<Rgba, ParseError<'i, Invalid>> {
    let r = parse_channel(parser)?;
    parser.expect_comma()?;
    let g = parse_channel(parser)?;
    parser.expect_comma()?;
    let b = parse_channel(parser)?;
    let alpha = if parser.try_parse(|p| p.expect_comma()).is_ok() {
        parse_number_or_fraction(parser, 1.0)?.clamp(0.0, 1.0)
    } else {
        1.0
    };
    Ok(Rgba::new(r, g, b, alpha))
}

fn parse_channel<'i, 't>(parser: &mut Parser<'i, 't>) -> Result<u8, ParseError<'i, Invalid>> {
    let value = parse_number_or_fraction(parser, 255.0)?;
    Ok(value.round().clamp(0.0, 255.0) as u8)
}

/// Reads a number as-is, or a percentage as a fraction of `full`.
fn parse_number_or_fraction<'i, 't>(
    parser: &mut Parser<'i, 't>,
    full: f32,
) -> Result<f32, ParseError<'i, Invalid>> {
    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(value),
        Token::Percentage { unit_value, .. } => Ok(unit_value * full),
        other => Err(parser.new_custom_error(Invalid::ExpectedNumber(other.to_css_string()))),
    }
}

fn hex_color(digits: &str) -> Option<Rgba> {
    if !digits.is_ascii() {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let (r, g, b, a) = match digits.len() {
        3 => (nibble(0)?, nibble(1)?, nibble(2)?, 255),
        4 => (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?),
        6 => (byte(0)?, byte(2)?, byte(4)?, 255),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };
    Some(Rgba::new(r, g, b, f32::from(a) / 255.0))
}

/// The CSS named colors used by map styles. Not the full CSS list.
fn named_color(name: &str) -> Option<Rgba> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Rgba::rgb(0, 0, 0),
        "white" => Rgba::rgb(255, 255, 255),
        "red" => Rgba::rgb(255, 0, 0),
        "green" => Rgba::rgb(0, 128, 0),
        "lime" => Rgba::rgb(0, 255, 0),
        "blue" => Rgba::rgb(0, 0, 255),
        "yellow" => Rgba::rgb(255, 255, 0),
        "orange" => Rgba::rgb(255, 165, 0),
        "purple" => Rgba::rgb(128, 0, 128),
        "grey" | "gray" => Rgba::rgb(128, 128, 128),
        "transparent" => Rgba::new(0, 0, 0, 0.0),
        _ => return None,
    };
    Some(color)
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}
