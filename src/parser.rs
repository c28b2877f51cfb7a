//! Parsing of CSS selector text into [`Selector`] values.
//!
//! The parser accepts the same grammar the builder produces:
//!
//! ```text
//! selector := simple ( ws? combinator ws? selector )?
//! simple   := element? ('#' id)? ('.' class)* ('[' attr ']')*
//!             (':' pseudo-class)* ('::' pseudo-element)?
//! ```
//!
//! so every parsed selector is a valid builder value. Whitespace between two
//! simple selectors with no symbolic combinator is the descendant combinator.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt},
    multi::many0,
    sequence::{delimited, preceded},
};

use crate::error::SelectorError;
use crate::selector::{Combinator, Selector, combine};

/// Parses a complete selector string.
///
/// The whole input (modulo surrounding whitespace) must be consumed;
/// trailing text is a syntax error.
pub fn parse_selector(input: &str) -> Result<Selector, SelectorError> {
    let (remaining, selector) =
        parse_complex_selector(input.trim()).map_err(|e| SelectorError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(SelectorError::InvalidSyntax(format!(
            "unexpected tokens at end of selector: {}",
            remaining.trim()
        )));
    }
    Ok(selector)
}

/// Parses a simple selector and any combinator chain following it.
fn parse_complex_selector(input: &str) -> IResult<&str, Selector> {
    let (input, first) = parse_simple_selector(input)?;

    // Peek at whitespace, then try an explicit symbolic combinator.
    let (rem, ws) = multispace0(input)?;
    let symbolic: IResult<&str, Combinator> = alt((
        map(char('>'), |_| Combinator::Child),
        map(char('+'), |_| Combinator::AdjacentSibling),
        map(char('~'), |_| Combinator::GeneralSibling),
    ))(rem);

    if let Ok((after_op, combinator)) = symbolic {
        let (after_ws, _) = multispace0(after_op)?;
        let (next_input, right) = parse_complex_selector(after_ws)?;
        return Ok((next_input, combine(&first, combinator, &right)));
    }

    // No operator: whitespace followed by another selector is a descendant.
    if !ws.is_empty() {
        if let Ok((next_input, right)) = parse_complex_selector(rem) {
            return Ok((next_input, combine(&first, Combinator::Descendant, &right)));
        }
    }

    Ok((input, first))
}

/// Parses one simple selector: `div#main.box[href]:hover::before`. The
/// grammar fixes the fragment order, so the pieces parse positionally.
fn parse_simple_selector(input: &str) -> IResult<&str, Selector> {
    let start = input;
    let (input, element) = opt(parse_ident)(input)?;
    let (input, id) = opt(preceded(char('#'), parse_ident))(input)?;
    let (input, classes) = many0(preceded(char('.'), parse_ident))(input)?;
    let (input, attributes) = many0(delimited(char('['), take_until("]"), char(']')))(input)?;
    let (input, pseudo_classes) = many0(parse_pseudo_class)(input)?;
    let (input, pseudo_element) = opt(preceded(tag("::"), parse_ident))(input)?;

    if element.is_none()
        && id.is_none()
        && classes.is_empty()
        && attributes.is_empty()
        && pseudo_classes.is_empty()
        && pseudo_element.is_none()
    {
        return Err(nom::Err::Error(nom::error::Error::new(
            start,
            nom::error::ErrorKind::Verify,
        )));
    }

    Ok((
        input,
        Selector::from_parts(
            element.map(str::to_string),
            id.map(str::to_string),
            classes.into_iter().map(str::to_string).collect(),
            attributes.into_iter().map(str::to_string).collect(),
            pseudo_classes,
            pseudo_element.map(str::to_string),
        ),
    ))
}

/// Parses `:name` or a functional `:name(arg)` pseudo-class. A lone `:` is
/// rejected, which makes `::pseudo-element` backtrack cleanly.
fn parse_pseudo_class(input: &str) -> IResult<&str, String> {
    let (input, _) = char(':')(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, argument) = opt(delimited(char('('), take_until(")"), char(')')))(input)?;

    let pseudo = match argument {
        Some(argument) => format!("{name}({argument})"),
        None => name.to_string(),
    };
    Ok((input, pseudo))
}

fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}
