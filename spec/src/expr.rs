//! Class expressions used as the value of the equivalence field.
//!
//! Expressions are written in a compact Manchester-like syntax:
//!
//! ```text
//! Instrument and (hasPart some Drumhead)
//! Membrane or not Shell
//! hasHead only (Drumhead and not Deprecated)
//! ```
//!
//! `or` binds loosest, then `and`, then prefix `not`; `p some X` and
//! `p only X` bind tightest. Parentheses group.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeclError;
use crate::registry::is_identifier;

/// Deepest nesting of `not`, restrictions, and parentheses accepted.
pub const MAX_DEPTH: usize = 128;

/// An OWL class expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ClassExpr {
    /// A named class.
    Named(String),
    /// `owl:intersectionOf`.
    And(Vec<ClassExpr>),
    /// `owl:unionOf`.
    Or(Vec<ClassExpr>),
    /// `owl:complementOf`.
    Not(Box<ClassExpr>),
    /// Existential restriction (`owl:someValuesFrom`).
    SomeValuesFrom {
        /// Object property name.
        property: String,
        /// Filler class.
        filler: Box<ClassExpr>,
    },
    /// Universal restriction (`owl:allValuesFrom`).
    AllValuesFrom {
        /// Object property name.
        property: String,
        /// Filler class.
        filler: Box<ClassExpr>,
    },
}

impl ClassExpr {
    /// Shorthand for [`ClassExpr::Named`].
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Shorthand for an existential restriction.
    pub fn some(property: impl Into<String>, filler: ClassExpr) -> Self {
        Self::SomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Shorthand for a universal restriction.
    pub fn only(property: impl Into<String>, filler: ClassExpr) -> Self {
        Self::AllValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Parses the textual syntax.
    ///
    /// # Errors
    ///
    /// Returns [`DeclError::Expression`] with the offending byte offset.
    pub fn parse(input: &str) -> Result<Self, DeclError> {
        let tokens = tokenize(input)?;
        let mut parser = Parser {
            input,
            tokens,
            pos: 0,
            depth: 0,
        };
        let expr = parser.disjunction()?;
        if let Some(tok) = parser.peek() {
            return Err(parser.error(tok.offset, "unexpected trailing input"));
        }
        expr.validate().map_err(|message| parser.error(0, message))?;
        Ok(expr)
    }

    /// Checks the invariants that the textual syntax guarantees: every name
    /// is an identifier and not a keyword, `And` and `Or` have at least two
    /// operands, and nesting stays within [`MAX_DEPTH`]. Expressions built
    /// by hand must pass this before they are registered, or their text
    /// form would not parse back.
    ///
    /// # Errors
    ///
    /// Returns a description of the first defect found.
    pub fn validate(&self) -> Result<(), &'static str> {
        self.validate_at(0)
    }

    fn validate_at(&self, depth: usize) -> Result<(), &'static str> {
        if depth > MAX_DEPTH {
            return Err("expression nested too deeply");
        }
        match self {
            Self::Named(name) => check_name(name),
            Self::And(items) | Self::Or(items) => {
                if items.len() < 2 {
                    return Err("`and`/`or` need at least two operands");
                }
                items.iter().try_for_each(|item| item.validate_at(depth + 1))
            }
            Self::Not(inner) => inner.validate_at(depth + 1),
            Self::SomeValuesFrom { property, filler }
            | Self::AllValuesFrom { property, filler } => {
                check_name(property)?;
                filler.validate_at(depth + 1)
            }
        }
    }

    /// Every class name referenced by this expression, in textual order.
    #[must_use]
    pub fn class_names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect(&mut out, &mut Vec::new());
        out
    }

    /// Every property name referenced by this expression, in textual order.
    #[must_use]
    pub fn property_names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect(&mut Vec::new(), &mut out);
        out
    }

    fn collect<'a>(&'a self, classes: &mut Vec<&'a str>, properties: &mut Vec<&'a str>) {
        match self {
            Self::Named(name) => classes.push(name),
            Self::And(items) | Self::Or(items) => {
                for item in items {
                    item.collect(classes, properties);
                }
            }
            Self::Not(inner) => inner.collect(classes, properties),
            Self::SomeValuesFrom { property, filler }
            | Self::AllValuesFrom { property, filler } => {
                properties.push(property);
                filler.collect(classes, properties);
            }
        }
    }

    fn is_atomic(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

impl fmt::Display for ClassExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::And(items) => write_joined(f, items, " and "),
            Self::Or(items) => write_joined(f, items, " or "),
            Self::Not(inner) => {
                f.write_str("not ")?;
                write_operand(f, inner)
            }
            Self::SomeValuesFrom { property, filler } => {
                write!(f, "{property} some ")?;
                write_operand(f, filler)
            }
            Self::AllValuesFrom { property, filler } => {
                write!(f, "{property} only ")?;
                write_operand(f, filler)
            }
        }
    }
}

fn check_name(name: &str) -> Result<(), &'static str> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err("names must be identifiers other than `and`, `or`, `not`, `some`, `only`")
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &ClassExpr) -> fmt::Result {
    if expr.is_atomic() {
        write!(f, "{expr}")
    } else {
        write!(f, "({expr})")
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[ClassExpr], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write_operand(f, item)?;
    }
    Ok(())
}

impl FromStr for ClassExpr {
    type Err = DeclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClassExpr {
    type Error = DeclError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClassExpr> for String {
    fn from(expr: ClassExpr) -> Self {
        expr.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Open,
    Close,
    Word(String),
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    offset: usize,
}

fn tokenize(input: &str) -> Result<Vec<Token>, DeclError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    while let Some(&(offset, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::Open,
                    offset,
                });
            }
            ')' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::Close,
                    offset,
                });
            }
            c if is_word_char(c) => {
                let mut word = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if !is_word_char(c) {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                tokens.push(Token {
                    kind: TokenKind::Word(word),
                    offset,
                });
            }
            other => {
                return Err(DeclError::Expression {
                    input: input.to_owned(),
                    offset,
                    message: format!("unexpected character `{other}`"),
                });
            }
        }
    }
    Ok(tokens)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// Reserved words of the expression syntax; never valid as names.
pub(crate) fn is_keyword(word: &str) -> bool {
    matches!(word, "and" | "or" | "not" | "some" | "only")
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_word(&self) -> Option<&str> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Word(w)) => Some(w),
            _ => None,
        }
    }

    fn error(&self, offset: usize, message: &str) -> DeclError {
        DeclError::Expression {
            input: self.input.to_owned(),
            offset,
            message: message.to_owned(),
        }
    }

    fn end_offset(&self) -> usize {
        self.input.len()
    }

    fn disjunction(&mut self) -> Result<ClassExpr, DeclError> {
        let mut items = vec![self.conjunction()?];
        while self.peek_word() == Some("or") {
            self.pos += 1;
            items.push(self.conjunction()?);
        }
        Ok(flatten(items, ClassExpr::Or))
    }

    fn conjunction(&mut self) -> Result<ClassExpr, DeclError> {
        let mut items = vec![self.unary()?];
        while self.peek_word() == Some("and") {
            self.pos += 1;
            items.push(self.unary()?);
        }
        Ok(flatten(items, ClassExpr::And))
    }

    /// Every nested operand passes through here, so the depth count bounds
    /// the recursion of the whole parser. One expression level costs at most
    /// two calls (operand plus parenthesized group).
    fn unary(&mut self) -> Result<ClassExpr, DeclError> {
        if self.depth > 2 * MAX_DEPTH + 1 {
            let offset = self.peek().map_or(self.end_offset(), |t| t.offset);
            return Err(self.error(offset, "expression nested too deeply"));
        }
        self.depth += 1;
        let result = self.negation();
        self.depth -= 1;
        result
    }

    fn negation(&mut self) -> Result<ClassExpr, DeclError> {
        if self.peek_word() == Some("not") {
            self.pos += 1;
            return Ok(ClassExpr::Not(Box::new(self.unary()?)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<ClassExpr, DeclError> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.error(self.end_offset(), "expected a class expression"));
        };
        self.pos += 1;
        match token.kind {
            TokenKind::Open => {
                let inner = self.disjunction()?;
                match self.peek() {
                    Some(Token {
                        kind: TokenKind::Close,
                        ..
                    }) => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    Some(tok) => Err(self.error(tok.offset, "expected `)`")),
                    None => Err(self.error(self.end_offset(), "unclosed `(`")),
                }
            }
            TokenKind::Close => Err(self.error(token.offset, "unexpected `)`")),
            TokenKind::Word(word) if is_keyword(&word) => Err(self.error(
                token.offset,
                &format!("expected a class or property name, found `{word}`"),
            )),
            TokenKind::Word(word) => match self.peek_word() {
                Some("some") => {
                    self.pos += 1;
                    Ok(ClassExpr::some(word, self.unary()?))
                }
                Some("only") => {
                    self.pos += 1;
                    Ok(ClassExpr::only(word, self.unary()?))
                }
                _ => Ok(ClassExpr::Named(word)),
            },
        }
    }
}

fn flatten(mut items: Vec<ClassExpr>, wrap: fn(Vec<ClassExpr>) -> ClassExpr) -> ClassExpr {
    if items.len() == 1 {
        if let Some(only) = items.pop() {
            return only;
        }
    }
    wrap(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> ClassExpr {
        ClassExpr::parse(s).expect("expression should parse")
    }

    #[test]
    fn single_name() {
        assert_eq!(parse("Drumhead"), ClassExpr::named("Drumhead"));
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(
            parse("A or B and C"),
            ClassExpr::Or(vec![
                ClassExpr::named("A"),
                ClassExpr::And(vec![ClassExpr::named("B"), ClassExpr::named("C")]),
            ])
        );
    }

    #[test]
    fn restriction_takes_unary_filler() {
        assert_eq!(
            parse("Drum and hasPart some Drumhead"),
            ClassExpr::And(vec![
                ClassExpr::named("Drum"),
                ClassExpr::some("hasPart", ClassExpr::named("Drumhead")),
            ])
        );
    }

    #[test]
    fn not_and_parentheses() {
        assert_eq!(
            parse("not (A or B)"),
            ClassExpr::Not(Box::new(ClassExpr::Or(vec![
                ClassExpr::named("A"),
                ClassExpr::named("B"),
            ])))
        );
    }

    #[test]
    fn display_parses_back() {
        for text in [
            "Instrument and (hasPart some Drumhead)",
            "A or (B and C)",
            "not (A or B)",
            "hasHead only (Drumhead and (not Snare))",
        ] {
            let expr = parse(text);
            assert_eq!(parse(&expr.to_string()), expr, "{text}");
        }
    }

    #[test]
    fn collects_references() {
        let expr = parse("Drum and hasPart some (Drumhead or Shell)");
        assert_eq!(expr.class_names(), vec!["Drum", "Drumhead", "Shell"]);
        assert_eq!(expr.property_names(), vec!["hasPart"]);
    }

    #[test]
    fn reports_offsets() {
        match ClassExpr::parse("A and ") {
            Err(DeclError::Expression { offset, .. }) => assert_eq!(offset, 6),
            other => panic!("unexpected result: {other:?}"),
        }
        match ClassExpr::parse("A ) B") {
            Err(DeclError::Expression { offset, .. }) => assert_eq!(offset, 2),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(ClassExpr::parse("(A and B").is_err());
        assert!(ClassExpr::parse("A $ B").is_err());
        assert!(ClassExpr::parse("some A").is_err());
    }

    #[test]
    fn deep_nesting_is_an_error_not_an_abort() {
        for text in [
            format!("{}A", "not ".repeat(10_000)),
            format!("{}A{}", "(".repeat(10_000), ")".repeat(10_000)),
            format!("{}A", "p some ".repeat(10_000)),
        ] {
            match ClassExpr::parse(&text) {
                Err(DeclError::Expression { message, .. }) => {
                    assert_eq!(message, "expression nested too deeply")
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn nesting_limit_is_inclusive() {
        assert!(ClassExpr::parse(&format!("{}A", "not ".repeat(MAX_DEPTH))).is_ok());
        assert!(ClassExpr::parse(&format!("{}A", "not ".repeat(MAX_DEPTH + 1))).is_err());
    }

    #[test]
    fn deepest_valid_expression_displays_and_parses_back() {
        let mut expr = ClassExpr::named("A");
        for _ in 0..MAX_DEPTH / 2 {
            expr = ClassExpr::Not(Box::new(ClassExpr::And(vec![expr, ClassExpr::named("B")])));
        }
        assert_eq!(expr.validate(), Ok(()));
        assert_eq!(parse(&expr.to_string()), expr);
    }

    #[test]
    fn validate_rejects_shapes_without_a_text_form() {
        assert!(ClassExpr::And(vec![ClassExpr::named("A")]).validate().is_err());
        assert!(ClassExpr::Or(Vec::new()).validate().is_err());
        assert!(ClassExpr::named("and").validate().is_err());
        assert!(ClassExpr::some("only", ClassExpr::named("A")).validate().is_err());
        assert_eq!(
            ClassExpr::Or(vec![ClassExpr::named("A"), ClassExpr::named("B")]).validate(),
            Ok(())
        );
    }

    #[test]
    fn serde_rejects_keyword_text() {
        let json = serde_json::to_string(&ClassExpr::named("and")).expect("serialize");
        assert!(serde_json::from_str::<ClassExpr>(&json).is_err());
    }

    #[test]
    fn restrictions_parse_to_value_restrictions() {
        assert!(matches!(
            parse("hasPart some Drumhead"),
            ClassExpr::SomeValuesFrom { ref property, .. } if property == "hasPart"
        ));
        assert!(matches!(
            parse("hasPart only Drumhead"),
            ClassExpr::AllValuesFrom { ref property, .. } if property == "hasPart"
        ));
    }

    #[test]
    fn serde_uses_text_form() {
        let expr = parse("Drum and hasPart some Drumhead");
        let json = serde_json::to_string(&expr).expect("serialize");
        assert_eq!(json, "\"Drum and (hasPart some Drumhead)\"");
        let back: ClassExpr = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, expr);
    }
}
