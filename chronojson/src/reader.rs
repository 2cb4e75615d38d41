//! Sequential JSON token reader.

use std::fmt;

use serde_json::{Number, Value};

use crate::error::{Error, Result};

/// A single JSON token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    StartObject,
    PropertyName(String),
    EndObject,
    StartArray,
    EndArray,
}

/// The kind of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Null,
    Bool,
    Number,
    String,
    StartObject,
    PropertyName,
    EndObject,
    StartArray,
    EndArray,
    /// No tokens are left.
    End,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Null => TokenKind::Null,
            Token::Bool(_) => TokenKind::Bool,
            Token::Number(_) => TokenKind::Number,
            Token::String(_) => TokenKind::String,
            Token::StartObject => TokenKind::StartObject,
            Token::PropertyName(_) => TokenKind::PropertyName,
            Token::EndObject => TokenKind::EndObject,
            Token::StartArray => TokenKind::StartArray,
            Token::EndArray => TokenKind::EndArray,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Null => "Null",
            TokenKind::Bool => "Bool",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::StartObject => "StartObject",
            TokenKind::PropertyName => "PropertyName",
            TokenKind::EndObject => "EndObject",
            TokenKind::StartArray => "StartArray",
            TokenKind::EndArray => "EndArray",
            TokenKind::End => "End",
        };
        f.write_str(name)
    }
}

/// Reads JSON as a flat token stream.
///
/// The reader is positioned *before* the next token: [`peek`](Self::peek)
/// inspects it, [`read`](Self::read) consumes it. A converter reading one
/// value must leave the reader just past that value.
#[derive(Debug, Clone)]
pub struct JsonReader {
    tokens: Vec<Token>,
    pos: usize,
}

impl JsonReader {
    /// Tokenizes JSON text. Object member order is preserved.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Tokenizes an already parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        let mut tokens = Vec::new();
        flatten(value, &mut tokens);
        Self { tokens, pos: 0 }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the next token, or [`TokenKind::End`].
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::End, Token::kind)
    }

    /// Consumes and returns the next token.
    pub fn read(&mut self) -> Result<Token> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| Error::format("unexpected end of JSON input"))?;
        self.pos += 1;
        Ok(token)
    }

    /// Consumes a string token.
    pub fn read_string(&mut self) -> Result<String> {
        match self.read()? {
            Token::String(s) => Ok(s),
            other => Err(Error::format(format!(
                "expected String, got {}",
                other.kind()
            ))),
        }
    }

    /// Consumes a property name token.
    pub fn read_property_name(&mut self) -> Result<String> {
        match self.read()? {
            Token::PropertyName(s) => Ok(s),
            other => Err(Error::format(format!(
                "expected PropertyName, got {}",
                other.kind()
            ))),
        }
    }

    /// Consumes a token of the given kind.
    pub fn expect(&mut self, kind: TokenKind) -> Result<()> {
        let token = self.read()?;
        if token.kind() != kind {
            return Err(Error::format(format!(
                "expected {}, got {}",
                kind,
                token.kind()
            )));
        }
        Ok(())
    }

    /// Consumes one complete value, including nested objects and arrays.
    pub fn skip_value(&mut self) -> Result<()> {
        let mut depth = 0usize;
        loop {
            match self.read()? {
                Token::StartObject | Token::StartArray => depth += 1,
                Token::EndObject | Token::EndArray => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| Error::format("unbalanced JSON input"))?;
                }
                _ => {}
            }
            if depth == 0 {
                return Ok(());
            }
        }
    }

    /// Reports whether every token was consumed.
    pub fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

fn flatten(value: &Value, out: &mut Vec<Token>) {
    match value {
        Value::Null => out.push(Token::Null),
        Value::Bool(b) => out.push(Token::Bool(*b)),
        Value::Number(n) => out.push(Token::Number(n.clone())),
        Value::String(s) => out.push(Token::String(s.clone())),
        Value::Array(items) => {
            out.push(Token::StartArray);
            for item in items {
                flatten(item, out);
            }
            out.push(Token::EndArray);
        }
        Value::Object(map) => {
            out.push(Token::StartObject);
            for (key, item) in map {
                out.push(Token::PropertyName(key.clone()));
                flatten(item, out);
            }
            out.push(Token::EndObject);
        }
    }
}
