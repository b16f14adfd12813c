/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use proc_macro2::{Ident, Span, TokenStream, TokenTree};
use quote::ToTokens;

use super::{bail, error, ident, is_punct, path_is_single};
use crate::ParseResult;

pub(crate) type KvMap = HashMap<Ident, Option<KvValue>>;

/// Struct to parse attributes like `#[attr(key, key2 = value)]` in a user-friendly way.
pub(crate) struct KvParser {
    map: KvMap,
    span: Span,
}

#[allow(dead_code)]
impl KvParser {
    /// Like `parse()`, but fails if the attribute is absent.
    ///
    /// `context` is used for the span in error messages.
    pub fn parse_required(
        attributes: &[venial::Attribute],
        expected: &str,
        context: impl ToTokens,
    ) -> ParseResult<Self> {
        match Self::parse(attributes, expected)? {
            Some(result) => Ok(result),
            None => bail!(context, "expected attribute #[{expected}], but not present"),
        }
    }

    /// Create a new parser which checks for presence of an `#[expected]` attribute.
    ///
    /// Returns `Ok(None)` if the attribute is not present.
    pub fn parse(attributes: &[venial::Attribute], expected: &str) -> ParseResult<Option<Self>> {
        let mut found_attr: Option<Self> = None;

        for attr in attributes.iter() {
            if path_is_single(&attr.path, expected) {
                if found_attr.is_some() {
                    return bail!(attr, "only a single #[{expected}] attribute allowed");
                }

                found_attr = Some(Self {
                    span: attr.tk_brackets.span,
                    map: ParserState::parse(expected, &attr.value)?,
                });
            }
        }

        Ok(found_attr)
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// - For missing keys, returns `None`.
    /// - For a key with no value, returns `Some(None)`.
    /// - For a key with a value, returns `Some(value)`.
    pub fn handle_any(&mut self, key: &str) -> Option<Option<KvValue>> {
        self.map.remove(&ident(key))
    }

    /// Handles a key that can only occur without a value, e.g. `#[attr(toggle)]`. Returns whether the key is present.
    pub fn handle_alone(&mut self, key: &str) -> ParseResult<bool> {
        match self.handle_any(key) {
            None => Ok(false),
            Some(None) => Ok(true),
            Some(Some(value)) => bail!(&value.tokens[0], "key `{key}` should not have a value"),
        }
    }

    /// Handles an optional key that can only occur with an identifier as the value.
    pub fn handle_ident(&mut self, key: &str) -> ParseResult<Option<Ident>> {
        match self.map.remove_entry(&ident(key)) {
            None => Ok(None),
            // The `key` that was removed from the map has the correct span.
            Some((key, value)) => match value {
                None => bail!(key, "expected `{key}` to be followed by `= identifier`"),
                Some(value) => Ok(Some(value.ident()?)),
            },
        }
    }

    /// Handles an optional key that can occur with arbitrary tokens as the value.
    pub fn handle_expr(&mut self, key: &str) -> ParseResult<Option<TokenStream>> {
        match self.map.remove_entry(&ident(key)) {
            None => Ok(None),
            Some((key, value)) => match value {
                None => bail!(key, "expected `{key}` to be followed by `= expression`"),
                Some(value) => Ok(Some(value.tokens.into_iter().collect())),
            },
        }
    }

    /// Explicit "pre-destructor" that must be called, and checks that all map entries have been consumed.
    pub fn finish(self) -> ParseResult<()> {
        let mut errors = self
            .map
            .keys()
            .map(|ident| error!(ident, "unrecognized key `{ident}`"));

        match errors.next() {
            None => Ok(()),
            Some(first) => Err(errors.fold(first, |mut acc, next| {
                acc.combine(next);
                acc
            })),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct KvValue {
    /// Tokens comprising this value. Guaranteed to be nonempty.
    tokens: Vec<TokenTree>,
}

impl KvValue {
    fn new(tokens: Vec<TokenTree>) -> Self {
        assert!(!tokens.is_empty());
        Self { tokens }
    }

    pub fn ident(mut self) -> ParseResult<Ident> {
        if self.tokens.len() > 1 {
            return bail!(&self.tokens[1], "expected a single identifier, not an expression");
        }

        match self.tokens.remove(0) {
            TokenTree::Ident(ident) => Ok(ident),
            tt => bail!(tt, "expected identifier"),
        }
    }
}

struct ParserState<'a> {
    attr_name: &'a str,
    tokens: std::slice::Iter<'a, TokenTree>,
    prev: Option<&'a TokenTree>,
    cur: Option<&'a TokenTree>,
}

impl<'a> ParserState<'a> {
    fn parse(attr_name: &'a str, attr_value: &'a venial::AttributeValue) -> ParseResult<KvMap> {
        let mut tokens = match attr_value {
            venial::AttributeValue::Equals(punct, _tokens) => {
                return bail!(punct, "expected `(` or `]`");
            }
            _ => attr_value.get_value_tokens().iter(),
        };
        let cur = tokens.next();

        let parser = Self {
            attr_name,
            tokens,
            prev: None,
            cur,
        };

        parser.parse_map()
    }

    fn parse_map(mut self) -> ParseResult<KvMap> {
        let mut map: KvMap = HashMap::new();

        while let Some(cur) = self.cur {
            match cur {
                TokenTree::Ident(key) => {
                    self.next();
                    let value = self.parse_opt_value(key)?;
                    if map.contains_key(key) {
                        return bail!(key, "duplicate key `{key}`");
                    }
                    map.insert(key.clone(), value);
                }
                _ => {
                    let attr = self.attr_name;
                    return bail!(cur, "expected identifier as key in #[{attr}]");
                }
            }
        }

        Ok(map)
    }

    fn parse_opt_value(&mut self, key: &Ident) -> ParseResult<Option<KvValue>> {
        let value = match self.cur {
            // End of input directly after a key.
            None => None,
            Some(tt) if is_punct(tt, ',') => {
                self.next();
                None
            }
            Some(tt) if is_punct(tt, '=') => {
                self.next();
                Some(self.parse_value()?)
            }
            Some(tt) => {
                return bail!(tt, "expected next argument, or `= value` following `{key}`");
            }
        };
        Ok(value)
    }

    fn parse_value(&mut self) -> ParseResult<KvValue> {
        let mut tokens = Vec::new();
        while let Some(cur) = self.cur {
            if is_punct(cur, ',') {
                self.next();
                break;
            }
            tokens.push(cur.clone());
            self.next();
        }

        if tokens.is_empty() {
            // `cur` might be `None` at this point, so we point at the previous token instead.
            return match self.prev {
                Some(prev) => bail!(prev, "expected value after `=`"),
                None => bail!(self.attr_name, "expected value after `=`"),
            };
        }

        Ok(KvValue::new(tokens))
    }

    fn next(&mut self) {
        self.prev = self.cur;
        self.cur = self.tokens.next();
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parse(input_tokens: TokenStream) -> ParseResult<Option<KvParser>> {
        let input = quote! {
            #input_tokens
            fn func();
        };

        let venial::Item::Function(function) = venial::parse_item(input).expect("parse") else {
            panic!("expected function");
        };

        KvParser::parse(&function.attributes, "attr")
    }

    #[test]
    fn absent_attribute() {
        let parser = parse(quote! { #[other(key)] }).expect("parse");
        assert!(parser.is_none());
    }

    #[test]
    fn keys_and_values() {
        let mut parser = parse(quote! { #[attr(alone, name = value, expr = a + b)] })
            .expect("parse")
            .expect("attribute present");

        assert!(parser.handle_alone("alone").expect("alone"));
        assert_eq!(
            parser.handle_ident("name").expect("ident").map(|i| i.to_string()),
            Some("value".to_string())
        );
        assert_eq!(
            parser.handle_expr("expr").expect("expr").map(|e| e.to_string()),
            Some("a + b".to_string())
        );
        assert!(parser.handle_ident("missing").expect("missing").is_none());
        parser.finish().expect("all keys consumed");
    }

    #[test]
    fn ident_rejects_expression() {
        let mut parser = parse(quote! { #[attr(name = a + b)] })
            .expect("parse")
            .expect("attribute present");

        assert!(parser.handle_ident("name").is_err());
    }

    #[test]
    fn unconsumed_keys_are_errors() {
        let parser = parse(quote! { #[attr(unknown = x)] })
            .expect("parse")
            .expect("attribute present");

        assert!(parser.finish().is_err());
    }

    #[test]
    fn duplicate_keys_are_errors() {
        assert!(parse(quote! { #[attr(key = a, key = b)] }).is_err());
        assert!(parse(quote! { #[attr(key)] #[attr(other)] }).is_err());
    }

    #[test]
    fn missing_value_is_error() {
        assert!(parse(quote! { #[attr(key =)] }).is_err());
    }
}
