use super::error::{LexicalError, LexicalErrorType};
use super::token::{str_to_keyword, Literal, Token, TokenKind};
use crate::utils::prelude::{Reporter, SrcSpan};

pub type LexResult = std::result::Result<Token, LexicalError>;

fn is_alpha(ch: char) -> bool {
	ch.is_ascii_alphabetic() || ch == '_'
}

fn is_alphanumeric(ch: char) -> bool {
	is_alpha(ch) || ch.is_ascii_digit()
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = char>> {
	// byte offset of `ch`
	position: u32,
	start: u32,
	line: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	lexeme: String,
	finished: bool,
	input: T,
}

impl<T: Iterator<Item = char>> Lexer<T> {
	pub fn new(mut input: T) -> Self {
		let ch = input.next();
		let next_ch = input.next();

		Self {
			position: 0,
			start: 0,
			line: 1,
			ch,
			next_ch,
			lexeme: String::new(),
			finished: false,
			input,
		}
	}

	/// Drains the lexer. Lexical errors go to `reporter` and scanning carries
	/// on, so the result always ends with exactly one `Eof` token.
	pub fn scan(self, reporter: &mut Reporter) -> Vec<Token> {
		let mut tokens = vec![];

		for result in self {
			match result {
				Ok(token) => {
					tracing::trace!(%token, "token");
					tokens.push(token);
				},
				Err(err) => reporter.lexical_error(&err),
			}
		}

		tracing::debug!(tokens = tokens.len(), "scanned source");

		tokens
	}

	pub fn next_token(&mut self) -> LexResult {
		loop {
			self.start = self.position;
			self.lexeme.clear();

			let Some(ch) = self.next_char() else {
				return Ok(self.make_token(TokenKind::Eof, None));
			};

			let kind = match ch {
				'(' => TokenKind::LeftParen,
				')' => TokenKind::RightParen,
				'{' => TokenKind::LeftBrace,
				'}' => TokenKind::RightBrace,
				',' => TokenKind::Comma,
				'.' => TokenKind::Dot,
				'-' => TokenKind::Minus,
				'+' => TokenKind::Plus,
				';' => TokenKind::Semicolon,
				'*' => TokenKind::Star,
				'!' => self.either('=', TokenKind::BangEqual, TokenKind::Bang),
				'=' => self.either('=', TokenKind::EqualEqual, TokenKind::Equal),
				'<' => self.either('=', TokenKind::LessEqual, TokenKind::Less),
				'>' => self.either('=', TokenKind::GreaterEqual, TokenKind::Greater),
				'/' => {
					if self.matches('/') {
						self.skip_line_comment();
						continue;
					}

					TokenKind::Slash
				},
				' ' | '\r' | '\t' => continue,
				'\n' => {
					self.line += 1;
					continue;
				},
				'"' => return self.lex_string(),
				'0'..='9' => return Ok(self.lex_number()),
				c if is_alpha(c) => return Ok(self.lex_ident()),
				c => {
					return Err(LexicalError {
						error: LexicalErrorType::UnexpectedCharacter { ch: c },
						line: self.line,
						location: SrcSpan::from(self.start, self.position),
					});
				}
			};

			return Ok(self.make_token(kind, None));
		}
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch.take()?;

		self.position += ch.len_utf8() as u32;
		self.lexeme.push(ch);

		self.ch = self.next_ch.take();
		self.next_ch = self.input.next();

		Some(ch)
	}

	fn matches(&mut self, expected: char) -> bool {
		if self.ch == Some(expected) {
			self.next_char();
			true
		} else {
			false
		}
	}

	fn either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) -> TokenKind {
		if self.matches(expected) { matched } else { otherwise }
	}

	fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
		Token::new(
			kind,
			self.lexeme.clone(),
			literal,
			self.line,
			SrcSpan::from(self.start, self.position)
		)
	}

	fn skip_line_comment(&mut self) {
		while !matches!(self.ch, Some('\n') | None) {
			self.next_char();
		}
	}

	fn lex_ident(&mut self) -> Token {
		while self.ch.is_some_and(is_alphanumeric) {
			self.next_char();
		}

		let kind = str_to_keyword(&self.lexeme).unwrap_or(TokenKind::Identifier);

		self.make_token(kind, None)
	}

	fn lex_number(&mut self) -> Token {
		while self.ch.is_some_and(|ch| ch.is_ascii_digit()) {
			self.next_char();
		}

		// a trailing `.` without digits stays a separate DOT token
		if self.ch == Some('.') && self.next_ch.is_some_and(|ch| ch.is_ascii_digit()) {
			self.next_char();

			while self.ch.is_some_and(|ch| ch.is_ascii_digit()) {
				self.next_char();
			}
		}

		let value = self.lexeme.parse::<f64>()
			.unwrap_or_else(|err| unreachable!("number lexeme `{}` failed to parse: {err}", self.lexeme));

		self.make_token(TokenKind::Number, Some(Literal::Number(value)))
	}

	fn lex_string(&mut self) -> LexResult {
		while !matches!(self.ch, Some('"') | None) {
			if self.ch == Some('\n') {
				self.line += 1;
			}

			self.next_char();
		}

		if self.ch.is_none() {
			return Err(LexicalError {
				error: LexicalErrorType::UnterminatedString,
				line: self.line,
				location: SrcSpan::from(self.start, self.position)
			});
		}

		self.next_char(); // closing quote

		let value = self.lexeme[1..self.lexeme.len() - 1].to_string();

		Ok(self.make_token(TokenKind::String, Some(Literal::String(value))))
	}
}

impl<T: Iterator<Item = char>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		let result = self.next_token();

		if matches!(&result, Ok(token) if token.is_eof()) {
			self.finished = true;
		}

		Some(result)
	}
}

pub fn scan(src: &str, reporter: &mut Reporter) -> Vec<Token> {
	Lexer::new(src.chars()).scan(reporter)
}
