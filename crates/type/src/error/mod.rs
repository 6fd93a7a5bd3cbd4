// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;
mod r#macro;

use diagnostic::{Diagnostic, render::DefaultRenderer};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn kind(&self) -> ErrorKind {
		ErrorKind::from_code(&self.0.code)
	}
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		crate::error!(diagnostic::config::invalid_json(err))
	}
}

/// Broad classification of a diagnostic, derived from its code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Bad input detected while setting up a scan: scale factor, split
	/// bounds, table names.
	Validation,
	/// A requested column could not be mapped onto a generated one.
	Resolution,
	/// Registry and connector lookup failures.
	Connector,
	Config,
	Internal,
}

impl ErrorKind {
	pub fn from_code(code: &str) -> Self {
		match code.split('_').next() {
			Some("VALIDATION") => ErrorKind::Validation,
			Some("RESOLUTION") => ErrorKind::Resolution,
			Some("CONNECTOR") => ErrorKind::Connector,
			Some("CONFIG") => ErrorKind::Config,
			_ => ErrorKind::Internal,
		}
	}
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorKind::Validation => f.write_str("validation"),
			ErrorKind::Resolution => f.write_str("resolution"),
			ErrorKind::Connector => f.write_str("connector"),
			ErrorKind::Config => f.write_str("config"),
			ErrorKind::Internal => f.write_str("internal"),
		}
	}
}

/// Conversion of a domain error into a renderable [`Diagnostic`].
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}
