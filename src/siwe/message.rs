// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Canonical sign-in message construction and parsing.
//!
//! The message binds a claimed wallet address, a freshness nonce, the serving
//! domain, and a timestamp into one human-readable statement that the wallet
//! signs with EIP-191 personal-sign:
//!
//! ```text
//! {domain} wants you to sign in with your Ethereum account:
//! {address}
//!
//! {statement}
//!
//! URI: {uri}
//! Version: 1
//! Chain ID: {chain_id}
//! Nonce: {nonce}
//! Issued At: {issued_at}
//! ```
//!
//! The line order is load-bearing. The signature covers the literal bytes, so
//! the parser walks the template positionally and rejects anything that does
//! not match it exactly.

use std::fmt;
use std::str::FromStr;

/// Fixed preamble following the domain on the first line.
const PREAMBLE: &str = " wants you to sign in with your Ethereum account:";

/// The only message version this service understands.
pub const VERSION: &str = "1";

/// Errors raised while building or parsing a sign-in message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("domain must be a non-empty single line")]
    InvalidDomain,

    #[error("address must be a 0x-prefixed 40-character hex string")]
    InvalidAddress,

    #[error("statement must be a non-empty single line")]
    InvalidStatement,

    #[error("URI must be a non-empty single line")]
    InvalidUri,

    #[error("chain id must be a positive integer")]
    InvalidChainId,

    #[error("nonce must be non-empty and alphanumeric")]
    InvalidNonce,

    #[error("issued-at must be an RFC 3339 timestamp")]
    InvalidTimestamp,

    #[error("unsupported message version: {0}")]
    UnsupportedVersion(String),

    #[error("malformed sign-in message: {0}")]
    Malformed(&'static str),
}

/// A sign-in message, immutable once constructed.
///
/// Construct with [`SiweMessage::new`] (which validates every field) and
/// serialize with `to_string()`. Parsing the serialized form back yields the
/// identical fields; re-serializing yields the identical bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiweMessage {
    /// Serving origin's host, e.g. `localhost:3000`.
    pub domain: String,
    /// Claimed wallet address, `0x` + 40 hex characters.
    pub address: String,
    /// Free-text purpose line shown in the wallet prompt.
    pub statement: String,
    /// Origin URI of the requesting application.
    pub uri: String,
    /// Target network identifier, strictly positive.
    pub chain_id: u64,
    /// Single-use freshness token.
    pub nonce: String,
    /// RFC 3339 timestamp of message creation.
    pub issued_at: String,
}

impl SiweMessage {
    /// Build a validated message. Pure function of its inputs.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        domain: impl Into<String>,
        address: impl Into<String>,
        statement: impl Into<String>,
        uri: impl Into<String>,
        chain_id: u64,
        nonce: impl Into<String>,
        issued_at: impl Into<String>,
    ) -> Result<Self, MessageError> {
        let message = Self {
            domain: domain.into(),
            address: address.into(),
            statement: statement.into(),
            uri: uri.into(),
            chain_id,
            nonce: nonce.into(),
            issued_at: issued_at.into(),
        };
        message.validate()?;
        Ok(message)
    }

    fn validate(&self) -> Result<(), MessageError> {
        if self.domain.is_empty() || self.domain.contains('\n') {
            return Err(MessageError::InvalidDomain);
        }
        if !is_hex_address(&self.address) {
            return Err(MessageError::InvalidAddress);
        }
        if self.statement.is_empty() || self.statement.contains('\n') {
            return Err(MessageError::InvalidStatement);
        }
        if self.uri.is_empty() || self.uri.contains('\n') {
            return Err(MessageError::InvalidUri);
        }
        if self.chain_id == 0 {
            return Err(MessageError::InvalidChainId);
        }
        if self.nonce.is_empty() || !self.nonce.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MessageError::InvalidNonce);
        }
        if chrono::DateTime::parse_from_rfc3339(&self.issued_at).is_err() {
            return Err(MessageError::InvalidTimestamp);
        }
        Ok(())
    }
}

impl fmt::Display for SiweMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{domain}{preamble}\n\
             {address}\n\
             \n\
             {statement}\n\
             \n\
             URI: {uri}\n\
             Version: {version}\n\
             Chain ID: {chain_id}\n\
             Nonce: {nonce}\n\
             Issued At: {issued_at}",
            domain = self.domain,
            preamble = PREAMBLE,
            address = self.address,
            statement = self.statement,
            uri = self.uri,
            version = VERSION,
            chain_id = self.chain_id,
            nonce = self.nonce,
            issued_at = self.issued_at,
        )
    }
}

impl FromStr for SiweMessage {
    type Err = MessageError;

    /// Strict positional parse of the canonical template.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.split('\n');

        let domain = lines
            .next()
            .and_then(|line| line.strip_suffix(PREAMBLE))
            .ok_or(MessageError::Malformed(
                "first line must be `<domain> wants you to sign in with your Ethereum account:`",
            ))?;
        let address = lines
            .next()
            .ok_or(MessageError::Malformed("missing address line"))?;
        expect_blank(lines.next(), "expected blank line after the address")?;
        let statement = lines
            .next()
            .ok_or(MessageError::Malformed("missing statement line"))?;
        expect_blank(lines.next(), "expected blank line after the statement")?;
        let uri = expect_field(lines.next(), "URI: ")?;
        let version = expect_field(lines.next(), "Version: ")?;
        if version != VERSION {
            return Err(MessageError::UnsupportedVersion(version.to_string()));
        }
        let chain_id: u64 = expect_field(lines.next(), "Chain ID: ")?
            .parse()
            .map_err(|_| MessageError::InvalidChainId)?;
        let nonce = expect_field(lines.next(), "Nonce: ")?;
        let issued_at = expect_field(lines.next(), "Issued At: ")?;
        if lines.next().is_some() {
            return Err(MessageError::Malformed("unexpected content after the issued-at line"));
        }

        Self::new(domain, address, statement, uri, chain_id, nonce, issued_at)
    }
}

fn expect_blank(line: Option<&str>, context: &'static str) -> Result<(), MessageError> {
    match line {
        Some("") => Ok(()),
        _ => Err(MessageError::Malformed(context)),
    }
}

fn expect_field<'a>(line: Option<&'a str>, prefix: &'static str) -> Result<&'a str, MessageError> {
    line.and_then(|line| line.strip_prefix(prefix))
        .ok_or(MessageError::Malformed("field line missing or out of order"))
}

fn is_hex_address(address: &str) -> bool {
    address.len() == 42
        && address.starts_with("0x")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f4aB12";

    fn message() -> SiweMessage {
        SiweMessage::new(
            "localhost:3000",
            ADDRESS,
            "Sign in to Digi-tionary",
            "http://localhost:3000",
            1,
            "aBcDeF1234567890",
            "2026-01-15T10:30:00.000Z",
        )
        .expect("valid message")
    }

    #[test]
    fn serializes_to_the_canonical_template() {
        let expected = "\
localhost:3000 wants you to sign in with your Ethereum account:
0x742d35Cc6634C0532925a3b844Bc9e7595f4aB12

Sign in to Digi-tionary

URI: http://localhost:3000
Version: 1
Chain ID: 1
Nonce: aBcDeF1234567890
Issued At: 2026-01-15T10:30:00.000Z";

        assert_eq!(message().to_string(), expected);
    }

    #[test]
    fn serialization_is_deterministic() {
        assert_eq!(message().to_string(), message().to_string());
    }

    #[test]
    fn parse_round_trip_is_byte_identical() {
        let serialized = message().to_string();
        let parsed: SiweMessage = serialized.parse().expect("parses back");
        assert_eq!(parsed, message());
        assert_eq!(parsed.to_string(), serialized);
    }

    #[test]
    fn rejects_reordered_fields() {
        // Swap the Nonce and Chain ID lines; every field is still present.
        let reordered = message()
            .to_string()
            .replace(
                "Chain ID: 1\nNonce: aBcDeF1234567890",
                "Nonce: aBcDeF1234567890\nChain ID: 1",
            );
        assert!(reordered.parse::<SiweMessage>().is_err());
    }

    #[test]
    fn rejects_trailing_content() {
        let trailing = format!("{}\nExpiration Time: 2026-01-16T10:30:00Z", message());
        assert_eq!(
            trailing.parse::<SiweMessage>().unwrap_err(),
            MessageError::Malformed("unexpected content after the issued-at line"),
        );
    }

    #[test]
    fn rejects_missing_blank_line() {
        let squashed = message().to_string().replacen("\n\n", "\n", 1);
        assert!(squashed.parse::<SiweMessage>().is_err());
    }

    #[test]
    fn rejects_unknown_version() {
        let wrong_version = message().to_string().replace("Version: 1", "Version: 2");
        assert_eq!(
            wrong_version.parse::<SiweMessage>().unwrap_err(),
            MessageError::UnsupportedVersion("2".to_string()),
        );
    }

    #[test]
    fn rejects_invalid_address() {
        for bad in ["", "0x123", "742d35Cc6634C0532925a3b844Bc9e7595f4aB12", "0xZZZd35Cc6634C0532925a3b844Bc9e7595f4aB12"] {
            let result = SiweMessage::new(
                "localhost:3000",
                bad,
                "Sign in to Digi-tionary",
                "http://localhost:3000",
                1,
                "aBcDeF1234567890",
                "2026-01-15T10:30:00Z",
            );
            assert_eq!(result.unwrap_err(), MessageError::InvalidAddress, "address: {bad:?}");
        }
    }

    #[test]
    fn rejects_empty_or_non_alphanumeric_nonce() {
        for bad in ["", "with space", "semi;colon"] {
            let result = SiweMessage::new(
                "localhost:3000",
                ADDRESS,
                "Sign in to Digi-tionary",
                "http://localhost:3000",
                1,
                bad,
                "2026-01-15T10:30:00Z",
            );
            assert_eq!(result.unwrap_err(), MessageError::InvalidNonce, "nonce: {bad:?}");
        }
    }

    #[test]
    fn rejects_zero_chain_id() {
        let result = SiweMessage::new(
            "localhost:3000",
            ADDRESS,
            "Sign in to Digi-tionary",
            "http://localhost:3000",
            0,
            "aBcDeF1234567890",
            "2026-01-15T10:30:00Z",
        );
        assert_eq!(result.unwrap_err(), MessageError::InvalidChainId);
    }

    #[test]
    fn rejects_non_rfc3339_timestamp() {
        let result = SiweMessage::new(
            "localhost:3000",
            ADDRESS,
            "Sign in to Digi-tionary",
            "http://localhost:3000",
            1,
            "aBcDeF1234567890",
            "January 15th, 2026",
        );
        assert_eq!(result.unwrap_err(), MessageError::InvalidTimestamp);
    }

    #[test]
    fn accepts_javascript_toisostring_timestamps() {
        // The browser composes `new Date().toISOString()`.
        let result = SiweMessage::new(
            "localhost:3000",
            ADDRESS,
            "Sign in to Digi-tionary",
            "http://localhost:3000",
            1,
            "aBcDeF1234567890",
            "2026-08-04T12:34:56.789Z",
        );
        assert!(result.is_ok());
    }

    #[test]
    fn garbage_does_not_parse() {
        assert!("hello world".parse::<SiweMessage>().is_err());
        assert!("".parse::<SiweMessage>().is_err());
    }
}
