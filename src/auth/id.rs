//! Amazon identifiers carried through configuration and the consent redirect.
//!
//! Marketplace and selling partner identifiers are opaque uppercase alphanumeric tokens such as
//! `ATVPDKIKX0DER` or `A3SELLER0EXAMPLE`. Anything else is rejected when the value is created.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

const MAX_LEN: usize = 32;

/// Error returned when an identifier does not look like an Amazon identifier.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// The value was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Identifier family.
		kind: &'static str,
	},
	/// The value contains something other than `A-Z` and `0-9`.
	#[error("{kind} identifier contains invalid character {found:?}.")]
	InvalidCharacter {
		/// Identifier family.
		kind: &'static str,
		/// First offending character.
		found: char,
	},
	/// The value is longer than any identifier Amazon issues.
	#[error("{kind} identifier exceeds {max} characters.", max = MAX_LEN)]
	TooLong {
		/// Identifier family.
		kind: &'static str,
	},
}

fn check(kind: &'static str, value: &str) -> Result<(), IdentifierError> {
	if value.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if let Some(found) = value.chars().find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit())) {
		return Err(IdentifierError::InvalidCharacter { kind, found });
	}
	if value.len() > MAX_LEN {
		return Err(IdentifierError::TooLong { kind });
	}

	Ok(())
}

macro_rules! amazon_id {
	($(#[$meta:meta])* $name:ident, $kind:literal) => {
		$(#[$meta])*
		#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Validates and wraps `value`.
			pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
				let value = value.into();

				check($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &str {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				Self::new(value)
			}
		}
		impl From<$name> for String {
			fn from(id: $name) -> Self {
				id.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.debug_tuple(stringify!($name)).field(&self.0).finish()
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
	};
}

amazon_id! {
	/// Amazon marketplace identifier, e.g. `ATVPDKIKX0DER` for amazon.com.
	MarketplaceId, "Marketplace"
}
amazon_id! {
	/// Seller or vendor identifier reported as `selling_partner_id` on the consent redirect.
	SellingPartnerId, "Selling partner"
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn marketplace_ids_from_the_registry_are_valid() {
		for marketplace in crate::marketplace::MarketplaceRegistry::builtin().iter() {
			assert!(MarketplaceId::new(marketplace.id).is_ok(), "{}", marketplace.id);
		}
	}

	#[test]
	fn malformed_values_are_rejected() {
		assert_eq!(MarketplaceId::new(""), Err(IdentifierError::Empty { kind: "Marketplace" }));
		assert_eq!(
			MarketplaceId::new("atvpdkikx0der"),
			Err(IdentifierError::InvalidCharacter { kind: "Marketplace", found: 'a' })
		);
		assert_eq!(
			SellingPartnerId::new("A3 SELLER"),
			Err(IdentifierError::InvalidCharacter { kind: "Selling partner", found: ' ' })
		);
		assert_eq!(
			SellingPartnerId::new("A".repeat(MAX_LEN + 1)),
			Err(IdentifierError::TooLong { kind: "Selling partner" })
		);
	}

	#[test]
	fn serde_goes_through_validation() {
		let id: MarketplaceId = serde_json::from_str("\"A1PA6795UKMFR9\"")
			.expect("Marketplace id should deserialize.");

		assert_eq!(&*id, "A1PA6795UKMFR9");
		assert_eq!(format!("{id:?}"), "MarketplaceId(\"A1PA6795UKMFR9\")");
		assert_eq!(
			serde_json::to_string(&id).expect("Marketplace id should serialize."),
			"\"A1PA6795UKMFR9\""
		);
		assert!(serde_json::from_str::<MarketplaceId>("\"us-east\"").is_err());
	}
}
