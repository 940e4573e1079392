//! Marketplace registry mapping marketplace identifiers to consent URLs and regions.
//!
//! The registry is a read-only table built at compile time. [`MarketplaceRegistry::builtin`]
//! covers every marketplace the Selling Partner API exposes; callers that need a different
//! table (sandboxes, tests) can wrap their own `'static` slice with
//! [`MarketplaceRegistry::new`].

/// Selling Partner API regions.
pub mod region;
mod table;

pub use region::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Immutable description of a single marketplace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Marketplace {
	/// Marketplace identifier, e.g. `ATVPDKIKX0DER`.
	pub id: &'static str,
	/// ISO 3166-1 alpha-2 country code (`GB` is reported as `UK`, matching Amazon).
	pub country_code: &'static str,
	/// Seller Central base URL hosting the consent page.
	pub base_authorization_url: &'static str,
	/// Region whose SP-API endpoint serves this marketplace.
	pub region: Region,
}
impl Marketplace {
	/// Path of the consent page relative to [`Marketplace::base_authorization_url`].
	pub const CONSENT_PATH: &'static str = "/apps/authorize/consent";

	/// Returns the consent page URL without any query string.
	pub fn consent_url(&self) -> Result<Url, ConfigError> {
		let base = self.base_authorization_url.trim_end_matches('/');
		let raw = format!("{base}{}", Self::CONSENT_PATH);

		Url::parse(&raw).map_err(|source| ConfigError::InvalidMarketplaceUrl {
			marketplace: self.id.to_owned(),
			source,
		})
	}
}

/// Read-only lookup table of marketplaces.
#[derive(Clone, Copy, Debug)]
pub struct MarketplaceRegistry {
	marketplaces: &'static [Marketplace],
}
impl MarketplaceRegistry {
	/// Wraps a caller-provided static table.
	pub const fn new(marketplaces: &'static [Marketplace]) -> Self {
		Self { marketplaces }
	}

	/// Registry containing every marketplace the Selling Partner API supports.
	pub fn builtin() -> &'static Self {
		static BUILTIN: MarketplaceRegistry = MarketplaceRegistry::new(table::MARKETPLACES);

		&BUILTIN
	}

	/// Looks up a marketplace by identifier.
	pub fn get(&self, id: &str) -> Option<&'static Marketplace> {
		self.marketplaces.iter().find(|marketplace| marketplace.id == id)
	}

	/// Looks up a marketplace, failing with [`ConfigError::UnknownMarketplace`].
	pub fn resolve(&self, id: &str) -> Result<&'static Marketplace, ConfigError> {
		self.get(id).ok_or_else(|| ConfigError::UnknownMarketplace(id.to_owned()))
	}

	/// Looks up a marketplace by its country code (case-insensitive).
	pub fn by_country_code(&self, code: &str) -> Option<&'static Marketplace> {
		self.marketplaces
			.iter()
			.find(|marketplace| marketplace.country_code.eq_ignore_ascii_case(code))
	}

	/// Iterates over all marketplaces in table order.
	pub fn iter(&self) -> impl Iterator<Item = &'static Marketplace> {
		self.marketplaces.iter()
	}

	/// Iterates over the marketplaces served by `region`.
	pub fn in_region(&self, region: Region) -> impl Iterator<Item = &'static Marketplace> {
		self.marketplaces.iter().filter(move |marketplace| marketplace.region == region)
	}

	/// Number of registered marketplaces.
	pub fn len(&self) -> usize {
		self.marketplaces.len()
	}

	/// Returns `true` when the registry holds no marketplaces.
	pub fn is_empty(&self) -> bool {
		self.marketplaces.is_empty()
	}
}
