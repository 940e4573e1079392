// self
use crate::_prelude::*;

/// Selling Partner API region grouping marketplaces behind one endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
	/// North America (US, CA, MX, BR).
	NorthAmerica,
	/// Europe, Middle East, India, and Africa.
	Europe,
	/// Far East (JP, AU, SG).
	FarEast,
}
impl Region {
	/// Short label used in SP-API hostnames.
	pub const fn as_str(self) -> &'static str {
		match self {
			Region::NorthAmerica => "na",
			Region::Europe => "eu",
			Region::FarEast => "fe",
		}
	}

	/// Production SP-API endpoint for the region.
	pub const fn endpoint(self) -> &'static str {
		match self {
			Region::NorthAmerica => "https://sellingpartnerapi-na.amazon.com",
			Region::Europe => "https://sellingpartnerapi-eu.amazon.com",
			Region::FarEast => "https://sellingpartnerapi-fe.amazon.com",
		}
	}

	/// Sandbox SP-API endpoint for the region.
	pub const fn sandbox_endpoint(self) -> &'static str {
		match self {
			Region::NorthAmerica => "https://sandbox.sellingpartnerapi-na.amazon.com",
			Region::Europe => "https://sandbox.sellingpartnerapi-eu.amazon.com",
			Region::FarEast => "https://sandbox.sellingpartnerapi-fe.amazon.com",
		}
	}
}
impl Display for Region {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Region {
	type Err = UnknownRegion;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"na" | "north_america" => Ok(Region::NorthAmerica),
			"eu" | "europe" => Ok(Region::Europe),
			"fe" | "far_east" => Ok(Region::FarEast),
			_ => Err(UnknownRegion(s.to_owned())),
		}
	}
}

/// Error returned when parsing an unrecognized region label.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Region `{0}` is not recognized.")]
pub struct UnknownRegion(pub String);
