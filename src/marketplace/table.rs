// self
use crate::marketplace::{Marketplace, Region};

macro_rules! marketplace {
	($id:literal, $country:literal, $base:literal, $region:ident) => {
		Marketplace {
			id: $id,
			country_code: $country,
			base_authorization_url: $base,
			region: Region::$region,
		}
	};
}

pub(super) static MARKETPLACES: &[Marketplace] = &[
	// North America
	marketplace!("A2EUQ1WTGCTBG2", "CA", "https://sellercentral.amazon.ca", NorthAmerica),
	marketplace!("ATVPDKIKX0DER", "US", "https://sellercentral.amazon.com", NorthAmerica),
	marketplace!("A1AM78C64UM0Y8", "MX", "https://sellercentral.amazon.com.mx", NorthAmerica),
	marketplace!("A2Q3Y263D00KWC", "BR", "https://sellercentral.amazon.com.br", NorthAmerica),
	// Europe
	marketplace!("A28R8C7NBKEWEA", "IE", "https://sellercentral.amazon.ie", Europe),
	marketplace!("A1RKKUPIHCS9HS", "ES", "https://sellercentral-europe.amazon.com", Europe),
	marketplace!("A1F83G8C2ARO7P", "UK", "https://sellercentral-europe.amazon.com", Europe),
	marketplace!("A13V1IB3VIYZZH", "FR", "https://sellercentral-europe.amazon.com", Europe),
	marketplace!("AMEN7PMS3EDWL", "BE", "https://sellercentral.amazon.com.be", Europe),
	marketplace!("A1805IZSGTT6HS", "NL", "https://sellercentral.amazon.nl", Europe),
	marketplace!("A1PA6795UKMFR9", "DE", "https://sellercentral-europe.amazon.com", Europe),
	marketplace!("APJ6JRA9NG5V4", "IT", "https://sellercentral-europe.amazon.com", Europe),
	marketplace!("A2NODRKZP88ZB9", "SE", "https://sellercentral.amazon.se", Europe),
	marketplace!("AE08WJ6YKNBMC", "ZA", "https://sellercentral.amazon.co.za", Europe),
	marketplace!("A1C3SOZRARQ6R3", "PL", "https://sellercentral.amazon.pl", Europe),
	marketplace!("ARBP9OOSHTCHU", "EG", "https://sellercentral.amazon.eg", Europe),
	marketplace!("A33AVAJ2PDY3EV", "TR", "https://sellercentral.amazon.com.tr", Europe),
	marketplace!("A17E79C6D8DWNP", "SA", "https://sellercentral.amazon.sa", Europe),
	marketplace!("A2VIGQ35RCS4UG", "AE", "https://sellercentral.amazon.ae", Europe),
	marketplace!("A21TJRUUN4KGV", "IN", "https://sellercentral.amazon.in", Europe),
	// Far East
	marketplace!("A19VAU5U5O7RUS", "SG", "https://sellercentral.amazon.sg", FarEast),
	marketplace!("A39IBJ37TRP1C6", "AU", "https://sellercentral.amazon.com.au", FarEast),
	marketplace!("A1VC38T7YXB528", "JP", "https://sellercentral.amazon.co.jp", FarEast),
];
