//! View defaults and the catalog of declared scopes.
//!
//! The shipped configuration is embedded from `config/view.json`; a decoding
//! failure falls back to [`AppConfig::default`] rather than failing startup.

use log::warn;
use serde::Deserialize;

use crate::graph::{IngestError, IngestResult};

/// Id of the unrestricted scope.
pub const UNRESTRICTED_SCOPE: &str = "ALL";

const EMBEDDED_CONFIG: &str = include_str!("../config/view.json");

/// A named geographic restriction of the dataset.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Region {
	/// Scope id, matched case-insensitively.
	pub id: String,
	/// Display name for the scope picker.
	pub label: String,
	/// Country values that count as inside the region, compared case-insensitively.
	pub countries: Vec<String>,
}

impl Region {
	/// True when an airport with this `country` lies in the region.
	pub fn contains(&self, country: Option<&str>) -> bool {
		let Some(country) = country.map(str::trim) else {
			return false;
		};
		self.countries.iter().any(|c| c.eq_ignore_ascii_case(country))
	}
}

/// The scope a view is restricted to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Scope {
	/// No restriction.
	#[default]
	All,
	/// Restricted to one declared region.
	Region(Region),
}

impl Scope {
	/// Scope id as shown to form controls.
	pub fn id(&self) -> &str {
		match self {
			Self::All => UNRESTRICTED_SCOPE,
			Self::Region(region) => &region.id,
		}
	}
}

/// Scopes a user may pick from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScopeCatalog {
	regions: Vec<Region>,
}

impl ScopeCatalog {
	/// Catalog over the given declared regions.
	pub fn new(regions: Vec<Region>) -> Self {
		Self { regions }
	}

	/// Resolves a scope id; anything undeclared is unrestricted.
	pub fn resolve(&self, id: &str) -> Scope {
		let id = id.trim();
		self.regions
			.iter()
			.find(|r| r.id.eq_ignore_ascii_case(id))
			.cloned()
			.map_or(Scope::All, Scope::Region)
	}

	/// `(id, label)` pairs for a scope picker, unrestricted first.
	pub fn options(&self) -> Vec<(String, String)> {
		std::iter::once((UNRESTRICTED_SCOPE.to_owned(), "All regions".to_owned()))
			.chain(self.regions.iter().map(|r| (r.id.clone(), r.label.clone())))
			.collect()
	}
}

/// View defaults and declared regions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Scope a fresh view starts in.
	pub default_scope: String,
	/// Regions a user may restrict the view to.
	pub regions: Vec<Region>,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			default_scope: UNRESTRICTED_SCOPE.to_owned(),
			regions: vec![Region {
				id: "BR".to_owned(),
				label: "Brazil".to_owned(),
				countries: vec!["BR".to_owned(), "Brazil".to_owned(), "Brasil".to_owned()],
			}],
		}
	}
}

impl AppConfig {
	/// Decodes a config document; missing keys keep their defaults.
	pub fn from_json(json: &str) -> IngestResult<Self> {
		serde_json::from_str(json).map_err(IngestError::json("config"))
	}

	/// The configuration shipped with the app.
	pub fn embedded() -> Self {
		Self::from_json(EMBEDDED_CONFIG).unwrap_or_else(|err| {
			warn!("falling back to built-in view config: {err}");
			Self::default()
		})
	}

	/// The declared scopes as a catalog.
	pub fn catalog(&self) -> ScopeCatalog {
		ScopeCatalog::new(self.regions.clone())
	}
}
