use log::debug;

use super::types::Category;
use crate::config::{AppConfig, Scope, ScopeCatalog, UNRESTRICTED_SCOPE};

/// Whether the view shows the whole (scoped) graph or only query hits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
	/// The whole (scoped) graph.
	#[default]
	ShowAll,
	/// Only nodes the latest query answer touched on.
	ShowQueryResults,
}

impl Mode {
	/// Stable id used by form controls.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::ShowAll => "all",
			Self::ShowQueryResults => "query",
		}
	}

	/// Parses a form value; anything unrecognized shows everything.
	pub fn parse(value: &str) -> Self {
		match value {
			"query" => Self::ShowQueryResults,
			_ => Self::ShowAll,
		}
	}
}

/// Per-category visibility toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryVisibility {
	/// Show airport nodes.
	pub airports: bool,
	/// Show airline nodes.
	pub airlines: bool,
	/// Show route links.
	pub routes: bool,
}

impl Default for CategoryVisibility {
	fn default() -> Self {
		Self {
			airports: true,
			airlines: true,
			routes: true,
		}
	}
}

impl CategoryVisibility {
	/// Whether `category` is toggled on.
	pub fn is_visible(&self, category: Category) -> bool {
		match category {
			Category::Airports => self.airports,
			Category::Airlines => self.airlines,
			Category::Routes => self.routes,
		}
	}

	fn slot(&mut self, category: Category) -> &mut bool {
		match category {
			Category::Airports => &mut self.airports,
			Category::Airlines => &mut self.airlines,
			Category::Routes => &mut self.routes,
		}
	}
}

/// User-controlled view knobs. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewConfig {
	/// Category toggles.
	pub show: CategoryVisibility,
	/// Active scope.
	pub scope: Scope,
	/// Everything or query hits only.
	pub mode: Mode,
}

impl ViewConfig {
	/// Defaults from the app config: everything visible, configured scope, show all.
	pub fn new(config: &AppConfig) -> Self {
		Self {
			scope: config.catalog().resolve(&config.default_scope),
			..Self::default()
		}
	}

	/// Toggles one category.
	pub fn set_category_visible(&mut self, category: Category, visible: bool) {
		*self.show.slot(category) = visible;
	}

	/// Switches scope; undeclared ids degrade to the unrestricted scope.
	pub fn set_scope(&mut self, scope_id: &str, catalog: &ScopeCatalog) {
		self.scope = catalog.resolve(scope_id);
		if fell_back(scope_id, &self.scope) {
			debug!("undeclared scope {scope_id:?}, showing all regions");
		}
	}

	/// Switches between everything and query hits.
	pub fn set_mode(&mut self, mode: Mode) {
		self.mode = mode;
	}
}

/// True when `requested` named something other than the unrestricted scope
/// but resolved to it.
fn fell_back(requested: &str, resolved: &Scope) -> bool {
	*resolved == Scope::All && !requested.trim().eq_ignore_ascii_case(UNRESTRICTED_SCOPE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_show_everything() {
		let view = ViewConfig::new(&AppConfig::default());
		assert_eq!(view.mode, Mode::ShowAll);
		assert_eq!(view.scope, Scope::All);
		assert!(Category::ALL.into_iter().all(|c| view.show.is_visible(c)));
	}

	#[test]
	fn configured_default_scope_is_applied() {
		let config = AppConfig {
			default_scope: "BR".into(),
			..AppConfig::default()
		};
		assert_eq!(ViewConfig::new(&config).scope.id(), "BR");
	}

	#[test]
	fn toggles_are_independent() {
		let mut view = ViewConfig::default();
		view.set_category_visible(Category::Airlines, false);
		assert!(view.show.airports);
		assert!(!view.show.airlines);
		assert!(view.show.routes);

		view.set_category_visible(Category::Airlines, true);
		assert_eq!(view.show, CategoryVisibility::default());
	}

	#[test]
	fn unknown_scope_fails_open() {
		let catalog = AppConfig::default().catalog();
		let mut view = ViewConfig::default();
		view.set_scope("BR", &catalog);
		assert_eq!(view.scope.id(), "BR");

		view.set_scope("atlantis", &catalog);
		assert_eq!(view.scope, Scope::All);
	}

	#[test]
	fn only_undeclared_scopes_count_as_fallback() {
		let catalog = AppConfig::default().catalog();
		assert!(!fell_back("br", &catalog.resolve("br")));
		assert!(!fell_back(" BR ", &catalog.resolve(" BR ")));
		assert!(!fell_back("all", &catalog.resolve("all")));
		assert!(fell_back("atlantis", &catalog.resolve("atlantis")));
		assert!(fell_back("", &catalog.resolve("")));
	}

	#[test]
	fn mode_ids_round_trip() {
		for mode in [Mode::ShowAll, Mode::ShowQueryResults] {
			assert_eq!(Mode::parse(mode.as_str()), mode);
		}
		assert_eq!(Mode::parse("bogus"), Mode::ShowAll);
	}
}
