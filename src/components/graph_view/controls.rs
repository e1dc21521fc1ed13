use leptos::prelude::*;

use crate::config::ScopeCatalog;
use crate::graph::{Category, Mode, ViewConfig};

fn category_label(category: Category) -> &'static str {
	match category {
		Category::Airports => "Airports",
		Category::Airlines => "Airlines",
		Category::Routes => "Routes",
	}
}

#[component]
pub fn ViewControls(config: RwSignal<ViewConfig>, catalog: ScopeCatalog) -> impl IntoView {
	let scope_options = catalog.options();

	let toggles = Category::ALL
		.into_iter()
		.map(|category| {
			view! {
				<label class="toggle">
					<input
						type="checkbox"
						prop:checked=move || config.with(|c| c.show.is_visible(category))
						on:change=move |ev| {
							let visible = event_target_checked(&ev);
							config.update(|c| c.set_category_visible(category, visible));
						}
					/>
					{category_label(category)}
				</label>
			}
		})
		.collect_view();

	view! {
		<fieldset class="view-controls">
			<legend>"View"</legend>
			<div class="toggles">{toggles}</div>
			<label>
				"Scope "
				<select
					prop:value=move || config.with(|c| c.scope.id().to_owned())
					on:change=move |ev| {
						let scope_id = event_target_value(&ev);
						config.update(|c| c.set_scope(&scope_id, &catalog));
					}
				>
					{scope_options
						.into_iter()
						.map(|(id, label)| view! { <option value=id>{label}</option> })
						.collect_view()}
				</select>
			</label>
			<label>
				"Show "
				<select
					prop:value=move || config.with(|c| c.mode.as_str().to_owned())
					on:change=move |ev| {
						let mode = Mode::parse(&event_target_value(&ev));
						config.update(|c| c.set_mode(mode));
					}
				>
					<option value={Mode::ShowAll.as_str()}>"Everything"</option>
					<option value={Mode::ShowQueryResults.as_str()}>"Query results only"</option>
				</select>
			</label>
		</fieldset>
	}
}
