//! Visual-development catalogue for the Aurora component library.
//!
//! Every component family has one story in [`STORIES`]; [`ShowcaseApp`]
//! lists them as tabs under a themed root so visual refinements can be
//! reviewed side by side. The catalogue state (active story and theme) is a
//! serde payload the host may persist and restore.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod stories;

use aurora_ui::prelude::*;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use stories::{find_story, Story, STORIES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct ShowcaseState {
    story: String,
    theme: ThemeConfig,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            story: STORIES.first().map(|story| story.id).unwrap_or_default().to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl ShowcaseState {
    fn restore(payload: Value) -> Self {
        match serde_json::from_value::<Self>(payload) {
            Ok(state) if find_story(&state.story).is_some() => state,
            Ok(state) => {
                logging::warn!("unknown showcase story {:?}, showing the first", state.story);
                Self {
                    theme: state.theme,
                    ..Self::default()
                }
            }
            Err(err) => {
                logging::warn!("showcase state restore failed: {err}");
                Self::default()
            }
        }
    }
}

#[component]
/// Story catalogue.
pub fn ShowcaseApp(
    /// Previously persisted catalogue state.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives the catalogue state whenever it changes.
    #[prop(optional)]
    on_state_change: Option<Callback<Value>>,
) -> impl IntoView {
    let state = create_rw_signal(restored_state.map(ShowcaseState::restore).unwrap_or_default());
    let last_saved = create_rw_signal::<Option<String>>(None);
    last_saved.set(serde_json::to_string(&state.get_untracked()).ok());

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("showcase state serialize failed: {err}");
                return;
            }
        };
        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));
        if let (Some(on_state_change), Ok(value)) = (on_state_change, serde_json::to_value(&snapshot)) {
            on_state_change.call(value);
        }
    });

    let story = Signal::derive(move || state.with(|state| state.story.clone()));
    let light = Signal::derive(move || state.with(|state| state.theme.mode == ThemeMode::Light));
    let accent = Signal::derive(move || state.with(|state| state.theme.accent.token().to_string()));
    let theme = create_memo(move |_| state.with(|state| state.theme.clone()));

    move || {
        let theme = theme.get();
        view! {
            <AuroraProvider config=theme class="showcase">
                <header class="showcase-header">
                    <h1>"Aurora UI"</h1>
                    <Label html_for="showcase-light">"Light mode"</Label>
                    <Switch
                        id="showcase-light"
                        checked=light
                        on_checked_change=Callback::new(move |on: bool| {
                            state.update(|state| {
                                state.theme.mode = if on { ThemeMode::Light } else { ThemeMode::Dark };
                            });
                        })
                    />
                    <Select
                        value=accent
                        on_value_change=Callback::new(move |next: String| {
                            if let Some(accent) = Accent::ALL.iter().find(|accent| accent.token() == next) {
                                state.update(|state| state.theme.accent = *accent);
                            }
                        })
                    >
                        <SelectTrigger attr:aria-label="Accent">
                            <SelectValue />
                        </SelectTrigger>
                        <SelectContent>
                            {Accent::ALL
                                .iter()
                                .map(|&accent| view! { <SelectItem value=accent.token() /> })
                                .collect_view()}
                        </SelectContent>
                    </Select>
                </header>
                <Tabs
                    value=story
                    on_value_change=Callback::new(move |next: String| state.update(|state| state.story = next))
                    orientation=Orientation::Vertical
                >
                    <TabsList>
                        {STORIES
                            .iter()
                            .map(|story| view! { <TabsTrigger value=story.id>{story.title}</TabsTrigger> })
                            .collect_view()}
                    </TabsList>
                    {STORIES
                        .iter()
                        .map(|story| {
                            let render = story.render;
                            view! { <TabsContent value=story.id>{move || render()}</TabsContent> }
                        })
                        .collect_view()}
                </Tabs>
            </AuroraProvider>
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn render(f: impl FnOnce() -> View + 'static) -> String {
        leptos::ssr::render_to_string(f).to_string()
    }

    #[test]
    fn every_story_renders() {
        for story in STORIES {
            let render_story = story.render;
            let html = render(move || render_story());
            assert!(html.contains("aurora-"), "story {} rendered no components: {html}", story.id);
        }
    }

    #[test]
    fn story_ids_are_unique() {
        for (index, story) in STORIES.iter().enumerate() {
            assert!(
                STORIES[index + 1..].iter().all(|other| other.id != story.id),
                "duplicate story id {}",
                story.id
            );
        }
        assert_eq!(find_story("menus").map(|story| story.title), Some("Menus"));
        assert!(find_story("missing").is_none());
    }

    #[test]
    fn app_shows_restored_story_and_theme() {
        let payload = json!({ "story": "alerts", "theme": { "mode": "light", "accent": "amber" } });
        let html = render(move || view! { <ShowcaseApp restored_state=payload /> }.into_view());
        assert!(html.contains("data-aurora-theme=\"light\""), "{html}");
        assert!(html.contains("data-aurora-accent=\"amber\""), "{html}");
        assert!(html.contains("aurora-alert"), "{html}");
        assert!(!html.contains("aurora-button-spinner"), "{html}");
    }

    #[test]
    fn unknown_story_keeps_theme_and_falls_back() {
        let state = ShowcaseState::restore(json!({ "story": "gone", "theme": { "accent": "violet" } }));
        assert_eq!(state.story, "buttons");
        assert_eq!(state.theme.accent, Accent::Violet);
        assert_eq!(ShowcaseState::restore(json!("not an object")), ShowcaseState::default());
    }
}
