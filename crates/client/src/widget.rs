//! The social-profile widget: load-with-fallback, an instance-owned profile
//! cache, and the DOM entry points used by host pages.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use helvania_shared::{FetchError, SocialProfile};

use crate::log_warn;
use crate::profile_client::ProfileClient;

/// Fetches, caches and renders player social profiles.
///
/// The cache is owned by the instance and keyed by the player id the caller
/// asked for. Entries are only ever overwritten by a fresh load; there is no
/// eviction and no coalescing of concurrent loads for the same id (last
/// write wins).
#[derive(Debug, Clone, Default)]
pub struct SocialProfileWidget {
    client: ProfileClient,
    profiles: Rc<RefCell<HashMap<String, SocialProfile>>>,
}

impl SocialProfileWidget {
    /// Widget addressing profile documents on the current origin.
    pub fn new() -> Self {
        Self::with_client(ProfileClient::new())
    }

    /// Widget using a preconfigured client (e.g. a non-default base URL).
    pub fn with_client(client: ProfileClient) -> Self {
        Self {
            client,
            profiles: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Load a player's profile, substituting the neutral default on any
    /// fetch failure. Never fails outward; the only trace of a failure is a
    /// warning log. The result (fetched or default) replaces whatever the
    /// cache held for this player.
    pub async fn load_profile(&self, player_id: &str) -> SocialProfile {
        let result = self.client.fetch_profile(player_id).await;
        self.absorb(player_id, result)
    }

    /// Second half of the load pipeline: collapse a fetch result into a
    /// profile and store it.
    fn absorb(
        &self,
        player_id: &str,
        result: Result<SocialProfile, FetchError>,
    ) -> SocialProfile {
        let profile = result.unwrap_or_else(|err| {
            log_warn!("failed to load social profile for player {player_id}: {err}");
            SocialProfile::default_for(player_id)
        });
        self.profiles
            .borrow_mut()
            .insert(player_id.to_string(), profile.clone());
        profile
    }

    /// Result of the most recent load for this player, if any.
    pub fn cached_profile(&self, player_id: &str) -> Option<SocialProfile> {
        self.profiles.borrow().get(player_id).cloned()
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::Element;

    use super::SocialProfileWidget;
    use crate::{animate, log_error, render};

    impl SocialProfileWidget {
        /// Render a player's profile into the element with the given id,
        /// replacing its content, then run the entrance animation. A missing
        /// container is logged and aborts the call; nothing is thrown.
        pub fn render_profile(&self, container_id: &str, player_id: &str) {
            let document = web_sys::window().and_then(|w| w.document());
            let container = document.and_then(|d| d.get_element_by_id(container_id));
            let Some(container) = container else {
                log_error!("container {container_id} not found");
                return;
            };

            let widget = self.clone();
            let container_id = container_id.to_string();
            let player_id = player_id.to_string();
            spawn_local(async move {
                let profile = widget.load_profile(&player_id).await;
                container.set_inner_html(&render::profile_html(&profile));
                animate::animate_profile(&container_id).await;
            });
        }

        /// Append a compact badge for the player to the given container.
        /// Existing content is left untouched.
        pub fn create_player_badge(&self, player_id: &str, container: &Element) {
            let widget = self.clone();
            let player_id = player_id.to_string();
            let container = container.clone();
            spawn_local(async move {
                let profile = widget.load_profile(&player_id).await;

                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let Ok(badge) = document.create_element("div") else {
                    return;
                };
                badge.set_class_name("player-social-badge");
                badge.set_inner_html(&render::badge_html(&profile));

                // Hover tooltip: full icon name plus description.
                if let Some(badge) = badge.dyn_ref::<web_sys::HtmlElement>() {
                    badge.set_title(&format!(
                        "{}\n{}",
                        profile.icons.full_name, profile.description
                    ));
                }

                if container.append_child(&badge).is_err() {
                    log_error!("failed to append badge for player {player_id}");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helvania_shared::Trend;

    fn fetched_profile(id: &str, score: i32) -> SocialProfile {
        let mut profile = SocialProfile::default_for(id);
        profile.total_score = score;
        profile.trend = Trend::Improving;
        profile
    }

    #[test]
    fn absorb_stores_fetched_profile_unchanged() {
        let widget = SocialProfileWidget::new();
        let fetched = fetched_profile("7", 55);

        let out = widget.absorb("7", Ok(fetched.clone()));
        assert_eq!(out, fetched);
        assert_eq!(widget.cached_profile("7"), Some(fetched));
    }

    #[test]
    fn absorb_substitutes_default_on_failure() {
        let widget = SocialProfileWidget::new();
        let out = widget.absorb(
            "7",
            Err(FetchError::Http {
                status: 404,
                body: String::new(),
            }),
        );
        assert_eq!(out, SocialProfile::default_for("7"));
    }

    #[test]
    fn failed_reload_overwrites_cached_profile() {
        let widget = SocialProfileWidget::new();
        widget.absorb("7", Ok(fetched_profile("7", 55)));
        widget.absorb("7", Err(FetchError::Network("connection reset".to_string())));

        // Overwrite, not merge: the earlier successful load is gone.
        assert_eq!(widget.cached_profile("7"), Some(SocialProfile::default_for("7")));
    }

    #[test]
    fn cache_misses_for_unloaded_players() {
        let widget = SocialProfileWidget::new();
        assert_eq!(widget.cached_profile("nobody"), None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn load_profile_degrades_to_default_when_unreachable() {
        // Nothing listens on the discard port; the fetch fails in transport.
        let widget = SocialProfileWidget::with_client(
            ProfileClient::new().with_base_url("http://127.0.0.1:9"),
        );
        let profile = widget.load_profile("42").await;
        assert_eq!(profile, SocialProfile::default_for("42"));
        assert_eq!(widget.cached_profile("42"), Some(profile));
    }
}
