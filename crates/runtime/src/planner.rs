//! High-level planner service.
//!
//! [`Planner`] validates writes, enforces ownership, computes derived stats on
//! every read, and publishes change events. Storage and the item catalog are
//! injected collaborators; the service holds no state of its own.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;

use planner_core::{
    Build, BuildId, BuildPayload, DerivedStats, EquipPosition, EquipmentSlot, EquippedItem,
    Favorite, Item, ItemCategory, ItemId, ItemOracle, PlannerConfig, Profile, UserId,
    ValidatedBuild, aggregate_carry_weight, author_name,
};

use crate::api::{BuildQuery, BuildSheet, BuildSummary, Result, RuntimeError, SlotView};
use crate::events::{BuildEvent, Event, EventBus, FavoriteEvent, Topic};
use crate::repository::{
    BuildRepository, FavoriteRepository, InMemoryBuildRepository, InMemoryFavoriteRepository,
    InMemoryProfileRepository, ProfileRepository,
};

/// Build planner service.
///
/// Cloning is cheap and shares repositories, catalog and event channels.
#[derive(Clone)]
pub struct Planner {
    builds: Arc<dyn BuildRepository>,
    favorites: Arc<dyn FavoriteRepository>,
    profiles: Arc<dyn ProfileRepository>,
    catalog: Arc<dyn ItemOracle>,
    events: EventBus,
    config: PlannerConfig,
}

impl Planner {
    /// Create a new planner builder
    pub fn builder() -> PlannerBuilder {
        PlannerBuilder::new()
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Subscribe to change events for one topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    // ===== writes =====

    /// Validate a payload and store it as a new build owned by `owner`.
    pub async fn create_build(&self, owner: UserId, payload: &BuildPayload) -> Result<BuildId> {
        let validated = self.validate(payload)?;
        let build = Build::new(
            BuildId::new_v4(),
            owner,
            validated.name,
            validated.attributes,
            validated.loadout,
            Utc::now(),
        );

        self.builds.insert(&build).await?;
        tracing::info!(build_id = %build.id, %owner, "Build created");

        self.events.publish(BuildEvent::BuildCreated {
            build_id: build.id,
            owner,
        });
        Ok(build.id)
    }

    /// Replace a build's name, attributes and loadout.
    ///
    /// Ownership is checked before the payload, so a non-owner learns nothing
    /// about why their payload might have been invalid.
    pub async fn update_build(
        &self,
        actor: UserId,
        build_id: BuildId,
        payload: &BuildPayload,
    ) -> Result<Build> {
        let existing = self.owned_build(actor, build_id).await?;
        let validated = self.validate(payload)?;

        let updated = Build {
            name: validated.name,
            attributes: validated.attributes,
            loadout: validated.loadout,
            updated_at: Utc::now(),
            ..existing
        };

        if !self.builds.update(&updated).await? {
            // Deleted between the ownership check and the write.
            return Err(RuntimeError::BuildNotFound(build_id));
        }
        tracing::info!(%build_id, owner = %actor, "Build updated");

        self.events.publish(BuildEvent::BuildUpdated {
            build_id,
            owner: actor,
        });
        Ok(updated)
    }

    /// Delete a build and every favorite pointing at it.
    pub async fn delete_build(&self, actor: UserId, build_id: BuildId) -> Result<()> {
        self.owned_build(actor, build_id).await?;

        self.builds.delete(build_id).await?;
        let favorites = self.favorites.remove_for_build(build_id).await?;
        tracing::info!(%build_id, owner = %actor, favorites, "Build deleted");

        self.events.publish(BuildEvent::BuildDeleted {
            build_id,
            owner: actor,
        });
        Ok(())
    }

    /// Flip a user's favorite on a build. Returns the resulting state.
    ///
    /// Not idempotent: calling twice restores the original state.
    pub async fn toggle_favorite(&self, user: UserId, build_id: BuildId) -> Result<bool> {
        if self.builds.get(build_id).await?.is_none() {
            return Err(RuntimeError::BuildNotFound(build_id));
        }

        let favorited = self
            .favorites
            .toggle(Favorite::new(user, build_id, Utc::now()))
            .await?;

        let count = self.favorites.count_for_build(build_id).await?;
        tracing::debug!(%build_id, %user, favorited, count, "Favorite toggled");

        self.events.publish(FavoriteEvent::FavoriteToggled {
            user,
            build_id,
            favorited,
            count,
        });
        Ok(favorited)
    }

    /// Set or replace a user's public username.
    pub async fn set_username(&self, user: UserId, username: &str) -> Result<Profile> {
        let profile = Profile::parse(user, username)?;
        self.profiles.upsert(profile.clone()).await?;
        tracing::debug!(%user, username = %profile.username, "Username set");
        Ok(profile)
    }

    // ===== reads =====

    pub async fn find_build(&self, build_id: BuildId) -> Result<Option<Build>> {
        Ok(self.builds.get(build_id).await?)
    }

    pub async fn profile(&self, user: UserId) -> Result<Option<Profile>> {
        Ok(self.profiles.get(user).await?)
    }

    /// Derived stats of a stored build, recomputed from the current catalog.
    pub async fn derived_stats(&self, build_id: BuildId) -> Result<Option<DerivedStats>> {
        let Some(build) = self.builds.get(build_id).await? else {
            return Ok(None);
        };
        let items = self.resolve(&build.loadout.weighted_refs());
        self.compute_stats(&build, &items).map(Some)
    }

    /// Build, resolved items, derived stats and viewer-specific flags.
    pub async fn build_sheet(
        &self,
        build_id: BuildId,
        viewer: Option<UserId>,
    ) -> Result<Option<BuildSheet>> {
        let Some(build) = self.builds.get(build_id).await? else {
            return Ok(None);
        };

        let refs = build.loadout.all_refs();
        let items = self.resolve(&refs);
        let stats = self.compute_stats(&build, &items)?;
        let slots = refs
            .iter()
            .map(|(position, id)| SlotView {
                position: *position,
                item_id: *id,
                item: items.get(id).cloned(),
            })
            .collect();

        let favorite_count = self.favorites.count_for_build(build_id).await?;
        let is_favorited = match viewer {
            Some(user) => self.favorites.contains(user, build_id).await?,
            None => false,
        };
        let username = self.profiles.get(build.owner).await?.map(|p| p.username);

        Ok(Some(BuildSheet {
            author: author_name(username.as_deref()),
            is_owner: viewer.is_some_and(|user| build.is_owned_by(user)),
            build,
            slots,
            stats,
            favorite_count,
            is_favorited,
        }))
    }

    pub async fn favorite_count(&self, build_id: BuildId) -> Result<usize> {
        Ok(self.favorites.count_for_build(build_id).await?)
    }

    pub async fn is_favorited(&self, user: UserId, build_id: BuildId) -> Result<bool> {
        Ok(self.favorites.contains(user, build_id).await?)
    }

    /// Public listing, newest first, optionally filtered by name or author.
    pub async fn browse(&self, query: &BuildQuery) -> Result<Vec<BuildSummary>> {
        let builds = self.builds.list_recent().await?;
        let names = self.usernames(&builds).await?;
        let page_size = self.config.effective_page_size(query.page_size);

        let page: Vec<Build> = match query.normalized_search() {
            Some(term) => builds
                .into_iter()
                .filter(|build| {
                    build.name.as_str().to_lowercase().contains(&term)
                        || names
                            .get(&build.owner)
                            .is_some_and(|name| name.to_lowercase().contains(&term))
                })
                .skip(query.page.saturating_mul(page_size))
                .take(page_size)
                .collect(),
            None => builds
                .into_iter()
                .skip(query.page.saturating_mul(page_size))
                .take(page_size)
                .collect(),
        };

        self.summarize(page, &names).await
    }

    /// A user's own builds, newest first.
    pub async fn builds_by_owner(&self, owner: UserId) -> Result<Vec<BuildSummary>> {
        let builds = self.builds.list_by_owner(owner).await?;
        let names = self.usernames(&builds).await?;
        self.summarize(builds, &names).await
    }

    /// Builds a user favorited, most recently favorited first.
    pub async fn saved_builds(&self, user: UserId) -> Result<Vec<BuildSummary>> {
        let favorites = self.favorites.builds_for_user(user).await?;

        let mut builds = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            match self.builds.get(favorite.build_id).await? {
                Some(build) => builds.push(build),
                None => tracing::debug!(build_id = %favorite.build_id, %user, "Skipping dangling favorite"),
            }
        }

        let names = self.usernames(&builds).await?;
        self.summarize(builds, &names).await
    }

    /// Catalog entries of one category sorted by name, optionally filtered.
    pub fn catalog_items(&self, category: ItemCategory, search: Option<&str>) -> Vec<Item> {
        let term = search
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        let mut items = self.catalog.by_category(category);
        if let Some(term) = term {
            items.retain(|item| item.name.to_lowercase().contains(&term));
        }
        items.sort_by_cached_key(|item| (item.name.to_lowercase(), item.id));
        items
    }

    // ===== helpers =====

    fn validate(&self, payload: &BuildPayload) -> Result<ValidatedBuild> {
        let validated = payload.validate()?;
        validated.check_references(|id| self.catalog.item(id).map(|item| item.category))?;
        Ok(validated)
    }

    async fn owned_build(&self, actor: UserId, build_id: BuildId) -> Result<Build> {
        let build = self
            .builds
            .get(build_id)
            .await?
            .ok_or(RuntimeError::BuildNotFound(build_id))?;

        if !build.is_owned_by(actor) {
            tracing::warn!(%build_id, %actor, "Rejected write by non-owner");
            return Err(RuntimeError::Unauthorized {
                user: actor,
                build_id,
            });
        }
        Ok(build)
    }

    /// Looks up every referenced item once. Unresolved ids are absent.
    fn resolve(&self, refs: &[(EquipPosition, ItemId)]) -> HashMap<ItemId, Item> {
        let mut ids: Vec<ItemId> = refs.iter().map(|(_, id)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        self.catalog
            .items(&ids)
            .into_iter()
            .map(|item| (item.id, item))
            .collect()
    }

    /// Unresolved references weigh nothing; duplicates weigh once per position.
    fn compute_stats(&self, build: &Build, items: &HashMap<ItemId, Item>) -> Result<DerivedStats> {
        let equipped: Vec<EquippedItem> = build
            .loadout
            .weighted_refs()
            .iter()
            .filter_map(|(_, id)| items.get(id))
            .map(EquippedItem::from)
            .collect();
        let carry_weight = aggregate_carry_weight(&equipped)?;
        Ok(DerivedStats::compute(&build.attributes, carry_weight)?)
    }

    async fn usernames(&self, builds: &[Build]) -> Result<HashMap<UserId, String>> {
        let mut owners: Vec<UserId> = builds.iter().map(|b| b.owner).collect();
        owners.sort_unstable();
        owners.dedup();
        Ok(self.profiles.usernames(&owners).await?)
    }

    async fn summarize(
        &self,
        builds: Vec<Build>,
        names: &HashMap<UserId, String>,
    ) -> Result<Vec<BuildSummary>> {
        let mut summaries = Vec::with_capacity(builds.len());
        for build in builds {
            let favorite_count = self.favorites.count_for_build(build.id).await?;
            let main_weapon = build
                .loadout
                .equipment
                .get(EquipmentSlot::RightHand1)
                .and_then(|id| self.catalog.item(id));

            summaries.push(BuildSummary {
                id: build.id,
                name: build.name.to_string(),
                owner: build.owner,
                author: author_name(names.get(&build.owner).map(String::as_str)),
                soul_level: build.soul_level(),
                dominant_attribute: build.attributes.dominant(),
                main_weapon,
                favorite_count,
                created_at: build.created_at,
            });
        }
        Ok(summaries)
    }
}

impl std::fmt::Debug for Planner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Planner`].
pub struct PlannerBuilder {
    config: PlannerConfig,
    catalog: Option<Arc<dyn ItemOracle>>,
    builds: Option<Arc<dyn BuildRepository>>,
    favorites: Option<Arc<dyn FavoriteRepository>>,
    profiles: Option<Arc<dyn ProfileRepository>>,
    event_capacity: usize,
}

impl PlannerBuilder {
    fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
            catalog: None,
            builds: None,
            favorites: None,
            profiles: None,
            event_capacity: EventBus::DEFAULT_CAPACITY,
        }
    }

    /// Override planner configuration
    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required item catalog
    pub fn catalog(mut self, catalog: impl ItemOracle + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    pub fn build_repository(mut self, repo: impl BuildRepository + 'static) -> Self {
        self.builds = Some(Arc::new(repo));
        self
    }

    pub fn favorite_repository(mut self, repo: impl FavoriteRepository + 'static) -> Self {
        self.favorites = Some(Arc::new(repo));
        self
    }

    pub fn profile_repository(mut self, repo: impl ProfileRepository + 'static) -> Self {
        self.profiles = Some(Arc::new(repo));
        self
    }

    /// Fill every repository not yet set with an empty in-memory one.
    pub fn in_memory_repositories(mut self) -> Self {
        self.builds
            .get_or_insert_with(|| Arc::new(InMemoryBuildRepository::new()));
        self.favorites
            .get_or_insert_with(|| Arc::new(InMemoryFavoriteRepository::new()));
        self.profiles
            .get_or_insert_with(|| Arc::new(InMemoryProfileRepository::new()));
        self
    }

    /// Per-topic event buffer size
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Build the planner
    pub fn build(self) -> Result<Planner> {
        let catalog = self.catalog.ok_or(RuntimeError::MissingCatalog)?;
        let builds = self.builds.ok_or(RuntimeError::MissingRepository("build"))?;
        let favorites = self
            .favorites
            .ok_or(RuntimeError::MissingRepository("favorite"))?;
        let profiles = self
            .profiles
            .ok_or(RuntimeError::MissingRepository("profile"))?;

        Ok(Planner {
            builds,
            favorites,
            profiles,
            catalog,
            events: EventBus::with_capacity(self.event_capacity),
            config: self.config,
        })
    }
}
