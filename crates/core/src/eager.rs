//! Eager loading of a multi-valued association.
//!
//! Listing queries load primary rows without their many-to-many
//! association. To populate it, the fetcher issues one secondary query for
//! the whole id set with the association joined. That query returns rows in
//! no particular order, so the caller's order is restored afterwards by
//! looking up each row's original position.
//!
//! Only persisted rows reach the fetcher: every input implements
//! [`Identified`] with a non-optional id, so "entity without an id" cannot
//! be expressed. Storage is reached through [`AssociationLoader`].

use std::collections::HashMap;

use async_trait::async_trait;

use crate::pagination::Page;
use crate::types::DbId;

/// A row with a store-assigned identifier.
pub trait Identified {
    fn id(&self) -> DbId;
}

/// Storage access used by the fetcher.
#[async_trait]
pub trait AssociationLoader: Send + Sync {
    /// The primary entity with its association populated.
    type Loaded: Identified + Send;
    type Error: Send;

    /// Load one entity with its association joined.
    async fn load_one(&self, id: DbId) -> Result<Option<Self::Loaded>, Self::Error>;

    /// Load every entity whose id is in `ids`, association joined, one entry
    /// per entity. Order is unspecified.
    async fn load_distinct(&self, ids: &[DbId]) -> Result<Vec<Self::Loaded>, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum EagerLoadError<E> {
    /// The underlying store failed; passed through unchanged.
    #[error(transparent)]
    Store(E),

    #[error("Duplicate id {0} in eager-load input")]
    DuplicateId(DbId),

    #[error("Eager-load query returned id {0}, which was not requested")]
    UnexpectedRow(DbId),
}

/// Populate the association of a single, possibly absent, entity.
///
/// Absent input returns `None` without touching the store.
pub async fn fetch_one<L, T>(
    loader: &L,
    entity: Option<T>,
) -> Result<Option<L::Loaded>, EagerLoadError<L::Error>>
where
    L: AssociationLoader + ?Sized,
    T: Identified,
{
    let Some(id) = entity.as_ref().map(Identified::id) else {
        return Ok(None);
    };
    loader.load_one(id).await.map_err(EagerLoadError::Store)
}

/// Populate the association of every entity, preserving input order.
///
/// Empty input returns an empty vec without touching the store. Rows that
/// disappeared between the primary query and this one are dropped.
pub async fn fetch_many<L, T>(
    loader: &L,
    entities: Vec<T>,
) -> Result<Vec<L::Loaded>, EagerLoadError<L::Error>>
where
    L: AssociationLoader + ?Sized,
    T: Identified,
{
    if entities.is_empty() {
        return Ok(Vec::new());
    }

    let order = position_index(&entities)?;
    let ids: Vec<DbId> = entities.iter().map(Identified::id).collect();
    drop(entities);

    let loaded = loader
        .load_distinct(&ids)
        .await
        .map_err(EagerLoadError::Store)?;

    let restored = restore_order(&order, loaded)?;
    if restored.len() < ids.len() {
        tracing::warn!(
            requested = ids.len(),
            loaded = restored.len(),
            "Rows vanished between primary and eager-load queries"
        );
    }
    Ok(restored)
}

/// Populate the association of a page's content.
///
/// The page request and total element count are carried over unchanged.
pub async fn fetch_page<L, T>(
    loader: &L,
    page: Page<T>,
) -> Result<Page<L::Loaded>, EagerLoadError<L::Error>>
where
    L: AssociationLoader + ?Sized,
    T: Identified,
{
    let Page {
        content,
        request,
        total_elements,
    } = page;
    let content = fetch_many(loader, content).await?;
    Ok(Page::new(content, request, total_elements))
}

/// Map each id to its position in `entities`. Ids must be unique.
pub fn position_index<T, E>(entities: &[T]) -> Result<HashMap<DbId, usize>, EagerLoadError<E>>
where
    T: Identified,
{
    let mut order = HashMap::with_capacity(entities.len());
    for (index, entity) in entities.iter().enumerate() {
        if order.insert(entity.id(), index).is_some() {
            return Err(EagerLoadError::DuplicateId(entity.id()));
        }
    }
    Ok(order)
}

/// Sort `loaded` by the positions recorded in `order`.
///
/// A row whose id is not in `order` is an error. Repeated rows for the same
/// id collapse to the first one.
pub fn restore_order<T, E>(
    order: &HashMap<DbId, usize>,
    loaded: Vec<T>,
) -> Result<Vec<T>, EagerLoadError<E>>
where
    T: Identified,
{
    let mut keyed = Vec::with_capacity(loaded.len());
    for item in loaded {
        let id = item.id();
        let position = *order.get(&id).ok_or(EagerLoadError::UnexpectedRow(id))?;
        keyed.push((position, item));
    }

    keyed.sort_by_key(|(position, _)| *position);
    keyed.dedup_by_key(|(position, _)| *position);
    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}
