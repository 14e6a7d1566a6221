use crate::{
    error::Error,
    schema::{FavoriteAction, RecipeId},
    store::{JsonStore, StoreFile},
};

pub async fn list_favorites(store: &JsonStore) -> Result<Vec<RecipeId>, Error> {
    Ok(store.load(StoreFile::Favorites).await?)
}

/// Adds `recipe_id` to the favorites when absent and removes it otherwise.
/// Ids are not checked against any recipe list.
pub async fn toggle_favorite(
    store: &JsonStore,
    recipe_id: RecipeId,
) -> Result<(FavoriteAction, Vec<RecipeId>), Error> {
    let mut favorites: Vec<RecipeId> = store.load(StoreFile::Favorites).await?;

    let action = match favorites.iter().position(|id| *id == recipe_id) {
        Some(index) => {
            favorites.remove(index);
            FavoriteAction::Removed
        }
        None => {
            favorites.push(recipe_id);
            FavoriteAction::Added
        }
    };

    store.save(StoreFile::Favorites, &favorites).await?;
    log::trace!("> Favorite {recipe_id} {action:?}");

    Ok((action, favorites))
}

/// Removes one occurrence of `recipe_id`, writing only if it was present.
pub async fn remove_favorite(store: &JsonStore, recipe_id: RecipeId) -> Result<bool, Error> {
    let mut favorites: Vec<RecipeId> = store.load(StoreFile::Favorites).await?;

    match favorites.iter().position(|id| *id == recipe_id) {
        Some(index) => {
            favorites.remove(index);
            store.save(StoreFile::Favorites, &favorites).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}
