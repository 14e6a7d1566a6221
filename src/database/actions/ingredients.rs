use std::collections::BTreeSet;

use crate::{
    constants::COMMON_INGREDIENTS,
    error::{Error, ErrorKind},
    schema::Ingredient,
    store::{JsonStore, StoreFile},
};

pub fn list_common_ingredients() -> Vec<Ingredient> {
    COMMON_INGREDIENTS.iter().map(|name| name.to_string()).collect()
}

pub async fn list_user_ingredients(store: &JsonStore) -> Result<Vec<Ingredient>, Error> {
    Ok(store.load(StoreFile::UserIngredients).await?)
}

/// Adds a trimmed ingredient to the sorted user list. An ingredient that is
/// already listed leaves the file untouched.
pub async fn add_user_ingredient(store: &JsonStore, raw: &str) -> Result<Vec<Ingredient>, Error> {
    let ingredient = raw.trim();
    if ingredient.is_empty() {
        return Err(ErrorKind::InvalidRequest.new("No ingredient provided"));
    }

    let mut ingredients: Vec<Ingredient> = store.load(StoreFile::UserIngredients).await?;

    if !ingredients.iter().any(|i| i == ingredient) {
        ingredients.push(ingredient.to_string());
        ingredients.sort();
        store.save(StoreFile::UserIngredients, &ingredients).await?;
        log::trace!("> Added ingredient {ingredient:?}");
    }

    Ok(ingredients)
}

/// Sorted union of the common and user ingredients.
pub async fn list_all_ingredients(store: &JsonStore) -> Result<Vec<Ingredient>, Error> {
    let user: Vec<Ingredient> = store.load(StoreFile::UserIngredients).await?;

    let all: BTreeSet<Ingredient> = COMMON_INGREDIENTS
        .iter()
        .map(|name| name.to_string())
        .chain(user)
        .collect();

    Ok(all.into_iter().collect())
}
