use crate::{
    constants::{REQUIRED_RECIPE_FIELDS, USER_RECIPE_ID_FLOOR},
    error::{Error, ErrorKind},
    form::Form,
    schema::{Recipe, RecipeId},
    store::{JsonStore, StoreFile},
};

use super::favorites::remove_favorite;

pub async fn list_recipes(store: &JsonStore) -> Result<Vec<Recipe>, Error> {
    Ok(store.load(StoreFile::Recipes).await?)
}

pub async fn list_user_recipes(store: &JsonStore) -> Result<Vec<Recipe>, Error> {
    Ok(store.load(StoreFile::UserRecipes).await?)
}

/// Base recipes followed by user recipes.
pub async fn list_all_recipes(store: &JsonStore) -> Result<Vec<Recipe>, Error> {
    let mut recipes = list_recipes(store).await?;
    recipes.extend(list_user_recipes(store).await?);

    Ok(recipes)
}

fn next_recipe_id(recipes: &[Recipe]) -> RecipeId {
    recipes
        .iter()
        .filter_map(Recipe::id)
        .max()
        .unwrap_or(USER_RECIPE_ID_FLOOR)
        + 1
}

/// Creates a user recipe, or replaces the stored one when the form carries an
/// `id`. An `id` that matches nothing is echoed back without being stored.
pub async fn save_user_recipe(store: &JsonStore, form: Form) -> Result<Recipe, Error> {
    form.require(REQUIRED_RECIPE_FIELDS)?;

    let mut recipes: Vec<Recipe> = store.load(StoreFile::UserRecipes).await?;

    let recipe = if form.contains("id") {
        let recipe = form.into_recipe();
        let id = recipe
            .id()
            .ok_or_else(|| ErrorKind::InvalidRequest.new("Invalid recipe id"))?;

        match recipes.iter_mut().find(|r| r.id() == Some(id)) {
            Some(existing) => *existing = recipe.clone(),
            None => log::warn!("No user recipe with id {id} to update"),
        }

        recipe
    } else {
        let mut recipe = form.into_recipe();
        recipe.set("id", next_recipe_id(&recipes));
        recipe.set("isUserRecipe", true);
        recipe.set("isFavorite", false);

        recipes.push(recipe.clone());
        recipe
    };

    store.save(StoreFile::UserRecipes, &recipes).await?;

    Ok(recipe)
}

/// Deletes a user recipe and drops it from the favorites. Unknown ids succeed.
pub async fn delete_user_recipe(store: &JsonStore, id: RecipeId) -> Result<RecipeId, Error> {
    let mut recipes: Vec<Recipe> = store.load(StoreFile::UserRecipes).await?;
    recipes.retain(|recipe| recipe.id() != Some(id));
    store.save(StoreFile::UserRecipes, &recipes).await?;

    if remove_favorite(store, id).await? {
        log::trace!("> Removed deleted recipe {id} from favorites");
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use assert_fs::{prelude::*, TempDir};
    use serde_json::{json, Value};

    use super::*;
    use crate::actions::{list_favorites, toggle_favorite};

    async fn open_store(temp: &TempDir) -> JsonStore {
        JsonStore::open(temp.path().join("recipes.json"), temp.path().join("data"))
            .await
            .unwrap()
    }

    fn form(value: Value) -> Form {
        Form::from_data(serde_json::from_value(value).unwrap())
    }

    fn pancakes() -> Value {
        json!({
            "title": "Блины",
            "time": "30 мин",
            "difficulty": "Легко",
            "calories": 250,
            "servings": 4,
            "ingredients": [{ "name": "Мука", "amount": "200 г" }]
        })
    }

    #[tokio::test]
    async fn first_user_recipe_gets_id_100() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp).await;

        let recipe = save_user_recipe(&store, form(pancakes())).await.unwrap();

        assert_eq!(recipe.id(), Some(100));
        assert_eq!(recipe.get("isUserRecipe"), Some(&json!(true)));
        assert_eq!(recipe.get("isFavorite"), Some(&json!(false)));
        assert_eq!(list_user_recipes(&store).await.unwrap(), vec![recipe]);
    }

    #[tokio::test]
    async fn ids_continue_from_the_highest() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp).await;
        temp.child("data/user_recipes.json")
            .write_str(r#"[{"id": 140, "title": "Щи"}, {"id": 120, "title": "Уха"}]"#)
            .unwrap();

        let recipe = save_user_recipe(&store, form(pancakes())).await.unwrap();

        assert_eq!(recipe.id(), Some(141));
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp).await;
        let mut body = pancakes();
        body.as_object_mut().unwrap().remove("calories");

        let error = save_user_recipe(&store, form(body)).await.unwrap_err();

        assert_eq!(error.code, 400);
        assert_eq!(error.info.as_deref(), Some("Missing required field: calories"));
        assert!(!store.path(StoreFile::UserRecipes).exists());
    }

    #[tokio::test]
    async fn update_replaces_recipe_in_place() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp).await;
        let first = save_user_recipe(&store, form(pancakes())).await.unwrap();
        save_user_recipe(&store, form(pancakes())).await.unwrap();

        let mut body = pancakes();
        body["id"] = json!(first.id());
        body["title"] = json!("Блины с мёдом");
        let updated = save_user_recipe(&store, form(body)).await.unwrap();

        let recipes = list_user_recipes(&store).await.unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0], updated);
        assert_eq!(recipes[0].get("title"), Some(&json!("Блины с мёдом")));
        // The replacement is stored verbatim, flags included.
        assert_eq!(recipes[0].get("isUserRecipe"), None);
    }

    #[tokio::test]
    async fn update_of_unknown_id_stores_nothing() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp).await;
        let mut body = pancakes();
        body["id"] = json!(555);

        let recipe = save_user_recipe(&store, form(body)).await.unwrap();

        assert_eq!(recipe.id(), Some(555));
        assert!(list_user_recipes(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_integer_id_is_rejected() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp).await;
        let mut body = pancakes();
        body["id"] = json!("abc");

        let error = save_user_recipe(&store, form(body)).await.unwrap_err();

        assert_eq!(error.code, 400);
    }

    #[tokio::test]
    async fn delete_removes_recipe_and_favorite() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp).await;
        let kept = save_user_recipe(&store, form(pancakes())).await.unwrap();
        let doomed = save_user_recipe(&store, form(pancakes())).await.unwrap();
        let doomed_id = doomed.id().unwrap();
        toggle_favorite(&store, 3).await.unwrap();
        toggle_favorite(&store, doomed_id).await.unwrap();

        assert_eq!(delete_user_recipe(&store, doomed_id).await.unwrap(), doomed_id);

        assert_eq!(list_user_recipes(&store).await.unwrap(), vec![kept]);
        assert_eq!(list_favorites(&store).await.unwrap(), vec![3]);
    }

    #[tokio::test]
    async fn delete_unknown_recipe_succeeds() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp).await;

        assert_eq!(delete_user_recipe(&store, 404).await.unwrap(), 404);
        assert!(list_user_recipes(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn all_recipes_puts_base_recipes_first() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp).await;
        temp.child("recipes.json")
            .write_str(r#"[{"id": 1, "title": "Оливье"}, {"id": 2, "title": "Сырники"}]"#)
            .unwrap();
        let user = save_user_recipe(&store, form(pancakes())).await.unwrap();

        let ids: Vec<Option<RecipeId>> = list_all_recipes(&store)
            .await
            .unwrap()
            .iter()
            .map(Recipe::id)
            .collect();

        assert_eq!(ids, vec![Some(1), Some(2), user.id()]);
        assert_eq!(list_recipes(&store).await.unwrap().len(), 2);
    }
}
