use warp::{reject, Rejection, Reply};

use crate::{
    actions,
    error::ErrorKind,
    form::{Form, FormData},
    schema::{FavoriteToggled, IngredientsSaved, RecipeDeleted, RecipeId, RecipeSaved},
    store::JsonStore,
};

pub async fn get_recipes(store: JsonStore) -> Result<impl Reply, Rejection> {
    let recipes = actions::list_recipes(&store).await.map_err(reject::custom)?;
    Ok(warp::reply::json(&recipes))
}

pub async fn get_favorites(store: JsonStore) -> Result<impl Reply, Rejection> {
    let favorites = actions::list_favorites(&store)
        .await
        .map_err(reject::custom)?;
    Ok(warp::reply::json(&favorites))
}

pub async fn toggle_favorite(store: JsonStore, data: FormData) -> Result<impl Reply, Rejection> {
    let form = Form::from_data(data);
    let recipe_id = form
        .get_id("recipeId")
        .map_err(|_| reject::custom(ErrorKind::InvalidRequest.new("No recipeId provided")))?;

    let (action, favorites) = actions::toggle_favorite(&store, recipe_id)
        .await
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&FavoriteToggled {
        success: true,
        action,
        favorites,
    }))
}

pub async fn get_user_recipes(store: JsonStore) -> Result<impl Reply, Rejection> {
    let recipes = actions::list_user_recipes(&store)
        .await
        .map_err(reject::custom)?;
    Ok(warp::reply::json(&recipes))
}

pub async fn save_user_recipe(store: JsonStore, data: FormData) -> Result<impl Reply, Rejection> {
    let recipe = actions::save_user_recipe(&store, Form::from_data(data))
        .await
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&RecipeSaved {
        success: true,
        recipe,
    }))
}

pub async fn delete_user_recipe(id: RecipeId, store: JsonStore) -> Result<impl Reply, Rejection> {
    let deleted_id = actions::delete_user_recipe(&store, id)
        .await
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&RecipeDeleted {
        success: true,
        deleted_id,
    }))
}

pub async fn get_user_ingredients(store: JsonStore) -> Result<impl Reply, Rejection> {
    let ingredients = actions::list_user_ingredients(&store)
        .await
        .map_err(reject::custom)?;
    Ok(warp::reply::json(&ingredients))
}

pub async fn save_user_ingredient(
    store: JsonStore,
    data: FormData,
) -> Result<impl Reply, Rejection> {
    // Anything that is not a string counts as no ingredient at all.
    let raw = Form::from_data(data).get_str("ingredient").unwrap_or_default();

    let ingredients = actions::add_user_ingredient(&store, &raw)
        .await
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&IngredientsSaved {
        success: true,
        ingredients,
    }))
}

pub async fn get_common_ingredients() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&actions::list_common_ingredients()))
}

pub async fn get_all_ingredients(store: JsonStore) -> Result<impl Reply, Rejection> {
    let ingredients = actions::list_all_ingredients(&store)
        .await
        .map_err(reject::custom)?;
    Ok(warp::reply::json(&ingredients))
}

pub async fn get_all_recipes(store: JsonStore) -> Result<impl Reply, Rejection> {
    let recipes = actions::list_all_recipes(&store)
        .await
        .map_err(reject::custom)?;
    Ok(warp::reply::json(&recipes))
}
