use std::{convert::Infallible, path::PathBuf};

use warp::{Filter, Rejection, Reply};

use super::{handlers, rejection};
use crate::{form::FormData, schema::RecipeId, store::JsonStore};

const MAX_BODY_BYTES: u64 = 1024 * 1024;

pub fn with_store(store: JsonStore) -> impl Filter<Extract = (JsonStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

pub fn json_body() -> impl Filter<Extract = (FormData,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

/// The full service: index page, static assets and the JSON api, with every
/// rejection recovered into a JSON error body.
pub fn routes(
    store: JsonStore,
    static_dir: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .and(warp::fs::file(static_dir.join("index.html")));

    let assets = warp::path("static").and(warp::fs::dir(static_dir));

    index
        .or(assets)
        .or(api(store))
        .recover(rejection::recover)
        .with(warp::log("recipe_box::api"))
}

pub fn api(store: JsonStore) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    recipes(store.clone())
        .or(favorites(store.clone()))
        .or(user_recipes(store.clone()))
        .or(ingredients(store))
}

fn recipes(store: JsonStore) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let base = warp::path!("api" / "recipes")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::get_recipes);

    let all = warp::path!("api" / "all-recipes")
        .and(warp::get())
        .and(with_store(store))
        .and_then(handlers::get_all_recipes);

    base.or(all)
}

fn favorites(store: JsonStore) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let list = warp::path!("api" / "favorites")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::get_favorites);

    let toggle = warp::path!("api" / "favorites")
        .and(warp::post())
        .and(with_store(store))
        .and(json_body())
        .and_then(handlers::toggle_favorite);

    list.or(toggle)
}

fn user_recipes(store: JsonStore) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let list = warp::path!("api" / "user-recipes")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::get_user_recipes);

    let save = warp::path!("api" / "user-recipes")
        .and(warp::post())
        .and(with_store(store.clone()))
        .and(json_body())
        .and_then(handlers::save_user_recipe);

    let delete = warp::path!("api" / "user-recipes" / RecipeId)
        .and(warp::delete())
        .and(with_store(store))
        .and_then(handlers::delete_user_recipe);

    list.or(save).or(delete)
}

fn ingredients(store: JsonStore) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let list = warp::path!("api" / "user-ingredients")
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handlers::get_user_ingredients);

    let save = warp::path!("api" / "user-ingredients")
        .and(warp::post())
        .and(with_store(store.clone()))
        .and(json_body())
        .and_then(handlers::save_user_ingredient);

    let common = warp::path!("api" / "common-ingredients")
        .and(warp::get())
        .and_then(handlers::get_common_ingredients);

    let all = warp::path!("api" / "all-ingredients")
        .and(warp::get())
        .and(with_store(store))
        .and_then(handlers::get_all_ingredients);

    list.or(save).or(common).or(all)
}
