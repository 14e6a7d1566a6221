use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type RecipeId = i64;
pub type Ingredient = String;

/// A recipe document. Only `id` is interpreted by the store, every other field
/// is kept exactly as the client sent it.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe(Map<String, Value>);

impl Recipe {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn id(&self) -> Option<RecipeId> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set<V: Into<Value>>(&mut self, key: &str, value: V) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAction {
    Added,
    Removed,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FavoriteToggled {
    pub success: bool,
    pub action: FavoriteAction,
    pub favorites: Vec<RecipeId>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RecipeSaved {
    pub success: bool,
    pub recipe: Recipe,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDeleted {
    pub success: bool,
    pub deleted_id: RecipeId,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct IngredientsSaved {
    pub success: bool,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}
