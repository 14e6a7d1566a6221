use serde_json::{Map, Value};

use super::{
    error::{Error, TypeError},
    schema::{Recipe, RecipeId},
};

/// Fields keep the order the client sent them in.
pub type FormData = Map<String, Value>;

/// A JSON object request body, checked field by field.
pub struct Form {
    inner: FormData,
}

impl Form {
    pub fn from_data(data: FormData) -> Self {
        Self { inner: data }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Returns the first of `fields` that the form lacks.
    pub fn missing<'a>(&self, fields: &[&'a str]) -> Option<&'a str> {
        fields.iter().copied().find(|field| !self.contains(field))
    }

    pub fn require(&self, fields: &[&str]) -> Result<(), Error> {
        match self.missing(fields) {
            Some(field) => Err(TypeError::new(&format!("Missing required field: {field}")).into()),
            None => Ok(()),
        }
    }

    pub fn get_str(&self, key: &str) -> Result<String, TypeError> {
        match self.inner.get(key) {
            Some(value) => match value.as_str() {
                Some(v) => Ok(v.to_string()),
                None => Err(TypeError::new("Failed to parse value as str")),
            },
            None => Err(TypeError::new("Invalid key")),
        }
    }

    /// A recipe id: a nonzero integer.
    pub fn get_id(&self, key: &str) -> Result<RecipeId, TypeError> {
        match self.inner.get(key) {
            Some(value) => match value.as_i64() {
                Some(0) => Err(TypeError::new("Id must be nonzero")),
                Some(v) => Ok(v),
                None => Err(TypeError::new("Failed to parse value as integer")),
            },
            None => Err(TypeError::new("Invalid key")),
        }
    }

    pub fn into_recipe(self) -> Recipe {
        Recipe::from_map(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn form(value: Value) -> Form {
        Form::from_data(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn reports_first_missing_field() {
        let form = form(json!({ "title": "Омлет", "difficulty": "Легко" }));

        assert_eq!(form.missing(&["title", "time", "difficulty", "calories"]), Some("time"));

        let error = form.require(&["title", "time"]).unwrap_err();
        assert_eq!(error.info.as_deref(), Some("Missing required field: time"));
    }

    #[test]
    fn id_rejects_zero_and_non_integers() {
        assert!(form(json!({ "recipeId": 0 })).get_id("recipeId").is_err());
        assert!(form(json!({ "recipeId": "5" })).get_id("recipeId").is_err());
        assert!(form(json!({ "recipeId": null })).get_id("recipeId").is_err());
        assert!(form(json!({})).get_id("recipeId").is_err());
        assert_eq!(form(json!({ "recipeId": 12 })).get_id("recipeId").unwrap(), 12);
    }

    #[test]
    fn get_str_requires_a_string() {
        let form = form(json!({ "ingredient": 4, "name": "Соль" }));

        assert!(form.get_str("ingredient").is_err());
        assert_eq!(form.get_str("name").unwrap(), "Соль");
    }

    #[test]
    fn into_recipe_keeps_client_field_order() {
        let recipe = form(json!({ "zeta": 1, "title": "Каша", "alpha": 2 })).into_recipe();

        assert_eq!(
            serde_json::to_string(&recipe).unwrap(),
            r#"{"zeta":1,"title":"Каша","alpha":2}"#
        );
    }

    #[test]
    fn into_recipe_keeps_every_field() {
        let recipe = form(json!({ "id": 101, "title": "Суп", "steps": ["Варить"] })).into_recipe();

        assert_eq!(recipe.id(), Some(101));
        assert_eq!(recipe.get("steps"), Some(&json!(["Варить"])));
    }
}
