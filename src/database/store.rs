use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    constants::{FAVORITES_FILE, USER_INGREDIENTS_FILE, USER_RECIPES_FILE},
    error::StoreError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreFile {
    Recipes,
    Favorites,
    UserRecipes,
    UserIngredients,
}

/// Flat JSON file store. Every access reads or rewrites a whole file and
/// nothing is held in memory between calls, so concurrent writers race.
#[derive(Clone, Debug)]
pub struct JsonStore {
    recipes_file: PathBuf,
    data_dir: PathBuf,
}

impl JsonStore {
    /// Opens a store over `data_dir`, creating the directory when missing.
    /// The base recipe file lives wherever `recipes_file` points and is never
    /// written by the API.
    pub async fn open(
        recipes_file: impl Into<PathBuf>,
        data_dir: impl Into<PathBuf>,
    ) -> Result<Self, StoreError> {
        let store = Self {
            recipes_file: recipes_file.into(),
            data_dir: data_dir.into(),
        };

        tokio::fs::create_dir_all(&store.data_dir).await?;
        log::trace!("> Opened store at {}", store.data_dir.display());

        Ok(store)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, file: StoreFile) -> PathBuf {
        match file {
            StoreFile::Recipes => self.recipes_file.clone(),
            StoreFile::Favorites => self.data_dir.join(FAVORITES_FILE),
            StoreFile::UserRecipes => self.data_dir.join(USER_RECIPES_FILE),
            StoreFile::UserIngredients => self.data_dir.join(USER_INGREDIENTS_FILE),
        }
    }

    /// Loads a file, falling back to `T::default()` when it is missing or
    /// does not parse as `T`. Other I/O failures are returned.
    pub async fn load<T>(&self, file: StoreFile) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path(file);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::trace!("> {} not found, using default", path.display());
                return Ok(T::default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => {
                log::trace!("> Loaded {}", path.display());
                Ok(value)
            }
            Err(e) => {
                log::warn!("Failed to parse {}, using default: {e}", path.display());
                Ok(T::default())
            }
        }
    }

    /// Overwrites the whole file with pretty-printed JSON.
    pub async fn save<T>(&self, file: StoreFile, data: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.path(file);
        let bytes = serde_json::to_vec_pretty(data)?;

        tokio::fs::write(&path, bytes).await?;
        log::trace!("> Saved {}", path.display());

        Ok(())
    }
}
