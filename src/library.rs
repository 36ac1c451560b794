use itertools::Itertools;

use crate::recipe::{Category, Recipe};

/// Step the filter bar one slot left or right. `None` is the leading
/// "everything" slot (All / Trending), then the categories in fixed order.
pub fn cycle_filter(filter: Option<Category>, forward: bool) -> Option<Category> {
    let slots: Vec<Option<Category>> = std::iter::once(None)
        .chain(Category::ALL.iter().copied().map(Some))
        .collect();

    let pos = slots.iter().position(|s| *s == filter).unwrap_or(0);
    let next = if forward {
        (pos + 1) % slots.len()
    } else {
        (pos + slots.len() - 1) % slots.len()
    };
    slots[next]
}

/// The personal recipe library backing the Recipes tab
#[derive(Debug, Clone)]
pub struct RecipeLibrary {
    pub recipes: Vec<Recipe>,
    pub filter: Option<Category>,
    pub cursor: usize,
}

impl RecipeLibrary {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            filter: None,
            cursor: 0,
        }
    }

    /// Indices into `recipes` that pass the active filter, in display order
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.recipes
            .iter()
            .enumerate()
            .filter(|(_, r)| self.filter.map_or(true, |c| r.category == c))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn filtered(&self) -> Vec<&Recipe> {
        self.filtered_indices()
            .into_iter()
            .map(|i| &self.recipes[i])
            .collect()
    }

    pub fn selected(&self) -> Option<&Recipe> {
        let indices = self.filtered_indices();
        indices.get(self.cursor).map(|&i| &self.recipes[i])
    }

    pub fn move_down(&mut self) {
        let len = self.filtered_indices().len();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        self.filter = cycle_filter(self.filter, forward);
        self.cursor = 0;
    }

    /// Newly authored recipes land at the top, visible regardless of the
    /// filter that was active while authoring.
    pub fn add_front(&mut self, recipe: Recipe) {
        self.recipes.insert(0, recipe);
        self.filter = None;
        self.cursor = 0;
    }

    /// Recipe count per category, for the filter bar labels
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let counts = self.recipes.iter().counts_by(|r| r.category);
        Category::ALL
            .iter()
            .map(|c| (*c, counts.get(c).copied().unwrap_or(0)))
            .collect()
    }
}

/// The community feed backing the Explore tab
#[derive(Debug, Clone)]
pub struct ExploreFeed {
    pub recipes: Vec<Recipe>,
    pub filter: Option<Category>,
    pub cursor: usize,
}

impl ExploreFeed {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            filter: None,
            cursor: 0,
        }
    }

    pub fn filtered_indices(&self) -> Vec<usize> {
        self.recipes
            .iter()
            .enumerate()
            .filter(|(_, r)| self.filter.map_or(true, |c| r.category == c))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn filtered(&self) -> Vec<&Recipe> {
        self.filtered_indices()
            .into_iter()
            .map(|i| &self.recipes[i])
            .collect()
    }

    pub fn selected(&self) -> Option<&Recipe> {
        let indices = self.filtered_indices();
        indices.get(self.cursor).map(|&i| &self.recipes[i])
    }

    pub fn move_down(&mut self) {
        let len = self.filtered_indices().len();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        self.filter = cycle_filter(self.filter, forward);
        self.cursor = 0;
    }

    /// Flip the like on the selected recipe; returns a toast message when
    /// the recipe was just liked.
    pub fn toggle_like(&mut self) -> Option<&'static str> {
        let idx = *self.filtered_indices().get(self.cursor)?;
        let recipe = &mut self.recipes[idx];

        if recipe.liked {
            recipe.liked = false;
            recipe.likes = recipe.likes.saturating_sub(1);
            None
        } else {
            recipe.liked = true;
            recipe.likes += 1;
            Some("Added to favorites!")
        }
    }

    /// Flip the saved flag on the selected recipe; returns a toast message.
    pub fn toggle_save(&mut self) -> Option<&'static str> {
        let idx = *self.filtered_indices().get(self.cursor)?;
        let recipe = &mut self.recipes[idx];

        recipe.saved = !recipe.saved;
        Some(if recipe.saved {
            "Recipe saved"
        } else {
            "Recipe removed"
        })
    }
}
