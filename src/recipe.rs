use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Difficulty badge shown on recipe cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Category a recipe is filed under; the filter bar cycles through these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
pub enum Category {
    Quick,
    Healthy,
    Vegetarian,
    Dessert,
}

impl Category {
    /// Fixed order used by every filter bar
    pub const ALL: [Category; 4] = [
        Category::Quick,
        Category::Healthy,
        Category::Vegetarian,
        Category::Dessert,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar_url: String,
}

/// One preparation step; steps with a duration offer a startable countdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub text: String,
    #[serde(default)]
    pub duration_secs: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub total_time: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub image_url: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub saved: bool,
    pub ingredients: Vec<String>,
    pub steps: Vec<RecipeStep>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// True if any step carries a countdown duration
    pub fn has_timed_steps(&self) -> bool {
        self.steps.iter().any(|s| s.duration_secs.is_some())
    }
}

/// Short random alphanumeric id for recipes authored in this session
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..8)
        .map(|_| {
            let chars = b"abcdefghijklmnopqrstuvwxyz0123456789";
            chars[rng.gen_range(0..chars.len())] as char
        })
        .collect()
}

/// Derive the headline cooking time from step durations, mirroring how
/// authored recipes report time: the longest single step, in minutes.
pub fn derive_total_time(steps: &[RecipeStep]) -> String {
    let max_mins = steps
        .iter()
        .filter_map(|s| s.duration_secs)
        .map(|secs| secs / 60)
        .max();

    match max_mins {
        Some(mins) if mins > 0 => format!("{} min", mins),
        _ => "15 min".to_string(),
    }
}
