use chrono::Utc;

use crate::recipe::{derive_total_time, generate_id, Category, Difficulty, Recipe, RecipeStep};

/// Placeholder hero image for recipes authored in the terminal
const AUTHORED_IMAGE_URL: &str = "https://images.unsplash.com/photo-1769770639042-05e6b54a70cb";

/// The simulated extraction takes this many seconds
const IMPORT_ANALYSIS_TICKS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Choose between manual authoring and AI import
    Selection,
    Manual,
    AiImport,
}

/// Which input the manual form currently edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Difficulty,
    Ingredient(usize),
    StepText(usize),
    StepDuration(usize),
}

/// A step under construction; duration is kept as the raw digits typed
/// into the minutes box until save time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepDraft {
    pub text: String,
    pub duration_mins: String,
}

/// Pending simulated "AI Chef Vision" extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportJob {
    pub ticks_remaining: u32,
}

/// State behind the Create tab: mode selection, the manual form, and the
/// simulated video import.
#[derive(Debug, Clone)]
pub struct RecipeForm {
    pub mode: FormMode,
    pub title: String,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub steps: Vec<StepDraft>,
    pub focus: usize,
    pub link: String,
    pub import: Option<ImportJob>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            mode: FormMode::Selection,
            title: String::new(),
            difficulty: Difficulty::Easy,
            ingredients: vec![String::new()],
            steps: vec![StepDraft::default()],
            focus: 0,
            link: String::new(),
            import: None,
        }
    }
}

impl RecipeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field back to a single empty row of each kind
    pub fn reset(&mut self) {
        *self = Self {
            mode: self.mode,
            ..Self::default()
        };
    }

    /// Manual-form fields in focus order
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::Title, FormField::Difficulty];
        for i in 0..self.ingredients.len() {
            fields.push(FormField::Ingredient(i));
        }
        for i in 0..self.steps.len() {
            fields.push(FormField::StepText(i));
            fields.push(FormField::StepDuration(i));
        }
        fields
    }

    pub fn current_field(&self) -> FormField {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + 1) % len;
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Type into whichever field has focus. Duration boxes accept digits
    /// only, mirroring the numeric input of the original form.
    pub fn input_char(&mut self, c: char) {
        match self.current_field() {
            FormField::Title => self.title.push(c),
            FormField::Difficulty => {}
            FormField::Ingredient(i) => self.ingredients[i].push(c),
            FormField::StepText(i) => self.steps[i].text.push(c),
            FormField::StepDuration(i) => {
                if c.is_ascii_digit() {
                    self.steps[i].duration_mins.push(c);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.current_field() {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Difficulty => {}
            FormField::Ingredient(i) => {
                self.ingredients[i].pop();
            }
            FormField::StepText(i) => {
                self.steps[i].text.pop();
            }
            FormField::StepDuration(i) => {
                self.steps[i].duration_mins.pop();
            }
        }
    }

    /// Left/right on the difficulty selector
    pub fn cycle_difficulty(&mut self, forward: bool) {
        if self.current_field() != FormField::Difficulty {
            return;
        }
        let order = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
        let pos = order.iter().position(|d| *d == self.difficulty).unwrap_or(0);
        self.difficulty = if forward {
            order[(pos + 1) % order.len()]
        } else {
            order[(pos + order.len() - 1) % order.len()]
        };
    }

    /// Enter: append a new row after the focused list row and focus it;
    /// on scalar fields it just advances focus.
    pub fn add_row(&mut self) {
        match self.current_field() {
            FormField::Ingredient(i) => {
                self.ingredients.insert(i + 1, String::new());
                self.focus += 1;
            }
            FormField::StepText(i) | FormField::StepDuration(i) => {
                self.steps.insert(i + 1, StepDraft::default());
                // Land on the new step's text box
                self.focus = self
                    .fields()
                    .iter()
                    .position(|f| *f == FormField::StepText(i + 1))
                    .unwrap_or(self.focus);
            }
            _ => self.focus_next(),
        }
    }

    /// Ctrl-D: drop the focused row, keeping at least one of each kind
    pub fn remove_row(&mut self) {
        match self.current_field() {
            FormField::Ingredient(i) if self.ingredients.len() > 1 => {
                self.ingredients.remove(i);
            }
            FormField::StepText(i) | FormField::StepDuration(i) if self.steps.len() > 1 => {
                self.steps.remove(i);
            }
            _ => return,
        }
        let len = self.fields().len();
        self.focus = self.focus.min(len - 1);
    }

    /// Validate and build the recipe. Blank rows are dropped; durations
    /// are minutes in the form and seconds on the recipe.
    pub fn save(&mut self) -> Result<Recipe, &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }

        let ingredients: Vec<String> = self
            .ingredients
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let steps: Vec<RecipeStep> = self
            .steps
            .iter()
            .filter(|s| !s.text.trim().is_empty())
            .map(|s| RecipeStep {
                text: s.text.trim().to_string(),
                duration_secs: s
                    .duration_mins
                    .parse::<i64>()
                    .ok()
                    .filter(|m| *m > 0)
                    .and_then(|m| m.checked_mul(60)),
            })
            .collect();

        let recipe = Recipe {
            id: generate_id(),
            title: self.title.trim().to_string(),
            total_time: derive_total_time(&steps),
            difficulty: self.difficulty,
            category: Category::Quick,
            image_url: AUTHORED_IMAGE_URL.to_string(),
            author: None,
            likes: 0,
            liked: false,
            saved: false,
            ingredients,
            steps,
            created_at: Some(Utc::now()),
        };

        self.reset();
        self.mode = FormMode::Selection;
        Ok(recipe)
    }

    pub fn is_analyzing(&self) -> bool {
        self.import.is_some()
    }

    /// Kick off the simulated extraction of the pasted video link
    pub fn start_import(&mut self) {
        if self.import.is_none() {
            self.import = Some(ImportJob {
                ticks_remaining: IMPORT_ANALYSIS_TICKS,
            });
        }
    }

    /// Esc while analyzing abandons the job without touching the form
    pub fn abort_import(&mut self) {
        self.import = None;
    }

    /// Advance a pending import by one tick. On the final tick the form is
    /// pre-filled with the extracted recipe and switched to manual mode
    /// for editing. Returns true exactly when that happens.
    pub fn on_tick(&mut self) -> bool {
        let Some(job) = self.import.as_mut() else {
            return false;
        };

        job.ticks_remaining = job.ticks_remaining.saturating_sub(1);
        if job.ticks_remaining > 0 {
            return false;
        }

        self.import = None;
        self.prefill_extracted();
        self.mode = FormMode::Manual;
        true
    }

    fn prefill_extracted(&mut self) {
        self.title = "Pasta alla Gricia".to_string();
        self.difficulty = Difficulty::Medium;
        self.ingredients = vec![
            "Pasta".to_string(),
            "Guanciale".to_string(),
            "Pecorino Romano".to_string(),
            "Black pepper".to_string(),
        ];
        self.steps = vec![
            StepDraft {
                text: "Brown the guanciale until crisp.".to_string(),
                duration_mins: "5".to_string(),
            },
            StepDraft {
                text: "Toss with pecorino and pasta water.".to_string(),
                duration_mins: "3".to_string(),
            },
        ];
        self.focus = 0;
    }
}
