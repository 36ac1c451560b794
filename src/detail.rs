use std::collections::HashSet;

use crate::recipe::Recipe;
use crate::timer::{StepTimer, TickOutcome, TimerError};

/// What the detail cursor is pointing at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailRow {
    Ingredient(usize),
    Step(usize),
}

/// State behind the opened recipe overlay: ingredient checklist, step
/// cursor, and the single active countdown.
#[derive(Debug, Clone)]
pub struct DetailState {
    pub recipe: Recipe,
    pub checked: HashSet<usize>,
    pub cursor: usize,
    pub timer: Option<StepTimer>,
}

impl DetailState {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            checked: HashSet::new(),
            cursor: 0,
            timer: None,
        }
    }

    fn row_count(&self) -> usize {
        self.recipe.ingredients.len() + self.recipe.steps.len()
    }

    pub fn current_row(&self) -> Option<DetailRow> {
        let ingredients = self.recipe.ingredients.len();
        if self.cursor < ingredients {
            Some(DetailRow::Ingredient(self.cursor))
        } else if self.cursor < self.row_count() {
            Some(DetailRow::Step(self.cursor - ingredients))
        } else {
            None
        }
    }

    pub fn move_down(&mut self) {
        if self.row_count() > 0 && self.cursor < self.row_count() - 1 {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Space on an ingredient toggles its checkbox; on a timed step it
    /// starts the countdown, replacing any timer already running (one
    /// timer at a time).
    pub fn activate(&mut self) -> Result<(), TimerError> {
        match self.current_row() {
            Some(DetailRow::Ingredient(i)) => {
                if !self.checked.remove(&i) {
                    self.checked.insert(i);
                }
                Ok(())
            }
            Some(DetailRow::Step(i)) => {
                if let Some(duration) = self.recipe.steps[i].duration_secs {
                    self.timer = Some(StepTimer::start(duration)?);
                }
                Ok(())
            }
            None => Ok(()),
        }
    }

    pub fn toggle_timer(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.toggle();
        }
    }

    /// Dismiss the countdown without a completion signal
    pub fn cancel_timer(&mut self) {
        self.timer = None;
    }

    /// Advance the countdown by one second. Returns true exactly when this
    /// tick completed the timer; the finished timer is discarded so it can
    /// never signal again.
    pub fn on_tick(&mut self) -> bool {
        if let Some(timer) = self.timer.as_mut() {
            if timer.tick() == TickOutcome::Completed {
                self.timer = None;
                return true;
            }
        }
        false
    }

    pub fn share_text(&self) -> String {
        format!("Check out this recipe: {}", self.recipe.title)
    }
}
