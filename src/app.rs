use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use webbrowser::Browser;

use crate::catalog;
use crate::detail::DetailState;
use crate::form::{FormMode, RecipeForm};
use crate::library::{ExploreFeed, RecipeLibrary};
use crate::recipe::Recipe;
use crate::toast::ToastQueue;

/// Bottom-nav tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum Tab {
    Recipes,
    Explore,
    Create,
}

impl Tab {
    fn next(self) -> Self {
        match self {
            Tab::Recipes => Tab::Explore,
            Tab::Explore => Tab::Create,
            Tab::Create => Tab::Recipes,
        }
    }
}

/// Top-level application state: three tabs, an optional detail overlay,
/// and the shared toast queue.
#[derive(Debug)]
pub struct App {
    pub tab: Tab,
    pub library: RecipeLibrary,
    pub explore: ExploreFeed,
    pub detail: Option<DetailState>,
    pub form: RecipeForm,
    pub toasts: ToastQueue,
    pub should_quit: bool,
}

impl App {
    pub fn new(tab: Tab) -> Self {
        Self::with_recipes(tab, catalog::seed_library(), catalog::seed_explore())
    }

    pub fn with_recipes(tab: Tab, library: Vec<Recipe>, explore: Vec<Recipe>) -> Self {
        Self {
            tab,
            library: RecipeLibrary::new(library),
            explore: ExploreFeed::new(explore),
            detail: None,
            form: RecipeForm::new(),
            toasts: ToastQueue::new(),
            should_quit: false,
        }
    }

    /// One-second heartbeat: ages toasts, then advances the active
    /// countdown and any pending import.
    pub fn on_tick(&mut self) {
        self.toasts.on_tick();

        if let Some(detail) = self.detail.as_mut() {
            if detail.on_tick() {
                self.toasts.success("Time's up!");
            }
        }

        if self.form.on_tick() {
            self.toasts.success("Recipe extracted! You can edit it now.");
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.detail.is_some() {
            self.handle_detail_key(key);
            return;
        }

        match self.tab {
            Tab::Recipes => self.handle_recipes_key(key),
            Tab::Explore => self.handle_explore_key(key),
            Tab::Create => self.handle_create_key(key),
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };

        match key.code {
            // Closing the overlay drops the timer with it; no stray ticks
            KeyCode::Esc | KeyCode::Backspace => {
                self.detail = None;
            }
            KeyCode::Up => detail.move_up(),
            KeyCode::Down => detail.move_down(),
            KeyCode::Char(' ') => {
                if let Err(err) = detail.activate() {
                    let msg = err.to_string();
                    self.toasts.error(msg);
                }
            }
            KeyCode::Char('p') => detail.toggle_timer(),
            KeyCode::Char('x') => detail.cancel_timer(),
            KeyCode::Char('o') => self.share_recipe(),
            _ => {}
        }
    }

    fn handle_recipes_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::Char('1') => self.tab = Tab::Recipes,
            KeyCode::Char('2') => self.tab = Tab::Explore,
            KeyCode::Char('3') => self.tab = Tab::Create,
            KeyCode::Up => self.library.move_up(),
            KeyCode::Down => self.library.move_down(),
            KeyCode::Left => self.library.cycle_filter(false),
            KeyCode::Right => self.library.cycle_filter(true),
            KeyCode::Enter => {
                if let Some(recipe) = self.library.selected() {
                    self.detail = Some(DetailState::new(recipe.clone()));
                }
            }
            _ => {}
        }
    }

    fn handle_explore_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::Char('1') => self.tab = Tab::Recipes,
            KeyCode::Char('2') => self.tab = Tab::Explore,
            KeyCode::Char('3') => self.tab = Tab::Create,
            KeyCode::Up => self.explore.move_up(),
            KeyCode::Down => self.explore.move_down(),
            KeyCode::Left => self.explore.cycle_filter(false),
            KeyCode::Right => self.explore.cycle_filter(true),
            KeyCode::Enter => {
                if let Some(recipe) = self.explore.selected() {
                    self.detail = Some(DetailState::new(recipe.clone()));
                }
            }
            KeyCode::Char('l') => {
                if let Some(msg) = self.explore.toggle_like() {
                    self.toasts.success(msg);
                }
            }
            KeyCode::Char('s') => {
                if let Some(msg) = self.explore.toggle_save() {
                    self.toasts.success(msg);
                }
            }
            _ => {}
        }
    }

    fn handle_create_key(&mut self, key: KeyEvent) {
        match self.form.mode {
            FormMode::Selection => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Tab => self.tab = self.tab.next(),
                KeyCode::Char('1') => self.tab = Tab::Recipes,
                KeyCode::Char('2') => self.tab = Tab::Explore,
                KeyCode::Char('3') => self.tab = Tab::Create,
                KeyCode::Char('m') => self.form.mode = FormMode::Manual,
                KeyCode::Char('a') => self.form.mode = FormMode::AiImport,
                _ => {}
            },
            FormMode::Manual => self.handle_manual_form_key(key),
            FormMode::AiImport => self.handle_import_key(key),
        }
    }

    fn handle_manual_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.form.reset();
                self.form.mode = FormMode::Selection;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.form.save() {
                    Ok(recipe) => {
                        self.library.add_front(recipe);
                        self.tab = Tab::Recipes;
                        self.toasts.success("Recipe saved!");
                    }
                    Err(msg) => self.toasts.error(msg),
                }
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.remove_row();
            }
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Left => self.form.cycle_difficulty(false),
            KeyCode::Right => self.form.cycle_difficulty(true),
            KeyCode::Enter => self.form.add_row(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.input_char(c),
            _ => {}
        }
    }

    fn handle_import_key(&mut self, key: KeyEvent) {
        if self.form.is_analyzing() {
            // Only Esc interrupts a pending analysis
            if key.code == KeyCode::Esc {
                self.form.abort_import();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.form.link.clear();
                self.form.mode = FormMode::Selection;
            }
            KeyCode::Enter => self.form.start_import(),
            KeyCode::Backspace => {
                self.form.link.pop();
            }
            KeyCode::Char(c) => self.form.link.push(c),
            _ => {}
        }
    }

    fn share_recipe(&mut self) {
        let Some(detail) = &self.detail else {
            return;
        };

        let text = detail.share_text().replace(' ', "%20");
        if Browser::is_available() {
            webbrowser::open(&format!("https://twitter.com/intent/tweet?text={}", text))
                .unwrap_or_default();
        } else {
            self.toasts.info("Link copied to clipboard");
        }
    }
}
