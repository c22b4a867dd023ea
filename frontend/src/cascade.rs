//! State machine behind the three-level dependent dropdowns
//! (samputa → tatvapadakara → tatvapada).
//!
//! The reducer is pure: `apply` consumes an action and returns the next state
//! plus the side effect the page must run (fetch child options, fetch the
//! leaf detail, open an inline "add new" input, or nothing). Pages resolve
//! effects with `spawn_local` and feed the results back as `*Loaded` actions,
//! so the selection contract (picking a level clears and disables everything
//! below it until fresh options arrive) is enforced in one place and unit
//! tested off the browser.

use tatvapada_shared::{Samputa, TatvapadaSummary, Tatvapadakara};

/// Option value that branches into inline creation instead of a fetch.
pub const ADD_NEW: &str = "__add_new__";

/// The three selector levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeLevel {
    Samputa,
    Tatvapadakara,
    Tatvapada,
}

/// Dropdown options and selections for all three levels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CascadeState {
    pub samputas: Vec<Samputa>,
    pub selected_samputa: Option<String>,
    pub authors: Vec<Tatvapadakara>,
    pub selected_author: Option<String>,
    pub verses: Vec<TatvapadaSummary>,
    pub selected_verse: Option<String>,
    /// Level currently collecting an inline "add new" value, if any.
    pub inline_new: Option<CascadeLevel>,
    /// Level whose options are still being fetched, if any.
    pub loading: Option<CascadeLevel>,
}

/// Everything that can happen to the cascade.
#[derive(Debug, Clone, PartialEq)]
pub enum CascadeAction {
    SamputasLoaded(Vec<Samputa>),
    PickSamputa(String),
    AuthorsLoaded(Vec<Tatvapadakara>),
    PickAuthor(String),
    VersesLoaded(Vec<TatvapadaSummary>),
    PickVerse(String),
    /// Commit the value typed into the inline "add new" input at `level`.
    /// The value only becomes server state when the form is submitted.
    InlineCreated {
        level: CascadeLevel,
        value: String,
    },
    /// Dismiss the inline input without creating anything.
    CancelInline,
    /// Drop all selections (options for the root level are kept).
    Reset,
}

/// Side effect the page must run after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeEffect {
    None,
    FetchAuthors {
        samputa: String,
    },
    FetchVerses {
        samputa: String,
        hesaru: String,
    },
    FetchDetail {
        samputa: String,
        hesaru: String,
        sankhye: String,
    },
    OpenInlineInput(CascadeLevel),
    /// Blank the detail form for a brand-new verse under this key.
    StartNewVerse {
        samputa: String,
        hesaru: String,
        sankhye: String,
    },
}

impl CascadeState {
    /// Applies one action, returning the next state and the effect to run.
    pub fn apply(mut self, action: CascadeAction) -> (CascadeState, CascadeEffect) {
        match action {
            CascadeAction::SamputasLoaded(samputas) => {
                self.samputas = samputas;
                if self.loading == Some(CascadeLevel::Samputa) {
                    self.loading = None;
                }
                (self, CascadeEffect::None)
            }
            CascadeAction::PickSamputa(value) => {
                self.clear_below(CascadeLevel::Samputa);
                if value == ADD_NEW {
                    self.selected_samputa = None;
                    self.inline_new = Some(CascadeLevel::Samputa);
                    return (self, CascadeEffect::OpenInlineInput(CascadeLevel::Samputa));
                }
                self.inline_new = None;
                if value.is_empty() {
                    self.selected_samputa = None;
                    return (self, CascadeEffect::None);
                }
                self.selected_samputa = Some(value.clone());
                self.loading = Some(CascadeLevel::Tatvapadakara);
                (self, CascadeEffect::FetchAuthors { samputa: value })
            }
            CascadeAction::AuthorsLoaded(authors) => {
                self.authors = authors;
                if self.loading == Some(CascadeLevel::Tatvapadakara) {
                    self.loading = None;
                }
                (self, CascadeEffect::None)
            }
            CascadeAction::PickAuthor(value) => {
                self.clear_below(CascadeLevel::Tatvapadakara);
                let Some(samputa) = self.selected_samputa.clone() else {
                    // No valid parent selection; the control should have been
                    // disabled, so treat this as a no-op.
                    return (self, CascadeEffect::None);
                };
                if value == ADD_NEW {
                    self.selected_author = None;
                    self.inline_new = Some(CascadeLevel::Tatvapadakara);
                    return (
                        self,
                        CascadeEffect::OpenInlineInput(CascadeLevel::Tatvapadakara),
                    );
                }
                self.inline_new = None;
                if value.is_empty() {
                    self.selected_author = None;
                    return (self, CascadeEffect::None);
                }
                self.selected_author = Some(value.clone());
                self.loading = Some(CascadeLevel::Tatvapada);
                (self, CascadeEffect::FetchVerses { samputa, hesaru: value })
            }
            CascadeAction::VersesLoaded(verses) => {
                self.verses = verses;
                if self.loading == Some(CascadeLevel::Tatvapada) {
                    self.loading = None;
                }
                (self, CascadeEffect::None)
            }
            CascadeAction::PickVerse(value) => {
                let (Some(samputa), Some(hesaru)) =
                    (self.selected_samputa.clone(), self.selected_author.clone())
                else {
                    return (self, CascadeEffect::None);
                };
                if value == ADD_NEW {
                    self.selected_verse = None;
                    self.inline_new = Some(CascadeLevel::Tatvapada);
                    return (self, CascadeEffect::OpenInlineInput(CascadeLevel::Tatvapada));
                }
                self.inline_new = None;
                if value.is_empty() {
                    self.selected_verse = None;
                    return (self, CascadeEffect::None);
                }
                self.selected_verse = Some(value.clone());
                (
                    self,
                    CascadeEffect::FetchDetail { samputa, hesaru, sankhye: value },
                )
            }
            CascadeAction::InlineCreated { level, value } => {
                let value = value.trim().to_string();
                if value.is_empty() || value == ADD_NEW {
                    return (self, CascadeEffect::None);
                }
                self.inline_new = None;
                match level {
                    CascadeLevel::Samputa => {
                        self.clear_below(CascadeLevel::Samputa);
                        if !self.samputas.iter().any(|s| s.samputa_sankhye == value) {
                            self.samputas.push(Samputa {
                                samputa_sankhye: value.clone(),
                                title: value.clone(),
                                editor: None,
                            });
                        }
                        // A brand-new volume has no authors to fetch.
                        self.selected_samputa = Some(value);
                        (self, CascadeEffect::None)
                    }
                    CascadeLevel::Tatvapadakara => {
                        if self.selected_samputa.is_none() {
                            return (self, CascadeEffect::None);
                        }
                        self.clear_below(CascadeLevel::Tatvapadakara);
                        if !self.authors.iter().any(|a| a.hesaru == value) {
                            self.authors.push(Tatvapadakara {
                                hesaru: value.clone(),
                                kavi_parichaya: None,
                            });
                        }
                        self.selected_author = Some(value);
                        (self, CascadeEffect::None)
                    }
                    CascadeLevel::Tatvapada => {
                        let (Some(samputa), Some(hesaru)) =
                            (self.selected_samputa.clone(), self.selected_author.clone())
                        else {
                            return (self, CascadeEffect::None);
                        };
                        self.selected_verse = Some(value.clone());
                        (
                            self,
                            CascadeEffect::StartNewVerse { samputa, hesaru, sankhye: value },
                        )
                    }
                }
            }
            CascadeAction::CancelInline => {
                self.inline_new = None;
                (self, CascadeEffect::None)
            }
            CascadeAction::Reset => {
                self.clear_below(CascadeLevel::Samputa);
                self.selected_samputa = None;
                self.inline_new = None;
                self.loading = None;
                (self, CascadeEffect::None)
            }
        }
    }

    // Clears options and selections strictly below `level`.
    fn clear_below(&mut self, level: CascadeLevel) {
        match level {
            CascadeLevel::Samputa => {
                self.authors.clear();
                self.selected_author = None;
                self.verses.clear();
                self.selected_verse = None;
            }
            CascadeLevel::Tatvapadakara => {
                self.verses.clear();
                self.selected_verse = None;
            }
            CascadeLevel::Tatvapada => {}
        }
    }

    /// Author dropdown is usable only with a volume picked and its options
    /// no longer in flight.
    pub fn author_enabled(&self) -> bool {
        self.selected_samputa.is_some() && self.loading != Some(CascadeLevel::Tatvapadakara)
    }

    /// Verse dropdown is usable only with an author picked and its options
    /// no longer in flight.
    pub fn verse_enabled(&self) -> bool {
        self.selected_author.is_some() && self.loading != Some(CascadeLevel::Tatvapada)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_state() -> CascadeState {
        let mut state = CascadeState::default();
        state.samputas = vec![
            Samputa {
                samputa_sankhye: "1".into(),
                title: "ಸಂಪುಟ ಒಂದು".into(),
                editor: None,
            },
            Samputa {
                samputa_sankhye: "2".into(),
                title: "ಸಂಪುಟ ಎರಡು".into(),
                editor: None,
            },
        ];
        state.selected_samputa = Some("1".into());
        state.authors = vec![Tatvapadakara {
            hesaru: "ಶಿಶುನಾಳ ಷರೀಫ".into(),
            kavi_parichaya: None,
        }];
        state.selected_author = Some("ಶಿಶುನಾಳ ಷರೀಫ".into());
        state.verses = vec![TatvapadaSummary {
            samputa_sankhye: "1".into(),
            tatvapada_sankhye: "4".into(),
            tatvapadakara_hesaru: "ಶಿಶುನಾಳ ಷರೀಫ".into(),
            modala_salu: "ಸೋರುತಿಹುದು".into(),
        }];
        state.selected_verse = Some("4".into());
        state
    }

    #[test]
    fn picking_a_volume_clears_and_disables_descendants() {
        let state = populated_state();
        let (state, effect) = state.apply(CascadeAction::PickSamputa("2".into()));

        assert!(state.authors.is_empty());
        assert_eq!(state.selected_author, None);
        assert!(state.verses.is_empty());
        assert_eq!(state.selected_verse, None);
        // Disabled until fresh author options arrive.
        assert!(!state.author_enabled());
        assert!(!state.verse_enabled());
        assert_eq!(effect, CascadeEffect::FetchAuthors { samputa: "2".into() });

        let (state, effect) = state.apply(CascadeAction::AuthorsLoaded(vec![Tatvapadakara {
            hesaru: "ಕಡಕೋಳ ಮಡಿವಾಳಪ್ಪ".into(),
            kavi_parichaya: None,
        }]));
        assert_eq!(effect, CascadeEffect::None);
        assert!(state.author_enabled());
        assert!(!state.verse_enabled());
    }

    #[test]
    fn picking_an_author_clears_only_the_verse_level() {
        let state = populated_state();
        let (state, effect) = state.apply(CascadeAction::PickAuthor("ಅಂಬಿಗರ ಚೌಡಯ್ಯ".into()));
        assert_eq!(state.selected_samputa.as_deref(), Some("1"));
        assert!(state.verses.is_empty());
        assert_eq!(state.selected_verse, None);
        assert_eq!(
            effect,
            CascadeEffect::FetchVerses {
                samputa: "1".into(),
                hesaru: "ಅಂಬಿಗರ ಚೌಡಯ್ಯ".into(),
            }
        );
    }

    #[test]
    fn add_new_sentinel_never_fetches() {
        for (action, level) in [
            (
                CascadeAction::PickSamputa(ADD_NEW.into()),
                CascadeLevel::Samputa,
            ),
            (
                CascadeAction::PickAuthor(ADD_NEW.into()),
                CascadeLevel::Tatvapadakara,
            ),
            (
                CascadeAction::PickVerse(ADD_NEW.into()),
                CascadeLevel::Tatvapada,
            ),
        ] {
            let (state, effect) = populated_state().apply(action);
            assert_eq!(effect, CascadeEffect::OpenInlineInput(level));
            assert_eq!(state.inline_new, Some(level));
        }
    }

    #[test]
    fn leaf_selection_yields_a_detail_fetch_with_the_full_key() {
        let (_, effect) = populated_state().apply(CascadeAction::PickVerse("9".into()));
        assert_eq!(
            effect,
            CascadeEffect::FetchDetail {
                samputa: "1".into(),
                hesaru: "ಶಿಶುನಾಳ ಷರೀಫ".into(),
                sankhye: "9".into(),
            }
        );
    }

    #[test]
    fn inline_created_volume_joins_the_options_without_fetching() {
        let (state, _) = populated_state().apply(CascadeAction::PickSamputa(ADD_NEW.into()));
        let (state, effect) = state.apply(CascadeAction::InlineCreated {
            level: CascadeLevel::Samputa,
            value: "3".into(),
        });
        assert_eq!(effect, CascadeEffect::None);
        assert_eq!(state.selected_samputa.as_deref(), Some("3"));
        assert!(state.samputas.iter().any(|s| s.samputa_sankhye == "3"));
        assert_eq!(state.inline_new, None);
        // New volume has no authors yet; the dropdown is enabled but empty.
        assert!(state.authors.is_empty());
        assert!(state.author_enabled());
    }

    #[test]
    fn inline_created_verse_starts_a_blank_form() {
        let (state, _) = populated_state().apply(CascadeAction::PickVerse(ADD_NEW.into()));
        let (_, effect) = state.apply(CascadeAction::InlineCreated {
            level: CascadeLevel::Tatvapada,
            value: "99".into(),
        });
        assert_eq!(
            effect,
            CascadeEffect::StartNewVerse {
                samputa: "1".into(),
                hesaru: "ಶಿಶುನಾಳ ಷರೀಫ".into(),
                sankhye: "99".into(),
            }
        );
    }

    #[test]
    fn blank_inline_value_is_ignored() {
        let (state, _) = populated_state().apply(CascadeAction::PickAuthor(ADD_NEW.into()));
        let (state, effect) = state.apply(CascadeAction::InlineCreated {
            level: CascadeLevel::Tatvapadakara,
            value: "  ".into(),
        });
        assert_eq!(effect, CascadeEffect::None);
        // Prompt stays open until a usable value or a cancel arrives.
        assert_eq!(state.inline_new, Some(CascadeLevel::Tatvapadakara));
    }

    #[test]
    fn child_pick_without_parent_is_a_no_op() {
        let state = CascadeState::default();
        let (state, effect) = state.apply(CascadeAction::PickAuthor("ಯಾರೋ".into()));
        assert_eq!(effect, CascadeEffect::None);
        assert_eq!(state.selected_author, None);
        assert!(!state.author_enabled());
    }

    #[test]
    fn clearing_a_selection_disables_descendants_without_fetching() {
        let state = populated_state();
        let (state, effect) = state.apply(CascadeAction::PickSamputa(String::new()));
        assert_eq!(effect, CascadeEffect::None);
        assert_eq!(state.selected_samputa, None);
        assert!(!state.author_enabled());
    }

    #[test]
    fn reset_keeps_root_options_only() {
        let (state, _) = populated_state().apply(CascadeAction::Reset);
        assert_eq!(state.samputas.len(), 2);
        assert_eq!(state.selected_samputa, None);
        assert!(state.authors.is_empty());
        assert!(state.verses.is_empty());
    }
}
