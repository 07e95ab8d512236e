//! Theme application engine
//!
//! Turns a selection plus optional customizations into a variable set,
//! writes it to a [`RenderRoot`] and publishes a [`ThemeApplied`] event.
//!
//! ```text
//! Uninitialized --apply--> Applied { transitioning: false }
//! Applied --change--> Applied { transitioning: true } --window elapsed--> Applied { transitioning: false }
//! ```
//!
//! The transition window is a one-shot timer polled through [`ThemeEngine::tick`].

use crate::config::EngineConfig;
use crate::palette::ColorPalette;
use crate::root::RenderRoot;
use crate::theme::ThemeSelection;
use crate::themes::ThemeAssets;
use crate::tokens::FontTheme;
use crate::validate::{validate_root, TokenIssue};
use crate::vars::{compute_theme_vars, ThemeVars};
use ecosystem_animation::{Clock, TimerId, TimerQueue};
use ecosystem_core::{Observers, SubscriptionId};
use std::sync::Arc;
use std::time::Duration;

/// Class present on the root during the transition window
pub const TRANSITION_CLASS: &str = "theme-transitioning";

/// Class present on the root in dark mode
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnginePhase {
    Uninitialized,
    Applied { transitioning: bool },
}

/// Published after every apply that changed the root
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeApplied {
    pub selection: ThemeSelection,
    pub custom_colors: bool,
    pub vars: ThemeVars,
    /// Empty unless validation is enabled
    pub issues: Vec<TokenIssue>,
}

pub struct ThemeEngine<R: RenderRoot> {
    root: R,
    assets: Arc<ThemeAssets>,
    clock: Arc<dyn Clock>,
    transition: Duration,
    validate: bool,
    animate_transitions: bool,
    timers: TimerQueue<()>,
    transition_timer: Option<TimerId>,
    applied: Option<(ThemeSelection, ThemeVars)>,
    observers: Observers<ThemeApplied>,
}

impl<R: RenderRoot> ThemeEngine<R> {
    pub fn new(root: R, assets: Arc<ThemeAssets>, config: &EngineConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            root,
            assets,
            clock,
            transition: config.transition(),
            validate: config.validate,
            animate_transitions: true,
            timers: TimerQueue::new(),
            transition_timer: None,
            applied: None,
            observers: Observers::new(),
        }
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn assets(&self) -> &ThemeAssets {
        &self.assets
    }

    pub fn phase(&self) -> EnginePhase {
        match self.applied {
            None => EnginePhase::Uninitialized,
            Some(_) => EnginePhase::Applied {
                transitioning: self.transition_timer.is_some(),
            },
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition_timer.is_some()
    }

    /// The variable set currently on the root
    pub fn vars(&self) -> Option<&ThemeVars> {
        self.applied.as_ref().map(|(_, vars)| vars)
    }

    /// Whether later changes open a transition window
    pub fn set_animate_transitions(&mut self, animate: bool) {
        self.animate_transitions = animate;
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ThemeApplied) + Send + Sync + 'static,
    {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Recompute and write the variable set; `false` if nothing changed
    pub fn apply(
        &mut self,
        selection: ThemeSelection,
        palette: Option<&ColorPalette>,
        fonts: Option<&FontTheme>,
    ) -> bool {
        let vars = compute_theme_vars(&self.assets, selection, palette, fonts);

        if let Some((previous_selection, previous_vars)) = &self.applied {
            if *previous_selection == selection && *previous_vars == vars {
                tracing::trace!("ThemeEngine::apply - unchanged");
                return false;
            }
            for name in previous_vars.names() {
                if !vars.contains(name) {
                    self.root.remove_property(name);
                }
            }
        }
        let first_apply = self.applied.is_none();

        for (name, value) in vars.iter() {
            self.root.set_property(name, value);
        }
        self.root.set_attribute("data-theme", selection.theme.id());
        self.root.set_attribute("data-mode", selection.mode.id());
        self.root
            .set_attribute("data-custom-colors", if palette.is_some() { "true" } else { "false" });
        self.root.set_class(DARK_CLASS, selection.mode.is_dark());

        if !first_apply {
            self.start_transition();
        }

        let issues = if self.validate {
            validate_root(&self.root)
        } else {
            Vec::new()
        };
        for issue in &issues {
            tracing::warn!("theme {}/{}: {}", selection.theme.id(), selection.mode, issue);
        }

        tracing::debug!(
            "ThemeEngine::apply - {}/{} ({} vars, custom colors: {})",
            selection.theme.id(),
            selection.mode,
            vars.len(),
            palette.is_some()
        );
        self.applied = Some((selection, vars.clone()));
        self.observers.notify(&ThemeApplied {
            selection,
            custom_colors: palette.is_some(),
            vars,
            issues,
        });
        true
    }

    /// Fire due timers; ends the transition window once it has elapsed
    pub fn tick(&mut self) -> EnginePhase {
        if !self.timers.drain_due(self.clock.now()).is_empty() {
            self.transition_timer = None;
            self.root.set_class(TRANSITION_CLASS, false);
            tracing::trace!("ThemeEngine::tick - transition finished");
        }
        self.phase()
    }

    /// Time left in the transition window
    pub fn transition_remaining(&self) -> Option<Duration> {
        let deadline = self.timers.deadline(self.transition_timer?)?;
        Some(deadline.saturating_sub(self.clock.now()))
    }

    fn start_transition(&mut self) {
        if self.transition.is_zero() || !self.animate_transitions {
            return;
        }
        // A change inside the window restarts it
        if let Some(previous) = self.transition_timer.take() {
            self.timers.cancel(previous);
        }
        self.root.set_class(TRANSITION_CLASS, true);
        self.transition_timer = Some(self.timers.schedule(self.clock.now(), self.transition, ()));
    }
}

impl<R: RenderRoot> Drop for ThemeEngine<R> {
    fn drop(&mut self) {
        // The root can outlive the engine; don't leave it mid-transition
        if self.transition_timer.take().is_some() {
            tracing::trace!("ThemeEngine: dropped inside the transition window");
            self.root.set_class(TRANSITION_CLASS, false);
        }
    }
}

impl<R: RenderRoot + std::fmt::Debug> std::fmt::Debug for ThemeEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("root", &self.root)
            .field("phase", &self.phase())
            .field("transition", &self.transition)
            .field("validate", &self.validate)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::ColorChangeRequest;
    use crate::root::StyleRoot;
    use crate::theme::{ThemeMode, ThemeName};
    use ecosystem_animation::ManualClock;
    use std::sync::Mutex;

    fn engine(clock: &ManualClock) -> ThemeEngine<StyleRoot> {
        let config = EngineConfig {
            validate: true,
            ..EngineConfig::default()
        };
        ThemeEngine::new(
            StyleRoot::new(),
            Arc::new(ThemeAssets::builtin()),
            &config,
            Arc::new(clock.clone()),
        )
    }

    fn selection(theme: ThemeName, mode: ThemeMode) -> ThemeSelection {
        ThemeSelection::new(theme, mode)
    }

    #[test]
    fn test_first_apply_does_not_transition() {
        let clock = ManualClock::new();
        let mut engine = engine(&clock);
        assert_eq!(engine.phase(), EnginePhase::Uninitialized);

        assert!(engine.apply(selection(ThemeName::Studio, ThemeMode::Light), None, None));
        assert_eq!(engine.phase(), EnginePhase::Applied { transitioning: false });
        assert!(!engine.root().has_class(TRANSITION_CLASS));
        assert_eq!(engine.root().attribute("data-theme"), Some("studio"));
        assert_eq!(engine.root().attribute("data-mode"), Some("light"));
        assert_eq!(engine.root().attribute("data-custom-colors"), Some("false"));
        assert!(!engine.root().has_class(DARK_CLASS));
    }

    #[test]
    fn test_transition_window() {
        let clock = ManualClock::new();
        let mut engine = engine(&clock);
        engine.apply(selection(ThemeName::Studio, ThemeMode::Light), None, None);

        engine.apply(selection(ThemeName::Studio, ThemeMode::Dark), None, None);
        assert!(engine.root().has_class(DARK_CLASS));
        assert!(engine.root().has_class(TRANSITION_CLASS));
        assert_eq!(engine.transition_remaining(), Some(Duration::from_millis(400)));

        clock.advance(Duration::from_millis(399));
        assert_eq!(engine.tick(), EnginePhase::Applied { transitioning: true });

        clock.advance(Duration::from_millis(1));
        assert_eq!(engine.tick(), EnginePhase::Applied { transitioning: false });
        assert!(!engine.root().has_class(TRANSITION_CLASS));
    }

    #[test]
    fn test_change_inside_window_restarts_it() {
        let clock = ManualClock::new();
        let mut engine = engine(&clock);
        engine.apply(selection(ThemeName::Studio, ThemeMode::Light), None, None);
        engine.apply(selection(ThemeName::Terra, ThemeMode::Light), None, None);

        clock.advance(Duration::from_millis(300));
        engine.apply(selection(ThemeName::Volt, ThemeMode::Light), None, None);

        clock.advance(Duration::from_millis(300));
        assert!(engine.tick() == EnginePhase::Applied { transitioning: true });
        clock.advance(Duration::from_millis(100));
        assert!(engine.tick() == EnginePhase::Applied { transitioning: false });
    }

    #[test]
    fn test_drop_inside_window_clears_class() {
        let clock = ManualClock::new();
        let mut root = StyleRoot::new();
        {
            let mut engine = ThemeEngine::new(
                &mut root,
                Arc::new(ThemeAssets::builtin()),
                &EngineConfig::default(),
                Arc::new(clock.clone()),
            );
            engine.apply(selection(ThemeName::Studio, ThemeMode::Light), None, None);
            engine.apply(selection(ThemeName::Studio, ThemeMode::Dark), None, None);
            assert!(engine.root().has_class(TRANSITION_CLASS));
        }
        assert!(!root.has_class(TRANSITION_CLASS));
        assert!(root.has_class(DARK_CLASS));
        assert_eq!(root.attribute("data-mode"), Some("dark"));
    }

    #[test]
    fn test_unchanged_apply_is_a_no_op() {
        let clock = ManualClock::new();
        let mut engine = engine(&clock);
        let sel = selection(ThemeName::Volt, ThemeMode::Dark);
        assert!(engine.apply(sel, None, None));
        assert!(!engine.apply(sel, None, None));
        assert!(!engine.is_transitioning());
    }

    #[test]
    fn test_no_window_when_animations_are_off() {
        let clock = ManualClock::new();
        let mut engine = engine(&clock);
        engine.set_animate_transitions(false);
        engine.apply(selection(ThemeName::Studio, ThemeMode::Light), None, None);
        engine.apply(selection(ThemeName::Studio, ThemeMode::Dark), None, None);
        assert!(!engine.root().has_class(TRANSITION_CLASS));
    }

    #[test]
    fn test_palette_scale_is_removed_on_reset() {
        let clock = ManualClock::new();
        let mut engine = engine(&clock);
        let sel = selection(ThemeName::Studio, ThemeMode::Light);
        let palette = ColorPalette::from_request(&ColorChangeRequest::new("#ff0000"), ThemeMode::Light);

        engine.apply(sel, Some(&palette), None);
        assert_eq!(engine.root().property("--color-primary-500"), Some("#ff0000"));
        assert_eq!(engine.root().attribute("data-custom-colors"), Some("true"));

        engine.apply(sel, None, None);
        assert_eq!(engine.root().property("--color-primary-500"), None);
        assert_eq!(
            engine.root().property("--color-primary"),
            Some(engine.assets().primary(ThemeName::Studio, ThemeMode::Light))
        );
    }

    #[test]
    fn test_publishes_applied_event() {
        let clock = ManualClock::new();
        let mut engine = engine(&clock);
        let events = Arc::new(Mutex::new(Vec::new()));
        let e = events.clone();
        engine.subscribe(move |event: &ThemeApplied| {
            e.lock().unwrap().push((event.selection, event.issues.clone()));
        });

        engine.apply(selection(ThemeName::Terra, ThemeMode::Dark), None, None);
        engine.apply(selection(ThemeName::Terra, ThemeMode::Dark), None, None);

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, selection(ThemeName::Terra, ThemeMode::Dark));
        assert!(events[0].1.is_empty());
    }

    #[test]
    fn test_validation_warns_but_applies() {
        let clock = ManualClock::new();
        let mut engine = engine(&clock);
        let fonts = FontTheme::new("", "Inter", "Menlo");
        let events = Arc::new(Mutex::new(Vec::new()));
        let e = events.clone();
        engine.subscribe(move |event: &ThemeApplied| e.lock().unwrap().push(event.issues.clone()));

        assert!(engine.apply(selection(ThemeName::Studio, ThemeMode::Light), None, Some(&fonts)));
        assert_eq!(
            events.lock().unwrap()[0],
            vec![TokenIssue::Missing("--font-heading")]
        );
        assert_eq!(engine.root().property("--font-body"), Some("Inter"));
    }
}
