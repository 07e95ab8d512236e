//! Wires the stores, the reduced-motion signal and the engine together

use crate::config::EngineConfig;
use crate::engine::{EnginePhase, ThemeEngine};
use crate::root::RenderRoot;
use crate::store::{CustomizerStore, ThemeStore};
use crate::theme::ThemeSelection;
use crate::themes::ThemeAssets;
use ecosystem_animation::{Clock, MotionPreference, ReducedMotionSignal, ReducedMotionSubscription};
use ecosystem_storage::Storage;
use std::sync::{Arc, Mutex, PoisonError};

/// Owns everything needed to keep a render root in sync with user preferences
///
/// Mutations go through [`select`](Self::select) and
/// [`customize`](Self::customize), which re-apply the theme afterwards.
/// Reduced-motion changes arrive asynchronously and are folded in on the
/// next [`tick`](Self::tick). Dropping the runtime deregisters the
/// reduced-motion listener and cancels any pending transition timer.
pub struct ThemeRuntime<R: RenderRoot> {
    theme: ThemeStore,
    customizer: CustomizerStore,
    engine: ThemeEngine<R>,
    reduced_motion: ReducedMotionSignal,
    pending_reduced_motion: Arc<Mutex<Option<bool>>>,
    _reduced_motion_subscription: ReducedMotionSubscription,
}

impl<R: RenderRoot> ThemeRuntime<R> {
    pub fn new(
        storage: Arc<dyn Storage>,
        root: R,
        config: &EngineConfig,
        assets: Arc<ThemeAssets>,
        clock: Arc<dyn Clock>,
        reduced_motion: ReducedMotionSignal,
    ) -> Self {
        let theme = ThemeStore::new(storage.clone());
        let mut customizer = CustomizerStore::new(storage, assets.clone());
        customizer.sync_reduced_motion(reduced_motion.get());

        let pending_reduced_motion = Arc::new(Mutex::new(None));
        let pending = pending_reduced_motion.clone();
        let subscription = reduced_motion.subscribe(move |value| {
            *pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(*value);
        });

        let mut runtime = Self {
            theme,
            customizer,
            engine: ThemeEngine::new(root, assets, config, clock),
            reduced_motion,
            pending_reduced_motion,
            _reduced_motion_subscription: subscription,
        };
        runtime.refresh();
        runtime
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn customizer(&self) -> &CustomizerStore {
        &self.customizer
    }

    pub fn engine(&self) -> &ThemeEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ThemeEngine<R> {
        &mut self.engine
    }

    pub fn root(&self) -> &R {
        self.engine.root()
    }

    pub fn reduced_motion(&self) -> &ReducedMotionSignal {
        &self.reduced_motion
    }

    pub fn selection(&self) -> ThemeSelection {
        self.theme.selection()
    }

    pub fn motion_preference(&self) -> MotionPreference {
        self.customizer.motion_preference()
    }

    /// Mutate the theme selection, then re-apply
    pub fn select<T>(&mut self, f: impl FnOnce(&mut ThemeStore) -> T) -> T {
        let result = f(&mut self.theme);
        self.refresh();
        result
    }

    /// Mutate the customizer, then re-apply
    ///
    /// The closure also receives the current selection, since most
    /// customizer operations are scoped to a theme and mode.
    pub fn customize<T>(&mut self, f: impl FnOnce(&mut CustomizerStore, ThemeSelection) -> T) -> T {
        let selection = self.theme.selection();
        let result = f(&mut self.customizer, selection);
        self.refresh();
        result
    }

    /// Fold in reduced-motion changes and advance the transition timer
    pub fn tick(&mut self) -> EnginePhase {
        let pending = self
            .pending_reduced_motion
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(prefers_reduced_motion) = pending {
            tracing::debug!("ThemeRuntime: system reduced motion = {}", prefers_reduced_motion);
            self.customizer.sync_reduced_motion(prefers_reduced_motion);
            self.refresh();
        }
        self.engine.tick()
    }

    fn refresh(&mut self) {
        let selection = self.theme.selection();
        self.engine
            .set_animate_transitions(self.customizer.motion_preference().should_animate);
        self.engine.apply(
            selection,
            self.customizer
                .active_color_palette(selection.theme, selection.mode),
            self.customizer.custom_fonts(selection.theme),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::ColorChangeRequest;
    use crate::root::StyleRoot;
    use crate::theme::{ThemeMode, ThemeName};
    use ecosystem_animation::ManualClock;
    use ecosystem_storage::MemoryStorage;
    use std::time::Duration;

    fn runtime(
        storage: Arc<dyn Storage>,
        clock: &ManualClock,
        signal: &ReducedMotionSignal,
    ) -> ThemeRuntime<StyleRoot> {
        ThemeRuntime::new(
            storage,
            StyleRoot::new(),
            &EngineConfig::default(),
            Arc::new(ThemeAssets::builtin()),
            Arc::new(clock.clone()),
            signal.clone(),
        )
    }

    #[test]
    fn test_applies_on_construction() {
        let clock = ManualClock::new();
        let signal = ReducedMotionSignal::new(false);
        let runtime = runtime(Arc::new(MemoryStorage::new()), &clock, &signal);
        assert_eq!(runtime.engine().phase(), EnginePhase::Applied { transitioning: false });
        assert!(runtime.root().property("--color-background").is_some());
    }

    #[test]
    fn test_customize_reapplies() {
        let clock = ManualClock::new();
        let signal = ReducedMotionSignal::new(false);
        let mut runtime = runtime(Arc::new(MemoryStorage::new()), &clock, &signal);

        runtime.customize(|store, sel| {
            store.apply_color_palette(sel.theme, sel.mode, ColorChangeRequest::new("#ff0000"))
        });
        assert_eq!(runtime.root().property("--color-primary"), Some("#ff0000"));
        assert!(runtime.engine().is_transitioning());

        clock.advance(Duration::from_millis(400));
        assert_eq!(runtime.tick(), EnginePhase::Applied { transitioning: false });
    }

    #[test]
    fn test_reduced_motion_is_live() {
        let clock = ManualClock::new();
        let signal = ReducedMotionSignal::new(false);
        let mut runtime = runtime(Arc::new(MemoryStorage::new()), &clock, &signal);
        assert!(runtime.motion_preference().should_animate);

        signal.set(true);
        runtime.tick();
        let pref = runtime.motion_preference();
        assert!(pref.prefers_reduced_motion);
        assert!(!pref.should_animate);

        // No transition window while motion is reduced
        runtime.select(|store| store.toggle_mode());
        assert!(!runtime.engine().is_transitioning());
        assert!(runtime.root().has_class("dark"));
    }

    #[test]
    fn test_drop_deregisters_listener() {
        let clock = ManualClock::new();
        let signal = ReducedMotionSignal::new(false);
        for _ in 0..3 {
            let runtime = runtime(Arc::new(MemoryStorage::new()), &clock, &signal);
            assert_eq!(signal.listener_count(), 1);
            drop(runtime);
        }
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_restores_persisted_selection() {
        let clock = ManualClock::new();
        let signal = ReducedMotionSignal::new(false);
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

        let mut first = runtime(storage.clone(), &clock, &signal);
        first.select(|store| {
            store.set_theme(ThemeName::Terra);
            store.set_mode(ThemeMode::Dark);
        });
        drop(first);

        let second = runtime(storage, &clock, &signal);
        assert_eq!(second.root().attribute("data-theme"), Some("terra"));
        assert_eq!(second.root().attribute("data-mode"), Some("dark"));
    }
}
