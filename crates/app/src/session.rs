use alpha_domain::{
    Exercise, Name, Routine, RoutineBuilder, RoutineID, RoutineStore, WeekPlan,
    sample_routines,
};
use log::info;

use crate::Settings;

/// State of one app session. Owns the routine store from `init` until `teardown`.
pub struct Session {
    settings: Settings,
    store: RoutineStore,
    plan: WeekPlan,
}

impl Session {
    /// Starts a session with the sample routines.
    #[must_use]
    pub fn init(settings: Settings) -> Self {
        Self::with_routines(settings, sample_routines())
    }

    #[must_use]
    pub fn with_routines(settings: Settings, routines: Vec<Routine>) -> Self {
        info!("session started with {} routines", routines.len());
        Self {
            settings,
            store: RoutineStore::with_routines(routines),
            plan: WeekPlan::default(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    #[must_use]
    pub fn store(&self) -> &RoutineStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RoutineStore {
        &mut self.store
    }

    #[must_use]
    pub fn plan(&self) -> &WeekPlan {
        &self.plan
    }

    pub fn plan_mut(&mut self) -> &mut WeekPlan {
        &mut self.plan
    }

    #[must_use]
    pub fn builder(&self) -> RoutineBuilder {
        RoutineBuilder::new(self.settings.entry_defaults())
    }

    #[must_use]
    pub fn new_exercise(&self, name: Name) -> Exercise {
        Exercise::with_defaults(name, &self.settings.entry_defaults())
    }

    /// Adds the built routine to the store. Nothing is added while the builder is empty.
    pub fn finish_routine(&mut self, builder: RoutineBuilder) -> Option<RoutineID> {
        let routine = builder.finish()?;
        let id = routine.id;
        self.store.add_routine(routine);
        Some(id)
    }

    /// Ends the session and hands back the routines it held.
    #[must_use]
    pub fn teardown(self) -> Vec<Routine> {
        info!("session ended with {} routines", self.store.len());
        self.store.into_routines()
    }
}
