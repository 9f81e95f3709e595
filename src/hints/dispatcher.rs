// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hint dispatcher
//!
//! Owns one instance of every per-category state machine together with the
//! collaborators they call into. Construct one per process and share it; all
//! entry points take `&self` and are safe to call from several threads.

use std::sync::Arc;

use super::display::DisplayStateApplicator;
use super::interaction::{BoostWindow, InteractionBoost};
use super::launch::LaunchBoost;
use super::{HintCategory, HintPayload, HintStatus};
use crate::config::Settings;
use crate::platform::{
    Clock, IdentityResolver, MonotonicClock, PlatformIdentity, PlatformProbe, SysfsProbe,
};
use crate::tuning::PerfTuner;

pub struct HintDispatcher {
    probe: Arc<dyn PlatformProbe>,
    tuner: Arc<dyn PerfTuner>,
    clock: Arc<dyn Clock>,
    identity: IdentityResolver,
    launch: LaunchBoost,
    interaction: InteractionBoost,
    display: DisplayStateApplicator,
}

impl HintDispatcher {
    pub fn new(
        probe: Arc<dyn PlatformProbe>,
        tuner: Arc<dyn PerfTuner>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            probe,
            tuner,
            clock,
            identity: IdentityResolver::new(),
            launch: LaunchBoost::new(),
            interaction: InteractionBoost::new(),
            display: DisplayStateApplicator::default(),
        }
    }

    /// Production wiring: sysfs probe and monotonic clock per `settings`
    pub fn from_settings(settings: &Settings, tuner: Arc<dyn PerfTuner>) -> Self {
        let platform = &settings.platform;
        let mut dispatcher = Self::new(
            Arc::new(SysfsProbe::new(platform.sysfs_root.clone())),
            tuner,
            Arc::new(MonotonicClock::new()),
        )
        .with_display_applicator(DisplayStateApplicator::new(
            platform.governor_cpus.clone(),
            platform.interactive_governor.clone(),
        ));
        if let Some(soc_id) = platform.soc_id_override {
            dispatcher = dispatcher
                .with_identity_resolver(IdentityResolver::with_soc_id_override(soc_id));
        }
        dispatcher
    }

    pub fn with_display_applicator(mut self, display: DisplayStateApplicator) -> Self {
        self.display = display;
        self
    }

    pub fn with_identity_resolver(mut self, identity: IdentityResolver) -> Self {
        self.identity = identity;
        self
    }

    /// Route a hint to the state machine owning its category.
    ///
    /// Categories not owned here return [`HintStatus::None`].
    pub fn dispatch(&self, category: HintCategory, payload: Option<HintPayload>) -> HintStatus {
        match category {
            HintCategory::Interaction => {
                let requested_ms = match payload {
                    Some(HintPayload::Duration(ms)) => Some(ms),
                    _ => None,
                };
                self.interaction
                    .on_interaction(self.tuner.as_ref(), self.clock.as_ref(), requested_ms)
            }
            HintCategory::Launch => self
                .launch
                .on_launch_signal(self.tuner.as_ref(), payload.is_some()),
            HintCategory::DisplayState => match payload {
                Some(HintPayload::Display(on)) => self.set_interactive(on),
                _ => HintStatus::None,
            },
            _ => HintStatus::None,
        }
    }

    /// Dispatch by raw power hint id
    pub fn dispatch_raw(&self, id: u32, payload: Option<HintPayload>) -> HintStatus {
        match HintCategory::from_raw(id) {
            Some(category) => self.dispatch(category, payload),
            None => HintStatus::None,
        }
    }

    /// Display on/off entry point
    pub fn set_interactive(&self, on: bool) -> HintStatus {
        self.display.on_display_state_change(
            self.tuner.as_ref(),
            self.probe.as_ref(),
            &self.identity,
            on,
        )
    }

    pub fn identity(&self) -> PlatformIdentity {
        self.identity.identify(self.probe.as_ref())
    }

    pub fn display(&self) -> &DisplayStateApplicator {
        &self.display
    }

    pub fn probe(&self) -> &dyn PlatformProbe {
        self.probe.as_ref()
    }

    pub fn launch_engaged(&self) -> bool {
        self.launch.is_engaged()
    }

    pub fn interaction_window(&self) -> BoostWindow {
        self.interaction.window()
    }
}
