//! Simulation engine: the engagement controller.
//!
//! `SimulationEngine` owns the hecs ECS world, applies operator commands,
//! runs all systems in a fixed order, and produces `EngagementSnapshot`s.
//! Completely headless; the caller drives it with `update(dt)`.

use glam::DVec2;
use hecs::World;
use tracing::{debug, info, warn};

use pursuit_core::commands::EngineCommand;
use pursuit_core::components::ControlInput;
use pursuit_core::config::SimConfig;
use pursuit_core::enums::*;
use pursuit_core::state::EngagementSnapshot;
use pursuit_core::types::{KinematicState, SimTime};
use pursuit_core::SimError;
use pursuit_guidance::GuidanceParams;

use crate::systems;
use crate::systems::snapshot::EngineView;
use crate::world_setup::{self, Bodies};

/// The engagement engine. Owns the ECS world and all sim state.
///
/// Not internally synchronized: the embedding application must drive one
/// engine from a single thread at a time. It is `Send`, so it may be moved
/// to another thread between calls.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    bodies: Bodies,
    law: GuidanceLaw,
    phase: EngagementPhase,
    outcome: Option<Outcome>,
    time: SimTime,
    pending_control: ControlInput,
    miss_distance: f64,
}

impl SimulationEngine {
    /// Create an engine with both bodies at their starts, waiting in `Idle`.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let mut world = World::new();
        let law = config.law;
        let bodies = world_setup::setup_engagement(&mut world, &config, law);

        Ok(Self {
            miss_distance: initial_separation(&config),
            world,
            config,
            bodies,
            law,
            phase: EngagementPhase::Idle,
            outcome: None,
            time: SimTime::default(),
            pending_control: ControlInput::default(),
        })
    }

    /// Advance the engagement by `dt` seconds.
    ///
    /// Only a running engagement moves; in any other phase this is a no-op.
    pub fn update(&mut self, dt: f64) -> Result<(), SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            warn!(dt, "rejected timestep");
            return Err(SimError::InvalidTimestep(dt));
        }
        if self.phase != EngagementPhase::Running {
            return Ok(());
        }

        let eps = self.config.eps;
        let before = self.offset()?;

        // 1. Operator input -> evader steering
        systems::control::run(&mut self.world, self.pending_control, &self.config);
        // 2. Evader moves first so guidance sees where it is now
        systems::movement::run_evaders(&mut self.world, dt, eps);
        // 3. Guidance laws
        let params = GuidanceParams::from_config(&self.config, dt);
        systems::guidance::run(&mut self.world, &params);
        // 4. Pursuer moves
        for entity in systems::movement::run_pursuers(&mut self.world, dt, eps) {
            debug!(?entity, tick = self.time.tick + 1, "pursuer out of energy");
        }
        // 5. Trails
        systems::trajectory::run(&mut self.world);

        self.time.advance(dt);

        // 6. Interception, then safe zone
        let after = self.offset()?;
        let separation = systems::terminal::measure(before, after);
        self.miss_distance = self.miss_distance.min(separation.closest);

        let evader_position = self.evader_state()?.position;
        if let Some(outcome) = systems::terminal::evaluate(&separation, evader_position, &self.config) {
            info!(
                ?outcome,
                law = self.law.name(),
                tick = self.time.tick,
                miss_distance = self.miss_distance,
                "engagement over"
            );
            self.outcome = Some(outcome);
            self.phase = EngagementPhase::GameOver;
        }
        Ok(())
    }

    /// Set the evader input used from the next tick on.
    pub fn handle_control(&mut self, lateral: LateralInput, longitudinal: LongitudinalInput) {
        self.pending_control = ControlInput {
            lateral,
            longitudinal,
        };
    }

    /// Select a guidance law by key and restart.
    ///
    /// An unknown key is an error and leaves the engagement untouched.
    pub fn select_law(&mut self, key: u8) -> Result<(), SimError> {
        let law = GuidanceLaw::try_from(key)?;
        self.set_law(law);
        Ok(())
    }

    /// Switch guidance law and restart; a law never changes mid-flight.
    pub fn set_law(&mut self, law: GuidanceLaw) {
        info!(law = law.name(), "guidance law selected");
        self.law = law;
        self.reset();
    }

    /// Idle or Paused -> Running.
    pub fn start(&mut self) {
        if matches!(self.phase, EngagementPhase::Idle | EngagementPhase::Paused) {
            self.phase = EngagementPhase::Running;
        }
    }

    /// Running -> Paused.
    pub fn pause(&mut self) {
        if self.phase == EngagementPhase::Running {
            self.phase = EngagementPhase::Paused;
        }
    }

    pub fn start_pause_toggle(&mut self) {
        match self.phase {
            EngagementPhase::Running => self.pause(),
            EngagementPhase::Idle | EngagementPhase::Paused => self.start(),
            EngagementPhase::GameOver => {}
        }
    }

    /// Rebuild both bodies from their starts, clear trails and outcome, and run.
    pub fn reset(&mut self) {
        self.bodies = world_setup::setup_engagement(&mut self.world, &self.config, self.law);
        self.time = SimTime::default();
        self.outcome = None;
        self.pending_control = ControlInput::default();
        self.miss_distance = initial_separation(&self.config);
        self.phase = EngagementPhase::Running;
        info!(law = self.law.name(), "engagement reset");
    }

    /// Apply one command, mirroring the direct methods.
    pub fn apply(&mut self, command: EngineCommand) -> Result<(), SimError> {
        match command {
            EngineCommand::SelectLaw { key } => self.select_law(key)?,
            EngineCommand::SetLaw { law } => self.set_law(law),
            EngineCommand::StartPauseToggle => self.start_pause_toggle(),
            EngineCommand::Start => self.start(),
            EngineCommand::Pause => self.pause(),
            EngineCommand::Reset => self.reset(),
            EngineCommand::Control {
                lateral,
                longitudinal,
            } => self.handle_control(lateral, longitudinal),
        }
        Ok(())
    }

    /// Start if needed and step until the engagement ends or `max_ticks`
    /// further ticks have run. Returns the outcome, if any.
    pub fn run_to_completion(&mut self, dt: f64, max_ticks: u64) -> Result<Option<Outcome>, SimError> {
        self.start();
        for _ in 0..max_ticks {
            if self.phase == EngagementPhase::GameOver {
                break;
            }
            self.update(dt)?;
        }
        Ok(self.outcome)
    }

    /// Build a read-only view of the current state.
    pub fn snapshot(&self) -> EngagementSnapshot {
        let view = EngineView {
            config: &self.config,
            time: self.time,
            phase: self.phase,
            outcome: self.outcome,
            law: self.law,
            miss_distance: self.miss_distance,
        };
        systems::snapshot::build_snapshot(&self.world, &self.bodies, &view)
    }

    pub fn phase(&self) -> EngagementPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn law(&self) -> GuidanceLaw {
        self.law
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Smallest separation seen since the last reset.
    pub fn miss_distance(&self) -> f64 {
        self.miss_distance
    }

    /// Entity handles of the current bodies. Replaced on every reset.
    pub fn bodies(&self) -> Bodies {
        self.bodies
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn evader_state(&self) -> Result<KinematicState, SimError> {
        self.world
            .get::<&KinematicState>(self.bodies.evader)
            .map(|s| *s)
            .map_err(|_| SimError::MissingBody("evader"))
    }

    fn pursuer_state(&self) -> Result<KinematicState, SimError> {
        self.world
            .get::<&KinematicState>(self.bodies.pursuer)
            .map(|s| *s)
            .map_err(|_| SimError::MissingBody("pursuer"))
    }

    /// Evader position relative to the pursuer.
    fn offset(&self) -> Result<DVec2, SimError> {
        Ok(self.evader_state()?.position - self.pursuer_state()?.position)
    }
}

fn initial_separation(config: &SimConfig) -> f64 {
    config
        .evader_start
        .position()
        .distance(config.pursuer_start.position())
}
