use log::info;

use super::layout::Simulation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	Idle,
	Running,
	Finished,
	Stopped,
}

/// A widget's layout run: a simulation plus how far it has been stepped.
///
/// The host calls [`tick`](Self::tick) once per frame; the run ends by itself
/// once its step budget is spent, or earlier through [`stop`](Self::stop).
pub struct MiniGraphState {
	simulation: Simulation,
	steps_taken: u32,
	budget: u32,
	phase: Phase,
}

impl MiniGraphState {
	pub fn new(simulation: Simulation) -> Self {
		let budget = simulation.params().steps;
		Self {
			simulation,
			steps_taken: 0,
			budget,
			phase: Phase::Idle,
		}
	}

	pub fn start(&mut self) {
		if self.phase != Phase::Idle {
			return;
		}
		self.phase = Phase::Running;
		self.finish_if_done();
	}

	/// Ends the run for good.
	pub fn stop(&mut self) {
		if self.phase == Phase::Running || self.phase == Phase::Idle {
			self.phase = Phase::Stopped;
		}
	}

	/// Grants `reheat_steps` more steps from now. Returns true when a finished
	/// run was woken up, i.e. the host has to start calling `tick` again.
	pub fn reheat(&mut self) -> bool {
		let extra = self.simulation.params().reheat_steps;
		match self.phase {
			Phase::Running => {
				self.budget = self.budget.max(self.steps_taken + extra);
				false
			}
			Phase::Finished if extra > 0 => {
				self.budget = self.steps_taken + extra;
				self.phase = Phase::Running;
				true
			}
			_ => false,
		}
	}

	/// Runs one step if the layout is running. Returns whether a step ran.
	pub fn tick(&mut self) -> bool {
		if self.phase != Phase::Running {
			return false;
		}
		self.simulation.step();
		self.steps_taken += 1;
		self.finish_if_done();
		true
	}

	fn finish_if_done(&mut self) {
		if self.steps_taken >= self.budget {
			self.phase = Phase::Finished;
			info!("mini graph layout settled after {} steps", self.steps_taken);
		}
	}

	pub fn is_running(&self) -> bool {
		self.phase == Phase::Running
	}

	pub fn steps_taken(&self) -> u32 {
		self.steps_taken
	}

	pub fn simulation(&self) -> &Simulation {
		&self.simulation
	}

	pub fn simulation_mut(&mut self) -> &mut Simulation {
		&mut self.simulation
	}
}
