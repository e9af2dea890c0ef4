/*!

  Composition of several machines booted from the same program. A serial chain
  drives each amplifier to halt before the next one starts. A feedback loop
  keeps every stage alive and routes the last output of each into the next
  around a ring; this works without threads because a stage suspends exactly
  at the moment it needs a value its predecessor has not produced yet.

  The stages of a ring are isomorphic copies of one program, so they halt in
  lock-step, and the scheduler can stop as soon as it comes back around to a
  stage that has already halted.

*/

use crate::error::RuntimeError;
use crate::machine::Machine;
use crate::memory::Int;
use crate::permutation::Permutations;
use crate::program::Program;

/**
  Runs one amplifier per phase setting in series: each machine is primed with
  its phase as its first input, driven to halt on the running signal, and its
  final output becomes the next machine's signal. The initial signal is 0.
*/
pub fn run_chain(program: &Program, phases: &[Int]) -> Result<Int, RuntimeError> {
  let mut signal = 0;

  for &phase in phases {
    let mut amplifier = program.boot();
    amplifier.run(phase)?;
    while !amplifier.is_halted() {
      amplifier.run(signal)?;
    }
    signal = amplifier.output().ok_or(RuntimeError::OutputNotReady)?;
  }

  Ok(signal)
}

/**
  A ring of machines booted from one program, each primed with its own phase
  setting. `run` feeds the active stage the current signal, collects the
  stage's last output as the next signal, and advances around the ring until
  it wraps to a halted stage. The final output of the last ring member is the
  result of the whole pipeline.
*/
pub struct FeedbackLoop {
  stages: Vec<Machine>,
  /// Index of the stage the scheduler drives next.
  active: usize,
  /// The value carried from one stage to its successor.
  signal: Int,
}

impl FeedbackLoop {

  pub fn new(program: &Program, phases: &[Int]) -> Result<FeedbackLoop, RuntimeError> {
    if phases.is_empty() {
      return Err(RuntimeError::EmptyPipeline);
    }

    let mut stages = Vec::with_capacity(phases.len());
    for &phase in phases {
      let mut stage = program.boot();
      // The stage consumes its phase and suspends awaiting its first signal.
      stage.run(phase)?;
      stages.push(stage);
    }

    Ok(FeedbackLoop { stages, active: 0, signal: 0 })
  }

  /// Drives the ring to completion and reports the last stage's final output.
  /// Any stage's fatal error fails the whole run.
  pub fn run(&mut self) -> Result<Int, RuntimeError> {
    while !self.stages[self.active].is_halted() {
      let stage = &mut self.stages[self.active];
      stage.run(self.signal)?;
      self.signal = stage.output().ok_or(RuntimeError::OutputNotReady)?;
      self.active = (self.active + 1) % self.stages.len();
    }

    self.stages
        .last()
        .and_then(Machine::output)
        .ok_or(RuntimeError::OutputNotReady)
  }

}

/// The best signal a serial chain can produce over every ordering of
/// `phases`, together with the ordering that produced it.
pub fn max_chain_signal(program: &Program, phases: &[Int])
  -> Result<(Int, Vec<Int>), RuntimeError>
{
  let mut best: Option<(Int, Vec<Int>)> = None;

  for ordering in Permutations::of(phases) {
    let signal = run_chain(program, &ordering)?;
    if best.as_ref().map_or(true, |(top, _)| signal > *top) {
      best = Some((signal, ordering));
    }
  }

  best.ok_or(RuntimeError::EmptyPipeline)
}

/// The best signal a feedback loop can produce over every ordering of
/// `phases`, together with the ordering that produced it.
pub fn max_feedback_signal(program: &Program, phases: &[Int])
  -> Result<(Int, Vec<Int>), RuntimeError>
{
  let mut best: Option<(Int, Vec<Int>)> = None;

  for ordering in Permutations::of(phases) {
    let signal = FeedbackLoop::new(program, &ordering)?.run()?;
    if best.as_ref().map_or(true, |(top, _)| signal > *top) {
      best = Some((signal, ordering));
    }
  }

  best.ok_or(RuntimeError::EmptyPipeline)
}
