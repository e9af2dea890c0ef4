/*!

  A virtual machine for Intcode, a self-modifying instruction set encoded as a
  flat comma-separated sequence of integers, together with the cooperative
  pipelines that wire several machines into amplifier chains and feedback rings.

  A machine owns a private copy of its program and communicates with the outside
  world by value only: one pending input supplied per `run` call, one last output
  read back after control returns. The input instruction is the single suspension
  point in the instruction set. A machine that reaches it with no pending value
  parks in `WaitingForInput` with the program counter still on the instruction,
  which is what lets a single-threaded scheduler interleave a ring of machines
  without ever preempting one mid-instruction.

*/

#[macro_use]
extern crate prettytable;
#[macro_use]
extern crate lazy_static;

pub mod error;
pub mod instruction;
pub mod machine;
pub mod memory;
pub mod permutation;
pub mod pipeline;
pub mod program;

pub use crate::error::RuntimeError;
pub use crate::machine::{Machine, MachineState};
pub use crate::memory::{Int, Memory};
pub use crate::pipeline::FeedbackLoop;
pub use crate::program::Program;
