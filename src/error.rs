//! Fatal conditions of a running machine. A failure aborts only the instance
//! that encountered it, but a pipeline driving several machines treats any
//! member's error as failure of the whole run. Nothing here is retried.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::memory::Int;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RuntimeError {
  /// The decoded opcode is not one of the nine the machine implements.
  UnknownOpcode{ opcode: Int, position: usize },
  /// A mode digit other than 0 (position) or 1 (immediate).
  UnknownParameterMode{ digit: Int, position: usize },
  /// A parameter resolved to an address below zero.
  NegativeAddress{ value: Int, position: usize },
  /// `run` was called on a machine that has already halted.
  ResumeAfterHalt,
  /// A pipeline read a stage's output before any output instruction ran.
  OutputNotReady,
  /// A feedback loop needs at least one stage.
  EmptyPipeline,
  /// The program text is not a comma-separated list of integers.
  InvalidProgramText{ near: String },
}

impl Display for RuntimeError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      RuntimeError::UnknownOpcode { opcode, position } => {
        write!(f, "Unknown opcode {} at position {}.", opcode, position)
      }

      RuntimeError::UnknownParameterMode { digit, position } => {
        write!(f, "Unknown parameter mode {} at position {}.", digit, position)
      }

      RuntimeError::NegativeAddress { value, position } => {
        write!(f, "Negative address {} at position {}.", value, position)
      }

      RuntimeError::ResumeAfterHalt => {
        write!(f, "The machine has halted and cannot be resumed.")
      }

      RuntimeError::OutputNotReady => {
        write!(f, "No output instruction has executed yet.")
      }

      RuntimeError::EmptyPipeline => {
        write!(f, "A pipeline requires at least one phase setting.")
      }

      RuntimeError::InvalidProgramText { near } => {
        match near.is_empty() {
          true  => write!(f, "The program text is not a list of integers."),
          false => write!(f, "The program text is not a list of integers, near `{}`.", near)
        }
      }

    }
  }
}

impl Error for RuntimeError {}
