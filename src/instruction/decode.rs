//! This module is responsible for decoding the cell at the program counter
//! into an instruction.

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use super::{Opcode, ParameterMode};
use crate::error::RuntimeError;
use crate::memory::Int;

/// A decoded instruction: the operation together with the addressing mode of
/// each of its parameters. Ephemeral; rebuilt from the opcode cell on every
/// cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Instruction {
  pub opcode : Opcode,
  pub modes  : [ParameterMode; 3],
}

impl Instruction {
  /// The addressing mode of the zero-based `parameter`.
  pub fn mode(&self, parameter: usize) -> ParameterMode {
    self.modes[parameter]
  }
}

impl Display for Instruction {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let modes =
      self.modes
          .iter()
          .take(self.opcode.parameter_count())
          .map(|mode| mode.to_string())
          .collect::<Vec<String>>()
          .join(", ");

    match modes.is_empty() {
      true  => write!(f, "{}", self.opcode),
      false => write!(f, "{}({})", self.opcode, modes)
    }
  }
}

/**
  Decodes `cell` into an instruction: the value modulo 100 is the opcode, and
  each further decimal digit, right to left from the hundreds place, is the
  mode of parameters 1, 2, 3 in turn, defaulting to position. A pure function
  of `cell`; `position` only labels the errors.
*/
pub fn decode(cell: Int, position: usize) -> Result<Instruction, RuntimeError> {
  let opcode =
    u8::try_from(cell % 100)
      .ok()
      .and_then(|code| Opcode::try_from(code).ok())
      .ok_or(RuntimeError::UnknownOpcode { opcode: cell % 100, position })?;

  let mut modes  = [ParameterMode::Position; 3];
  let mut digits = cell / 100;

  for slot in modes.iter_mut().take(opcode.parameter_count()) {
    let digit = digits % 10;
    *slot =
      u8::try_from(digit)
        .ok()
        .and_then(|digit| ParameterMode::try_from(digit).ok())
        .ok_or(RuntimeError::UnknownParameterMode { digit, position })?;
    digits /= 10;
  }

  Ok(Instruction { opcode, modes })
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bare_opcodes_default_to_position_mode() {
    let instruction = decode(2, 0).unwrap();
    assert_eq!(instruction.opcode, Opcode::Multiply);
    assert_eq!(instruction.modes, [ParameterMode::Position; 3]);
  }

  #[test]
  fn mode_digits_read_right_to_left() {
    // 1002: opcode 02, parameter 1 position, parameter 2 immediate,
    // parameter 3 (missing digit) position.
    let instruction = decode(1002, 0).unwrap();
    assert_eq!(instruction.opcode, Opcode::Multiply);
    assert_eq!(instruction.mode(0), ParameterMode::Position);
    assert_eq!(instruction.mode(1), ParameterMode::Immediate);
    assert_eq!(instruction.mode(2), ParameterMode::Position);
  }

  #[test]
  fn immediate_output() {
    let instruction = decode(104, 6).unwrap();
    assert_eq!(instruction.opcode, Opcode::Output);
    assert_eq!(instruction.mode(0), ParameterMode::Immediate);
  }

  #[test]
  fn halt_takes_no_parameters() {
    let instruction = decode(99, 0).unwrap();
    assert_eq!(instruction.opcode, Opcode::Halt);
    assert_eq!(instruction.opcode.parameter_count(), 0);
  }

  #[test]
  fn decoding_is_idempotent() {
    assert_eq!(decode(11105, 3).unwrap(), decode(11105, 3).unwrap());
    assert_eq!(decode(1002, 0).unwrap(), decode(1002, 8).unwrap());
  }

  #[test]
  fn unknown_opcode_is_fatal() {
    assert_eq!(
      decode(98, 4),
      Err(RuntimeError::UnknownOpcode { opcode: 98, position: 4 })
    );
  }

  #[test]
  fn negative_cells_are_not_opcodes() {
    assert_eq!(
      decode(-1, 0),
      Err(RuntimeError::UnknownOpcode { opcode: -1, position: 0 })
    );
  }

  #[test]
  fn unknown_mode_digit_is_fatal() {
    // Opcode 2 with a mode digit of 3 on its first parameter.
    assert_eq!(
      decode(302, 2),
      Err(RuntimeError::UnknownParameterMode { digit: 3, position: 2 })
    );
  }

  #[test]
  fn mode_digits_past_the_arity_are_ignored() {
    // Opcode 4 has one parameter; the thousands digit would be parameter 2.
    let instruction = decode(9104, 0).unwrap();
    assert_eq!(instruction.opcode, Opcode::Output);
    assert_eq!(instruction.mode(0), ParameterMode::Immediate);
  }
}
