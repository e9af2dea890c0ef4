
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display as StrumDisplay, IntoStaticStr};

/**
  Opcodes of the virtual machine. The discriminants are the literal opcode
  values of the instruction set, so decoding a cell is a checked `try_from`
  on the cell value modulo 100.
*/
#[derive(
  StrumDisplay, IntoStaticStr, TryFromPrimitive, IntoPrimitive,
  Clone,        Copy,          Eq, PartialEq,    Debug,         Hash
)]
#[repr(u8)]
pub enum Opcode {
  Add         =  1, // mem[c] = a + b
  Multiply    =  2, // mem[c] = a * b
  Input       =  3, // mem[a] = pending input, suspending if there is none
  Output      =  4, // last output = a
  JumpIfTrue  =  5, // if a != 0 { pc = b }
  JumpIfFalse =  6, // if a == 0 { pc = b }
  LessThan    =  7, // mem[c] = 1 if a < b else 0
  Equals      =  8, // mem[c] = 1 if a == b else 0
  Halt        = 99,
}

impl Opcode {

  pub fn code(&self) -> u8 {
    Into::<u8>::into(*self)
  }

  /// The number of parameter cells following the opcode cell.
  pub fn parameter_count(&self) -> usize {
    match self {
      | Opcode::Add
      | Opcode::Multiply
      | Opcode::LessThan
      | Opcode::Equals      => 3,

      | Opcode::JumpIfTrue
      | Opcode::JumpIfFalse => 2,

      | Opcode::Input
      | Opcode::Output      => 1,

      Opcode::Halt          => 0,
    }
  }

}

/**
  Per-parameter addressing discipline. A position parameter names the address
  of its operand; an immediate parameter is the operand itself. Write targets
  are always taken literally and are never resolved through a mode.
*/
#[derive(
  StrumDisplay, IntoStaticStr, TryFromPrimitive, IntoPrimitive,
  Clone,        Copy,          Eq, PartialEq,    Debug,         Hash
)]
#[repr(u8)]
pub enum ParameterMode {
  Position  = 0,
  Immediate = 1,
}
