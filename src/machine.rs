//! Structures and functions for the execution engine. A machine owns one
//! memory image and a program counter and interprets instructions until it
//! halts or suspends waiting for input it has not been given.

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use prettytable::{format as TableFormat, Table};
use strum_macros::{Display as StrumDisplay, IntoStaticStr};

use crate::error::RuntimeError;
use crate::instruction::{decode, Instruction, Opcode, ParameterMode};
use crate::memory::{Int, Memory};
use crate::program::Program;

/**
  The lifecycle of a machine. `Created` is the state immediately after
  construction, before the first `run`. A machine moves between `Running` and
  `WaitingForInput` as the input instruction finds or misses a pending value.
  `Halted` is terminal; no instruction executes afterward and a further `run`
  is a contract violation.
*/
#[derive(StrumDisplay, IntoStaticStr, Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum MachineState {
  Created,
  Running,
  WaitingForInput,
  Halted,
}

pub struct Machine {

  // Memory Stores //
  /// The machine's private copy of the program, mutated freely while running.
  memory: Memory,

  // Registers //
  /// Index of the next instruction to decode; a cursor.
  position: usize,
  /// At most one input value, consumed exactly once by an input instruction.
  pending_input: Option<Int>,
  /// The most recent value emitted by an output instruction.
  last_output: Option<Int>,

  state: MachineState,
}

impl Machine {

  // region Construction and accessors

  /// Parses `text` and loads it into a fresh machine.
  pub fn new(text: &str) -> Result<Machine, RuntimeError> {
    Ok(Program::parse(text)?.boot())
  }

  pub(crate) fn with_memory(memory: Memory) -> Machine {
    Machine {
      memory,
      position      : 0,
      pending_input : None,
      last_output   : None,
      state         : MachineState::Created,
    }
  }

  pub fn state(&self) -> MachineState {
    self.state
  }

  pub fn is_halted(&self) -> bool {
    self.state == MachineState::Halted
  }

  /// The most recent value emitted by an output instruction, or `None` if no
  /// output instruction has executed yet.
  pub fn output(&self) -> Option<Int> {
    self.last_output
  }

  /// Read-only view of one memory cell, for inspecting final state.
  pub fn memory_at(&self, address: usize) -> Int {
    self.memory.read(address)
  }

  // endregion

  // region Execution

  /**
    Supplies one input value and executes until the machine halts or needs
    input it does not have. The pending value is consumed by the first input
    instruction reached; if a second one is reached before the next `run`,
    the machine suspends with the program counter still on that instruction,
    so it is retried on resume.

    Returns the state the machine settled in, `Halted` or `WaitingForInput`.
  */
  pub fn run(&mut self, input: Int) -> Result<MachineState, RuntimeError> {
    if self.state == MachineState::Halted {
      return Err(RuntimeError::ResumeAfterHalt);
    }

    self.pending_input = Some(input);
    self.state = MachineState::Running;

    while self.state == MachineState::Running {
      self.execute_next_instruction()?;
      #[cfg(feature = "trace_computation")] println!("{}", self);
    }

    Ok(self.state)
  }

  fn execute_next_instruction(&mut self) -> Result<(), RuntimeError> {
    let instruction = decode(self.memory.read(self.position), self.position)?;

    #[cfg(feature = "trace_computation")]
      println!("{:>5}:  {}", self.position, instruction);

    match instruction.opcode {

      Opcode::Add => {
        let augend = self.operand(&instruction, 0)?;
        let addend = self.operand(&instruction, 1)?;
        let target = self.write_target(3)?;
        self.memory.write(target, augend + addend);
        self.position += 4;
      }

      Opcode::Multiply => {
        let multiplicand = self.operand(&instruction, 0)?;
        let multiplier   = self.operand(&instruction, 1)?;
        let target       = self.write_target(3)?;
        self.memory.write(target, multiplicand * multiplier);
        self.position += 4;
      }

      Opcode::Input => {
        match self.pending_input.take() {

          Some(value) => {
            let target = self.write_target(1)?;
            self.memory.write(target, value);
            self.position += 2;
          }

          None => {
            // The program counter stays on this instruction so that it is
            // retried when the caller resumes with a value.
            self.state = MachineState::WaitingForInput;
          }

        }
      }

      Opcode::Output => {
        self.last_output = Some(self.operand(&instruction, 0)?);
        self.position += 2;
      }

      Opcode::JumpIfTrue => {
        let condition = self.operand(&instruction, 0)?;
        let target    = self.operand(&instruction, 1)?;
        match condition != 0 {
          true  => { self.position = self.resolve(target)?; }
          false => { self.position += 3; }
        }
      }

      Opcode::JumpIfFalse => {
        let condition = self.operand(&instruction, 0)?;
        let target    = self.operand(&instruction, 1)?;
        match condition == 0 {
          true  => { self.position = self.resolve(target)?; }
          false => { self.position += 3; }
        }
      }

      Opcode::LessThan => {
        let lhs    = self.operand(&instruction, 0)?;
        let rhs    = self.operand(&instruction, 1)?;
        let target = self.write_target(3)?;
        self.memory.write(target, (lhs < rhs) as Int);
        self.position += 4;
      }

      Opcode::Equals => {
        let lhs    = self.operand(&instruction, 0)?;
        let rhs    = self.operand(&instruction, 1)?;
        let target = self.write_target(3)?;
        self.memory.write(target, (lhs == rhs) as Int);
        self.position += 4;
      }

      Opcode::Halt => {
        self.state = MachineState::Halted;
      }

    }

    Ok(())
  }

  /// Resolves the zero-based `parameter` of the instruction at the program
  /// counter through its addressing mode.
  fn operand(&self, instruction: &Instruction, parameter: usize) -> Result<Int, RuntimeError> {
    let raw = self.memory.read(self.position + 1 + parameter);
    match instruction.mode(parameter) {
      ParameterMode::Position  => Ok(self.memory.read(self.resolve(raw)?)),
      ParameterMode::Immediate => Ok(raw),
    }
  }

  /// The literal address stored `offset` cells past the opcode cell. Write
  /// targets are never resolved through a parameter mode.
  fn write_target(&self, offset: usize) -> Result<usize, RuntimeError> {
    self.resolve(self.memory.read(self.position + offset))
  }

  /// Converts a cell value to an address, rejecting negative values.
  fn resolve(&self, value: Int) -> Result<usize, RuntimeError> {
    usize::try_from(value).map_err(|_|
      RuntimeError::NegativeAddress { value, position: self.position }
    )
  }

  // endregion

  // region Display methods

  fn make_memory_table(&self) -> Table {
    let mut table = Table::new();

    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(row![ubr->"Address", ubl->"Contents"]);

    for (i, cell) in self.memory.cells().iter().enumerate() {
      match i == self.position {

        true  => {
          table.add_row(row![r->format!("* --> M[{}] =", i), format!("{}", cell)]);
        }

        false => {
          table.add_row(row![r->format!("M[{}] =", i), format!("{}", cell)]);
        }

      }
    }
    table
  }

  fn make_register_table(&self) -> Table {
    let display_slot = |slot: &Option<Int>| {
      match slot {
        Some(value) => value.to_string(),
        None        => "`".to_string()
      }
    };

    let mut table = Table::new();

    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(row![ubr->"Register", ubl->"Contents"]);
    table.add_row(row![r->"State =",  format!("{}", self.state)]);
    table.add_row(row![r->"PC =",     format!("{}", self.position)]);
    table.add_row(row![r->"Input =",  display_slot(&self.pending_input)]);
    table.add_row(row![r->"Output =", display_slot(&self.last_output)]);
    table
  }

  // endregion

}

lazy_static! {
  static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .separator(
        TableFormat::LinePosition::Bottom,
        TableFormat::LineSeparator::new('─', '┴', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}

impl Display for Machine {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let mut combined_table = table!([self.make_memory_table(), self.make_register_table()]);

    combined_table.set_titles(row![ub->"Memory", ub->"Registers"]);
    combined_table.set_format(*TABLE_DISPLAY_FORMAT);

    write!(f, "{}", combined_table)
  }
}
