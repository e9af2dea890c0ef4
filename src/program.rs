/*!

  Loads program text into an initial memory image. Program text is ASCII:
  comma-separated, optionally negative, base-10 integers, with nothing else
  except optional surrounding whitespace. The parsed program is immutable;
  every machine boots from its own copy of the cells so that instances can
  self-modify independently.

*/

use std::str::FromStr;

use nom::{
  character::complete::{
    char as one_char,
    digit1,
    multispace0,
    space0
  },
  combinator::{all_consuming, map_res, opt, recognize},
  multi::separated_list,
  sequence::{delimited, pair},
  IResult
};

use crate::error::RuntimeError;
use crate::machine::Machine;
use crate::memory::{Int, Memory};

/// An ordered sequence of signed integers, fixed at load time. Code and data
/// are not distinguished; the machine's execution decides which cells are
/// which.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Program {
  cells: Vec<Int>,
}

fn integer(input: &str) -> IResult<&str, Int> {
  map_res(
    recognize(pair(opt(one_char('-')), digit1)),
    |digits: &str| digits.parse::<Int>()
  )(input)
}

fn cell_list(input: &str) -> IResult<&str, Vec<Int>> {
  all_consuming(
    delimited(
      multispace0,
      separated_list(delimited(space0, one_char(','), space0), integer),
      multispace0
    )
  )(input)
}

impl Program {

  pub fn parse(text: &str) -> Result<Program, RuntimeError> {
    match cell_list(text) {

      Ok((_rest, cells)) => Ok(Program { cells }),

      | Err(nom::Err::Error((rest, _)))
      | Err(nom::Err::Failure((rest, _))) => {
        Err(RuntimeError::InvalidProgramText {
          near: rest.chars().take(24).collect()
        })
      }

      Err(nom::Err::Incomplete(_)) => {
        Err(RuntimeError::InvalidProgramText { near: String::new() })
      }

    }
  }

  /// Copies the program into a fresh machine in the `Created` state.
  pub fn boot(&self) -> Machine {
    Machine::with_memory(Memory::new(self.cells.clone()))
  }

  pub fn cells(&self) -> &[Int] {
    &self.cells
  }

}

impl FromStr for Program {
  type Err = RuntimeError;

  fn from_str(text: &str) -> Result<Program, RuntimeError> {
    Program::parse(text)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_a_plain_list() {
    let program = Program::parse("1,9,10,3,2,3,11,0,99,30,40,50").unwrap();
    assert_eq!(program.cells(), &[1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
  }

  #[test]
  fn parses_negative_integers_and_surrounding_whitespace() {
    let program = Program::parse("  3,9, 8,9,10,9,4,9,99,-1,8\n").unwrap();
    assert_eq!(program.cells()[9], -1);
    assert_eq!(program.cells().len(), 11);
  }

  #[test]
  fn rejects_non_numeric_text() {
    match Program::parse("1,2,fish,4") {
      Err(RuntimeError::InvalidProgramText { near }) => {
        assert!(near.starts_with(","));
      }
      other => panic!("expected InvalidProgramText, got {:?}", other),
    }
  }

  #[test]
  fn rejects_a_dangling_comma() {
    assert!(Program::parse("1,2,").is_err());
  }

  #[test]
  fn from_str_round_trips() {
    let program: Program = "104,42,99".parse().unwrap();
    assert_eq!(program.cells(), &[104, 42, 99]);
  }
}
