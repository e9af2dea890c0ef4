//! The mutable memory store of one machine instance. Intcode keeps code and
//! data in the same flat sequence of integers, and programs routinely modify
//! their own cells while running.

/// The cell type of the machine. Every value the machine computes with,
/// addresses included, is an `Int`.
pub type Int = i64;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Memory {
  cells: Vec<Int>
}

impl Memory {

  pub fn new(cells: Vec<Int>) -> Memory {
    Memory { cells }
  }

  /// Reads the cell at `address`. Reading past the loaded length returns 0,
  /// the same value the store would hold after growing to cover `address`.
  pub fn read(&self, address: usize) -> Int {
    self.cells.get(address).copied().unwrap_or(0)
  }

  /// Writes `value` to the cell at `address`, dynamically growing the store
  /// with zeroed cells if the address is larger than the max index.
  pub fn write(&mut self, address: usize, value: Int) {
    if address >= self.cells.len() {
      self.cells.resize(address + 1, 0);
    }
    self.cells[address] = value;
  }

  /// The number of loaded (or grown-to) cells.
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  pub fn cells(&self) -> &[Int] {
    &self.cells
  }

}
