/*!

  The Intcode instruction set. An instruction occupies one cell for its opcode
  and mode digits plus one cell per parameter. The last two decimal digits of
  the opcode cell select the operation; each further digit, read right to left
  starting at the hundreds place, is the addressing mode of parameters 1, 2, 3
  in turn, with missing digits defaulting to position mode.

  Instructions are decoded fresh on every cycle and never stored. Decoding is
  pure integer arithmetic on the cell value, so re-decoding the same cell is
  idempotent and costs no allocation.

*/

mod decode;
mod opcode;

pub use decode::{decode, Instruction};
pub use opcode::{Opcode, ParameterMode};
