use std::env;
use std::fs;
use std::process;

use intcode::pipeline::{max_chain_signal, max_feedback_signal};
use intcode::Program;

fn main() {
  #[cfg(feature = "trace_computation")]
  println!("Computation Tracing ENABLED");

  let path = match env::args().nth(1) {
    Some(path) => path,
    None => {
      eprintln!("Usage: intcode <program-file>");
      process::exit(1);
    }
  };

  let text = match fs::read_to_string(&path) {
    Ok(text) => text,
    Err(error) => {
      eprintln!("Error reading {}: {}", path, error);
      process::exit(1);
    }
  };

  let program = match Program::parse(&text) {
    Ok(program) => program,
    Err(error) => {
      eprintln!("{}", error);
      process::exit(1);
    }
  };

  match max_chain_signal(&program, &[0, 1, 2, 3, 4]) {
    Ok((signal, phases)) => {
      println!("Highest chain signal: {} (phases: {:?})", signal, phases);
    }
    Err(error) => {
      eprintln!("{}", error);
      process::exit(1);
    }
  }

  match max_feedback_signal(&program, &[5, 6, 7, 8, 9]) {
    Ok((signal, phases)) => {
      println!("Highest feedback signal: {} (phases: {:?})", signal, phases);
    }
    Err(error) => {
      eprintln!("{}", error);
      process::exit(1);
    }
  }
}
