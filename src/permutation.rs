//! Heap's algorithm as an iterator, used to enumerate phase-setting orderings
//! when searching for the best pipeline configuration.

pub struct Permutations<T> {
  items: Vec<T>,
  /// Per-position loop counters standing in for the recursion stack.
  counters: Vec<usize>,
  index: usize,
  started: bool,
}

impl<T: Clone> Permutations<T> {
  pub fn of(items: &[T]) -> Permutations<T> {
    Permutations {
      items    : items.to_vec(),
      counters : vec![0; items.len()],
      index    : 1,
      started  : false,
    }
  }
}

impl<T: Clone> Iterator for Permutations<T> {
  type Item = Vec<T>;

  fn next(&mut self) -> Option<Vec<T>> {
    if !self.started {
      self.started = true;
      return Some(self.items.clone());
    }

    while self.index < self.items.len() {
      if self.counters[self.index] < self.index {
        let other = match self.index % 2 == 0 {
          true  => 0,
          false => self.counters[self.index]
        };
        self.items.swap(other, self.index);
        self.counters[self.index] += 1;
        self.index = 1;
        return Some(self.items.clone());
      } else {
        self.counters[self.index] = 0;
        self.index += 1;
      }
    }

    None
  }
}


#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn three_elements_give_all_six_orderings() {
    let orderings: HashSet<Vec<u8>> = Permutations::of(&[1, 2, 3]).collect();
    let expected: HashSet<Vec<u8>> = vec![
      vec![1, 2, 3], vec![1, 3, 2],
      vec![2, 1, 3], vec![2, 3, 1],
      vec![3, 1, 2], vec![3, 2, 1],
    ].into_iter().collect();
    assert_eq!(orderings, expected);
  }

  #[test]
  fn five_elements_give_120_distinct_orderings() {
    let orderings: HashSet<Vec<i64>> = Permutations::of(&[5, 6, 7, 8, 9]).collect();
    assert_eq!(orderings.len(), 120);
  }

  #[test]
  fn the_first_ordering_is_the_input_order() {
    let mut orderings = Permutations::of(&[9, 8, 7]);
    assert_eq!(orderings.next(), Some(vec![9, 8, 7]));
  }

  #[test]
  fn degenerate_inputs() {
    assert_eq!(Permutations::of(&[4]).count(), 1);
    assert_eq!(Permutations::<i64>::of(&[]).count(), 1);
  }
}
