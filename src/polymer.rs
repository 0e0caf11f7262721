//! Polymer reduction: adjacent units of the same type but opposite polarity annihilate until no
//! more reactions are possible.

use itertools::Itertools;
use std::fmt;

/// One unit of a polymer; the type is the lowercase letter and the polarity is the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit(u8);

impl Unit {
    pub fn new(byte: u8) -> Self {
        Unit(byte)
    }

    /// Lowercase form of the unit. Non-alphabetic units are their own identity.
    pub fn identity(&self) -> u8 {
        self.0.to_ascii_lowercase()
    }

    pub fn is_upper(&self) -> bool {
        self.0.is_ascii_uppercase()
    }

    pub fn annihilates(&self, other: &Unit) -> bool {
        // only letters are folded, so differing bytes can only match as opposite cases
        self.0 != other.0 && self.0.eq_ignore_ascii_case(&other.0)
    }

    pub fn as_byte(&self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polymer(Vec<Unit>);

impl Polymer {
    pub fn units(&self) -> &[Unit] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        self.0.iter().map(Unit::as_byte).collect()
    }

    pub fn reduce(self) -> Polymer {
        reduce(self)
    }
}

impl From<&[u8]> for Polymer {
    fn from(bytes: &[u8]) -> Self {
        Polymer(bytes.iter().copied().map(Unit::new).collect())
    }
}

impl From<&str> for Polymer {
    fn from(s: &str) -> Self {
        Polymer::from(s.as_bytes())
    }
}

impl std::iter::FromIterator<Unit> for Polymer {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        Polymer(iter.into_iter().collect())
    }
}

impl fmt::Display for Polymer {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", String::from_utf8_lossy(&self.as_bytes()))
    }
}

/// Returns the start indices of the annihilating pairs found in a single left to right pass.
///
/// A pair starting right after the previously recorded one is skipped, so that in a run like
/// `aAa` only the first pair is taken on this pass.
pub fn find_annihilating_pairs(polymer: &Polymer) -> Vec<usize> {
    let mut found: Vec<usize> = Vec::new();

    for (i, (a, b)) in polymer.units().iter().tuple_windows().enumerate() {
        if !a.annihilates(b) {
            continue;
        }

        match found.last() {
            Some(&prev) if i - prev <= 1 => {}
            _ => found.push(i),
        }
    }

    found
}

/// Excises the two unit spans starting at each of the indices. Indices refer to the given
/// polymer, not to any intermediate result.
pub fn remove_pairs(polymer: &Polymer, indices: &[usize]) -> Polymer {
    let mut excised = bitvec::bitvec![0; polymer.len()];

    for &start in indices {
        assert!(
            start + 1 < polymer.len(),
            "pair at {} out of bounds for length {}",
            start,
            polymer.len()
        );
        excised.set(start, true);
        excised.set(start + 1, true);
    }

    polymer
        .units()
        .iter()
        .enumerate()
        .filter(|&(idx, _)| !excised[idx])
        .map(|(_, &unit)| unit)
        .collect()
}

/// Fixpoint of a reduction along with the number of removal passes it took to get there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub polymer: Polymer,
    pub passes: usize,
}

pub fn reduce_counting_passes(mut polymer: Polymer) -> Reduction {
    let mut passes = 0;

    loop {
        let pairs = find_annihilating_pairs(&polymer);

        if pairs.is_empty() {
            return Reduction { polymer, passes };
        }

        let next = remove_pairs(&polymer, &pairs);
        debug_assert_eq!(next.len() + 2 * pairs.len(), polymer.len());

        polymer = next;
        passes += 1;
    }
}

/// Reacts the polymer until no annihilating pairs remain.
pub fn reduce(polymer: Polymer) -> Polymer {
    reduce_counting_passes(polymer).polymer
}

/// Single pass reduction: every unit either annihilates with the top of the stack or is pushed.
/// Reaches the same fixpoint as [`reduce`].
pub fn reduce_with_stack(polymer: &Polymer) -> Polymer {
    let mut reduced = Vec::with_capacity(polymer.len());

    for &unit in polymer.units() {
        match reduced.last() {
            Some(top) if unit.annihilates(top) => {
                reduced.pop();
            }
            _ => reduced.push(unit),
        }
    }

    Polymer(reduced)
}

/// Copy of the polymer with all units of the given type removed, in both polarities.
pub fn without(polymer: &Polymer, letter: u8) -> Polymer {
    let letter = letter.to_ascii_lowercase();
    polymer
        .units()
        .iter()
        .copied()
        .filter(|unit| unit.identity() != letter)
        .collect()
}

/// Finds the unit type whose removal allows the shortest reduction, with the reduced length.
/// Earliest letter wins on ties. `None` only for an empty polymer.
pub fn best_variant(polymer: &Polymer) -> Option<(u8, usize)> {
    if polymer.is_empty() {
        return None;
    }

    (b'a'..=b'z')
        .map(|letter| (letter, reduce(without(polymer, letter)).len()))
        .min_by_key(|&(_, len)| len)
}

pub fn minimal_variant_length(polymer: &Polymer) -> usize {
    best_variant(polymer).map(|(_, len)| len).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "dabAcCaCBAcCcaDA";

    fn reduced(s: &str) -> String {
        reduce(Polymer::from(s)).to_string()
    }

    #[test]
    fn unit_polarity() {
        let a = Unit::new(b'a');
        let upper_a = Unit::new(b'A');
        assert!(a.annihilates(&upper_a));
        assert!(upper_a.annihilates(&a));
        assert!(!a.annihilates(&a));
        assert!(!a.annihilates(&Unit::new(b'B')));
        assert_eq!(upper_a.identity(), b'a');
        assert!(upper_a.is_upper());
        assert!(!a.is_upper());
    }

    #[test]
    fn non_alphabetic_never_reacts() {
        assert!(!Unit::new(b'1').annihilates(&Unit::new(b'1')));
        assert!(!Unit::new(b'@').annihilates(&Unit::new(b'`')));
        assert_eq!(reduced("a1A"), "a1A");
    }

    #[test]
    fn pairs_in_triplet() {
        assert_eq!(find_annihilating_pairs(&"aAa".into()), vec![0]);
        assert_eq!(find_annihilating_pairs(&"AaA".into()), vec![0]);
        assert_eq!(find_annihilating_pairs(&"aAaA".into()), vec![0, 2]);
    }

    #[test]
    fn pairs_of_example() {
        let polymer = Polymer::from(EXAMPLE);
        assert_eq!(find_annihilating_pairs(&polymer), vec![4, 10]);
    }

    #[test]
    fn remove_against_original_indices() {
        let polymer = Polymer::from("xaAybBz");
        let next = remove_pairs(&polymer, &[1, 4]);
        assert_eq!(next.to_string(), "xyz");
    }

    #[test]
    fn reduce_examples() {
        assert_eq!(reduced("aA"), "");
        assert_eq!(reduced("abBA"), "");
        assert_eq!(reduced("abAB"), "abAB");
        assert_eq!(reduced("aabAAB"), "aabAAB");
        assert_eq!(reduced(EXAMPLE), "dabCBAcaDA");
    }

    #[test]
    fn reduce_counts_passes() {
        let r = reduce_counting_passes("abBA".into());
        assert!(r.polymer.is_empty());
        assert_eq!(r.passes, 2);

        let r = reduce_counting_passes("abAB".into());
        assert_eq!(r.passes, 0);
    }

    #[test]
    fn empty() {
        assert_eq!(reduced(""), "");
        assert_eq!(find_annihilating_pairs(&Polymer::default()), Vec::<usize>::new());
        assert_eq!(minimal_variant_length(&Polymer::default()), 0);
        assert_eq!(best_variant(&Polymer::default()), None);
    }

    #[test]
    fn stack_agrees_on_example() {
        let polymer = Polymer::from(EXAMPLE);
        assert_eq!(reduce_with_stack(&polymer), reduce(polymer));
    }

    #[test]
    fn variants_of_example() {
        let polymer = Polymer::from(EXAMPLE);
        assert_eq!(without(&polymer, b'a').to_string(), "dbcCCBcCcD");
        assert_eq!(without(&polymer, b'C').to_string(), "dabAaBAaDA");

        assert_eq!(reduce(without(&polymer, b'a')).len(), 6);
        assert_eq!(reduce(without(&polymer, b'b')).len(), 8);
        assert_eq!(reduce(without(&polymer, b'c')).len(), 4);
        assert_eq!(reduce(without(&polymer, b'd')).len(), 6);

        assert_eq!(best_variant(&polymer), Some((b'c', 4)));
        assert_eq!(minimal_variant_length(&polymer), 4);
    }
}
