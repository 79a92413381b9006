//! Substitution enumeration: lazy cross products over parameter domains
//!
//! A [`GroundingSpace`] resolves each typed parameter to its sort's domain
//! extension and exposes the exact number of full assignments up front,
//! before any tuple is produced. Tuples are enumerated in mixed-radix order
//! with the first parameter varying slowest, by decoding ranks on demand, so
//! the cross product is never materialized and the sequence is restartable.

use crate::error::Result;
use crate::fol::{Constant, Language, SortId, Variable};

/// The enumeration space of a typed parameter list
#[derive(Debug, Clone)]
pub struct GroundingSpace {
    variables: Vec<Variable>,
    domains: Vec<Vec<Constant>>,
    cardinality: usize,
}

impl GroundingSpace {
    /// Build the space for a schema's parameters
    ///
    /// An empty parameter list yields cardinality 1 (the single empty
    /// assignment); an empty domain yields cardinality 0. Neither is an
    /// error.
    pub fn for_parameters(language: &Language, parameters: &[Variable]) -> Result<GroundingSpace> {
        let sorts: Vec<SortId> = parameters.iter().map(|v| v.sort).collect();
        let mut space = GroundingSpace::over_sorts(language, &sorts)?;
        space.variables = parameters.to_vec();
        Ok(space)
    }

    /// Build the space over raw argument sorts (no named variables)
    ///
    /// The cardinality product saturates at `usize::MAX` instead of
    /// wrapping, so a resource guard comparing against it still fires.
    pub fn over_sorts(language: &Language, sorts: &[SortId]) -> Result<GroundingSpace> {
        let mut domains = Vec::with_capacity(sorts.len());
        let mut cardinality = 1usize;
        for &sort in sorts {
            let domain = language.domain_values(sort)?;
            cardinality = cardinality.saturating_mul(domain.len());
            domains.push(domain);
        }
        Ok(GroundingSpace {
            variables: Vec::new(),
            domains,
            cardinality,
        })
    }

    /// Exact number of full assignments this space enumerates
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// The parameters, in enumeration order (slowest first)
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Per-parameter domain values, in parameter order
    pub fn domains(&self) -> &[Vec<Constant>] {
        &self.domains
    }

    /// Decode the assignment at the given rank without enumerating
    /// its predecessors
    ///
    /// Rank 0 is the all-first-values tuple; the last parameter varies
    /// fastest. Panics if `rank >= cardinality`.
    pub fn tuple_at(&self, rank: usize) -> Vec<Constant> {
        assert!(rank < self.cardinality, "rank {} out of range", rank);
        let mut tuple = vec![None; self.domains.len()];
        let mut rest = rank;
        for (slot, domain) in tuple.iter_mut().zip(&self.domains).rev() {
            let index = rest % domain.len();
            rest /= domain.len();
            *slot = Some(domain[index]);
        }
        tuple.into_iter().map(Option::unwrap).collect()
    }

    /// Lazily enumerate every full assignment, in rank order
    pub fn tuples(&self) -> Tuples<'_> {
        Tuples {
            space: self,
            next_rank: 0,
        }
    }
}

/// Lazy, restartable iterator over the assignments of a [`GroundingSpace`]
#[derive(Debug, Clone)]
pub struct Tuples<'a> {
    space: &'a GroundingSpace,
    next_rank: usize,
}

impl Iterator for Tuples<'_> {
    type Item = Vec<Constant>;

    fn next(&mut self) -> Option<Vec<Constant>> {
        if self.next_rank >= self.space.cardinality {
            return None;
        }
        let tuple = self.space.tuple_at(self.next_rank);
        self.next_rank += 1;
        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.space.cardinality - self.next_rank;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Tuples<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::Language;

    fn two_sort_language() -> (Language, Variable, Variable) {
        let mut lang = Language::new();
        let block = lang.sort("block").unwrap();
        let place = lang.sort("place").unwrap();
        for name in ["b1", "b2", "b3"] {
            lang.constant(name, block).unwrap();
        }
        for name in ["p1", "p2"] {
            lang.constant(name, place).unwrap();
        }
        let x = lang.variable("x", block);
        let y = lang.variable("y", place);
        (lang, x, y)
    }

    #[test]
    fn test_cardinality_is_domain_product() {
        let (lang, x, y) = two_sort_language();
        let space = GroundingSpace::for_parameters(&lang, &[x, y]).unwrap();
        assert_eq!(space.cardinality(), 6);
        assert_eq!(space.variables(), &[x, y]);
        assert_eq!(space.domains().len(), 2);
    }

    #[test]
    fn test_cardinality_matches_produced_tuples() {
        let (lang, x, y) = two_sort_language();
        let space = GroundingSpace::for_parameters(&lang, &[x, y]).unwrap();
        assert_eq!(space.tuples().count(), space.cardinality());
    }

    #[test]
    fn test_first_parameter_varies_slowest() {
        let (lang, x, y) = two_sort_language();
        let space = GroundingSpace::for_parameters(&lang, &[x, y]).unwrap();
        let tuples: Vec<_> = space.tuples().collect();

        // b1 stays fixed across the first |place| tuples
        assert_eq!(tuples[0][0], tuples[1][0]);
        assert_ne!(tuples[0][1], tuples[1][1]);
        assert_ne!(tuples[1][0], tuples[2][0]);
    }

    #[test]
    fn test_enumeration_is_restartable_and_deterministic() {
        let (lang, x, y) = two_sort_language();
        let space = GroundingSpace::for_parameters(&lang, &[x, y]).unwrap();
        let first: Vec<_> = space.tuples().collect();
        let second: Vec<_> = space.tuples().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_parameter_list_yields_one_empty_tuple() {
        let (lang, _, _) = two_sort_language();
        let space = GroundingSpace::for_parameters(&lang, &[]).unwrap();
        assert_eq!(space.cardinality(), 1);

        let tuples: Vec<_> = space.tuples().collect();
        assert_eq!(tuples, vec![Vec::new()]);
    }

    #[test]
    fn test_empty_domain_yields_zero_tuples() {
        let mut lang = Language::new();
        let ghost = lang.sort("ghost").unwrap();
        let g = lang.variable("g", ghost);

        let space = GroundingSpace::for_parameters(&lang, &[g]).unwrap();
        assert_eq!(space.cardinality(), 0);
        assert_eq!(space.tuples().count(), 0);
    }

    #[test]
    fn test_tuple_at_agrees_with_iteration() {
        let (lang, x, y) = two_sort_language();
        let space = GroundingSpace::for_parameters(&lang, &[x, y]).unwrap();
        for (rank, tuple) in space.tuples().enumerate() {
            assert_eq!(space.tuple_at(rank), tuple);
        }
    }

    #[test]
    fn test_interval_sort_enumeration() {
        let mut lang = Language::new();
        let coord = lang.interval("coord", 1, 3).unwrap();
        let c = lang.variable("c", coord);

        let space = GroundingSpace::for_parameters(&lang, &[c]).unwrap();
        assert_eq!(space.cardinality(), 3);
        assert_eq!(space.tuples().count(), 3);
    }
}
