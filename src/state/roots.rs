// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Suppression of scaled duplicates.
//!
//! Scaling a solution by `k` scales its root by `k`, so a root divisible by
//! an earlier root is treated as a multiple of that earlier solution. This
//! looks only at the root; it does not check the four bases for a common
//! factor, so it is a heuristic rather than a primitivity test.

/// Whether `candidate` is divisible by none of `known_roots`.
pub fn is_primitive(candidate: usize, known_roots: &[usize]) -> bool {
    !known_roots
        .iter()
        .any(|&root| root != 0 && candidate % root == 0)
}

/// Roots reported as primitive, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateFilter {
    roots: Vec<usize>,
}

impl DuplicateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `root` and return `true` if it is primitive; otherwise leave
    /// the known roots unchanged and return `false`.
    pub fn admit(&mut self, root: usize) -> bool {
        if is_primitive(root, &self.roots) {
            self.roots.push(root);
            true
        } else {
            false
        }
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn into_roots(self) -> Vec<usize> {
        self.roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_known_roots() {
        assert!(is_primitive(144, &[]));
    }

    #[test]
    fn test_multiples_are_suppressed() {
        let mut filter = DuplicateFilter::new();
        assert!(filter.admit(144));
        assert!(!filter.admit(288));
        assert!(!filter.admit(432));
        assert!(!filter.admit(144));
        assert_eq!(filter.roots(), &[144]);
    }

    #[test]
    fn test_non_multiples_are_admitted() {
        let mut filter = DuplicateFilter::new();
        assert!(filter.admit(144));
        assert!(filter.admit(85_359));
        assert!(filter.admit(72));
        assert_eq!(filter.len(), 3);
        assert_eq!(filter.into_roots(), vec![144, 85_359, 72]);
    }

    #[test]
    fn test_any_earlier_root_suppresses() {
        assert!(!is_primitive(30, &[7, 11, 5]));
        assert!(is_primitive(31, &[7, 11, 5]));
    }
}
