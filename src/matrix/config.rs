//! Loader configuration

/// Options controlling how a Matrix Market file is turned into CSR arrays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Mirror off-diagonal entries of symmetric, skew-symmetric and
    /// hermitian files. When disabled only the stored triangle is returned.
    pub expand_symmetry: bool,

    /// Sort column indices within each row after conversion.
    /// When disabled rows keep file order.
    pub sort_indices: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            expand_symmetry: true,
            sort_indices: false,
        }
    }
}

impl LoadOptions {
    /// Sets whether symmetric storage is expanded to the full matrix
    pub fn with_expand_symmetry(mut self, expand: bool) -> Self {
        self.expand_symmetry = expand;
        self
    }

    /// Sets whether column indices are sorted within rows
    pub fn with_sort_indices(mut self, sort: bool) -> Self {
        self.sort_indices = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_file_order() {
        let options = LoadOptions::default();
        assert!(options.expand_symmetry);
        assert!(!options.sort_indices);
    }

    #[test]
    fn test_builders() {
        let options = LoadOptions::default()
            .with_expand_symmetry(false)
            .with_sort_indices(true);
        assert!(!options.expand_symmetry);
        assert!(options.sort_indices);
    }
}
