/// Asserts that every gene of a DNA lies within its own range.
#[macro_export]
macro_rules! assert_genes_in_range {
    ($dna:expr) => {
        let dna = &$dna;
        for (index, gene) in dna.genes().iter().enumerate() {
            assert!(
                (dna.min_value()..=dna.max_value()).contains(gene),
                "Gene {} value {} outside [{}, {}]",
                index,
                gene,
                dna.min_value(),
                dna.max_value()
            );
        }
    };
}

/// Asserts that every value is within `[-1, 1]` and finite.
#[macro_export]
macro_rules! assert_unit_interval {
    ($values:expr) => {
        for (index, value) in $values.iter().enumerate() {
            assert!(
                value.is_finite() && (-1.0..=1.0).contains(value),
                "Value {} = {} outside [-1, 1]",
                index,
                value
            );
        }
    };
}
