//! The allele alphabet accepted in `referenceBases` and `alternateBases`.

/// The single-character placeholder for an unknown base.
pub const UNKNOWN_BASE: &str = "N";

/// Returns true when `bases` is one or more of `A`, `C`, `G`, `T`, or exactly `N`.
///
/// Matching is case sensitive; lowercase soft-masked bases are rejected.
pub fn is_valid_allele(bases: &str) -> bool {
    if bases == UNKNOWN_BASE {
        return true;
    }
    !bases.is_empty()
        && bases
            .bytes()
            .all(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("A")]
    #[case("ACGT")]
    #[case("TTTTTTTTTTTTTTTTTTTTTTTTTTTTTTTTTTTT")]
    #[case("N")]
    fn test_valid_alleles(#[case] bases: &str) {
        assert!(is_valid_allele(bases));
    }

    #[rstest]
    #[case("")]
    #[case("X")]
    #[case("act")]
    #[case("NN")]
    #[case("AN")]
    #[case("A C")]
    #[case("ACGU")]
    fn test_invalid_alleles(#[case] bases: &str) {
        assert!(!is_valid_allele(bases));
    }
}
