///
/// A single allele query against a beacon.
///
/// Constructed per request, validated once and dropped afterwards. Coordinates are
/// 0-based and `None` means the field was not supplied; `Some(0)` is a real position.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlleleQuery {
    /// The chromosome (contig) name.
    pub reference_name: String,
    /// The reference allele; empty when not supplied.
    pub reference_bases: String,
    /// The alternate allele; empty when not supplied.
    pub alternate_bases: String,

    /// Matches alleles that start at this position.
    pub start: Option<i64>,
    /// Matches alleles that end at this position.
    pub end: Option<i64>,
    /// Matches alleles that start at this position or higher.
    pub start_min: Option<i64>,
    /// Matches alleles that start at this position or lower.
    pub start_max: Option<i64>,
    /// Matches alleles that end at this position or higher.
    pub end_min: Option<i64>,
    /// Matches alleles that end at this position or lower.
    pub end_max: Option<i64>,

    /// Legacy single position; matches alleles whose `[start, end)` span contains it.
    pub coordinate: Option<i64>,
}

impl AlleleQuery {
    pub fn new(reference_name: impl Into<String>, reference_bases: impl Into<String>) -> Self {
        AlleleQuery {
            reference_name: reference_name.into(),
            reference_bases: reference_bases.into(),
            ..Default::default()
        }
    }

    /// `start` is set together with either `end` or non-empty reference bases.
    pub fn is_precise(&self) -> bool {
        self.start.is_some() && (self.end.is_some() || !self.reference_bases.is_empty())
    }

    /// All four range bounds are set.
    pub fn is_imprecise(&self) -> bool {
        self.start_min.is_some()
            && self.start_max.is_some()
            && self.end_min.is_some()
            && self.end_max.is_some()
    }

    /// Any of the start/end style coordinate fields is set.
    pub fn has_interval_fields(&self) -> bool {
        [
            self.start,
            self.end,
            self.start_min,
            self.start_max,
            self.end_min,
            self.end_max,
        ]
        .iter()
        .any(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn test_zero_is_a_set_coordinate() {
        let query = AlleleQuery {
            start: Some(0),
            ..AlleleQuery::new("1", "A")
        };
        assert!(query.is_precise());
        assert!(query.has_interval_fields());
    }

    #[rstest]
    fn test_start_without_end_or_bases_is_not_precise() {
        let query = AlleleQuery {
            start: Some(10),
            ..AlleleQuery::new("1", "")
        };
        assert!(!query.is_precise());
    }

    #[rstest]
    fn test_imprecise_needs_all_bounds() {
        let mut query = AlleleQuery {
            start_min: Some(1),
            start_max: Some(2),
            end_min: Some(3),
            ..AlleleQuery::new("1", "A")
        };
        assert!(!query.is_imprecise());
        query.end_max = Some(4);
        assert!(query.is_imprecise());
    }

    #[rstest]
    fn test_coordinate_is_not_an_interval_field() {
        let query = AlleleQuery {
            coordinate: Some(5),
            ..AlleleQuery::new("1", "A")
        };
        assert!(!query.has_interval_fields());
    }
}
