use super::table::PlacementPointsTable;
use crate::error::{PointsError, Result};

/// How a point value was reached, for verbose display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsAward {
    pub placement: u32,
    pub base_points: u32,
    pub field_size: u32,
    pub standard_field: u32,
    pub points: u32,
}

/// Scores placements for one event of a given field size.
///
/// Holds no mutable state: the same placement always scores the same.
#[derive(Debug, Clone, Copy)]
pub struct PointsCalculator<'a> {
    table: &'a PlacementPointsTable,
    size: u32,
}

impl<'a> PointsCalculator<'a> {
    pub fn new(size: u32, table: &'a PlacementPointsTable) -> Result<Self> {
        if size == 0 {
            return Err(PointsError::InvalidFieldSize { size });
        }
        Ok(Self { table, size })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Points for a placement: `floor(base * size / standard_field)`.
    pub fn calculate_points(&self, placement: u32) -> Result<u32> {
        self.award(placement).map(|award| award.points)
    }

    /// Same as [`calculate_points`](Self::calculate_points) with the inputs kept.
    pub fn award(&self, placement: u32) -> Result<PointsAward> {
        if placement == 0 || placement > self.size {
            return Err(PointsError::InvalidPlacement {
                placement,
                size: self.size,
            });
        }

        let base_points = self.table.base_points(placement);
        let standard_field = self.table.standard_field();
        // Widened so base * size cannot overflow; saturates on the way back.
        let scaled = u64::from(base_points) * u64::from(self.size) / u64::from(standard_field);
        let points = u32::try_from(scaled).unwrap_or(u32::MAX);

        Ok(PointsAward {
            placement,
            base_points,
            field_size: self.size,
            standard_field,
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn small_table() -> PlacementPointsTable {
        PlacementPointsTable::new(BTreeMap::from([(1, 100), (2, 80)]), 50).unwrap()
    }

    #[test]
    fn test_standard_field_first_place() {
        let table = small_table();
        let calc = PointsCalculator::new(50, &table).unwrap();
        assert_eq!(calc.calculate_points(1), Ok(100));
    }

    #[test]
    fn test_half_field_halves_points() {
        let table = small_table();
        let calc = PointsCalculator::new(25, &table).unwrap();
        assert_eq!(calc.calculate_points(1), Ok(50));
    }

    #[test]
    fn test_untabulated_placement_earns_floor() {
        let table = small_table();
        let calc = PointsCalculator::new(50, &table).unwrap();
        assert_eq!(calc.calculate_points(7), Ok(1));
    }

    #[test]
    fn test_truncates_toward_zero() {
        let table = small_table();
        // 80 * 33 / 50 = 52.8
        let calc = PointsCalculator::new(33, &table).unwrap();
        assert_eq!(calc.calculate_points(2), Ok(52));
        // 1 * 49 / 50 = 0.98
        let calc = PointsCalculator::new(49, &table).unwrap();
        assert_eq!(calc.calculate_points(3), Ok(0));
    }

    #[test]
    fn test_large_field_inflates_points() {
        let table = small_table();
        let calc = PointsCalculator::new(200, &table).unwrap();
        assert_eq!(calc.calculate_points(1), Ok(400));
    }

    #[test]
    fn test_zero_field_size_rejected() {
        let table = small_table();
        let result = PointsCalculator::new(0, &table);
        assert_eq!(result.unwrap_err(), PointsError::InvalidFieldSize { size: 0 });
    }

    #[test]
    fn test_zero_placement_rejected() {
        let table = small_table();
        let calc = PointsCalculator::new(10, &table).unwrap();
        assert_eq!(
            calc.calculate_points(0),
            Err(PointsError::InvalidPlacement { placement: 0, size: 10 })
        );
    }

    #[test]
    fn test_placement_beyond_field_rejected() {
        let table = small_table();
        let calc = PointsCalculator::new(10, &table).unwrap();
        assert!(matches!(
            calc.calculate_points(11),
            Err(PointsError::InvalidPlacement { placement: 11, .. })
        ));
        // Last place is still valid
        assert!(calc.calculate_points(10).is_ok());
    }

    #[test]
    fn test_award_breakdown() {
        let table = small_table();
        let calc = PointsCalculator::new(40, &table).unwrap();
        let award = calc.award(2).unwrap();
        assert_eq!(award.base_points, 80);
        assert_eq!(award.field_size, 40);
        assert_eq!(award.standard_field, 50);
        assert_eq!(award.points, 64);
    }

    #[test]
    fn test_huge_field_saturates() {
        let table = PlacementPointsTable::new(BTreeMap::from([(1, u32::MAX)]), 1).unwrap();
        let calc = PointsCalculator::new(u32::MAX, &table).unwrap();
        assert_eq!(calc.calculate_points(1), Ok(u32::MAX));
    }

    proptest! {
        #[test]
        fn prop_tabulated_matches_formula(size in 1u32..10_000, base in 0u32..1_000) {
            let table = PlacementPointsTable::new(BTreeMap::from([(1, base)]), 50).unwrap();
            let calc = PointsCalculator::new(size, &table).unwrap();
            let expected = (u64::from(base) * u64::from(size) / 50) as u32;
            prop_assert_eq!(calc.calculate_points(1), Ok(expected));
        }

        #[test]
        fn prop_untabulated_matches_floor(size in 3u32..10_000) {
            let table = small_table();
            let calc = PointsCalculator::new(size, &table).unwrap();
            prop_assert_eq!(calc.calculate_points(size), Ok(size / 50));
        }

        #[test]
        fn prop_non_decreasing_in_size(placement in 1u32..20, extra in 0u32..500, grow in 0u32..500) {
            let table = PlacementPointsTable::default();
            let smaller = placement + extra;
            let larger = smaller + grow;
            let a = PointsCalculator::new(smaller, &table).unwrap().calculate_points(placement).unwrap();
            let b = PointsCalculator::new(larger, &table).unwrap().calculate_points(placement).unwrap();
            prop_assert!(a <= b);
        }

        #[test]
        fn prop_repeat_calls_agree(size in 1u32..1_000, placement in 1u32..1_000) {
            let table = PlacementPointsTable::default();
            let calc = PointsCalculator::new(size, &table).unwrap();
            prop_assert_eq!(calc.calculate_points(placement), calc.calculate_points(placement));
        }
    }
}
