use serde::{
    Serialize,
    Deserialize
};

/// Inclusive year window during which a holiday rule applies.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct EffectiveYears {
    #[serde(default)]
    from_year: Option<i32>,
    #[serde(default)]
    until_year: Option<i32>
}

impl EffectiveYears {
    pub fn new(from_year: Option<i32>, until_year: Option<i32>) -> Option<EffectiveYears> {
        match (from_year, until_year) {
            (Some(from), Some(until)) if from > until => None,
            _ => Some(EffectiveYears { from_year, until_year })
        }
    }

    pub fn always() -> EffectiveYears {
        EffectiveYears::default()
    }

    pub fn from_year(&self) -> Option<i32> {
        self.from_year
    }

    pub fn until_year(&self) -> Option<i32> {
        self.until_year
    }

    pub fn contains(&self, year: i32) -> bool {
        self.from_year.is_none_or(|from| year >= from)
            && self.until_year.is_none_or(|until| year <= until)
    }

    pub fn overlaps(&self, other: &EffectiveYears) -> bool {
        let lo = self.from_year.unwrap_or(i32::MIN).max(other.from_year.unwrap_or(i32::MIN));
        let hi = self.until_year.unwrap_or(i32::MAX).min(other.until_year.unwrap_or(i32::MAX));
        lo <= hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_ended_guards() {
        let from_1865 = EffectiveYears::new(Some(1865), None).unwrap();
        assert!(!from_1865.contains(1864));
        assert!(from_1865.contains(1865));
        assert!(from_1865.contains(9999));
        assert!(EffectiveYears::always().contains(1000));
    }

    #[test]
    fn bounded_guard() {
        let era = EffectiveYears::new(Some(1865), Some(1967)).unwrap();
        assert!(era.contains(1967));
        assert!(!era.contains(1968));
        assert!(EffectiveYears::new(Some(1968), Some(1967)).is_none());
    }

    #[test]
    fn overlap() {
        let before = EffectiveYears::new(Some(1865), Some(1967)).unwrap();
        let after = EffectiveYears::new(Some(1968), None).unwrap();
        assert!(!before.overlaps(&after));
        assert!(before.overlaps(&EffectiveYears::always()));
    }
}
