use serde::{Deserialize, Serialize};

/// Cascading geographic filter: district -> taluka -> village.
///
/// Changing a level always clears every level below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoFilter {
    pub district: String,
    pub taluka: String,
    pub village: String,
}

impl GeoFilter {
    pub fn set_district(&mut self, district: impl Into<String>) {
        self.district = district.into();
        self.taluka.clear();
        self.village.clear();
    }

    pub fn set_taluka(&mut self, taluka: impl Into<String>) {
        self.taluka = taluka.into();
        self.village.clear();
    }

    pub fn set_village(&mut self, village: impl Into<String>) {
        self.village = village.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.district.trim().is_empty()
            && self.taluka.trim().is_empty()
            && self.village.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> GeoFilter {
        GeoFilter {
            district: "Satara".into(),
            taluka: "Wai".into(),
            village: "Bavdhan".into(),
        }
    }

    #[test]
    fn test_district_resets_taluka_and_village() {
        let mut f = full();
        f.set_district("Pune");
        assert_eq!(f.district, "Pune");
        assert!(f.taluka.is_empty());
        assert!(f.village.is_empty());
    }

    #[test]
    fn test_district_reset_even_when_unchanged() {
        let mut f = full();
        f.set_district("Satara");
        assert!(f.taluka.is_empty());
        assert!(f.village.is_empty());
    }

    #[test]
    fn test_taluka_resets_only_village() {
        let mut f = full();
        f.set_taluka("Koregaon");
        assert_eq!(f.district, "Satara");
        assert_eq!(f.taluka, "Koregaon");
        assert!(f.village.is_empty());
    }

    #[test]
    fn test_village_touches_nothing_else() {
        let mut f = full();
        f.set_village("Pasarni");
        assert_eq!(f.district, "Satara");
        assert_eq!(f.taluka, "Wai");
        assert_eq!(f.village, "Pasarni");
    }

    #[test]
    fn test_clear() {
        let mut f = full();
        f.clear();
        assert!(f.is_empty());
    }
}
