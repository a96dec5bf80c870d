use strum::{EnumIter, IntoStaticStr};

/// Letter grade, best first. Declaration order is the fixed report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Assign a letter from a numeric score. Thresholds are checked high to
    /// low, first match wins: 90+ A, 80+ B, 70+ C, 60+ D, below 60 F.
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            Self::A
        } else if score >= 80 {
            Self::B
        } else if score >= 70 {
            Self::C
        } else if score >= 60 {
            Self::D
        } else {
            Self::F
        }
    }

    pub fn letter(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(90), Grade::A);
        assert_eq!(Grade::from_score(89), Grade::B);
        assert_eq!(Grade::from_score(80), Grade::B);
        assert_eq!(Grade::from_score(79), Grade::C);
        assert_eq!(Grade::from_score(70), Grade::C);
        assert_eq!(Grade::from_score(69), Grade::D);
        assert_eq!(Grade::from_score(60), Grade::D);
        assert_eq!(Grade::from_score(59), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn test_every_score_maps_to_a_known_letter() {
        let letters: Vec<&str> = Grade::iter().map(|g| g.letter()).collect();
        for score in 0..=100 {
            assert!(letters.contains(&Grade::from_score(score).letter()));
        }
    }

    #[test]
    fn test_report_order() {
        let order: Vec<Grade> = Grade::iter().collect();
        assert_eq!(order, [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F]);
    }
}
