//! Staff performance ratings.
//!
//! Six 0–10 axes scored on the directory form and shown on the shell's
//! dashboard. The allocator never consults them; the weighted star score
//! exists for display and for the manual balancing the planner does after
//! generation.

use serde::{Deserialize, Serialize};

/// Dashboard performance scores for one staff member (each 0–10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRatings {
    pub professionalism: u8,
    pub experience: u8,
    pub stamina: u8,
    pub availability: u8,
    pub empathy: u8,
    pub leadership: u8,
}

impl Default for StaffRatings {
    /// Midpoint scores, matching the directory form's defaults.
    fn default() -> Self {
        Self {
            professionalism: 5,
            experience: 5,
            stamina: 5,
            availability: 5,
            empathy: 5,
            leadership: 5,
        }
    }
}

impl StaffRatings {
    /// Weighted star score on a 0–5 scale, in half-star steps.
    ///
    /// Weights: professionalism 0.25, experience 0.20, stamina 0.20,
    /// availability 0.15. Empathy and leadership are collected for the
    /// personnel file but carry no weight in the bar.
    pub fn star_score(&self) -> f64 {
        let weighted = f64::from(self.professionalism) * 0.25
            + f64::from(self.experience) * 0.20
            + f64::from(self.stamina) * 0.20
            + f64::from(self.availability) * 0.15;
        let halved = weighted / 2.0;
        ((halved * 2.0).round() / 2.0).clamp(0.0, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_midpoint() {
        // 5*(0.25+0.20+0.20+0.15) = 4.0 → 2.0 stars.
        assert_eq!(StaffRatings::default().star_score(), 2.0);
    }

    #[test]
    fn test_top_scores() {
        let r = StaffRatings {
            professionalism: 10,
            experience: 10,
            stamina: 10,
            availability: 10,
            empathy: 0,
            leadership: 0,
        };
        // 10*0.8 = 8.0 → 4.0 stars; empathy/leadership carry no weight.
        assert_eq!(r.star_score(), 4.0);
    }

    #[test]
    fn test_half_star_rounding() {
        let r = StaffRatings {
            professionalism: 7,
            experience: 6,
            stamina: 6,
            availability: 5,
            empathy: 5,
            leadership: 5,
        };
        // 1.75+1.2+1.2+0.75 = 4.9 → 2.45 → rounds to 2.5.
        assert_eq!(r.star_score(), 2.5);
    }
}
