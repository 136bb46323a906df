//! Motivational messages by performance tier.
//!
//! Tier thresholds (4.50, 4.00, 2.50, 1.50) are independent of the
//! classification bands and intentionally do not line up with them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Performance tier used to pick a message pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    /// 4.50 and above
    Excellent,
    /// 4.00 to below 4.50
    Good,
    /// 2.50 to below 4.00
    Average,
    /// 1.50 to below 2.50
    NeedsImprovement,
    /// Below 1.50
    Critical,
}

const EXCELLENT_MESSAGES: &[&str] = &[
    "Outstanding work! You are performing at the very top of your class.",
    "Exceptional results. Keep up this remarkable standard!",
    "Brilliant! Your dedication is clearly paying off.",
    "First-rate performance. You are setting the bar for everyone else.",
    "Superb achievement. Stay curious and keep pushing your limits.",
];

const GOOD_MESSAGES: &[&str] = &[
    "Great job! You are well within reach of the top tier.",
    "Strong performance. A little extra effort could take you to the top.",
    "You are doing very well. Keep building on this momentum.",
    "Impressive results. Stay consistent and excellence will follow.",
    "Solid work! Your hard work is showing in your grades.",
];

const AVERAGE_MESSAGES: &[&str] = &[
    "Good effort. Steady improvement will move you up the ranks.",
    "You are on track. Focus on your weaker courses to climb higher.",
    "Decent results. Consistent study habits can lift your grades further.",
    "Keep going! Small improvements each semester add up.",
    "You have a solid base. Set a target for next semester and aim for it.",
];

const NEEDS_IMPROVEMENT_MESSAGES: &[&str] = &[
    "You can do better. Consider forming a study group for tough courses.",
    "There is room to grow. Speak with your lecturers about where to focus.",
    "Don't give up. A structured study plan can turn things around.",
    "Your grades need attention. Prioritize the courses with the most units.",
    "Every semester is a fresh start. Commit to steady daily study.",
];

const CRITICAL_MESSAGES: &[&str] = &[
    "Your standing needs urgent attention. Please meet your academic adviser.",
    "This is a critical point. Reach out for tutoring and support right away.",
    "Don't lose hope. With the right support you can recover from this.",
    "It is time to reset. Review your course load and study approach.",
    "Help is available. Talk to your department about academic support options.",
];

impl PerformanceTier {
    /// Tier for a CGPA
    pub fn from_cgpa(cgpa: f64) -> Self {
        if cgpa >= 4.5 {
            Self::Excellent
        } else if cgpa >= 4.0 {
            Self::Good
        } else if cgpa >= 2.5 {
            Self::Average
        } else if cgpa >= 1.5 {
            Self::NeedsImprovement
        } else {
            Self::Critical
        }
    }

    /// Message pool for this tier
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            Self::Excellent => EXCELLENT_MESSAGES,
            Self::Good => GOOD_MESSAGES,
            Self::Average => AVERAGE_MESSAGES,
            Self::NeedsImprovement => NEEDS_IMPROVEMENT_MESSAGES,
            Self::Critical => CRITICAL_MESSAGES,
        }
    }
}

/// Pick a message for a CGPA uniformly from its tier's pool
pub fn motivational_message<R: Rng + ?Sized>(cgpa: f64, rng: &mut R) -> &'static str {
    let pool = PerformanceTier::from_cgpa(cgpa).messages();
    pool[rng.gen_range(0..pool.len())]
}

/// Message picker owning its random source
///
/// Seed it in tests to get a repeatable sequence.
#[derive(Debug, Clone)]
pub struct MessageSelector {
    rng: StdRng,
}

impl MessageSelector {
    /// Selector with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Selector seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Next message for a CGPA
    pub fn select(&mut self, cgpa: f64) -> &'static str {
        motivational_message(cgpa, &mut self.rng)
    }

    /// Access the underlying random source
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for MessageSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}
