//! Degree classification bands.

use super::{ClassificationError, ClassificationResult};
use crate::calculation::round2;
use gpa_engine_domain::Student;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Degree classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeClass {
    /// 4.50 - 5.00
    FirstClass,
    /// 3.50 - 4.49
    SecondClassUpper,
    /// 2.50 - 3.49
    SecondClassLower,
    /// 1.50 - 2.49
    ThirdClass,
    /// 0.00 - 1.49
    Fail,
}

/// One row of the classification table
///
/// Bounds are stored in hundredths so the table can be checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassBand {
    /// Classification this band awards
    pub class: DegreeClass,
    lower_hundredths: u32,
    upper_hundredths: u32,
    /// Display label
    pub label: &'static str,
    /// Display color tag
    pub color: &'static str,
}

impl ClassBand {
    const fn new(
        class: DegreeClass,
        lower_hundredths: u32,
        upper_hundredths: u32,
        label: &'static str,
        color: &'static str,
    ) -> Self {
        Self {
            class,
            lower_hundredths,
            upper_hundredths,
            label,
            color,
        }
    }

    /// Lowest CGPA in the band
    pub fn lower_bound(&self) -> f64 {
        f64::from(self.lower_hundredths) / 100.0
    }

    /// Highest two-decimal CGPA in the band
    pub fn upper_bound(&self) -> f64 {
        f64::from(self.upper_hundredths) / 100.0
    }

    /// Whether a CGPA falls inside the band's displayed range
    pub fn contains(&self, cgpa: f64) -> bool {
        cgpa >= self.lower_bound() && cgpa <= self.upper_bound()
    }
}

impl fmt::Display for ClassBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.2} - {:.2})",
            self.label,
            self.lower_bound(),
            self.upper_bound()
        )
    }
}

impl Serialize for ClassBand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ClassBand", 5)?;
        state.serialize_field("class", &self.class)?;
        state.serialize_field("label", self.label)?;
        state.serialize_field("color", self.color)?;
        state.serialize_field("lowerBound", &self.lower_bound())?;
        state.serialize_field("upperBound", &self.upper_bound())?;
        state.end()
    }
}

const BAND_TABLE: [ClassBand; 5] = [
    ClassBand::new(DegreeClass::FirstClass, 450, 500, "First Class", "green"),
    ClassBand::new(
        DegreeClass::SecondClassUpper,
        350,
        449,
        "Second Class Upper",
        "blue",
    ),
    ClassBand::new(
        DegreeClass::SecondClassLower,
        250,
        349,
        "Second Class Lower",
        "yellow",
    ),
    ClassBand::new(DegreeClass::ThirdClass, 150, 249, "Third Class", "magenta"),
    ClassBand::new(DegreeClass::Fail, 0, 149, "Fail", "red"),
];

/// Classification table, best band first
pub static CLASS_BANDS: [ClassBand; 5] = BAND_TABLE;

const fn bands_are_contiguous(bands: &[ClassBand]) -> bool {
    if bands.is_empty() || bands[0].upper_hundredths != 500 {
        return false;
    }
    let mut i = 0;
    while i < bands.len() {
        if bands[i].lower_hundredths > bands[i].upper_hundredths {
            return false;
        }
        if i + 1 < bands.len() && bands[i + 1].upper_hundredths + 1 != bands[i].lower_hundredths {
            return false;
        }
        i += 1;
    }
    bands[bands.len() - 1].lower_hundredths == 0
}

const _: () = assert!(bands_are_contiguous(&BAND_TABLE));

/// Find the band for a CGPA
///
/// Values between two-decimal bounds (such as 4.495) belong to the band
/// whose lower bound they reach.
pub fn classify(cgpa: f64) -> ClassificationResult<&'static ClassBand> {
    check_range(cgpa)?;
    CLASS_BANDS
        .iter()
        .find(|band| cgpa >= band.lower_bound())
        .ok_or(ClassificationError::OutOfRange(cgpa))
}

/// Whether a CGPA clears the Third Class floor
pub fn is_passing_grade(cgpa: f64) -> bool {
    cgpa >= CLASS_BANDS[3].lower_bound()
}

/// Gap between a CGPA and the floor of the next band up; zero in the top band
pub fn points_to_next_level(cgpa: f64) -> ClassificationResult<f64> {
    let band = classify(cgpa)?;
    let position = CLASS_BANDS
        .iter()
        .position(|candidate| candidate.class == band.class)
        .unwrap_or(0);

    if position == 0 {
        return Ok(0.0);
    }

    let next = &CLASS_BANDS[position - 1];
    Ok(round2(next.lower_bound() - cgpa))
}

pub(crate) fn check_range(cgpa: f64) -> ClassificationResult<()> {
    if cgpa.is_nan() || !(Student::MIN_CGPA..=Student::MAX_CGPA).contains(&cgpa) {
        return Err(ClassificationError::OutOfRange(cgpa));
    }
    Ok(())
}
