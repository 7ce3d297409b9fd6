//! Descriptions of every shot option and a glossary of golf terms

pub use crate::core::models::Field;
use crate::core::models::{
    Club, DistanceUnit, GreenSpeed, Inclination, LateralDirection, Lie, Mode, PinPosition,
    PracticeType, ShotShape, Wind,
};

/// An option enum whose every variant carries a short description.
///
/// Implementations match exhaustively, so adding a variant without a
/// description does not compile.
pub trait OptionDescription: Copy + 'static {
    /// Field the options belong to
    const FIELD: Field;

    /// Every option of the field
    fn options() -> &'static [Self];

    /// One-sentence explanation of the option
    fn description(&self) -> &'static str;

    /// Display label of the option
    fn label(&self) -> &'static str;
}

macro_rules! describe_options {
    ($ty:ident) => {
        const FIELD: Field = $ty::FIELD;

        fn options() -> &'static [Self] {
            $ty::ALL
        }

        fn label(&self) -> &'static str {
            $ty::label(*self)
        }
    };
}

impl OptionDescription for Club {
    describe_options!(Club);

    fn description(&self) -> &'static str {
        match self {
            Self::Driver => "Longest club in the bag, used for maximum distance off the tee.",
            Self::ThreeWood | Self::FiveWood => {
                "Fairway wood for long shots off the deck or a tee when the driver is too much club."
            }
            Self::ThreeIron | Self::FourIron | Self::FiveIron => {
                "Long iron for long approaches; lower numbers fly further and lower."
            }
            Self::SixIron | Self::SevenIron => "Mid iron for approach shots into the green.",
            Self::EightIron | Self::NineIron => {
                "Short iron for higher, shorter approaches that stop quickly."
            }
            Self::PitchingWedge => "Short, lofted iron for approaches and chips around the green.",
            Self::SandWedge => "High-loft wedge built for bunker shots and high chips.",
            Self::Putter => "Flat-faced club for rolling the ball into the hole on the green.",
        }
    }
}

impl OptionDescription for LateralDirection {
    describe_options!(LateralDirection);

    fn description(&self) -> &'static str {
        match self {
            Self::Left => "Ball finished left of the target line.",
            Self::Center => "Ball finished on the target line.",
            Self::Right => "Ball finished right of the target line.",
        }
    }
}

impl OptionDescription for Inclination {
    describe_options!(Inclination);

    fn description(&self) -> &'static str {
        match self {
            Self::Low => "Ball flew lower than a normal trajectory for the club.",
            Self::Center => "Ball flew on a normal trajectory for the club.",
            Self::High => "Ball flew higher than a normal trajectory for the club.",
        }
    }
}

impl OptionDescription for ShotShape {
    describe_options!(ShotShape);

    fn description(&self) -> &'static str {
        match self {
            Self::Straight => "Ball flies at the target without curving.",
            Self::Fade => "Ball curves gently left to right for a right-handed player.",
            Self::Draw => "Ball curves gently right to left for a right-handed player.",
            Self::Slice => "Ball curves sharply left to right, usually unintended.",
            Self::Hook => "Ball curves sharply right to left, usually unintended.",
        }
    }
}

impl OptionDescription for Lie {
    describe_options!(Lie);

    fn description(&self) -> &'static str {
        match self {
            Self::Fairway => "Short, well-kept grass between tee and green.",
            Self::Rough => "Longer grass bordering the fairway that grabs the club.",
            Self::Sand => "Bunker; needs a splash technique to get out.",
            Self::TeeBox => "Starting area of a hole; the ball may be teed up.",
        }
    }
}

impl OptionDescription for Wind {
    describe_options!(Wind);

    fn description(&self) -> &'static str {
        match self {
            Self::None => "Calm conditions.",
            Self::LightHead => "Light wind blowing against the shot.",
            Self::StrongHead => "Strong wind blowing against the shot.",
            Self::LightTail => "Light wind blowing with the shot.",
            Self::StrongTail => "Strong wind blowing with the shot.",
            Self::CrossLeft => "Wind blowing across the shot from the left.",
            Self::CrossRight => "Wind blowing across the shot from the right.",
        }
    }
}

impl OptionDescription for DistanceUnit {
    describe_options!(DistanceUnit);

    fn description(&self) -> &'static str {
        match self {
            Self::Yards => "Yards; every distance is stored in this unit.",
            Self::Meters => "Meters; converted to yards when the shot is saved.",
        }
    }
}

impl OptionDescription for Mode {
    describe_options!(Mode);

    fn description(&self) -> &'static str {
        match self {
            Self::DrivingRange => "Practice at the range, with an optional target distance.",
            Self::GolfCourse => "Play on a course, recording hole, par and score.",
        }
    }
}

impl OptionDescription for PinPosition {
    describe_options!(PinPosition);

    fn description(&self) -> &'static str {
        match self {
            Self::Front => "Hole cut near the front edge of the green.",
            Self::Middle => "Hole cut in the middle of the green.",
            Self::Back => "Hole cut near the back edge of the green.",
        }
    }
}

impl OptionDescription for GreenSpeed {
    describe_options!(GreenSpeed);

    fn description(&self) -> &'static str {
        match self {
            Self::Slow => "Putts need a firm stroke to reach the hole.",
            Self::Medium => "Typical green speed.",
            Self::Fast => "Putts run out well past where they would on an average green.",
        }
    }
}

impl OptionDescription for PracticeType {
    describe_options!(PracticeType);

    fn description(&self) -> &'static str {
        match self {
            Self::FreePractice => "Hitting balls without a particular goal.",
            Self::TargetPractice => "Aiming every shot at a chosen flag or marker.",
            Self::DistanceControl => "Hitting the same club to fixed distances.",
            Self::ShotShaping => "Curving the ball on purpose, fades and draws.",
            Self::WarmUp => "Loosening up before a round.",
        }
    }
}

/// Option label and description pairs for `T`.
#[must_use]
pub fn entries<T: OptionDescription>() -> Vec<(&'static str, &'static str)> {
    T::options()
        .iter()
        .map(|option| (option.label(), option.description()))
        .collect()
}

/// Label and description of every option of `field`.
#[must_use]
pub fn field_entries(field: Field) -> Vec<(&'static str, &'static str)> {
    match field {
        Field::Club => entries::<Club>(),
        Field::LateralDirection => entries::<LateralDirection>(),
        Field::Inclination => entries::<Inclination>(),
        Field::ShotShape => entries::<ShotShape>(),
        Field::Lie => entries::<Lie>(),
        Field::Wind => entries::<Wind>(),
        Field::DistanceUnit => entries::<DistanceUnit>(),
        Field::Mode => entries::<Mode>(),
        Field::PinPosition => entries::<PinPosition>(),
        Field::GreenSpeed => entries::<GreenSpeed>(),
        Field::PracticeType => entries::<PracticeType>(),
    }
}

fn lookup<T>(text: &str) -> Option<&'static str>
where
    T: OptionDescription + std::str::FromStr,
{
    text.parse::<T>().ok().map(|option| option.description())
}

/// Describe an option given as text, e.g. `describe(Field::Wind, "cross left")`.
#[must_use]
pub fn describe(field: Field, option: &str) -> Option<&'static str> {
    match field {
        Field::Club => lookup::<Club>(option),
        Field::LateralDirection => lookup::<LateralDirection>(option),
        Field::Inclination => lookup::<Inclination>(option),
        Field::ShotShape => lookup::<ShotShape>(option),
        Field::Lie => lookup::<Lie>(option),
        Field::Wind => lookup::<Wind>(option),
        Field::DistanceUnit => lookup::<DistanceUnit>(option),
        Field::Mode => lookup::<Mode>(option),
        Field::PinPosition => lookup::<PinPosition>(option),
        Field::GreenSpeed => lookup::<GreenSpeed>(option),
        Field::PracticeType => lookup::<PracticeType>(option),
    }
}

/// A golf term and its definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    /// Term
    pub term: &'static str,
    /// Definition
    pub definition: &'static str,
}

const fn term(term: &'static str, definition: &'static str) -> Term {
    Term { term, definition }
}

/// Golf terms used throughout the app
pub const GLOSSARY: &[Term] = &[
    term(
        "Driver",
        "The longest club, used for maximum distance off the tee.",
    ),
    term(
        "Fairway Woods (3W, 5W)",
        "Long clubs for shots off the fairway or the tee when a driver is too much.",
    ),
    term(
        "Irons (3-9)",
        "Numbered clubs for approach shots. Lower numbers hit the ball further.",
    ),
    term(
        "Pitching Wedge (PW)",
        "Short iron for approaches and chips around the green.",
    ),
    term(
        "Sand Wedge (SW)",
        "High-loft club designed for bunkers and high chips.",
    ),
    term(
        "Putter",
        "Club for rolling the ball into the hole on the green.",
    ),
    term("Fairway", "Short grass between the tee and the green."),
    term(
        "Rough",
        "Longer grass along the fairway; harder to play from.",
    ),
    term(
        "Sand Bunker",
        "Sand-filled hazard that needs its own technique.",
    ),
    term(
        "Tee Box",
        "Area where the first shot of each hole is played.",
    ),
    term(
        "Wind",
        "Head wind blows against the shot, tail wind with it, cross wind from the side.",
    ),
    term(
        "Lateral Direction",
        "Where the ball finished horizontally: left of, on, or right of the target line.",
    ),
    term(
        "Inclination",
        "Height of the ball flight: low, normal or high for the club.",
    ),
    term("Straight", "Ball flies at the target without curving."),
    term(
        "Fade",
        "Gentle left-to-right curve for a right-handed player.",
    ),
    term(
        "Draw",
        "Gentle right-to-left curve for a right-handed player.",
    ),
    term("Slice", "Sharp left-to-right curve, usually unintended."),
    term("Hook", "Sharp right-to-left curve, usually unintended."),
    term(
        "Carry Distance",
        "How far the ball travels in the air before it first lands.",
    ),
    term(
        "Total Distance",
        "Carry plus roll: where the ball finally comes to rest.",
    ),
    term(
        "Accuracy",
        "Share of shots whose actual shape matched the intended one.",
    ),
    term(
        "Expectation vs Actual",
        "The shape you planned compared with the shape the ball really took.",
    ),
    term("Session", "All shots recorded on the same calendar day."),
    term(
        "Tip",
        "Record every shot, good or bad. Statistics only help when the sample is honest.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_option_has_a_description() {
        for field in Field::ALL {
            let entries = field_entries(*field);
            assert!(!entries.is_empty(), "{field} has no options");
            for (label, description) in entries {
                assert!(!description.is_empty(), "{field} option {label} is undescribed");
                assert_eq!(describe(*field, label), Some(description));
            }
        }
    }

    #[test]
    fn describe_parses_loosely() {
        assert_eq!(
            describe(Field::Wind, "cross left"),
            Some(Wind::CrossLeft.description())
        );
        assert_eq!(describe(Field::Club, "hybrid"), None);
    }

    #[test]
    fn glossary_terms_are_unique() {
        let mut names: Vec<&str> = GLOSSARY.iter().map(|t| t.term).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), GLOSSARY.len());
        assert!(GLOSSARY.iter().all(|t| !t.definition.is_empty()));
    }
}
