//! Option-valued shot fields
//!
//! Every dropdown of the record form is a closed enum here. The label of each
//! variant is both what the user sees and what is persisted in the store.
//! Parsing is case-insensitive and ignores spaces, dashes and underscores, so
//! `"7 iron"`, `"7-Iron"` and `"7Iron"` all resolve to [`Club::SevenIron`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Conversion factor from meters to yards.
pub const METERS_TO_YARDS: f64 = 1.09361;

/// Option-valued fields of a shot record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Club used
    Club,
    /// Horizontal ball flight
    LateralDirection,
    /// Vertical ball flight
    Inclination,
    /// Expected or actual shot shape
    ShotShape,
    /// Ball lie
    Lie,
    /// Wind conditions
    Wind,
    /// Unit a distance was entered in
    DistanceUnit,
    /// Range or course
    Mode,
    /// Pin placement on the green
    PinPosition,
    /// Green speed
    GreenSpeed,
    /// Kind of range practice
    PracticeType,
}

impl Field {
    /// Every field, in the order the glossary lists them.
    pub const ALL: &'static [Self] = &[
        Self::Club,
        Self::Lie,
        Self::Wind,
        Self::LateralDirection,
        Self::Inclination,
        Self::ShotShape,
        Self::DistanceUnit,
        Self::Mode,
        Self::PinPosition,
        Self::GreenSpeed,
        Self::PracticeType,
    ];

    /// Human-readable field name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Club => "Club",
            Self::LateralDirection => "Lateral Direction",
            Self::Inclination => "Inclination",
            Self::ShotShape => "Shot Shape",
            Self::Lie => "Lie",
            Self::Wind => "Wind",
            Self::DistanceUnit => "Distance Unit",
            Self::Mode => "Mode",
            Self::PinPosition => "Pin Position",
            Self::GreenSpeed => "Green Speed",
            Self::PracticeType => "Practice Type",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|field| normalize(field.label()) == wanted)
            .or(match wanted.as_str() {
                "direction" | "lateral" => Some(Self::LateralDirection),
                "shape" | "expectation" | "actual" => Some(Self::ShotShape),
                "unit" => Some(Self::DistanceUnit),
                "pin" => Some(Self::PinPosition),
                "practice" => Some(Self::PracticeType),
                _ => None,
            })
            .ok_or_else(|| format!("Unknown field: '{s}'"))
    }
}

/// A value that is not one of a field's options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} option: '{value}'")]
pub struct UnknownOption {
    /// Field the value was meant for
    pub field: Field,
    /// Rejected input
    pub value: String,
}

/// Lowercase and drop separators so labels compare loosely.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! shot_option {
    (
        $(#[$meta:meta])*
        $name:ident => $field:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every option, in the order the record form offers them.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Field this option belongs to.
            pub const FIELD: Field = Field::$field;

            /// Display label, also the persisted value.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                $(
                    if wanted == normalize($label) $(|| wanted == normalize($alias))* {
                        return Ok(Self::$variant);
                    }
                )+
                Err(UnknownOption {
                    field: Self::FIELD,
                    value: s.to_string(),
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = UnknownOption;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.label()
            }
        }
    };
}

shot_option! {
    /// Club used for the shot
    Club => Club {
        #[default]
        /// Driver
        Driver = "Driver" | "1 Wood" | "D",
        /// 3 wood
        ThreeWood = "3 Wood" | "3W",
        /// 5 wood
        FiveWood = "5 Wood" | "5W",
        /// 3 iron
        ThreeIron = "3 Iron" | "3I",
        /// 4 iron
        FourIron = "4 Iron" | "4I",
        /// 5 iron
        FiveIron = "5 Iron" | "5I",
        /// 6 iron
        SixIron = "6 Iron" | "6I",
        /// 7 iron
        SevenIron = "7 Iron" | "7I",
        /// 8 iron
        EightIron = "8 Iron" | "8I",
        /// 9 iron
        NineIron = "9 Iron" | "9I",
        /// Pitching wedge
        PitchingWedge = "PW" | "Pitching Wedge",
        /// Sand wedge
        SandWedge = "SW" | "Sand Wedge",
        /// Putter
        Putter = "Putter",
    }
}

shot_option! {
    /// Horizontal ball flight relative to the target
    LateralDirection => LateralDirection {
        /// Missed left
        Left = "Left" | "L",
        #[default]
        /// On line
        Center = "Center" | "Centre" | "C",
        /// Missed right
        Right = "Right" | "R",
    }
}

shot_option! {
    /// Vertical ball flight relative to a normal trajectory
    Inclination => Inclination {
        /// Stayed low
        Low = "Low",
        #[default]
        /// Normal trajectory
        Center = "Center" | "Centre" | "Normal",
        /// Went high
        High = "High",
    }
}

shot_option! {
    /// Curve of the ball flight
    ShotShape => ShotShape {
        #[default]
        /// No curve
        Straight = "Straight",
        /// Gentle curve away from the player
        Fade = "Fade",
        /// Gentle curve toward the player
        Draw = "Draw",
        /// Sharp curve away from the player
        Slice = "Slice",
        /// Sharp curve toward the player
        Hook = "Hook",
    }
}

shot_option! {
    /// Where the ball was played from
    Lie => Lie {
        #[default]
        /// Fairway grass
        Fairway = "Fairway",
        /// Long grass
        Rough = "Rough",
        /// Bunker
        Sand = "Sand" | "Bunker" | "Sand Bunker",
        /// Tee box
        TeeBox = "Tee Box" | "Tee",
    }
}

shot_option! {
    /// Wind conditions at the time of the shot
    Wind => Wind {
        #[default]
        /// Calm
        None = "None" | "Calm",
        /// Light headwind
        LightHead = "Light Head",
        /// Strong headwind
        StrongHead = "Strong Head",
        /// Light tailwind
        LightTail = "Light Tail",
        /// Strong tailwind
        StrongTail = "Strong Tail",
        /// Crosswind from the left
        CrossLeft = "Cross Left",
        /// Crosswind from the right
        CrossRight = "Cross Right",
    }
}

shot_option! {
    /// Unit a distance was entered in
    DistanceUnit => DistanceUnit {
        #[default]
        /// Yards (canonical storage unit)
        Yards = "Yards" | "yd" | "yds",
        /// Meters
        Meters = "Meters" | "m" | "Metres",
    }
}

impl DistanceUnit {
    /// Convert a value in this unit to yards.
    #[must_use]
    pub fn to_yards(self, value: f64) -> f64 {
        match self {
            Self::Yards => value,
            Self::Meters => value * METERS_TO_YARDS,
        }
    }
}

shot_option! {
    /// Whether a shot was hit at the range or on the course
    Mode => Mode {
        #[default]
        /// Driving range practice
        DrivingRange = "driving_range" | "range",
        /// On-course play
        GolfCourse = "golf_course" | "course",
    }
}

shot_option! {
    /// Pin placement on the green
    PinPosition => PinPosition {
        /// Front of the green
        Front = "Front",
        #[default]
        /// Middle of the green
        Middle = "Middle" | "Center",
        /// Back of the green
        Back = "Back",
    }
}

shot_option! {
    /// Green speed
    GreenSpeed => GreenSpeed {
        /// Slow greens
        Slow = "Slow",
        #[default]
        /// Medium greens
        Medium = "Medium",
        /// Fast greens
        Fast = "Fast",
    }
}

shot_option! {
    /// Kind of range practice
    PracticeType => PracticeType {
        #[default]
        /// Unstructured practice
        FreePractice = "Free Practice" | "Free",
        /// Aiming at a specific target
        TargetPractice = "Target Practice" | "Target",
        /// Hitting fixed distances
        DistanceControl = "Distance Control" | "Distance",
        /// Working the ball on purpose
        ShotShaping = "Shot Shaping" | "Shaping",
        /// Loosening up before a round
        WarmUp = "Warm Up",
    }
}
