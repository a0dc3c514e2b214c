// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sport categories reported by the health-data source, with their display
//! names and icons.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Closed set of workout activity types.
///
/// Serialized as camelCase names (`"running"`, `"americanFootball"`, ...).
/// Any name not listed here deserializes to [`ActivityType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityType {
    AmericanFootball,
    Archery,
    AustralianFootball,
    Badminton,
    Baseball,
    Basketball,
    Bowling,
    Boxing,
    Climbing,
    CrossTraining,
    Curling,
    Cycling,
    Dance,
    DanceInspiredTraining,
    Elliptical,
    EquestrianSports,
    Fencing,
    Fishing,
    FunctionalStrengthTraining,
    Golf,
    Gymnastics,
    Handball,
    Hiking,
    Hockey,
    Hunting,
    Lacrosse,
    MartialArts,
    MindAndBody,
    MixedMetabolicCardioTraining,
    PaddleSports,
    Play,
    PreparationAndRecovery,
    Racquetball,
    Rowing,
    Rugby,
    Running,
    Sailing,
    SkatingSports,
    SnowSports,
    Soccer,
    Softball,
    Squash,
    StairClimbing,
    SurfingSports,
    Swimming,
    TableTennis,
    Tennis,
    TrackAndField,
    TraditionalStrengthTraining,
    Volleyball,
    Walking,
    WaterFitness,
    WaterPolo,
    WaterSports,
    Wrestling,
    Yoga,
    Barre,
    CoreTraining,
    CrossCountrySkiing,
    DownhillSkiing,
    Flexibility,
    HighIntensityIntervalTraining,
    JumpRope,
    Kickboxing,
    Pilates,
    Snowboarding,
    Stairs,
    StepTraining,
    WheelchairWalkPace,
    WheelchairRunPace,
    TaiChi,
    MixedCardio,
    HandCycling,
    DiscSports,
    FitnessGaming,
    /// Catch-all for categories without a dedicated entry.
    #[serde(other)]
    Other,
}

impl ActivityType {
    /// Human-readable English name.
    pub fn name(self) -> &'static str {
        match self {
            ActivityType::AmericanFootball => "American Football",
            ActivityType::Archery => "Archery",
            ActivityType::AustralianFootball => "Australian Football",
            ActivityType::Badminton => "Badminton",
            ActivityType::Baseball => "Baseball",
            ActivityType::Basketball => "Basketball",
            ActivityType::Bowling => "Bowling",
            ActivityType::Boxing => "Boxing",
            ActivityType::Climbing => "Climbing",
            ActivityType::CrossTraining => "Cross Training",
            ActivityType::Curling => "Curling",
            ActivityType::Cycling => "Cycling",
            ActivityType::Dance => "Dance",
            ActivityType::DanceInspiredTraining => "Dance Inspired Training",
            ActivityType::Elliptical => "Elliptical",
            ActivityType::EquestrianSports => "Equestrian Sports",
            ActivityType::Fencing => "Fencing",
            ActivityType::Fishing => "Fishing",
            ActivityType::FunctionalStrengthTraining => "Functional Strength Training",
            ActivityType::Golf => "Golf",
            ActivityType::Gymnastics => "Gymnastics",
            ActivityType::Handball => "Handball",
            ActivityType::Hiking => "Hiking",
            ActivityType::Hockey => "Hockey",
            ActivityType::Hunting => "Hunting",
            ActivityType::Lacrosse => "Lacrosse",
            ActivityType::MartialArts => "Martial Arts",
            ActivityType::MindAndBody => "Mind and Body",
            ActivityType::MixedMetabolicCardioTraining => "Mixed Metabolic Cardio Training",
            ActivityType::PaddleSports => "Paddle Sports",
            ActivityType::Play => "Play",
            ActivityType::PreparationAndRecovery => "Preparation and Recovery",
            ActivityType::Racquetball => "Racquetball",
            ActivityType::Rowing => "Rowing",
            ActivityType::Rugby => "Rugby",
            ActivityType::Running => "Running",
            ActivityType::Sailing => "Sailing",
            ActivityType::SkatingSports => "Skating Sports",
            ActivityType::SnowSports => "Snow Sports",
            ActivityType::Soccer => "Soccer",
            ActivityType::Softball => "Softball",
            ActivityType::Squash => "Squash",
            ActivityType::StairClimbing => "Stair Climbing",
            ActivityType::SurfingSports => "Surfing Sports",
            ActivityType::Swimming => "Swimming",
            ActivityType::TableTennis => "Table Tennis",
            ActivityType::Tennis => "Tennis",
            ActivityType::TrackAndField => "Track and Field",
            ActivityType::TraditionalStrengthTraining => "Traditional Strength Training",
            ActivityType::Volleyball => "Volleyball",
            ActivityType::Walking => "Walking",
            ActivityType::WaterFitness => "Water Fitness",
            ActivityType::WaterPolo => "Water Polo",
            ActivityType::WaterSports => "Water Sports",
            ActivityType::Wrestling => "Wrestling",
            ActivityType::Yoga => "Yoga",
            ActivityType::Barre => "Barre",
            ActivityType::CoreTraining => "Core Training",
            ActivityType::CrossCountrySkiing => "Cross Country Skiing",
            ActivityType::DownhillSkiing => "Downhill Skiing",
            ActivityType::Flexibility => "Flexibility",
            ActivityType::HighIntensityIntervalTraining => "High Intensity Interval Training",
            ActivityType::JumpRope => "Jump Rope",
            ActivityType::Kickboxing => "Kickboxing",
            ActivityType::Pilates => "Pilates",
            ActivityType::Snowboarding => "Snowboarding",
            ActivityType::Stairs => "Stairs",
            ActivityType::StepTraining => "Step Training",
            ActivityType::WheelchairWalkPace => "Wheelchair Walk Pace",
            ActivityType::WheelchairRunPace => "Wheelchair Run Pace",
            ActivityType::TaiChi => "Tai Chi",
            ActivityType::MixedCardio => "Mixed Cardio",
            ActivityType::HandCycling => "Hand Cycling",
            ActivityType::DiscSports => "Disc Sports",
            ActivityType::FitnessGaming => "Fitness Gaming",
            ActivityType::Other => "Other",
        }
    }

    /// Icon used for rows of this activity type.
    pub fn icon(self) -> IconKey {
        match self {
            ActivityType::Cycling => IconKey::Cycle,
            ActivityType::Running => IconKey::Run,
            ActivityType::Walking => IconKey::Walk,
            ActivityType::Swimming => IconKey::Swim,
            ActivityType::Tennis => IconKey::Tennis,
            _ => IconKey::Strength,
        }
    }
}

/// Icon asset key handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum IconKey {
    #[serde(rename = "figure.outdoor.cycle")]
    Cycle,
    #[serde(rename = "figure.run")]
    Run,
    #[serde(rename = "figure.walk")]
    Walk,
    #[serde(rename = "figure.pool.swim")]
    Swim,
    #[serde(rename = "figure.tennis")]
    Tennis,
    #[serde(rename = "figure.strengthtraining.functional")]
    Strength,
}
