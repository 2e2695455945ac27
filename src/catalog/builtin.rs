//! Checklist data compiled into the crate.
//!
//! Entries are `(id, score)` pairs per category; localization keys are derived
//! with `FengShuiItem::with_standard_keys`. The catalog is built on first access
//! and shared for the life of the process.

use crate::catalog::{Catalog, Category, FengShuiItem};
use std::sync::LazyLock;

type Entries = &'static [(&'static str, i32)];

const BUILTIN: &[(Category, Entries)] = &[
    (
        Category::Door,
        &[
            ("doorSouth", 3),
            ("doorEast", 2),
            ("doorMintang", 3),
            ("doorUnluckyDirection", -2),
            ("doorLongCorridor", -3),
            ("doorElevator", -2),
            ("doorSeeRed", 2),
            ("doorSeeGreen", 2),
            ("doorSeePainting", 2),
            ("doorSeeStove", -3),
            ("doorSeeToilet", -3),
            ("doorSeeMirror", -2),
        ],
    ),
    (
        Category::Entryway,
        &[
            ("entryBrightClean", 3),
            ("entryHighCeiling", 2),
            ("entryTransparent", 2),
            ("entryDarkMessy", -3),
            ("entrySharpCornerAttack", -2),
            ("entryLowCeiling", -2),
        ],
    ),
    (
        Category::LivingRoom,
        &[
            ("livingSofaWall", 3),
            ("livingNoBeam", 3),
            ("livingSofaCurve", 2),
            ("livingSofaBackWater", -3),
            ("livingSofaFaceDoor", -2),
            ("livingDirectLight", -2),
            ("livingSquareShape", 3),
            ("livingSharpCornerFixed", 2),
            ("livingIsolatedColumn", -2),
            ("livingSharpCornerUnfixed", -3),
        ],
    ),
    (
        Category::Bedroom,
        &[
            ("bedHeadWall", 3),
            ("bedNorthSouth", 3),
            ("bedChildEast", 2),
            ("bedBeamPress", -3),
            ("bedFaceWest", -2),
            ("bedFaceMirror", -3),
        ],
    ),
    (
        Category::Study,
        &[
            ("studyDeskWall", 3),
            ("studyFacingWindow", 2),
            ("studyPlant", 2),
            ("studyDoorKitchenToilet", -3),
            ("studyWallToilet", -2),
        ],
    ),
    (
        Category::Kitchen,
        &[
            ("kitchenEast", 3),
            ("kitchenStoveWall", 2),
            ("kitchenSouth", -3),
            ("kitchenStoveBadFacing", -3),
            ("kitchenStoveNoBack", -2),
        ],
    ),
    (
        Category::DiningRoom,
        &[
            ("diningRoundSquare", 3),
            ("diningSoftLight", 2),
            ("diningSoftColor", 2),
            ("diningSharpTable", -3),
            ("diningDoorCollision", -2),
        ],
    ),
    (
        Category::Bathroom,
        &[
            ("toiletGoodPosition", 3),
            ("toiletDryVent", 3),
            ("toiletFaceDoor", -3),
            ("toiletSameDoorKitchen", -3),
        ],
    ),
    (
        Category::Overall,
        &[
            ("houseBright", 3),
            ("houseVentilation", 3),
            ("houseSmoothLayout", 2),
            ("houseDarkDamp", -3),
            ("houseNoAirflow", -3),
        ],
    ),
];

static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::assemble(builtin_groups()));

/// The built-in catalog.
pub fn builtin() -> &'static Catalog {
    &BUILTIN_CATALOG
}

/// Built-in data as ordered category groups.
pub fn builtin_groups() -> Vec<(Category, Vec<FengShuiItem>)> {
    BUILTIN
        .iter()
        .map(|(category, entries)| {
            let items = entries
                .iter()
                .map(|(id, score)| FengShuiItem::with_standard_keys(*category, id, *score))
                .collect();
            (*category, items)
        })
        .collect()
}
