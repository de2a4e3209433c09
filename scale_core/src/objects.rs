//! The draggable object registry: kinds, sub-type tags, and nominal masses.

use crate::units::quantize_to_cg;

/// Content tag carried by a specimen box; resolved to a mass at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecimenTag {
    Rabbit,
    Cat,
    Powder,
    /// No recognizable tag; contributes zero mass.
    Unlabeled,
}

impl SpecimenTag {
    /// Parse a tag string as found on the visual surface; anything
    /// unrecognized maps to `Unlabeled` rather than failing.
    pub fn parse(s: &str) -> Self {
        match s {
            "rabbit" => Self::Rabbit,
            "cat" => Self::Cat,
            "powder" => Self::Powder,
            _ => Self::Unlabeled,
        }
    }
}

/// Kind of a draggable object on the bench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// 25 g plain weight (nominal; see `MassTable`).
    WeightSmall,
    /// 50 g plain weight.
    WeightMedium,
    /// 100 g plain weight.
    WeightLarge,
    /// Variable-content box; mass depends on the attached tag.
    Specimen(SpecimenTag),
    PetriDish,
    WeighingPaper,
}

impl ObjectKind {
    /// Containers satisfy the loose-powder warning.
    pub fn is_container(self) -> bool {
        matches!(self, Self::PetriDish | Self::WeighingPaper)
    }

    /// Loose substance that should rest on a container.
    pub fn is_powder(self) -> bool {
        matches!(self, Self::Specimen(SpecimenTag::Powder))
    }
}

/// Opaque handle for a registered object. Handles are assigned in
/// registration order and are only valid for the balance that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Nominal object masses in centigrams.
#[derive(Debug, Clone)]
pub struct MassTable {
    pub weight_small_cg: i32,
    pub weight_medium_cg: i32,
    pub weight_large_cg: i32,
    pub rabbit_cg: i32,
    pub cat_cg: i32,
    pub powder_cg: i32,
    pub petri_dish_cg: i32,
    pub weighing_paper_cg: i32,
}

impl Default for MassTable {
    fn default() -> Self {
        Self {
            weight_small_cg: 2500,
            weight_medium_cg: 5000,
            weight_large_cg: 10000,
            rabbit_cg: 7550,
            cat_cg: 12300,
            powder_cg: 5080,
            petri_dish_cg: 1520,
            weighing_paper_cg: 30,
        }
    }
}

impl MassTable {
    /// Resolve the nominal mass of an object kind. Unlabeled specimens
    /// contribute zero rather than failing.
    pub fn mass_cg(&self, kind: ObjectKind) -> i32 {
        match kind {
            ObjectKind::WeightSmall => self.weight_small_cg,
            ObjectKind::WeightMedium => self.weight_medium_cg,
            ObjectKind::WeightLarge => self.weight_large_cg,
            ObjectKind::Specimen(SpecimenTag::Rabbit) => self.rabbit_cg,
            ObjectKind::Specimen(SpecimenTag::Cat) => self.cat_cg,
            ObjectKind::Specimen(SpecimenTag::Powder) => self.powder_cg,
            ObjectKind::Specimen(SpecimenTag::Unlabeled) => 0,
            ObjectKind::PetriDish => self.petri_dish_cg,
            ObjectKind::WeighingPaper => self.weighing_paper_cg,
        }
    }
}

impl From<&scale_config::Masses> for MassTable {
    fn from(m: &scale_config::Masses) -> Self {
        Self {
            weight_small_cg: quantize_to_cg(m.weight_small_g),
            weight_medium_cg: quantize_to_cg(m.weight_medium_g),
            weight_large_cg: quantize_to_cg(m.weight_large_g),
            rabbit_cg: quantize_to_cg(m.rabbit_g),
            cat_cg: quantize_to_cg(m.cat_g),
            powder_cg: quantize_to_cg(m.powder_g),
            petri_dish_cg: quantize_to_cg(m.petri_dish_g),
            weighing_paper_cg: quantize_to_cg(m.weighing_paper_g),
        }
    }
}
