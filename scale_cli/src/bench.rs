//! Standard bench layout: a pan plus a shelf of named draggable objects.
//!
//! Scripts address objects by name; handles are resolved through the
//! registration table built here.

use eyre::Result;
use scale_core::{Balance, ObjectId, ObjectKind, Rect, SpecimenTag};
use scale_traits::Noise;
use scale_traits::clock::test_clock::TestClock;

/// Pan rect used for scripted sessions, viewport coordinates.
fn pan_rect() -> Rect {
    Rect::new(260.0, 300.0, 200.0, 90.0)
}

/// Named objects in shelf order, with their footprint sizes.
const SHELF: [(&str, ObjectKind, f32, f32); 8] = [
    ("weight-25", ObjectKind::WeightSmall, 50.0, 50.0),
    ("weight-50", ObjectKind::WeightMedium, 60.0, 60.0),
    ("weight-100", ObjectKind::WeightLarge, 70.0, 70.0),
    ("rabbit", ObjectKind::Specimen(SpecimenTag::Rabbit), 90.0, 70.0),
    ("cat", ObjectKind::Specimen(SpecimenTag::Cat), 100.0, 80.0),
    ("powder", ObjectKind::Specimen(SpecimenTag::Powder), 50.0, 40.0),
    ("dish", ObjectKind::PetriDish, 80.0, 24.0),
    ("paper", ObjectKind::WeighingPaper, 70.0, 70.0),
];

const SHELF_Y: f32 = 40.0;
const SHELF_GAP: f32 = 30.0;

pub struct Bench {
    pub balance: Balance,
    names: Vec<(&'static str, ObjectId)>,
}

impl Bench {
    /// Build the standard bench from a validated config, a test clock, and
    /// the chosen drift source.
    pub fn build(
        cfg: &scale_config::Config,
        clock: TestClock,
        noise: Box<dyn Noise>,
    ) -> Result<Self> {
        let mut builder = Balance::builder()
            .with_config(cfg)
            .with_pan_rect(pan_rect())
            .with_clock(Box::new(clock))
            .with_noise(noise);

        let mut x = SHELF_GAP;
        for (_, kind, w, h) in SHELF {
            builder = builder.with_object(kind, Rect::new(x, SHELF_Y, w, h));
            x += w + SHELF_GAP;
        }
        let balance = builder.try_build()?;

        let names = SHELF
            .iter()
            .zip(balance.objects())
            .map(|((name, ..), (id, _))| (*name, id))
            .collect();
        Ok(Self { balance, names })
    }

    pub fn object(&self, name: &str) -> Option<ObjectId> {
        self.names
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, id)| *id)
    }

    pub fn object_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().map(|(n, _)| *n)
    }
}
