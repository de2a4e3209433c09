use scale_core::{Balance, ObjectId, ObjectKind, Point, PointerInput, Readout, Rect, SpecimenTag};
use scale_traits::FixedNoise;

/// Standard bench: pan at (100, 200) sized 100x50, objects parked well off
/// the pan. Registration order: small/medium/large weight, powder box,
/// petri dish, weighing paper, unlabeled box.
fn bench(drift_g: f32) -> (Balance, Vec<ObjectId>) {
    let balance = Balance::builder()
        .with_pan_rect(Rect::new(100.0, 200.0, 100.0, 50.0))
        .with_object(ObjectKind::WeightSmall, Rect::new(0.0, 0.0, 20.0, 20.0))
        .with_object(ObjectKind::WeightMedium, Rect::new(30.0, 0.0, 20.0, 20.0))
        .with_object(ObjectKind::WeightLarge, Rect::new(60.0, 0.0, 20.0, 20.0))
        .with_object(
            ObjectKind::Specimen(SpecimenTag::Powder),
            Rect::new(90.0, 0.0, 20.0, 20.0),
        )
        .with_object(ObjectKind::PetriDish, Rect::new(120.0, 0.0, 30.0, 10.0))
        .with_object(ObjectKind::WeighingPaper, Rect::new(160.0, 0.0, 20.0, 20.0))
        .with_object(
            ObjectKind::Specimen(SpecimenTag::Unlabeled),
            Rect::new(190.0, 0.0, 20.0, 20.0),
        )
        .with_noise(Box::new(FixedNoise(drift_g)))
        .try_build()
        .expect("build balance");
    let ids = balance.objects().map(|(id, _)| id).collect();
    (balance, ids)
}

/// Drag an object so its center lands on the given point, then release.
fn drag_to(balance: &mut Balance, id: ObjectId, target_center: Point) {
    let r = balance.object_rect(id).expect("object rect");
    let grab = r.center();
    balance.pointer_down(id, &PointerInput::Mouse(grab));
    balance.pointer_move(&PointerInput::Mouse(target_center));
    balance.pointer_up(&PointerInput::Mouse(target_center));
}

fn drop_on_pan(balance: &mut Balance, id: ObjectId) {
    drag_to(balance, id, Point::new(150.0, 225.0));
}

fn drag_off_pan(balance: &mut Balance, id: ObjectId) {
    drag_to(balance, id, Point::new(10.0, 10.0));
}

#[test]
fn powered_off_display_is_blank() {
    let (balance, _) = bench(0.0);
    assert_eq!(balance.readout(), Readout::Blank);
    assert_eq!(balance.readout().text(), "");
}

#[test]
fn measurement_scenario_weigh_zero_remove() {
    // Empty pan, power on -> 0.0 g. Drop a 50 g weight -> 50.0 g.
    // Zero -> 0.0 g. Drag the weight off -> -50.0 g.
    let (mut balance, ids) = bench(0.0);
    balance.press_power();
    assert_eq!(balance.readout().text(), "0.0 g");

    drop_on_pan(&mut balance, ids[1]);
    assert_eq!(balance.readout().text(), "50.0 g");

    balance.press_zero();
    assert_eq!(balance.readout().text(), "0.0 g");

    drag_off_pan(&mut balance, ids[1]);
    assert_eq!(balance.readout().text(), "-50.0 g");
}

#[test]
fn drift_shows_until_zeroed() {
    let (mut balance, ids) = bench(0.13);
    balance.press_power();
    assert_eq!(balance.readout().text(), "0.1 g");

    balance.press_zero();
    assert_eq!(balance.readout().text(), "0.0 g");

    // The zero offset persists for later additions.
    drop_on_pan(&mut balance, ids[2]);
    assert_eq!(balance.readout().text(), "100.0 g");
}

#[test]
fn power_on_tares_away_preloaded_objects() {
    let (mut balance, ids) = bench(0.02);
    balance.press_power();
    drop_on_pan(&mut balance, ids[0]);
    drop_on_pan(&mut balance, ids[4]);
    balance.press_power(); // off, objects stay on the pan

    balance.press_power(); // back on
    // Initial reading is 0.0 within rounding regardless of the 40.2 g load.
    assert_eq!(balance.readout().text(), "0.0 g");
}

#[test]
fn combined_masses_sum() {
    let (mut balance, ids) = bench(0.0);
    balance.press_power();
    drop_on_pan(&mut balance, ids[4]); // dish 15.2
    drop_on_pan(&mut balance, ids[3]); // powder 50.8
    drop_on_pan(&mut balance, ids[5]); // paper 0.3
    assert_eq!(balance.readout().text(), "66.3 g");
}

#[test]
fn unlabeled_specimen_contributes_zero() {
    let (mut balance, ids) = bench(0.0);
    balance.press_power();
    drop_on_pan(&mut balance, ids[6]);
    assert_eq!(balance.readout().text(), "0.0 g");
    drop_on_pan(&mut balance, ids[0]);
    assert_eq!(balance.readout().text(), "25.0 g");
}

#[test]
fn held_object_never_counts() {
    let (mut balance, ids) = bench(0.0);
    balance.press_power();
    drop_on_pan(&mut balance, ids[1]);
    assert_eq!(balance.readout().text(), "50.0 g");

    // Grab it again: the reading drops while the object is in hand.
    let grab = balance.object_rect(ids[1]).unwrap().center();
    balance.pointer_down(ids[1], &PointerInput::Mouse(grab));
    assert_eq!(balance.readout().text(), "0.0 g");

    // Release in place: the center is still over the pan, so it is re-added.
    balance.pointer_up(&PointerInput::Mouse(grab));
    assert_eq!(balance.readout().text(), "50.0 g");
}
