use super::*;

#[test]
fn add_snapshots_rest_from_current_coordinates() {
    let mut arena = PointArena::new();
    let mut p = Point::new(1.0, 2.0, 3.0);
    p.x = 10.0;
    let id = arena.add(p);
    assert_eq!(arena[id].rest(), Vec3::new(10.0, 2.0, 3.0));
}

#[test]
fn reset_restores_rest_and_keeps_weights() {
    let mut arena = PointArena::new();
    let id = arena.add(Point::new(1.0, 2.0, 3.0).with_d(7.0).with_shrug(0.25));
    arena[id].set_position(Vec3::new(-5.0, 0.0, 9.0));
    arena.reset_all();
    assert_eq!(arena.position(id), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(arena[id].d, 7.0);
    assert_eq!(arena[id].weight(Weight::Shrug), 0.25);
}

#[test]
fn missing_weights_default_to_one() {
    let p = Point::new(0.0, 0.0, 0.0).with_crinkle(0.5);
    assert_eq!(p.weight(Weight::Shift), 1.0);
    assert_eq!(p.weight(Weight::Shrug), 1.0);
    assert_eq!(p.weight(Weight::Crinkle), 0.5);
    assert_eq!(p.with_shift(0.0).weight(Weight::Shift), 0.0);
}

#[test]
fn translate_moves_only_x_and_y() {
    let mut arena = PointArena::new();
    let id = arena.add(Point::new(1.0, 1.0, 1.0));
    arena.translate_xy(2.0, -3.0);
    assert_eq!(arena.position(id), Vec3::new(3.0, -2.0, 1.0));
}

#[test]
fn ids_are_dense_in_insertion_order() {
    let mut arena = PointArena::new();
    let a = arena.add(Point::new(0.0, 0.0, 0.0));
    let b = arena.add(Point::new(1.0, 0.0, 0.0));
    assert_eq!((a, b), (PointId(0), PointId(1)));
    assert!(arena.get(PointId(2)).is_none());
    assert_eq!(arena.len(), 2);
}
