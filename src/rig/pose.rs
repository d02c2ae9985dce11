//! Channel-driven pose for a [`Skeleton`].
//!
//! Runs inside [`Model::pose`], so every point starts at rest and the final
//! screen offset is applied afterwards.

use std::f64::consts::FRAC_PI_2;

use crate::{
    animation::channels::ChannelSet,
    foundation::{
        core::{Point, Vec3},
        math::DEG_TO_RAD,
    },
    model::{
        point::{PointArena, PointId, Weight},
        store::Model,
    },
    rig::{
        proportions::Proportions,
        skeleton::{Arm, Skeleton},
    },
    transform::{
        chain::{Side, ThumbAngles, pose_elbow, rotate_thumb, rotate_y3},
        linear::{move_by, move_to, move_weighted, shift_x, shift_y},
        non_linear::zoom_distort,
        rotate::{rotate_xy, rotate_zxy},
    },
};

/// Perspective strength applied to the hand anchors.
const HAND_ZOOM: f64 = 0.002;

/// Pose `model` (built by `skeleton` at proportions `p`) from `channels`.
///
/// Missing channels read as `0`; callers normally fill defaults first.
pub fn apply(skeleton: &Skeleton, p: &Proportions, channels: &ChannelSet, model: &mut Model) {
    let c = |name: &str| channels.number(name);
    let (left, right) = (&skeleton.left_arm, &skeleton.right_arm);

    if let Some(cheeks) = model.shape_mut(skeleton.cheeks) {
        cheeks.size = p.cheek_radius + c("mcx") * p.cheek_radius / 2.0;
    }

    let pts = model.points_mut();

    let hand = p.palm_width;
    offset(pts, right.hand_pivot, Vec3::new(-c("rpx"), c("rpy"), c("rpz")) * hand);
    offset(pts, left.hand_pivot, Vec3::new(c("lpx"), c("lpy"), c("lpz")) * hand);
    // Each hand carries the spot the other hand reaches for.
    offset(pts, right.hand_target, Vec3::new(-c("lax"), c("lay"), c("laz")) * hand);
    offset(pts, left.hand_target, Vec3::new(c("rax"), c("ray"), c("raz")) * hand);

    let body = p.waist_width / 2.0 + p.body_radius;
    offset(pts, skeleton.body_left_target, Vec3::new(c("lbx"), c("lby"), c("lbz")) * body);
    pts[skeleton.body_left_target].shift = Some(0.5 - c("lby") / 2.0);
    offset(pts, skeleton.body_right_target, Vec3::new(-c("rbx"), c("rby"), c("rbz")) * body);
    pts[skeleton.body_right_target].shift = Some(0.5 - c("rby") / 2.0);

    let head = p.head_radius / 2.0;
    offset(pts, skeleton.head_left_target, Vec3::new(c("lhx"), c("lhy"), c("lhz")) * head);
    offset(pts, skeleton.head_right_target, Vec3::new(-c("rhx"), c("rhy"), c("rhz")) * head);

    shift_y(pts, &skeleton.nose_points, c("ny") * p.nose_crinkle_amount, Weight::Crinkle);

    let head_pivot = pts.position(skeleton.head_pivot);
    rotate_xy(
        pts,
        &skeleton.head_points,
        head_pivot,
        c("hrx") * FRAC_PI_2,
        c("hry") * FRAC_PI_2,
    );
    // Jaw drops only while the head tilts back.
    if let Some(&chin) = skeleton.head_points.first() {
        pts[chin].y += c("my") * p.jaw_amount * (-c("hry")).max(0.0);
    }

    let lean = c("bx") * p.body_shift_amount;
    shift_x(pts, &skeleton.body_points, lean, Weight::Shift);
    shift_x(pts, &skeleton.head_points, lean, Weight::Shift);

    let shrug = c("by") * p.shoulder_shrug_amount;
    shift_y(pts, &skeleton.neck_points, shrug, Weight::Shrug);
    shift_y(pts, &right.shoulder_points, shrug, Weight::Shrug);
    shift_y(pts, &left.shoulder_points, shrug, Weight::Shrug);

    pose_hand(pts, right, p, channels);
    pose_hand(pts, left, p, channels);

    blend_hand_move(
        pts,
        right,
        [
            (skeleton.body_right_target, c("rb")),
            (skeleton.head_right_target, c("rh")),
            (left.hand_target, c("ra")),
        ],
    );
    blend_hand_move(
        pts,
        left,
        [
            (skeleton.body_left_target, c("lb")),
            (skeleton.head_left_target, c("lh")),
            (right.hand_target, c("la")),
        ],
    );

    let zoom_pivot = Point::new(0.0, -p.body_height);
    zoom_distort(pts, &[right.hand_move], zoom_pivot, HAND_ZOOM);
    zoom_distort(pts, &[left.hand_move], zoom_pivot, HAND_ZOOM);

    let order = if c("la") > c("ra") {
        [right, left]
    } else {
        [left, right]
    };
    for arm in order {
        let pivot = pts.position(arm.hand_pivot);
        let target = pts.position(arm.hand_move);
        move_to(pts, &arm.hand_points, pivot, target);
    }

    pose_elbow(pts, &right.arm_points, Side::Right, p.lower_arm_length);
    pose_elbow(pts, &left.arm_points, Side::Left, p.lower_arm_length);
}

fn offset(pts: &mut PointArena, id: PointId, delta: Vec3) {
    move_by(pts, &[id], delta, 1.0);
}

fn channel_prefix(side: Side) -> &'static str {
    match side {
        Side::Left => "l",
        Side::Right => "r",
    }
}

/// Finger curls and spreads, thumb, then the wrist rotation about the hand pivot.
///
/// The right hand mirrors the left through the side sign on every angle about
/// the vertical axis.
fn pose_hand(pts: &mut PointArena, arm: &Arm, p: &Proportions, channels: &ChannelSet) {
    let prefix = channel_prefix(arm.side);
    let c = |suffix: &str| channels.number(&format!("{prefix}{suffix}"));
    let s = arm.side.sign();
    let a = FRAC_PI_2;

    let spreads = [
        ("i", -p.finger_spread),
        ("m", -p.finger_spread / 3.0),
        ("r", p.finger_spread / 3.0),
        ("p", p.finger_spread),
    ];
    for (finger, (key, spread)) in arm.fingers().into_iter().zip(spreads) {
        let curl = |joint: u8| c(&format!("{key}{joint}")) * a;
        rotate_y3(
            pts,
            &finger.points,
            [s * (a + curl(0)), s * curl(1), s * curl(2)],
            c(&format!("{key}s")) * spread,
        );
    }

    rotate_thumb(
        pts,
        &arm.thumb.points,
        arm.side,
        ThumbAngles {
            base_x: s * c("t0x") * a,
            base_y: -s * c("t0y") * a,
            mid_x: s * c("t1x") * a,
            mid_y: -s * c("t1y") * a,
            tip_x: s * (c("t2x") + c("t1x")) * a,
        },
    );

    let pivot = pts.position(arm.hand_pivot);
    rotate_zxy(
        pts,
        &arm.hand_points,
        pivot,
        s * c("rz") * DEG_TO_RAD,
        c("rx") * DEG_TO_RAD,
        s * c("ry") * DEG_TO_RAD,
    );
}

/// Park `hand_move` at the weighted blend of `targets`, less the pivot's own offset.
/// With all weights at zero `hand_move` keeps only that offset.
fn blend_hand_move(pts: &mut PointArena, arm: &Arm, targets: [(PointId, f64); 3]) {
    let pivot = pts.position(arm.hand_pivot);
    move_to(pts, &[arm.hand_move], pivot, Vec3::ZERO);

    let weighted = targets.map(|(id, w)| (pts.position(id), w));
    move_weighted(pts, &[arm.hand_move], &weighted);
}

#[cfg(test)]
#[path = "../../tests/unit/rig/pose.rs"]
mod tests;
