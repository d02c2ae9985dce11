//! Builds the figure's points and shapes and keeps the handles the pose step needs.

use crate::{
    features::{Eye, Mouth},
    foundation::core::Vec3,
    model::{
        point::{Point, PointId},
        shape::{Shape, ShapeId, Smudge},
        store::Model,
    },
    rig::proportions::Proportions,
    transform::chain::Side,
};

/// One finger (or thumb): four joints from knuckle root to tip and the three
/// segment shapes between them.
#[derive(Clone, Debug, PartialEq)]
pub struct Finger {
    pub points: [PointId; 4],
    pub knuckles: [ShapeId; 3],
}

/// Handles for one arm.
#[derive(Clone, Debug, PartialEq)]
pub struct Arm {
    pub side: Side,
    /// Wrist rotation pivot; offset by the `?p*` channels.
    pub hand_pivot: PointId,
    /// Where the hand pivot should end up this frame.
    pub hand_move: PointId,
    /// Spot on this hand that the *other* hand reaches toward.
    pub hand_target: PointId,
    /// Every point that moves rigidly with the hand.
    pub hand_points: Vec<PointId>,
    /// Shoulder, elbow, wrist.
    pub arm_points: [PointId; 3],
    /// Torso corner and shoulder joint; the pair that shrugs.
    pub shoulder_points: [PointId; 2],
    pub shoulder: ShapeId,
    pub upper: ShapeId,
    pub lower: ShapeId,
    pub palm: ShapeId,
    pub index: Finger,
    pub middle: Finger,
    pub ring: Finger,
    pub pinky: Finger,
    pub thumb: Finger,
}

impl Arm {
    pub fn fingers(&self) -> [&Finger; 4] {
        [&self.index, &self.middle, &self.ring, &self.pinky]
    }
}

/// Named anchors into a built [`Model`].
#[derive(Clone, Debug, PartialEq)]
pub struct Skeleton {
    pub head_points: Vec<PointId>,
    pub nose_points: Vec<PointId>,
    pub body_points: Vec<PointId>,
    pub neck_points: [PointId; 2],
    pub head_pivot: PointId,
    /// Reach targets beside the waist.
    pub body_left_target: PointId,
    pub body_right_target: PointId,
    /// Reach targets on the face.
    pub head_left_target: PointId,
    pub head_right_target: PointId,
    pub torso: ShapeId,
    pub neck: ShapeId,
    pub head: ShapeId,
    pub nose: ShapeId,
    pub cheeks: ShapeId,
    pub mouth: ShapeId,
    pub eyes: [ShapeId; 2],
    pub left_arm: Arm,
    pub right_arm: Arm,
}

struct Builder<'a> {
    model: &'a mut Model,
    p: &'a Proportions,
    head_points: Vec<PointId>,
    nose_points: Vec<PointId>,
    body_points: Vec<PointId>,
}

impl Builder<'_> {
    fn head_point(&mut self, x: f64, y: f64, z: f64) -> PointId {
        let id = self.model.add_point(Point::new(x, y, z));
        self.head_points.push(id);
        id
    }

    fn nose_point(&mut self, x: f64, y: f64, z: f64, crinkle: Option<f64>) -> PointId {
        let mut pt = Point::new(x, y, z);
        pt.crinkle = crinkle;
        let id = self.model.add_point(pt);
        self.head_points.push(id);
        self.nose_points.push(id);
        id
    }

    fn body_point(&mut self, x: f64, y: f64, z: f64, shrug: Option<f64>, shift: Option<f64>) -> PointId {
        let mut pt = Point::new(x, y, z);
        pt.shrug = shrug;
        pt.shift = shift;
        let id = self.model.add_point(pt);
        self.body_points.push(id);
        id
    }
}

struct HandPoints<'m> {
    model: &'m mut Model,
    ids: Vec<PointId>,
}

impl HandPoints<'_> {
    fn add(&mut self, pos: Vec3, d: f64) -> PointId {
        let id = self.model.add_point(Point::at(pos).with_d(d));
        self.ids.push(id);
        id
    }
}

impl Skeleton {
    /// Add the whole figure to `model` at the measurements in `p`.
    ///
    /// Shapes are admitted torso first, then face, then the left and right arms; the
    /// order is the paint-order tie-break for shapes at equal layer and depth.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(p: &Proportions, model: &mut Model) -> Self {
        let mut b = Builder {
            model,
            p,
            head_points: Vec::new(),
            nose_points: Vec::new(),
            body_points: Vec::new(),
        };

        let tx = p.waist_width / 2.0 + p.body_radius;
        let body_left_target = b.body_point(tx, -p.body_height / 2.0, 0.0, None, None);
        let body_right_target = b.body_point(-tx, -p.body_height / 2.0, 0.0, None, None);

        let (x, y, z) = (p.waist_width / 2.0, -p.body_height, -201.0);
        let torso_points = [
            b.body_point(-x, y, z, Some(0.25), None),
            b.body_point(-x, 0.0, z, None, Some(0.25)),
            b.body_point(x, 0.0, z, None, Some(0.25)),
            b.body_point(x, y, z, Some(0.25), None),
        ];
        let torso = b.model.add_shape(
            Shape::new(torso_points.to_vec(), p.body_radius, p.border)
                .layer(-5)
                .color(1),
        );

        let neck_points = [
            b.body_point(0.0, -p.body_height - p.body_radius / 2.0, -200.0, Some(0.5), None),
            // No shrug weight: the top of the neck rises fully with the shoulders.
            b.body_point(0.0, -p.head_height, -200.0, None, None),
        ];
        let neck = b
            .model
            .add_shape(Shape::new(neck_points.to_vec(), p.neck_width, p.border).layer(-3));

        let chin = b.head_point(0.0, -p.chin_height, -100.0 + p.chin_depth);
        let forehead = b.head_point(0.0, -p.forehead_height, -100.0 + p.head_depth);
        let head = b.model.add_shape(
            Shape::new(vec![chin, forehead], p.chin_radius, p.border)
                .size2(p.head_radius)
                .layer(-2),
        );
        let head_left_target = b.head_point(0.0, -p.nose_height, 0.0);
        let head_right_target = b.head_point(0.0, -p.nose_height, 0.0);

        let head_pivot = b.body_point(0.0, -p.head_height, -100.0, None, None);

        let eyes = [Side::Left, Side::Right].map(|side| {
            let pt = b.head_point(
                side.sign() * p.eye_spacing / 2.0,
                -p.eye_height,
                -100.0 + p.eye_depth,
            );
            b.model.add_feature_shape(
                Shape::anchor(vec![pt]).layer(-1),
                Box::new(Eye::new(side, p.eye_scale)),
            )
        });

        let (x, y, z) = (p.nose_width / 2.0, -p.nose_height, -100.0 + p.nose_depth);
        let nose_pair = [
            b.nose_point(-x, y, z, Some(0.5)),
            b.nose_point(x, y, z, Some(0.5)),
        ];
        let nose = b.model.add_shape(
            Shape::new(nose_pair.to_vec(), p.nose_radius, p.thin_border).layer(-1),
        );
        let z2 = -100.0 + p.nostril_depth;
        for side in [1.0, -1.0] {
            let nostril = vec![
                b.nose_point(side * (x + p.nostril_width), y, z2, None),
                b.nose_point(side * (x + p.nostril_width + 1.0), y, z2, None),
            ];
            b.model
                .add_shape(Shape::new(nostril, p.nostril_radius, p.thin_border).layer(-1));
        }

        let (x, y, z) = (p.cheek_width, -p.cheek_height, -100.0 + p.cheek_depth);
        let cheek_points = vec![b.head_point(-x, y, z), b.head_point(x, y, z)];
        let cheeks = b.model.add_shape(
            Shape::new(cheek_points, p.cheek_radius, p.border)
                .layer(-2)
                .smudge(
                    Smudge::new(chin, forehead, p.chin_radius)
                        .size2(p.head_radius)
                        .scale(50.0),
                ),
        );

        let (x, y, z) = (p.mouth_width / 2.0, -p.mouth_height, -100.0 + p.mouth_depth);
        let corners = vec![b.head_point(-x, y, z), b.head_point(x, y, z)];
        let mouth = b.model.add_feature_shape(
            Shape::anchor(corners).layer(-1).color(2),
            Box::new(Mouth::new(p.mouth_scale)),
        );

        let left_arm = build_arm(&mut b, Side::Left, &torso_points);
        let right_arm = build_arm(&mut b, Side::Right, &torso_points);

        tracing::debug!(
            points = b.model.points().len(),
            shapes = b.model.shapes().len(),
            "skeleton built"
        );

        Self {
            head_points: b.head_points,
            nose_points: b.nose_points,
            body_points: b.body_points,
            neck_points,
            head_pivot,
            body_left_target,
            body_right_target,
            head_left_target,
            head_right_target,
            torso,
            neck,
            head,
            nose,
            cheeks,
            mouth,
            eyes,
            left_arm,
            right_arm,
        }
    }
}

fn build_arm(b: &mut Builder<'_>, side: Side, torso: &[PointId; 4]) -> Arm {
    let p = b.p;
    let s = side.sign();
    let left = side == Side::Left;

    let pivot = Vec3::new(
        s * (p.waist_width / 2.0 + p.body_radius + p.lower_arm_length),
        -p.elbow_height,
        0.0,
    );
    let hand_pivot = b.model.add_point(Point::at(pivot));
    let hand_move = b.model.add_point(Point::at(pivot));
    let hand_target = b.model.add_point(Point::at(pivot));

    let corner = torso[if left { 3 } else { 0 }];
    let shoulder_joint = b.model.add_point(Point::new(
        s * (p.waist_width / 2.0 + p.shoulder_width),
        -p.shoulder_height,
        -p.shoulder_depth,
    ));
    b.body_points.push(shoulder_joint);
    let shoulder = b.model.add_shape(
        Shape::new(vec![corner, shoulder_joint], p.body_radius, p.border)
            .size2(p.arm_radius)
            .layer(-4)
            .color(1)
            .smudge(Smudge::new(corner, torso[if left { 0 } else { 3 }], p.body_radius).scale(4.0))
            .smudge(Smudge::new(corner, torso[if left { 2 } else { 1 }], p.body_radius).scale(4.0)),
    );

    let elbow = b.model.add_point(Point::new(
        s * (p.waist_width / 2.0 + p.body_radius),
        -p.elbow_height,
        0.0,
    ));
    let upper = b.model.add_shape(
        Shape::new(vec![shoulder_joint, elbow], p.arm_radius, p.border)
            .size2(p.arm_radius)
            .layer(-3)
            .color(1)
            .smudge(Smudge::new(shoulder_joint, corner, p.arm_radius)),
    );

    let mut hand = HandPoints {
        model: &mut *b.model,
        ids: vec![hand_target],
    };
    let wrist = hand.add(Vec3::new(pivot.x, pivot.y, pivot.z - p.wrist_length), 0.0);
    let lower = hand.model.add_shape(
        Shape::new(vec![elbow, wrist], p.arm_radius, p.border)
            .size2(p.wrist_radius)
            .color(1)
            .smudge(Smudge::new(elbow, shoulder_joint, p.arm_radius)),
    );

    let (dy, dz) = (p.palm_width / 2.0, p.palm_height);
    let palm_points = [
        hand.add(Vec3::new(pivot.x, pivot.y + dy, 0.0), 0.0),
        hand.add(Vec3::new(pivot.x, pivot.y - dy, 0.0), 0.0),
        hand.add(Vec3::new(pivot.x, pivot.y - dy, dz), 0.0),
        hand.add(Vec3::new(pivot.x, pivot.y + dy, dz), 0.0),
    ];
    let palm = hand
        .model
        .add_shape(Shape::new(palm_points.to_vec(), p.palm_radius, p.border));

    let fz = p.palm_height + p.palm_radius / 2.0 - p.finger_radius / 2.0;
    let spread = p.palm_width / 2.0 + p.palm_radius / 2.0 - p.finger_radius / 2.0;
    let offsets = [-spread, -spread / 3.0, spread / 3.0, spread];
    let [index, middle, ring, pinky] = std::array::from_fn(|i| {
        let length = s * p.finger_proportions[i];
        build_finger(&mut hand, p, palm, pivot, pivot.y + offsets[i], fz, length)
    });

    let thumb = build_thumb(&mut hand, p, palm, &palm_points, pivot, s);

    Arm {
        side,
        hand_pivot,
        hand_move,
        hand_target,
        hand_points: hand.ids,
        arm_points: [shoulder_joint, elbow, wrist],
        shoulder_points: [corner, shoulder_joint],
        shoulder,
        upper,
        lower,
        palm,
        index,
        middle,
        ring,
        pinky,
        thumb,
    }
}

/// Four-joint finger rooted at `(pivot.x, y, fz)`. `length` carries the side sign so
/// the chain angles of both hands can share one formula.
fn build_finger(
    hand: &mut HandPoints<'_>,
    p: &Proportions,
    palm: ShapeId,
    pivot: Vec3,
    y: f64,
    fz: f64,
    length: f64,
) -> Finger {
    let x = pivot.x;
    let dz = p.knuckle_height;
    let points: [PointId; 4] = std::array::from_fn(|i| {
        let d = if i == 0 {
            0.0
        } else {
            length * dz * p.knuckle_proportions[i - 1]
        };
        hand.add(Vec3::new(x, y, fz + i as f64 * d), d)
    });
    let [p0, p1, p2, p3] = points;
    let root = hand.add(Vec3::new(x, y, fz - dz), 0.0);
    let r = p.finger_radius;

    let knuckles = [
        hand.model.add_shape(
            Shape::new(vec![p0, p1], r, p.border)
                .smudge(Smudge::new(p0, root, r))
                .smudge(Smudge::new(p1, p2, r)),
        ),
        hand.model.add_shape(
            Shape::new(vec![p1, p2], r, p.border)
                .smudge(Smudge::new(p1, p0, r))
                .smudge(Smudge::new(p2, p3, r)),
        ),
        hand.model
            .add_shape(Shape::new(vec![p2, p3], r, p.border).smudge(Smudge::new(p2, p1, r))),
    ];
    if let Some(palm) = hand.model.shape_mut(palm) {
        palm.smudges.push(Smudge::new(root, p1, r).scale(5.0));
    }

    Finger { points, knuckles }
}

fn build_thumb(
    hand: &mut HandPoints<'_>,
    p: &Proportions,
    palm: ShapeId,
    palm_points: &[PointId; 4],
    pivot: Vec3,
    s: f64,
) -> Finger {
    let tk = p.thumb_knuckles;
    let root = Vec3::new(pivot.x - s * p.thumb_depth, pivot.y - p.palm_width * 0.55, tk[0]);
    let points: [PointId; 4] = std::array::from_fn(|i| {
        let d = if i == 0 { 0.0 } else { tk[i] - tk[i - 1] };
        hand.add(root, s * d)
    });
    let [t0, t1, t2, t3] = points;
    let r = p.thumb_radii;
    let smudge = |from, toward, size: f64, size2: f64| Smudge::new(from, toward, size).size2(size2);

    let knuckles = [
        hand.model.add_shape(
            Shape::new(vec![t0, t1], r[0], p.border)
                .size2(r[1])
                .smudge(smudge(palm_points[1], palm_points[0], r[0], r[0]))
                .smudge(smudge(palm_points[1], palm_points[2], r[0], r[0]))
                .smudge(smudge(t1, t2, r[1], r[2])),
        ),
        hand.model.add_shape(
            Shape::new(vec![t1, t2], r[1], p.border)
                .size2(r[2])
                .smudge(smudge(t1, t0, r[1], r[0]))
                .smudge(smudge(t2, t3, r[2], r[3])),
        ),
        hand.model.add_shape(
            Shape::new(vec![t2, t3], r[2], p.border)
                .size2(r[3])
                .smudge(smudge(t2, t1, r[2], r[1])),
        ),
    ];
    if let Some(palm) = hand.model.shape_mut(palm) {
        palm.smudges.push(smudge(t0, palm_points[1], r[0], r[0]));
    }

    Finger { points, knuckles }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/skeleton.rs"]
mod tests;
