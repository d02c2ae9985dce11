//! Jointed-chain operators: finger curls, thumb articulation and the elbow solver.
//!
//! Chains are rigid: each joint sits at its own `d` (segment length) from the joint
//! before it, so only directions change.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
    foundation::core::Vec3,
    model::point::{PointArena, PointId},
    transform::rotate::rotate_zxy,
};

/// Which side of the body a limb belongs to, from the figure's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// `+1` for left, `-1` for right; mirrors x offsets and angles.
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// Lay out a chain of up to four joints in the X-Z plane at cumulative angles
/// `angles[0]`, `angles[0] + angles[1]`, ... from the root.
///
/// `yshift` bends the chain softly: the tip moves by the full amount, inner joints
/// by their fraction of the chain (`1/3`, `2/3` for a four-point finger).
pub fn rotate_y3(points: &mut PointArena, chain: &[PointId], angles: [f64; 3], yshift: f64) {
    debug_assert!(
        (2..=4).contains(&chain.len()),
        "rotate_y3 expects 2..=4 points, got {}",
        chain.len()
    );
    let last = chain.len() - 1;
    let mut ang = 0.0;
    for i in 1..chain.len() {
        ang += angles[i - 1];
        let prev = points.position(chain[i - 1]);
        let p = &mut points[chain[i]];
        p.x = prev.x + p.d * ang.cos();
        p.z = prev.z + p.d * ang.sin();
        p.y += if i == last {
            yshift
        } else {
            yshift * i as f64 / last as f64
        };
    }
}

/// Thumb joint angles in radians. The tip has no independent sideways angle and
/// follows the middle joint's.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThumbAngles {
    pub base_x: f64,
    pub base_y: f64,
    pub mid_x: f64,
    pub mid_y: f64,
    pub tip_x: f64,
}

/// Articulate a four-point thumb chain with separate X and Y angles per joint.
pub fn rotate_thumb(points: &mut PointArena, chain: &[PointId], side: Side, a: ThumbAngles) {
    let s = side.sign();

    let p0 = points.position(chain[0]);
    let p1 = {
        let p = &mut points[chain[1]];
        p.x = p0.x + s * p.d * a.base_y.sin();
        p.y = p0.y + p.d * a.base_y.cos() * a.base_x.sin();
        p.z = p0.z + s * p.d * a.base_y.cos() * a.base_x.cos();
        p.position()
    };
    let p2 = {
        let p = &mut points[chain[2]];
        p.x = p1.x + s * p.d * a.mid_y.sin();
        p.y = p1.y + p.d * a.mid_y.cos() * a.mid_x.sin();
        p.z = p1.z + s * p.d * a.mid_y.cos() * a.mid_x.cos();
        p.position()
    };
    let p = &mut points[chain[3]];
    p.x = p2.x + s * p.d * a.tip_x.cos() * a.mid_y.sin();
    p.y = p2.y + p.d * a.tip_x.sin();
    p.z = p2.z + s * p.d * a.tip_x.cos() * a.mid_y.cos();
}

/// Height of the elbow above the shoulder-wrist midpoint for an arm whose two
/// segments are `arm_length` long and whose ends are `reach` apart. Clamped to `0`
/// once the wrist is out of reach.
pub fn elbow_lift(arm_length: f64, reach: f64) -> f64 {
    (arm_length * arm_length - reach / 2.0 * reach / 2.0)
        .max(0.0)
        .sqrt()
}

/// Place the elbow (`chain[1]`) between shoulder (`chain[0]`) and wrist (`chain[2]`).
///
/// The elbow is first put straight below the shoulder at the lift height, half the
/// reach deep, then swung into the shoulder-to-wrist bearing.
pub fn pose_elbow(points: &mut PointArena, chain: &[PointId], side: Side, arm_length: f64) {
    let shoulder = points.position(chain[0]);
    let wrist = points.position(chain[2]);

    let dx = wrist.x - shoulder.x;
    let dy = wrist.y - shoulder.y;
    let dz = wrist.z - shoulder.z;

    let dxz = (dx * dx + dz * dz).sqrt();
    let ay = dz.atan2(dx);

    let d = (dx * dx + dy * dy + dz * dz).sqrt();
    let a = dy.atan2(dxz);

    points[chain[1]].set_position(Vec3::new(
        shoulder.x,
        shoulder.y + elbow_lift(arm_length, d),
        shoulder.z + d / 2.0,
    ));

    rotate_zxy(
        points,
        &chain[1..2],
        shoulder,
        -side.sign() * PI / 3.0,
        -a,
        -FRAC_PI_2 + ay,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/transform/chain.rs"]
mod tests;
