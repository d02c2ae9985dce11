use crate::foundation::error::{PuppetError, PuppetResult};

/// Body measurements in reference pixels (a 600x400 canvas at scale 1).
///
/// Heights are measured upward from the waist; depths are offsets along z from the
/// face plane. `knuckle_proportions` and `finger_proportions` are ratios and are not
/// affected by [`Proportions::scaled`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Proportions {
    pub border: f64,
    pub thin_border: f64,

    pub head_height: f64,
    pub forehead_height: f64,
    pub eye_height: f64,
    pub nose_height: f64,
    pub nose_width: f64,
    pub nostril_width: f64,
    pub cheek_width: f64,
    pub cheek_height: f64,
    pub mouth_height: f64,
    pub mouth_width: f64,
    pub chin_height: f64,
    pub neck_width: f64,

    pub body_height: f64,
    pub waist_width: f64,
    pub shoulder_width: f64,
    pub shoulder_height: f64,
    pub elbow_height: f64,
    pub lower_arm_length: f64,
    pub wrist_length: f64,
    pub palm_height: f64,
    pub palm_width: f64,
    pub knuckle_height: f64,
    /// Distance of each thumb joint from the thumb root.
    pub thumb_knuckles: [f64; 4],
    pub knuckle_proportions: [f64; 3],
    /// Index, middle, ring, pinky length ratios.
    pub finger_proportions: [f64; 4],
    pub finger_spread: f64,

    pub body_radius: f64,
    pub head_radius: f64,
    pub chin_radius: f64,
    pub mouth_scale: f64,
    pub cheek_radius: f64,
    pub nose_radius: f64,
    pub nostril_radius: f64,
    pub eye_scale: f64,
    pub arm_radius: f64,
    pub wrist_radius: f64,
    pub finger_radius: f64,
    pub palm_radius: f64,
    pub thumb_radii: [f64; 4],

    pub shoulder_depth: f64,
    pub head_depth: f64,
    pub chin_depth: f64,
    pub cheek_depth: f64,
    pub nose_depth: f64,
    pub nostril_depth: f64,
    pub eye_spacing: f64,
    pub eye_depth: f64,
    pub mouth_depth: f64,
    pub thumb_depth: f64,

    pub body_shift_amount: f64,
    pub shoulder_shrug_amount: f64,
    pub nose_crinkle_amount: f64,
    pub jaw_amount: f64,
}

impl Default for Proportions {
    fn default() -> Self {
        let border = 5.0;
        let head_height = 270.0;
        let body_height = 200.0;
        let palm_width = 25.0;
        let head_radius = 115.0;
        let chin_radius = 105.0;
        let finger_radius = 16.0;
        // Wide enough for four fingers side by side.
        let palm_radius = border + 4.0 * (finger_radius - border + 1.0) - palm_width;
        let head_depth = 15.0;
        let chin_depth = 30.0;
        let nose_depth =
            (head_depth + chin_depth) / 2.0 + (head_radius / 2.0 + chin_radius / 2.0) / 2.0;

        Self {
            border,
            thin_border: 3.0,

            head_height,
            forehead_height: head_height + 50.0,
            eye_height: head_height + 35.0,
            nose_height: head_height + 15.0,
            nose_width: 5.0,
            nostril_width: 5.0,
            cheek_width: 25.0,
            cheek_height: head_height + 5.0,
            mouth_height: head_height - 5.0,
            mouth_width: 30.0,
            chin_height: head_height + 20.0,
            neck_width: 60.0,

            body_height,
            waist_width: 90.0,
            shoulder_width: 45.0,
            shoulder_height: body_height - 5.0,
            elbow_height: 80.0,
            lower_arm_length: 100.0,
            wrist_length: 10.0,
            palm_height: 25.0,
            palm_width,
            knuckle_height: 16.0,
            thumb_knuckles: [0.0, 15.0, 30.0, 45.0],
            knuckle_proportions: [1.0, 0.8, 0.7],
            finger_proportions: [1.0, 1.2, 1.0, 0.7],
            finger_spread: 15.0,

            body_radius: 60.0,
            head_radius,
            chin_radius,
            mouth_scale: 1.0,
            cheek_radius: 45.0,
            nose_radius: 13.0,
            nostril_radius: 10.0,
            eye_scale: 1.0,
            arm_radius: 50.0,
            wrist_radius: 35.0,
            finger_radius,
            palm_radius,
            thumb_radii: [palm_radius, 22.0, 18.0, 18.0],

            shoulder_depth: 100.0,
            head_depth,
            chin_depth,
            cheek_depth: 50.0,
            nose_depth,
            nostril_depth: nose_depth - 4.0,
            eye_spacing: 40.0,
            eye_depth: nose_depth - 15.0,
            mouth_depth: nose_depth - 10.0,
            thumb_depth: 5.0,

            body_shift_amount: 50.0,
            shoulder_shrug_amount: 30.0,
            nose_crinkle_amount: 5.0,
            jaw_amount: 25.0,
        }
    }
}

impl Proportions {
    /// Parse a partial proportions object; missing fields keep their defaults.
    pub fn from_json_value(value: serde_json::Value) -> PuppetResult<Self> {
        if !value.is_object() {
            return Err(PuppetError::serde(format!(
                "proportions must be a JSON object, got {value}"
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Every measurement multiplied by `scale`; ratio tables are kept as-is.
    pub fn scaled(&self, scale: f64) -> Self {
        let s = |v: f64| v * scale;
        Self {
            border: s(self.border),
            thin_border: s(self.thin_border),

            head_height: s(self.head_height),
            forehead_height: s(self.forehead_height),
            eye_height: s(self.eye_height),
            nose_height: s(self.nose_height),
            nose_width: s(self.nose_width),
            nostril_width: s(self.nostril_width),
            cheek_width: s(self.cheek_width),
            cheek_height: s(self.cheek_height),
            mouth_height: s(self.mouth_height),
            mouth_width: s(self.mouth_width),
            chin_height: s(self.chin_height),
            neck_width: s(self.neck_width),

            body_height: s(self.body_height),
            waist_width: s(self.waist_width),
            shoulder_width: s(self.shoulder_width),
            shoulder_height: s(self.shoulder_height),
            elbow_height: s(self.elbow_height),
            lower_arm_length: s(self.lower_arm_length),
            wrist_length: s(self.wrist_length),
            palm_height: s(self.palm_height),
            palm_width: s(self.palm_width),
            knuckle_height: s(self.knuckle_height),
            thumb_knuckles: self.thumb_knuckles.map(s),
            knuckle_proportions: self.knuckle_proportions,
            finger_proportions: self.finger_proportions,
            finger_spread: s(self.finger_spread),

            body_radius: s(self.body_radius),
            head_radius: s(self.head_radius),
            chin_radius: s(self.chin_radius),
            mouth_scale: s(self.mouth_scale),
            cheek_radius: s(self.cheek_radius),
            nose_radius: s(self.nose_radius),
            nostril_radius: s(self.nostril_radius),
            eye_scale: s(self.eye_scale),
            arm_radius: s(self.arm_radius),
            wrist_radius: s(self.wrist_radius),
            finger_radius: s(self.finger_radius),
            palm_radius: s(self.palm_radius),
            thumb_radii: self.thumb_radii.map(s),

            shoulder_depth: s(self.shoulder_depth),
            head_depth: s(self.head_depth),
            chin_depth: s(self.chin_depth),
            cheek_depth: s(self.cheek_depth),
            nose_depth: s(self.nose_depth),
            nostril_depth: s(self.nostril_depth),
            eye_spacing: s(self.eye_spacing),
            eye_depth: s(self.eye_depth),
            mouth_depth: s(self.mouth_depth),
            thumb_depth: s(self.thumb_depth),

            body_shift_amount: s(self.body_shift_amount),
            shoulder_shrug_amount: s(self.shoulder_shrug_amount),
            nose_crinkle_amount: s(self.nose_crinkle_amount),
            jaw_amount: s(self.jaw_amount),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/proportions.rs"]
mod tests;
