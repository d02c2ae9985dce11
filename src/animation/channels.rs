use std::collections::BTreeMap;

use crate::foundation::error::{PuppetError, PuppetResult};

/// A single channel value: a tweenable number, or a flag that always snaps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ChannelValue {
    Number(f64),
    Flag(bool),
}

impl ChannelValue {
    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(v),
            Self::Flag(_) => None,
        }
    }

    /// Numeric reading; flags read as `0` / `1`.
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Number(v) => v,
            Self::Flag(b) => f64::from(u8::from(b)),
        }
    }

    pub fn is_number(self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl From<f64> for ChannelValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for ChannelValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

/// Flat mapping from channel name to value. Channel names are the whole vocabulary
/// a caller has for influencing the pose.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ChannelSet(BTreeMap<String, ChannelValue>);

/// Per-side channel suffixes with their rest values. Prefixed by `r` or `l`.
const SIDE_CHANNELS: &[(&str, f64)] = &[
    // hand target: head
    ("hx", 0.0),
    ("hy", 0.0),
    ("hz", 0.0),
    ("h", 0.0),
    // hand target: body
    ("bx", 0.0),
    ("by", 1.0),
    ("bz", 0.0),
    ("b", 1.0),
    // hand target: other hand
    ("ax", 0.0),
    ("ay", 0.0),
    ("az", 0.0),
    ("a", 0.0),
    // hand pivot offset
    ("px", 0.0),
    ("py", 0.0),
    ("pz", 0.0),
    // wrist rotation, degrees
    ("rz", 0.0),
    ("rx", -90.0),
    ("ry", 0.0),
    // fingers: three knuckle curls and a spread each
    ("i0", 0.0),
    ("i1", 0.0),
    ("i2", 0.0),
    ("is", 0.0),
    ("m0", 0.0),
    ("m1", 0.0),
    ("m2", 0.0),
    ("ms", 0.0),
    ("r0", 0.0),
    ("r1", 0.0),
    ("r2", 0.0),
    ("rs", 0.0),
    ("p0", 0.0),
    ("p1", 0.0),
    ("p2", 0.0),
    ("ps", 0.0),
    // thumb
    ("t0x", 0.0),
    ("t0y", 0.0),
    ("t1x", 0.0),
    ("t1y", 0.0),
    ("t2x", 0.0),
];

const FACE_CHANNELS: &[(&str, f64)] = &[
    ("hrx", 0.0),
    ("hry", 0.0),
    ("bx", 0.0),
    ("by", 0.0),
    ("eby", 0.0),
    ("ebx", 0.0),
    ("e0y", 1.0),
    ("e1y", 1.0),
    ("ex", 0.0),
    ("ey", 0.0),
    ("ez", 1.0),
    ("ny", 0.0),
    ("mx", 0.0),
    ("my", 0.0),
    ("mly", 0.0),
    ("mlz", 0.0),
    ("mty", 0.0),
    ("mtz", 0.0),
    ("mcx", 0.0),
];

impl ChannelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The documented rest value of every declared channel.
    pub fn defaults() -> Self {
        let mut map = BTreeMap::new();
        for &(name, v) in FACE_CHANNELS {
            map.insert(name.to_string(), ChannelValue::Number(v));
        }
        map.insert("teeth".to_string(), ChannelValue::Flag(false));
        for side in ["r", "l"] {
            for &(suffix, v) in SIDE_CHANNELS {
                map.insert(format!("{side}{suffix}"), ChannelValue::Number(v));
            }
        }
        Self(map)
    }

    pub fn is_declared(name: &str) -> bool {
        if name == "teeth" || FACE_CHANNELS.iter().any(|&(n, _)| n == name) {
            return true;
        }
        name.strip_prefix('r')
            .or_else(|| name.strip_prefix('l'))
            .is_some_and(|suffix| SIDE_CHANNELS.iter().any(|&(n, _)| n == suffix))
    }

    /// Fill every declared channel that is missing with its default.
    pub fn with_defaults(mut self) -> Self {
        for (k, v) in Self::defaults().0 {
            self.0.entry(k).or_insert(v);
        }
        self
    }

    pub fn from_json_str(s: &str) -> PuppetResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        let obj = value
            .as_object()
            .ok_or_else(|| PuppetError::channel("channel map must be a JSON object"))?;
        let mut out = Self::new();
        for (k, v) in obj {
            let cv = match v {
                serde_json::Value::Number(n) => n
                    .as_f64()
                    .map(ChannelValue::Number)
                    .ok_or_else(|| PuppetError::channel(format!("channel '{k}' is not finite")))?,
                serde_json::Value::Bool(b) => ChannelValue::Flag(*b),
                other => {
                    return Err(PuppetError::channel(format!(
                        "channel '{k}' must be a number or bool, got {other}"
                    )));
                }
            };
            out.0.insert(k.clone(), cv);
        }
        let unknown = out.unknown_names();
        if !unknown.is_empty() {
            tracing::warn!(?unknown, "ignoring channels no pose step reads");
        }
        Ok(out)
    }

    pub fn get(&self, name: &str) -> Option<ChannelValue> {
        self.0.get(name).copied()
    }

    /// Numeric value of `name`; missing channels read as `0`.
    pub fn number(&self, name: &str) -> f64 {
        self.get(name).map_or(0.0, ChannelValue::to_f64)
    }

    /// Flag reading: `Flag(b)` is `b`, numbers are truthy when non-zero.
    pub fn flag(&self, name: &str) -> bool {
        match self.get(name) {
            Some(ChannelValue::Flag(b)) => b,
            Some(ChannelValue::Number(v)) => v != 0.0,
            None => false,
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ChannelValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut ChannelValue> {
        self.0.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ChannelValue)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names present in this set that no pose step reads.
    pub fn unknown_names(&self) -> Vec<&str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|k| !Self::is_declared(k))
            .collect()
    }
}

impl<K: Into<String>, V: Into<ChannelValue>> FromIterator<(K, V)> for ChannelSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/channels.rs"]
mod tests;
