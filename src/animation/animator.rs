use std::collections::BTreeMap;

use crate::animation::channels::{ChannelSet, ChannelValue};

/// Smooths live channel values toward externally supplied targets.
///
/// Each [`Animator::tween`] call moves every pending numeric channel halfway to its
/// target, independent of elapsed time; call it once per rendered frame.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    channels: ChannelSet,
    target: BTreeMap<String, f64>,
}

impl Animator {
    pub fn new(channels: ChannelSet) -> Self {
        Self {
            channels,
            target: BTreeMap::new(),
        }
    }

    /// Animator seeded with every declared channel at its rest value.
    pub fn with_defaults() -> Self {
        Self::new(ChannelSet::defaults())
    }

    pub fn channels(&self) -> &ChannelSet {
        &self.channels
    }

    /// Pending tween target of `name`, if any.
    pub fn target(&self, name: &str) -> Option<f64> {
        self.target.get(name).copied()
    }

    pub fn tween(&mut self) {
        for (k, &t) in &self.target {
            if let Some(ChannelValue::Number(v)) = self.channels.get_mut(k) {
                *v += (t - *v) / 2.0;
            }
        }
    }

    /// Merge new targets. A channel tweens when it already has a numeric target, or
    /// has none yet and currently holds a number; anything else snaps immediately.
    pub fn set_target(&mut self, partial: &ChannelSet) {
        for (k, v) in partial.iter() {
            let animatable = self.target.contains_key(k)
                || self.channels.get(k).is_some_and(ChannelValue::is_number);
            match (animatable, v) {
                (true, ChannelValue::Number(t)) => {
                    self.target.insert(k.to_string(), t);
                }
                _ => {
                    self.target.remove(k);
                    self.channels.set(k, v);
                }
            }
        }
    }

    /// Largest remaining distance between a channel and its target.
    pub fn max_error(&self) -> f64 {
        self.target
            .iter()
            .filter_map(|(k, &t)| self.channels.get(k)?.as_number().map(|v| (t - v).abs()))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
