use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{display_object::DisplayObjectType, errors::Result, sprite::Sprite};

/// Sprite settings, usually read from level data.
/// Absent fields leave the sprite untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpriteSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_array: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_array: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_change: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl Sprite {
    /// Build a sprite and apply settings to it
    pub fn from_settings(id: impl Into<String>, settings: Value) -> Result<Self> {
        let mut sprite = Sprite::new(id);
        sprite.settings(settings)?;
        Ok(sprite)
    }

    /// Load sprite settings
    pub fn settings(&mut self, settings: Value) -> Result<()> {
        let settings: SpriteSettings = serde_json::from_value(settings)?;
        self.apply_settings(settings);
        Ok(())
    }

    pub fn apply_settings(&mut self, settings: SpriteSettings) {
        log::debug!("apply settings to sprite {:?}", self.base().id());

        let SpriteSettings {
            image_name,
            start,
            finish,
            current_index,
            x_array,
            y_array,
            prev_change,
            visible,
        } = settings;

        if let Some(image_name) = image_name {
            self.set_image_name(image_name);
        }
        if let Some(start) = start {
            self.set_start(start);
        }
        if let Some(finish) = finish {
            self.set_finish(finish);
        }
        if let Some(current_index) = current_index {
            self.set_current_index(current_index);
        }
        if let Some(x_array) = x_array {
            self.set_x_array(x_array);
        }
        if let Some(y_array) = y_array {
            self.set_y_array(y_array);
        }
        if let Some(prev_change) = prev_change {
            self.set_prev_change(prev_change);
        }
        if let Some(visible) = visible {
            self.base_mut().set_visible(visible);
        }

        if self.finish() < self.start() {
            log::warn!(
                "sprite {:?} frame range is reversed: start {} finish {}",
                self.base().id(),
                self.start(),
                self.finish()
            );
        }
    }

    /// Snapshot of the configurable fields, the previous image is not included
    pub fn to_settings(&self) -> SpriteSettings {
        SpriteSettings {
            image_name: self.image_name().map(str::to_string),
            start: Some(self.start()),
            finish: Some(self.finish()),
            current_index: Some(self.current_index()),
            x_array: self.x_array().map(<[i32]>::to_vec),
            y_array: self.y_array().map(<[i32]>::to_vec),
            prev_change: Some(self.is_prev_change()),
            visible: Some(self.base().is_visible()),
        }
    }
}
